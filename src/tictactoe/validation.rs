//! Board well-formedness checks
//!
//! The searches assume a legally shaped board. Callers that accept boards
//! from outside (the CLI, [`crate::search::choose_game_move`]) run these
//! checks first and surface `InvalidBoardState`.

use super::board::{Board, Player};

impl Board {
    /// Check that the board could arise from alternating play.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardState`] if the mark counts differ by
    /// more than one, or if both players own a completed line.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let count = self.count_pieces();
        let invalid = |reason: &str| crate::Error::InvalidBoardState {
            x_count: count.x,
            o_count: count.o,
            reason: reason.to_string(),
        };

        if count.x.abs_diff(count.o) > 1 {
            return Err(invalid("mark counts must differ by at most one"));
        }

        if self.has_won(Player::X) && self.has_won(Player::O) {
            return Err(invalid("both players cannot have winning lines"));
        }

        Ok(())
    }

    /// Boolean form of [`Board::validate`]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
