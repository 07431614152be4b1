//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player, Position},
    lines::LineAnalyzer,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome seen from one side: +1 win, 0 draw, -1 loss
    pub fn score_for(self, player: Player) -> i32 {
        match self {
            GameOutcome::Win(winner) if winner == player => 1,
            GameOutcome::Win(_) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// A game in progress or finished, with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub first: Player,
    pub board: Board,
    pub to_move: Player,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game with `first` to move on an empty board
    pub fn new(first: Player) -> Self {
        Game {
            first,
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns `GameOver` once the game is decided, `InvalidPosition` for an
    /// index outside 0-8 and `InvalidMove` for an occupied cell.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move;
        self.board.place(position, player)?;
        self.moves.push(Move { position, player });
        self.to_move = player.opponent();

        if let Some(winner) = self.board.winner() {
            self.outcome = Some(GameOutcome::Win(winner));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        Ok(())
    }

    /// Play a move given as row and column
    pub fn play_at(&mut self, position: Position) -> Result<(), crate::Error> {
        self.play(position.index())
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The completed line, if the game was won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LineAnalyzer::winning_line(&self.board.cells).map(|(_, line)| line)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_alternate() {
        let mut game = Game::new(Player::O);
        game.play(0).unwrap();
        game.play(4).unwrap();
        assert_eq!(game.moves[0].player, Player::O);
        assert_eq!(game.moves[1].player, Player::X);
        assert_eq!(game.to_move, Player::O);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new(Player::X);
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.winning_line(), Some([0, 1, 2]));
        assert!(matches!(game.play(8), Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_occupied_cell_rejected_without_side_effects() {
        let mut game = Game::new(Player::X);
        game.play(4).unwrap();
        assert!(matches!(
            game.play(4),
            Err(crate::Error::InvalidMove { position: 4 })
        ));
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.to_move, Player::O);
    }

    #[test]
    fn test_draw_detection() {
        let mut game = Game::new(Player::X);
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_score_for() {
        assert_eq!(GameOutcome::Win(Player::X).score_for(Player::X), 1);
        assert_eq!(GameOutcome::Win(Player::X).score_for(Player::O), -1);
        assert_eq!(GameOutcome::Draw.score_for(Player::O), 0);
    }
}
