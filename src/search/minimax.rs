//! Exhaustive minimax over tic-tac-toe
//!
//! Scores are exact and depth-blind: a win is +1 for the searching side
//! however deep it lies, a loss is -1 and a draw 0. Two moves leading to
//! wins at different depths are therefore equal, and the first one in
//! row-major order is played.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Player, Position};

/// Score of a position the searching side has won
pub const WIN: i32 = 1;
/// Score of a drawn position
pub const DRAW: i32 = 0;
/// Score of a position the searching side has lost
pub const LOSS: i32 = -1;

/// Counters for the most recent search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions passed to `evaluate`, root candidates included
    pub nodes: u64,
}

/// Minimax searcher playing a fixed mark
#[derive(Debug, Clone)]
pub struct Minimax {
    ai: Player,
    stats: SearchStats,
}

impl Minimax {
    /// Search on behalf of `ai`; the other mark is the opponent.
    pub fn new(ai: Player) -> Self {
        Self {
            ai,
            stats: SearchStats::default(),
        }
    }

    pub fn ai(&self) -> Player {
        self.ai
    }

    pub fn opponent(&self) -> Player {
        self.ai.opponent()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Minimax value of `board` with `ai` to move when `maximizing`, the
    /// opponent otherwise.
    ///
    /// The board is mutated while searching and restored before returning.
    pub fn evaluate(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.stats.nodes += 1;

        if let Some(winner) = board.winner() {
            return if winner == self.ai { WIN } else { LOSS };
        }
        if board.is_full() {
            return DRAW;
        }

        let mover = if maximizing { self.ai } else { self.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in board.empty_positions() {
            let score = board.with_mark(pos, mover, |b| self.evaluate(b, !maximizing));
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Every empty cell paired with the value of playing `ai` there, row-major.
    pub fn scored_moves(&mut self, board: &mut Board) -> Vec<(Position, i32)> {
        self.reset_stats();
        let scored: Vec<(Position, i32)> = board
            .empty_positions()
            .into_iter()
            .map(|pos| {
                let score = board.with_mark(pos, self.ai, |b| self.evaluate(b, false));
                (Position::from_cell(pos), score)
            })
            .collect();

        debug!(
            "scored {} candidate moves for {} ({} nodes)",
            scored.len(),
            self.ai,
            self.stats.nodes
        );
        scored
    }

    /// Best cell for `ai`, or `None` when the board is full.
    ///
    /// Only a strictly better score replaces the current choice, so ties go
    /// to the first cell in row-major order. The caller is expected to stop
    /// asking once the game has a winner.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Position> {
        let scored = self.scored_moves(board);
        let best = best_scored(&scored);

        if let Some((position, score)) = best {
            debug!("{} plays {position} with value {score}", self.ai);
        }
        best.map(|(position, _)| position)
    }
}

/// Highest-scoring entry; only a strictly greater score displaces an
/// earlier one.
pub fn best_scored(scored: &[(Position, i32)]) -> Option<(Position, i32)> {
    let mut best: Option<(Position, i32)> = None;
    for &(position, score) in scored {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }
    best
}

/// Validate a caller-supplied board and pick the move for `ai`.
///
/// The caller's board is left untouched; the search runs on a copy.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidBoardState`] if the board could not arise
/// from alternating play.
pub fn choose_game_move(board: &Board, ai: Player) -> crate::Result<Option<Position>> {
    board.validate()?;
    let mut scratch = *board;
    Ok(Minimax::new(ai).choose_move(&mut scratch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_evaluate_terminal_positions() {
        let mut engine = Minimax::new(Player::O);

        let mut won = board("OOOXX.X..");
        assert_eq!(engine.evaluate(&mut won, true), WIN);
        assert_eq!(engine.evaluate(&mut won, false), WIN);

        let mut lost = board("XXXOO....");
        assert_eq!(engine.evaluate(&mut lost, true), LOSS);
    }

    #[test]
    fn test_evaluate_full_draw_is_zero_both_ways() {
        let mut engine = Minimax::new(Player::O);
        let mut drawn = board("XOXXOOOXX");
        assert_eq!(engine.evaluate(&mut drawn, true), DRAW);
        assert_eq!(engine.evaluate(&mut drawn, false), DRAW);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut engine = Minimax::new(Player::X);
        let mut empty = Board::new();
        assert_eq!(engine.evaluate(&mut empty, true), DRAW);
        assert_eq!(empty, Board::new());
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to play: completing the middle column wins.
        // X O X
        // X O .
        // . . .
        let mut engine = Minimax::new(Player::O);
        let mut b = board("XOXXO....");
        assert_eq!(engine.choose_move(&mut b), Some(Position::new(2, 1).unwrap()));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X threatens the top row; O must take (0, 2).
        let mut engine = Minimax::new(Player::O);
        let mut b = board("XX..O....");
        assert_eq!(engine.choose_move(&mut b), Some(Position::new(0, 2).unwrap()));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut engine = Minimax::new(Player::X);
        let mut b = board("XOXXOOOXX");
        assert_eq!(engine.choose_move(&mut b), None);
    }

    #[test]
    fn test_scored_moves_row_major() {
        let mut engine = Minimax::new(Player::X);
        let mut b = board("XOXOXO...");
        let scored = engine.scored_moves(&mut b);
        let cells: Vec<usize> = scored.iter().map(|(p, _)| p.index()).collect();
        assert_eq!(cells, vec![6, 7, 8]);
        // X wins by completing either diagonal through 6 or 8
        assert_eq!(scored[0].1, WIN);
        assert_eq!(scored[2].1, WIN);
        assert!(engine.stats().nodes > 0);
    }

    #[test]
    fn test_best_scored_keeps_first_of_ties() {
        let at = Position::from_cell;
        let scored = vec![(at(1), 0), (at(3), 1), (at(5), 1), (at(7), -1)];
        assert_eq!(best_scored(&scored), Some((at(3), 1)));
        assert_eq!(best_scored(&[]), None);
    }

    #[test]
    fn test_choose_game_move_rejects_invalid_board() {
        let b = board("XXX......");
        assert!(matches!(
            choose_game_move(&b, Player::O),
            Err(crate::Error::InvalidBoardState { .. })
        ));
    }

    #[test]
    fn test_choose_game_move_leaves_board_untouched() {
        let b = board("X...O...X");
        let before = b;
        let chosen = choose_game_move(&b, Player::O).unwrap();
        assert!(chosen.is_some());
        assert_eq!(b, before);
    }
}
