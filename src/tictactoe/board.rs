//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(crate::Error::ParsePlayer {
                input: other.to_string(),
            }),
        }
    }
}

/// A cell coordinate on the 3x3 board.
///
/// Fields are private so every `Position` names a real cell; build one with
/// [`Position::new`], [`Position::from_index`] or [`Position::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Position at `row`, `col` (both 0-2)
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinates`] if either coordinate is 3
    /// or more.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= 3 || col >= 3 {
            return Err(crate::Error::InvalidCoordinates { row, col });
        }
        Ok(Position { row, col })
    }

    /// Build a position from a row-major index (0-8)
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        if index >= 9 {
            return Err(crate::Error::InvalidPosition { position: index });
        }
        Ok(Self::from_cell(index))
    }

    /// Position of a cell index already known to be on the board, such as
    /// one returned by [`Board::empty_positions`].
    pub(crate) fn from_cell(index: usize) -> Self {
        debug_assert!(index < 9, "cell index {index} off the board");
        Position {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index of this position
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Parse either a single index (`"4"`) or a `row col` pair (`"1 1"`, `"1,1"`).
    pub fn parse(input: &str) -> Result<Self, crate::Error> {
        let parts: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();

        let unparsable = || crate::Error::ParsePosition {
            input: input.trim().to_string(),
        };
        let parse_num = |s: &str| s.parse::<usize>().map_err(|_| unparsable());

        match parts.as_slice() {
            [index] => Self::from_index(parse_num(index)?),
            [row, col] => Self::new(parse_num(row)?, parse_num(col)?),
            _ => Err(unparsable()),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// The 3x3 grid of cells, row-major.
///
/// The board carries no turn information: the searches are told which mark
/// they play, and [`crate::tictactoe::Game`] tracks whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored, so `"XO. .X. ..O"` and `"XO..X...O"` are the
    /// same board. Exactly nine cell characters must remain.
    ///
    /// # Errors
    ///
    /// Returns error if the board does not have exactly 9 cells or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Get cell by row and column
    pub fn at(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Put a player's mark on an empty cell.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Temporarily mark an empty cell, run `f`, then clear the cell again.
    ///
    /// Every search step goes through here so the board is back to its prior
    /// contents on return, whatever `f` computed.
    ///
    /// `pos` must be empty: an occupied cell is only caught by a debug
    /// assertion, and in release builds its mark is overwritten and then
    /// cleared. The searches only pass cells from [`Board::empty_positions`].
    pub fn with_mark<R>(&mut self, pos: usize, player: Player, f: impl FnOnce(&mut Board) -> R) -> R {
        debug_assert!(self.is_empty(pos), "with_mark on occupied cell {pos}");
        self.cells[pos] = player.to_cell();
        let result = f(self);
        self.cells[pos] = Cell::Empty;
        result
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winning_line(&self.cells).map(|(player, _)| player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Side to move assuming alternating play: whoever has fewer marks, X on
    /// equal counts.
    pub fn side_to_move(&self) -> Player {
        let count = self.count_pieces();
        if count.x > count.o { Player::O } else { Player::X }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
