//! Error types for the boardsearch crate

use thiserror::Error;

/// Main error type for the boardsearch crate
///
/// The searches themselves are total; these variants only surface at the
/// parsing, validation, game-session and export boundaries.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board size {size}: a placement grid needs at least one row")]
    InvalidBoardSize { size: usize },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid board state (X={x_count}, O={o_count}): {reason}")]
    InvalidBoardState {
        x_count: usize,
        o_count: usize,
        reason: String,
    },

    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("cell ({row}, {col}) is out of bounds (rows and columns must be 0-2)")]
    InvalidCoordinates { row: usize, col: usize },

    #[error("invalid cell '{input}' (expected an index 0-8 or `row col`)")]
    ParsePosition { input: String },

    #[error("game already over")]
    GameOver,

    #[error("invalid player '{input}' (expected 'x' or 'o')")]
    ParsePlayer { input: String },

    #[error("invalid opponent '{input}'. Expected one of: {expected}")]
    ParseOpponent { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
