//! Error kinds reported by the engine
//!
//! Every error is local to the call that produced it; no operation leaves a
//! partially updated game behind.

use std::io;

/// A column identifier that could not be resolved to a playable column
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    #[error("invalid column format: '{column}'")]
    InvalidFormat { column: String },

    #[error("column {column} is full")]
    ColumnFull { column: String },
}

/// Grid indices with the wrong number of components, or a row/column off the board
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid index: {indices:?}")]
pub struct IndexOutOfRange {
    pub indices: Vec<usize>,
}

/// A move that could not be played; the game it was applied to is unchanged
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move '{column}': {cause}")]
pub struct MoveRejected {
    pub column: String,
    #[source]
    pub cause: ColumnError,
}

/// No column can accept another tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no valid moves left, the board is full")]
pub struct GameOver;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed save file at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("player name {name:?} cannot be saved, names must fit on one line")]
    UnsupportedName { name: String },
}
