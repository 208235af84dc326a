//! Rules engine for a two player, three dimensional game of 'Connect 4'
//!
//! Tiles are dropped into one of 36 columns on a 6x6 base and fall to the
//! lowest free layer of a 4 layer tall stack. The first player to line up
//! four tiles along any straight line through the grid wins.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_3d::{GameState, Outcome};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = GameState::new("Alice", "Bob");
//! for column in ["Aa", "Bb", "Aa", "Bb", "Aa", "Bb", "Aa"] {
//!     game = game.apply_move(column)?;
//! }
//!
//! assert_eq!(game.evaluate(), Outcome::PlayerOneWin);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod coordinate;

pub mod error;

pub mod game;

pub mod outcome;

pub mod advisor;

pub mod persistence;

pub mod render;


pub use board::{Cell, Grid, Player};
pub use error::*;
pub use game::GameState;
pub use outcome::Outcome;

/// The number of layers stacked along the gravity axis
pub const LAYERS: usize = 4;

/// The number of rows on each layer
pub const ROWS: usize = 6;

/// The number of columns on each layer
pub const COLUMNS: usize = 6;

/// The number of aligned tiles needed to win
pub const WIN_LENGTH: usize = 4;

// a winning line must fit along every axis
const_assert!(LAYERS >= WIN_LENGTH);
const_assert!(ROWS >= WIN_LENGTH);
const_assert!(COLUMNS >= WIN_LENGTH);

// every row and column needs a label letter
const_assert!(ROWS <= coordinate::ROW_LABELS.len());
const_assert!(COLUMNS <= coordinate::COLUMN_LABELS.len());
