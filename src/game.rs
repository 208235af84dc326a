//! Game state and the move engine

use crate::{
    board::{Cell, Grid, Player},
    coordinate::column_to_indices,
    error::*,
    outcome::{self, Outcome},
};

/// Name that marks a player as computer controlled
pub const COMPUTER_NAME: &str = "C";

/// A snapshot of a game between two named players
///
/// Moves never modify a `GameState`; [`GameState::apply_move`] returns the
/// following state, so earlier snapshots remain valid.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GameState {
    pub player_one_name: String,
    pub player_two_name: String,
    pub current_player: Player,
    pub board: Grid,
}

impl GameState {
    /// Starts a game on an empty grid with player 1 to move
    pub fn new<S1: Into<String>, S2: Into<String>>(player_one_name: S1, player_two_name: S2) -> Self {
        Self {
            player_one_name: player_one_name.into(),
            player_two_name: player_two_name.into(),
            current_player: Player::One,
            board: Grid::new(),
        }
    }

    /// Plays a whitespace separated list of column identifiers from a new game
    pub fn from_moves<S1: Into<String>, S2: Into<String>>(
        player_one_name: S1,
        player_two_name: S2,
        moves: &str,
    ) -> Result<Self, MoveRejected> {
        moves
            .split_whitespace()
            .try_fold(Self::new(player_one_name, player_two_name), |game, column| {
                game.apply_move(column)
            })
    }

    /// Drops a tile for the current player and hands the turn over
    pub fn apply_move(&self, column_id: &str) -> Result<Self, MoveRejected> {
        let reject = |cause| MoveRejected {
            column: column_id.to_string(),
            cause,
        };

        let mut chars = column_id.chars();
        let well_formed = match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => first.is_alphabetic() && second.is_alphabetic(),
            _ => false,
        };
        if !well_formed {
            return Err(reject(ColumnError::InvalidFormat {
                column: column_id.to_string(),
            }));
        }

        let (layer, row, column) = column_to_indices(column_id, &self.board).map_err(reject)?;

        let mut next = self.clone();
        next.board.set(layer, row, column, Cell::from(self.current_player));
        next.current_player = self.current_player.other();
        Ok(next)
    }

    pub fn evaluate(&self) -> Outcome {
        outcome::evaluate(&self.board)
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one_name,
            Player::Two => &self.player_two_name,
        }
    }

    pub fn current_name(&self) -> &str {
        self.player_name(self.current_player)
    }

    /// Whether the player to move is played by the advisor
    pub fn current_is_computer(&self) -> bool {
        self.current_name() == COMPUTER_NAME
    }
}

/// Free-function form of [`GameState::new`]
pub fn new_game<S1: Into<String>, S2: Into<String>>(player_one_name: S1, player_two_name: S2) -> GameState {
    GameState::new(player_one_name, player_two_name)
}

/// Free-function form of [`GameState::apply_move`]
pub fn apply_move(state: &GameState, column_id: &str) -> Result<GameState, MoveRejected> {
    state.apply_move(column_id)
}
