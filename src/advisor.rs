//! Move enumeration and the computer player's (very simple) policy

use crate::{coordinate::format_column, error::GameOver, game::GameState, COLUMNS, ROWS};

/// Identifiers of every column with room for another tile, row by row
pub fn list_valid_moves(state: &GameState) -> Vec<String> {
    let mut moves = Vec::new();
    for row in 0..ROWS {
        for column in 0..COLUMNS {
            if state.board.playable(row, column) {
                moves.push(format_column(row, column));
            }
        }
    }
    moves
}

/// The first playable column
pub fn suggest_move(state: &GameState) -> Result<String, GameOver> {
    list_valid_moves(state).into_iter().next().ok_or(GameOver)
}
