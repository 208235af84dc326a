//! Win and draw detection

use crate::{
    board::{Grid, Player},
    COLUMNS, LAYERS, ROWS, WIN_LENGTH,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    PlayerOneWin,
    PlayerTwoWin,
    Ongoing,
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWin => Some(Player::One),
            Outcome::PlayerTwoWin => Some(Player::Two),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        *self != Outcome::Ongoing
    }
}

impl From<Player> for Outcome {
    fn from(winner: Player) -> Self {
        match winner {
            Player::One => Outcome::PlayerOneWin,
            Player::Two => Outcome::PlayerTwoWin,
        }
    }
}

/// One direction per undirected line through the grid, as `(layer, row, column)` steps
///
/// The order is part of the contract: when several lines are complete the
/// first one found decides the result.
pub const DIRECTIONS: [(i32, i32, i32); 13] = [
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 1, 0),
    (1, 0, 1),
    (0, 1, 1),
    (1, -1, 0),
    (1, 0, -1),
    (0, 1, -1),
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
];

/// Scans every occupied cell along every direction for a completed line
pub fn evaluate(grid: &Grid) -> Outcome {
    match first_winner(grid) {
        Some(player) => Outcome::from(player),
        None if grid.is_full() => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}

fn first_winner(grid: &Grid) -> Option<Player> {
    for layer in 0..LAYERS {
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                let cell = grid.get(layer, row, column);
                let player = match cell.player() {
                    Some(player) => player,
                    None => continue,
                };
                for &direction in DIRECTIONS.iter() {
                    if line_from(grid, (layer, row, column), direction) {
                        return Some(player);
                    }
                }
            }
        }
    }
    None
}

// do the next WIN_LENGTH - 1 cells along the direction match the start cell?
fn line_from(grid: &Grid, start: (usize, usize, usize), direction: (i32, i32, i32)) -> bool {
    let owner = grid.get(start.0, start.1, start.2);
    let (dk, dj, di) = direction;
    (1..WIN_LENGTH as i32).all(|step| {
        grid.get_signed(
            start.0 as i32 + dk * step,
            start.1 as i32 + dj * step,
            start.2 as i32 + di * step,
        ) == Some(owner)
    })
}
