use crate::{COLUMNS, LAYERS, ROWS};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player who moves after this one
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The player's number as shown on the board and in save files
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The owner of the tile in this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    /// 0 for an empty cell, otherwise the owner's number
    pub fn digit(&self) -> u8 {
        self.player().map_or(0, Player::number)
    }

    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Cell::Empty),
            1 => Some(Cell::PlayerOne),
            2 => Some(Cell::PlayerTwo),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// The playing volume, indexed as `[layer][row][column]` with layer 0 at the bottom
///
/// Grids are small plain values, so copying one is how game states stay immutable.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: [[[Cell; COLUMNS]; ROWS]; LAYERS],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[[Cell::Empty; COLUMNS]; ROWS]; LAYERS],
        }
    }

    /// Panics if any index is outside the grid
    pub fn get(&self, layer: usize, row: usize, column: usize) -> Cell {
        self.cells[layer][row][column]
    }

    /// Panics if any index is outside the grid
    pub fn set(&mut self, layer: usize, row: usize, column: usize, cell: Cell) {
        self.cells[layer][row][column] = cell;
    }

    /// Bounds-checked lookup for signed coordinates
    pub fn get_signed(&self, layer: i32, row: i32, column: i32) -> Option<Cell> {
        if layer < 0
            || layer >= LAYERS as i32
            || row < 0
            || row >= ROWS as i32
            || column < 0
            || column >= COLUMNS as i32
        {
            return None;
        }
        Some(self.cells[layer as usize][row as usize][column as usize])
    }

    /// The lowest empty layer of a column, or `None` when the column is full
    pub fn lowest_empty_layer(&self, row: usize, column: usize) -> Option<usize> {
        (0..LAYERS).find(|&layer| self.cells[layer][row][column].is_empty())
    }

    /// Whether a tile can still be dropped into the column
    pub fn playable(&self, row: usize, column: usize) -> bool {
        self.cells[LAYERS - 1][row][column].is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .all(|cell| !cell.is_empty())
    }

    /// One layer, as rows of cells
    pub fn layer(&self, layer: usize) -> &[[Cell; COLUMNS]; ROWS] {
        &self.cells[layer]
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
