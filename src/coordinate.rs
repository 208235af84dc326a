//! Conversion between column identifiers such as `"Ab"` and grid indices
//!
//! An identifier holds one upper case column letter (`A`-`F`) and one lower
//! case row letter (`a`-`f`) in either order. Identifiers produced by this
//! module always put the column letter first.

use crate::{board::Grid, error::*, COLUMNS, ROWS};

pub const ROW_LABELS: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];
pub const COLUMN_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

fn row_index(letter: char) -> Option<usize> {
    ROW_LABELS[..ROWS].iter().position(|&l| l == letter)
}

fn column_index(letter: char) -> Option<usize> {
    COLUMN_LABELS[..COLUMNS].iter().position(|&l| l == letter)
}

/// Parses an identifier into `(row, column)` without looking at the grid
pub fn parse_column(column_id: &str) -> Result<(usize, usize), ColumnError> {
    let invalid = || ColumnError::InvalidFormat {
        column: column_id.to_string(),
    };

    let mut chars = column_id.chars();
    let (first, second) = match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None) => (first, second),
        _ => return Err(invalid()),
    };

    match (row_index(first), column_index(second)) {
        (Some(row), Some(column)) => Ok((row, column)),
        _ => match (column_index(first), row_index(second)) {
            (Some(column), Some(row)) => Ok((row, column)),
            _ => Err(invalid()),
        },
    }
}

/// Resolves an identifier to the `(layer, row, column)` of the cell a dropped
/// tile would land in
pub fn column_to_indices(
    column_id: &str,
    grid: &Grid,
) -> Result<(usize, usize, usize), ColumnError> {
    let (row, column) = parse_column(column_id)?;

    match grid.lowest_empty_layer(row, column) {
        Some(layer) => Ok((layer, row, column)),
        None => Err(ColumnError::ColumnFull {
            column: column_id.to_string(),
        }),
    }
}

/// Formats `[row, column]` or `[layer, row, column]` as an identifier, column letter first
///
/// The layer component, when present, is not checked.
pub fn indices_to_column(indices: &[usize]) -> Result<String, IndexOutOfRange> {
    let out_of_range = || IndexOutOfRange {
        indices: indices.to_vec(),
    };

    let (row, column) = match *indices {
        [row, column] | [_, row, column] => (row, column),
        _ => return Err(out_of_range()),
    };
    if row >= ROWS || column >= COLUMNS {
        return Err(out_of_range());
    }

    Ok(format_column(row, column))
}

/// Infallible formatting for indices already known to be on the board
pub(crate) fn format_column(row: usize, column: usize) -> String {
    let mut id = String::with_capacity(2);
    id.push(COLUMN_LABELS[column]);
    id.push(ROW_LABELS[row]);
    id
}
