use std::fmt;

use crate::{
    board::Grid,
    coordinate::{COLUMN_LABELS, ROW_LABELS},
    COLUMNS, LAYERS, ROWS,
};

const SEPARATOR: &str = "-+-+-+-+-+-+-";

/// Draws the layers side by side, bottom layer on the left
///
/// ```text
///    Layer 1    |   Layer 2    |   Layer 3    |   Layer 4
///   A|B|C|D|E|F |  A|B|C|D|E|F |  A|B|C|D|E|F |  A|B|C|D|E|F
///  -+-+-+-+-+-+-| -+-+-+-+-+-+-| -+-+-+-+-+-+-| -+-+-+-+-+-+-
/// a|1| | | | |  |a| | | | | |  |a| | | | | |  |a| | | | | |
/// ```
pub fn render(grid: &Grid) -> String {
    let titles: Vec<String> = (1..=LAYERS).map(|n| format!("   Layer {}", n)).collect();
    let mut out = titles.join("    |");
    out.push('\n');

    let header = COLUMN_LABELS[..COLUMNS]
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join("|");
    out.push_str("  ");
    out.push_str(&vec![header; LAYERS].join(" |  "));
    out.push('\n');

    out.push(' ');
    out.push_str(&vec![SEPARATOR; LAYERS].join("| "));
    out.push('\n');

    for (row, &label) in ROW_LABELS[..ROWS].iter().enumerate() {
        out.push(label);
        for layer in 0..LAYERS {
            let cells = grid.layer(layer)[row]
                .iter()
                .map(|cell| match cell.digit() {
                    0 => " ".to_string(),
                    digit => digit.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            out.push('|');
            out.push_str(&cells);
            if layer < LAYERS - 1 {
                out.push_str(" |");
                out.push(label);
            }
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
