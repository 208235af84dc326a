//! Plain text save files
//!
//! ```text
//! Player 1,<name>
//! Player 2,<name>
//! Who,<1|2>
//! Board
//! <24 lines of 6 comma separated cells, layer 0 row 0 first>
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::{
    board::{Cell, Grid, Player},
    error::PersistenceError,
    game::GameState,
    COLUMNS, LAYERS, ROWS,
};

const PLAYER_ONE_KEY: &str = "Player 1";
const PLAYER_TWO_KEY: &str = "Player 2";
const WHO_KEY: &str = "Who";
const BOARD_KEY: &str = "Board";

pub fn save<P: AsRef<Path>>(state: &GameState, path: P) -> Result<(), PersistenceError> {
    let mut file = BufWriter::new(File::create(path)?);
    write_game(state, &mut file)?;
    file.flush()?;
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<GameState, PersistenceError> {
    read_game(BufReader::new(File::open(path)?))
}

pub fn write_game<W: Write>(state: &GameState, writer: &mut W) -> Result<(), PersistenceError> {
    for name in [&state.player_one_name, &state.player_two_name] {
        if name.contains(|c: char| c == '\n' || c == '\r') {
            return Err(PersistenceError::UnsupportedName { name: name.clone() });
        }
    }

    writeln!(writer, "{},{}", PLAYER_ONE_KEY, state.player_one_name)?;
    writeln!(writer, "{},{}", PLAYER_TWO_KEY, state.player_two_name)?;
    writeln!(writer, "{},{}", WHO_KEY, state.current_player.number())?;
    writeln!(writer, "{}", BOARD_KEY)?;

    for layer in 0..LAYERS {
        for row in state.board.layer(layer).iter() {
            let values: Vec<String> = row.iter().map(|cell| cell.digit().to_string()).collect();
            writeln!(writer, "{}", values.join(","))?;
        }
    }
    Ok(())
}

/// Reads a game back in the order `write_game` produces it
///
/// Cell values are checked to be 0, 1 or 2, but gravity is not enforced.
pub fn read_game<R: BufRead>(reader: R) -> Result<GameState, PersistenceError> {
    let mut lines = Lines {
        inner: reader.lines(),
        line: 0,
    };

    let player_one_name = lines.field(PLAYER_ONE_KEY)?;
    let player_two_name = lines.field(PLAYER_TWO_KEY)?;

    let who = lines.field(WHO_KEY)?;
    let current_player = who
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Player::from_number)
        .ok_or_else(|| lines.error(format!("expected player 1 or 2, found '{}'", who)))?;

    let marker = lines.next_line()?;
    if marker.trim() != BOARD_KEY {
        return Err(lines.error(format!("expected '{}', found '{}'", BOARD_KEY, marker)));
    }

    let mut board = Grid::new();
    for layer in 0..LAYERS {
        for row in 0..ROWS {
            let text = lines.next_line()?;
            let values: Vec<&str> = text.split(',').collect();
            if values.len() != COLUMNS {
                return Err(lines.error(format!(
                    "expected {} cells, found {}",
                    COLUMNS,
                    values.len()
                )));
            }
            for (column, value) in values.iter().enumerate() {
                let cell = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .and_then(Cell::from_digit)
                    .ok_or_else(|| lines.error(format!("invalid cell value '{}'", value)))?;
                board.set(layer, row, column, cell);
            }
        }
    }

    Ok(GameState {
        player_one_name,
        player_two_name,
        current_player,
        board,
    })
}

// line reader that remembers where it is for error messages
struct Lines<I> {
    inner: I,
    line: usize,
}

impl<I: Iterator<Item = std::io::Result<String>>> Lines<I> {
    fn error(&self, reason: String) -> PersistenceError {
        PersistenceError::Parse {
            line: self.line,
            reason,
        }
    }

    fn next_line(&mut self) -> Result<String, PersistenceError> {
        self.line += 1;
        match self.inner.next() {
            Some(line) => Ok(line?.trim_end_matches('\r').to_string()),
            None => Err(self.error("unexpected end of file".to_string())),
        }
    }

    // `<key>,<value>`, where the value may itself contain commas
    fn field(&mut self, key: &str) -> Result<String, PersistenceError> {
        let text = self.next_line()?;
        match text.split_once(',') {
            Some((found, value)) if found == key => Ok(value.to_string()),
            _ => Err(self.error(format!("expected '{},<value>', found '{}'", key, text))),
        }
    }
}
