use anyhow::{anyhow, Result};
use clap::Parser;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

use connect4_3d::{
    advisor::suggest_move,
    persistence::{load, save},
    render::render,
    GameOver, GameState, Grid, Outcome,
};

#[derive(Parser, Debug, Default)]
#[command(name = "connect4_3d", about = "Four in a row on a 4x6x6 grid")]
struct Args {
    /// Name of player 1 ("C" for a computer player)
    #[arg(long)]
    player_one: Option<String>,

    /// Name of player 2 ("C" for a computer player)
    #[arg(long)]
    player_two: Option<String>,

    /// Resume a saved game instead of starting a new one
    #[arg(long, conflicts_with_all = ["player_one", "player_two"])]
    load: Option<PathBuf>,

    /// Print the board without colours
    #[arg(long)]
    plain: bool,
}

/// One interactive game over any line-based input and terminal-like output
struct Session<R, W> {
    input: R,
    output: W,
    plain: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, output: W, plain: bool) -> Self {
        Self {
            input,
            output,
            plain,
        }
    }

    // fails once the input is exhausted, every caller would otherwise re-prompt forever
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Err(anyhow!("input closed"));
        }
        Ok(buffer.trim().to_string())
    }

    fn display(&mut self, grid: &Grid) -> Result<()> {
        let text = render(grid);
        if self.plain {
            writeln!(self.output, "{}", text)?;
            return Ok(());
        }

        for character in text.chars() {
            let content = match character {
                '1' => style(character).attribute(Attribute::Bold).with(Color::Red),
                '2' => style(character).attribute(Attribute::Bold).with(Color::Yellow),
                _ => style(character),
            };
            self.output.queue(PrintStyledContent(content))?;
        }
        self.output.queue(PrintStyledContent(style('\n')))?;
        self.output.flush()?;
        Ok(())
    }

    fn start(&mut self, args: &Args) -> Result<GameState> {
        if let Some(path) = &args.load {
            let game = load(path)?;
            writeln!(self.output, "Game loaded")?;
            return Ok(game);
        }

        let player_one = match &args.player_one {
            Some(name) => name.clone(),
            None => self.prompt("Input Player 1's name (or type 'load' to resume playing): ")?,
        };
        if args.player_one.is_none() && player_one.to_lowercase() == "load" {
            // keep asking until a file loads, a bad filename shouldn't end the session
            loop {
                let filename = self.prompt("Enter the filename of your game: ")?;
                match load(&filename) {
                    Ok(game) => {
                        writeln!(self.output, "Game loaded")?;
                        return Ok(game);
                    }
                    Err(err) => writeln!(self.output, "Could not load {}: {}", filename, err)?,
                }
            }
        }

        let player_two = match &args.player_two {
            Some(name) => name.clone(),
            None => self.prompt("Enter Player 2's name: ")?,
        };
        Ok(GameState::new(player_one, player_two))
    }

    // asks the current human player for a move until one is accepted
    fn human_turn(&mut self, game: &GameState) -> Result<GameState> {
        loop {
            let input = self.prompt("Enter your move ('Xx'), or type 'save' to save the game: ")?;

            if input.to_lowercase() == "save" {
                let filename = self.prompt("Enter filename to save the game: ")?;
                match save(game, &filename) {
                    Ok(()) => writeln!(self.output, "Game saved")?,
                    Err(err) => writeln!(self.output, "Could not save {}: {}", filename, err)?,
                }
                continue;
            }

            match game.apply_move(&input) {
                Ok(next) => return Ok(next),
                Err(err) => writeln!(self.output, "{}. Input again", err)?,
            }
        }
    }

    /// Plays turns until the game is won or drawn
    fn play(&mut self, mut game: GameState) -> Result<Outcome> {
        loop {
            self.display(&game.board)?;

            let player = game.current_player;
            writeln!(
                self.output,
                "\n{} (Player {})'s turn:",
                game.current_name(),
                player.number()
            )?;

            game = if game.current_is_computer() {
                match suggest_move(&game) {
                    Ok(column) => {
                        writeln!(self.output, "Computer plays: {}", column)?;
                        game.apply_move(&column)?
                    }
                    Err(GameOver) => {
                        writeln!(self.output, "Game over! It's a draw.")?;
                        return Ok(Outcome::Draw);
                    }
                }
            } else {
                self.human_turn(&game)?
            };

            let outcome = game.evaluate();
            if outcome.is_finished() {
                self.display(&game.board)?;
                match outcome.winner() {
                    Some(winner) => writeln!(
                        self.output,
                        "\n{} (Player {}) wins",
                        game.player_name(winner),
                        winner.number()
                    )?,
                    None => writeln!(self.output, "\nIt's a draw. Game over")?,
                }
                return Ok(outcome);
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let stdin = stdin();
    let mut session = Session::new(stdin.lock(), stdout(), args.plain);

    writeln!(session.output, "Welcome to 3D Connect 4\n")?;

    let game = session.start(&args)?;
    session.play(game)?;
    Ok(())
}
