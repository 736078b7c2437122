use crate::board::{Square, SquareParseError, BOARD_SIZE};
use crate::config::{ConsoleConfig, CoordinateStyle};
use crate::game::{Activation, GameState, Selection};
use crate::view::{glyph, notice, status_text, BoardView, Highlight};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::warn;

const HELP: &str = "\
commands:
  <square>          pick up a piece, or move the picked-up piece (e2, or 6,4)
  <from> <to>       pick up and move in one line (e2 e4)
  select <square>   same as above
  moves <square>    list legal destinations of the piece on a square
  board             show the board
  status            show whose turn it is
  new               start a new game
  quit              leave
";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),
    #[error("'{0}' needs a square")]
    MissingArgument(&'static str),
    #[error(transparent)]
    InvalidSquare(#[from] SquareParseError),
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("expected one square, or a from and a to square, got {0} words")]
    TooManySquares(usize),
    #[error("input is not valid UTF-8")]
    InvalidInput,
}

pub struct Console {
    game: GameState,
    config: ConsoleConfig,
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        Console {
            game: GameState::new(),
            config,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Command loop over any line source. Bad input, including lines that
    /// are not UTF-8, is reported and skipped; only I/O failures end it.
    pub fn run_with<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut out: W,
    ) -> anyhow::Result<()> {
        let mut line = String::new();

        write!(out, "{}", self.render_board())?;
        writeln!(out, "{}", status_text(&self.game))?;
        out.flush()?;

        loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    let e = CommandError::InvalidInput;
                    warn!("{}", e);
                    writeln!(out, "error: {}", e)?;
                    out.flush()?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            let command = line.trim();
            if matches!(command, "quit" | "exit") {
                break;
            }

            match self.handle_command(command) {
                Ok(response) => write!(out, "{}", response)?,
                Err(e) => {
                    warn!(command, "{}", e);
                    writeln!(out, "error: {}", e)?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    pub fn handle_command(&mut self, command: &str) -> Result<String, CommandError> {
        let parts: Vec<&str> = command.split_whitespace().collect();
        if parts.is_empty() {
            return Ok(String::new());
        }

        match parts[0] {
            "help" => Ok(HELP.to_string()),
            "board" | "show" => Ok(self.render_board()),
            "status" => Ok(format!("{}\n", status_text(&self.game))),
            "new" => {
                self.game = GameState::new();
                Ok(format!("{}{}\n", self.render_board(), status_text(&self.game)))
            }
            "moves" => {
                let square = self.parse_square(&parts[1..], "moves")?;
                self.handle_moves(square)
            }
            "select" | "click" => {
                let square = self.parse_square(&parts[1..], "select")?;
                Ok(self.handle_activation(square))
            }
            "quit" | "exit" => Ok(String::new()),
            cmd => {
                let first = cmd
                    .parse::<Square>()
                    .map_err(|_| CommandError::UnknownCommand(cmd.to_string()))?;
                match &parts[1..] {
                    [] => Ok(self.handle_activation(first)),
                    // "e2 e4": pick up, then move
                    [second] => {
                        let second = second.parse::<Square>()?;
                        let mut response = self.handle_activation(first);
                        if matches!(self.game.selection(), Selection::Selected(_)) {
                            response.push_str(&self.handle_activation(second));
                        }
                        Ok(response)
                    }
                    _ => Err(CommandError::TooManySquares(parts.len())),
                }
            }
        }
    }

    fn parse_square(&self, args: &[&str], command: &'static str) -> Result<Square, CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingArgument(command));
        }
        // Allow "6, 4" as well as "6,4"
        Ok(args.join("").parse()?)
    }

    fn handle_moves(&self, square: Square) -> Result<String, CommandError> {
        if self.game.piece_at(square).is_none() {
            return Err(CommandError::EmptySquare(square));
        }

        let destinations: Vec<String> = self
            .game
            .legal_destinations(square)
            .into_iter()
            .map(|to| self.format_square(to))
            .collect();

        if destinations.is_empty() {
            Ok(format!("{}: no legal moves\n", self.format_square(square)))
        } else {
            Ok(format!("{}: {}\n", self.format_square(square), destinations.join(" ")))
        }
    }

    fn handle_activation(&mut self, square: Square) -> String {
        let activation = self.game.on_square_activated(square);

        let mut response = String::new();
        match activation {
            Activation::Ignored => response.push_str("game is over, type 'new' to play again\n"),
            Activation::PickupRejected(sq) => {
                response.push_str(&format!(
                    "nothing to pick up on {} for {}\n",
                    self.format_square(sq),
                    self.game.turn()
                ));
            }
            Activation::MoveRejected { from, to } => {
                response.push_str(&format!(
                    "illegal move {} -> {}, selection cleared\n",
                    self.format_square(from),
                    self.format_square(to)
                ));
            }
            Activation::PickedUp(_) | Activation::Moved { .. } | Activation::GameWon { .. } => {
                response.push_str(&self.render_board());
            }
        }

        if let Some(message) = notice(&activation, &self.game) {
            response.push_str(&message);
            response.push('\n');
        }
        response
    }

    fn format_square(&self, square: Square) -> String {
        match self.config.coordinates {
            CoordinateStyle::Algebraic => square.to_string(),
            CoordinateStyle::Grid => format!("{},{}", square.row(), square.col()),
        }
    }

    /// Draws the board top row first. The picked-up piece is bracketed,
    /// empty targets show `*` and capturable pieces are parenthesized.
    pub fn render_board(&self) -> String {
        let view = BoardView::of(&self.game);
        let mut result = String::new();

        for (row, squares) in view.rows().iter().enumerate() {
            let label = match self.config.coordinates {
                CoordinateStyle::Algebraic => BOARD_SIZE as usize - row,
                CoordinateStyle::Grid => row,
            };
            result.push_str(&format!("{} ", label));

            for cell in squares {
                let symbol = match cell.piece {
                    Some(piece) => glyph(piece, self.config.glyphs),
                    None => '.',
                };
                let highlight = if self.config.show_highlights {
                    cell.highlight
                } else {
                    Highlight::None
                };
                let text = match highlight {
                    Highlight::None => format!(" {} ", symbol),
                    Highlight::Selected => format!("[{}]", symbol),
                    Highlight::Destination => " * ".to_string(),
                    Highlight::Capture => format!("({})", symbol),
                };
                result.push_str(&text);
            }
            result.push('\n');
        }

        result.push_str("  ");
        for col in 0..BOARD_SIZE {
            let label = match self.config.coordinates {
                CoordinateStyle::Algebraic => (b'a' + col) as char,
                CoordinateStyle::Grid => (b'0' + col) as char,
            };
            result.push_str(&format!(" {} ", label));
        }
        result.push('\n');
        result
    }
}
