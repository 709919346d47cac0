//! Terminal front end: stdin move input and an ASCII board.
//!
//! Moves are read as whitespace-separated integer pairs, `coin spaces`,
//! and may span lines. Tokens that are not integers are reported and
//! skipped.
//!
//! The board is drawn one cell per position from 1 to the board length,
//! with each occupied cell labelled by its coin index:
//!
//! ```text
//! + - - - + - - - + - - - +
//!
//! |       |   0   |   1   |
//!
//! + - - - + - - - + - - - +
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::core::{Move, MoveError, PlayerId};
use crate::play::{BoardRenderer, MoveInput, ResultAnnouncer};

/// Render the strip as the three-row ASCII board.
#[must_use]
pub fn draw_board(positions: &[i64], board_length: i64) -> String {
    let mut border = String::from("+");
    let mut cells = String::from("|");

    for cell in 1..=board_length {
        border.push_str(" - - - +");
        match positions.iter().position(|&p| p == cell) {
            Some(coin) => cells.push_str(&format!("   {coin}   |")),
            None => cells.push_str("       |"),
        }
    }

    format!("{border}\n\n{cells}\n\n{border}")
}

fn say(writer: &mut impl Write, text: &str) {
    if let Err(err) = writeln!(writer, "{text}").and_then(|()| writer.flush()) {
        warn!(%err, "failed to write to console");
    }
}

/// Reads moves from a line-oriented reader, prompting on a writer.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
    pending: VecDeque<String>,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Input bound to the process's stdin, prompting on stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Create an input over the given streams.
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            pending: VecDeque::new(),
        }
    }

    /// Consume the input, returning the prompt writer.
    pub fn into_prompt(self) -> W {
        self.prompt
    }

    /// Next integer token, skipping malformed ones. `None` on EOF.
    fn next_integer(&mut self) -> Option<i64> {
        loop {
            while self.pending.is_empty() {
                let mut line = String::new();
                match self.reader.read_line(&mut line) {
                    Ok(0) => return None,
                    Ok(_) => self
                        .pending
                        .extend(line.split_whitespace().map(str::to_owned)),
                    Err(err) => {
                        warn!(%err, "failed to read move input");
                        return None;
                    }
                }
            }

            let token = self.pending.pop_front()?;
            match token.parse::<i64>() {
                Ok(value) => return Some(value),
                Err(_) => say(
                    &mut self.prompt,
                    &format!("'{token}' is not a whole number, ignoring it"),
                ),
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveInput for ConsoleInput<R, W> {
    fn next_move(&mut self, player: PlayerId) -> Option<Move> {
        say(&mut self.prompt, &format!("{player}, enter your move: "));
        let coin = self.next_integer()?;
        let spaces = self.next_integer()?;
        Some(Move::new(coin, spaces))
    }
}

/// Draws boards and results on a writer.
pub struct ConsoleOutput<W> {
    writer: W,
}

impl ConsoleOutput<io::Stdout> {
    /// Output bound to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// Create an output over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the output, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> BoardRenderer for ConsoleOutput<W> {
    fn render(&mut self, positions: &[i64], board_length: i64) {
        say(&mut self.writer, &draw_board(positions, board_length));
    }

    fn report_illegal_move(&mut self, _player: PlayerId, error: &MoveError) {
        say(&mut self.writer, &format!("Illegal move: {error}"));
    }
}

impl<W: Write> ResultAnnouncer for ConsoleOutput<W> {
    fn announce_winner(&mut self, player: PlayerId) {
        say(&mut self.writer, &format!("{player} wins!"));
    }
}
