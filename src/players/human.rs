//! Human player adapter: reads moves from an input stream

use std::io::{self, BufRead, BufReader, Stdin, Write};

use crate::engine::GameEngine;
use crate::error::{Error, Result};
use crate::ports::Agent;

/// Keypad legend shown before each human turn
const KEYPAD_LEGEND: &str = "[7] [8] [9]\n[4] [5] [6]\n[1] [2] [3]";

/// Map a numpad digit (1-9) to board coordinates.
///
/// The layout matches a numeric keypad: 7-8-9 is the top row, 1-2-3 the
/// bottom row.
pub fn keypad_cell(digit: usize) -> (usize, usize) {
    debug_assert!((1..=9).contains(&digit));
    ((9 - digit) / 3, (digit - 1) % 3)
}

/// Adapter that turns keyboard input into moves.
///
/// Prompts for a 1-9 keypad digit and re-prompts on anything the engine
/// would reject: unparseable input, digits out of range, and occupied cells.
/// The generic reader lets tests script the input stream.
pub struct HumanAgent<R> {
    reader: R,
}

impl HumanAgent<BufReader<Stdin>> {
    /// Create an agent reading from standard input
    pub fn from_stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> HumanAgent<R> {
    /// Create an agent reading from the given stream
    pub fn new(reader: R) -> Self {
        HumanAgent { reader }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read player input".to_string(),
            source,
        })?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> Agent for HumanAgent<R> {
    fn select_move(&mut self, engine: &GameEngine) -> Result<(usize, usize)> {
        if engine.status().is_terminal() {
            return Err(Error::NoValidMoves);
        }
        let board = engine.board();

        println!("{KEYPAD_LEGEND}");
        print!("Enter a cell (1-9): ");
        let _ = io::stdout().flush();

        loop {
            let line = self.read_line()?.ok_or(Error::InputExhausted)?;

            let digit = match line.trim().parse::<usize>() {
                Ok(d) if (1..=9).contains(&d) => d,
                _ => {
                    print!("Not a cell number, try again (1-9): ");
                    let _ = io::stdout().flush();
                    continue;
                }
            };

            let (row, col) = keypad_cell(digit);
            if !board.is_empty(row, col) {
                print!("That cell is already occupied, try again: ");
                let _ = io::stdout().flush();
                continue;
            }

            return Ok((row, col));
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
