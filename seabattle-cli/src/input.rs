// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Reading shots typed in by the player.
use std::io::{self, BufRead, Write};

use log::error;
use once_cell::sync::Lazy;
use regex::Regex;

use seabattle::{CannotShootReason, CoordinateInput, ShotError};

/// Two integers separated by whitespace or a comma.
static COORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<x>[+-]?[0-9]+)(?:\s*,\s*|\s+)(?P<y>[+-]?[0-9]+)$").unwrap()
});

/// Why a line could not be read as coordinates.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseFailure {
    /// Not two numbers.
    Shape,
    /// A number too large to be a coordinate.
    TooLarge,
}

/// Parse a `row column` pair, both counted from 1. Range checking is left to the board.
pub fn parse_coordinates(line: &str) -> Result<(i32, i32), ParseFailure> {
    let captures = COORDS.captures(line.trim()).ok_or(ParseFailure::Shape)?;
    let x: i32 = captures["x"].parse().map_err(|_| ParseFailure::TooLarge)?;
    let y: i32 = captures["y"].parse().map_err(|_| ParseFailure::TooLarge)?;
    Ok((x, y))
}

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`.
    pub fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

impl<B: BufRead> CoordinateInput for InputReader<B> {
    fn read_coordinates(&mut self) -> (i32, i32) {
        let read = self.read_input("Enter row and column (e.g. 2 5):", |line| {
            match parse_coordinates(line) {
                Ok(coords) => Some(coords),
                Err(ParseFailure::Shape) => {
                    println!("Enter exactly two whole numbers: the row, then the column.");
                    None
                }
                Err(ParseFailure::TooLarge) => {
                    println!("That number is far too large.");
                    None
                }
            }
        });
        match read {
            Ok(coords) => coords,
            Err(err) => {
                error!("failed to read from stdin: {}", err);
                std::process::exit(1);
            }
        }
    }

    fn report_rejection(&mut self, err: &ShotError) {
        match err.reason() {
            CannotShootReason::OutOfBounds => println!("That cell is off the board."),
            CannotShootReason::RepeatShot => {
                println!("You already know what is there, pick another cell.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_and_comma_separated() {
        assert_eq!(parse_coordinates("2 5"), Ok((2, 5)));
        assert_eq!(parse_coordinates("  3,4 "), Ok((3, 4)));
        assert_eq!(parse_coordinates("1 , 6"), Ok((1, 6)));
        assert_eq!(parse_coordinates("0 -1"), Ok((0, -1)));
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(parse_coordinates("2"), Err(ParseFailure::Shape));
        assert_eq!(parse_coordinates("a b"), Err(ParseFailure::Shape));
        assert_eq!(parse_coordinates("1 2 3"), Err(ParseFailure::Shape));
        assert_eq!(parse_coordinates("1.5 2"), Err(ParseFailure::Shape));
        assert_eq!(
            parse_coordinates("99999999999 1"),
            Err(ParseFailure::TooLarge)
        );
    }

    #[test]
    fn reader_skips_bad_lines() {
        let mut reader = InputReader::new(&b"hello\n4 4\n"[..]);
        assert_eq!(reader.read_coordinates(), (4, 4));
    }
}
