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
//! Text rendering of boards.
use std::fmt::{self, Write};

use seabattle::{Board, CellState};

/// How a single cell is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Glyph {
    Unknown,
    Ship,
    Hit,
    Miss,
    Cleared,
}

impl Glyph {
    fn for_cell(cell: CellState, reveal: bool) -> Self {
        match cell {
            CellState::Ship if reveal => Glyph::Ship,
            CellState::Ship | CellState::Empty => Glyph::Unknown,
            CellState::Hit => Glyph::Hit,
            CellState::Miss => Glyph::Miss,
            CellState::SunkMarker => Glyph::Cleared,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Glyph::Unknown => "O",
            Glyph::Ship => "■",
            Glyph::Hit => "X",
            Glyph::Miss => "T",
            Glyph::Cleared => ".",
        })
    }
}

/// Render the board as a grid with 1-indexed row and column labels. Ships are drawn only
/// if the board is not concealed or `reveal` is set.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let reveal = reveal || !board.is_concealed();
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write!(out, "   |");
    for col in 1..=board.size() {
        let _ = write!(out, "{:^4}|", col);
    }
    let _ = writeln!(out);
    for (i, row) in board.rows().enumerate() {
        let _ = write!(out, "{:>2} |", i + 1);
        for cell in row {
            let _ = write!(out, "{:^4}|", Glyph::for_cell(cell, reveal));
        }
        let _ = writeln!(out);
    }
    out
}

/// The legend printed with the greeting.
pub const LEGEND: &str = "    O - not yet shot
    ■ - your ship
    X - hit
    T - miss
    . - next to a sunk ship";

#[cfg(test)]
mod tests {
    use seabattle::{Orientation, Position, Ship, SquareDimensions};

    use super::*;

    fn sample() -> Board {
        let mut board = Board::new(SquareDimensions::new(3));
        board
            .add_ship(Ship::new(2, Position::new(0, 0), Orientation::Horizontal))
            .unwrap();
        board.reset_targeting_state();
        board.shoot(Position::new(0, 0)).unwrap();
        board.shoot(Position::new(2, 2)).unwrap();
        board
    }

    #[test]
    fn shows_own_ships() {
        let text = render_board(&sample(), false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "   | 1  | 2  | 3  |");
        assert_eq!(lines[1], " 1 | X  | ■  | O  |");
        assert_eq!(lines[3], " 3 | O  | O  | T  |");
    }

    #[test]
    fn hides_concealed_ships() {
        let mut board = sample();
        board.set_concealed(true);
        let text = render_board(&board, false);
        assert!(!text.contains('■'));
        assert!(text.contains('X'));
        assert!(render_board(&board, true).contains('■'));
    }
}
