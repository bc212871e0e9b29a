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
use std::fmt;

/// The coordinates of a cell on the board.
///
/// Coordinates are signed so that the neighbours of edge cells, and shots typed in by a
/// human, can be represented and then rejected as out of bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    /// Row of the cell, 0-indexed.
    pub x: i32,
    /// Column of the cell, 0-indexed.
    pub y: i32,
}

impl Position {
    /// Construct a [`Position`] from the given `x` and `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get a copy of this position shifted by the given offsets.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Iterate the 3x3 block of positions centred on this one, including this position
    /// itself. No bounds checking is done.
    pub fn neighbourhood(self) -> impl Iterator<Item = Position> {
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| self.offset(dx, dy)))
    }
}

impl From<(i32, i32)> for Position {
    /// Construct a [`Position`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    /// Convert the [`Position`] into an `(x, y)` pair.
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
