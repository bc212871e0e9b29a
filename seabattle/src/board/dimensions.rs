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
//! Dimensions of the square board: bounds checks, linearization and neighbourhoods.
use std::convert::TryFrom;

use crate::board::Position;

/// Dimensions of a square `size` x `size` board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SquareDimensions {
    /// Length of one side of the board.
    size: usize,
}

impl SquareDimensions {
    /// Create new [`SquareDimensions`] with the given side length.
    /// Panics if `size` is 0 or if the coordinates would not fit in an `i32`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None => panic!("SquareDimensions must be in 1..={}, got {}", i32::MAX, size),
        }
    }

    /// Create new [`SquareDimensions`] with the given side length.
    /// Returns `None` if `size` is 0 or too large to address with `i32` coordinates.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 || i32::try_from(size).is_err() {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the position lies on the board.
    pub fn contains(&self, pos: &Position) -> bool {
        self.try_linearize(pos).is_some()
    }

    /// Convert a position to a row-major index. Returns `None` if out of bounds.
    pub fn try_linearize(&self, pos: &Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if x < self.size && y < self.size {
            Some(x * self.size + y)
        } else {
            None
        }
    }

    /// Iterate the on-board part of the 3x3 block around `pos`, including `pos` itself if
    /// it is on the board.
    pub fn neighbourhood(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbourhood().filter(move |p| self.contains(p))
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the positions of
    /// that row.
    pub fn iter_positions(&self) -> impl Iterator<Item = impl Iterator<Item = Position>> {
        let size = self.size as i32;
        (0..size).map(move |x| (0..size).map(move |y| Position::new(x, y)))
    }
}

impl Default for SquareDimensions {
    /// The default board is 6x6.
    fn default() -> Self {
        Self { size: 6 }
    }
}
