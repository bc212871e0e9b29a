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
//! Types used for defining ships and the cells they cover.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Position;

/// Axis a ship extends along from its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends along its row, so `y` grows.
    Horizontal,
    /// The ship extends along its column, so `x` grows.
    Vertical,
}

impl Orientation {
    /// Offset of the `i`th cell from the anchor.
    fn step(self, i: i32) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, i),
            Orientation::Vertical => (i, 0),
        }
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight ship: a size, an anchor cell, an orientation and the health it has left.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ship {
    size: usize,
    anchor: Position,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Construct an undamaged ship. Panics if `size` is 0.
    pub fn new(size: usize, anchor: Position, orientation: Orientation) -> Self {
        assert!(size > 0, "ships must have a nonzero size");
        Self {
            size,
            anchor,
            orientation,
            health: size,
        }
    }

    /// Number of cells this ship covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The first cell of this ship.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// The axis this ship extends along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells of this ship that have not been hit yet.
    pub fn health(&self) -> usize {
        self.health
    }

    /// Returns true once every cell of this ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Iterate the cells this ship covers, starting at the anchor.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Position> {
        let anchor = self.anchor;
        let orientation = self.orientation;
        (0..self.size as i32).map(move |i| {
            let (dx, dy) = orientation.step(i);
            anchor.offset(dx, dy)
        })
    }

    /// Returns true if `pos` is one of the cells this ship covers. Does not damage the ship.
    pub fn is_hit_by(&self, pos: Position) -> bool {
        self.occupied_cells().any(|cell| cell == pos)
    }

    /// Take one point of damage. Returns true if the ship is sunk afterwards.
    pub(crate) fn damage(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }
}
