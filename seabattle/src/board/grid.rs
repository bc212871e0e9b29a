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
//! Defines the cell storage behind a [`Board`][crate::board::Board].

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Position, SquareDimensions};

/// Visible state of a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Nothing known about this cell.
    Empty,
    /// An undamaged part of a ship. Renderers hide this on a concealed board.
    Ship,
    /// A part of a ship that was shot.
    Hit,
    /// A shot that hit nothing.
    Miss,
    /// A cell next to a sunk ship, which cannot hold another ship.
    SunkMarker,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Row-major grid of [`CellState`].
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: SquareDimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[CellState]>,
}

impl Grid {
    pub(super) fn new(dim: SquareDimensions) -> Self {
        let cells = vec![CellState::default(); dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get the state of the cell at the given [`Position`].
    pub(super) fn get<B: Borrow<Position>>(&self, pos: B) -> Option<CellState> {
        self.dim
            .try_linearize(pos.borrow())
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Get a mutable reference to the cell at the given [`Position`].
    pub(super) fn get_mut<B: Borrow<Position>>(&mut self, pos: B) -> Option<&mut CellState> {
        self.dim
            .try_linearize(pos.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Position>> Index<B> for Grid {
    type Output = CellState;

    fn index(&self, pos: B) -> &Self::Output {
        let idx = self.dim.try_linearize(pos.borrow()).expect("position out of bounds");
        &self.cells[idx]
    }
}

impl<B: Borrow<Position>> IndexMut<B> for Grid {
    fn index_mut(&mut self, pos: B) -> &mut Self::Output {
        self.get_mut(pos).expect("position out of bounds")
    }
}
