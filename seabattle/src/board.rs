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
//! Types that make up the game board.

use std::collections::HashSet;

use log::{debug, trace};

use crate::ships::Ship;

use self::grid::Grid;
pub use self::{
    dimensions::SquareDimensions,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    grid::CellState,
    position::Position,
    setup::{generate_board, try_generate_board, FleetError},
};

mod dimensions;
mod errors;
mod grid;
mod position;
pub mod setup;

/// Result of a shot that the board accepted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship at the given index in [`Board::ships`] without sinking it.
    Hit(usize),
    /// The shot hit and sank the ship at the given index in [`Board::ships`].
    Sunk(usize),
}

impl ShotOutcome {
    /// Get the index of the ship that was hit.
    pub fn ship(&self) -> Option<usize> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(idx) | ShotOutcome::Sunk(idx) => Some(idx),
        }
    }

    /// Whether the shooter gets to fire again. Only a hit that leaves the ship afloat
    /// earns another shot.
    pub fn grants_replay(&self) -> bool {
        matches!(self, ShotOutcome::Hit(_))
    }
}

/// Represents a single player's board, including their ships and their side of the ocean.
#[derive(Debug, Clone)]
pub struct Board {
    /// Visible state of every cell.
    grid: Grid,

    /// Ship cells plus the buffer around them. Used only while placing ships.
    reserved: HashSet<Position>,

    /// Cells that may no longer be shot at.
    targeted: HashSet<Position>,

    /// Ships in the order they were placed.
    ships: Vec<Ship>,

    /// Number of ships whose health reached zero.
    sunk_count: usize,

    /// Whether renderers should hide undamaged ship cells.
    concealed: bool,
}

impl Board {
    /// Create an empty board with the given [`SquareDimensions`].
    pub fn new(dim: SquareDimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            reserved: HashSet::new(),
            targeted: HashSet::new(),
            ships: Vec::new(),
            sunk_count: 0,
            concealed: false,
        }
    }

    /// Side length of this board.
    pub fn size(&self) -> usize {
        self.grid.dim.size()
    }

    /// Returns true if `pos` is not on this board.
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        !self.grid.dim.contains(&pos)
    }

    /// Whether renderers should hide undamaged ship cells.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Set whether renderers should hide undamaged ship cells.
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Ships on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships that have been sunk.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// State of the cell at `pos`, or `None` if it is off the board.
    pub fn cell(&self, pos: Position) -> Option<CellState> {
        self.grid.get(pos)
    }

    /// Returns true if `pos` can no longer be shot at.
    pub fn is_targeted(&self, pos: Position) -> bool {
        self.targeted.contains(&pos)
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the cell
    /// states of that row.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        let grid = &self.grid;
        grid.dim
            .iter_positions()
            .map(move |row| row.map(move |pos| grid[pos]))
    }

    /// Attempts to place `ship`. Every cell must be on the board and outside the cells
    /// reserved by earlier ships, otherwise the board is left untouched and the ship is
    /// returned inside the error.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        for pos in ship.occupied_cells() {
            if self.is_out_of_bounds(pos) {
                return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship));
            }
            if self.reserved.contains(&pos) {
                return Err(PlaceError::new(CannotPlaceReason::Reserved, ship));
            }
        }
        // Already ensured that every position is valid and free.
        for pos in ship.occupied_cells() {
            self.grid[pos] = CellState::Ship;
            self.reserved.insert(pos);
        }
        self.ships.push(ship);
        self.reserve_buffer(&ship);
        debug!(
            "placed ship of size {} at {} ({:?})",
            ship.size(),
            ship.anchor(),
            ship.orientation()
        );
        Ok(())
    }

    /// Reserve the on-board cells around `ship` so later ships cannot touch it.
    fn reserve_buffer(&mut self, ship: &Ship) {
        let dim = self.grid.dim;
        for pos in ship.occupied_cells() {
            self.reserved.extend(dim.neighbourhood(pos));
        }
    }

    /// Clear the placement reservations and the shot history. Called once the fleet is
    /// seated, before the first shot.
    pub fn reset_targeting_state(&mut self) {
        self.reserved.clear();
        self.targeted.clear();
    }

    /// Fire a shot at `pos`, returning why the shot was rejected or what it hit.
    /// Rejected shots do not change the board.
    pub fn shoot(&mut self, pos: Position) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(pos) {
            trace!("rejected shot at {}: out of bounds", pos);
            return Err(ShotError::new(CannotShootReason::OutOfBounds, pos));
        }
        if !self.targeted.insert(pos) {
            trace!("rejected shot at {}: already targeted", pos);
            return Err(ShotError::new(CannotShootReason::RepeatShot, pos));
        }

        let hit = self.ships.iter().position(|ship| ship.is_hit_by(pos));
        let outcome = match hit {
            None => {
                self.grid[pos] = CellState::Miss;
                ShotOutcome::Miss
            }
            Some(idx) => {
                self.grid[pos] = CellState::Hit;
                if self.ships[idx].damage() {
                    self.sunk_count += 1;
                    let ship = self.ships[idx];
                    self.mark_sunk(&ship);
                    ShotOutcome::Sunk(idx)
                } else {
                    ShotOutcome::Hit(idx)
                }
            }
        };
        debug!("shot at {}: {:?}", pos, outcome);
        Ok(outcome)
    }

    /// Paint the empty cells around a sunk ship and rule them out as targets.
    fn mark_sunk(&mut self, ship: &Ship) {
        let dim = self.grid.dim;
        for pos in ship.occupied_cells() {
            for around in dim.neighbourhood(pos) {
                if self.grid[around] == CellState::Empty {
                    self.grid[around] = CellState::SunkMarker;
                }
                self.targeted.insert(around);
            }
        }
    }

    /// Returns true if all of this player's ships have been sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk_count == self.ships.len()
    }
}

impl Default for Board {
    /// An empty 6x6 board.
    fn default() -> Self {
        Self::new(SquareDimensions::default())
    }
}
