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
//! Tunable parameters of a game.

use thiserror::Error;

use crate::board::SquareDimensions;

/// Side length of the default board.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Largest supported side length.
pub const MAX_BOARD_SIZE: usize = 100;

/// Ship lengths of the default fleet.
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Random placement attempts allowed per board before it is discarded and rebuilt.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Boards discarded before fleet generation gives up on a config.
pub const MAX_BOARD_RESTARTS: usize = 100;

/// Reason a [`GameConfig`] was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The board would have no cells, or more than [`MAX_BOARD_SIZE`] per side.
    #[error("board size {0} is not supported")]
    InvalidBoardSize(usize),
    /// No ships were requested.
    #[error("the fleet must contain at least one ship")]
    EmptyFleet,
    /// A ship of length zero was requested.
    #[error("ships must have a nonzero length")]
    ZeroLengthShip,
    /// A ship does not fit on the board in any orientation.
    #[error("a ship of length {len} does not fit on a {size}x{size} board")]
    ShipTooLong { len: usize, size: usize },
    /// The ships and the mandatory gaps between them cannot fit on the board.
    #[error("the fleet needs room for {required} cells with spacing but the board has {available}")]
    FleetTooLarge { required: usize, available: usize },
    /// More ships than the board has room for without any two touching.
    #[error("{count} ships requested but at most {max} fit apart on this board")]
    TooManyShips { count: usize, max: usize },
    /// Every fresh board ran out of placement attempts.
    #[error("could not seat the fleet on any of {restarts} fresh boards")]
    FleetNotSeated { restarts: usize },
    /// Fleet generation was not given any attempts.
    #[error("at least one placement attempt is required")]
    NoPlacementAttempts,
}

/// Board size and fleet composition, shared by both players.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Side length of each square board.
    pub board_size: usize,
    /// Lengths of the ships each player places, in placement order.
    pub fleet: Vec<usize>,
    /// Random placement attempts per board before starting over.
    pub max_placement_attempts: usize,
}

impl GameConfig {
    /// Build a config with the given board size and fleet, using the default attempt cap.
    pub fn new(board_size: usize, fleet: Vec<usize>) -> Self {
        Self {
            board_size,
            fleet,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Dimensions of the boards described by this config.
    /// Returns `None` if the size is not usable.
    pub fn dimensions(&self) -> Option<SquareDimensions> {
        if self.board_size > MAX_BOARD_SIZE {
            return None;
        }
        SquareDimensions::try_new(self.board_size)
    }

    /// Check that a fleet of this shape could plausibly be seated.
    ///
    /// Growing every ship cell into the 2x2 block to its lower right turns ships that do
    /// not touch into blocks that do not overlap, all inside a `(size + 1)` square. The
    /// fleet is rejected if those blocks cannot fit. Cutting the board into 2x2 tiles, no
    /// tile can hold parts of two ships, so the ship count is capped by the tile count.
    /// Passing these checks does not guarantee a layout exists; fleet generation retries
    /// a bounded number of times before giving up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions().is_none() {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        let mut required = 0usize;
        for &len in &self.fleet {
            if len == 0 {
                return Err(ConfigError::ZeroLengthShip);
            }
            if len > self.board_size {
                return Err(ConfigError::ShipTooLong {
                    len,
                    size: self.board_size,
                });
            }
            required = required.saturating_add(2 * (len + 1));
        }
        let tiles = (self.board_size + 1) / 2;
        if self.fleet.len() > tiles * tiles {
            return Err(ConfigError::TooManyShips {
                count: self.fleet.len(),
                max: tiles * tiles,
            });
        }
        let side = self.board_size + 1;
        let available = side.saturating_mul(side);
        if required > available {
            return Err(ConfigError::FleetTooLarge {
                required,
                available,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// A 6x6 board with one ship of 3, two of 2 and four of 1.
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_FLEET.to_vec())
    }
}
