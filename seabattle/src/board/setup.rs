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
//! Implements the setup phase of the board: seating a fleet at random.
use log::{debug, trace, warn};
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Board, Position, SquareDimensions},
    config::{ConfigError, GameConfig, MAX_BOARD_RESTARTS},
    ships::Ship,
};

/// Error returned when a single attempt to seat a fleet gives up.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// Every placement attempt for this board was used before all ships were seated.
    #[error("gave up after {attempts} placement attempts with {placed} ships seated")]
    AttemptsExhausted { attempts: usize, placed: usize },
}

/// Pick a random ship of length `len` anchored on the board.
fn random_ship<R: Rng + ?Sized>(rng: &mut R, dim: &SquareDimensions, len: usize) -> Ship {
    let size = dim.size() as i32;
    let anchor = Position::new(rng.gen_range(0, size), rng.gen_range(0, size));
    Ship::new(len, anchor, rng.gen())
}

/// Make one attempt at seating `fleet` on an empty board, in order, using at most
/// `max_attempts` random placements in total. On success the board's targeting state has
/// already been reset.
pub fn try_generate_board<R: Rng + ?Sized>(
    rng: &mut R,
    dim: SquareDimensions,
    fleet: &[usize],
    max_attempts: usize,
) -> Result<Board, FleetError> {
    let mut board = Board::new(dim);
    let mut attempts = 0;
    for (placed, &len) in fleet.iter().enumerate() {
        loop {
            if attempts >= max_attempts {
                return Err(FleetError::AttemptsExhausted { attempts, placed });
            }
            attempts += 1;
            match board.add_ship(random_ship(rng, &dim, len)) {
                Ok(()) => break,
                Err(err) => trace!("placement attempt {} failed: {}", attempts, err),
            }
        }
    }
    board.reset_targeting_state();
    debug!(
        "seated {} ships on a {}x{} board in {} attempts",
        fleet.len(),
        dim.size(),
        dim.size(),
        attempts
    );
    Ok(board)
}

/// Build a board with the configured fleet seated at random, discarding and restarting
/// whenever an attempt runs out of placements. Fails if the config is invalid or if
/// [`MAX_BOARD_RESTARTS`] boards were discarded.
pub fn generate_board<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
) -> Result<Board, ConfigError> {
    config.validate()?;
    let dim = config
        .dimensions()
        .ok_or(ConfigError::InvalidBoardSize(config.board_size))?;
    for _ in 0..MAX_BOARD_RESTARTS {
        match try_generate_board(rng, dim, &config.fleet, config.max_placement_attempts) {
            Ok(board) => return Ok(board),
            Err(err) => warn!("discarding board: {}", err),
        }
    }
    Err(ConfigError::FleetNotSeated {
        restarts: MAX_BOARD_RESTARTS,
    })
}
