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
//! Engine for a two-player sea battle game on a small square board.
//!
//! Each side seats a fleet of straight ships on its own [`Board`]. Ships may not overlap
//! or touch, not even diagonally. Players then take turns firing at the other board; a
//! hit that does not sink a ship earns another shot, and the first side to lose every
//! ship loses the game.
//!
//! The crate does no I/O. Rendering and reading coordinates from a person are left to the
//! caller, which plugs in through [`CoordinateInput`] and the read accessors on [`Board`].

pub mod board;
pub mod config;
pub mod game;
pub mod player;
pub mod ships;

pub use crate::{
    board::{
        generate_board, Board, CannotPlaceReason, CannotShootReason, CellState, PlaceError,
        Position, ShotError, ShotOutcome, SquareDimensions,
    },
    config::{ConfigError, GameConfig},
    game::{Game, GameSetup, GameState, Side, TurnRecord},
    player::{AutomatedPlayer, CoordinateInput, HumanPlayer, Player, TurnReport},
    ships::{Orientation, Ship},
};
