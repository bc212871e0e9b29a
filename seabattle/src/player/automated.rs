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
use rand::Rng;

use crate::{
    board::{Board, Position},
    player::Player,
};

/// Computer opponent that fires at uniformly random cells. It does not remember where it
/// has already fired; the board refuses repeats and the turn is retried.
#[derive(Debug)]
pub struct AutomatedPlayer<R> {
    rng: R,
}

impl<R: Rng> AutomatedPlayer<R> {
    /// Create a player drawing its targets from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Extract the random source from this player.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Player for AutomatedPlayer<R> {
    fn produce_target(&mut self, opponent: &Board) -> Position {
        let size = opponent.size() as i32;
        Position::new(self.rng.gen_range(0, size), self.rng.gen_range(0, size))
    }
}
