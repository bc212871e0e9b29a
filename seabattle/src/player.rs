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
//! Players: anything that can pick a target on the opponent's board.

use log::trace;

use crate::board::{Board, Position, ShotError, ShotOutcome};

pub use self::{
    automated::AutomatedPlayer,
    human::{CoordinateInput, HumanPlayer},
};

mod automated;
mod human;

/// The accepted shot of a turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// Cell that was shot.
    pub target: Position,
    /// What the shot hit.
    pub outcome: ShotOutcome,
}

impl TurnReport {
    /// Whether the same player moves again.
    pub fn grants_replay(&self) -> bool {
        self.outcome.grants_replay()
    }
}

/// Interface implemented by the different kinds of player.
pub trait Player {
    /// Choose the next cell to fire at. The opponent's board is passed so implementations
    /// can look at its size or visible state.
    fn produce_target(&mut self, opponent: &Board) -> Position;

    /// Inform the player that a target it produced was refused by the board.
    fn shot_rejected(&mut self, _err: &ShotError) {}

    /// Keep producing targets until `opponent` accepts one, then report the result.
    /// Rejected targets are passed to [`Player::shot_rejected`] and never end the turn.
    fn take_turn(&mut self, opponent: &mut Board) -> TurnReport {
        loop {
            let target = self.produce_target(opponent);
            match opponent.shoot(target) {
                Ok(outcome) => return TurnReport { target, outcome },
                Err(err) => {
                    trace!("retrying turn: {}", err);
                    self.shot_rejected(&err);
                }
            }
        }
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn produce_target(&mut self, opponent: &Board) -> Position {
        (**self).produce_target(opponent)
    }

    fn shot_rejected(&mut self, err: &ShotError) {
        (**self).shot_rejected(err)
    }

    fn take_turn(&mut self, opponent: &mut Board) -> TurnReport {
        (**self).take_turn(opponent)
    }
}
