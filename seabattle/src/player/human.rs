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
use crate::{
    board::{Board, Position, ShotError},
    player::Player,
};

/// Source of coordinates typed in by a person.
pub trait CoordinateInput {
    /// Block until the user supplies a row and a column, both counted from 1.
    fn read_coordinates(&mut self) -> (i32, i32);

    /// Tell the user their last coordinates were refused.
    fn report_rejection(&mut self, _err: &ShotError) {}
}

impl<F: FnMut() -> (i32, i32)> CoordinateInput for F {
    fn read_coordinates(&mut self) -> (i32, i32) {
        self()
    }
}

/// A player whose targets come from a [`CoordinateInput`].
#[derive(Debug)]
pub struct HumanPlayer<I> {
    input: I,
}

impl<I: CoordinateInput> HumanPlayer<I> {
    /// Create a player reading targets from `input`.
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Extract the input source from this player.
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: CoordinateInput> Player for HumanPlayer<I> {
    fn produce_target(&mut self, _opponent: &Board) -> Position {
        let (row, col) = self.input.read_coordinates();
        // Anything at or below zero is off the board either way.
        Position::new(row.saturating_sub(1), col.saturating_sub(1))
    }

    fn shot_rejected(&mut self, err: &ShotError) {
        self.input.report_rejection(err);
    }
}
