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
//! Implementation of the game as a whole: a human against an automated opponent.
//!
//! [`GameSetup`] is the `SettingUp` phase. It collects one seated board per side and
//! turns into a [`Game`] once both are ready. [`Game`] alternates turns, lets a player
//! who hit (without sinking) shoot again, and stops when either fleet is gone.

use log::{debug, info};
use rand::Rng;

use crate::{
    board::{generate_board, Board},
    config::{ConfigError, GameConfig},
    player::{Player, TurnReport},
};

/// One of the two sides of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The person at the keyboard.
    Human,
    /// The computer opponent.
    Automated,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
}

/// Phase of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    /// Boards are still being seated.
    SettingUp,
    /// Shots are being fired.
    InProgress,
    /// The automated player's fleet was destroyed.
    PlayerWon,
    /// The human player's fleet was destroyed.
    PlayerLost,
}

impl GameState {
    /// Returns true if no more turns can be played.
    pub fn is_over(self) -> bool {
        matches!(self, GameState::PlayerWon | GameState::PlayerLost)
    }
}

/// Handles setup for the game. Acts as a builder for [`Game`].
#[derive(Debug, Clone)]
pub struct GameSetup {
    config: GameConfig,
    human_board: Option<Board>,
    automated_board: Option<Board>,
}

impl GameSetup {
    /// Begin setting up a game with the given config.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            human_board: None,
            automated_board: None,
        })
    }

    /// Always [`GameState::SettingUp`].
    pub fn state(&self) -> GameState {
        GameState::SettingUp
    }

    /// Seat a random fleet for every side that does not have a board yet.
    pub fn generate_boards<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ConfigError> {
        if self.human_board.is_none() {
            self.human_board = Some(generate_board(rng, &self.config)?);
        }
        if self.automated_board.is_none() {
            self.automated_board = Some(generate_board(rng, &self.config)?);
        }
        Ok(())
    }

    /// Use a board seated elsewhere for `side`, replacing any previous one. Its targeting
    /// state is reset so placement reservations do not count as shots.
    pub fn place_board(&mut self, side: Side, mut board: Board) {
        board.reset_targeting_state();
        match side {
            Side::Human => self.human_board = Some(board),
            Side::Automated => self.automated_board = Some(board),
        }
    }

    /// Get the board for `side` if it has been seated.
    pub fn board(&self, side: Side) -> Option<&Board> {
        match side {
            Side::Human => self.human_board.as_ref(),
            Side::Automated => self.automated_board.as_ref(),
        }
    }

    /// Returns true if both sides have a board with at least one ship.
    pub fn ready(&self) -> bool {
        let seated =
            |board: &Option<Board>| board.as_ref().map_or(false, |b| !b.ships().is_empty());
        seated(&self.human_board) && seated(&self.automated_board)
    }

    /// Tries to start the game with the given players. If either board is missing,
    /// returns self. The automated player's board is concealed.
    pub fn start<H: Player, A: Player>(self, human: H, automated: A) -> Result<Game<H, A>, Self> {
        if !self.ready() {
            return Err(self);
        }
        match (self.human_board, self.automated_board) {
            (Some(human_board), Some(mut automated_board)) => {
                automated_board.set_concealed(true);
                debug!("setup complete, starting game");
                Ok(Game {
                    human,
                    automated,
                    human_board,
                    automated_board,
                    turn: 0,
                    state: GameState::InProgress,
                })
            }
            (human_board, automated_board) => Err(Self {
                config: self.config,
                human_board,
                automated_board,
            }),
        }
    }
}

/// A turn as seen from the outside: who fired and what happened.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnRecord {
    /// The side that fired.
    pub side: Side,
    /// The accepted shot.
    pub report: TurnReport,
}

/// Handles gameplay.
#[derive(Debug)]
pub struct Game<H, A> {
    human: H,
    automated: A,
    human_board: Board,
    automated_board: Board,

    /// Counter for the current turn. Even is the human, odd the automated player.
    turn: usize,

    state: GameState,
}

impl<H: Player, A: Player> Game<H, A> {
    /// Validate `config`, seat both fleets at random from `rng` and start the game.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        config: GameConfig,
        human: H,
        automated: A,
    ) -> Result<Self, ConfigError> {
        let mut setup = GameSetup::new(config)?;
        setup.generate_boards(rng)?;
        match setup.start(human, automated) {
            Ok(game) => Ok(game),
            // Both boards were just generated from a validated config.
            Err(_) => unreachable!(),
        }
    }

    /// Current phase of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of turns that have passed the move to the other side.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The side that fires next.
    pub fn current(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::Human
        } else {
            Side::Automated
        }
    }

    /// Get the board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Automated => &self.automated_board,
        }
    }

    /// The human player's own board.
    pub fn human_board(&self) -> &Board {
        &self.human_board
    }

    /// The automated player's board, concealed.
    pub fn automated_board(&self) -> &Board {
        &self.automated_board
    }

    /// Let the current side fire until a shot is accepted. Returns `None` if the game is
    /// already over.
    pub fn play_turn(&mut self) -> Option<TurnRecord> {
        if self.state != GameState::InProgress {
            return None;
        }
        let side = self.current();
        let report = match side {
            Side::Human => self.human.take_turn(&mut self.automated_board),
            Side::Automated => self.automated.take_turn(&mut self.human_board),
        };
        debug!(
            "turn {}: {:?} fired at {}: {:?}",
            self.turn, side, report.target, report.outcome
        );
        if !report.grants_replay() {
            self.turn += 1;
        }
        self.state = if self.human_board.is_defeated() {
            GameState::PlayerLost
        } else if self.automated_board.is_defeated() {
            GameState::PlayerWon
        } else {
            GameState::InProgress
        };
        if self.state.is_over() {
            info!("game over after {} turns: {:?}", self.turn, self.state);
        }
        Some(TurnRecord { side, report })
    }

    /// Play turns until the game ends and return the final state.
    pub fn run(&mut self) -> GameState {
        while self.play_turn().is_some() {}
        self.state
    }

    /// Extract the players from this game.
    pub fn into_players(self) -> (H, A) {
        (self.human, self.automated)
    }
}
