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
use rand::{rngs::StdRng, SeedableRng};
use seabattle::{
    AutomatedPlayer, Board, ConfigError, Game, GameConfig, GameSetup, GameState, HumanPlayer,
    Orientation, Player, Position, Ship, ShotOutcome, Side, SquareDimensions,
};

/// Fires at a fixed list of targets, in order.
struct Script(Vec<Position>);

impl Player for Script {
    fn produce_target(&mut self, _opponent: &Board) -> Position {
        self.0.remove(0)
    }
}

fn single_ship_board(anchor: Position, len: usize) -> Board {
    let mut board = Board::new(SquareDimensions::new(6));
    board
        .add_ship(Ship::new(len, anchor, Orientation::Horizontal))
        .unwrap();
    board
}

fn scripted_game(human: Vec<Position>, automated: Vec<Position>) -> Game<Script, Script> {
    let mut setup = GameSetup::new(GameConfig::default()).unwrap();
    assert_eq!(setup.state(), GameState::SettingUp);
    setup.place_board(Side::Human, single_ship_board(Position::new(5, 0), 2));
    assert!(!setup.ready());
    setup.place_board(Side::Automated, single_ship_board(Position::new(0, 0), 2));
    assert!(setup.ready());
    setup
        .start(Script(human), Script(automated))
        .unwrap_or_else(|_| panic!("setup should be ready"))
}

#[test]
fn test_hit_grants_replay_and_miss_passes() {
    let mut game = scripted_game(
        vec![Position::new(0, 0), Position::new(3, 3)],
        vec![Position::new(2, 2)],
    );
    assert_eq!(game.state(), GameState::InProgress);
    assert!(game.automated_board().is_concealed());
    assert!(!game.human_board().is_concealed());

    let record = game.play_turn().unwrap();
    assert_eq!(record.side, Side::Human);
    assert_eq!(record.report.outcome, ShotOutcome::Hit(0));
    assert_eq!(game.current(), Side::Human);

    let record = game.play_turn().unwrap();
    assert_eq!(record.side, Side::Human);
    assert_eq!(record.report.outcome, ShotOutcome::Miss);
    assert_eq!(game.current(), Side::Automated);

    let record = game.play_turn().unwrap();
    assert_eq!(record.side, Side::Automated);
    assert_eq!(record.report.outcome, ShotOutcome::Miss);
    assert_eq!(game.current(), Side::Human);
}

#[test]
fn test_sink_passes_turn_and_wins() {
    let mut game = scripted_game(
        vec![Position::new(0, 0), Position::new(0, 1)],
        vec![],
    );
    game.play_turn().unwrap();
    let record = game.play_turn().unwrap();
    assert_eq!(record.report.outcome, ShotOutcome::Sunk(0));
    assert_eq!(game.state(), GameState::PlayerWon);
    assert_eq!(game.current(), Side::Automated);
    assert!(game.play_turn().is_none());
    assert_eq!(game.run(), GameState::PlayerWon);
}

#[test]
fn test_losing_fleet_ends_game() {
    let mut game = scripted_game(
        vec![Position::new(4, 4), Position::new(4, 5)],
        vec![Position::new(5, 0), Position::new(5, 1)],
    );
    game.play_turn().unwrap();
    game.play_turn().unwrap();
    game.play_turn().unwrap();
    assert_eq!(game.state(), GameState::PlayerLost);
    assert_eq!(game.board(Side::Human).sunk_count(), 1);
}

#[test]
fn test_start_requires_both_boards() {
    let mut setup = GameSetup::new(GameConfig::default()).unwrap();
    setup.place_board(Side::Human, single_ship_board(Position::new(0, 0), 1));
    let setup = match setup.start(Script(vec![]), Script(vec![])) {
        Ok(_) => panic!("game started without an opponent board"),
        Err(setup) => setup,
    };
    assert!(setup.board(Side::Human).is_some());
    assert!(setup.board(Side::Automated).is_none());
}

#[test]
fn test_invalid_config_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = GameConfig::new(2, vec![3]);
    let result = Game::new(
        &mut rng,
        config,
        AutomatedPlayer::new(StdRng::seed_from_u64(2)),
        AutomatedPlayer::new(StdRng::seed_from_u64(3)),
    );
    let err = match result {
        Ok(_) => panic!("started a game with an oversized ship"),
        Err(err) => err,
    };
    assert_eq!(err, ConfigError::ShipTooLong { len: 3, size: 2 });
}

#[test]
fn test_fleet_that_must_touch_is_rejected() {
    let mut rng = StdRng::seed_from_u64(4);
    let result = Game::new(
        &mut rng,
        GameConfig::new(2, vec![1, 1]),
        AutomatedPlayer::new(StdRng::seed_from_u64(5)),
        AutomatedPlayer::new(StdRng::seed_from_u64(6)),
    );
    match result {
        Ok(_) => panic!("seated two ships on a 2x2 board"),
        Err(err) => assert_eq!(err, ConfigError::TooManyShips { count: 2, max: 1 }),
    }
}

#[test]
fn test_random_game_runs_to_completion() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(
            &mut rng,
            GameConfig::default(),
            AutomatedPlayer::new(StdRng::seed_from_u64(seed + 100)),
            AutomatedPlayer::new(StdRng::seed_from_u64(seed + 200)),
        )
        .unwrap();
        let mut turns = 0;
        while let Some(record) = game.play_turn() {
            turns += 1;
            assert!(turns <= 72, "every cell of both boards was shot already");
            let expected = if record.report.grants_replay() {
                record.side
            } else {
                record.side.opponent()
            };
            if !game.state().is_over() {
                assert_eq!(game.current(), expected);
            }
        }
        let state = game.state();
        assert!(state.is_over());
        match state {
            GameState::PlayerWon => assert!(game.automated_board().is_defeated()),
            GameState::PlayerLost => assert!(game.human_board().is_defeated()),
            _ => unreachable!(),
        }
    }
}

#[test]
fn test_human_input_drives_turns() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut moves: Vec<(i32, i32)> = vec![(1, 1), (1, 1)];
    let human = HumanPlayer::new(move || moves.remove(0));
    let mut game = Game::new(
        &mut rng,
        GameConfig::default(),
        human,
        AutomatedPlayer::new(StdRng::seed_from_u64(10)),
    )
    .unwrap();
    let record = game.play_turn().unwrap();
    assert_eq!(record.side, Side::Human);
    assert_eq!(record.report.target, Position::new(0, 0));
}
