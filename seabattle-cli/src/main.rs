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
use std::io;

use clap::{App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use seabattle::{
    config::{DEFAULT_BOARD_SIZE, DEFAULT_MAX_PLACEMENT_ATTEMPTS},
    AutomatedPlayer, Game, GameConfig, GameState, HumanPlayer, Player, ShotOutcome, Side,
    TurnRecord,
};

use crate::{
    input::InputReader,
    logging::init_logging,
    render::{render_board, LEGEND},
};

mod input;
mod logging;
mod render;

const DEFAULT_FLEET_ARG: &str = "3,2,2,1,1,1,1";

fn main() -> io::Result<()> {
    init_logging();
    let default_size = DEFAULT_BOARD_SIZE.to_string();
    let default_attempts = DEFAULT_MAX_PLACEMENT_ATTEMPTS.to_string();
    let matches = App::new("Sea Battle")
        .version("0.1")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line sea battle against the computer.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of each board")
                .takes_value(true)
                .default_value(&default_size)
                .validator(|v| parse_count(&v).map(|_| ())),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("LENGTHS")
                .help("comma-separated ship lengths, placed in order")
                .takes_value(true)
                .default_value(DEFAULT_FLEET_ARG)
                .validator(|v| parse_fleet(&v).map(|_| ())),
        )
        .arg(
            Arg::with_name("attempts")
                .long("attempts")
                .value_name("N")
                .help("random placement attempts per board before starting over")
                .takes_value(true)
                .default_value(&default_attempts)
                .validator(|v| parse_count(&v).map(|_| ())),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for a reproducible game")
                .takes_value(true)
                .validator(|v| v.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show the computer's ships"),
        )
        .get_matches();

    let config = config_from(&matches);
    let reveal = matches.is_present("reveal");
    let mut rng = match matches.value_of("seed") {
        // Already validated by clap.
        Some(seed) => StdRng::seed_from_u64(seed.parse().unwrap_or_default()),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let human = HumanPlayer::new(InputReader::new(stdin.lock()));
    let automated = AutomatedPlayer::new(StdRng::seed_from_u64(rng.gen()));
    let mut game = Game::new(&mut rng, config, human, automated)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    greeting();
    play(&mut game, reveal);
    Ok(())
}

/// Build the [`GameConfig`] from already-validated arguments.
fn config_from(matches: &ArgMatches) -> GameConfig {
    let size = matches
        .value_of("size")
        .and_then(|v| parse_count(v).ok())
        .unwrap_or(DEFAULT_BOARD_SIZE);
    let fleet = matches
        .value_of("fleet")
        .and_then(|v| parse_fleet(v).ok())
        .unwrap_or_else(|| seabattle::config::DEFAULT_FLEET.to_vec());
    let mut config = GameConfig::new(size, fleet);
    if let Some(attempts) = matches.value_of("attempts").and_then(|v| parse_count(v).ok()) {
        config.max_placement_attempts = attempts;
    }
    config
}

/// Parse a positive integer argument.
fn parse_count(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{}: {}", value, e)),
    }
}

/// Parse a comma-separated list of ship lengths.
fn parse_fleet(value: &str) -> Result<Vec<usize>, String> {
    value.split(',').map(parse_count).collect()
}

fn greeting() {
    println!(" ---------------------------");
    println!("         Sea Battle");
    println!(" ---------------------------");
    println!("  enter the row, then the column");
    println!("  e.g. \"2 5\" fires at row 2, column 5");
    println!(" ---------------------------");
    println!("{}", LEGEND);
    println!(" ---------------------------");
}

fn show_boards<H: Player, A: Player>(game: &Game<H, A>, reveal: bool) {
    println!();
    println!("         Your board");
    println!(" ---------------------------");
    print!("{}", render_board(game.human_board(), reveal));
    println!();
    println!("       Computer's board");
    println!(" ---------------------------");
    print!("{}", render_board(game.automated_board(), reveal));
    println!();
}

fn announce(record: &TurnRecord) {
    let target = record.report.target;
    let who = match record.side {
        Side::Human => "You fire",
        Side::Automated => "The computer fires",
    };
    let result = match record.report.outcome {
        ShotOutcome::Miss => "miss.",
        ShotOutcome::Hit(_) => "hit! Fire again.",
        ShotOutcome::Sunk(_) => "sunk!",
    };
    println!("{} at {} {}: {}", who, target.x + 1, target.y + 1, result);
}

/// Drive the game: render, let the current side fire, report, repeat.
fn play<H: Player, A: Player>(game: &mut Game<H, A>, reveal: bool) {
    loop {
        show_boards(game, reveal);
        match game.current() {
            Side::Human => println!("      Your turn"),
            Side::Automated => println!("      Computer's turn"),
        }
        match game.play_turn() {
            Some(record) => announce(&record),
            None => break,
        }
        if game.state().is_over() {
            break;
        }
    }
    show_boards(game, true);
    match game.state() {
        GameState::PlayerWon => println!("You won!"),
        GameState::PlayerLost => println!("Unfortunately, you lost."),
        other => info!("stopped in state {:?}", other),
    }
}
