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
use seabattle::{
    Board, CannotPlaceReason, CannotShootReason, CellState, Orientation, Position, ShotOutcome,
    Ship, SquareDimensions,
};

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn board_6() -> Board {
    Board::new(SquareDimensions::new(6))
}

#[test]
fn test_hit_then_sink_single_ship() {
    let mut board = board_6();
    let ship = Ship::new(2, pos(0, 0), Orientation::Horizontal);
    let cells: Vec<_> = ship.occupied_cells().collect();
    assert_eq!(cells, vec![pos(0, 0), pos(0, 1)]);
    board.add_ship(ship).unwrap();

    let first = board.shoot(pos(0, 0)).unwrap();
    assert_eq!(first, ShotOutcome::Hit(0));
    assert!(first.grants_replay());
    assert_eq!(board.ships()[0].health(), 1);
    assert!(!board.is_defeated());

    let second = board.shoot(pos(0, 1)).unwrap();
    assert_eq!(second, ShotOutcome::Sunk(0));
    assert!(!second.grants_replay());
    assert_eq!(board.ships()[0].health(), 0);
    assert_eq!(board.sunk_count(), 1);
    assert!(board.is_defeated());
}

#[test]
fn test_miss_then_repeat() {
    let mut board = board_6();
    let outcome = board.shoot(pos(5, 5)).unwrap();
    assert_eq!(outcome, ShotOutcome::Miss);
    assert!(!outcome.grants_replay());
    assert_eq!(board.cell(pos(5, 5)), Some(CellState::Miss));

    let err = board.shoot(pos(5, 5)).unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::RepeatShot);
    assert_eq!(err.coord(), pos(5, 5));
}

#[test]
fn test_diagonal_neighbour_rejected() {
    let mut board = board_6();
    board
        .add_ship(Ship::new(2, pos(0, 0), Orientation::Horizontal))
        .unwrap();
    let err = board
        .add_ship(Ship::new(1, pos(1, 2), Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::Reserved);
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.cell(pos(1, 2)), Some(CellState::Empty));

    // One cell further away is fine.
    board
        .add_ship(Ship::new(1, pos(2, 2), Orientation::Vertical))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_overlap_rejected() {
    let mut board = board_6();
    board
        .add_ship(Ship::new(3, pos(2, 1), Orientation::Horizontal))
        .unwrap();
    let err = board
        .add_ship(Ship::new(3, pos(0, 2), Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::Reserved);
    assert_eq!(err.into_ship().anchor(), pos(0, 2));
}

#[test]
fn test_out_of_bounds_placement_leaves_board_untouched() {
    let mut board = board_6();
    let err = board
        .add_ship(Ship::new(3, pos(0, 4), Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    assert!(board.ships().is_empty());
    // The first two cells were on the board but must not have been painted.
    assert_eq!(board.cell(pos(0, 4)), Some(CellState::Empty));
    assert_eq!(board.cell(pos(0, 5)), Some(CellState::Empty));
    // Nothing was reserved either.
    board
        .add_ship(Ship::new(2, pos(0, 4), Orientation::Horizontal))
        .unwrap();
}

#[test]
fn test_out_of_bounds_shot() {
    let mut board = board_6();
    for target in &[pos(-1, 0), pos(0, -1), pos(6, 0), pos(0, 6)] {
        let err = board.shoot(*target).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        assert!(!board.is_targeted(*target));
    }
    assert!(board.is_out_of_bounds(pos(6, 6)));
    assert!(!board.is_out_of_bounds(pos(5, 5)));
}

#[test]
fn test_reset_allows_shooting_ship_cells() {
    let mut board = board_6();
    board
        .add_ship(Ship::new(1, pos(3, 3), Orientation::Horizontal))
        .unwrap();
    board.reset_targeting_state();
    assert_eq!(board.shoot(pos(3, 3)).unwrap(), ShotOutcome::Sunk(0));
}

#[test]
fn test_sinking_marks_surrounding_cells() {
    let mut board = board_6();
    board
        .add_ship(Ship::new(2, pos(2, 2), Orientation::Vertical))
        .unwrap();
    board
        .add_ship(Ship::new(1, pos(0, 5), Orientation::Vertical))
        .unwrap();
    board.reset_targeting_state();

    board.shoot(pos(1, 1)).unwrap();
    board.shoot(pos(2, 2)).unwrap();
    assert_eq!(board.cell(pos(2, 3)), Some(CellState::Empty));
    assert_eq!(board.shoot(pos(3, 2)).unwrap(), ShotOutcome::Sunk(0));

    assert_eq!(board.cell(pos(2, 2)), Some(CellState::Hit));
    assert_eq!(board.cell(pos(3, 2)), Some(CellState::Hit));
    // An earlier miss keeps its mark.
    assert_eq!(board.cell(pos(1, 1)), Some(CellState::Miss));
    for around in &[pos(1, 2), pos(1, 3), pos(2, 1), pos(4, 1), pos(4, 3), pos(3, 3)] {
        assert_eq!(board.cell(*around), Some(CellState::SunkMarker), "{}", around);
        assert_eq!(
            board.shoot(*around).unwrap_err().reason(),
            CannotShootReason::RepeatShot
        );
    }
    // Cells further away are untouched.
    assert_eq!(board.cell(pos(5, 2)), Some(CellState::Empty));
    assert_eq!(board.sunk_count(), 1);
    assert!(!board.is_defeated());
}

#[test]
fn test_defeat_is_permanent() {
    let mut board = board_6();
    board
        .add_ship(Ship::new(1, pos(0, 0), Orientation::Horizontal))
        .unwrap();
    board
        .add_ship(Ship::new(1, pos(5, 5), Orientation::Horizontal))
        .unwrap();
    board.reset_targeting_state();

    board.shoot(pos(0, 0)).unwrap();
    assert!(!board.is_defeated());
    board.shoot(pos(5, 5)).unwrap();
    assert!(board.is_defeated());
    board.shoot(pos(3, 3)).unwrap();
    assert!(board.is_defeated());
    assert_eq!(board.sunk_count(), 2);
}

#[test]
fn test_rows_report_cell_states() {
    let mut board = Board::new(SquareDimensions::new(3));
    board
        .add_ship(Ship::new(2, pos(0, 0), Orientation::Horizontal))
        .unwrap();
    board.shoot(pos(0, 0)).unwrap();
    board.shoot(pos(2, 2)).unwrap();
    let rows: Vec<Vec<CellState>> = board.rows().map(|row| row.collect()).collect();
    assert_eq!(
        rows,
        vec![
            vec![CellState::Hit, CellState::Ship, CellState::Empty],
            vec![CellState::Empty, CellState::Empty, CellState::Empty],
            vec![CellState::Empty, CellState::Empty, CellState::Miss],
        ]
    );
}
