use sea_battle::{CellState, Coord, Grid, GridError, Orientation, ShotOutcome, Vessel};

fn grid_with(vessels: &[Vessel]) -> Grid {
    let mut grid = Grid::new(6).unwrap();
    for &v in vessels {
        grid.place_vessel(v).unwrap();
    }
    grid.reset_transient_state();
    grid
}

#[test]
fn test_place_marks_footprint() {
    let mut grid = Grid::new(6).unwrap();
    let vessel = Vessel::new(Coord::new(0, 0), 3, Orientation::Horizontal);
    grid.place_vessel(vessel).unwrap();

    assert_eq!(grid.occupied_cells(), 3);
    assert_eq!(grid.vessels().len(), 1);
    for c in 0..3 {
        assert_eq!(grid.cell(Coord::new(0, c)), CellState::Ship);
    }
    // footprint cells are reserved until the layout is final
    assert_eq!(
        grid.shoot(Coord::new(0, 0)).unwrap_err(),
        GridError::AlreadyTargeted
    );
}

#[test]
fn test_place_out_of_bounds() {
    let mut grid = Grid::new(6).unwrap();
    // tail hangs off the right edge
    let vessel = Vessel::new(Coord::new(0, 4), 3, Orientation::Horizontal);
    assert_eq!(
        grid.place_vessel(vessel).unwrap_err(),
        GridError::InvalidPlacement
    );
    // nothing was placed
    assert_eq!(grid.occupied_cells(), 0);
    assert!(grid.vessels().is_empty());
}

#[test]
fn test_place_rejects_diagonal_adjacency() {
    let mut grid = Grid::new(6).unwrap();
    grid.place_vessel(Vessel::new(Coord::new(0, 0), 3, Orientation::Horizontal))
        .unwrap();
    // (1, 1) touches the first vessel diagonally
    assert_eq!(
        grid.place_vessel(Vessel::new(Coord::new(1, 1), 1, Orientation::Horizontal))
            .unwrap_err(),
        GridError::InvalidPlacement
    );
    // one row further down is clear of the contour
    grid.place_vessel(Vessel::new(Coord::new(2, 1), 1, Orientation::Horizontal))
        .unwrap();
}

#[test]
fn test_failed_placement_mutates_nothing() {
    let mut grid = Grid::new(6).unwrap();
    grid.place_vessel(Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    let occupied = grid.occupied_cells();

    // last footprint cell hangs off the bottom edge
    let bad = Vessel::new(Coord::new(4, 3), 3, Orientation::Vertical);
    assert_eq!(grid.place_vessel(bad).unwrap_err(), GridError::InvalidPlacement);
    assert_eq!(grid.occupied_cells(), occupied);
    assert_eq!(grid.vessels().len(), 1);

    // a cell the bad vessel would have covered is still placeable
    grid.place_vessel(Vessel::new(Coord::new(5, 3), 1, Orientation::Horizontal))
        .unwrap();
}

#[test]
fn test_shoot_out_of_bounds() {
    let mut grid = grid_with(&[Vessel::new(Coord::new(0, 0), 1, Orientation::Horizontal)]);
    assert_eq!(
        grid.shoot(Coord::new(-1, 0)).unwrap_err(),
        GridError::OutOfBounds
    );
    assert_eq!(
        grid.shoot(Coord::new(0, 6)).unwrap_err(),
        GridError::OutOfBounds
    );
}

#[test]
fn test_shoot_twice_rejected() {
    let mut grid = grid_with(&[Vessel::new(Coord::new(3, 3), 1, Orientation::Horizontal)]);
    assert_eq!(grid.shoot(Coord::new(0, 0)).unwrap(), ShotOutcome::Miss);
    assert_eq!(
        grid.shoot(Coord::new(0, 0)).unwrap_err(),
        GridError::AlreadyTargeted
    );
    assert_eq!(grid.cell(Coord::new(0, 0)), CellState::Miss);
}

#[test]
fn test_hit_then_sink() {
    let mut grid = grid_with(&[Vessel::new(Coord::new(1, 1), 3, Orientation::Horizontal)]);

    assert_eq!(grid.shoot(Coord::new(1, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.cell(Coord::new(1, 1)), CellState::Hit);
    assert_eq!(grid.destroyed_count(), 0);

    assert_eq!(grid.shoot(Coord::new(1, 2)).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.shoot(Coord::new(1, 3)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(grid.destroyed_count(), 1);
    assert!(grid.all_destroyed());
}

#[test]
fn test_single_cell_sink() {
    let mut grid = grid_with(&[Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal)]);
    assert_eq!(grid.shoot(Coord::new(2, 2)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(grid.destroyed_count(), 1);
}

#[test]
fn test_sink_reveals_contour() {
    let mut grid = grid_with(&[Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal)]);
    // a prior miss inside the future contour keeps its own marking
    assert_eq!(grid.shoot(Coord::new(1, 1)).unwrap(), ShotOutcome::Miss);

    assert_eq!(grid.shoot(Coord::new(2, 2)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(grid.cell(Coord::new(1, 2)), CellState::NearMiss);
    assert_eq!(grid.cell(Coord::new(3, 3)), CellState::NearMiss);
    assert_eq!(grid.cell(Coord::new(1, 1)), CellState::Miss);

    // revealed contour cells can no longer be targeted
    assert_eq!(
        grid.shoot(Coord::new(3, 3)).unwrap_err(),
        GridError::AlreadyTargeted
    );
}

#[test]
fn test_reset_discards_placement_reservations() {
    let mut grid = Grid::new(6).unwrap();
    grid.place_vessel(Vessel::new(Coord::new(0, 0), 2, Orientation::Vertical))
        .unwrap();
    // contour cell is reserved during placement
    assert_eq!(
        grid.shoot(Coord::new(0, 1)).unwrap_err(),
        GridError::AlreadyTargeted
    );

    grid.reset_transient_state();
    assert_eq!(grid.shoot(Coord::new(0, 1)).unwrap(), ShotOutcome::Miss);
    assert_eq!(grid.shoot(Coord::new(0, 0)).unwrap(), ShotOutcome::Hit);
}
