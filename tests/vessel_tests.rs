use sea_battle::{Coord, Orientation, Vessel};

#[test]
fn test_footprint_horizontal() {
    let vessel = Vessel::new(Coord::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = vessel.footprint().collect();
    assert_eq!(
        cells,
        vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
    );
}

#[test]
fn test_footprint_vertical() {
    let vessel = Vessel::new(Coord::new(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = vessel.footprint().collect();
    assert_eq!(
        cells,
        vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(3, 0)
        ]
    );
}

#[test]
fn test_covers() {
    let vessel = Vessel::new(Coord::new(1, 1), 2, Orientation::Horizontal);
    assert!(vessel.covers(Coord::new(1, 1)));
    assert!(vessel.covers(Coord::new(1, 2)));
    assert!(!vessel.covers(Coord::new(1, 3)));
    assert!(!vessel.covers(Coord::new(2, 1)));
}

#[test]
fn test_register_hit_until_destroyed() {
    let mut vessel = Vessel::new(Coord::new(0, 0), 2, Orientation::Vertical);
    assert_eq!(vessel.segments_left(), 2);
    assert!(!vessel.is_destroyed());

    assert!(!vessel.register_hit());
    assert_eq!(vessel.segments_left(), 1);
    assert!(!vessel.is_destroyed());

    assert!(vessel.register_hit());
    assert_eq!(vessel.segments_left(), 0);
    assert!(vessel.is_destroyed());
}

#[test]
fn test_single_cell_vessel() {
    let mut vessel = Vessel::new(Coord::new(2, 2), 1, Orientation::Horizontal);
    assert_eq!(vessel.footprint().count(), 1);
    assert!(vessel.register_hit());
    assert!(vessel.is_destroyed());
}
