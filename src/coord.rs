//! Grid positions and the 8-neighborhood used for contour reservations.

/// Offsets of the eight cells surrounding a position.
const NEAR: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A position on the grid, 0-indexed. Axes are signed so that off-board
/// candidates (a contour cell past the edge, a bad shot) are representable
/// and can be rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: i16,
    pub col: i16,
}

impl Coord {
    pub const fn new(row: i16, col: i16) -> Self {
        Coord { row, col }
    }

    /// The eight surrounding positions, edge neighbors included. Callers
    /// filter out-of-bounds results themselves.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEAR.iter()
            .map(move |&(dr, dc)| Coord::new(self.row + dr, self.col + dc))
    }
}
