//! Linear vessels and their remaining-segment bookkeeping.

use crate::coord::Coord;
use core::fmt;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A vessel occupying `length` contiguous cells starting at its bow.
///
/// The footprint is derived from bow, length and orientation rather than
/// stored. Only the remaining-segment counter mutates over a match; it
/// never increases and reaches zero exactly when the vessel is destroyed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coord,
    length: u8,
    orientation: Orientation,
    segments_left: u8,
}

impl Vessel {
    /// Create a vessel with all segments intact. `length` must be at least 1;
    /// grid placement validates that the footprint actually fits.
    pub fn new(bow: Coord, length: u8, orientation: Orientation) -> Self {
        Vessel {
            bow,
            length,
            orientation,
            segments_left: length,
        }
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn segments_left(&self) -> u8 {
        self.segments_left
    }

    /// The cells this vessel occupies, bow first.
    pub fn footprint(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dr, dc) = match self.orientation {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        };
        (0..self.length as i16)
            .map(move |i| Coord::new(self.bow.row + dr * i, self.bow.col + dc * i))
    }

    /// Whether `target` lies on this vessel's footprint.
    pub fn covers(&self, target: Coord) -> bool {
        self.footprint().any(|c| c == target)
    }

    /// Record a hit on one segment. Returns `true` when this hit destroys
    /// the vessel.
    pub fn register_hit(&mut self) -> bool {
        self.segments_left = self.segments_left.saturating_sub(1);
        self.segments_left == 0
    }

    /// True once every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.segments_left == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ bow: ({}, {}), length: {}, orientation: {:?}, segments_left: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.segments_left,
        )
    }
}
