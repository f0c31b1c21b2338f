//! Common types: shot outcomes and grid errors.

use crate::mask::MaskError;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit open water.
    Miss,
    /// Shot hit a vessel segment without destroying it.
    Hit,
    /// Shot destroyed the last remaining segment of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// A successful strike lets the same side fire again.
    pub fn keeps_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by grid operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    /// Underlying mask error (invalid size or index).
    Mask(MaskError),
    /// Shot coordinate is off the grid.
    OutOfBounds,
    /// Cell was already shot at or is reserved.
    AlreadyTargeted,
    /// Vessel footprint is off the grid or collides with a reservation.
    InvalidPlacement,
    /// Random placement exhausted its attempt budget.
    GenerationFailed,
    /// Board size or fleet manifest is unusable.
    InvalidConfig,
}

impl From<MaskError> for GridError {
    fn from(err: MaskError) -> Self {
        GridError::Mask(err)
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::Mask(e) => write!(f, "Mask error: {}", e),
            GridError::OutOfBounds => write!(f, "That shot is off the board"),
            GridError::AlreadyTargeted => write!(f, "That cell was already targeted"),
            GridError::InvalidPlacement => {
                write!(f, "Vessel does not fit there")
            }
            GridError::GenerationFailed => write!(f, "Unable to lay out the fleet"),
            GridError::InvalidConfig => write!(f, "Board size or fleet manifest is invalid"),
        }
    }
}
