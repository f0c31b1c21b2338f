//! Randomized fleet placement with a bounded retry budget.

use crate::common::GridError;
use crate::config::{MatchConfig, BOARD_RETRY_LIMIT, PLACEMENT_ATTEMPT_BUDGET};
use crate::coord::Coord;
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};
use rand::Rng;

/// Attempt one complete layout for `config`.
///
/// Every vessel in the manifest is tried at random bows and orientations;
/// a rejected placement mutates nothing, so the next attempt starts from a
/// clean state. The attempt budget is global across the manifest. On
/// success the placement reservations are discarded so play starts with a
/// clean shot history.
pub fn try_populate<R: Rng + ?Sized>(rng: &mut R, config: &MatchConfig) -> Result<Grid, GridError> {
    let mut grid = Grid::new(config.size)?;
    let mut attempts: u32 = 0;
    for &length in config.fleet.iter() {
        loop {
            if attempts >= PLACEMENT_ATTEMPT_BUDGET {
                log::debug!(
                    "fleet layout abandoned after {} placement attempts",
                    attempts
                );
                return Err(GridError::GenerationFailed);
            }
            attempts += 1;
            let bow = Coord::new(
                rng.random_range(0..config.size as i16),
                rng.random_range(0..config.size as i16),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match grid.place_vessel(Vessel::new(bow, length, orientation)) {
                Ok(()) => break,
                Err(GridError::InvalidPlacement) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    grid.reset_transient_state();
    Ok(grid)
}

/// Produce a fully laid-out grid, regenerating from an empty board whenever
/// a layout exhausts its budget. Gives up with `GenerationFailed` only
/// after `BOARD_RETRY_LIMIT` whole boards, which in practice means the
/// manifest cannot fit the board at all.
pub fn generate_grid<R: Rng + ?Sized>(rng: &mut R, config: &MatchConfig) -> Result<Grid, GridError> {
    config.validate()?;
    for attempt in 0..BOARD_RETRY_LIMIT {
        match try_populate(rng, config) {
            Ok(grid) => {
                log::debug!("fleet laid out on board attempt {}", attempt + 1);
                return Ok(grid);
            }
            Err(GridError::GenerationFailed) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(GridError::GenerationFailed)
}
