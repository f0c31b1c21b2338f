//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_grid, Actor, Coord, Game, Grid, GridError, MatchConfig, MatchState, MoveRecord,
    Orientation, RandomActor, ShotOutcome, Side, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{greet, init_logging, parse_target, print_boards, ConsoleActor};
