//! Match engine: two grids, two actors, turn alternation and the win check.

use crate::actor::Actor;
use crate::common::{GridError, ShotOutcome};
use crate::config::MatchConfig;
use crate::coord::Coord;
use crate::generator::generate_grid;
use crate::grid::Grid;
use alloc::boxed::Box;
use rand::rngs::SmallRng;

/// One of the two seats in a match. The interactive seat, when there is
/// one, is `First` and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Where the match stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingTurn(Side),
    Finished(Side),
}

/// A completed move: who fired, where, and what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
}

/// Owns both boards and both actors and sequences the match.
///
/// A strike keeps the turn with the shooter; a miss passes it. The match
/// finishes the moment either fleet is fully destroyed; there is no turn
/// limit or forfeiture.
pub struct Game {
    grids: [Grid; 2],
    actors: [Box<dyn Actor>; 2],
    fleet_len: usize,
    state: MatchState,
    moves: u32,
}

impl Game {
    /// Start a match on freshly generated random boards.
    pub fn new(
        config: &MatchConfig,
        actors: [Box<dyn Actor>; 2],
        rng: &mut SmallRng,
    ) -> Result<Self, GridError> {
        let first = generate_grid(rng, config)?;
        let second = generate_grid(rng, config)?;
        Self::with_grids(config, [first, second], actors)
    }

    /// Start a match on boards laid out by the caller. The grids must hold
    /// one vessel per manifest entry with their placement reservations
    /// already discarded.
    pub fn with_grids(
        config: &MatchConfig,
        grids: [Grid; 2],
        actors: [Box<dyn Actor>; 2],
    ) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Game {
            grids,
            actors,
            fleet_len: config.fleet.len(),
            state: MatchState::AwaitingTurn(Side::First),
            moves: 0,
        })
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    pub fn grid_mut(&mut self, side: Side) -> &mut Grid {
        &mut self.grids[side.index()]
    }

    /// Moves resolved so far, bonus moves included.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished(side) => Some(side),
            MatchState::AwaitingTurn(_) => None,
        }
    }

    /// Drive one complete move of the side to act: ask its actor for
    /// candidates until the opponent grid accepts a shot, then update the
    /// turn state. Rejected candidates are reported back to the actor and
    /// retried; they never escape this loop.
    ///
    /// Returns `None` once the match is finished.
    pub fn play_move(&mut self, rng: &mut SmallRng) -> Option<MoveRecord> {
        let side = match self.state {
            MatchState::AwaitingTurn(side) => side,
            MatchState::Finished(_) => return None,
        };
        let actor = &mut self.actors[side.index()];
        let target_grid = &mut self.grids[side.other().index()];

        let (target, outcome) = loop {
            let candidate = actor.pick_target(rng);
            match target_grid.shoot(candidate) {
                Ok(outcome) => break (candidate, outcome),
                Err(reason) => {
                    log::debug!(
                        "{:?} shot at ({}, {}) rejected: {}",
                        side,
                        candidate.row,
                        candidate.col,
                        reason
                    );
                    actor.handle_rejection(candidate, &reason);
                }
            }
        };
        self.moves += 1;

        self.state = if target_grid.destroyed_count() == self.fleet_len {
            MatchState::Finished(side)
        } else if outcome.keeps_turn() {
            MatchState::AwaitingTurn(side)
        } else {
            MatchState::AwaitingTurn(side.other())
        };

        Some(MoveRecord {
            side,
            target,
            outcome,
        })
    }
}
