use crate::common::GridError;
use crate::coord::Coord;
use rand::rngs::SmallRng;

/// Interface implemented by the two targeting styles: random fire and
/// console input. An actor only produces candidate coordinates; the match
/// engine owns the retry loop around the opponent grid's shot validation.
pub trait Actor {
    /// Produce the next candidate target on the opponent's grid.
    fn pick_target(&mut self, rng: &mut SmallRng) -> Coord;

    /// Called when a candidate was rejected by the opponent's grid, before
    /// the actor is asked again. Interactive actors explain the retry;
    /// automated ones ignore it.
    fn handle_rejection(&mut self, _target: Coord, _reason: &GridError) {}
}
