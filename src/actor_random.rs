use crate::actor::Actor;
use crate::coord::Coord;
use rand::rngs::SmallRng;
use rand::Rng;

/// Automated actor firing at uniformly random in-bounds cells.
///
/// It keeps no memory of past shots; repeats are rejected by the opponent
/// grid and simply retried with a fresh draw.
pub struct RandomActor {
    size: u8,
}

impl RandomActor {
    pub fn new(size: u8) -> Self {
        Self { size }
    }
}

impl Actor for RandomActor {
    fn pick_target(&mut self, rng: &mut SmallRng) -> Coord {
        Coord::new(
            rng.random_range(0..self.size as i16),
            rng.random_range(0..self.size as i16),
        )
    }
}
