#![cfg(feature = "std")]

use crate::actor::Actor;
use crate::common::GridError;
use crate::console::parse_target;
use crate::coord::Coord;
use rand::rngs::SmallRng;
use std::io::{self, Write};

/// Human actor reading targets from stdin.
///
/// Keeps asking until the input is exactly two in-range digits; rejected
/// shots are explained and the prompt repeats. Malformed input is never
/// fatal.
pub struct ConsoleActor {
    size: u8,
}

impl ConsoleActor {
    pub fn new(size: u8) -> Self {
        Self { size }
    }
}

impl Actor for ConsoleActor {
    fn pick_target(&mut self, _rng: &mut SmallRng) -> Coord {
        loop {
            print!("\nYour shot (row column): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            match parse_target(line.trim(), self.size) {
                Some(target) => return target,
                None => println!(
                    "Enter exactly two digits between 1 and {}, row then column.",
                    self.size
                ),
            }
        }
    }

    fn handle_rejection(&mut self, _target: Coord, reason: &GridError) {
        println!("{}", reason);
    }
}
