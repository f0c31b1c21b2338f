#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod actor;
mod actor_random;
mod common;
mod config;
mod coord;
mod game;
mod generator;
mod grid;
mod mask;
mod vessel;
#[cfg(feature = "std")]
mod actor_console;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use actor::*;
pub use actor_random::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use mask::{Mask, MaskError};
pub use vessel::*;
#[cfg(feature = "std")]
pub use actor_console::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
