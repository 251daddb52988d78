#![warn(clippy::all)]

pub mod benchmark;
mod engine;
mod gui;
pub mod patterns;
mod utils;

pub use engine::{LifeEngine, ALIVE_GLYPH, DEAD_GLYPH};
pub use gui::{App, Config};
pub use utils::{parse_rle, state_hash, NiceInt, RlePattern, StateHash};
