mod format_int;
mod parse_rle;
mod state_hash;

pub use format_int::NiceInt;
pub use parse_rle::{parse_rle, RlePattern};
pub use state_hash::{state_hash, StateHash};
