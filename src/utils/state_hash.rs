use std::fmt;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a digest of a rendered field, used to compare fields cheaply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateHash(pub u32);

impl fmt::Display for StateHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Hashes the UTF-16 code units of `text`, so digests agree with hosts that
/// store strings as UTF-16.
pub fn state_hash(text: &str) -> StateHash {
    let hash = text.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ unit as u32).wrapping_mul(FNV_PRIME)
    });
    StateHash(hash)
}
