use crate::LifeEngine;
use anyhow::{bail, Result};

/// Small named pattern given by the `(x, y)` offsets of its alive cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

/// Travels by `(1, 1)` every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
};

/// Oscillates with period 2.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(1, 0), (1, 1), (1, 2)],
};

/// Still life.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
};

/// Dies out after 2 generations.
pub const VEE: Pattern = Pattern {
    name: "vee",
    cells: &[(1, 1), (1, 3), (2, 2)],
};

pub const ALL: [Pattern; 4] = [GLIDER, BLINKER, BLOCK, VEE];

/// Side of the field used by [`demo_engine`].
pub const DEMO_SIZE: usize = 16;

impl Pattern {
    pub fn by_name(name: &str) -> Result<Self> {
        match ALL.iter().find(|p| p.name == name) {
            Some(&p) => Ok(p),
            None => bail!(
                "Unknown pattern {:?}, expected one of: {}",
                name,
                ALL.map(|p| p.name).join(", ")
            ),
        }
    }

    /// Sets the pattern's cells alive, shifted by `(dx, dy)`.
    pub fn seed(&self, engine: &mut LifeEngine, dx: i64, dy: i64) {
        for &(x, y) in self.cells {
            engine.set_alive(x + dx, y + dy);
        }
    }

    /// Blank field of side `size` with the pattern at its usual place.
    pub fn engine(&self, size: usize) -> LifeEngine {
        let mut result = LifeEngine::blank(size);
        self.seed(&mut result, 0, 0);
        result
    }
}

/// Glider on a [`DEMO_SIZE`] field.
pub fn demo_engine() -> LifeEngine {
    GLIDER.engine(DEMO_SIZE)
}
