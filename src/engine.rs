mod grid;

use crate::utils::parse_rle;
use anyhow::{bail, Result};
use grid::Grid;

/// Glyph of an alive cell in [`LifeEngine::render`].
pub const ALIVE_GLYPH: char = '█';
/// Glyph of a dead cell in [`LifeEngine::render`].
pub const DEAD_GLYPH: char = '░';

/// Conway's Game of Life (B3/S23) on a square field with edges stitched together.
///
/// Two buffers are kept: one holds the visible generation, the other is
/// overwritten with the next one on every update, after which their roles swap.
///
/// # Example
///
/// ```rust
/// use life_bench::LifeEngine;
///
/// let mut life = LifeEngine::blank(4);
/// life.set_alive(1, 0);
/// life.set_alive(1, 1);
/// life.set_alive(1, 2);
/// life.multi_step(2);
///
/// assert_eq!(life.generation(), 2);
/// assert!(life.is_alive(1, 0) && life.is_alive(1, 1) && life.is_alive(1, 2));
/// ```
#[derive(Clone)]
pub struct LifeEngine {
    buffers: [Grid; 2],
    curr: usize, // index of the buffer holding the visible generation
    wrap: Vec<[usize; 2]>,
    size: usize,
    generation: u64,
}

impl LifeEngine {
    /// Largest side of a field created by [`from_rle`](Self::from_rle).
    pub const MAX_RLE_SIDE: usize = 1 << 12;

    /// Create a blank `size x size` field.
    ///
    /// Panics if `size` is zero.
    pub fn blank(size: usize) -> Self {
        assert!(size >= 1, "Field size must be positive");
        let wrap = (0..size)
            .map(|i| {
                let prev = if i == 0 { size - 1 } else { i - 1 };
                let next = if i == size - 1 { 0 } else { i + 1 };
                [prev, next]
            })
            .collect();
        Self {
            buffers: [Grid::blank(size), Grid::blank(size)],
            curr: 0,
            wrap,
            size,
            generation: 0,
        }
    }

    /// Create a field with random cells
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    /// `fill_rate` - probability of a cell being alive
    pub fn random(size: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(size);
        for x in 0..size {
            for y in 0..size {
                if rng.gen_bool(fill_rate) {
                    result.grid_mut().set(x, y, 1);
                }
            }
        }
        result
    }

    /// Parse an RLE pattern and place it at the origin.
    ///
    /// The side of the field is `min_size` or the pattern's bounding box, whichever is larger;
    /// it must not exceed [`MAX_RLE_SIDE`](Self::MAX_RLE_SIDE).
    pub fn from_rle(data: &[u8], min_size: usize) -> Result<Self> {
        let pattern = parse_rle(data)?;
        let size = min_size.max(pattern.rows).max(pattern.columns).max(1);
        if size > Self::MAX_RLE_SIDE {
            bail!("Field side {} exceeds the limit of {}", size, Self::MAX_RLE_SIDE);
        }
        let mut result = Self::blank(size);
        for &(x, y) in &pattern.alive {
            result.grid_mut().set(x, y, 1);
        }
        Ok(result)
    }

    fn grid(&self) -> &Grid {
        &self.buffers[self.curr]
    }

    fn grid_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.curr]
    }

    fn coords(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.size)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.size)?;
        Some((x, y))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of updates applied since the field was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Makes the cell alive; coordinates outside the field are ignored.
    pub fn set_alive(&mut self, x: i64, y: i64) {
        if let Some((x, y)) = self.coords(x, y) {
            self.grid_mut().set(x, y, 1);
        }
    }

    /// Returns `false` for coordinates outside the field.
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.coords(x, y).is_some_and(|(x, y)| self.grid().get(x, y) == 1)
    }

    pub fn is_dead(&self) -> bool {
        self.population() == 0
    }

    pub fn population(&self) -> usize {
        self.grid().population()
    }

    fn update_inner(&mut self) {
        self.curr ^= 1;
        let [a, b] = &mut self.buffers;
        let (src, dst) = if self.curr == 0 { (&*b, a) } else { (&*a, b) };
        dst.compute_next(src, &self.wrap);
        self.generation += 1;
    }

    /// Advance the field by one generation.
    pub fn step(&mut self) {
        self.update_inner();
    }

    /// Advance the field by `n` generations; the result is the same as `n` calls to [`step`].
    ///
    /// [`step`]: Self::step
    pub fn multi_step(&mut self, n: u64) {
        for _ in 0..n {
            self.update_inner();
        }
    }

    /// One glyph per cell, a newline after every row.
    ///
    /// The output depends only on the cells, never on the generation number.
    pub fn render(&self) -> String {
        let mut result =
            String::with_capacity(self.size * (self.size * ALIVE_GLYPH.len_utf8() + 1));
        for row in self.grid().rows() {
            result.extend(row.iter().map(|&c| if c == 1 { ALIVE_GLYPH } else { DEAD_GLYPH }));
            result.push('\n');
        }
        result
    }
}
