/// Square field of cells stored row by row, one byte per cell (`0` or `1`).
#[derive(Clone, PartialEq, Eq)]
pub(super) struct Grid {
    cells: Vec<u8>,
    size: usize,
}

impl Grid {
    pub(super) fn blank(size: usize) -> Self {
        Self {
            cells: vec![0; size * size],
            size,
        }
    }

    pub(super) fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[x * self.size + y]
    }

    pub(super) fn set(&mut self, x: usize, y: usize, value: u8) {
        debug_assert!(value <= 1);
        self.cells[x * self.size + y] = value;
    }

    pub(super) fn row(&self, x: usize) -> &[u8] {
        &self.cells[x * self.size..(x + 1) * self.size]
    }

    pub(super) fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.cells.chunks_exact(self.size)
    }

    pub(super) fn population(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// Writes the next generation of `src` into `self`.
    ///
    /// `wrap[i]` holds the indices preceding and following `i` on the torus.
    pub(super) fn compute_next(&mut self, src: &Grid, wrap: &[[usize; 2]]) {
        debug_assert_eq!(self.size, src.size);
        debug_assert_eq!(wrap.len(), src.size);

        for (x, dst_row) in self.cells.chunks_exact_mut(self.size).enumerate() {
            let [x1, x2] = wrap[x];
            let (row_prev, row_curr, row_next) = (src.row(x1), src.row(x), src.row(x2));

            for (y, dst) in dst_row.iter_mut().enumerate() {
                let [y1, y2] = wrap[y];
                let neibs = row_prev[y1]
                    + row_prev[y]
                    + row_prev[y2]
                    + row_curr[y1]
                    + row_curr[y2]
                    + row_next[y1]
                    + row_next[y]
                    + row_next[y2];
                *dst = match (row_curr[y], neibs) {
                    (0, 3) | (1, 2) | (1, 3) => 1,
                    _ => 0,
                };
            }
        }
    }
}
