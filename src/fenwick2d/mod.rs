//! Rectangle sums over a 2D grid.
//!
//! Public coordinates are 0-indexed. The tree only understands additive deltas while
//! [`Fenwick2D::update`] takes the new absolute value of a cell, so the grid keeps a copy of
//! the current cell values next to the tree and every update reads it before writing.

use crate::index::{next_index, prev_index};
use crate::{FenwickError, Result, Value};
use rayon::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fenwick2D {
    rows: usize,
    cols: usize,
    // (rows + 1) x (cols + 1), row and column 0 are unused
    tree: Vec<Vec<Value>>,
    // rows x cols, the last value written to each cell
    current: Vec<Vec<Value>>,
}

impl Fenwick2D {
    /// Index `matrix` cell by cell.
    ///
    /// An empty matrix, or one whose first row is empty, yields an empty grid on which every
    /// operation is a no-op. Otherwise all rows must be as long as the first one.
    pub fn new(matrix: &[Vec<Value>]) -> Result<Self> {
        let mut res = match Self::allocate(matrix)? {
            Some(res) => res,
            None => return Ok(Self::default()),
        };
        for (row, values) in matrix.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                res.update_tree(row + 1, col + 1, *value);
            }
        }
        log::debug!("Fenwick2D built, {}x{} cells", res.rows, res.cols);
        Ok(res)
    }

    /// Same result as [`Fenwick2D::new`] in O(rows * cols).
    ///
    /// Every row is turned into a 1D tree in parallel, then each row is folded into the row
    /// covering it.
    pub fn new_parallel(matrix: &[Vec<Value>]) -> Result<Self> {
        let mut res = match Self::allocate(matrix)? {
            Some(res) => res,
            None => return Ok(Self::default()),
        };
        let cols = res.cols;
        res.tree[1..]
            .par_iter_mut()
            .zip(matrix.par_iter())
            .for_each(|(tree_row, values)| {
                tree_row[1..].copy_from_slice(values);
                for col in 1..=cols {
                    let parent = next_index(col);
                    if parent <= cols {
                        tree_row[parent] = tree_row[parent].wrapping_add(tree_row[col]);
                    }
                }
            });
        for row in 1..=res.rows {
            let parent = next_index(row);
            if parent > res.rows {
                continue;
            }
            let (lo, hi) = res.tree.split_at_mut(parent);
            let (src, dst) = (&lo[row], &mut hi[0]);
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = d.wrapping_add(*s);
            }
        }
        log::debug!("Fenwick2D built in parallel, {}x{} cells", res.rows, res.cols);
        Ok(res)
    }

    /// Validate the shape of `matrix` and allocate a zeroed tree for it.
    /// Returns `None` for the degenerate empty grid.
    fn allocate(matrix: &[Vec<Value>]) -> Result<Option<Self>> {
        let rows = matrix.len();
        let cols = matrix.first().map(|r| r.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Ok(None);
        }
        if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(FenwickError::RaggedMatrix {
                row,
                expected: cols,
                found: r.len(),
            });
        }
        Ok(Some(Self {
            rows,
            cols,
            tree: vec![vec![0; cols + 1]; rows + 1],
            current: matrix.to_vec(),
        }))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Value> {
        self.current.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set the cell at `(row, col)` to `value`.
    ///
    /// No-op on an empty grid.
    pub fn update(&mut self, row: usize, col: usize, value: Value) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        if row >= self.rows {
            log::trace!("rejected update at row {} of {}", row, self.rows);
            return Err(FenwickError::out_of_range(row, self.rows));
        }
        if col >= self.cols {
            log::trace!("rejected update at col {} of {}", col, self.cols);
            return Err(FenwickError::out_of_range(col, self.cols));
        }
        let cell = &mut self.current[row][col];
        let delta = value.wrapping_sub(*cell);
        *cell = value;
        self.update_tree(row + 1, col + 1, delta);
        Ok(())
    }

    fn update_tree(&mut self, mut tree_row: usize, tree_col: usize, delta: Value) {
        debug_assert!(tree_row > 0 && tree_col > 0);
        let (rows, cols) = (self.rows, self.cols);
        while tree_row <= rows {
            let line = &mut self.tree[tree_row];
            let mut c = tree_col;
            while c <= cols {
                line[c] = line[c].wrapping_add(delta);
                c = next_index(c);
            }
            tree_row = next_index(tree_row);
        }
    }

    /// Sum of the cells `[0, tree_row) x [0, tree_col)`.
    fn sum_from_start(&self, mut tree_row: usize, tree_col: usize) -> Value {
        let mut sum: Value = 0;
        while tree_row > 0 {
            let line = &self.tree[tree_row];
            let mut c = tree_col;
            while c > 0 {
                sum = sum.wrapping_add(line[c]);
                c = prev_index(c);
            }
            tree_row = prev_index(tree_row);
        }
        sum
    }

    /// Sum of the inclusive rectangle `[row1, row2] x [col1, col2]`. `0` on an empty grid.
    ///
    /// # Panics
    ///
    /// The rectangle must satisfy `row1 <= row2 < rows` and `col1 <= col2 < cols`.
    /// Corners past the grid panic. Inverted rectangles are not checked in release builds and
    /// return a meaningless value.
    pub fn sum_region(&self, row1: usize, col1: usize, row2: usize, col2: usize) -> Value {
        if self.is_empty() {
            return 0;
        }
        debug_assert!(row1 <= row2, "inverted rows {} > {}", row1, row2);
        debug_assert!(col1 <= col2, "inverted cols {} > {}", col1, col2);

        self.sum_from_start(row2 + 1, col2 + 1)
            .wrapping_sub(self.sum_from_start(row2 + 1, col1))
            .wrapping_sub(self.sum_from_start(row1, col2 + 1))
            .wrapping_add(self.sum_from_start(row1, col1))
    }

    pub fn total(&self) -> Value {
        self.sum_from_start(self.rows, self.cols)
    }
}
