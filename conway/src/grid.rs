// grid.rs - Fixed-size grid and generation stepping for Conway's Game of Life

use crate::error::{GridError, Result};
use crate::rule;

/// Relative positions of the 3x3 neighborhood minus the center.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Snapshot of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

/// A bounded Game of Life grid.
///
/// Cells are stored row-major. Stepping writes into a second buffer of the
/// same shape and swaps it in once the sweep is done, so every neighbor count
/// in a step sees the grid as it was before the step began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEngine {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

impl GridEngine {
    /// Creates a grid with every cell dead.
    ///
    /// A zero dimension yields an empty grid on which every coordinate is
    /// out of bounds.
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            cells: vec![false; size],
            next: vec![false; size],
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations advanced since creation or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Cell> {
        let alive = self.is_alive(x, y)?;
        Ok(Cell { x, y, alive })
    }

    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flips the cell at `(x, y)` between alive and dead.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Kills every cell and restarts the generation count.
    pub fn reset(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Counts live cells among the eight neighbors of `(x, y)`.
    ///
    /// Neighbors past the grid edge are not counted, so a corner cell can
    /// report at most 3 and an edge cell at most 5.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        self.index(x, y)?;
        Ok(self.live_neighbors(x, y))
    }

    /// Advances the whole grid by one generation under B3/S23.
    pub fn advance_generation(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let neighbors = self.live_neighbors(x, y);
                self.next[idx] = rule::next_state(self.cells[idx], neighbors);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;

        log::trace!("generation {} -> {} live cells", self.generation, self.live_count());
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(idx, &alive)| Cell {
            x: idx % self.width,
            y: idx / self.width,
            alive,
        })
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if self.contains(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds { x, y, width: self.width, height: self.height })
        }
    }

    // Caller guarantees (x, y) is in bounds.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if nx < self.width && ny < self.height && self.cells[ny * self.width + nx] {
                count += 1;
            }
        }
        count
    }
}
