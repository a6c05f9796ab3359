//! Bounded Conway's Game of Life engine.
//!
//! [`GridEngine`] owns a fixed `width x height` grid of cells and advances it
//! one generation at a time under the B3/S23 rule. Neighbors beyond the grid
//! edge are treated as dead; there is no wraparound.

mod error;
mod grid;
pub mod rule;

pub use error::{GridError, Result};
pub use grid::{Cell, GridEngine};
