// config.rs - Command-line configuration for the simulation window

use clap::Parser;
use clap::builder::TypedValueParser;
use std::time::Duration;

pub const DEFAULT_GRID_WIDTH: usize = 64;
pub const DEFAULT_GRID_HEIGHT: usize = 48;
pub const DEFAULT_CELL_SIZE: u32 = 10; // pixels per cell
pub const DEFAULT_RATE: u32 = 5; // generations per second

/// Conway's Game of Life on a bounded grid.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Number of columns in the grid.
    #[arg(
        long,
        value_name = "COLUMNS",
        default_value_t = DEFAULT_GRID_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..=1024).map(usize::from)
    )]
    pub width: usize,
    /// Number of rows in the grid.
    #[arg(
        long,
        value_name = "ROWS",
        default_value_t = DEFAULT_GRID_HEIGHT,
        value_parser = clap::value_parser!(u16).range(1..=1024).map(usize::from)
    )]
    pub height: usize,
    /// Edge length of a cell in pixels.
    #[arg(
        long = "cell-size",
        value_name = "PIXELS",
        default_value_t = DEFAULT_CELL_SIZE,
        value_parser = clap::value_parser!(u32).range(2..=64)
    )]
    pub cell_size: u32,
    /// Generations per second while running.
    #[arg(
        long,
        value_name = "GENERATIONS",
        default_value_t = DEFAULT_RATE,
        value_parser = clap::value_parser!(u32).range(1..=90)
    )]
    pub rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size: f32,
    pub update_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE as f32,
            update_interval: interval_for_rate(DEFAULT_RATE as f64),
        }
    }
}

impl From<CliArgs> for SimConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            grid_width: args.width,
            grid_height: args.height,
            cell_size: args.cell_size as f32,
            update_interval: interval_for_rate(args.rate as f64),
        }
    }
}

impl SimConfig {
    /// Size of the painted grid in points.
    pub fn grid_extent(&self) -> [f32; 2] {
        [
            self.grid_width as f32 * self.cell_size,
            self.grid_height as f32 * self.cell_size,
        ]
    }
}

pub fn interval_for_rate(generations_per_sec: f64) -> Duration {
    Duration::from_secs_f64(1.0 / generations_per_sec)
}

pub fn rate_for_interval(interval: Duration) -> f32 {
    1.0 / interval.as_secs_f32()
}
