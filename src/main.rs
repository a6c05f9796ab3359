// main.rs - Conway's Game of Life on a bounded grid
// The simulation core lives in the `conway` crate; this binary is the egui front end

use clap::Parser;
use eframe::egui;

mod app;
mod config;
mod patterns;
mod ui;

use app::GameOfLife;
use config::{CliArgs, SimConfig};

// Room for the control rows above and the statistics row below the grid
const CHROME_WIDTH: f32 = 40.0;
const CHROME_HEIGHT: f32 = 200.0;
const MIN_WINDOW_WIDTH: f32 = 720.0;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::from(CliArgs::parse());
    log::info!(
        "Starting {}x{} grid, {} px cells, {:?} per generation",
        config.grid_width,
        config.grid_height,
        config.cell_size,
        config.update_interval
    );

    let [grid_w, grid_h] = config.grid_extent();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([(grid_w + CHROME_WIDTH).max(MIN_WINDOW_WIDTH), grid_h + CHROME_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(config))),
    )
}
