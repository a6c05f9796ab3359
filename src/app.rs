// app.rs - Simulation session driven by the egui front end

use conway::GridEngine;
use egui::{Color32, Vec2};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use crate::config::SimConfig;
use crate::patterns;

const HISTORY_LEN: usize = 10;

pub struct GameOfLife {
    pub grid: GridEngine,
    pub cell_size: f32,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
    random_seed: u64,
}

impl GameOfLife {
    pub fn new(config: SimConfig) -> Self {
        Self {
            grid: GridEngine::new(config.grid_width, config.grid_height),
            cell_size: config.cell_size,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.update_interval,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
            random_seed: 0,
        }
    }

    /// Advances one generation and pauses if the grid has been seen recently.
    pub fn update_generation(&mut self) {
        self.grid.advance_generation();
        if self.check_for_cycle() && self.is_running {
            log::info!("Cycle detected at generation {}, pausing", self.grid.generation());
            self.is_running = false;
        }
    }

    /// Steps if running and the update interval has elapsed since the last step.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.duration_since(self.last_update) < self.update_interval {
            return false;
        }
        self.update_generation();
        self.last_update = now;
        true
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = Instant::now();
            log::info!("Game running");
        } else {
            log::info!("Not running");
        }
    }

    pub fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for cell in self.grid.cells() {
            cell.alive.hash(&mut hasher);
        }
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let seen = self.grid_history[..self.history_count.min(HISTORY_LEN)].contains(&current_hash);
        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        seen
    }

    fn clear_history(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
    }

    pub fn clear_grid(&mut self) {
        self.is_running = false;
        self.grid.reset();
        self.clear_history();
        log::info!("Grid cleared");
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            self.is_running = false;
            let placed = patterns::apply_pattern(&mut self.grid, pattern);
            self.clear_history();
            log::info!("Applied {} ({} cells)", pattern.name, placed);
        }
    }

    pub fn apply_random_pattern(&mut self) {
        self.is_running = false;
        self.random_seed = self.random_seed.wrapping_add(1);
        patterns::apply_random_pattern(&mut self.grid, self.random_seed);
        self.clear_history();
        log::info!("Random soup with {} live cells", self.grid.live_count());
    }

    /// Grid coordinates under a position relative to the grid's top-left corner.
    ///
    /// Uses `floor(pixel / cell_size)` clamped to the grid, so positions on or
    /// past the far edge resolve to the last row or column.
    pub fn cell_at(&self, local: Vec2) -> Option<(usize, usize)> {
        if self.grid.width() == 0 || self.grid.height() == 0 {
            return None;
        }
        let clamp = |pixel: f32, len: usize| ((pixel / self.cell_size).floor().max(0.0) as usize).min(len - 1);
        Some((clamp(local.x, self.grid.width()), clamp(local.y, self.grid.height())))
    }

    /// Handles a click on the grid: toggles while paused, probes neighbors while running.
    pub fn click(&mut self, local: Vec2) {
        let Some((x, y)) = self.cell_at(local) else {
            return;
        };

        if self.is_running {
            match self.grid.count_live_neighbors(x, y) {
                Ok(count) => log::info!("Cell [{x},{y}] has {count} live neighbors"),
                Err(err) => log::warn!("{err}"),
            }
            return;
        }

        match self.grid.toggle(x, y) {
            Ok(()) => {
                self.clear_history();
                log::debug!("Clicked: [{x},{y}], alive: {}", self.grid.is_alive(x, y).unwrap_or(false));
            }
            Err(err) => log::warn!("{err}"),
        }
    }

    pub fn live_cells(&self) -> usize {
        self.grid.live_count()
    }
}
