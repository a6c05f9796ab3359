// ui.rs - egui view for the simulation session

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::app::GameOfLife;
use crate::config::{interval_for_rate, rate_for_interval};
use crate::patterns;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard: Enter starts/pauses, C clears while paused
        let (enter, clear) = ctx.input(|i| (i.key_pressed(egui::Key::Enter), i.key_pressed(egui::Key::C)));
        if enter {
            self.toggle_running();
        }
        if clear && !self.is_running {
            self.clear_grid();
        }

        self.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.grid.generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = rate_for_interval(self.update_interval);
                if ui.add(egui::Slider::new(&mut speed, 1.0..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = interval_for_rate(speed as f64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused. Enter starts/pauses, C clears.");

            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            let total = self.grid.width() * self.grid.height();
            let live_cells = self.live_cells();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total.max(1) as f32) * 100.0));
            });
        });

        // Keep stepping without waiting for input
        if self.is_running {
            ctx.request_repaint_after(self.update_interval.min(Duration::from_millis(16)));
        }
    }
}

impl GameOfLife {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let cell = self.cell_size;
        let total_size = Vec2::new(
            self.grid.width() as f32 * cell,
            self.grid.height() as f32 * cell,
        );

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, self.dead_color);

        for live in self.grid.cells().filter(|c| c.alive) {
            let rect = Rect::from_min_size(
                origin + Vec2::new(live.x as f32 * cell, live.y as f32 * cell),
                Vec2::splat(cell),
            );
            painter.rect_filled(rect, 0.0, self.live_color);
        }

        // Grid lines
        let stroke = Stroke::new(0.5, Color32::from_gray(120));
        for x in 0..=self.grid.width() {
            let px = origin.x + x as f32 * cell;
            painter.line_segment([egui::pos2(px, origin.y), egui::pos2(px, origin.y + total_size.y)], stroke);
        }
        for y in 0..=self.grid.height() {
            let py = origin.y + y as f32 * cell;
            painter.line_segment([egui::pos2(origin.x, py), egui::pos2(origin.x + total_size.x, py)], stroke);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.click(pos - origin);
            }
        }
    }
}
