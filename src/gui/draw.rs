use super::{App, Config};
use crate::{patterns, state_hash, NiceInt};
use eframe::egui::{Button, DragValue, FontId, RichText, Slider, Stroke, TextEdit, Ui};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button<'_> {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        ui.add_enabled(self.is_paused, |ui: &mut Ui| {
            ui.horizontal(|ui| {
                ui.checkbox(
                    &mut self.pause_after_updates,
                    Self::new_text("Pause after "),
                );
                ui.add_enabled(self.pause_after_updates, |ui: &mut Ui| {
                    ui.add(DragValue::new(&mut self.updates_before_pause));
                    ui.label(Self::new_text(" updates"))
                });
            });

            if ui.add(Self::new_button("Next step")).clicked() {
                self.do_one_step = true;
            }

            ui.horizontal(|ui| {
                ui.label(Self::new_text("Generations per update: "));
                ui.add(
                    DragValue::new(&mut self.steps_per_frame)
                        .range(1..=Config::MAX_STEPS_PER_FRAME),
                )
            })
            .inner
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 1.0..=120.0).logarithmic(true));
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Reset field")).clicked() {
                self.reset_field();
            }
            ui.label(Self::new_text("size: "));
            ui.add(DragValue::new(&mut self.field_size).range(1..=Config::MAX_FIELD_SIZE));
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Pattern: "));
            for pattern in patterns::ALL {
                ui.radio_value(&mut self.pattern, pattern, Self::new_text(pattern.name));
            }
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Load RLE")).clicked() {
                self.load_field();
            }
            ui.label(Self::new_text("named: "));
            ui.add_sized(
                Config::FILENAME_INPUT_FIELD_SIZE,
                TextEdit::singleline(&mut self.filename_load),
            );
        });
        if let Some(error) = &self.load_error {
            ui.label(Self::new_text(error).color(Config::ERROR_COLOR));
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            NiceInt::from(self.life_engine.generation())
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            NiceInt::from_usize(self.life_engine.population())
        )));
        ui.label(Self::new_text(&format!(
            "Last field update: {:.3} ms",
            self.last_update_duration * 1e3
        )));
    }

    fn draw_benchmark_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Run benchmark")).clicked() {
                self.run_benchmark();
            }
            ui.label(Self::new_text("iterations: "));
            ui.add(
                DragValue::new(&mut self.bench_config.iterations)
                    .range(0..=Config::MAX_BENCH_ITERATIONS),
            );
        });

        if let Some(report) = &self.bench_report {
            let color = if report.hashes_match() {
                Config::TEXT_COLOR
            } else {
                Config::ERROR_COLOR
            };
            ui.label(Self::new_text(&report.to_string()).color(color));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);

                    ui.add_space(Config::GAP_ABOVE_STATS);

                    self.draw_stats(ui);
                });
            });

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_benchmark_controls(ui);
                });
            });
        });
    }

    fn draw_gol_field(&mut self, ui: &mut Ui, size_px: f32) {
        let n = self.life_engine.size() as f32;
        let text_size = (size_px * Config::FIELD_TEXT_SCALE / n).max(Config::MIN_FIELD_TEXT_SIZE);
        let field = self.life_engine.render();

        ui.label(
            RichText::new(&field)
                .font(FontId::monospace(text_size))
                .line_height(Some(text_size))
                .color(Config::TEXT_COLOR),
        );
        ui.label(Self::new_text(&format!("hash {}", state_hash(&field))));
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(0.);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.vertical_centered(|ui| {
                self.draw_gol_field(ui, size_px);
            });
        });
    }
}
