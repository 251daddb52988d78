use super::{Config, FpsLimiter};
use crate::{
    benchmark::{self, BenchConfig, BenchReport},
    patterns::{self, Pattern},
    LifeEngine,
};
use anyhow::bail;
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin, Visuals};
use std::time::Instant;

pub struct App {
    pub(super) life_engine: LifeEngine,   // Conway's GoL engine.
    pub(super) field_size: usize,         // Side of the field created on reset.
    pub(super) pattern: Pattern,          // Pattern placed on the field on reset.
    pub(super) is_paused: bool,           // Flag indicating whether the simulation is paused.
    pub(super) pause_after_updates: bool, // Flag indicating whether to pause after a certain number of updates.
    pub(super) updates_before_pause: u64, // Number of updates left before stopping.
    pub(super) do_one_step: bool,         // Do one step and pause.
    pub(super) steps_per_frame: u64,      // Number of generations per update.
    pub(super) filename_load: String,     // The name of the RLE file to load the field from.
    pub(super) load_error: Option<String>,
    pub(super) last_update_duration: f64, // Duration of the last life update in seconds.
    pub(super) fps_limiter: FpsLimiter,   // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,

    pub(super) bench_config: BenchConfig,
    pub(super) bench_report: Option<BenchReport>,
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        ctx.set_visuals(Visuals::light());
        Self {
            life_engine: patterns::demo_engine(),
            field_size: patterns::DEMO_SIZE,
            pattern: patterns::GLIDER,
            is_paused: false,
            pause_after_updates: false,
            updates_before_pause: 0,
            do_one_step: false,
            steps_per_frame: 1,
            filename_load: "pattern.rle".to_string(),
            load_error: None,
            last_update_duration: 0.,
            fps_limiter: FpsLimiter::default(),
            max_fps: Config::MAX_FPS,
            bench_config: BenchConfig::default(),
            bench_report: None,
        }
    }

    pub fn reset_field(&mut self) {
        self.life_engine = self.pattern.engine(self.field_size);
        self.is_paused = true;
        self.pause_after_updates = false;
        self.updates_before_pause = 0;
        self.do_one_step = false;
        self.last_update_duration = 0.;
        self.load_error = None;
    }

    pub fn load_field(&mut self) {
        let result = std::fs::read(&self.filename_load)
            .map_err(anyhow::Error::from)
            .and_then(|data| LifeEngine::from_rle(&data, self.field_size))
            .and_then(|life| {
                if life.size() > Config::MAX_FIELD_SIZE {
                    bail!("Field side {} is too large to display", life.size());
                }
                Ok(life)
            });
        match result {
            Ok(life) => {
                self.reset_field();
                self.field_size = life.size();
                self.life_engine = life;
            }
            Err(e) => {
                self.load_error = Some(format!("{}: {:#}", self.filename_load, e));
            }
        }
    }

    pub fn run_benchmark(&mut self) {
        self.bench_report = Some(benchmark::run(&self.bench_config));
    }

    fn update_engine(&mut self) {
        if self.pause_after_updates && self.updates_before_pause == 0 {
            self.is_paused = true;
            self.do_one_step = false;
        }
        if self.is_paused && !self.do_one_step {
            return;
        }

        let timer = Instant::now();
        if self.steps_per_frame == 1 {
            self.life_engine.step();
        } else {
            self.life_engine.multi_step(self.steps_per_frame);
        }
        self.last_update_duration = timer.elapsed().as_secs_f64();

        if self.pause_after_updates {
            self.updates_before_pause -= 1;
        }
        self.do_one_step = false;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                self.draw(ui);

                self.update_engine();
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
