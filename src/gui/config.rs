use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 400.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const FILENAME_INPUT_FIELD_SIZE: [f32; 2] = [160., 20.];
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;

    pub const GAP_ABOVE_STATS: f32 = 30.;

    /// Height of a field glyph relative to the space available for the field.
    pub const FIELD_TEXT_SCALE: f32 = 0.9;
    pub const MIN_FIELD_TEXT_SIZE: f32 = 4.;

    pub const MAX_FPS: f64 = 10.;
    pub const MAX_FIELD_SIZE: usize = 256;
    pub const MAX_STEPS_PER_FRAME: u64 = 1 << 10;
    pub const MAX_BENCH_ITERATIONS: u64 = 1 << 24;
}
