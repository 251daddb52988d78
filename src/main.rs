#![warn(clippy::all)]

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1000., 640.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|cc| Ok(Box::new(life_bench::App::new(&cc.egui_ctx)))),
    )
}
