#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sketchpad::{SketchApp, SketchConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Optional JSON config path as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => SketchConfig::from_path(&path).unwrap_or_else(|err| {
            log::warn!("Could not load config from {path}: {err}; using defaults");
            SketchConfig::default()
        }),
        None => SketchConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 420.0])
            .with_min_inner_size([560.0, 380.0]),
        ..Default::default()
    };
    eframe::run_native(
        sketchpad::app::APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc, config)))),
    )
}
