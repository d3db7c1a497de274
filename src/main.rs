mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::SortbenchViewerApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    // Default to info so skipped-file warnings stay visible without RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sortbench Viewer",
        options,
        Box::new(|_cc| {
            // Missing files are skipped with a warning; a malformed CSV
            // aborts startup here.
            let state = AppState::load_from_dir(Path::new("."))?;
            Ok(Box::new(SortbenchViewerApp::new(state)))
        }),
    )
}
