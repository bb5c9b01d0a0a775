mod app;
mod color;
mod state;
mod ui;

use app::SpaceMissionsApp;
use clap::Parser;
use eframe::egui;
use space_missions::config::DashboardConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::parse();

    // The dashboard still opens without data; the user can pick a file.
    let (dataset, status) = match config.source.load() {
        Ok(ds) => (Some(ds), None),
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", config.source.path.display());
            (None, Some(format!("Error: {e:#}")))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Space Missions",
        options,
        Box::new(move |_cc| Ok(Box::new(SpaceMissionsApp::new(dataset, status)))),
    )
}
