// GUI entry point for photo-exporter
// This binary provides the interactive shell around the export library

use eframe::egui;

mod app;
use app::PhotoExporterApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Photo Exporter",
        options,
        Box::new(|cc| Ok(Box::new(PhotoExporterApp::new(cc)))),
    )
}
