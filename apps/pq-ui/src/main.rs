#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::collapsible_if)]

mod app;
mod views;

use app::PqTeachApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_title("PQ Teach"),
        ..Default::default()
    };

    eframe::run_native(
        "PQ Teach",
        options,
        Box::new(|cc| Ok(Box::new(PqTeachApp::new(cc)))),
    )
}
