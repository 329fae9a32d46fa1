mod app;
mod config;
mod selection;

use app::ChessApp;
use config::ViewerConfig;

fn main() -> eframe::Result<()> {
    let config = ViewerConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ChessApp::new(config)))),
    )
}
