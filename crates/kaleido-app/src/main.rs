mod app;
mod canvas;
mod config;

use app::KaleidoApp;
use config::AppConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::default();
    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    log::info!("starting {title}");
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(KaleidoApp::new(config)))),
    )
}
