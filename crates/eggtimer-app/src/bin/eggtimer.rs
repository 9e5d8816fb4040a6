//! Egg timer desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop egg timer.

use std::process::ExitCode;

use eggtimer_app::{AppConfig, EggTimerApp, version};

fn main() -> ExitCode {
    const APP_ID: &str = "io.github.gifnksm.eggtimer";

    better_panic::install();
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!("Starting egg timer, version={}", version::build_version());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((400.0, 660.0))
            .with_min_inner_size((300.0, 620.0)),
        ..Default::default()
    };
    let result = eframe::run_native(
        "Egg timer",
        options,
        Box::new(|cc| Ok(Box::new(EggTimerApp::new(cc, config)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("egg timer window closed with an error: {err}");
            ExitCode::FAILURE
        }
    }
}
