mod app;
mod engine;
mod error;
mod gallery;
mod infra;
mod print;
mod ui;

use std::process::ExitCode;

use app::controller::ApplicationController;
use infra::config::AppConfig;
use ui::app_shell::launch_window;
use ui::dialogs::RfdNotifier;

fn main() -> ExitCode {
    env_logger::init();
    let config = AppConfig::default();
    let mut controller =
        ApplicationController::new(config, print::platform_queue(), Box::new(RfdNotifier));
    controller.bootstrap();

    if let Err(error) = launch_window(controller) {
        eprintln!("failed to start photo-gallery: {error}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
