// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod error;
mod program;
mod resolver;
mod store;
mod ui;

use app::ProgramViewer;
use config::Config;
use iced::Theme;
use program::ProgramData;
use store::SelectionStore;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("Could not load config, using defaults: {}", err);
        Config::default()
    });

    let program = match ProgramData::bundled() {
        Ok(program) => program,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let store = SelectionStore::open(SelectionStore::default_path());

    let window_size = (config.window_width, config.window_height);
    iced::application("Talkboard: Fagdag Program", ProgramViewer::update, ProgramViewer::view)
        .subscription(ProgramViewer::subscription)
        .theme(|_| Theme::Light)
        .window_size(window_size)
        .run_with(move || ProgramViewer::new(program, store, config))
}
