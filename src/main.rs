mod app;
mod calc;
mod components;
mod error;
mod format;
mod pages;
mod settings;
mod snapshot;

use app::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();

    let (settings, settings_error) = settings::load_settings();
    let _ = console_log::init_with_level(settings.log_level);
    if let Some(err) = settings_error {
        log::warn!("{}; using default settings", err);
    }

    log::info!("starting planner at {} log level", settings.log_level);
    yew::Renderer::<App>::with_props(AppProps { settings }).render();
}
