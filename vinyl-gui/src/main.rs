#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod cmd;
mod controller;
mod data;
mod delegate;
mod error;
mod ui;
mod webapi;
mod widget;

use std::sync::Arc;

use druid::AppLauncher;
use env_logger::{Builder, Env};

use crate::{
    data::{AppState, Config},
    delegate::Delegate,
    webapi::WebApi,
};

const ENV_LOG: &str = "VINYL_LOG";
const ENV_LOG_STYLE: &str = "VINYL_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let config = Config::load().unwrap_or_default();
    let state = AppState::default_with_config(config);

    let api = Arc::new(WebApi::new(webapi::BASE_URL));

    let window = ui::main_window(&state.config, &api);
    let delegate = Delegate::with_main(window.id, api);

    AppLauncher::with_window(window)
        .configure_env(ui::theme::setup)
        .delegate(delegate)
        .launch(state)
        .expect("Application launch");
}
