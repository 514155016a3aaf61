mod app;
mod clipboard;
mod runtime;
mod shortener;
mod ui;

use gtk4::glib;
use libadwaita as adw;

use adw::prelude::*;
use log::{error, info};
use std::sync::Arc;

use crate::app::{AppConfig, APP_ID};
use crate::shortener::TinyUrlClient;

fn main() -> glib::ExitCode {
    env_logger::init();

    let runtime = match runtime::build_runtime() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start network runtime: {}", e);
            return glib::ExitCode::FAILURE;
        }
    };

    let config = AppConfig::default();
    let client = match TinyUrlClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return glib::ExitCode::FAILURE;
        }
    };

    info!("Using shortening endpoint {}", config.api_base);

    let app = adw::Application::builder().application_id(APP_ID).build();

    let handle = runtime.handle().clone();
    app.connect_activate(move |app| {
        ui::build_ui(app, &config, Arc::clone(&client), &handle);
    });

    app.run()
}
