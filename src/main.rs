mod app;
mod config;
mod domain;
mod infra;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use anyhow::Result;
use chrono::Datelike;

use crate::app::App;
use crate::config::AppConfig;

pub const APP_NAME: &str = "ChemInfoHub";
pub const PAGE_SIZE: usize = 10;

fn main() {
    let config = AppConfig::from_env();
    dioxus::logger::init(config.log_level).ok();
    tracing::info!(log_level = %config.log_level, "starting {APP_NAME}");

    if let Err(err) = launch(&config) {
        tracing::error!("failed to launch: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(feature = "desktop")]
fn launch(config: &AppConfig) -> Result<()> {
    let data_dir = config.data_dir()?;
    let webview_data_dir = config::ensure_webview_data_dir(&data_dir)?;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(APP_NAME))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch(_config: &AppConfig) -> Result<()> {
    dioxus::launch(App);
    Ok(())
}

pub fn copyright_notice(year: i32) -> String {
    format!("© {year} {APP_NAME}. All rights reserved.")
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
