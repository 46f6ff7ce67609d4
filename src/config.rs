use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing::Level;

pub const LOG_LEVEL_VAR: &str = "CHEMINFOHUB_LOG";
pub const DATA_DIR_VAR: &str = "CHEMINFOHUB_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: Level,
    pub data_dir_override: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            data_dir_override: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let log_level = lookup(LOG_LEVEL_VAR)
            .and_then(|value| parse_log_level(&value))
            .unwrap_or(defaults.log_level);
        let data_dir_override = lookup(DATA_DIR_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            data_dir_override,
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir_override {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    value.trim().parse::<Level>().ok()
}

pub fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "cheminfohub")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

pub fn ensure_webview_data_dir(base_data_dir: &std::path::Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
