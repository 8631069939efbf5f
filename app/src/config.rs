use directories::ProjectDirs;
use library::Color;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub log_level: String,
    /// Overrides the scale applied to timeline metrics. egui already works in
    /// logical points, so this is only needed for unusually dense displays.
    pub display_scale: Option<f32>,
    pub bookmark_color: Color,
    pub cursor_color: Color,
    pub scene_mark_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            display_scale: None,
            bookmark_color: Color::DARK_GREEN,
            cursor_color: Color::BLACK,
            scene_mark_color: Color::RED,
        }
    }
}

impl AppConfig {
    /// Scale handed to the timeline. Non-positive overrides are ignored.
    pub fn timeline_scale(&self) -> f32 {
        match self.display_scale {
            Some(scale) if scale > 0.0 && scale.is_finite() => scale,
            _ => 1.0,
        }
    }
}

fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "vspreview", "vspreview") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            if let Err(e) = fs::create_dir_all(config_dir) {
                error!("Failed to create config directory: {}", e);
                return None;
            }
        }
        return Some(config_dir.join("config.toml"));
    }
    None
}

pub fn read_config(path: &Path) -> AppResult<AppConfig> {
    let toml_str = fs::read_to_string(path)?;
    Ok(toml::from_str(&toml_str)?)
}

pub fn write_config(path: &Path, config: &AppConfig) -> AppResult<()> {
    let toml_str = toml::to_string_pretty(config)?;
    fs::write(path, toml_str)?;
    Ok(())
}

pub fn save_config(config: &AppConfig) {
    if let Some(path) = get_config_path() {
        match write_config(&path, config) {
            Ok(()) => info!("Settings saved to {}", path.display()),
            Err(e) => error!("Failed to save config file: {}", e),
        }
    }
}

/// Reads the user's config. A missing file is created with the defaults.
pub fn load_config() -> AppConfig {
    if let Some(path) = get_config_path() {
        if path.exists() {
            match read_config(&path) {
                Ok(config) => return config,
                Err(e) => warn!("Failed to load config file, using defaults: {}", e),
            }
        } else {
            save_config(&AppConfig::default());
        }
    }
    AppConfig::default()
}
