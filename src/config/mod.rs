// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration: cache bounds, network settings
//! and the display scale, persisted to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_remote_image::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.request_timeout_secs = 10;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.request_timeout_secs, 10);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedRemoteImage";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on decoded bytes kept by the shared cache.
    pub cache_max_bytes: usize,
    /// Upper bound on the number of cached images.
    pub cache_max_images: usize,
    pub cache_enabled: bool,
    /// Store images fetched from the network back into the cache.
    pub write_back: bool,
    pub request_timeout_secs: u64,
    pub max_redirects: usize,
    pub user_agent: String,
    /// Logical-to-pixel ratio used to size downsampled images.
    pub scale_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_max_bytes: DEFAULT_CACHE_BYTES,
            cache_max_images: DEFAULT_CACHE_IMAGES,
            cache_enabled: true,
            write_back: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl Config {
    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Display scale factor, clamped to the supported range.
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        if self.scale_factor.is_finite() {
            self.scale_factor.clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR)
        } else {
            DEFAULT_SCALE_FACTOR
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid settings at {}: {err}", path.display());
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            request_timeout_secs: 5,
            write_back: false,
            scale_factor: 2.0,
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "write_back = false\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(!loaded.write_back);
        assert_eq!(loaded.cache_max_bytes, DEFAULT_CACHE_BYTES);
        assert_eq!(loaded.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = Config {
            request_timeout_secs: 0,
            scale_factor: f32::NAN,
            ..Config::default()
        };
        assert_eq!(
            config.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(config.scale_factor(), DEFAULT_SCALE_FACTOR);

        let config = Config {
            scale_factor: 100.0,
            ..Config::default()
        };
        assert_eq!(config.scale_factor(), MAX_SCALE_FACTOR);
    }
}
