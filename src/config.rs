//! Configuration loading and validation.
//!
//! Reads `config.json` from the platform config directory. Loading never
//! fails: a missing or corrupt file falls back to defaults with a logged
//! warning, and out-of-range values are clamped rather than rejected.

use crate::constants::{SURFACE_MIN_WIDTH, WINDOW_MIN_HEIGHT, ZOOM_LIMIT, ZOOM_SPEED};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Recognized configuration options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum zoom steps in either direction (int >= 1)
    pub zoom_limit: i32,
    /// Visual scale change per zoom step (float in (0, 1))
    pub zoom_speed: f32,
    /// Minimum design surface size at initial layout (width, height)
    pub surface_min_size: (f32, f32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_limit: ZOOM_LIMIT,
            zoom_speed: ZOOM_SPEED,
            surface_min_size: (SURFACE_MIN_WIDTH, WINDOW_MIN_HEIGHT),
        }
    }
}

impl Config {
    /// Load the config from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_config_path() else {
            tracing::warn!("no config directory available, using default config");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to load {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config.validated())
    }

    /// Clamp out-of-range values back into their documented domains.
    pub fn validated(mut self) -> Self {
        if self.zoom_limit < 1 {
            tracing::warn!(zoom_limit = self.zoom_limit, "zoom_limit below 1, clamping");
            self.zoom_limit = 1;
        }
        if !(self.zoom_speed > 0.0 && self.zoom_speed < 1.0) || !self.zoom_speed.is_finite() {
            tracing::warn!(zoom_speed = self.zoom_speed, "zoom_speed outside (0, 1), using default");
            self.zoom_speed = ZOOM_SPEED;
        }
        if self.surface_min_size.0 < 1.0 || self.surface_min_size.1 < 1.0 {
            self.surface_min_size = Config::default().surface_min_size;
        }
        self
    }
}

/// Default config file location: `<config_dir>/macroboard/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("macroboard").join("config.json"))
}
