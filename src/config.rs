// src/config.rs

//! Configuration for the projectile demo.
//!
//! The structs deserialize from JSON. Every section carries `#[serde(default)]`
//! so a config file only needs the fields it wants to change. The process-wide
//! [`CONFIG`] is loaded lazily from the file named by `RAYTRACER_CONFIG`, or
//! falls back to the defaults below.

use anyhow::Context;
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ppm::{DEFAULT_MAX_COLOR, PPM_IDENTIFIER};

/// Environment variable holding the path of a JSON config file.
pub const CONFIG_ENV_VAR: &str = "RAYTRACER_CONFIG";

/// Global configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Initial state of the projectile and the forces acting on it.
    pub projectile: ProjectileConfig,
    /// Where and how the trajectory is rendered.
    pub output: OutputConfig,
}

// --- Projectile Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Starting point.
    pub start: [f64; 3],
    /// Direction of the starting velocity. Normalized before use.
    pub velocity: [f64; 3],
    /// Speed applied to the normalized starting velocity.
    pub velocity_scale: f64,
    pub gravity: [f64; 3],
    pub wind: [f64; 3],
    /// Upper bound on simulation steps, in case the projectile never lands.
    pub max_ticks: usize,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        ProjectileConfig {
            start: [0.0, 1.0, 0.0],
            velocity: [1.0, 1.0, 0.0],
            velocity_scale: 1.0,
            gravity: [0.0, -0.1, 0.0],
            wind: [-0.01, 0.0, 0.0],
            max_ticks: 10_000,
        }
    }
}

// --- Output Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// PPM file to write. When `None` the trajectory is only printed.
    pub path: Option<PathBuf>,
    /// Canvas width in pixels.
    pub width: i64,
    /// Canvas height in pixels.
    pub height: i64,
    /// First line of the PPM output.
    pub identifier: String,
    pub max_color: u32,
    /// Color used to mark each position.
    pub trail_color: [f64; 3],
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: None,
            width: 900,
            height: 550,
            identifier: PPM_IDENTIFIER.to_string(),
            max_color: DEFAULT_MAX_COLOR,
            trail_color: [1.0, 0.0, 0.0],
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse config JSON")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when the variable is unset or the file cannot be used.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            info!("{} not set, using default configuration", CONFIG_ENV_VAR);
            return Config::default();
        };
        let path = PathBuf::from(path);
        match Self::from_file(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}. Using default configuration.", e);
                Config::default()
            }
        }
    }
}
