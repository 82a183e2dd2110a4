// src/config.rs
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symmetric motion bounds and CLI sampling resolution, loaded from a TOML
/// file at the binary's boundary. The solver core itself never touches this
/// type; it only ever sees the plain `f64` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_v_max")]
    pub v_max: f64,
    #[serde(default = "default_a_max")]
    pub a_max: f64,
    #[serde(default = "default_j_max")]
    pub j_max: f64,
    #[serde(default = "default_sample_dt")]
    pub sample_dt: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            v_max: default_v_max(),
            a_max: default_a_max(),
            j_max: default_j_max(),
            sample_dt: default_sample_dt(),
        }
    }
}

fn default_v_max() -> f64 {
    1.0
}

fn default_a_max() -> f64 {
    1.0
}

fn default_j_max() -> f64 {
    1.0
}

fn default_sample_dt() -> f64 {
    0.01
}

/// Failures from reading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads bounds/sampling configuration from a TOML file, falling back to
/// `Config::default()` field-by-field for anything the file omits.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_feasible() {
        let config = Config::default();
        assert!(config.v_max > 0.0);
        assert!(config.a_max > 0.0);
        assert!(config.j_max > 0.0);
    }

    #[test]
    fn partial_toml_fills_remaining_defaults() {
        let config: Config = toml::from_str("v_max = 2.5\n").unwrap();
        assert_eq!(config.v_max, 2.5);
        assert_eq!(config.a_max, default_a_max());
        assert_eq!(config.j_max, default_j_max());
    }
}
