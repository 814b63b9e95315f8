//! # Configuration
//!
//! Scenario configuration - define the hole and the pegs to try.
//!
//! Everything is configurable, not hardcoded:
//! - Hole radius
//! - Round pegs (by radius)
//! - Square pegs (by width)
//!
//! The default configuration is the classic demonstration: a hole of
//! radius 5 and two square pegs of widths 5 and 10.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating a scenario
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize scenario: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Hole radius must be a positive number, got {0}")]
    InvalidHoleRadius(f64),

    #[error("Round peg '{label}' must have a non-negative radius, got {radius}")]
    InvalidRoundPeg { label: String, radius: f64 },

    #[error("Square peg '{label}' must have a positive width, got {width}")]
    InvalidSquarePeg { label: String, width: f64 },

    #[error("Scenario has no pegs to fit")]
    NoPegs,

    #[error("Scenario file already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// One peg to try against the hole
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PegSpec {
    Round { label: String, radius: f64 },
    Square { label: String, width: f64 },
}

impl PegSpec {
    pub fn round(label: impl Into<String>, radius: f64) -> Self {
        PegSpec::Round {
            label: label.into(),
            radius,
        }
    }

    pub fn square(label: impl Into<String>, width: f64) -> Self {
        PegSpec::Square {
            label: label.into(),
            width,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PegSpec::Round { label, .. } | PegSpec::Square { label, .. } => label,
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        match self {
            PegSpec::Round { label, radius } => {
                if !(radius.is_finite() && *radius >= 0.0) {
                    return Err(ConfigError::InvalidRoundPeg {
                        label: label.clone(),
                        radius: *radius,
                    });
                }
            }
            PegSpec::Square { label, width } => {
                if !(width.is_finite() && *width > 0.0) {
                    return Err(ConfigError::InvalidSquarePeg {
                        label: label.clone(),
                        width: *width,
                    });
                }
            }
        }
        Ok(())
    }
}

/// A hole and the pegs to try in it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Radius of the round hole
    pub hole_radius: f64,

    /// Pegs to check, in order
    #[serde(default)]
    pub pegs: Vec<PegSpec>,
}

impl ScenarioConfig {
    /// Create an empty scenario around a hole
    pub fn new(hole_radius: f64) -> Self {
        Self {
            hole_radius,
            pegs: Vec::new(),
        }
    }

    /// Set the hole radius
    pub fn with_hole_radius(mut self, radius: f64) -> Self {
        self.hole_radius = radius;
        self
    }

    /// Append a peg
    pub fn with_peg(mut self, peg: PegSpec) -> Self {
        self.pegs.push(peg);
        self
    }

    /// Check that every dimension is usable
    ///
    /// Hole radius and square widths must be finite and positive,
    /// round radii finite and non-negative. At least one peg is required.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.hole_radius.is_finite() && self.hole_radius > 0.0) {
            return Err(ConfigError::InvalidHoleRadius(self.hole_radius));
        }
        if self.pegs.is_empty() {
            return Err(ConfigError::NoPegs);
        }
        self.pegs.iter().try_for_each(PegSpec::validate)
    }

    /// Load and validate a scenario from a TOML file
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), pegs = config.pegs.len(), "Loaded scenario");
        Ok(config)
    }

    /// Write this scenario to a TOML file, creating parent directories
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Saved scenario");
        Ok(())
    }
}

impl Default for ScenarioConfig {
    /// Hole of radius 5, square pegs of widths 5 and 10
    fn default() -> Self {
        Self::new(5.0)
            .with_peg(PegSpec::square("Small square peg", 5.0))
            .with_peg(PegSpec::square("Large square peg", 10.0))
    }
}

/// Default scenario file location
pub fn default_scenario_path() -> &'static str {
    "~/.peg-adapter/scenario.toml"
}

/// Expand a leading `~/` to the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
