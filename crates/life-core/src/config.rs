//! Configuration types for the engine and runner.

use crate::error::{Error, Result};
use crate::types::Glyphs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Universe construction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Width of the grid in cells
    pub width: u32,
    /// Height of the grid in cells
    pub height: u32,
    /// Probability that a cell starts alive (0.0 to 1.0)
    pub density: f64,
    /// Random seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            density: 0.5,
            seed: None,
        }
    }
}

impl UniverseConfig {
    pub fn validate_dimensions(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_dimensions()?;
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::Config(format!(
                "density {} is outside 0.0..=1.0",
                self.density
            )));
        }
        Ok(())
    }
}

/// Headless run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Board parameters; density and seed only apply when no pattern file is given
    pub universe: UniverseConfig,
    /// Pattern file stamped onto the centre of an empty board
    pub pattern_path: Option<PathBuf>,
    /// Size the board to the pattern itself instead of `universe.width`/`height`
    pub fit_to_pattern: bool,
    /// Glyph vocabulary for reading the pattern and printing the board
    pub glyphs: Glyphs,
    /// Number of generations to advance
    pub generations: u64,
    /// Log population every N generations (0 disables)
    pub report_every: u64,
    /// Print the final board to stdout
    pub print_final: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            universe: UniverseConfig::default(),
            pattern_path: None,
            fit_to_pattern: false,
            glyphs: Glyphs::default(),
            generations: 100,
            report_every: 10,
            print_final: true,
        }
    }
}

impl RunConfig {
    /// Load from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading run configuration");
        let text = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.glyphs.validate()?;
        match (&self.pattern_path, self.fit_to_pattern) {
            (None, _) => self.universe.validate(),
            (Some(_), false) => self.universe.validate_dimensions(),
            (Some(_), true) => Ok(()),
        }
    }
}
