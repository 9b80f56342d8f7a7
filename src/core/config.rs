// src/core/config.rs

use crate::core::common::RangeIndexError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How per-tree summaries are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `"{n} {qavg} {qmax} {iavg} {imax}"`, one line per tree.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Settings for a benchmarking run.
///
/// Fields missing from a TOML file take their default values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Balance factor of every tree the run creates.
    pub alpha: f64,
    pub output_format: OutputFormat,
    /// Runs the full invariant check after every command. Slow.
    pub validate_each_operation: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    alpha: Option<f64>,
    output_format: Option<OutputFormat>,
    validate_each_operation: Option<bool>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Sets the balance factor from a whole percentage, e.g. `75` for 0.75.
    pub fn alpha_percent(self, percent: u8) -> Self {
        self.alpha(f64::from(percent) / 100.0)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn validate_each_operation(mut self, enabled: bool) -> Self {
        self.validate_each_operation = Some(enabled);
        self
    }

    /// Fills unset fields from `base` instead of the defaults.
    pub fn build_on(self, base: Config) -> Result<Config, RangeIndexError> {
        let config = Config {
            alpha: self.alpha.unwrap_or(base.alpha),
            output_format: self.output_format.unwrap_or(base.output_format),
            validate_each_operation: self
                .validate_each_operation
                .unwrap_or(base.validate_each_operation),
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds the Config instance with validation
    pub fn build(self) -> Result<Config, RangeIndexError> {
        self.build_on(Config::default())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { alpha: 0.75, output_format: OutputFormat::Text, validate_each_operation: false }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// # Errors
    ///
    /// Returns `RangeIndexError::Configuration` unless `0 < alpha < 1`.
    pub fn validate(&self) -> Result<(), RangeIndexError> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(RangeIndexError::Configuration(format!(
                "alpha must lie strictly between 0 and 1, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Loads configuration from a TOML file. A missing file yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `RangeIndexError::Configuration` if parsing or validation
    /// fails, `RangeIndexError::Io` if the file exists but cannot be read.
    pub fn load_from_file(path: &Path) -> Result<Self, RangeIndexError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents)?;
                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(RangeIndexError::Io(e)),
        }
    }

    /// Loads from `optional_path` when given, otherwise returns the defaults.
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, RangeIndexError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}
