//! Simulation configuration.
//!
//! A [`SimulationConfig`] fully describes a run: genome size, backend, number
//! of steps, RNG seed and the probabilities of each kind of event. It can be
//! written to and read back from JSON to reproduce a run exactly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::genome::GenomeBackend;

/// The master configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of empty sites the genome starts with
    pub initial_length: usize,
    /// Number of events to apply
    pub steps: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
    /// Storage strategy for the genome
    pub backend: GenomeBackend,
    /// Event mix and size distributions
    pub events: EventConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_length: 100,
            steps: 50,
            seed: None,
            backend: GenomeBackend::default(),
            events: EventConfig::default(),
        }
    }
}

/// Smallest accepted `length_p`, giving a mean inserted length of 1000 sites.
pub const MIN_LENGTH_P: f64 = 1e-3;

/// Parameters of the random event process.
///
/// Each step is a copy with probability `copy_prob`, a disable with
/// probability `disable_prob`, and an insertion otherwise. Copies and
/// disables need an active element; without one the step inserts instead.
/// Inserted lengths are `1 + Geometric(length_p)`, truncated to `max_length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Probability that a step copies a random active element
    pub copy_prob: f64,
    /// Probability that a step disables a random active element
    pub disable_prob: f64,
    /// Parameter p of the Geometric distribution of inserted lengths
    /// (MIN_LENGTH_P <= p <= 1.0). Mean length is 1/p before truncation.
    pub length_p: f64,
    /// Upper bound on the length of a single insertion
    pub max_length: usize,
    /// Copy offsets are drawn uniformly from `[-copy_window, copy_window]`
    pub copy_window: u32,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            copy_prob: 0.3,
            disable_prob: 0.1,
            length_p: 0.25,
            max_length: 1000,
            copy_window: 20,
        }
    }
}

impl EventConfig {
    /// Probability that a step is a plain insertion.
    pub fn insert_prob(&self) -> f64 {
        (1.0 - self.copy_prob - self.disable_prob).max(0.0)
    }

    /// Mean length of inserted elements.
    pub fn mean_length(&self) -> f64 {
        1.0 / self.length_p
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.copy_prob) {
            return Err(ConfigError::InvalidProbability("copy_prob", self.copy_prob));
        }
        if !(0.0..=1.0).contains(&self.disable_prob) {
            return Err(ConfigError::InvalidProbability(
                "disable_prob",
                self.disable_prob,
            ));
        }
        let total = self.copy_prob + self.disable_prob;
        if total > 1.0 + f64::EPSILON {
            return Err(ConfigError::InvalidParameter(format!(
                "copy_prob + disable_prob = {total} exceeds 1.0"
            )));
        }
        if !(MIN_LENGTH_P..=1.0).contains(&self.length_p) {
            return Err(ConfigError::InvalidProbability("length_p", self.length_p));
        }
        if self.max_length == 0 {
            return Err(ConfigError::InvalidParameter(
                "max_length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl SimulationConfig {
    /// Check every parameter.
    ///
    /// # Errors
    /// Returns the first invalid parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_length == 0 {
            return Err(ConfigError::InvalidParameter(
                "initial_length must be at least 1".into(),
            ));
        }
        self.events.validate()
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the configuration to a JSON file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
