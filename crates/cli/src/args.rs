use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tegen_sim::prelude::{GenomeBackend, SimulationConfig};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration file
    #[arg(short, long, default_value = "tegen.json")]
    pub output: PathBuf,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub sim: SimArgs,
}

/// Simulation parameters shared by every command.
///
/// Flags override values read from `--config`, which in turn override the
/// built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SimArgs {
    /// JSON configuration file (see `tegen init`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial number of empty sites
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Number of events to apply
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Genome storage strategy (contiguous, ring)
    #[arg(short, long)]
    pub backend: Option<GenomeBackend>,
}

impl SimArgs {
    /// Build the effective configuration.
    pub fn resolve(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(length) = self.length {
            config.initial_length = length;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }

        config.validate().context("Invalid simulation parameters")?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Print the genome every K steps
    #[arg(short = 'k', long, value_name = "K")]
    pub show_every: Option<usize>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Print the comparison as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = SimArgs {
            length: Some(12),
            seed: Some(3),
            backend: Some(GenomeBackend::Ring),
            ..SimArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.initial_length, 12);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.backend, GenomeBackend::Ring);
        assert_eq!(config.steps, SimulationConfig::default().steps);
    }

    #[test]
    fn test_zero_length_rejected() {
        let args = SimArgs {
            length: Some(0),
            ..SimArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
