use thiserror::Error;

/// Errors reported by genome mutations.
///
/// A call that returns one of these leaves the genome exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenomeError {
    /// Insertion position outside `[0, length)`.
    #[error("Invalid position {position} for genome of length {length}")]
    InvalidPosition { position: usize, length: usize },
    /// Insertion of fewer than one site.
    #[error("Invalid element length {0} (must be at least 1)")]
    InvalidLength(usize),
}

/// Errors raised while loading or validating a simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A probability outside its accepted range.
    #[error("Invalid probability for {0}: {1} (out of range)")]
    InvalidProbability(&'static str, f64),
    /// Any other parameter that is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while driving a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),
}
