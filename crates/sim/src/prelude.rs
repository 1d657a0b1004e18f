//! Commonly used imports for convenience.
//!
//! ```
//! use tegen_sim::prelude::*;
//!
//! let genome = new_genome(4, GenomeBackend::Contiguous);
//! assert_eq!(genome.render(), "----");
//! ```

pub use crate::base::{Site, TeId, TeSpan, TeStatus};
pub use crate::errors::{ConfigError, GenomeError, SimulationError};
pub use crate::genome::{new_genome, ContiguousGenome, Genome, GenomeBackend, RingGenome};
pub use crate::simulation::{
    replay, EventConfig, EventOutcome, Simulation, SimulationConfig, Snapshot, TeEvent,
};
