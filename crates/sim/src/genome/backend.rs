use serde::{Deserialize, Serialize};

use super::{ContiguousGenome, Genome, RingGenome};

/// Storage strategies for a [`Genome`].
///
/// Both strategies produce identical results for identical call sequences;
/// they differ only in the cost of each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenomeBackend {
    /// Flat vector of site tags ([`ContiguousGenome`]).
    #[default]
    Contiguous,
    /// Circular doubly-linked list in a node arena ([`RingGenome`]).
    Ring,
}

impl GenomeBackend {
    /// All available strategies.
    pub const ALL: [GenomeBackend; 2] = [GenomeBackend::Contiguous, GenomeBackend::Ring];

    /// Create an all-empty genome of `n` sites using this strategy.
    pub fn create(&self, n: usize) -> Box<dyn Genome> {
        match self {
            GenomeBackend::Contiguous => Box::new(ContiguousGenome::new(n)),
            GenomeBackend::Ring => Box::new(RingGenome::new(n)),
        }
    }
}

impl std::fmt::Display for GenomeBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contiguous => write!(f, "contiguous"),
            Self::Ring => write!(f, "ring"),
        }
    }
}

impl std::str::FromStr for GenomeBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contiguous" | "vec" | "list" => Ok(Self::Contiguous),
            "ring" | "linked" => Ok(Self::Ring),
            _ => Err(format!(
                "Unknown genome backend: {s}. Available: contiguous, ring"
            )),
        }
    }
}

/// Create an all-empty genome of `n` sites backed by `backend`.
pub fn new_genome(n: usize, backend: GenomeBackend) -> Box<dyn Genome> {
    backend.create(n)
}
