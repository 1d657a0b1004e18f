//! # Simulation Crate
//!
//! The `tegen_sim` crate models a circular genome into which transposable
//! elements (TEs) are inserted, copied and disabled. It provides the shared
//! [`Genome`] contract, two storage strategies behind it
//! ([`ContiguousGenome`] and [`RingGenome`]), and a seeded random driver in
//! [`simulation`].
//!
//! ```
//! use tegen_sim::prelude::*;
//!
//! let mut genome = RingGenome::new(10);
//! let te = genome.insert_te(3, 2).unwrap();
//! assert_eq!(genome.render(), "---AA-------");
//!
//! let copy = genome.copy_te(te, -5).unwrap();
//! assert_eq!(genome.locate(copy).unwrap().start, 10);
//!
//! genome.disable_te(te);
//! assert_eq!(genome.active_tes(), vec![copy]);
//! ```

pub mod base;
pub mod errors;
pub mod genome;
pub mod simulation;
pub mod prelude;

pub use base::{Site, TeId, TeSpan, TeStatus};
pub use errors::GenomeError;
pub use genome::{new_genome, ContiguousGenome, Genome, GenomeBackend, RingGenome};
