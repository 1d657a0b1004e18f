//! Circular genome representations.
//!
//! [`Genome`] is the shared contract; [`ContiguousGenome`] and [`RingGenome`]
//! are the two storage strategies behind it.

mod backend;
mod contiguous;
mod ring;
mod traits;

pub(crate) use traits::store;

pub use backend::{new_genome, GenomeBackend};
pub use contiguous::ContiguousGenome;
pub use ring::RingGenome;
pub use traits::Genome;
