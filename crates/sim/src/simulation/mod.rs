//! Random transposable element dynamics on a single genome.
//!
//! - `Simulation`: draws and applies random events to a genome.
//! - `SimulationConfig`: serializable parameters of a run.
//! - `TeEvent`: a single recorded operation, replayable on any backend.

pub mod configs;
pub mod engine;
pub mod events;

pub use configs::{EventConfig, SimulationConfig};
pub use engine::{Simulation, Snapshot};
pub use events::{replay, EventOutcome, TeEvent};
