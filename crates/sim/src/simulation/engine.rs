//! Simulation engine for transposable element dynamics.
//!
//! Each step draws one random event (insertion, copy or disable) according to
//! the configured probabilities, applies it to the genome and records it.

use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Geometric};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::base::TeId;
use crate::errors::{ConfigError, SimulationError};
use crate::genome::{Genome, GenomeBackend};
use crate::simulation::{EventOutcome, SimulationConfig, TeEvent};

/// Summary of a genome at one point of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number of steps applied so far
    pub step: usize,
    pub backend: GenomeBackend,
    /// Number of sites
    pub length: usize,
    /// Ids of active elements
    pub active: Vec<TeId>,
    /// Number of ids issued so far
    pub issued: u64,
    /// One character per site
    pub render: String,
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    genome: Box<dyn Genome>,
    config: SimulationConfig,
    /// Length distribution for new insertions
    lengths: Geometric,
    /// Random number generator (Xoshiro256++)
    rng: Xoshiro256PlusPlus,
    /// Events applied so far, in order
    history: Vec<TeEvent>,
}

impl Simulation {
    /// Create a new simulation from configuration.
    ///
    /// Without a configured seed the RNG is seeded from the thread RNG.
    ///
    /// # Errors
    /// Fails if the configuration does not validate.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };
        let lengths = Geometric::new(config.events.length_p)
            .map_err(|_| ConfigError::InvalidProbability("length_p", config.events.length_p))?;
        let genome = config.backend.create(config.initial_length);

        info!(
            backend = %config.backend,
            initial_length = config.initial_length,
            steps = config.steps,
            seed = ?config.seed,
            "created simulation"
        );

        Ok(Self {
            genome,
            config,
            lengths,
            rng,
            history: Vec::new(),
        })
    }

    pub fn genome(&self) -> &dyn Genome {
        self.genome.as_ref()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Events applied so far, oldest first.
    pub fn history(&self) -> &[TeEvent] {
        &self.history
    }

    /// Number of steps applied so far.
    pub fn current_step(&self) -> usize {
        self.history.len()
    }

    /// Returns true once the configured number of steps has been applied.
    pub fn is_finished(&self) -> bool {
        self.current_step() >= self.config.steps
    }

    /// Draw the next event without applying it.
    ///
    /// Copies and disables pick a uniformly random active element; when there
    /// is none the step becomes an insertion instead.
    fn draw_event(&mut self) -> TeEvent {
        let len = self.genome.len();
        let active = self.genome.active_tes();
        let roll = self.rng.random::<f64>();
        let events = &self.config.events;

        if !active.is_empty() {
            if roll < events.copy_prob {
                let te = active[self.rng.random_range(0..active.len())];
                let window = i64::from(events.copy_window);
                let offset = self.rng.random_range(-window..=window);
                return TeEvent::Copy { te, offset };
            }
            if roll < events.copy_prob + events.disable_prob {
                let te = active[self.rng.random_range(0..active.len())];
                return TeEvent::Disable { te };
            }
        }

        let pos = self.rng.random_range(0..len);
        // validate() guarantees max_length >= 1
        let cap = events.max_length as u64 - 1;
        let length = self.lengths.sample(&mut self.rng).min(cap) as usize + 1;
        TeEvent::Insert { pos, length }
    }

    /// Apply one random event.
    ///
    /// # Errors
    /// Drawn events are always valid, so errors only signal a broken invariant.
    pub fn step(&mut self) -> Result<EventOutcome, SimulationError> {
        let event = self.draw_event();
        let outcome = event.apply(self.genome.as_mut())?;
        self.history.push(event);
        debug!(step = self.history.len(), ?event, ?outcome, "applied event");
        Ok(outcome)
    }

    /// Apply `steps` random events.
    pub fn run_for(&mut self, steps: usize) -> Result<(), SimulationError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    /// Run the remaining configured steps and return the final snapshot.
    pub fn run(&mut self) -> Result<Snapshot, SimulationError> {
        let remaining = self.config.steps.saturating_sub(self.current_step());
        self.run_for(remaining)?;

        let snapshot = self.snapshot();
        info!(
            steps = snapshot.step,
            length = snapshot.length,
            active = self.genome.active_count(),
            issued = snapshot.issued,
            "simulation finished"
        );
        Ok(snapshot)
    }

    /// Summary of the current genome.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.current_step(),
            backend: self.genome.backend(),
            length: self.genome.len(),
            active: self.genome.active_tes(),
            issued: self.genome.te_count(),
            render: self.genome.render(),
        }
    }
}
