//! Discrete genome events.
//!
//! Every mutation a simulation performs is recorded as a [`TeEvent`]. An
//! event log can be replayed on any backend to reproduce the same genome.

use serde::{Deserialize, Serialize};

use crate::base::TeId;
use crate::errors::GenomeError;
use crate::genome::{Genome, GenomeBackend};

/// One operation on a genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TeEvent {
    /// Insert a new element of `length` sites starting at `pos`.
    Insert { pos: usize, length: usize },
    /// Copy element `te` to `offset` positions from its start.
    Copy { te: TeId, offset: i64 },
    /// Disable element `te`.
    Disable { te: TeId },
}

/// What applying a [`TeEvent`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    /// A new element was inserted.
    Inserted(TeId),
    /// `source` was copied into the new element `copy`.
    Copied { source: TeId, copy: TeId },
    /// The copy was not performed because the source was not active.
    CopyIgnored(TeId),
    /// The element was disabled; `was_active` is false for no-op disables.
    Disabled { te: TeId, was_active: bool },
}

impl EventOutcome {
    /// The element created by the event, if any.
    pub fn created(&self) -> Option<TeId> {
        match self {
            Self::Inserted(te) => Some(*te),
            Self::Copied { copy, .. } => Some(*copy),
            _ => None,
        }
    }
}

impl TeEvent {
    /// Apply this event to `genome`.
    ///
    /// # Errors
    /// Only insertions can fail, with the genome left unchanged.
    pub fn apply(&self, genome: &mut dyn Genome) -> Result<EventOutcome, GenomeError> {
        match *self {
            TeEvent::Insert { pos, length } => {
                genome.insert_te(pos, length).map(EventOutcome::Inserted)
            }
            TeEvent::Copy { te, offset } => Ok(match genome.copy_te(te, offset) {
                Some(copy) => EventOutcome::Copied { source: te, copy },
                None => EventOutcome::CopyIgnored(te),
            }),
            TeEvent::Disable { te } => {
                let was_active = genome.is_active(te);
                genome.disable_te(te);
                Ok(EventOutcome::Disabled { te, was_active })
            }
        }
    }
}

/// Build a fresh genome of `initial_length` sites on `backend` and apply `events` in order.
pub fn replay(
    events: &[TeEvent],
    initial_length: usize,
    backend: GenomeBackend,
) -> Result<Box<dyn Genome>, GenomeError> {
    let mut genome = backend.create(initial_length);
    for event in events {
        event.apply(genome.as_mut())?;
    }
    Ok(genome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_outcomes() {
        let mut genome = GenomeBackend::Contiguous.create(10);

        let inserted = TeEvent::Insert { pos: 3, length: 2 }
            .apply(genome.as_mut())
            .unwrap();
        assert_eq!(inserted, EventOutcome::Inserted(TeId(0)));
        assert_eq!(inserted.created(), Some(TeId(0)));

        let copied = TeEvent::Copy {
            te: TeId(0),
            offset: 4,
        }
        .apply(genome.as_mut())
        .unwrap();
        assert_eq!(
            copied,
            EventOutcome::Copied {
                source: TeId(0),
                copy: TeId(1)
            }
        );

        let disabled = TeEvent::Disable { te: TeId(0) }.apply(genome.as_mut()).unwrap();
        assert_eq!(
            disabled,
            EventOutcome::Disabled {
                te: TeId(0),
                was_active: true
            }
        );

        let ignored = TeEvent::Copy {
            te: TeId(0),
            offset: 1,
        }
        .apply(genome.as_mut())
        .unwrap();
        assert_eq!(ignored, EventOutcome::CopyIgnored(TeId(0)));
        assert_eq!(ignored.created(), None);

        let again = TeEvent::Disable { te: TeId(0) }.apply(genome.as_mut()).unwrap();
        assert_eq!(
            again,
            EventOutcome::Disabled {
                te: TeId(0),
                was_active: false
            }
        );
    }

    #[test]
    fn test_invalid_insert_propagates() {
        let mut genome = GenomeBackend::Ring.create(2);
        let result = TeEvent::Insert { pos: 2, length: 1 }.apply(genome.as_mut());
        assert!(matches!(result, Err(GenomeError::InvalidPosition { .. })));
    }

    #[test]
    fn test_replay_matches_across_backends() {
        let events = [
            TeEvent::Insert { pos: 0, length: 3 },
            TeEvent::Copy {
                te: TeId(0),
                offset: -2,
            },
            TeEvent::Insert { pos: 1, length: 1 },
            TeEvent::Disable { te: TeId(1) },
        ];
        let contiguous = replay(&events, 6, GenomeBackend::Contiguous).unwrap();
        let ring = replay(&events, 6, GenomeBackend::Ring).unwrap();

        assert_eq!(contiguous.render(), ring.render());
        assert_eq!(contiguous.active_tes(), ring.active_tes());
        assert_eq!(contiguous.render(), "xAxx----xxx--");
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&TeEvent::Copy {
            te: TeId(4),
            offset: -1,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"copy","te":4,"offset":-1}"#);
    }
}
