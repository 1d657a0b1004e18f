use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::TeId;

/// Per-genome bookkeeping of transposable element ids.
///
/// Holds the id counter and the set of currently active elements. The site
/// tags stored by a backing remain the source of truth for *where* an element
/// is; the registry answers "is it active?" without a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeRegistry {
    /// Next id to hand out.
    next_id: u64,
    /// Ids whose status is `Active`.
    active: BTreeSet<TeId>,
}

impl TeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh active id.
    ///
    /// Must only be called once the insertion it belongs to is known to succeed.
    pub fn mint(&mut self) -> TeId {
        let id = TeId(self.next_id);
        self.next_id += 1;
        self.active.insert(id);
        id
    }

    /// The id the next successful insertion will receive.
    #[inline]
    pub fn peek_next(&self) -> TeId {
        TeId(self.next_id)
    }

    /// Number of ids handed out so far.
    #[inline]
    pub fn issued(&self) -> u64 {
        self.next_id
    }

    #[inline]
    pub fn is_active(&self, te: TeId) -> bool {
        self.active.contains(&te)
    }

    /// Record that `te` is no longer active.
    ///
    /// Returns true if the element was active before the call.
    pub fn deactivate(&mut self, te: TeId) -> bool {
        self.active.remove(&te)
    }

    /// Active ids in ascending order.
    pub fn active(&self) -> impl Iterator<Item = TeId> + '_ {
        self.active.iter().copied()
    }

    /// Number of active ids.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
