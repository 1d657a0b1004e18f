use std::fmt;

use serde::{Deserialize, Serialize};

use super::store::SiteStore;
use super::{Genome, GenomeBackend};
use crate::base::{NodeArena, NodeId, Site, TeId, TeRegistry, TeSpan};

/// Genome backed by a sentinel-anchored circular doubly-linked list.
///
/// Each site is one node of a [`NodeArena`]. The node after the sentinel is
/// position 0 and the node before it is position `N - 1`, so wrapping around
/// the ring never needs modulo arithmetic. Splicing a run in front of a node
/// costs O(run length) and never moves other nodes, but there is no random
/// access: reaching a position or an element id is an O(N) walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingGenome {
    nodes: NodeArena,
    registry: TeRegistry,
}

impl RingGenome {
    /// Create a genome of `n` empty sites.
    pub fn new(n: usize) -> Self {
        let mut nodes = NodeArena::with_capacity(n);
        for _ in 0..n {
            nodes.insert_after(NodeArena::SENTINEL, Site::Empty);
        }
        Self {
            nodes,
            registry: TeRegistry::new(),
        }
    }

    /// Walk to the node at logical position `pos`.
    ///
    /// Starts from whichever side of the sentinel is closer.
    fn node_at(&self, pos: usize) -> NodeId {
        let len = self.nodes.len();
        debug_assert!(pos < len);

        if pos < len / 2 {
            let mut cursor = self.nodes.next(NodeArena::SENTINEL);
            for _ in 0..pos {
                cursor = self.nodes.next(cursor);
            }
            cursor
        } else {
            let mut cursor = self.nodes.prev(NodeArena::SENTINEL);
            for _ in pos..len - 1 {
                cursor = self.nodes.prev(cursor);
            }
            cursor
        }
    }

    /// First node carrying `te`, with its logical position.
    fn find_node(&self, te: TeId) -> Option<(usize, NodeId)> {
        self.nodes
            .iter()
            .enumerate()
            .find(|(_, (_, site))| site.belongs_to(te))
            .map(|(pos, (id, _))| (pos, id))
    }
}

impl Default for RingGenome {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SiteStore for RingGenome {
    #[inline]
    fn site_count(&self) -> usize {
        self.nodes.len()
    }

    fn site_at(&self, pos: usize) -> Site {
        self.nodes.get(self.node_at(pos)).site
    }

    fn find_span(&self, te: TeId) -> Option<TeSpan> {
        let (start, first) = self.find_node(te)?;

        // The run ends at the sentinel at the latest, which never matches.
        let mut len = 0;
        let mut cursor = first;
        while self.nodes.get(cursor).site.belongs_to(te) {
            len += 1;
            cursor = self.nodes.next(cursor);
        }
        Some(TeSpan::new(start, len))
    }

    fn splice_run(&mut self, pos: usize, len: usize, site: Site) {
        let anchor = self.node_at(pos);
        for _ in 0..len {
            self.nodes.insert_before(anchor, site);
        }
    }

    fn disable_run(&mut self, span: TeSpan) {
        let mut cursor = self.node_at(span.start);
        for _ in 0..span.len {
            self.nodes.get_mut(cursor).site.disable();
            cursor = self.nodes.next(cursor);
        }
    }

    fn site_iter(&self) -> Box<dyn Iterator<Item = Site> + '_> {
        Box::new(self.nodes.iter().map(|(_, site)| site))
    }

    fn registry(&self) -> &TeRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut TeRegistry {
        &mut self.registry
    }
}

impl Genome for RingGenome {
    fn backend(&self) -> GenomeBackend {
        GenomeBackend::Ring
    }
}

impl fmt::Display for RingGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
