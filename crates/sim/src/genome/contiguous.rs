use std::fmt;

use serde::{Deserialize, Serialize};

use super::store::SiteStore;
use super::{Genome, GenomeBackend};
use crate::base::{Site, TeId, TeRegistry, TeSpan};

/// Genome backed by one flat vector of site tags.
///
/// Position `i` of the ring is index `i` of the vector. Inserting shifts the
/// tail of the vector (O(N)), while reading a position is O(1) and rendering
/// walks memory in order. Finding an element by id is a linear scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContiguousGenome {
    sites: Vec<Site>,
    registry: TeRegistry,
}

impl ContiguousGenome {
    /// Create a genome of `n` empty sites.
    pub fn new(n: usize) -> Self {
        Self {
            sites: vec![Site::Empty; n],
            registry: TeRegistry::new(),
        }
    }
}

impl Default for ContiguousGenome {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SiteStore for ContiguousGenome {
    #[inline]
    fn site_count(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    fn site_at(&self, pos: usize) -> Site {
        self.sites[pos]
    }

    fn find_span(&self, te: TeId) -> Option<TeSpan> {
        let start = self.sites.iter().position(|s| s.belongs_to(te))?;
        let len = self.sites[start..]
            .iter()
            .take_while(|s| s.belongs_to(te))
            .count();
        Some(TeSpan::new(start, len))
    }

    fn splice_run(&mut self, pos: usize, len: usize, site: Site) {
        self.sites
            .splice(pos..pos, std::iter::repeat(site).take(len));
    }

    fn disable_run(&mut self, span: TeSpan) {
        for site in &mut self.sites[span.start..span.end()] {
            site.disable();
        }
    }

    fn site_iter(&self) -> Box<dyn Iterator<Item = Site> + '_> {
        Box::new(self.sites.iter().copied())
    }

    fn registry(&self) -> &TeRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut TeRegistry {
        &mut self.registry
    }
}

impl Genome for ContiguousGenome {
    fn backend(&self) -> GenomeBackend {
        GenomeBackend::Contiguous
    }

    // Direct slice access beats the boxed iterator here.
    fn sites(&self) -> Vec<Site> {
        self.sites.clone()
    }
}

impl fmt::Display for ContiguousGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
