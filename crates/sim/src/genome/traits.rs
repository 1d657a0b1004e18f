use std::fmt;

use tracing::{debug, trace};

use crate::base::{Site, TeId, TeSpan};
use crate::errors::GenomeError;

use super::GenomeBackend;

pub(crate) mod store {
    use crate::base::{Site, TeId, TeRegistry, TeSpan};

    /// Storage primitives a backing provides to the [`Genome`](super::Genome) contract.
    ///
    /// The contract itself (validation, collision rule, id minting) is written
    /// once on top of these, so both backings share identical semantics and
    /// only differ in what each primitive costs.
    pub trait SiteStore {
        /// Number of sites.
        fn site_count(&self) -> usize;

        /// Tag at logical position `pos`. Callers guarantee `pos < site_count()`.
        fn site_at(&self, pos: usize) -> Site;

        /// First run of sites carrying `te`: the position of the first match
        /// and the number of consecutive sites sharing the id.
        fn find_span(&self, te: TeId) -> Option<TeSpan>;

        /// Insert `len` copies of `site` so the first lands at position `pos`,
        /// shifting the former occupant of `pos` and everything after it.
        /// Callers guarantee `pos < site_count()` and `len >= 1`.
        fn splice_run(&mut self, pos: usize, len: usize, site: Site);

        /// Mark every site in `span` as disabled.
        fn disable_run(&mut self, span: TeSpan);

        /// Iterate over all tags, position 0 first.
        fn site_iter(&self) -> Box<dyn Iterator<Item = Site> + '_>;

        fn registry(&self) -> &TeRegistry;

        fn registry_mut(&mut self) -> &mut TeRegistry;
    }
}

use store::SiteStore;

/// A circular genome hosting transposable elements.
///
/// Positions are logical indices `0..len()`, with the last position adjacent
/// to position 0. Sites are only ever added. Element ids start at 0 and grow
/// by one per successful insertion or copy.
///
/// All operations are provided on top of the backing's storage primitives, so
/// every implementation observes exactly the same semantics.
pub trait Genome: SiteStore + fmt::Debug + Send {
    /// Which storage strategy backs this genome.
    fn backend(&self) -> GenomeBackend;

    /// Current number of sites.
    fn len(&self) -> usize {
        self.site_count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a new active element of `length` sites starting at position `pos`.
    ///
    /// The site previously at `pos` and all following sites move `length`
    /// positions forward. If that site belonged to an active element, the
    /// whole element is disabled.
    ///
    /// # Errors
    /// `InvalidLength` if `length == 0`, `InvalidPosition` if `pos >= len()`.
    /// The genome is unchanged on error.
    fn insert_te(&mut self, pos: usize, length: usize) -> Result<TeId, GenomeError> {
        if length == 0 {
            return Err(GenomeError::InvalidLength(length));
        }
        if pos >= self.len() {
            return Err(GenomeError::InvalidPosition {
                position: pos,
                length: self.len(),
            });
        }
        Ok(insert_unchecked(self, pos, length, None))
    }

    /// Copy active element `te` to `offset` positions from its current start.
    ///
    /// The target is `(start + offset) mod len()` using Euclidean modulo, so
    /// negative offsets wrap to the end of the genome. The copy follows the
    /// same collision rule as [`insert_te`](Genome::insert_te). A copy whose
    /// target is the source's own start lands in front of the source and
    /// leaves it active; any other target inside the source disables it.
    ///
    /// Returns `None`, without touching the genome, if `te` is not active.
    fn copy_te(&mut self, te: TeId, offset: i64) -> Option<TeId> {
        if !self.registry().is_active(te) {
            trace!(%te, "copy of inactive element ignored");
            return None;
        }
        let span = self.find_span(te)?;
        let n = self.len() as i64;
        let target = ((span.start as i64 + offset.rem_euclid(n)) % n) as usize;
        let spare = (target == span.start).then_some(te);

        let copy = insert_unchecked(self, target, span.len, spare);
        debug!(source = %te, %copy, from = span.start, to = target, len = span.len, "copied element");
        Some(copy)
    }

    /// Disable `te` if it is active; otherwise do nothing.
    fn disable_te(&mut self, te: TeId) {
        disable_active(self, te);
    }

    /// Ids of all active elements, ascending.
    fn active_tes(&self) -> Vec<TeId> {
        self.registry().active().collect()
    }

    /// Number of active elements.
    fn active_count(&self) -> usize {
        self.registry().active_count()
    }

    fn is_active(&self, te: TeId) -> bool {
        self.registry().is_active(te)
    }

    /// Number of ids issued so far, active or not.
    fn te_count(&self) -> u64 {
        self.registry().issued()
    }

    /// Start position and length of an active element. `None` for inactive ids.
    fn locate(&self, te: TeId) -> Option<TeSpan> {
        if self.registry().is_active(te) {
            self.find_span(te)
        } else {
            None
        }
    }

    /// Tag at `pos`, or `None` if out of range.
    fn site(&self, pos: usize) -> Option<Site> {
        (pos < self.len()).then(|| self.site_at(pos))
    }

    /// All tags, position 0 first.
    fn sites(&self) -> Vec<Site> {
        self.site_iter().collect()
    }

    /// One character per site: `-` empty, `A` active element, `x` disabled element.
    fn render(&self) -> String {
        self.site_iter().map(Site::symbol).collect()
    }
}

/// Disable the element at `pos` (if active), splice a fresh element in and
/// register it. Arguments are already validated; nothing here can fail.
fn insert_unchecked<G: SiteStore + ?Sized>(
    genome: &mut G,
    pos: usize,
    length: usize,
    spare: Option<TeId>,
) -> TeId {
    if let Some(victim) = genome.site_at(pos).active_te() {
        if Some(victim) != spare {
            debug!(%victim, pos, "insertion collides with active element");
            disable_active(genome, victim);
        }
    }

    let id = genome.registry().peek_next();
    genome.splice_run(pos, length, Site::active(id));
    let minted = genome.registry_mut().mint();
    debug_assert_eq!(id, minted);
    trace!(te = %id, pos, length, "inserted element");
    id
}

fn disable_active<G: SiteStore + ?Sized>(genome: &mut G, te: TeId) {
    if !genome.registry().is_active(te) {
        return;
    }
    if let Some(span) = genome.find_span(te) {
        genome.disable_run(span);
    }
    genome.registry_mut().deactivate(te);
    trace!(%te, "disabled element");
}

