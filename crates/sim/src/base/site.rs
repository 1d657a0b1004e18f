use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a transposable element.
///
/// Ids are handed out by a genome in strictly increasing order starting at 0
/// and are never reused, not even after the element is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeId(pub u64);

impl TeId {
    /// The raw integer value of this id.
    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "te{}", self.0)
    }
}

/// Status of a transposable element.
///
/// The only transition is `Active -> Disabled`; `Disabled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeStatus {
    Active,
    Disabled,
}

/// Tag stored at one position of the circular genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Site {
    /// No transposable element at this position.
    #[default]
    Empty,
    /// Position occupied by (part of) a transposable element.
    Te { id: TeId, status: TeStatus },
}

impl Site {
    /// Rendering character for an empty site.
    pub const EMPTY_SYMBOL: char = '-';
    /// Rendering character for a site of an active element.
    pub const ACTIVE_SYMBOL: char = 'A';
    /// Rendering character for a site of a disabled element.
    pub const DISABLED_SYMBOL: char = 'x';

    /// A site belonging to a freshly inserted element.
    #[inline]
    pub const fn active(id: TeId) -> Self {
        Self::Te {
            id,
            status: TeStatus::Active,
        }
    }

    /// The element occupying this site, if any.
    #[inline]
    pub const fn te_id(self) -> Option<TeId> {
        match self {
            Self::Empty => None,
            Self::Te { id, .. } => Some(id),
        }
    }

    /// Returns true if this site belongs to element `te`.
    #[inline]
    pub fn belongs_to(self, te: TeId) -> bool {
        self.te_id() == Some(te)
    }

    /// Returns the id of the occupying element if it is still active.
    #[inline]
    pub const fn active_te(self) -> Option<TeId> {
        match self {
            Self::Te {
                id,
                status: TeStatus::Active,
            } => Some(id),
            _ => None,
        }
    }

    /// Mark this site as part of a disabled element. Empty sites are left alone.
    #[inline]
    pub fn disable(&mut self) {
        if let Self::Te { status, .. } = self {
            *status = TeStatus::Disabled;
        }
    }

    /// The character used by genome rendering.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => Self::EMPTY_SYMBOL,
            Self::Te {
                status: TeStatus::Active,
                ..
            } => Self::ACTIVE_SYMBOL,
            Self::Te {
                status: TeStatus::Disabled,
                ..
            } => Self::DISABLED_SYMBOL,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Location of a transposable element's run of sites.
///
/// `start` is the logical position of the first site and `len` the number of
/// consecutive sites carrying the element's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeSpan {
    pub start: usize,
    pub len: usize,
}

impl TeSpan {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last position of the run.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns true if `pos` lies inside the run.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        (self.start..self.end()).contains(&pos)
    }
}
