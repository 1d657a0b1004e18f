use super::Site;
use serde::{Deserialize, Serialize};

/// Handle to a node stored in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Handle for slot `index`.
    ///
    /// # Panics
    /// Panics if `index` does not fit a `u32`; a wrapped handle would alias
    /// the sentinel.
    #[inline]
    fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).expect("node arena exhausted"))
    }

    #[inline(always)]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One link of a circular doubly-linked list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub site: Site,
    prev: NodeId,
    next: NodeId,
}

/// Arena storage for the nodes of a circular doubly-linked list.
///
/// All nodes live in one contiguous buffer and refer to each other by index,
/// so the list is owned by a single `Vec` rather than a graph of references.
/// Slot 0 is the sentinel: it never carries genome data, `next` of the
/// sentinel is the first node and `prev` of the sentinel is the last one.
/// Nodes are never freed; the list only grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// The anchor of the ring.
    pub const SENTINEL: NodeId = NodeId(0);

    /// Create an arena holding only the sentinel, linked to itself.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty ring with room for `capacity` data nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node {
            site: Site::Empty,
            prev: Self::SENTINEL,
            next: Self::SENTINEL,
        });
        Self { nodes }
    }

    /// Number of data nodes (the sentinel is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access a node.
    ///
    /// # Panics
    /// Panics if `id` was not handed out by this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutably access a node.
    ///
    /// # Panics
    /// Panics if `id` was not handed out by this arena.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> NodeId {
        self.get(id).next
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> NodeId {
        self.get(id).prev
    }

    /// Allocate a node carrying `site` and link it directly after `link`.
    pub fn insert_after(&mut self, link: NodeId, site: Site) -> NodeId {
        let next = self.next(link);
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            site,
            prev: link,
            next,
        });
        self.get_mut(link).next = id;
        self.get_mut(next).prev = id;
        id
    }

    /// Allocate a node carrying `site` and link it directly before `link`.
    pub fn insert_before(&mut self, link: NodeId, site: Site) -> NodeId {
        let prev = self.prev(link);
        self.insert_after(prev, site)
    }

    /// Iterate over the data nodes in ring order, starting after the sentinel.
    pub fn iter(&self) -> RingIter<'_> {
        RingIter {
            arena: self,
            cursor: self.next(Self::SENTINEL),
        }
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward iterator over `(NodeId, Site)` pairs of a [`NodeArena`] ring.
pub struct RingIter<'a> {
    arena: &'a NodeArena,
    cursor: NodeId,
}

impl Iterator for RingIter<'_> {
    type Item = (NodeId, Site);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NodeArena::SENTINEL {
            return None;
        }
        let id = self.cursor;
        let node = self.arena.get(id);
        self.cursor = node.next;
        Some((id, node.site))
    }
}
