//! Base types for genome representation.
//!
//! This module provides the site tags, element ids and storage primitives
//! shared by both genome backings.

mod arena;
mod registry;
mod site;

pub use arena::{Node, NodeArena, NodeId, RingIter};
pub use registry::TeRegistry;
pub use site::{Site, TeId, TeSpan, TeStatus};
