//! Prerequisite links.

use std::fmt;

use super::EntityIndex;

/// Position of a [`Link`] in the link list of an [`EntityGraph`](super::EntityGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkIndex(usize);

impl LinkIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LinkIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed edge from a prerequisite (`source`) to its dependent (`target`).
///
/// Links never own their endpoints; both ends are indices into the entity
/// list of the same graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    source: EntityIndex,
    target: EntityIndex,
}

impl Link {
    pub fn new(source: EntityIndex, target: EntityIndex) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> EntityIndex {
        self.source
    }

    pub fn target(&self) -> EntityIndex {
        self.target
    }
}
