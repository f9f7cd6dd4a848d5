//! # Visited Set
//!
//! Per-traversal visited state for neighbour queries and ring expansion.
//!
//! Each logical traversal owns its own set, so traversals over the same
//! manifold never interfere and a `&Manifold` can be shared between threads
//! that each hold a separate set.

use crate::vertex::VertexIdx;

/// Dense visited flags indexed by [`VertexIdx`].
///
/// # Example
///
/// ```rust
/// use geodome::{VertexIdx, VisitedSet};
///
/// let mut visited = VisitedSet::new(4);
/// assert!(visited.mark(VertexIdx::new(2)));
/// assert!(!visited.mark(VertexIdx::new(2)));
/// visited.unmark_all();
/// assert!(!visited.is_visited(VertexIdx::new(2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    flags: Vec<bool>,
    marked: usize,
}

impl VisitedSet {
    /// Creates a set able to hold `len` vertices, all unvisited.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            marked: 0,
        }
    }

    /// Returns true if `v` has been marked.
    ///
    /// Indices beyond the set's capacity read as unvisited.
    #[inline]
    pub fn is_visited(&self, v: VertexIdx) -> bool {
        self.flags.get(v.index()).copied().unwrap_or(false)
    }

    /// Marks `v`, growing the set if needed. Returns true if it was unvisited.
    pub fn mark(&mut self, v: VertexIdx) -> bool {
        let i = v.index();
        if i >= self.flags.len() {
            self.flags.resize(i + 1, false);
        }
        if self.flags[i] {
            return false;
        }
        self.flags[i] = true;
        self.marked += 1;
        true
    }

    /// Resets every flag to unvisited in O(capacity).
    pub fn unmark_all(&mut self) {
        self.flags.fill(false);
        self.marked = 0;
    }

    /// Resets every flag and resizes the set to `len` vertices.
    pub fn reset(&mut self, len: usize) {
        self.flags.clear();
        self.flags.resize(len, false);
        self.marked = 0;
    }

    /// Number of vertices currently marked.
    #[inline]
    pub fn count(&self) -> usize {
        self.marked
    }

    /// Capacity of the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if the set has no capacity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
