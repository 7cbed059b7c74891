//! Core value types shared between the container and its hosts.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// IndexPath
// ---------------------------------------------------------------------------

/// Position of an item inside a grouped list: which group, then which item
/// within that group.
///
/// Ordering is lexicographic, group first, which matches iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexPath {
    /// Index of the group.
    pub group: usize,
    /// Index of the item within its group.
    pub item: usize,
}

impl IndexPath {
    pub fn new(group: usize, item: usize) -> Self {
        Self { group, item }
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((group, item): (usize, usize)) -> Self {
        Self { group, item }
    }
}

impl std::fmt::Display for IndexPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.item)
    }
}
