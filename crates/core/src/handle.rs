//! Stable node handles used by the circular list structures.

use serde::{Deserialize, Serialize};

/// Arena index of a list node.
///
/// Lists store their linkage (`next`/`prev`) as handles into a node arena
/// instead of owning pointers, so circular closure never creates a reference
/// cycle. Handles stay valid for the life of the owning structure: nodes are
/// never deallocated, only appended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(usize);

impl Handle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for Handle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
