use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer handle of a graph node. Handles are handed out in increasing
/// order starting at 0 and are never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId {
    pub value: u64,
}

/// A contact is identified by the node that backs it.
pub type ContactId = NodeId;

impl NodeId {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// The successor handle.
    pub(crate) fn next(self) -> Self {
        Self::new(self.value + 1)
    }

    pub(crate) fn index(self) -> usize {
        self.value as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
