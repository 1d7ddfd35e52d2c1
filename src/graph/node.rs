use std::collections::BTreeMap;
use std::fmt;

use super::edge::EdgeSlot;
use crate::model::NodeId;

/// A node is an identity plus its half of the adjacency: the arena slot of
/// the edge it shares with each neighbor.
pub(crate) struct Node {
    pub(crate) id: NodeId,
    edges: BTreeMap<NodeId, EdgeSlot>,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            edges: BTreeMap::new(),
        }
    }

    pub(crate) fn connect(&mut self, other: NodeId, slot: EdgeSlot) {
        self.edges.insert(other, slot);
    }

    pub(crate) fn disconnect(&mut self, other: NodeId) -> Option<EdgeSlot> {
        self.edges.remove(&other)
    }

    pub(crate) fn is_connected(&self, other: NodeId) -> bool {
        self.edges.contains_key(&other)
    }

    pub(crate) fn slot_to(&self, other: NodeId) -> Option<EdgeSlot> {
        self.edges.get(&other).copied()
    }

    pub(crate) fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.keys().copied()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neighbors: Vec<u64> = self.neighbors().map(|n| n.value).collect();
        write!(f, "Node(id={}, edges={:?})", self.id, neighbors)
    }
}
