//! Undirected weighted graph with direction-specific edge metadata.
//!
//! Nodes carry no data of their own; they are identities. Edges live in an
//! arena and both endpoints hold the slot index, so an edge is stored once
//! and every update is seen from either side. Adjacency is only ever
//! mutated on both endpoints together.

pub mod edge;
mod node;

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{CgError, CgResult};
use crate::model::NodeId;
use crate::validation;
use edge::EdgeSlot;
use node::Node;

pub use edge::{Edge, Link, LinkMetadata, DEFAULT_WEIGHT};

/// Whether `Graph::connect` replaces an existing edge when the caller does
/// not say.
pub const DEFAULT_OVERWRITE: bool = true;

#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Option<Edge>>,
    free_slots: Vec<EdgeSlot>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next identity and registers an empty node for it.
    pub fn create_node(&mut self) -> NodeId {
        let id = self
            .nodes
            .last()
            .map(|n| n.id.next())
            .unwrap_or_else(|| NodeId::new(0));
        self.nodes.push(Node::new(id));
        debug!(node = %id, "created node");
        id
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len() - self.free_slots.len()
    }

    /// Every node identity, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    pub fn check_connected(&self, a: NodeId, b: NodeId) -> CgResult<bool> {
        let (node_a, node_b) = (self.node(a)?, self.node(b)?);
        Ok(Self::connected(node_a, node_b))
    }

    /// Connects `a` and `b`.
    ///
    /// Returns `Ok(false)` without touching the graph for a self-loop or,
    /// when overwriting is not allowed, for a pair that is already
    /// connected. Fails on a negative weight or an unknown node.
    pub fn connect(&mut self, a: NodeId, b: NodeId, link: Link) -> CgResult<bool> {
        if a == b {
            warn!(node = %a, "cannot connect node to itself");
            return Ok(false);
        }

        validation::non_negative(link.weight, "weight")?;

        let (node_a, node_b) = (self.node(a)?, self.node(b)?);
        let overwrite = link.overwrite.unwrap_or(DEFAULT_OVERWRITE);
        let existing = if Self::connected(node_a, node_b) {
            node_a.slot_to(b)
        } else {
            None
        };

        if existing.is_some() && !overwrite {
            warn!(
                a = %a,
                b = %b,
                "nodes already connected; pass overwrite to replace the edge"
            );
            return Ok(false);
        }

        let edge = Edge::new(a, b, link);
        let slot = match existing {
            Some(slot) => {
                self.edges[slot.0] = Some(edge);
                slot
            }
            None => self.alloc_edge(edge),
        };

        self.nodes[a.index()].connect(b, slot);
        self.nodes[b.index()].connect(a, slot);
        debug!(a = %a, b = %b, replaced = existing.is_some(), "connected nodes");
        Ok(true)
    }

    /// Removes the edge between `a` and `b`. Returns `Ok(false)` if they
    /// were not connected.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> CgResult<bool> {
        if !self.check_connected(a, b)? {
            warn!(a = %a, b = %b, "nodes are not connected");
            return Ok(false);
        }

        let slot = self.nodes[a.index()].disconnect(b);
        self.nodes[b.index()].disconnect(a);
        if let Some(slot) = slot {
            self.edges[slot.0] = None;
            self.free_slots.push(slot);
        }
        debug!(a = %a, b = %b, "disconnected nodes");
        Ok(true)
    }

    pub fn neighbors(&self, id: NodeId) -> CgResult<BTreeSet<NodeId>> {
        Ok(self.node(id)?.neighbors().collect())
    }

    pub fn weight(&self, a: NodeId, b: NodeId) -> CgResult<f64> {
        Ok(self.edge(a, b)?.weight())
    }

    /// Metadata describing how `from_id` relates to `to_id`.
    pub fn metadata_from_to(&self, from_id: NodeId, to_id: NodeId) -> CgResult<&LinkMetadata> {
        self.edge(from_id, to_id)?
            .metadata_of(from_id)
            .ok_or(CgError::NotConnected {
                a: from_id,
                b: to_id,
            })
    }

    /// The edge shared by `a` and `b`.
    pub fn edge(&self, a: NodeId, b: NodeId) -> CgResult<&Edge> {
        let (node_a, node_b) = (self.node(a)?, self.node(b)?);
        let not_connected = || CgError::NotConnected { a, b };
        if !Self::connected(node_a, node_b) {
            return Err(not_connected());
        }
        node_a
            .slot_to(b)
            .and_then(|slot| self.edges.get(slot.0))
            .and_then(Option::as_ref)
            .ok_or_else(not_connected)
    }

    fn node(&self, id: NodeId) -> CgResult<&Node> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| CgError::node_not_found(id))
    }

    fn connected(a: &Node, b: &Node) -> bool {
        a.is_connected(b.id) && b.is_connected(a.id)
    }

    fn alloc_edge(&mut self, edge: Edge) -> EdgeSlot {
        match self.free_slots.pop() {
            Some(slot) => {
                self.edges[slot.0] = Some(edge);
                slot
            }
            None => {
                self.edges.push(Some(edge));
                EdgeSlot(self.edges.len() - 1)
            }
        }
    }
}
