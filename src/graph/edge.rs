use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::model::NodeId;

/// Free-form annotations attached to one direction of an edge.
pub type LinkMetadata = BTreeMap<String, Value>;

pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Index of an edge in the graph's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct EdgeSlot(pub(crate) usize);

/// Undirected, weighted connection between two distinct nodes.
///
/// Connectivity is symmetric but metadata is not: `a_to_b` describes how `a`
/// relates to `b` and `b_to_a` the reverse, and the two are stored
/// independently.
#[derive(Clone, PartialEq)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
    weight: f64,
    a_to_b: LinkMetadata,
    b_to_a: LinkMetadata,
}

impl Edge {
    pub(crate) fn new(a: NodeId, b: NodeId, link: Link) -> Self {
        Self {
            a,
            b,
            weight: link.weight,
            a_to_b: link.a_to_b,
            b_to_a: link.b_to_a,
        }
    }

    /// Endpoints in the order they were given when the edge was created.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Metadata for the direction leaving `id`, or `None` if `id` is not an
    /// endpoint.
    pub fn metadata_of(&self, id: NodeId) -> Option<&LinkMetadata> {
        if id == self.a {
            Some(&self.a_to_b)
        } else if id == self.b {
            Some(&self.b_to_a)
        } else {
            None
        }
    }

    /// The endpoint opposite `id`.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if id == self.a {
            Some(self.b)
        } else if id == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge(a={}, b={}, weight={})", self.a, self.b, self.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Arguments of a connect call.
///
/// `overwrite` is left unset by default so each layer can apply its own
/// default: the graph engine replaces existing edges, the contact registry
/// does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub weight: f64,
    pub a_to_b: LinkMetadata,
    pub b_to_a: LinkMetadata,
    pub overwrite: Option<bool>,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT,
            a_to_b: LinkMetadata::new(),
            b_to_a: LinkMetadata::new(),
            overwrite: None,
        }
    }
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn a_to_b(mut self, meta: LinkMetadata) -> Self {
        self.a_to_b = meta;
        self
    }

    pub fn b_to_a(mut self, meta: LinkMetadata) -> Self {
        self.b_to_a = meta;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }
}
