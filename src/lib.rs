//! Contacts as entities with typed attribute records, related through a
//! weighted undirected graph whose edges carry separate metadata for each
//! direction.

pub mod error;
pub mod validation;
pub mod model;
pub mod graph;
pub mod registry;

pub use error::{CgError, CgResult};
pub use graph::{Edge, Graph, Link, LinkMetadata};
pub use model::{ContactId, NodeId};
pub use registry::ContactRegistry;
