use thiserror::Error;

use crate::model::NodeId;

#[derive(Debug, Error, PartialEq)]
pub enum CgError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Nodes are not connected: {a} and {b}")]
    NotConnected { a: NodeId, b: NodeId },

    #[error("{field} must be non-negative")]
    Negative { field: String },

    #[error("Invalid phone number: {value}")]
    InvalidPhoneNumber { value: String },
}

impl CgError {
    pub(crate) fn node_not_found(id: NodeId) -> Self {
        CgError::NotFound {
            entity_type: "Node".into(),
            id: id.to_string(),
        }
    }
}

pub type CgResult<T> = Result<T, CgError>;
