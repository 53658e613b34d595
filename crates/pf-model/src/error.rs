//! Model error types.

use pf_core::{NodeId, PfError};
use thiserror::Error;

use crate::validate::ValidationError;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    /// An element endpoint could not be resolved. Both requested ids are
    /// reported, whichever one is actually absent.
    #[error("Node {a} or {b} does not exist")]
    MissingNode { a: NodeId, b: NodeId },

    #[error("{what} {id} not found")]
    NotFound { what: &'static str, id: String },

    #[error("Duplicate {what} id: {id}")]
    DuplicateId { what: &'static str, id: String },

    #[error("{what} {id} is still referenced by elements: {}", elements.join(", "))]
    InUse {
        what: &'static str,
        id: String,
        elements: Vec<String>,
    },

    #[error("Core error: {0}")]
    Core(#[from] PfError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported model file: {path}")]
    UnsupportedFormat { path: String },
}
