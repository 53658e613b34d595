//! pf-history: reversible edits and undo/redo history for planeframe models.
//!
//! Provides:
//! - The [`Operation`] contract and a catalog of built-in operations
//! - [`Transaction`]: an ordered, named batch of operations
//! - [`Repository`]: owns a model and keeps bounded undo/redo stacks
//!
//! # Example
//!
//! ```
//! use pf_core::Vec2Plane;
//! use pf_history::{MoveNode, Repository, Transaction};
//! use pf_model::{Model, Node};
//!
//! let mut model = Model::new();
//! model.add_node(Node::new(Vec2Plane::new(0.0, 0.0)).with_id("n1")).unwrap();
//!
//! let mut repo = Repository::new(model);
//! repo.commit(Transaction::new("Move n1").with_operation(MoveNode::new("n1", Vec2Plane::new(1.0, 0.0))))
//!     .unwrap();
//! repo.undo(1).unwrap();
//!
//! assert_eq!(repo.model().node("n1").unwrap().position(), Vec2Plane::new(0.0, 0.0));
//! ```

pub mod config;
pub mod error;
pub mod operation;
pub mod operations;
pub mod repository;
pub mod transaction;

pub use config::{DEFAULT_HISTORY_LIMIT, HistoryConfig};
pub use error::{HistoryError, HistoryResult};
pub use operation::{Operation, OperationKind};
pub use operations::{
    AddElement, AddNode, MoveNode, RemoveElement, RemoveNode, RenameNode, SetMaterialProperty,
};
pub use repository::Repository;
pub use transaction::{Transaction, TransactionState};
