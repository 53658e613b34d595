//! The reversible-operation contract.

use std::fmt;

use pf_model::Model;

/// Explicit tag naming an operation in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    AddNode,
    RemoveNode,
    MoveNode,
    RenameNode,
    AddElement,
    RemoveElement,
    SetMaterialProperty,
    /// Caller-defined operations outside the built-in catalog.
    Custom(&'static str),
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::AddNode => f.write_str("add-node"),
            OperationKind::RemoveNode => f.write_str("remove-node"),
            OperationKind::MoveNode => f.write_str("move-node"),
            OperationKind::RenameNode => f.write_str("rename-node"),
            OperationKind::AddElement => f.write_str("add-element"),
            OperationKind::RemoveElement => f.write_str("remove-element"),
            OperationKind::SetMaterialProperty => f.write_str("set-material-property"),
            OperationKind::Custom(name) => f.write_str(name),
        }
    }
}

/// A single reversible mutation of a [`Model`].
///
/// `apply` and `revert` report success as a boolean; a failing operation
/// must leave the model as it found it. Operations may record whatever they
/// need during `apply` to undo it later.
pub trait Operation: fmt::Debug + Send {
    fn kind(&self) -> OperationKind;

    fn apply(&mut self, model: &mut Model) -> bool;

    fn revert(&mut self, model: &mut Model) -> bool;
}
