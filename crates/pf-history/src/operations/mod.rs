//! Built-in operations.

mod element;
mod material;
mod node;

pub use element::{AddElement, RemoveElement};
pub use material::SetMaterialProperty;
pub use node::{AddNode, MoveNode, RemoveNode, RenameNode};

use pf_model::ModelResult;
use tracing::warn;

use crate::operation::OperationKind;

/// Log a model error and collapse it to the operation's success signal.
fn succeeded<T>(kind: OperationKind, result: ModelResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(operation = %kind, error = %err, "model rejected operation");
            None
        }
    }
}

fn missing(kind: OperationKind, what: &'static str, id: &str) -> bool {
    warn!(operation = %kind, id, "{what} not found");
    false
}

fn not_applied(kind: OperationKind) -> bool {
    warn!(operation = %kind, "revert requested before a successful apply");
    false
}
