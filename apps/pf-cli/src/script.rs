//! Scripted edit sessions for `pf-cli replay`.

use pf_core::{ElementId, MaterialId, NodeId, Real, Vec2Plane};
use pf_history::{
    AddElement, AddNode, MoveNode, Operation, RemoveElement, RemoveNode, RenameNode,
    Repository, SetMaterialProperty, Transaction,
};
use tracing::warn;
use pf_model::{ElementData, MaterialProperty, Node, NodeData};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Script {
    #[serde(default)]
    pub history_limit: Option<usize>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    Commit {
        name: String,
        #[serde(default)]
        operations: Vec<OperationDef>,
    },
    Undo {
        count: i64,
    },
    Redo {
        count: i64,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperationDef {
    AddNode(NodeData),
    RemoveNode {
        node_id: NodeId,
    },
    MoveNode {
        node_id: NodeId,
        to: Vec2Plane,
    },
    RenameNode {
        node_id: NodeId,
        #[serde(default)]
        name: Option<String>,
    },
    AddElement(ElementData),
    RemoveElement {
        element_id: ElementId,
    },
    SetMaterial {
        material_id: MaterialId,
        property: MaterialProperty,
        value: Real,
    },
}

impl OperationDef {
    pub fn into_operation(self) -> Box<dyn Operation> {
        match self {
            OperationDef::AddNode(data) => Box::new(AddNode::new(Node::from_data(data))),
            OperationDef::RemoveNode { node_id } => Box::new(RemoveNode::new(node_id)),
            OperationDef::MoveNode { node_id, to } => Box::new(MoveNode::new(node_id, to)),
            OperationDef::RenameNode { node_id, name } => Box::new(RenameNode::new(node_id, name)),
            OperationDef::AddElement(data) => Box::new(AddElement::new(data)),
            OperationDef::RemoveElement { element_id } => Box::new(RemoveElement::new(element_id)),
            OperationDef::SetMaterial {
                material_id,
                property,
                value,
            } => Box::new(SetMaterialProperty::new(material_id, property, value)),
        }
    }
}

pub fn build_transaction(name: String, operations: Vec<OperationDef>) -> Transaction {
    let mut transaction = Transaction::new(name);
    for def in operations {
        transaction.push_boxed(def.into_operation());
    }
    transaction
}

/// Run every step against the repository, logging failed steps and
/// carrying on. Returns the number of failed steps.
pub fn replay(repo: &mut Repository, steps: Vec<Step>) -> usize {
    let mut failures = 0usize;
    for (index, step) in steps.into_iter().enumerate() {
        let result = match step {
            Step::Commit { name, operations } => repo.commit(build_transaction(name, operations)),
            Step::Undo { count } => repo.undo(count).map(|_| ()),
            Step::Redo { count } => repo.redo(count).map(|_| ()),
        };
        if let Err(err) = result {
            warn!(step = index, error = %err, "step failed");
            failures += 1;
        }
    }
    failures
}
