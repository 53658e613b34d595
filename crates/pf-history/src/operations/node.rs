use pf_core::{NodeId, Vec2Plane};
use pf_model::{Model, Node};

use super::{missing, not_applied, succeeded};
use crate::operation::{Operation, OperationKind};

/// Insert a node; reverting removes it again.
#[derive(Debug, Clone)]
pub struct AddNode {
    node: Node,
}

impl AddNode {
    pub fn new(node: Node) -> Self {
        Self { node }
    }

    pub fn node_id(&self) -> &str {
        self.node.id()
    }
}

impl Operation for AddNode {
    fn kind(&self) -> OperationKind {
        OperationKind::AddNode
    }

    fn apply(&mut self, model: &mut Model) -> bool {
        succeeded(self.kind(), model.add_node(self.node.clone())).is_some()
    }

    fn revert(&mut self, model: &mut Model) -> bool {
        // Rejected by the model while an element still uses the node
        match succeeded(self.kind(), model.remove_node(self.node.id())) {
            Some(node) => {
                self.node = node;
                true
            }
            None => false,
        }
    }
}

/// Remove an unreferenced node; reverting restores it unchanged.
#[derive(Debug, Clone)]
pub struct RemoveNode {
    node_id: NodeId,
    removed: Option<Node>,
}

impl RemoveNode {
    pub fn new(node_id: impl Into<NodeId>) -> Self {
        Self {
            node_id: node_id.into(),
            removed: None,
        }
    }
}

impl Operation for RemoveNode {
    fn kind(&self) -> OperationKind {
        OperationKind::RemoveNode
    }

    fn apply(&mut self, model: &mut Model) -> bool {
        match succeeded(self.kind(), model.remove_node(&self.node_id)) {
            Some(node) => {
                self.removed = Some(node);
                true
            }
            None => false,
        }
    }

    fn revert(&mut self, model: &mut Model) -> bool {
        let Some(node) = self.removed.clone() else {
            return not_applied(self.kind());
        };
        succeeded(self.kind(), model.add_node(node)).is_some()
    }
}

/// Move a node to an absolute position.
#[derive(Debug, Clone)]
pub struct MoveNode {
    node_id: NodeId,
    to: Vec2Plane,
    from: Option<Vec2Plane>,
}

impl MoveNode {
    pub fn new(node_id: impl Into<NodeId>, to: Vec2Plane) -> Self {
        Self {
            node_id: node_id.into(),
            to,
            from: None,
        }
    }
}

impl Operation for MoveNode {
    fn kind(&self) -> OperationKind {
        OperationKind::MoveNode
    }

    fn apply(&mut self, model: &mut Model) -> bool {
        let Some(node) = model.node_mut(&self.node_id) else {
            return missing(self.kind(), "node", &self.node_id);
        };
        self.from = Some(node.position());
        node.set_position(self.to);
        true
    }

    fn revert(&mut self, model: &mut Model) -> bool {
        let Some(from) = self.from else {
            return not_applied(self.kind());
        };
        let Some(node) = model.node_mut(&self.node_id) else {
            return missing(self.kind(), "node", &self.node_id);
        };
        node.set_position(from);
        true
    }
}

/// Set or clear a node's display name.
#[derive(Debug, Clone)]
pub struct RenameNode {
    node_id: NodeId,
    name: Option<String>,
    previous: Option<Option<String>>,
}

impl RenameNode {
    pub fn new(node_id: impl Into<NodeId>, name: Option<String>) -> Self {
        Self {
            node_id: node_id.into(),
            name,
            previous: None,
        }
    }
}

impl Operation for RenameNode {
    fn kind(&self) -> OperationKind {
        OperationKind::RenameNode
    }

    fn apply(&mut self, model: &mut Model) -> bool {
        let Some(node) = model.node_mut(&self.node_id) else {
            return missing(self.kind(), "node", &self.node_id);
        };
        self.previous = Some(node.set_name(self.name.clone()));
        true
    }

    fn revert(&mut self, model: &mut Model) -> bool {
        let Some(previous) = self.previous.clone() else {
            return not_applied(self.kind());
        };
        let Some(node) = model.node_mut(&self.node_id) else {
            return missing(self.kind(), "node", &self.node_id);
        };
        node.set_name(previous);
        true
    }
}
