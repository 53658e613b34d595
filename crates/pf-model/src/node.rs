//! Geometric nodes of the frame.

use pf_core::{NodeId, Real, Vec2Plane, new_entity_id};
use serde::{Deserialize, Serialize};

/// Prescribed nodal displacement; each component is independently optional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Displacement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<Real>,
}

/// Serialized node record.
///
/// Optional keys are written only when set, so absence round-trips to absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: NodeId,
    pub coords: Vec2Plane,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displacement: Option<Vec2Plane>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescribed: Option<Displacement>,
}

/// A point in the frame plane.
///
/// Position is private and only reachable through [`Node::position`] and
/// [`Node::set_position`]; every write marks the node dirty until
/// [`Node::acknowledge_clean`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    name: Option<String>,
    position: Vec2Plane,
    initial_displacement: Option<Vec2Plane>,
    prescribed_displacement: Option<Displacement>,
    dirty: bool,
}

impl Node {
    /// Create a node at `coords` with a freshly generated id.
    pub fn new(coords: Vec2Plane) -> Self {
        Self {
            id: new_entity_id(),
            name: None,
            position: coords,
            initial_displacement: None,
            prescribed_displacement: None,
            dirty: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_initial_displacement(mut self, displacement: Vec2Plane) -> Self {
        self.initial_displacement = Some(displacement);
        self
    }

    pub fn with_prescribed_displacement(mut self, displacement: Displacement) -> Self {
        self.prescribed_displacement = Some(displacement);
        self
    }

    /// Restore a node from its record. The restored node starts clean.
    pub fn from_data(data: NodeData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            position: data.coords,
            initial_displacement: data.displacement,
            prescribed_displacement: data.prescribed,
            dirty: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the display name, returning the previous one.
    pub fn set_name(&mut self, name: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.name, name)
    }

    pub fn position(&self) -> Vec2Plane {
        self.position
    }

    /// Move the node. Marks it dirty even when the position is unchanged.
    pub fn set_position(&mut self, position: Vec2Plane) {
        self.position = position;
        self.dirty = true;
    }

    pub fn initial_displacement(&self) -> Option<Vec2Plane> {
        self.initial_displacement
    }

    pub fn prescribed_displacement(&self) -> Option<Displacement> {
        self.prescribed_displacement
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the node's own flag. Elements keep their own flags.
    pub fn acknowledge_clean(&mut self) {
        self.dirty = false;
    }

    pub fn to_data(&self) -> NodeData {
        NodeData {
            id: self.id.clone(),
            coords: self.position,
            name: self.name.clone(),
            displacement: self.initial_displacement,
            prescribed: self.prescribed_displacement,
        }
    }
}
