//! Model document record.

use serde::{Deserialize, Serialize};

use crate::element::{ElementData, StiffnessInputs};
use crate::material::MaterialData;
use crate::node::NodeData;
use crate::section::SectionData;

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelData {
    pub version: u32,
    #[serde(default)]
    pub stiffness_defaults: StiffnessInputs,
    #[serde(default)]
    pub nodes: Vec<NodeData>,
    #[serde(default)]
    pub elements: Vec<ElementData>,
    #[serde(default)]
    pub materials: Vec<MaterialData>,
    #[serde(default)]
    pub sections: Vec<SectionData>,
}

impl Default for ModelData {
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            stiffness_defaults: StiffnessInputs::default(),
            nodes: Vec::new(),
            elements: Vec::new(),
            materials: Vec::new(),
            sections: Vec::new(),
        }
    }
}
