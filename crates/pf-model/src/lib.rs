//! pf-model: entities of a planar frame model and their derived quantities.
//!
//! Provides:
//! - Nodes with tracked position changes
//! - Elements deriving length, direction cosines, transformation and
//!   local stiffness matrices from their endpoint nodes
//! - Materials and sections that mark the owning model dirty on change
//! - The model registries and the YAML/JSON model file format
//!
//! # Example
//!
//! ```
//! use pf_core::Vec2Plane;
//! use pf_model::{ElementData, Model, Node};
//!
//! let mut model = Model::new();
//! let a = model.add_node(Node::new(Vec2Plane::new(0.0, 0.0))).unwrap();
//! let b = model.add_node(Node::new(Vec2Plane::new(3.0, 4.0))).unwrap();
//! model
//!     .add_element(ElementData {
//!         id: "e1".into(),
//!         node_ids: [a, b],
//!         material_id: None,
//!         section_id: None,
//!     })
//!     .unwrap();
//!
//! assert_eq!(model.element("e1").unwrap().length(), 5.0);
//! ```

pub mod data;
pub mod element;
pub mod error;
pub mod material;
pub mod model;
pub mod node;
pub mod section;
pub mod validate;

use std::path::Path;

pub use data::{LATEST_VERSION, ModelData};
pub use element::{Element, ElementCache, ElementData, StiffnessInputs};
pub use error::{ModelError, ModelResult};
pub use material::{Material, MaterialData, MaterialProperty};
pub use model::{Model, ModelContext};
pub use node::{Displacement, Node, NodeData};
pub use section::{Section, SectionData};
pub use validate::{ValidationError, validate_model_data};

pub fn load_yaml(path: &Path) -> ModelResult<ModelData> {
    let content = std::fs::read_to_string(path)?;
    let data: ModelData = serde_yaml::from_str(&content)?;
    validate_model_data(&data)?;
    Ok(data)
}

pub fn save_yaml(path: &Path, data: &ModelData) -> ModelResult<()> {
    validate_model_data(data)?;
    let content = serde_yaml::to_string(data)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ModelResult<ModelData> {
    let content = std::fs::read_to_string(path)?;
    let data: ModelData = serde_json::from_str(&content)?;
    validate_model_data(&data)?;
    Ok(data)
}

pub fn save_json(path: &Path, data: &ModelData) -> ModelResult<()> {
    validate_model_data(data)?;
    let content = serde_json::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a model file, choosing the format from the extension.
pub fn load_model(path: &Path) -> ModelResult<Model> {
    let data = match extension(path).as_deref() {
        Some("yaml" | "yml") => load_yaml(path)?,
        Some("json") => load_json(path)?,
        _ => {
            return Err(ModelError::UnsupportedFormat {
                path: path.display().to_string(),
            });
        }
    };
    Model::from_data(data)
}

/// Save a model file, choosing the format from the extension.
pub fn save_model(path: &Path, model: &Model) -> ModelResult<()> {
    let data = model.to_data();
    match extension(path).as_deref() {
        Some("yaml" | "yml") => save_yaml(path, &data),
        Some("json") => save_json(path, &data),
        _ => Err(ModelError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
