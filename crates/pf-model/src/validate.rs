//! Model record validation logic.

use std::collections::HashSet;

use crate::data::{LATEST_VERSION, ModelData};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_model_data(data: &ModelData) -> Result<(), ValidationError> {
    if data.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: data.version,
        });
    }

    let node_ids = unique_ids(data.nodes.iter().map(|n| &n.id), "nodes")?;
    let material_ids = unique_ids(data.materials.iter().map(|m| &m.id), "materials")?;
    let section_ids = unique_ids(data.sections.iter().map(|s| &s.id), "sections")?;
    unique_ids(data.elements.iter().map(|e| &e.id), "elements")?;

    for element in &data.elements {
        for node_id in &element.node_ids {
            if !node_ids.contains(node_id) {
                return Err(ValidationError::MissingReference {
                    id: node_id.clone(),
                    context: format!("element {} node_ids", element.id),
                });
            }
        }
        if let Some(material_id) = &element.material_id {
            if !material_ids.contains(material_id) {
                return Err(ValidationError::MissingReference {
                    id: material_id.clone(),
                    context: format!("element {} material_id", element.id),
                });
            }
        }
        if let Some(section_id) = &element.section_id {
            if !section_ids.contains(section_id) {
                return Err(ValidationError::MissingReference {
                    id: section_id.clone(),
                    context: format!("element {} section_id", element.id),
                });
            }
        }
    }

    Ok(())
}

fn unique_ids<'a, I>(ids: I, context: &str) -> Result<HashSet<&'a String>, ValidationError>
where
    I: Iterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId {
                id: id.clone(),
                context: context.to_string(),
            });
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementData;
    use crate::node::NodeData;
    use pf_core::Vec2Plane;

    fn node(id: &str) -> NodeData {
        NodeData {
            id: id.to_string(),
            coords: Vec2Plane::default(),
            name: None,
            displacement: None,
            prescribed: None,
        }
    }

    #[test]
    fn detects_duplicate_nodes() {
        let data = ModelData {
            nodes: vec![node("n1"), node("n1")],
            ..ModelData::default()
        };
        assert!(matches!(
            validate_model_data(&data),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn detects_dangling_element_reference() {
        let data = ModelData {
            nodes: vec![node("n1")],
            elements: vec![ElementData {
                id: "e1".into(),
                node_ids: ["n1".into(), "n2".into()],
                material_id: None,
                section_id: None,
            }],
            ..ModelData::default()
        };
        let err = validate_model_data(&data).unwrap_err();
        assert!(err.to_string().contains("n2"));
    }

    #[test]
    fn rejects_future_version() {
        let data = ModelData {
            version: LATEST_VERSION + 1,
            ..ModelData::default()
        };
        assert!(matches!(
            validate_model_data(&data),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
