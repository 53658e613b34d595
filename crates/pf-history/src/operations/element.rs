use pf_core::ElementId;
use pf_model::{ElementData, Model};

use super::{not_applied, succeeded};
use crate::operation::{Operation, OperationKind};

/// Insert an element; its cache is derived on apply.
#[derive(Debug, Clone)]
pub struct AddElement {
    data: ElementData,
}

impl AddElement {
    pub fn new(data: ElementData) -> Self {
        Self { data }
    }
}

impl Operation for AddElement {
    fn kind(&self) -> OperationKind {
        OperationKind::AddElement
    }

    fn apply(&mut self, model: &mut Model) -> bool {
        succeeded(self.kind(), model.add_element(self.data.clone())).is_some()
    }

    fn revert(&mut self, model: &mut Model) -> bool {
        succeeded(self.kind(), model.remove_element(&self.data.id)).is_some()
    }
}

/// Remove an element; reverting re-inserts it from its record, which
/// recomputes the cache against the current node positions.
#[derive(Debug, Clone)]
pub struct RemoveElement {
    element_id: ElementId,
    removed: Option<ElementData>,
}

impl RemoveElement {
    pub fn new(element_id: impl Into<ElementId>) -> Self {
        Self {
            element_id: element_id.into(),
            removed: None,
        }
    }
}

impl Operation for RemoveElement {
    fn kind(&self) -> OperationKind {
        OperationKind::RemoveElement
    }

    fn apply(&mut self, model: &mut Model) -> bool {
        match succeeded(self.kind(), model.remove_element(&self.element_id)) {
            Some(element) => {
                self.removed = Some(element.to_data());
                true
            }
            None => false,
        }
    }

    fn revert(&mut self, model: &mut Model) -> bool {
        let Some(data) = self.removed.clone() else {
            return not_applied(self.kind());
        };
        succeeded(self.kind(), model.add_element(data)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::Vec2Plane;
    use pf_model::Node;

    fn model() -> Model {
        let mut model = Model::new();
        model
            .add_node(Node::new(Vec2Plane::new(0.0, 0.0)).with_id("a"))
            .unwrap();
        model
            .add_node(Node::new(Vec2Plane::new(0.0, 2.0)).with_id("b"))
            .unwrap();
        model
    }

    fn data() -> ElementData {
        ElementData {
            id: "e".into(),
            node_ids: ["a".into(), "b".into()],
            material_id: None,
            section_id: None,
        }
    }

    #[test]
    fn add_then_revert() {
        let mut model = model();
        let mut op = AddElement::new(data());
        assert!(op.apply(&mut model));
        assert_eq!(model.element("e").unwrap().length(), 2.0);
        assert!(op.revert(&mut model));
        assert!(model.element("e").is_none());
    }

    #[test]
    fn add_with_missing_node_fails() {
        let mut model = model();
        let mut op = AddElement::new(ElementData {
            node_ids: ["a".into(), "zz".into()],
            ..data()
        });
        assert!(!op.apply(&mut model));
        assert!(model.element("e").is_none());
    }

    #[test]
    fn remove_then_revert_rederives_cache() {
        let mut model = model();
        model.add_element(data()).unwrap();
        let mut op = RemoveElement::new("e");
        assert!(op.apply(&mut model));
        model
            .node_mut("b")
            .unwrap()
            .set_position(Vec2Plane::new(0.0, 3.0));
        assert!(op.revert(&mut model));
        assert_eq!(model.element("e").unwrap().length(), 3.0);
    }
}
