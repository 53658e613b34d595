//! The model: id-keyed registries of nodes, elements, materials and sections.

use std::collections::HashMap;

use pf_core::{DirtyFlag, ElementId, MaterialId, NodeId, SectionId, Tolerances, check_entity_id};

use crate::data::{LATEST_VERSION, ModelData};
use crate::element::{Element, ElementData, StiffnessInputs};
use crate::error::{ModelError, ModelResult};
use crate::material::{Material, MaterialData};
use crate::node::Node;
use crate::section::{Section, SectionData};
use crate::validate::validate_model_data;

/// Read-only lookup context that elements resolve their references through.
///
/// Borrowing the registries separately lets the model recompute one of its
/// own elements while the other registries are shared.
#[derive(Debug, Clone, Copy)]
pub struct ModelContext<'a> {
    nodes: &'a HashMap<NodeId, Node>,
    materials: &'a HashMap<MaterialId, Material>,
    sections: &'a HashMap<SectionId, Section>,
    stiffness_defaults: StiffnessInputs,
}

impl<'a> ModelContext<'a> {
    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.nodes.get(id)
    }

    pub fn material(&self, id: &str) -> Option<&'a Material> {
        self.materials.get(id)
    }

    pub fn section(&self, id: &str) -> Option<&'a Section> {
        self.sections.get(id)
    }

    pub fn stiffness_defaults(&self) -> StiffnessInputs {
        self.stiffness_defaults
    }
}

/// Owner of every entity in a frame model.
///
/// Structural edits (insert/remove) and material/section setters mark the
/// model-wide dirty flag; node moves only mark the node itself.
#[derive(Debug, Default)]
pub struct Model {
    nodes: HashMap<NodeId, Node>,
    elements: HashMap<ElementId, Element>,
    materials: HashMap<MaterialId, Material>,
    sections: HashMap<SectionId, Section>,
    stiffness_defaults: StiffnessInputs,
    dirty: DirtyFlag,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stiffness_defaults(mut self, defaults: StiffnessInputs) -> Self {
        self.stiffness_defaults = defaults;
        self
    }

    pub fn context(&self) -> ModelContext<'_> {
        ModelContext {
            nodes: &self.nodes,
            materials: &self.materials,
            sections: &self.sections,
            stiffness_defaults: self.stiffness_defaults,
        }
    }

    pub fn stiffness_defaults(&self) -> StiffnessInputs {
        self.stiffness_defaults
    }

    // ---- lookup ----

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.get_mut(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn materials(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    // ---- insertion ----

    pub fn add_node(&mut self, node: Node) -> ModelResult<NodeId> {
        check_entity_id(node.id())?;
        if self.nodes.contains_key(node.id()) {
            return Err(ModelError::DuplicateId {
                what: "node",
                id: node.id().to_string(),
            });
        }
        let id = node.id().to_string();
        self.nodes.insert(id.clone(), node);
        self.dirty.mark();
        Ok(id)
    }

    pub fn add_material(&mut self, data: MaterialData) -> ModelResult<MaterialId> {
        check_entity_id(&data.id)?;
        if self.materials.contains_key(&data.id) {
            return Err(ModelError::DuplicateId {
                what: "material",
                id: data.id,
            });
        }
        let id = data.id.clone();
        self.materials
            .insert(id.clone(), Material::new(self.dirty.clone(), data));
        self.dirty.mark();
        Ok(id)
    }

    pub fn add_section(&mut self, data: SectionData) -> ModelResult<SectionId> {
        check_entity_id(&data.id)?;
        if self.sections.contains_key(&data.id) {
            return Err(ModelError::DuplicateId {
                what: "section",
                id: data.id,
            });
        }
        let id = data.id.clone();
        self.sections
            .insert(id.clone(), Section::new(self.dirty.clone(), data));
        self.dirty.mark();
        Ok(id)
    }

    /// Insert an element; its cache is derived immediately, so both
    /// endpoints (and any named material/section) must already exist.
    pub fn add_element(&mut self, data: ElementData) -> ModelResult<ElementId> {
        check_entity_id(&data.id)?;
        if self.elements.contains_key(&data.id) {
            return Err(ModelError::DuplicateId {
                what: "element",
                id: data.id,
            });
        }
        let element = Element::new(&self.context(), data)?;
        let id = element.id().to_string();
        self.elements.insert(id.clone(), element);
        self.dirty.mark();
        Ok(id)
    }

    // ---- removal ----

    /// Ids of elements with `node_id` as an endpoint, sorted.
    pub fn elements_referencing_node(&self, node_id: &str) -> Vec<ElementId> {
        self.sorted_element_ids(|e| e.references_node(node_id))
    }

    /// Remove a node. Rejected while any element still references it.
    pub fn remove_node(&mut self, id: &str) -> ModelResult<Node> {
        if !self.nodes.contains_key(id) {
            return Err(not_found("Node", id));
        }
        let referencing = self.elements_referencing_node(id);
        if !referencing.is_empty() {
            return Err(ModelError::InUse {
                what: "Node",
                id: id.to_string(),
                elements: referencing,
            });
        }
        let node = self.nodes.remove(id).ok_or_else(|| not_found("Node", id))?;
        self.dirty.mark();
        Ok(node)
    }

    pub fn remove_element(&mut self, id: &str) -> ModelResult<Element> {
        let element = self
            .elements
            .remove(id)
            .ok_or_else(|| not_found("Element", id))?;
        self.dirty.mark();
        Ok(element)
    }

    /// Remove a material. Rejected while any element names it.
    pub fn remove_material(&mut self, id: &str) -> ModelResult<MaterialData> {
        if !self.materials.contains_key(id) {
            return Err(not_found("Material", id));
        }
        let referencing = self.sorted_element_ids(|e| e.material_id() == Some(id));
        if !referencing.is_empty() {
            return Err(ModelError::InUse {
                what: "Material",
                id: id.to_string(),
                elements: referencing,
            });
        }
        let material = self
            .materials
            .remove(id)
            .ok_or_else(|| not_found("Material", id))?;
        self.dirty.mark();
        Ok(material.to_data())
    }

    /// Remove a section. Rejected while any element names it.
    pub fn remove_section(&mut self, id: &str) -> ModelResult<SectionData> {
        if !self.sections.contains_key(id) {
            return Err(not_found("Section", id));
        }
        let referencing = self.sorted_element_ids(|e| e.section_id() == Some(id));
        if !referencing.is_empty() {
            return Err(ModelError::InUse {
                what: "Section",
                id: id.to_string(),
                elements: referencing,
            });
        }
        let section = self
            .sections
            .remove(id)
            .ok_or_else(|| not_found("Section", id))?;
        self.dirty.mark();
        Ok(section.to_data())
    }

    fn sorted_element_ids(&self, pred: impl Fn(&Element) -> bool) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self
            .elements
            .values()
            .filter(|&e| pred(e))
            .map(|e| e.id().to_string())
            .collect();
        ids.sort();
        ids
    }

    // ---- derived state ----

    pub fn recompute_element(&mut self, id: &str) -> ModelResult<()> {
        let ctx = ModelContext {
            nodes: &self.nodes,
            materials: &self.materials,
            sections: &self.sections,
            stiffness_defaults: self.stiffness_defaults,
        };
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| not_found("Element", id))?;
        element.recompute(&ctx)
    }

    /// Recompute every element whose composed dirty flag is set, or every
    /// element when the model-wide flag is set (a material or section may
    /// have changed under them).
    ///
    /// Returns the recomputed ids, sorted. Node and model flags are left as
    /// they are.
    pub fn recompute_dirty(&mut self) -> ModelResult<Vec<ElementId>> {
        let ctx = ModelContext {
            nodes: &self.nodes,
            materials: &self.materials,
            sections: &self.sections,
            stiffness_defaults: self.stiffness_defaults,
        };
        let all = self.dirty.is_set();
        let mut recomputed = Vec::new();
        for element in self.elements.values_mut() {
            if all || element.is_dirty(&ctx) {
                element.recompute(&ctx)?;
                recomputed.push(element.id().to_string());
            }
        }
        recomputed.sort();
        Ok(recomputed)
    }

    /// Composed dirty state of one element, or `None` if it does not exist.
    pub fn element_dirty(&self, id: &str) -> Option<bool> {
        let ctx = self.context();
        self.elements.get(id).map(|e| e.is_dirty(&ctx))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.is_set()
    }

    pub fn mark_dirty(&self) {
        self.dirty.mark();
    }

    /// Clear the model-wide flag only.
    pub fn acknowledge_clean(&self) {
        self.dirty.clear();
    }

    /// Elements whose cached length is zero within `tol`, sorted by id.
    pub fn degenerate_elements(&self, tol: Tolerances) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self
            .elements
            .values()
            .filter(|e| e.is_degenerate(tol))
            .map(|e| e.id().to_string())
            .collect();
        ids.sort();
        ids
    }

    /// Clear the model flag plus every node and element flag.
    pub fn acknowledge_all_clean(&mut self) {
        for node in self.nodes.values_mut() {
            node.acknowledge_clean();
        }
        for element in self.elements.values_mut() {
            element.acknowledge_clean();
        }
        self.dirty.clear();
    }

    // ---- records ----

    /// Build a model from a validated record. The new model starts clean.
    pub fn from_data(data: ModelData) -> ModelResult<Self> {
        validate_model_data(&data)?;

        let mut model = Model::new().with_stiffness_defaults(data.stiffness_defaults);
        for node in data.nodes {
            model.add_node(Node::from_data(node))?;
        }
        for material in data.materials {
            model.add_material(material)?;
        }
        for section in data.sections {
            model.add_section(section)?;
        }
        for element in data.elements {
            model.add_element(element)?;
        }
        model.acknowledge_all_clean();
        Ok(model)
    }

    /// Snapshot as a record; every list is sorted by id.
    pub fn to_data(&self) -> ModelData {
        let mut nodes: Vec<_> = self.nodes.values().map(Node::to_data).collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        let mut elements: Vec<_> = self.elements.values().map(Element::to_data).collect();
        elements.sort_by(|a, b| a.id.cmp(&b.id));
        let mut materials: Vec<_> = self.materials.values().map(Material::to_data).collect();
        materials.sort_by(|a, b| a.id.cmp(&b.id));
        let mut sections: Vec<_> = self.sections.values().map(Section::to_data).collect();
        sections.sort_by(|a, b| a.id.cmp(&b.id));

        ModelData {
            version: LATEST_VERSION,
            stiffness_defaults: self.stiffness_defaults,
            nodes,
            elements,
            materials,
            sections,
        }
    }
}

fn not_found(what: &'static str, id: &str) -> ModelError {
    ModelError::NotFound {
        what,
        id: id.to_string(),
    }
}
