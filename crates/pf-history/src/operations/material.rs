use pf_core::{MaterialId, Real};
use pf_model::{MaterialProperty, Model};

use super::{missing, not_applied};
use crate::operation::{Operation, OperationKind};

/// Change one material constant. Marks the model dirty both ways.
#[derive(Debug, Clone)]
pub struct SetMaterialProperty {
    material_id: MaterialId,
    property: MaterialProperty,
    value: Real,
    previous: Option<Real>,
}

impl SetMaterialProperty {
    pub fn new(material_id: impl Into<MaterialId>, property: MaterialProperty, value: Real) -> Self {
        Self {
            material_id: material_id.into(),
            property,
            value,
            previous: None,
        }
    }
}

impl Operation for SetMaterialProperty {
    fn kind(&self) -> OperationKind {
        OperationKind::SetMaterialProperty
    }

    fn apply(&mut self, model: &mut Model) -> bool {
        let Some(material) = model.material_mut(&self.material_id) else {
            return missing(self.kind(), "material", &self.material_id);
        };
        self.previous = Some(material.set(self.property, self.value));
        true
    }

    fn revert(&mut self, model: &mut Model) -> bool {
        let Some(previous) = self.previous else {
            return not_applied(self.kind());
        };
        let Some(material) = model.material_mut(&self.material_id) else {
            return missing(self.kind(), "material", &self.material_id);
        };
        material.set(self.property, previous);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_model::MaterialData;

    #[test]
    fn set_and_restore_density() {
        let mut model = Model::new();
        model
            .add_material(MaterialData {
                id: "steel".into(),
                e: 210e9,
                g: 81e9,
                alpha: 1.2e-5,
                density: 7850.0,
            })
            .unwrap();
        model.acknowledge_clean();

        let mut op = SetMaterialProperty::new("steel", MaterialProperty::Density, 7800.0);
        assert!(op.apply(&mut model));
        assert!(model.is_dirty());
        assert_eq!(model.material("steel").unwrap().density(), 7800.0);

        model.acknowledge_clean();
        assert!(op.revert(&mut model));
        assert!(model.is_dirty());
        assert_eq!(model.material("steel").unwrap().density(), 7850.0);
    }
}
