//! Material constants.

use std::fmt;

use pf_core::{DirtyFlag, MaterialId, Real};
use serde::{Deserialize, Serialize};

/// Serialized material record. All keys are always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialData {
    pub id: MaterialId,
    /// Young's modulus
    #[serde(rename = "E")]
    pub e: Real,
    /// Shear modulus
    #[serde(rename = "G")]
    pub g: Real,
    /// Coefficient of thermal expansion
    pub alpha: Real,
    pub density: Real,
}

/// Selects one of the four material constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialProperty {
    E,
    G,
    #[serde(rename = "alpha")]
    Alpha,
    #[serde(rename = "density")]
    Density,
}

impl fmt::Display for MaterialProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaterialProperty::E => "E",
            MaterialProperty::G => "G",
            MaterialProperty::Alpha => "alpha",
            MaterialProperty::Density => "density",
        };
        f.write_str(name)
    }
}

/// A named bag of physical constants owned by a model.
///
/// Every setter also marks the owning model dirty through the shared flag.
/// Values are not checked for physical plausibility.
#[derive(Debug, Clone)]
pub struct Material {
    id: MaterialId,
    e: Real,
    g: Real,
    alpha: Real,
    density: Real,
    model_dirty: DirtyFlag,
}

impl Material {
    pub fn new(model_dirty: DirtyFlag, data: MaterialData) -> Self {
        Self {
            id: data.id,
            e: data.e,
            g: data.g,
            alpha: data.alpha,
            density: data.density,
            model_dirty,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn e(&self) -> Real {
        self.e
    }

    pub fn set_e(&mut self, value: Real) {
        self.e = value;
        self.model_dirty.mark();
    }

    pub fn g(&self) -> Real {
        self.g
    }

    pub fn set_g(&mut self, value: Real) {
        self.g = value;
        self.model_dirty.mark();
    }

    pub fn alpha(&self) -> Real {
        self.alpha
    }

    pub fn set_alpha(&mut self, value: Real) {
        self.alpha = value;
        self.model_dirty.mark();
    }

    pub fn density(&self) -> Real {
        self.density
    }

    pub fn set_density(&mut self, value: Real) {
        self.density = value;
        self.model_dirty.mark();
    }

    pub fn get(&self, property: MaterialProperty) -> Real {
        match property {
            MaterialProperty::E => self.e(),
            MaterialProperty::G => self.g(),
            MaterialProperty::Alpha => self.alpha(),
            MaterialProperty::Density => self.density(),
        }
    }

    /// Set one constant, returning the previous value.
    pub fn set(&mut self, property: MaterialProperty, value: Real) -> Real {
        let previous = self.get(property);
        match property {
            MaterialProperty::E => self.set_e(value),
            MaterialProperty::G => self.set_g(value),
            MaterialProperty::Alpha => self.set_alpha(value),
            MaterialProperty::Density => self.set_density(value),
        }
        previous
    }

    pub fn to_data(&self) -> MaterialData {
        MaterialData {
            id: self.id.clone(),
            e: self.e,
            g: self.g,
            alpha: self.alpha,
            density: self.density,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel() -> MaterialData {
        MaterialData {
            id: "steel".to_string(),
            e: 210e9,
            g: 81e9,
            alpha: 1.2e-5,
            density: 7850.0,
        }
    }

    #[test]
    fn every_setter_marks_model_dirty() {
        let setters: [fn(&mut Material); 4] = [
            |m: &mut Material| m.set_e(200e9),
            |m: &mut Material| m.set_g(80e9),
            |m: &mut Material| m.set_alpha(1.0e-5),
            |m: &mut Material| m.set_density(7800.0),
        ];
        for setter in setters {
            let flag = DirtyFlag::new();
            let mut material = Material::new(flag.clone(), steel());
            assert!(!flag.is_set());
            setter(&mut material);
            assert!(flag.is_set());
        }
    }

    #[test]
    fn negative_modulus_is_accepted() {
        let mut material = Material::new(DirtyFlag::new(), steel());
        material.set_e(-1.0);
        assert_eq!(material.e(), -1.0);
    }

    #[test]
    fn set_by_property_returns_previous() {
        let mut material = Material::new(DirtyFlag::new(), steel());
        let previous = material.set(MaterialProperty::Density, 2700.0);
        assert_eq!(previous, 7850.0);
        assert_eq!(material.get(MaterialProperty::Density), 2700.0);
    }

    #[test]
    fn serializes_all_keys() {
        let material = Material::new(DirtyFlag::new(), steel());
        let json = serde_json::to_value(material.to_data()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["id", "E", "G", "alpha", "density"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 5);
    }
}
