//! Cross-section properties.

use pf_core::{DirtyFlag, Real, SectionId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionData {
    pub id: SectionId,
    /// Cross-sectional area
    pub area: Real,
    /// Moment of inertia about the local y-axis
    #[serde(rename = "Iy")]
    pub iy: Real,
    /// Moment of inertia about the local z-axis
    #[serde(rename = "Iz")]
    pub iz: Real,
}

/// Cross-section owned by a model. Setters mark the model dirty.
#[derive(Debug, Clone)]
pub struct Section {
    id: SectionId,
    area: Real,
    iy: Real,
    iz: Real,
    model_dirty: DirtyFlag,
}

impl Section {
    pub fn new(model_dirty: DirtyFlag, data: SectionData) -> Self {
        Self {
            id: data.id,
            area: data.area,
            iy: data.iy,
            iz: data.iz,
            model_dirty,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn area(&self) -> Real {
        self.area
    }

    pub fn set_area(&mut self, value: Real) {
        self.area = value;
        self.model_dirty.mark();
    }

    pub fn iy(&self) -> Real {
        self.iy
    }

    pub fn set_iy(&mut self, value: Real) {
        self.iy = value;
        self.model_dirty.mark();
    }

    pub fn iz(&self) -> Real {
        self.iz
    }

    pub fn set_iz(&mut self, value: Real) {
        self.iz = value;
        self.model_dirty.mark();
    }

    pub fn to_data(&self) -> SectionData {
        SectionData {
            id: self.id.clone(),
            area: self.area,
            iy: self.iy,
            iz: self.iz,
        }
    }
}
