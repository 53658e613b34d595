//! Two-node planar frame elements.
//!
//! DOFs per node: 3 (axial, transverse, rotation)
//! Element DOFs: [u1, w1, θ1, u2, w2, θ2]

use nalgebra::Matrix6;
use pf_core::{ElementId, MaterialId, NodeId, Real, SectionId, Tolerances, nearly_equal};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::model::ModelContext;

/// Serialized element record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub id: ElementId,
    /// Ordered endpoints; the local x-axis runs from the first to the second.
    pub node_ids: [NodeId; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<MaterialId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<SectionId>,
}

/// Inputs to the local stiffness derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StiffnessInputs {
    /// Young's modulus
    #[serde(rename = "E")]
    pub e: Real,
    /// Cross-sectional area
    #[serde(rename = "A")]
    pub area: Real,
    /// Moment of inertia about the bending axis
    #[serde(rename = "I")]
    pub inertia: Real,
}

impl Default for StiffnessInputs {
    fn default() -> Self {
        Self {
            e: 210e9,
            area: 0.01,
            inertia: 8.333e-6,
        }
    }
}

/// Rotation from local element DOFs into the global plane.
///
/// Each node gets a `[[c, s], [-s, c]]` block on its translational DOFs;
/// the rotational DOFs are left as identity.
pub fn transformation_matrix(cosine: Real, sine: Real) -> Matrix6<Real> {
    let (c, s) = (cosine, sine);
    Matrix6::from_row_slice(&[
        c, s, 0.0, 0.0, 0.0, 0.0, // row 0
        -s, c, 0.0, 0.0, 0.0, 0.0, // row 1
        0.0, 0.0, 1.0, 0.0, 0.0, 0.0, // row 2
        0.0, 0.0, 0.0, c, s, 0.0, // row 3
        0.0, 0.0, 0.0, -s, c, 0.0, // row 4
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, // row 5
    ])
}

/// Euler-Bernoulli frame element stiffness in local coordinates.
///
/// A zero length yields infinite/NaN entries rather than an error.
pub fn local_stiffness(inputs: StiffnessInputs, length: Real) -> Matrix6<Real> {
    let StiffnessInputs { e, area, inertia } = inputs;
    let l = length;
    let ei = e * inertia;

    let k = e * area / l;
    let k11 = 12.0 * ei / (l * l * l);
    let k12 = 6.0 * ei / (l * l);
    let k22 = 4.0 * ei / l;
    let k23 = 2.0 * ei / l;

    Matrix6::from_row_slice(&[
        k, 0.0, 0.0, -k, 0.0, 0.0, // row 0
        0.0, k11, k12, 0.0, -k11, k12, // row 1
        0.0, k12, k22, 0.0, -k12, k23, // row 2
        -k, 0.0, 0.0, k, 0.0, 0.0, // row 3
        0.0, -k11, -k12, 0.0, k11, -k12, // row 4
        0.0, k12, k23, 0.0, -k12, k22, // row 5
    ])
}

/// Derived quantities, valid as of the last recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementCache {
    pub length: Real,
    pub cosine: Real,
    pub sine: Real,
    pub inputs: StiffnessInputs,
    pub transform: Matrix6<Real>,
    pub local_stiffness: Matrix6<Real>,
}

impl ElementCache {
    fn derive(ctx: &ModelContext<'_>, data: &ElementData) -> ModelResult<Self> {
        let [a, b] = &data.node_ids;
        let (node_a, node_b) = match (ctx.node(a), ctx.node(b)) {
            (Some(node_a), Some(node_b)) => (node_a, node_b),
            _ => {
                return Err(ModelError::MissingNode {
                    a: a.clone(),
                    b: b.clone(),
                });
            }
        };

        let delta = node_a.position().delta_to(node_b.position());
        let length = delta.x.hypot(delta.z);
        // 0/0 for coincident endpoints is kept as NaN
        let cosine = delta.x / length;
        let sine = delta.z / length;

        let inputs = resolve_inputs(ctx, data)?;

        Ok(Self {
            length,
            cosine,
            sine,
            inputs,
            transform: transformation_matrix(cosine, sine),
            local_stiffness: local_stiffness(inputs, length),
        })
    }
}

fn resolve_inputs(ctx: &ModelContext<'_>, data: &ElementData) -> ModelResult<StiffnessInputs> {
    let mut inputs = ctx.stiffness_defaults();
    if let Some(id) = &data.material_id {
        let material = ctx.material(id).ok_or_else(|| ModelError::NotFound {
            what: "Material",
            id: id.clone(),
        })?;
        inputs.e = material.e();
    }
    if let Some(id) = &data.section_id {
        let section = ctx.section(id).ok_or_else(|| ModelError::NotFound {
            what: "Section",
            id: id.clone(),
        })?;
        inputs.area = section.area();
        inputs.inertia = section.iz();
    }
    Ok(inputs)
}

/// A frame element between two nodes of a model.
///
/// The element stores node ids only and looks the nodes up again on every
/// recompute. Its cache is not refreshed when a node moves; call
/// [`Element::recompute`] (or `Model::recompute_element`) explicitly.
#[derive(Debug, Clone)]
pub struct Element {
    data: ElementData,
    cache: ElementCache,
    dirty: bool,
}

impl Element {
    /// Build an element and perform the initial recompute.
    pub fn new(ctx: &ModelContext<'_>, data: ElementData) -> ModelResult<Self> {
        let cache = ElementCache::derive(ctx, &data)?;
        Ok(Self {
            data,
            cache,
            dirty: false,
        })
    }

    /// Re-resolve both endpoints and refresh every derived quantity.
    ///
    /// Clears the element's own flag only; [`Element::is_dirty`] stays true
    /// while an endpoint node is still dirty. On error the previous cache
    /// and flag are kept.
    pub fn recompute(&mut self, ctx: &ModelContext<'_>) -> ModelResult<()> {
        self.cache = ElementCache::derive(ctx, &self.data)?;
        self.dirty = false;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn node_ids(&self) -> &[NodeId; 2] {
        &self.data.node_ids
    }

    pub fn material_id(&self) -> Option<&str> {
        self.data.material_id.as_deref()
    }

    pub fn section_id(&self) -> Option<&str> {
        self.data.section_id.as_deref()
    }

    /// True if this element touches `node_id` at either end.
    pub fn references_node(&self, node_id: &str) -> bool {
        self.data.node_ids.iter().any(|id| id == node_id)
    }

    pub fn length(&self) -> Real {
        self.cache.length
    }

    pub fn cosine(&self) -> Real {
        self.cache.cosine
    }

    pub fn sine(&self) -> Real {
        self.cache.sine
    }

    /// Endpoints coincide within `tol`, so the cosines and stiffness are
    /// not finite.
    pub fn is_degenerate(&self, tol: Tolerances) -> bool {
        nearly_equal(self.cache.length, 0.0, tol)
    }

    pub fn transform(&self) -> &Matrix6<Real> {
        &self.cache.transform
    }

    pub fn local_stiffness(&self) -> &Matrix6<Real> {
        &self.cache.local_stiffness
    }

    pub fn cache(&self) -> &ElementCache {
        &self.cache
    }

    /// Stiffness rotated into the global plane: `Tᵀ·K·T`.
    pub fn global_stiffness(&self) -> Matrix6<Real> {
        self.cache.transform.transpose() * self.cache.local_stiffness * self.cache.transform
    }

    /// Own flag OR either endpoint's flag, evaluated now.
    ///
    /// An endpoint that no longer resolves counts as dirty.
    pub fn is_dirty(&self, ctx: &ModelContext<'_>) -> bool {
        self.dirty
            || self
                .data
                .node_ids
                .iter()
                .any(|id| ctx.node(id).is_none_or(|node| node.is_dirty()))
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the element's own flag. Endpoint nodes are untouched.
    pub fn acknowledge_clean(&mut self) {
        self.dirty = false;
    }

    pub fn to_data(&self) -> ElementData {
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Real, expected: Real) {
        assert!(
            nearly_equal(actual, expected, Tolerances::default()),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn transformation_is_orthogonal() {
        let t = transformation_matrix(0.6, 0.8);
        let product = t.transpose() * t;
        for i in 0..6 {
            for j in 0..6 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_close(product[(i, j)], expected);
            }
        }
        assert_eq!(t[(2, 2)], 1.0);
        assert_eq!(t[(1, 0)], -0.8);
    }

    #[test]
    fn local_stiffness_reference_values() {
        let k = local_stiffness(StiffnessInputs::default(), 5.0);
        assert_close(k[(0, 0)], 420_000_000.0);
        assert_close(k[(0, 3)], -420_000_000.0);
        assert_close(k[(1, 1)], 167_993.28);
        assert_close(k[(1, 2)], 419_983.2);
        assert_close(k[(2, 2)], 1_399_944.0);
        assert_close(k[(2, 5)], 699_972.0);
        assert_close(k[(3, 3)], 420_000_000.0);
        assert_close(k[(4, 4)], 167_993.28);
        assert_close(k[(4, 5)], -419_983.2);
        assert_close(k[(5, 5)], 1_399_944.0);
    }

    #[test]
    fn local_stiffness_is_symmetric() {
        let k = local_stiffness(StiffnessInputs::default(), 2.5);
        assert_eq!(k, k.transpose());
    }

    #[test]
    fn zero_length_produces_non_finite_entries() {
        let k = local_stiffness(StiffnessInputs::default(), 0.0);
        assert!(k[(0, 0)].is_infinite());
        assert!(k[(1, 1)].is_infinite());
    }
}
