//! Element derivation and dirty-composition tests.

use pf_core::{Tolerances, Vec2Plane, nearly_equal};
use pf_model::{ElementData, MaterialData, Model, ModelError, Node, SectionData};
use proptest::prelude::*;

fn element(id: &str, a: &str, b: &str) -> ElementData {
    ElementData {
        id: id.to_string(),
        node_ids: [a.to_string(), b.to_string()],
        material_id: None,
        section_id: None,
    }
}

/// N1 (0,0) -> [E1] -> N2 (3,4), plus an unused N3 (-1,-1).
fn triangle_model() -> Model {
    let mut model = Model::new();
    model
        .add_node(Node::new(Vec2Plane::new(0.0, 0.0)).with_id("n1"))
        .unwrap();
    model
        .add_node(Node::new(Vec2Plane::new(3.0, 4.0)).with_id("n2"))
        .unwrap();
    model
        .add_node(Node::new(Vec2Plane::new(-1.0, -1.0)).with_id("n3"))
        .unwrap();
    model.add_element(element("e1", "n1", "n2")).unwrap();
    model.acknowledge_all_clean();
    model
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        nearly_equal(actual, expected, Tolerances::default()),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn three_four_five_geometry() {
    let model = triangle_model();
    let e1 = model.element("e1").unwrap();
    assert_eq!(e1.length(), 5.0);
    assert_close(e1.cosine(), 0.6);
    assert_close(e1.sine(), 0.8);

    let t = e1.transform();
    assert_close(t[(0, 0)], 0.6);
    assert_close(t[(0, 1)], 0.8);
    assert_close(t[(1, 0)], -0.8);
    assert_close(t[(4, 4)], 0.6);
    assert_eq!(t[(5, 5)], 1.0);
}

#[test]
fn three_four_five_stiffness() {
    let model = triangle_model();
    let k = model.element("e1").unwrap().local_stiffness();
    assert_close(k[(0, 0)], 420_000_000.0);
    assert_close(k[(0, 3)], -420_000_000.0);
    assert_close(k[(1, 1)], 167_993.28);
    assert_close(k[(1, 2)], 419_983.2);
    assert_close(k[(2, 2)], 1_399_944.0);
    assert_close(k[(3, 3)], 420_000_000.0);
    assert_close(k[(4, 4)], 167_993.28);
    assert_close(k[(5, 5)], 1_399_944.0);
}

#[test]
fn reversed_node_order_flips_direction() {
    let mut model = triangle_model();
    model.add_element(element("e2", "n2", "n1")).unwrap();
    let e2 = model.element("e2").unwrap();
    assert_eq!(e2.length(), 5.0);
    assert_close(e2.cosine(), -0.6);
    assert_close(e2.sine(), -0.8);
}

#[test]
fn zero_length_element_yields_nan_cosines() {
    let mut model = triangle_model();
    model
        .add_node(Node::new(Vec2Plane::new(3.0, 4.0)).with_id("n2b"))
        .unwrap();
    model.add_element(element("e0", "n2", "n2b")).unwrap();

    let e0 = model.element("e0").unwrap();
    assert_eq!(e0.length(), 0.0);
    assert!(e0.cosine().is_nan());
    assert!(e0.sine().is_nan());
    assert!(!e0.local_stiffness()[(0, 0)].is_finite());
    assert!(e0.is_degenerate(Tolerances::default()));
    assert!(!model.element("e1").unwrap().is_degenerate(Tolerances::default()));
    assert_eq!(model.degenerate_elements(Tolerances::default()), vec!["e0".to_string()]);
}

#[test]
fn missing_node_error_names_both_ids() {
    let mut model = triangle_model();
    let err = model.add_element(element("bad", "n1", "ghost")).unwrap_err();
    assert!(matches!(err, ModelError::MissingNode { .. }));
    assert_eq!(err.to_string(), "Node n1 or ghost does not exist");
    assert!(model.element("bad").is_none());
}

#[test]
fn cache_is_not_refreshed_until_recompute() {
    let mut model = triangle_model();
    model
        .node_mut("n2")
        .unwrap()
        .set_position(Vec2Plane::new(0.0, 2.0));

    assert_eq!(model.element("e1").unwrap().length(), 5.0);
    assert_eq!(model.element_dirty("e1"), Some(true));

    model.recompute_element("e1").unwrap();
    let e1 = model.element("e1").unwrap();
    assert_eq!(e1.length(), 2.0);
    assert_close(e1.cosine(), 0.0);
    assert_close(e1.sine(), 1.0);
}

#[test]
fn element_stays_dirty_while_node_is_dirty() {
    let mut model = triangle_model();
    assert_eq!(model.element_dirty("e1"), Some(false));

    model
        .node_mut("n1")
        .unwrap()
        .set_position(Vec2Plane::new(0.0, 0.0));
    assert_eq!(model.element_dirty("e1"), Some(true));

    model.element_mut("e1").unwrap().acknowledge_clean();
    assert_eq!(model.element_dirty("e1"), Some(true));

    model.recompute_element("e1").unwrap();
    assert_eq!(model.element_dirty("e1"), Some(true));

    model.node_mut("n1").unwrap().acknowledge_clean();
    assert_eq!(model.element_dirty("e1"), Some(false));

    model.element_mut("e1").unwrap().mark_dirty();
    assert_eq!(model.element_dirty("e1"), Some(true));
}

#[test]
fn unrelated_node_does_not_dirty_element() {
    let mut model = triangle_model();
    model
        .node_mut("n3")
        .unwrap()
        .set_position(Vec2Plane::new(9.0, 9.0));
    assert_eq!(model.element_dirty("e1"), Some(false));
}

#[test]
fn material_and_section_feed_stiffness() {
    let mut model = triangle_model();
    model
        .add_material(MaterialData {
            id: "alu".into(),
            e: 70e9,
            g: 26e9,
            alpha: 2.3e-5,
            density: 2700.0,
        })
        .unwrap();
    model
        .add_section(SectionData {
            id: "s1".into(),
            area: 0.02,
            iy: 1e-5,
            iz: 2e-5,
        })
        .unwrap();
    model
        .add_element(ElementData {
            id: "e2".into(),
            node_ids: ["n1".into(), "n2".into()],
            material_id: Some("alu".into()),
            section_id: Some("s1".into()),
        })
        .unwrap();

    let k = model.element("e2").unwrap().local_stiffness();
    assert_close(k[(0, 0)], 70e9 * 0.02 / 5.0);
    assert_close(k[(2, 2)], 4.0 * 70e9 * 2e-5 / 5.0);

    model.material_mut("alu").unwrap().set_e(140e9);
    model.recompute_element("e2").unwrap();
    let k = model.element("e2").unwrap().local_stiffness();
    assert_close(k[(0, 0)], 140e9 * 0.02 / 5.0);
}

#[test]
fn recompute_dirty_picks_up_material_and_section_edits() {
    let mut model = triangle_model();
    model
        .add_material(MaterialData {
            id: "m".into(),
            e: 210e9,
            g: 81e9,
            alpha: 1.2e-5,
            density: 7850.0,
        })
        .unwrap();
    model
        .add_section(SectionData {
            id: "s".into(),
            area: 0.01,
            iy: 8.333e-6,
            iz: 8.333e-6,
        })
        .unwrap();
    model
        .add_element(ElementData {
            id: "e2".into(),
            node_ids: ["n1".into(), "n2".into()],
            material_id: Some("m".into()),
            section_id: Some("s".into()),
        })
        .unwrap();
    model.acknowledge_all_clean();
    assert_close(model.element("e2").unwrap().local_stiffness()[(0, 0)], 420_000_000.0);

    model.material_mut("m").unwrap().set_e(70e9);
    assert!(model.is_dirty());
    assert_eq!(model.element_dirty("e2"), Some(false));

    let recomputed = model.recompute_dirty().unwrap();
    assert_eq!(recomputed, vec!["e1".to_string(), "e2".to_string()]);
    assert_close(model.element("e2").unwrap().local_stiffness()[(0, 0)], 140_000_000.0);

    model.acknowledge_clean();
    model.section_mut("s").unwrap().set_area(0.02);
    model.recompute_dirty().unwrap();
    assert_close(model.element("e2").unwrap().local_stiffness()[(0, 0)], 280_000_000.0);

    model.acknowledge_clean();
    assert!(model.recompute_dirty().unwrap().is_empty());
}

#[test]
fn global_stiffness_of_horizontal_element_matches_local() {
    let mut model = Model::new();
    model
        .add_node(Node::new(Vec2Plane::new(0.0, 0.0)).with_id("a"))
        .unwrap();
    model
        .add_node(Node::new(Vec2Plane::new(4.0, 0.0)).with_id("b"))
        .unwrap();
    model.add_element(element("e", "a", "b")).unwrap();

    let e = model.element("e").unwrap();
    assert_eq!(&e.global_stiffness(), e.local_stiffness());
}

proptest! {
    #[test]
    fn dirty_is_or_of_own_and_endpoints(
        own in any::<bool>(),
        a_dirty in any::<bool>(),
        b_dirty in any::<bool>(),
    ) {
        let mut model = triangle_model();
        if a_dirty {
            model.node_mut("n1").unwrap().set_position(Vec2Plane::new(0.0, 0.0));
        }
        if b_dirty {
            model.node_mut("n2").unwrap().set_position(Vec2Plane::new(3.0, 4.0));
        }
        if own {
            model.element_mut("e1").unwrap().mark_dirty();
        }
        prop_assert_eq!(model.element_dirty("e1"), Some(own || a_dirty || b_dirty));
    }

    #[test]
    fn length_matches_hypot(
        x in -1e3_f64..1e3, z in -1e3_f64..1e3,
    ) {
        let mut model = triangle_model();
        model.node_mut("n2").unwrap().set_position(Vec2Plane::new(x, z));
        model.recompute_element("e1").unwrap();
        prop_assert_eq!(model.element("e1").unwrap().length(), x.hypot(z));
    }
}
