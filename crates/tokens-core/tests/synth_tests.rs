//! Variant matrix synthesis against the in-memory scene

mod common;

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use tokens_core::family::{button, chip};
use tokens_core::{
    AxisRole, ComponentFamily, Error, SizeMetrics, VariantCombination, VariantStyle,
    VariantSynthesizer,
};
use tokens_scene::{
    FailingScene, MemoryScene, NodeKind, NodeProperty, PropertyValue, SceneAdapter, SceneNode,
    SceneOperation,
};
use tokens_tree::PrimitiveKind;

use common::synced_scene;

fn synthesizer() -> VariantSynthesizer {
    VariantSynthesizer::new("Design Tokens", "Components")
}

fn node_named<'a>(scene: &'a MemoryScene, name: &str) -> &'a SceneNode {
    scene
        .nodes()
        .iter()
        .find(|n| n.name == name)
        .unwrap_or_else(|| panic!("no node named {name}"))
}

fn assert_bound(scene: &MemoryScene, node: &SceneNode, property: NodeProperty, variable: &str) {
    let expected = &scene.variable_named(variable).unwrap().id;
    assert_eq!(node.bindings.get(&property), Some(expected), "{property:?}");
}

#[test]
fn test_button_creates_180_variants() {
    let mut scene = synced_scene();
    let family = button().unwrap();

    let report = synthesizer().synthesize(&mut scene, &family).unwrap();

    assert_eq!(report.nodes_created, 180);
    assert_eq!(report.construct_name, "Components/Button");
    assert_eq!(report.removed_previous, 0);

    let set = node_named(&scene, "Components/Button");
    assert_eq!(set.kind, NodeKind::VariantSet);
    let children = scene.children_of(&set.id);
    assert_eq!(children.len(), 180);
    assert_eq!(
        children[0].name,
        "Variant=Contained, Color=Green, Size=Small, Radius=Default"
    );

    let labels: HashSet<&str> = children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(labels.len(), 180);
}

#[test]
fn test_chip_enumeration_order() {
    let mut scene = synced_scene();
    let report = synthesizer().synthesize(&mut scene, &chip().unwrap()).unwrap();

    let labels: Vec<&str> = scene
        .children_of(&report.variant_set)
        .iter()
        .map(|n| n.name.as_str())
        .collect();

    insta::assert_snapshot!(labels.join("\n"), @r"
    Variant=Filled, Color=Green, Size=Small
    Variant=Filled, Color=Purple, Size=Small
    Variant=Filled, Color=Purple, Size=Medium
    Variant=Filled, Color=Yellow, Size=Small
    Variant=Filled, Color=Yellow, Size=Medium
    Variant=Filled, Color=Pink, Size=Small
    Variant=Filled, Color=Pink, Size=Medium
    Variant=Filled, Color=Orange, Size=Small
    Variant=Filled, Color=Orange, Size=Medium
    Variant=Filled, Color=Green, Size=Medium
    Variant=Outlined, Color=Purple, Size=Small
    Variant=Outlined, Color=Purple, Size=Medium
    Variant=Outlined, Color=Yellow, Size=Small
    Variant=Outlined, Color=Yellow, Size=Medium
    Variant=Outlined, Color=Pink, Size=Small
    Variant=Outlined, Color=Pink, Size=Medium
    Variant=Outlined, Color=Orange, Size=Small
    Variant=Outlined, Color=Orange, Size=Medium
    Variant=Outlined, Color=Green, Size=Small
    Variant=Outlined, Color=Green, Size=Medium
    ");
}

#[test]
fn test_size_bindings() {
    let mut scene = synced_scene();
    synthesizer().synthesize(&mut scene, &button().unwrap()).unwrap();
    let node = node_named(
        &scene,
        "Variant=Contained, Color=Purple, Size=Medium, Radius=Default",
    );

    assert_bound(&scene, node, NodeProperty::Height, "numbers/button/md/height");
    assert_bound(&scene, node, NodeProperty::PaddingLeft, "numbers/button/md/paddingX");
    assert_bound(&scene, node, NodeProperty::PaddingRight, "numbers/button/md/paddingX");
    assert_bound(&scene, node, NodeProperty::PaddingTop, "numbers/button/md/paddingY");
    assert_bound(&scene, node, NodeProperty::PaddingBottom, "numbers/button/md/paddingY");
    assert_bound(&scene, node, NodeProperty::ItemSpacing, "numbers/button/md/gap");
    assert_bound(&scene, node, NodeProperty::FontSize, "numbers/button/md/fontSize");
    for corner in NodeProperty::CORNERS {
        assert_bound(&scene, node, corner, "numbers/borderRadius/md");
    }
}

#[rstest]
#[case("Contained", Some(NodeProperty::Fill), NodeProperty::Stroke)]
#[case("Outlined", Some(NodeProperty::Stroke), NodeProperty::Fill)]
#[case("Glass", Some(NodeProperty::Stroke), NodeProperty::Fill)]
#[case("Text", None, NodeProperty::Fill)]
fn test_variant_paint_rules(
    #[case] variant: &str,
    #[case] painted: Option<NodeProperty>,
    #[case] cleared: NodeProperty,
) {
    let mut scene = synced_scene();
    synthesizer().synthesize(&mut scene, &button().unwrap()).unwrap();
    let node = node_named(
        &scene,
        &format!("Variant={variant}, Color=Pink, Size=Large, Radius=Rounded"),
    );

    if let Some(property) = painted {
        assert_bound(&scene, node, property, "colors/brand/pink");
    } else {
        assert_eq!(node.literals.get(&NodeProperty::Stroke), Some(&PropertyValue::Clear));
    }
    assert_eq!(node.literals.get(&cleared), Some(&PropertyValue::Clear));
    assert!(!node.bindings.contains_key(&cleared));
}

#[rstest]
#[case("Yellow", "colors/text/onBright")]
#[case("Green", "colors/text/onDark")]
#[case("Purple", "colors/text/onDark")]
fn test_contrast_rule(#[case] color: &str, #[case] text: &str) {
    let mut scene = synced_scene();
    synthesizer().synthesize(&mut scene, &chip().unwrap()).unwrap();
    let node = node_named(&scene, &format!("Variant=Outlined, Color={color}, Size=Small"));

    assert_bound(&scene, node, NodeProperty::TextFill, text);
    assert_bound(&scene, node, NodeProperty::IconFill, text);
    for corner in NodeProperty::CORNERS {
        assert_bound(&scene, node, corner, "numbers/borderRadius/full");
    }
}

#[test]
fn test_square_radius_falls_back_to_zero() {
    let mut scene = synced_scene();
    assert!(scene.remove_variable("numbers/borderRadius/none"));

    let report = synthesizer().synthesize(&mut scene, &button().unwrap()).unwrap();
    assert_eq!(report.nodes_created, 180);

    let node = node_named(
        &scene,
        "Variant=Text, Color=Orange, Size=Small, Radius=Square",
    );
    for corner in NodeProperty::CORNERS {
        assert_eq!(node.literals.get(&corner), Some(&PropertyValue::Number(0.0)));
        assert!(!node.bindings.contains_key(&corner));
    }
}

#[test]
fn test_rerun_replaces_previous_variant_set() {
    let mut scene = synced_scene();
    let family = chip().unwrap();

    synthesizer().synthesize(&mut scene, &family).unwrap();
    let report = synthesizer().synthesize(&mut scene, &family).unwrap();

    assert_eq!(report.removed_previous, 1);
    assert_eq!(scene.top_level_named("Components/Chip").len(), 1);
    assert_eq!(scene.nodes().len(), 20 + 1);
}

#[test]
fn test_missing_variable_removes_previous_and_creates_nothing() {
    let mut scene = synced_scene();
    let family = button().unwrap();
    synthesizer().synthesize(&mut scene, &family).unwrap();
    assert!(scene.remove_variable("colors/brand/pink"));

    let err = synthesizer().synthesize(&mut scene, &family).unwrap_err();

    assert!(matches!(
        &err,
        Error::MissingVariable { family, name } if family == "Button" && name == "colors/brand/pink"
    ));
    assert_eq!(
        err.to_string(),
        "Missing variable \"colors/brand/pink\" for Button. Run token sync first."
    );
    assert!(scene.top_level_named("Components/Button").is_empty());
    assert!(scene.nodes().is_empty());
}

#[test]
fn test_missing_collection_touches_nothing() {
    let mut scene = MemoryScene::new();
    scene.create_component_node("Components/Button").unwrap();

    let err = synthesizer()
        .synthesize(&mut scene, &button().unwrap())
        .unwrap_err();

    assert!(matches!(err, Error::MissingCollection { ref name } if name == "Design Tokens"));
    assert_eq!(scene.top_level_named("Components/Button").len(), 1);
    assert_eq!(scene.nodes().len(), 1);
}

fn assert_invalid_family_leaves_scene_alone(family: ComponentFamily) {
    let mut scene = synced_scene();
    synthesizer().synthesize(&mut scene, &chip().unwrap()).unwrap();
    let before = scene.clone();

    let err = synthesizer().synthesize(&mut scene, &family).unwrap_err();

    assert!(matches!(err, Error::InvalidFamily { ref family, .. } if family == "Chip"));
    assert_eq!(scene.nodes(), before.nodes());
    assert_eq!(scene.top_level_named("Components/Chip").len(), 1);
}

#[test]
fn test_base_outside_rules_is_rejected_up_front() {
    let mut family = chip().unwrap();
    family.base = VariantCombination::new(["Filled", "Green", "Large"]);
    assert_invalid_family_leaves_scene_alone(family);
}

#[test]
fn test_repeated_label_is_rejected_up_front() {
    let mut family = chip().unwrap();
    family.axes[0].domain = vec!["Filled".into(), "Outlined".into(), "Filled".into()];
    assert_invalid_family_leaves_scene_alone(family);
}

#[test]
fn test_failure_mid_loop_leaves_ungrouped_nodes() {
    let mut scene = FailingScene::new(synced_scene(), SceneOperation::CloneNode, 10);

    let err = synthesizer()
        .synthesize(&mut scene, &chip().unwrap())
        .unwrap_err();

    assert!(matches!(err, Error::Scene(_)));
    assert_eq!(scene.call_count(SceneOperation::GroupAsVariantSet), 0);
    let inner = scene.into_inner();
    // the base node plus the nine clones made before the failure
    assert_eq!(inner.nodes().len(), 10);
    assert!(inner.nodes().iter().all(|n| n.parent.is_none()));
    assert!(inner.top_level_named("Components/Chip").is_empty());
}

fn labels(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i}")).collect()
}

fn family_with(variants: usize, colors: usize, sizes: usize, radii: usize) -> ComponentFamily {
    let variant_labels = labels("V", variants);
    let color_labels = labels("C", colors);
    let size_labels = labels("S", sizes);
    let radius_labels = labels("R", radii);

    let mut base = vec![
        variant_labels[0].clone(),
        color_labels[0].clone(),
        size_labels[0].clone(),
    ];
    let mut builder = ComponentFamily::builder("Generated")
        .axis(AxisRole::Variant, "Variant", variant_labels.clone())
        .axis(AxisRole::Color, "Color", color_labels.clone())
        .axis(AxisRole::Size, "Size", size_labels.clone())
        .contrast(color_labels[0].clone(), "colors/text/onBright", "colors/text/onDark");

    if radii > 0 {
        builder = builder.axis(AxisRole::Radius, "Radius", radius_labels.clone());
        base.push(radius_labels[0].clone());
        for label in &radius_labels {
            builder = builder.radius(label.clone(), format!("numbers/radius/{label}"));
        }
    }
    for (i, label) in variant_labels.iter().enumerate() {
        let style = [VariantStyle::Filled, VariantStyle::Outlined, VariantStyle::Plain][i % 3];
        builder = builder.variant_style(label.clone(), style);
    }
    for label in &color_labels {
        builder = builder.color(label.clone(), format!("colors/brand/{label}"));
    }
    for label in &size_labels {
        builder = builder.size(label.clone(), SizeMetrics::under(&format!("numbers/{label}")));
    }

    builder.base(base).build().unwrap()
}

fn scene_for(family: &ComponentFamily) -> MemoryScene {
    let mut scene = MemoryScene::new();
    let collection = scene.create_collection("Design Tokens").unwrap();
    for name in family.required_variables() {
        let kind = if name.starts_with("colors/") {
            PrimitiveKind::Color
        } else {
            PrimitiveKind::Number
        };
        scene.create_variable(name, &collection.id, kind).unwrap();
    }
    scene
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_node_count_is_product_of_domains(
        variants in 1usize..4,
        colors in 1usize..4,
        sizes in 1usize..4,
        radii in 0usize..3,
    ) {
        let family = family_with(variants, colors, sizes, radii);
        let mut scene = scene_for(&family);

        let report = synthesizer().synthesize(&mut scene, &family).unwrap();

        let expected = variants * colors * sizes * radii.max(1);
        prop_assert_eq!(report.nodes_created, expected);
        prop_assert_eq!(scene.children_of(&report.variant_set).len(), expected);
        let unique: HashSet<&str> = scene
            .children_of(&report.variant_set)
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        prop_assert_eq!(unique.len(), expected);
    }
}
