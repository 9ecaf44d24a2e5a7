//! Command handling: one notification per command, errors never escape

mod common;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tokens_core::{Command, SyncConfig, SyncEngine};
use tokens_scene::{FailingScene, MemoryScene, SceneOperation};

use common::{engine, synced_scene, token_source};

#[test]
fn test_family_before_token_sync() {
    let mut scene = MemoryScene::new();

    let outcome = engine().run(&mut scene, Command::SyncFamily("Chip".into()));

    assert!(!outcome.success);
    assert_eq!(
        outcome.message,
        "Collection \"Design Tokens\" not found. Run token sync first."
    );
    assert_eq!(scene.notifications().len(), 1);
}

#[rstest]
#[case("Button", "Created 180 variants in Components/Button")]
#[case("Chip", "Created 20 variants in Components/Chip")]
fn test_sync_family_message(#[case] family: &str, #[case] expected: &str) {
    let mut scene = synced_scene();

    let outcome = engine().run(&mut scene, Command::SyncFamily(family.into()));

    assert!(outcome.success);
    assert_eq!(outcome.message, expected);
    assert_eq!(scene.last_notification(), Some(expected));
}

#[test]
fn test_sync_all_families() {
    let mut scene = synced_scene();

    let outcome = engine().run(&mut scene, Command::SyncAllFamilies);

    assert!(outcome.success);
    assert_eq!(outcome.message, "Created 200 variants across 2 families");
    assert_eq!(scene.top_level_named("Components/Button").len(), 1);
    assert_eq!(scene.top_level_named("Components/Chip").len(), 1);
}

#[test]
fn test_sync_all_stops_at_first_failure() {
    let config = SyncConfig {
        families: vec!["Chip".into(), "Button".into()],
        ..SyncConfig::default()
    };
    let engine = SyncEngine::with_builtins(config).unwrap();
    let mut scene = synced_scene();
    assert!(scene.remove_variable("numbers/button/lg/height"));

    let outcome = engine.run(&mut scene, Command::SyncAllFamilies);

    assert!(!outcome.success);
    assert_eq!(
        outcome.message,
        "Missing variable \"numbers/button/lg/height\" for Button. Run token sync first."
    );
    assert_eq!(scene.top_level_named("Components/Chip").len(), 1);
    assert!(scene.top_level_named("Components/Button").is_empty());
}

#[test]
fn test_sync_all_reports_unknown_configured_family() {
    let config = SyncConfig {
        families: vec!["Chip".into(), "Slider".into(), "Button".into()],
        ..SyncConfig::default()
    };
    let engine = SyncEngine::with_builtins(config).unwrap();
    let mut scene = synced_scene();

    let outcome = engine.run(&mut scene, Command::SyncAllFamilies);

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Unknown component family: Slider");
    assert_eq!(scene.top_level_named("Components/Chip").len(), 1);
    assert!(scene.top_level_named("Components/Button").is_empty());
}

#[test]
fn test_adapter_failure_becomes_notification() {
    let mut scene = FailingScene::new(MemoryScene::new(), SceneOperation::CreateVariable, 3);

    let outcome = engine().run(&mut scene, Command::SyncTokens(token_source()));

    assert!(!outcome.success);
    assert!(outcome.message.contains("create_variable"), "{}", outcome.message);
    let inner = scene.into_inner();
    assert_eq!(inner.notifications(), [outcome.message.as_str()]);
    assert_eq!(inner.variables().len(), 2);
}

#[test]
fn test_every_command_notifies_once() {
    let engine = engine();
    let mut scene = MemoryScene::new();

    engine.run(&mut scene, Command::SyncTokens(token_source()));
    engine.run(&mut scene, Command::SyncFamily("Chip".into()));
    engine.run(&mut scene, Command::SyncAllFamilies);

    assert_eq!(scene.notifications().len(), 3);
}
