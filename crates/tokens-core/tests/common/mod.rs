//! Shared fixtures for tokens-core integration tests

#![allow(dead_code)]

use serde_json::json;
use tokens_core::{Command, SyncConfig, SyncEngine};
use tokens_scene::MemoryScene;
use tokens_tree::{TokenNode, TokenSource};

/// Every variable both built-in families bind to, plus a font string and an
/// excluded lookup table.
pub fn token_source() -> TokenSource {
    TokenSource::new(TokenNode::from(json!({
        "tokens": {
            "colors": {
                "brand": {
                    "purple": "#7b61ff",
                    "yellow": "#ffd600",
                    "pink": "#ff5c9a",
                    "orange": "#ff8a00",
                    "green": "#00ca55"
                },
                "text": {
                    "onBright": "#111111",
                    "onDark": "#ffffff"
                }
            },
            "button": {
                "sm": { "height": "2rem", "paddingX": "0.75rem", "paddingY": "0.25rem", "gap": "0.5rem", "fontSize": "0.875rem" },
                "md": { "height": "2.5rem", "paddingX": "1rem", "paddingY": "0.5rem", "gap": "0.5rem", "fontSize": "1rem" },
                "lg": { "height": "3rem", "paddingX": "1.25rem", "paddingY": "0.75rem", "gap": "0.75rem", "fontSize": "1.125rem" }
            },
            "chip": {
                "sm": { "height": "1.5rem", "paddingX": "0.5rem", "paddingY": "0.125rem", "gap": "0.25rem", "fontSize": "0.75rem" },
                "md": { "height": "2rem", "paddingX": "0.75rem", "paddingY": "0.25rem", "gap": "0.25rem", "fontSize": "0.875rem" }
            },
            "borderRadius": {
                "none": "0",
                "md": "0.5rem",
                "full": "9999"
            },
            "fontFamily": {
                "sans": "Inter"
            },
            "fontFamilyNames": {
                "inter": "Inter"
            }
        }
    })))
}

/// Variables created from [`token_source`].
pub const TOKEN_VARIABLES: usize = 7 + 15 + 10 + 3 + 1;

/// Color styles created from [`token_source`].
pub const TOKEN_STYLES: usize = 7;

pub fn engine() -> SyncEngine {
    SyncEngine::with_builtins(SyncConfig::default()).unwrap()
}

/// A scene with every token already synced.
pub fn synced_scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    let outcome = engine().run(&mut scene, Command::SyncTokens(token_source()));
    assert!(outcome.success, "{}", outcome.message);
    scene
}
