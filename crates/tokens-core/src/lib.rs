//! Token Sync core
//!
//! Pushes a design-token tree into a design tool's variables and synthesizes
//! component variant sets bound to those variables.
//!
//! # Pipeline
//!
//! 1. [`SyncEngine::sync_tokens`] flattens a [`tokens_tree::TokenSource`] and
//!    upserts each primitive through the [`VariableRegistry`]
//! 2. [`SyncEngine::sync_family`] hands a [`ComponentFamily`] to the
//!    [`VariantSynthesizer`], which removes the previous variant set and
//!    rebuilds it from the cross product of the family's axes
//!
//! All design-tool access goes through a [`tokens_scene::SceneAdapter`].
//!
//! # Example
//!
//! ```
//! use tokens_core::{Command, SyncConfig, SyncEngine};
//! use tokens_scene::MemoryScene;
//!
//! let engine = SyncEngine::with_builtins(SyncConfig::default()).unwrap();
//! let mut scene = MemoryScene::new();
//!
//! let outcome = engine.run(&mut scene, Command::SyncFamily("Button".into()));
//! assert!(!outcome.success);
//! assert_eq!(
//!     outcome.message,
//!     "Collection \"Design Tokens\" not found. Run token sync first."
//! );
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod family;
pub mod logging;
pub mod naming;
pub mod registry;
pub mod synth;

pub use config::SyncConfig;
pub use engine::{Command, CommandOutcome, SyncAllReport, SyncEngine};
pub use error::{Error, Result};
pub use family::{
    AxisDefinition, AxisRole, ComponentFamily, ComponentFamilyBuilder, FamilyCatalog,
    SizeMetrics, VariantCombination, VariantStyle,
};
pub use naming::{construct_name, variable_name, variant_label};
pub use registry::{TokenSyncReport, Upserted, VariableRegistry, sync_primitives};
pub use synth::{SynthesisReport, VariantSynthesizer};
