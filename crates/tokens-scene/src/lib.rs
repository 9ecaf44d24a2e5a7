//! Scene graph adapter for Token Sync.
//!
//! The design tool is an external collaborator. Everything the sync engine
//! does to it goes through the [`SceneAdapter`] trait: resolving the variable
//! collection, upserting variables and paint styles, creating and cloning
//! component nodes, binding node properties to variables, and grouping nodes
//! into a variant set.
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryScene`] - a complete in-process scene, serializable to JSON so a
//!   command-line host can persist it between runs
//! - [`FailingScene`] - wraps another adapter and fails a chosen call, for
//!   exercising partial-failure paths

pub mod adapter;
pub mod error;
pub mod failing;
pub mod handle;
pub mod memory;
pub mod property;

pub use adapter::SceneAdapter;
pub use error::{Error, Result, SceneOperation};
pub use failing::FailingScene;
pub use handle::{
    CollectionHandle, CollectionId, ModeId, NodeId, StyleHandle, StyleId, VariableHandle,
    VariableId,
};
pub use memory::{MemoryScene, NodeKind, SceneNode, StoredVariable};
pub use property::{NodeProperty, PropertyValue};
