//! Design-token source handling for Token Sync.
//!
//! This crate turns a nested token document into an ordered list of typed
//! primitives:
//!
//! - **source**: load a token document (JSON, YAML or TOML) into a [`TokenNode`]
//! - **flatten**: walk the tree, classify every leaf and build slash-separated paths
//! - **color**: hex / `rgba(...)` parsing into normalized [`ColorValue`]s
//!
//! Nothing in here talks to the design tool; the output is consumed by
//! `tokens-core`, which registers the primitives as variables.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tokens_tree::{flatten, PrimitiveValue, TokenNode};
//!
//! let tree = TokenNode::from(json!({
//!     "spacing": { "4": "1rem" }
//! }));
//!
//! let primitives = flatten(&tree, "tokens");
//! assert_eq!(primitives[0].grouped_path(), "spacing/4");
//! assert_eq!(primitives[0].value, PrimitiveValue::Number(16.0));
//! ```

pub mod color;
pub mod error;
pub mod flatten;
pub mod node;
pub mod primitive;
pub mod source;

pub use color::ColorValue;
pub use error::{Error, Result};
pub use flatten::{DEFAULT_EXCLUDED_KEYS, FlattenOptions, Flattener, classify, flatten};
pub use node::TokenNode;
pub use primitive::{Primitive, PrimitiveKind, PrimitiveValue};
pub use source::TokenSource;
