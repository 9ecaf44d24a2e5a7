//! Opaque handles returned by the adapter

use std::fmt;

use serde::{Deserialize, Serialize};
use tokens_tree::PrimitiveKind;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a variable collection
    CollectionId
);
opaque_id!(
    /// Identifier of a collection mode (only the default mode is written)
    ModeId
);
opaque_id!(
    /// Identifier of a variable
    VariableId
);
opaque_id!(
    /// Identifier of a paint style
    StyleId
);
opaque_id!(
    /// Identifier of a scene node
    NodeId
);

/// A resolved variable collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionHandle {
    pub id: CollectionId,
    pub name: String,
    pub default_mode: ModeId,
}

/// A variable as listed or created by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableHandle {
    pub id: VariableId,
    pub name: String,
    pub kind: PrimitiveKind,
}

/// A paint style as listed or created by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHandle {
    pub id: StyleId,
    pub name: String,
}
