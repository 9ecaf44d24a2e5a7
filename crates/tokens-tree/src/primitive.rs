//! Flattened, typed tokens

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

/// The type of a primitive, mirrored one-to-one by external variable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Color,
    Number,
    String,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::Color => write!(f, "color"),
            PrimitiveKind::Number => write!(f, "number"),
            PrimitiveKind::String => write!(f, "string"),
        }
    }
}

/// A classified leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PrimitiveValue {
    Color(ColorValue),
    Number(f64),
    String(String),
}

impl PrimitiveValue {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveValue::Color(_) => PrimitiveKind::Color,
            PrimitiveValue::Number(_) => PrimitiveKind::Number,
            PrimitiveValue::String(_) => PrimitiveKind::String,
        }
    }
}

/// A flattened token, ready for registration.
///
/// `group` is the top-level key under the namespace (`colors`, `spacing`, ...)
/// and `path` is the remaining key chain joined with `/`. Paths are not
/// guaranteed to be unique across groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub group: String,
    pub path: String,
    pub value: PrimitiveValue,
}

impl Primitive {
    pub fn new(group: impl Into<String>, path: impl Into<String>, value: PrimitiveValue) -> Self {
        Self {
            group: group.into(),
            path: path.into(),
            value,
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.value.kind()
    }

    /// Path with the originating group kept: `spacing/4`.
    ///
    /// A leaf sitting directly under the namespace has `path == group` and
    /// is not doubled.
    pub fn grouped_path(&self) -> String {
        if self.path == self.group {
            self.path.clone()
        } else {
            format!("{}/{}", self.group, self.path)
        }
    }
}
