//! Token tree flattening
//!
//! Walks a [`TokenNode`] tree and produces an ordered list of [`Primitive`]s.
//! Every leaf is classified in a fixed order:
//!
//! 1. `#...` or `rgba(...)` -> color
//! 2. `<n>rem` -> number, converted to pixels with the root font size
//! 3. `<n>em` -> number, left unconverted
//! 4. plain (optionally negative) decimal -> number
//! 5. `none` / `cover` / `contain` or a word-like string -> string
//! 6. anything else -> dropped
//!
//! Bare numeric leaves are numbers without any pattern matching.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::color::ColorValue;
use crate::node::TokenNode;
use crate::primitive::{Primitive, PrimitiveValue};

static REM_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([\d.]+)rem$").unwrap());
static EM_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([\d.]+)em$").unwrap());
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[\d.]+$").unwrap());
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["'A-Za-z][A-Za-z0-9 _'",-]*$"#).unwrap());

/// Keyword strings kept verbatim even though they carry no unit.
const KEYWORD_STRINGS: &[&str] = &["none", "cover", "contain"];

/// Top-level keys holding name-to-identifier tables with no visual value.
pub const DEFAULT_EXCLUDED_KEYS: &[&str] = &["fontFamilyNames", "iconNames", "breakpointNames"];

/// Options controlling classification and traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenOptions {
    /// Pixels per `rem`.
    pub root_font_size: f64,
    /// Top-level keys skipped before recursion.
    pub excluded_keys: Vec<String>,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            root_font_size: 16.0,
            excluded_keys: DEFAULT_EXCLUDED_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Stateless tree walker.
#[derive(Debug, Clone, Default)]
pub struct Flattener {
    options: FlattenOptions,
}

impl Flattener {
    pub fn new(options: FlattenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    /// Flatten `tree` into primitives, in document order.
    ///
    /// `prefix` is the namespace token the tree lives under; it is stripped
    /// from every resulting path. A tree whose root is not a group yields
    /// nothing.
    pub fn flatten(&self, tree: &TokenNode, prefix: &str) -> Vec<Primitive> {
        let TokenNode::Group(entries) = tree else {
            return Vec::new();
        };

        let primitives: Vec<Primitive> = entries
            .iter()
            .filter(|(key, _)| !self.is_excluded(key))
            .flat_map(|(key, child)| self.walk(child, &format!("{prefix}/{key}"), prefix))
            .collect();

        debug!(count = primitives.len(), namespace = prefix, "Flattened token tree");
        primitives
    }

    fn is_excluded(&self, key: &str) -> bool {
        self.options.excluded_keys.iter().any(|k| k == key)
    }

    fn walk(&self, node: &TokenNode, accumulated: &str, namespace: &str) -> Vec<Primitive> {
        match node {
            TokenNode::Group(entries) => entries
                .iter()
                .flat_map(|(key, child)| {
                    self.walk(child, &format!("{accumulated}/{key}"), namespace)
                })
                .collect(),
            TokenNode::Empty => Vec::new(),
            leaf => match self.classify(leaf) {
                Some(value) => vec![build_primitive(accumulated, namespace, value)],
                None => {
                    trace!(path = accumulated, "Dropped unclassified token leaf");
                    Vec::new()
                }
            },
        }
    }

    /// Classify a single leaf. Groups and empty nodes yield `None`.
    pub fn classify(&self, leaf: &TokenNode) -> Option<PrimitiveValue> {
        match leaf {
            TokenNode::Number(n) => Some(PrimitiveValue::Number(*n)),
            TokenNode::Text(text) => self.classify_text(text),
            TokenNode::Group(_) | TokenNode::Empty => None,
        }
    }

    fn classify_text(&self, text: &str) -> Option<PrimitiveValue> {
        if text.starts_with('#') || text.starts_with("rgba") {
            return ColorValue::parse(text).map(PrimitiveValue::Color);
        }

        if let Some(caps) = REM_PATTERN.captures(text) {
            let rem: f64 = caps[1].parse().ok()?;
            return Some(PrimitiveValue::Number(rem * self.options.root_font_size));
        }

        // `em` is relative to the parent element and stays as-is.
        if let Some(caps) = EM_PATTERN.captures(text) {
            return caps[1].parse().ok().map(PrimitiveValue::Number);
        }

        if NUMBER_PATTERN.is_match(text) {
            return text.parse().ok().map(PrimitiveValue::Number);
        }

        if KEYWORD_STRINGS.contains(&text) || WORD_PATTERN.is_match(text) {
            return Some(PrimitiveValue::String(text.to_string()));
        }

        None
    }
}

/// Flatten with default options.
pub fn flatten(tree: &TokenNode, prefix: &str) -> Vec<Primitive> {
    Flattener::default().flatten(tree, prefix)
}

/// Classify a string leaf with default options.
pub fn classify(text: &str) -> Option<PrimitiveValue> {
    Flattener::default().classify_text(text)
}

fn build_primitive(accumulated: &str, namespace: &str, value: PrimitiveValue) -> Primitive {
    let stripped = accumulated
        .strip_prefix(namespace)
        .unwrap_or(accumulated)
        .trim_start_matches('/')
        .replace('.', "/");

    match stripped.split_once('/') {
        Some((group, path)) => Primitive::new(group, path, value),
        None => Primitive::new(stripped.clone(), stripped, value),
    }
}
