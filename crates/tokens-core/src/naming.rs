//! Names shared with the design tool
//!
//! These strings are how a re-run finds what the previous run created, so
//! they must stay stable byte for byte.

use tokens_tree::{Primitive, PrimitiveKind};

use crate::family::{AxisDefinition, VariantCombination};

pub const COLORS_PREFIX: &str = "colors";
pub const NUMBERS_PREFIX: &str = "numbers";
pub const STRINGS_PREFIX: &str = "strings";

/// Fully-qualified variable name for a primitive.
///
/// Colors drop their originating group (`colors/brand/green`), numbers and
/// strings keep it (`numbers/spacing/4`). String primitives are only synced
/// when their grouped path contains one of `string_keywords`
/// (case-insensitive); otherwise `None`.
pub fn variable_name(primitive: &Primitive, string_keywords: &[String]) -> Option<String> {
    match primitive.kind() {
        PrimitiveKind::Color => Some(format!("{}/{}", COLORS_PREFIX, primitive.path)),
        PrimitiveKind::Number => Some(format!("{}/{}", NUMBERS_PREFIX, primitive.grouped_path())),
        PrimitiveKind::String => {
            let grouped = primitive.grouped_path();
            let lowered = grouped.to_lowercase();
            string_keywords
                .iter()
                .any(|k| lowered.contains(&k.to_lowercase()))
                .then(|| format!("{}/{}", STRINGS_PREFIX, grouped))
        }
    }
}

/// Node label: `Axis1=Label1, Axis2=Label2, ...` in declared axis order.
pub fn variant_label(axes: &[AxisDefinition], combination: &VariantCombination) -> String {
    axes.iter()
        .zip(combination.labels())
        .map(|(axis, label)| format!("{}={}", axis.name, label))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Variant-set name: `<Namespace>/<FamilyName>`.
pub fn construct_name(namespace: &str, family: &str) -> String {
    format!("{}/{}", namespace, family)
}
