//! Variant axis model
//!
//! A component family is a static description of independent styling axes,
//! the base combination, and the rules that turn each label into property
//! bindings.

mod axis;
mod builtins;
mod catalog;
mod model;

pub use axis::{
    AxisDefinition, AxisRole, CrossProduct, VariantCombination, combination_count, cross_product,
};
pub use builtins::{BUILTIN_COUNT, builtin_families, button, chip};
pub use catalog::FamilyCatalog;
pub use model::{
    ComponentFamily, ComponentFamilyBuilder, ContrastRule, RadiusRule, SizeMetrics, VariantStyle,
};
