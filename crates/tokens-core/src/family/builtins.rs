//! Built-in component families

use super::axis::AxisRole;
use super::model::{ComponentFamily, ComponentFamilyBuilder, SizeMetrics, VariantStyle};
use crate::Result;

const BRAND_COLORS: [(&str, &str); 5] = [
    ("Purple", "colors/brand/purple"),
    ("Yellow", "colors/brand/yellow"),
    ("Pink", "colors/brand/pink"),
    ("Orange", "colors/brand/orange"),
    ("Green", "colors/brand/green"),
];

const BRIGHT_COLOR: &str = "Yellow";
const TEXT_ON_BRIGHT: &str = "colors/text/onBright";
const TEXT_ON_DARK: &str = "colors/text/onDark";

/// Number of built-in families.
pub const BUILTIN_COUNT: usize = 2;

fn with_brand_colors(mut builder: ComponentFamilyBuilder) -> ComponentFamilyBuilder {
    for (label, variable) in BRAND_COLORS {
        builder = builder.color(label, variable);
    }
    builder.contrast(BRIGHT_COLOR, TEXT_ON_BRIGHT, TEXT_ON_DARK)
}

/// `Variant x Color x Size x Radius` = 4 x 5 x 3 x 3 = 180 buttons.
pub fn button() -> Result<ComponentFamily> {
    let builder = ComponentFamily::builder("Button")
        .axis(AxisRole::Variant, "Variant", ["Contained", "Outlined", "Text", "Glass"])
        .axis(AxisRole::Color, "Color", BRAND_COLORS.map(|(label, _)| label))
        .axis(AxisRole::Size, "Size", ["Small", "Medium", "Large"])
        .axis(AxisRole::Radius, "Radius", ["Default", "Square", "Rounded"])
        .base(["Contained", "Green", "Small", "Default"])
        .variant_style("Contained", VariantStyle::Filled)
        .variant_style("Outlined", VariantStyle::Outlined)
        .variant_style("Text", VariantStyle::Plain)
        .variant_style("Glass", VariantStyle::Outlined)
        .size("Small", SizeMetrics::under("numbers/button/sm"))
        .size("Medium", SizeMetrics::under("numbers/button/md"))
        .size("Large", SizeMetrics::under("numbers/button/lg"))
        .radius("Default", "numbers/borderRadius/md")
        .radius_or("Square", "numbers/borderRadius/none", 0.0)
        .radius("Rounded", "numbers/borderRadius/full");

    with_brand_colors(builder).build()
}

/// `Variant x Color x Size` = 2 x 5 x 2 = 20 chips, always fully rounded.
pub fn chip() -> Result<ComponentFamily> {
    let builder = ComponentFamily::builder("Chip")
        .axis(AxisRole::Variant, "Variant", ["Filled", "Outlined"])
        .axis(AxisRole::Color, "Color", BRAND_COLORS.map(|(label, _)| label))
        .axis(AxisRole::Size, "Size", ["Small", "Medium"])
        .base(["Filled", "Green", "Small"])
        .variant_style("Filled", VariantStyle::Filled)
        .variant_style("Outlined", VariantStyle::Outlined)
        .size("Small", SizeMetrics::under("numbers/chip/sm"))
        .size("Medium", SizeMetrics::under("numbers/chip/md"))
        .fixed_radius("numbers/borderRadius/full", None);

    with_brand_colors(builder).build()
}

/// All built-in families, in their default sync order.
pub fn builtin_families() -> Result<Vec<ComponentFamily>> {
    Ok(vec![button()?, chip()?])
}
