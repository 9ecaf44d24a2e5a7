//! Bindable node properties

use serde::{Deserialize, Serialize};

/// A visual property of a component node that can be bound to a variable
/// or set to a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeProperty {
    Height,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PaddingBottom,
    ItemSpacing,
    FontSize,
    TopLeftRadius,
    TopRightRadius,
    BottomLeftRadius,
    BottomRightRadius,
    Fill,
    Stroke,
    TextFill,
    IconFill,
}

impl NodeProperty {
    /// The four corner radii, which always move together.
    pub const CORNERS: [NodeProperty; 4] = [
        NodeProperty::TopLeftRadius,
        NodeProperty::TopRightRadius,
        NodeProperty::BottomLeftRadius,
        NodeProperty::BottomRightRadius,
    ];

    /// Whether the property takes a paint (color) rather than a number.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            NodeProperty::Fill | NodeProperty::Stroke | NodeProperty::TextFill | NodeProperty::IconFill
        )
    }
}

/// A literal property value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyValue {
    /// A number in pixels
    Number(f64),
    /// Remove the paint (no fill / no stroke)
    Clear,
}
