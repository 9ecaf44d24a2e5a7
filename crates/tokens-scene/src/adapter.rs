//! SceneAdapter trait: the only channel into the design tool

use tokens_tree::{PrimitiveKind, PrimitiveValue};

use crate::error::Result;
use crate::handle::{
    CollectionHandle, CollectionId, ModeId, NodeId, StyleHandle, StyleId, VariableHandle,
    VariableId,
};
use crate::property::{NodeProperty, PropertyValue};

/// Trait for design-tool hosts.
///
/// Calls are issued one at a time; later calls depend on handles returned
/// by earlier ones. The host is assumed to have no concurrent writer.
/// The engine never reads geometry back, only handles.
pub trait SceneAdapter {
    /// Find a variable collection by name.
    fn resolve_collection(&mut self, name: &str) -> Result<Option<CollectionHandle>>;

    /// Create a variable collection with a single default mode.
    fn create_collection(&mut self, name: &str) -> Result<CollectionHandle>;

    /// List every variable in a collection.
    fn list_variables(&mut self, collection: &CollectionId) -> Result<Vec<VariableHandle>>;

    /// Create a variable of the given kind.
    fn create_variable(
        &mut self,
        name: &str,
        collection: &CollectionId,
        kind: PrimitiveKind,
    ) -> Result<VariableHandle>;

    /// Write a variable's value for one mode.
    fn set_variable_value(
        &mut self,
        variable: &VariableId,
        mode: &ModeId,
        value: &PrimitiveValue,
    ) -> Result<()>;

    /// List every local paint style.
    fn list_paint_styles(&mut self) -> Result<Vec<StyleHandle>>;

    /// Create an empty paint style.
    fn create_paint_style(&mut self, name: &str) -> Result<StyleHandle>;

    /// Make a paint style's solid paint track a color variable.
    fn bind_style_to_variable(&mut self, style: &StyleId, variable: &VariableId) -> Result<()>;

    /// Bind a node property to a variable.
    fn bind_property(
        &mut self,
        node: &NodeId,
        property: NodeProperty,
        variable: &VariableId,
    ) -> Result<()>;

    /// Set a node property to a literal, dropping any binding it had.
    fn set_property(
        &mut self,
        node: &NodeId,
        property: NodeProperty,
        value: PropertyValue,
    ) -> Result<()>;

    /// Create an empty component node on the current page.
    fn create_component_node(&mut self, name: &str) -> Result<NodeId>;

    /// Duplicate a node together with its bindings and literals.
    fn clone_node(&mut self, node: &NodeId) -> Result<NodeId>;

    fn rename_node(&mut self, node: &NodeId, name: &str) -> Result<()>;

    /// Remove every top-level node with this name. Returns how many were removed.
    fn remove_node_by_name(&mut self, name: &str) -> Result<usize>;

    /// Combine component nodes into one variant set, in the given order.
    fn group_as_variant_set(&mut self, nodes: &[NodeId], name: &str) -> Result<NodeId>;

    /// Show a one-line message to the user.
    fn notify(&mut self, message: &str);
}
