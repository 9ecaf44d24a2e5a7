//! Adapter wrapper that fails on demand

use std::collections::HashMap;

use tokens_tree::{PrimitiveKind, PrimitiveValue};

use crate::adapter::SceneAdapter;
use crate::error::{Error, Result, SceneOperation};
use crate::handle::{
    CollectionHandle, CollectionId, ModeId, NodeId, StyleHandle, StyleId, VariableHandle,
    VariableId,
};
use crate::property::{NodeProperty, PropertyValue};

/// Wraps an adapter and fails the n-th call (1-based) of one operation.
///
/// Every other call is forwarded unchanged, so the inner adapter shows
/// exactly the state a host would be left in after the failure.
pub struct FailingScene<A> {
    inner: A,
    operation: SceneOperation,
    fail_at: usize,
    calls: HashMap<SceneOperation, usize>,
}

impl<A: SceneAdapter> FailingScene<A> {
    pub fn new(inner: A, operation: SceneOperation, fail_at: usize) -> Self {
        Self {
            inner,
            operation,
            fail_at,
            calls: HashMap::new(),
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn into_inner(self) -> A {
        self.inner
    }

    /// How many times an operation has been attempted.
    pub fn call_count(&self, operation: SceneOperation) -> usize {
        self.calls.get(&operation).copied().unwrap_or(0)
    }

    fn check(&mut self, operation: SceneOperation) -> Result<()> {
        let count = self.calls.entry(operation).or_insert(0);
        *count += 1;
        if operation == self.operation && *count == self.fail_at {
            return Err(Error::operation(operation, "injected failure"));
        }
        Ok(())
    }
}

impl<A: SceneAdapter> SceneAdapter for FailingScene<A> {
    fn resolve_collection(&mut self, name: &str) -> Result<Option<CollectionHandle>> {
        self.check(SceneOperation::ResolveCollection)?;
        self.inner.resolve_collection(name)
    }

    fn create_collection(&mut self, name: &str) -> Result<CollectionHandle> {
        self.check(SceneOperation::CreateCollection)?;
        self.inner.create_collection(name)
    }

    fn list_variables(&mut self, collection: &CollectionId) -> Result<Vec<VariableHandle>> {
        self.check(SceneOperation::ListVariables)?;
        self.inner.list_variables(collection)
    }

    fn create_variable(
        &mut self,
        name: &str,
        collection: &CollectionId,
        kind: PrimitiveKind,
    ) -> Result<VariableHandle> {
        self.check(SceneOperation::CreateVariable)?;
        self.inner.create_variable(name, collection, kind)
    }

    fn set_variable_value(
        &mut self,
        variable: &VariableId,
        mode: &ModeId,
        value: &PrimitiveValue,
    ) -> Result<()> {
        self.check(SceneOperation::SetVariableValue)?;
        self.inner.set_variable_value(variable, mode, value)
    }

    fn list_paint_styles(&mut self) -> Result<Vec<StyleHandle>> {
        self.check(SceneOperation::ListPaintStyles)?;
        self.inner.list_paint_styles()
    }

    fn create_paint_style(&mut self, name: &str) -> Result<StyleHandle> {
        self.check(SceneOperation::CreatePaintStyle)?;
        self.inner.create_paint_style(name)
    }

    fn bind_style_to_variable(&mut self, style: &StyleId, variable: &VariableId) -> Result<()> {
        self.check(SceneOperation::BindStyleToVariable)?;
        self.inner.bind_style_to_variable(style, variable)
    }

    fn bind_property(
        &mut self,
        node: &NodeId,
        property: NodeProperty,
        variable: &VariableId,
    ) -> Result<()> {
        self.check(SceneOperation::BindProperty)?;
        self.inner.bind_property(node, property, variable)
    }

    fn set_property(
        &mut self,
        node: &NodeId,
        property: NodeProperty,
        value: PropertyValue,
    ) -> Result<()> {
        self.check(SceneOperation::SetProperty)?;
        self.inner.set_property(node, property, value)
    }

    fn create_component_node(&mut self, name: &str) -> Result<NodeId> {
        self.check(SceneOperation::CreateComponentNode)?;
        self.inner.create_component_node(name)
    }

    fn clone_node(&mut self, node: &NodeId) -> Result<NodeId> {
        self.check(SceneOperation::CloneNode)?;
        self.inner.clone_node(node)
    }

    fn rename_node(&mut self, node: &NodeId, name: &str) -> Result<()> {
        self.check(SceneOperation::RenameNode)?;
        self.inner.rename_node(node, name)
    }

    fn remove_node_by_name(&mut self, name: &str) -> Result<usize> {
        self.check(SceneOperation::RemoveNodeByName)?;
        self.inner.remove_node_by_name(name)
    }

    fn group_as_variant_set(&mut self, nodes: &[NodeId], name: &str) -> Result<NodeId> {
        self.check(SceneOperation::GroupAsVariantSet)?;
        self.inner.group_as_variant_set(nodes, name)
    }

    fn notify(&mut self, message: &str) {
        self.inner.notify(message)
    }
}
