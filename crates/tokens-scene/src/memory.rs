//! In-process scene
//!
//! `MemoryScene` implements [`SceneAdapter`] over plain collections. It is
//! serializable so a command-line host can keep it in a JSON file and run
//! the pipeline repeatedly against the same state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokens_tree::{PrimitiveKind, PrimitiveValue};
use tracing::debug;
use uuid::Uuid;

use crate::adapter::SceneAdapter;
use crate::error::{Error, Result, SceneOperation};
use crate::handle::{
    CollectionHandle, CollectionId, ModeId, NodeId, StyleHandle, StyleId, VariableHandle,
    VariableId,
};
use crate::property::{NodeProperty, PropertyValue};

/// A stored variable with its per-mode values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredVariable {
    pub id: VariableId,
    pub collection: CollectionId,
    pub name: String,
    pub kind: PrimitiveKind,
    #[serde(default)]
    pub values: BTreeMap<ModeId, PrimitiveValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoredCollection {
    id: CollectionId,
    name: String,
    default_mode: ModeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoredStyle {
    id: StyleId,
    name: String,
    variable: Option<VariableId>,
}

/// Kind of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Component,
    VariantSet,
}

/// A node on the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub children: Vec<NodeId>,
    #[serde(default)]
    pub bindings: BTreeMap<NodeProperty, VariableId>,
    #[serde(default)]
    pub literals: BTreeMap<NodeProperty, PropertyValue>,
}

/// Scene state held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryScene {
    #[serde(default)]
    collections: Vec<StoredCollection>,
    #[serde(default)]
    variables: Vec<StoredVariable>,
    #[serde(default)]
    styles: Vec<StoredStyle>,
    #[serde(default)]
    nodes: Vec<SceneNode>,
    /// Kept for the current process only; snapshots never carry them.
    #[serde(skip)]
    notifications: Vec<String>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

fn new_id(prefix: &str) -> String {
    format!("{}:{}", prefix, Uuid::new_v4())
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a scene from its JSON snapshot.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the scene to a pretty-printed JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// When the scene was last mutated.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    // Inspection helpers. Not part of the adapter contract.

    pub fn variables(&self) -> &[StoredVariable] {
        &self.variables
    }

    pub fn variable_named(&self, name: &str) -> Option<&StoredVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Value of a variable in its collection's default mode.
    pub fn default_value(&self, name: &str) -> Option<&PrimitiveValue> {
        let variable = self.variable_named(name)?;
        let collection = self
            .collections
            .iter()
            .find(|c| c.id == variable.collection)?;
        variable.values.get(&collection.default_mode)
    }

    /// Delete a variable by name (styles bound to it are left dangling).
    pub fn remove_variable(&mut self, name: &str) -> bool {
        let before = self.variables.len();
        self.variables.retain(|v| v.name != name);
        before != self.variables.len()
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// The variable a named style is bound to.
    pub fn style_variable(&self, name: &str) -> Option<&VariableId> {
        self.styles
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.variable.as_ref())
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn node(&self, id: &NodeId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Top-level nodes (direct page children) with this name.
    pub fn top_level_named(&self, name: &str) -> Vec<&SceneNode> {
        self.nodes
            .iter()
            .filter(|n| n.parent.is_none() && n.name == name)
            .collect()
    }

    /// Children of a node, in order.
    pub fn children_of(&self, id: &NodeId) -> Vec<&SceneNode> {
        self.node(id)
            .map(|n| n.children.iter().filter_map(|c| self.node(c)).collect())
            .unwrap_or_default()
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(|s| s.as_str())
    }

    fn collection_exists(&self, id: &CollectionId) -> bool {
        self.collections.iter().any(|c| &c.id == id)
    }

    fn node_mut(&mut self, id: &NodeId) -> Result<&mut SceneNode> {
        self.nodes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| Error::UnknownNode { id: id.to_string() })
    }

    fn descendants(&self, id: &NodeId) -> Vec<NodeId> {
        let mut out = vec![id.clone()];
        if let Some(node) = self.node(id) {
            for child in &node.children {
                out.extend(self.descendants(child));
            }
        }
        out
    }
}

impl SceneAdapter for MemoryScene {
    fn resolve_collection(&mut self, name: &str) -> Result<Option<CollectionHandle>> {
        Ok(self
            .collections
            .iter()
            .find(|c| c.name == name)
            .map(|c| CollectionHandle {
                id: c.id.clone(),
                name: c.name.clone(),
                default_mode: c.default_mode.clone(),
            }))
    }

    fn create_collection(&mut self, name: &str) -> Result<CollectionHandle> {
        let stored = StoredCollection {
            id: CollectionId::new(new_id("VariableCollectionId")),
            name: name.to_string(),
            default_mode: ModeId::new(new_id("Mode")),
        };
        let handle = CollectionHandle {
            id: stored.id.clone(),
            name: stored.name.clone(),
            default_mode: stored.default_mode.clone(),
        };
        self.collections.push(stored);
        self.touch();
        Ok(handle)
    }

    fn list_variables(&mut self, collection: &CollectionId) -> Result<Vec<VariableHandle>> {
        if !self.collection_exists(collection) {
            return Err(Error::UnknownCollection {
                id: collection.to_string(),
            });
        }
        Ok(self
            .variables
            .iter()
            .filter(|v| &v.collection == collection)
            .map(|v| VariableHandle {
                id: v.id.clone(),
                name: v.name.clone(),
                kind: v.kind,
            })
            .collect())
    }

    fn create_variable(
        &mut self,
        name: &str,
        collection: &CollectionId,
        kind: PrimitiveKind,
    ) -> Result<VariableHandle> {
        if !self.collection_exists(collection) {
            return Err(Error::UnknownCollection {
                id: collection.to_string(),
            });
        }
        let stored = StoredVariable {
            id: VariableId::new(new_id("VariableID")),
            collection: collection.clone(),
            name: name.to_string(),
            kind,
            values: BTreeMap::new(),
        };
        let handle = VariableHandle {
            id: stored.id.clone(),
            name: stored.name.clone(),
            kind,
        };
        self.variables.push(stored);
        self.touch();
        Ok(handle)
    }

    fn set_variable_value(
        &mut self,
        variable: &VariableId,
        mode: &ModeId,
        value: &PrimitiveValue,
    ) -> Result<()> {
        let stored = self
            .variables
            .iter_mut()
            .find(|v| &v.id == variable)
            .ok_or_else(|| Error::UnknownVariable {
                id: variable.to_string(),
            })?;
        if stored.kind != value.kind() {
            return Err(Error::operation(
                SceneOperation::SetVariableValue,
                format!(
                    "variable {} is {} but value is {}",
                    stored.name,
                    stored.kind,
                    value.kind()
                ),
            ));
        }
        stored.values.insert(mode.clone(), value.clone());
        self.touch();
        Ok(())
    }

    fn list_paint_styles(&mut self) -> Result<Vec<StyleHandle>> {
        Ok(self
            .styles
            .iter()
            .map(|s| StyleHandle {
                id: s.id.clone(),
                name: s.name.clone(),
            })
            .collect())
    }

    fn create_paint_style(&mut self, name: &str) -> Result<StyleHandle> {
        let stored = StoredStyle {
            id: StyleId::new(new_id("S")),
            name: name.to_string(),
            variable: None,
        };
        let handle = StyleHandle {
            id: stored.id.clone(),
            name: stored.name.clone(),
        };
        self.styles.push(stored);
        self.touch();
        Ok(handle)
    }

    fn bind_style_to_variable(&mut self, style: &StyleId, variable: &VariableId) -> Result<()> {
        if !self.variables.iter().any(|v| &v.id == variable) {
            return Err(Error::UnknownVariable {
                id: variable.to_string(),
            });
        }
        let stored = self
            .styles
            .iter_mut()
            .find(|s| &s.id == style)
            .ok_or_else(|| Error::UnknownStyle {
                id: style.to_string(),
            })?;
        stored.variable = Some(variable.clone());
        self.touch();
        Ok(())
    }

    fn bind_property(
        &mut self,
        node: &NodeId,
        property: NodeProperty,
        variable: &VariableId,
    ) -> Result<()> {
        if !self.variables.iter().any(|v| &v.id == variable) {
            return Err(Error::UnknownVariable {
                id: variable.to_string(),
            });
        }
        let stored = self.node_mut(node)?;
        stored.literals.remove(&property);
        stored.bindings.insert(property, variable.clone());
        self.touch();
        Ok(())
    }

    fn set_property(
        &mut self,
        node: &NodeId,
        property: NodeProperty,
        value: PropertyValue,
    ) -> Result<()> {
        let stored = self.node_mut(node)?;
        stored.bindings.remove(&property);
        stored.literals.insert(property, value);
        self.touch();
        Ok(())
    }

    fn create_component_node(&mut self, name: &str) -> Result<NodeId> {
        let id = NodeId::new(new_id("node"));
        self.nodes.push(SceneNode {
            id: id.clone(),
            name: name.to_string(),
            kind: NodeKind::Component,
            parent: None,
            children: Vec::new(),
            bindings: BTreeMap::new(),
            literals: BTreeMap::new(),
        });
        self.touch();
        Ok(id)
    }

    fn clone_node(&mut self, node: &NodeId) -> Result<NodeId> {
        let source = self
            .node(node)
            .cloned()
            .ok_or_else(|| Error::UnknownNode { id: node.to_string() })?;
        let id = NodeId::new(new_id("node"));
        self.nodes.push(SceneNode {
            id: id.clone(),
            parent: None,
            children: Vec::new(),
            ..source
        });
        self.touch();
        Ok(id)
    }

    fn rename_node(&mut self, node: &NodeId, name: &str) -> Result<()> {
        self.node_mut(node)?.name = name.to_string();
        self.touch();
        Ok(())
    }

    fn remove_node_by_name(&mut self, name: &str) -> Result<usize> {
        let roots: Vec<NodeId> = self
            .top_level_named(name)
            .into_iter()
            .map(|n| n.id.clone())
            .collect();
        let doomed: Vec<NodeId> = roots.iter().flat_map(|id| self.descendants(id)).collect();
        self.nodes.retain(|n| !doomed.contains(&n.id));
        if !roots.is_empty() {
            debug!(name, removed = roots.len(), "Removed top-level nodes");
            self.touch();
        }
        Ok(roots.len())
    }

    fn group_as_variant_set(&mut self, nodes: &[NodeId], name: &str) -> Result<NodeId> {
        if nodes.is_empty() {
            return Err(Error::operation(
                SceneOperation::GroupAsVariantSet,
                "a variant set needs at least one component",
            ));
        }
        for id in nodes {
            let node = self
                .node(id)
                .ok_or_else(|| Error::UnknownNode { id: id.to_string() })?;
            if node.kind != NodeKind::Component || node.parent.is_some() {
                return Err(Error::operation(
                    SceneOperation::GroupAsVariantSet,
                    format!("{} is not a free-standing component", node.name),
                ));
            }
        }

        let set_id = NodeId::new(new_id("node"));
        for id in nodes {
            self.node_mut(id)?.parent = Some(set_id.clone());
        }
        self.nodes.push(SceneNode {
            id: set_id.clone(),
            name: name.to_string(),
            kind: NodeKind::VariantSet,
            parent: None,
            children: nodes.to_vec(),
            bindings: BTreeMap::new(),
            literals: BTreeMap::new(),
        });
        self.touch();
        Ok(set_id)
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
