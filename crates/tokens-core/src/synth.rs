//! Variant matrix synthesizer
//!
//! Builds one variant set per component family: a base node, then a clone for
//! every other combination of axis labels, each bound to the variables its
//! labels select. The previous variant set of the same name is removed first,
//! so a re-run replaces rather than merges.

use tokens_scene::{NodeId, NodeProperty, PropertyValue, SceneAdapter, VariableId};
use tracing::{debug, info, warn};

use crate::config::SyncConfig;
use crate::family::{AxisRole, ComponentFamily, VariantCombination, cross_product};
use crate::naming::{construct_name, variant_label};
use crate::registry::VariableRegistry;
use crate::{Error, Result};

/// Outcome of synthesizing one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisReport {
    pub family: String,
    pub construct_name: String,
    pub nodes_created: usize,
    /// Top-level nodes removed before rebuilding
    pub removed_previous: usize,
    pub variant_set: NodeId,
}

impl SynthesisReport {
    pub fn message(&self) -> String {
        format!(
            "Created {} variants in {}",
            self.nodes_created, self.construct_name
        )
    }
}

/// Synthesizes component families against one variable collection.
#[derive(Debug, Clone)]
pub struct VariantSynthesizer {
    collection: String,
    namespace: String,
}

impl VariantSynthesizer {
    pub fn new(collection: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            namespace: namespace.into(),
        }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(&config.collection, &config.component_namespace)
    }

    /// Rebuild the variant set of `family`.
    ///
    /// An invalid family or a missing collection fails before anything is
    /// touched. A missing required variable fails after the old variant set
    /// is removed and before any node is created. An adapter failure inside the node loop
    /// is returned as is; nodes created up to that point stay ungrouped.
    pub fn synthesize<A: SceneAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        family: &ComponentFamily,
    ) -> Result<SynthesisReport> {
        family.validate()?;
        let construct = construct_name(&self.namespace, &family.name);

        let Some(collection) = adapter.resolve_collection(&self.collection)? else {
            warn!(collection = %self.collection, family = %family.name, "Collection not found");
            return Err(Error::MissingCollection {
                name: self.collection.clone(),
            });
        };

        let registry = VariableRegistry::hydrate(adapter, collection)?;
        let missing = family
            .required_variables()
            .into_iter()
            .find(|name| !registry.contains(name));

        let removed_previous = adapter.remove_node_by_name(&construct)?;
        if removed_previous > 0 {
            debug!(name = %construct, count = removed_previous, "Removed previous variant set");
        }

        if let Some(name) = missing {
            warn!(family = %family.name, variable = name, "Required variable missing");
            return Err(Error::MissingVariable {
                family: family.name.clone(),
                name: name.to_string(),
            });
        }

        let binder = Binder {
            registry: &registry,
            family,
        };

        let base = adapter.create_component_node(&variant_label(&family.axes, &family.base))?;
        binder.bind(adapter, &base, &family.base)?;

        let mut nodes = Vec::with_capacity(family.combination_count());
        nodes.push(base.clone());

        for combination in cross_product(&family.axes).filter(|c| *c != family.base) {
            let label = variant_label(&family.axes, &combination);
            let node = adapter.clone_node(&base)?;
            adapter.rename_node(&node, &label)?;
            binder.bind(adapter, &node, &combination)?;
            debug!(%label, "Created variant");
            nodes.push(node);
        }

        let variant_set = adapter.group_as_variant_set(&nodes, &construct)?;
        info!(family = %family.name, count = nodes.len(), name = %construct, "Synthesized variant set");

        Ok(SynthesisReport {
            family: family.name.clone(),
            construct_name: construct,
            nodes_created: nodes.len(),
            removed_previous,
            variant_set,
        })
    }
}

/// Applies a family's binding rules to one node.
struct Binder<'a> {
    registry: &'a VariableRegistry,
    family: &'a ComponentFamily,
}

impl Binder<'_> {
    fn missing(&self, name: &str) -> Error {
        Error::MissingVariable {
            family: self.family.name.clone(),
            name: name.to_string(),
        }
    }

    fn variable(&self, name: &str) -> Result<&VariableId> {
        self.registry
            .get(name)
            .map(|handle| &handle.id)
            .ok_or_else(|| self.missing(name))
    }

    fn label<'c>(&self, combination: &'c VariantCombination, role: AxisRole) -> Result<&'c str> {
        combination
            .label_for(&self.family.axes, role)
            .ok_or_else(|| Error::invalid_family(&self.family.name, format!("no {} axis", role)))
    }

    fn no_rule(&self, role: AxisRole, label: &str) -> Error {
        Error::invalid_family(
            &self.family.name,
            format!("no {} rule for label {}", role, label),
        )
    }

    fn bind<A: SceneAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        node: &NodeId,
        combination: &VariantCombination,
    ) -> Result<()> {
        self.bind_size(adapter, node, combination)?;
        self.bind_radius(adapter, node, combination)?;
        self.bind_paint(adapter, node, combination)
    }

    fn bind_size<A: SceneAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        node: &NodeId,
        combination: &VariantCombination,
    ) -> Result<()> {
        let size = self.label(combination, AxisRole::Size)?;
        let metrics = self
            .family
            .size_metrics(size)
            .ok_or_else(|| self.no_rule(AxisRole::Size, size))?;

        let bindings = [
            (NodeProperty::Height, &metrics.height),
            (NodeProperty::PaddingLeft, &metrics.padding_x),
            (NodeProperty::PaddingRight, &metrics.padding_x),
            (NodeProperty::PaddingTop, &metrics.padding_y),
            (NodeProperty::PaddingBottom, &metrics.padding_y),
            (NodeProperty::ItemSpacing, &metrics.gap),
            (NodeProperty::FontSize, &metrics.font_size),
        ];
        for (property, variable) in bindings {
            adapter.bind_property(node, property, self.variable(variable)?)?;
        }
        Ok(())
    }

    fn bind_radius<A: SceneAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        node: &NodeId,
        combination: &VariantCombination,
    ) -> Result<()> {
        let Some(rule) = self.family.radius_rule(combination) else {
            return Ok(());
        };

        match (self.registry.get(&rule.variable), rule.fallback_px) {
            (Some(handle), _) => {
                for corner in NodeProperty::CORNERS {
                    adapter.bind_property(node, corner, &handle.id)?;
                }
            }
            (None, Some(px)) => {
                for corner in NodeProperty::CORNERS {
                    adapter.set_property(node, corner, PropertyValue::Number(px))?;
                }
            }
            (None, None) => return Err(self.missing(&rule.variable)),
        }
        Ok(())
    }

    fn bind_paint<A: SceneAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        node: &NodeId,
        combination: &VariantCombination,
    ) -> Result<()> {
        let variant = self.label(combination, AxisRole::Variant)?;
        let color = self.label(combination, AxisRole::Color)?;
        let style = self
            .family
            .variant_style(variant)
            .ok_or_else(|| self.no_rule(AxisRole::Variant, variant))?;
        let brand = self
            .family
            .color_variable(color)
            .ok_or_else(|| self.no_rule(AxisRole::Color, color))?;
        let brand = self.variable(brand)?;

        for (property, enabled) in [
            (NodeProperty::Fill, style.has_fill()),
            (NodeProperty::Stroke, style.has_stroke()),
        ] {
            if enabled {
                adapter.bind_property(node, property, brand)?;
            } else {
                adapter.set_property(node, property, PropertyValue::Clear)?;
            }
        }

        let text = self.variable(self.family.contrast.variable_for(color))?;
        adapter.bind_property(node, NodeProperty::TextFill, text)?;
        adapter.bind_property(node, NodeProperty::IconFill, text)?;
        Ok(())
    }
}
