//! Component family description and its binding rules

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::axis::{AxisDefinition, AxisRole, VariantCombination, combination_count};
use crate::{Error, Result};

/// How a Variant label paints the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantStyle {
    /// Solid fill, no stroke
    Filled,
    /// Stroke only, no fill
    Outlined,
    /// Neither fill nor stroke
    Plain,
}

impl VariantStyle {
    pub fn has_fill(&self) -> bool {
        matches!(self, VariantStyle::Filled)
    }

    pub fn has_stroke(&self) -> bool {
        matches!(self, VariantStyle::Outlined)
    }
}

/// Variable names for the size-derived properties of one Size label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeMetrics {
    pub height: String,
    pub padding_x: String,
    pub padding_y: String,
    pub gap: String,
    pub font_size: String,
}

impl SizeMetrics {
    /// Metrics laid out as `<prefix>/{height,paddingX,paddingY,gap,fontSize}`.
    pub fn under(prefix: &str) -> Self {
        Self {
            height: format!("{}/height", prefix),
            padding_x: format!("{}/paddingX", prefix),
            padding_y: format!("{}/paddingY", prefix),
            gap: format!("{}/gap", prefix),
            font_size: format!("{}/fontSize", prefix),
        }
    }

    pub fn variables(&self) -> [&str; 5] {
        [
            &self.height,
            &self.padding_x,
            &self.padding_y,
            &self.gap,
            &self.font_size,
        ]
    }
}

/// Corner radius source. With a fallback the variable is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusRule {
    pub variable: String,
    pub fallback_px: Option<f64>,
}

/// Text and icon color selection keyed on the Color label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastRule {
    /// The one Color label that gets dark text
    pub bright_label: String,
    pub on_bright: String,
    pub on_dark: String,
}

impl ContrastRule {
    pub fn variable_for(&self, color_label: &str) -> &str {
        if color_label == self.bright_label {
            &self.on_bright
        } else {
            &self.on_dark
        }
    }
}

/// A family of visual components and everything needed to synthesize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentFamily {
    pub name: String,
    pub axes: Vec<AxisDefinition>,
    pub base: VariantCombination,
    pub variant_styles: Vec<(String, VariantStyle)>,
    pub colors: Vec<(String, String)>,
    pub sizes: Vec<(String, SizeMetrics)>,
    pub radii: Vec<(String, RadiusRule)>,
    /// Radius for families without a Radius axis
    pub fixed_radius: Option<RadiusRule>,
    pub contrast: ContrastRule,
}

fn rule<'a, T>(rules: &'a [(String, T)], label: &str) -> Option<&'a T> {
    rules.iter().find(|(l, _)| l == label).map(|(_, r)| r)
}

impl ComponentFamily {
    pub fn builder(name: impl Into<String>) -> ComponentFamilyBuilder {
        ComponentFamilyBuilder::new(name)
    }

    /// Total nodes one synthesis creates: the product of all domain sizes.
    pub fn combination_count(&self) -> usize {
        combination_count(&self.axes)
    }

    pub fn axis(&self, role: AxisRole) -> Option<&AxisDefinition> {
        self.axes.iter().find(|a| a.role == role)
    }

    fn domain(&self, role: AxisRole) -> &[String] {
        self.axis(role).map(|a| a.domain.as_slice()).unwrap_or(&[])
    }

    pub fn variant_style(&self, label: &str) -> Option<VariantStyle> {
        rule(&self.variant_styles, label).copied()
    }

    pub fn color_variable(&self, label: &str) -> Option<&str> {
        rule(&self.colors, label).map(|s| s.as_str())
    }

    pub fn size_metrics(&self, label: &str) -> Option<&SizeMetrics> {
        rule(&self.sizes, label)
    }

    /// Radius rule for a combination: the Radius axis label's rule, or the
    /// fixed rule when the family has no Radius axis.
    pub fn radius_rule(&self, combination: &VariantCombination) -> Option<&RadiusRule> {
        match combination.label_for(&self.axes, AxisRole::Radius) {
            Some(label) => rule(&self.radii, label),
            None => self.fixed_radius.as_ref(),
        }
    }

    /// Every variable that must exist before synthesis may begin, in a
    /// stable order: brand colors, size metrics, radii, then contrast.
    /// Radius variables with a literal fallback are not required.
    pub fn required_variables(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        let colors = self
            .domain(AxisRole::Color)
            .iter()
            .filter_map(|l| self.color_variable(l));
        let sizes = self
            .domain(AxisRole::Size)
            .iter()
            .filter_map(|l| self.size_metrics(l))
            .flat_map(|m| m.variables());
        let radii = self
            .domain(AxisRole::Radius)
            .iter()
            .filter_map(|l| rule(&self.radii, l))
            .chain(self.fixed_radius.iter())
            .filter(|r| r.fallback_px.is_none())
            .map(|r| r.variable.as_str());
        let contrast = [self.contrast.on_bright.as_str(), self.contrast.on_dark.as_str()];

        for name in colors.chain(sizes).chain(radii).chain(contrast) {
            if seen.insert(name) {
                out.push(name);
            }
        }
        out
    }

    /// Radius variables that fall back to a literal when absent.
    pub fn optional_variables(&self) -> Vec<&str> {
        self.radii
            .iter()
            .map(|(_, r)| r)
            .chain(self.fixed_radius.iter())
            .filter(|r| r.fallback_px.is_some())
            .map(|r| r.variable.as_str())
            .collect()
    }

    /// Check the family is internally consistent.
    pub fn validate(&self) -> Result<()> {
        let fail = |message: String| Err(Error::invalid_family(&self.name, message));

        if self.axes.is_empty() {
            return fail("a family needs at least one axis".into());
        }

        let mut axis_names = HashSet::new();
        for axis in &self.axes {
            if !axis_names.insert(axis.name.as_str()) {
                return fail(format!("axis {} is declared twice", axis.name));
            }
            if axis.domain.is_empty() {
                return fail(format!("axis {} has no labels", axis.name));
            }
            let mut labels = HashSet::new();
            if let Some(dup) = axis.domain.iter().find(|l| !labels.insert(l.as_str())) {
                return fail(format!("axis {} repeats label {}", axis.name, dup));
            }
        }

        for role in [AxisRole::Variant, AxisRole::Color, AxisRole::Size, AxisRole::Radius] {
            let count = self.axes.iter().filter(|a| a.role == role).count();
            let required = role != AxisRole::Radius;
            if count > 1 || (required && count == 0) {
                return fail(format!("expected exactly one {} axis, found {}", role, count));
            }
        }

        if self.base.len() != self.axes.len() {
            return fail(format!(
                "base combination has {} labels for {} axes",
                self.base.len(),
                self.axes.len()
            ));
        }
        for (axis, label) in self.axes.iter().zip(self.base.labels()) {
            if !axis.contains(label) {
                return fail(format!("base label {} is not in axis {}", label, axis.name));
            }
        }

        for axis in &self.axes {
            for label in &axis.domain {
                let covered = match axis.role {
                    AxisRole::Variant => self.variant_style(label).is_some(),
                    AxisRole::Color => self.color_variable(label).is_some(),
                    AxisRole::Size => self.size_metrics(label).is_some(),
                    AxisRole::Radius => rule(&self.radii, label).is_some(),
                };
                if !covered {
                    return fail(format!("no {} rule for label {}", axis.role, label));
                }
            }
        }

        let bright = &self.contrast.bright_label;
        if !self.axis(AxisRole::Color).is_some_and(|a| a.contains(bright)) {
            return fail(format!("contrast label {} is not a color label", bright));
        }

        Ok(())
    }
}

/// Builder for [`ComponentFamily`]; `build` validates.
#[derive(Debug, Clone)]
pub struct ComponentFamilyBuilder {
    family: ComponentFamily,
}

impl ComponentFamilyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            family: ComponentFamily {
                name: name.into(),
                axes: Vec::new(),
                base: VariantCombination::new(Vec::<String>::new()),
                variant_styles: Vec::new(),
                colors: Vec::new(),
                sizes: Vec::new(),
                radii: Vec::new(),
                fixed_radius: None,
                contrast: ContrastRule {
                    bright_label: String::new(),
                    on_bright: String::new(),
                    on_dark: String::new(),
                },
            },
        }
    }

    pub fn axis<L: Into<String>>(
        mut self,
        role: AxisRole,
        name: impl Into<String>,
        labels: impl IntoIterator<Item = L>,
    ) -> Self {
        self.family.axes.push(AxisDefinition::new(role, name, labels));
        self
    }

    pub fn base<L: Into<String>>(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.family.base = VariantCombination::new(labels);
        self
    }

    pub fn variant_style(mut self, label: impl Into<String>, style: VariantStyle) -> Self {
        self.family.variant_styles.push((label.into(), style));
        self
    }

    pub fn color(mut self, label: impl Into<String>, variable: impl Into<String>) -> Self {
        self.family.colors.push((label.into(), variable.into()));
        self
    }

    pub fn size(mut self, label: impl Into<String>, metrics: SizeMetrics) -> Self {
        self.family.sizes.push((label.into(), metrics));
        self
    }

    /// Radius label bound to a required variable.
    pub fn radius(mut self, label: impl Into<String>, variable: impl Into<String>) -> Self {
        self.family.radii.push((
            label.into(),
            RadiusRule {
                variable: variable.into(),
                fallback_px: None,
            },
        ));
        self
    }

    /// Radius label bound to an optional variable with a literal fallback.
    pub fn radius_or(
        mut self,
        label: impl Into<String>,
        variable: impl Into<String>,
        fallback_px: f64,
    ) -> Self {
        self.family.radii.push((
            label.into(),
            RadiusRule {
                variable: variable.into(),
                fallback_px: Some(fallback_px),
            },
        ));
        self
    }

    pub fn fixed_radius(mut self, variable: impl Into<String>, fallback_px: Option<f64>) -> Self {
        self.family.fixed_radius = Some(RadiusRule {
            variable: variable.into(),
            fallback_px,
        });
        self
    }

    pub fn contrast(
        mut self,
        bright_label: impl Into<String>,
        on_bright: impl Into<String>,
        on_dark: impl Into<String>,
    ) -> Self {
        self.family.contrast = ContrastRule {
            bright_label: bright_label.into(),
            on_bright: on_bright.into(),
            on_dark: on_dark.into(),
        };
        self
    }

    pub fn build(self) -> Result<ComponentFamily> {
        self.family.validate()?;
        Ok(self.family)
    }
}
