//! Axes, combinations and their cross product

use std::fmt;

use serde::{Deserialize, Serialize};

/// What an axis controls during binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisRole {
    /// Fill / stroke treatment
    Variant,
    /// Brand color
    Color,
    /// Metrics (height, padding, gap, font size)
    Size,
    /// Corner radius
    Radius,
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::Variant => write!(f, "variant"),
            AxisRole::Color => write!(f, "color"),
            AxisRole::Size => write!(f, "size"),
            AxisRole::Radius => write!(f, "radius"),
        }
    }
}

/// One independent dimension of variation with its ordered label domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDefinition {
    pub name: String,
    pub role: AxisRole,
    pub domain: Vec<String>,
}

impl AxisDefinition {
    pub fn new<L: Into<String>>(
        role: AxisRole,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = L>,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            domain: domain.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.domain.iter().any(|l| l == label)
    }
}

/// One label per axis, in axis declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantCombination(Vec<String>);

impl VariantCombination {
    pub fn new<L: Into<String>>(labels: impl IntoIterator<Item = L>) -> Self {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Label chosen for the axis with `role`, if the family has such an axis.
    pub fn label_for(&self, axes: &[AxisDefinition], role: AxisRole) -> Option<&str> {
        axes.iter()
            .position(|a| a.role == role)
            .and_then(|i| self.0.get(i))
            .map(|s| s.as_str())
    }
}

/// Number of combinations spanned by `axes`.
pub fn combination_count(axes: &[AxisDefinition]) -> usize {
    axes.iter().map(|a| a.domain.len()).product()
}

/// Every combination of `axes`, outer axis first.
///
/// The last axis varies fastest, exactly like nested loops written in
/// declaration order. Any empty domain yields no combinations.
pub fn cross_product(axes: &[AxisDefinition]) -> CrossProduct<'_> {
    CrossProduct {
        axes,
        indices: vec![0; axes.len()],
        remaining: combination_count(axes),
    }
}

/// Iterator returned by [`cross_product`].
#[derive(Debug, Clone)]
pub struct CrossProduct<'a> {
    axes: &'a [AxisDefinition],
    indices: Vec<usize>,
    remaining: usize,
}

impl Iterator for CrossProduct<'_> {
    type Item = VariantCombination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let current = VariantCombination(
            self.axes
                .iter()
                .zip(&self.indices)
                .map(|(axis, &i)| axis.domain[i].clone())
                .collect(),
        );

        // Odometer increment, innermost axis first
        for pos in (0..self.axes.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.axes[pos].domain.len() {
                break;
            }
            self.indices[pos] = 0;
        }

        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CrossProduct<'_> {}
