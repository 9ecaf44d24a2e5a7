//! Family catalog storage

use super::builtins::builtin_families;
use super::model::ComponentFamily;
use crate::{Error, Result};

/// Ordered set of component families, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct FamilyCatalog {
    families: Vec<ComponentFamily>,
}

impl FamilyCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in families.
    pub fn with_builtins() -> Result<Self> {
        let mut catalog = Self::new();
        for family in builtin_families()? {
            catalog.register(family)?;
        }
        Ok(catalog)
    }

    /// Register a family, replacing any family with the same name in place.
    ///
    /// The family is validated first; an invalid one leaves the catalog as is.
    pub fn register(&mut self, family: ComponentFamily) -> Result<()> {
        family.validate()?;
        match self.families.iter_mut().find(|f| f.name == family.name) {
            Some(existing) => *existing = family,
            None => self.families.push(family),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ComponentFamily> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Look up a family or fail with `UnknownFamily`.
    pub fn require(&self, name: &str) -> Result<&ComponentFamily> {
        self.get(name).ok_or_else(|| Error::UnknownFamily {
            name: name.to_string(),
        })
    }

    /// Family names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.families.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentFamily> {
        self.families.iter()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
