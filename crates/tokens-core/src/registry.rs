//! Variable and style registry
//!
//! Resolve-or-create against the design tool. At the start of a run the
//! registry lists every variable (and optionally every paint style) once and
//! keeps a `name -> handle` map; after that it only consults and extends
//! that map, never re-querying the tool.

use std::collections::{HashMap, HashSet};

use tokens_scene::{CollectionHandle, SceneAdapter, StyleHandle, VariableHandle};
use tokens_tree::{Primitive, PrimitiveKind, PrimitiveValue};
use tracing::{debug, info, warn};

use crate::naming::variable_name;
use crate::{Error, Result};

/// Result of an upsert: whether the handle was found or created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted<T> {
    Created(T),
    Reused(T),
}

impl<T> Upserted<T> {
    pub fn handle(&self) -> &T {
        match self {
            Upserted::Created(h) | Upserted::Reused(h) => h,
        }
    }

    pub fn into_handle(self) -> T {
        match self {
            Upserted::Created(h) | Upserted::Reused(h) => h,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Upserted::Created(_))
    }
}

/// Name-keyed cache of variables (and paint styles) for one collection.
#[derive(Debug, Clone)]
pub struct VariableRegistry {
    collection: CollectionHandle,
    variables: HashMap<String, VariableHandle>,
    styles: HashMap<String, StyleHandle>,
}

impl VariableRegistry {
    /// List the collection's variables once and cache them by name.
    pub fn hydrate<A: SceneAdapter + ?Sized>(
        adapter: &mut A,
        collection: CollectionHandle,
    ) -> Result<Self> {
        let variables: HashMap<String, VariableHandle> = adapter
            .list_variables(&collection.id)?
            .into_iter()
            .map(|v| (v.name.clone(), v))
            .collect();

        debug!(collection = %collection.name, count = variables.len(), "Hydrated variables");

        Ok(Self {
            collection,
            variables,
            styles: HashMap::new(),
        })
    }

    /// Also list every paint style once and cache them by name.
    pub fn with_styles<A: SceneAdapter + ?Sized>(mut self, adapter: &mut A) -> Result<Self> {
        self.styles = adapter
            .list_paint_styles()?
            .into_iter()
            .map(|s| (s.name.clone(), s))
            .collect();
        debug!(count = self.styles.len(), "Hydrated paint styles");
        Ok(self)
    }

    pub fn collection(&self) -> &CollectionHandle {
        &self.collection
    }

    pub fn get(&self, name: &str) -> Option<&VariableHandle> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Create the variable if needed, then write its default-mode value.
    ///
    /// The value is written whether the handle was reused or created. A
    /// variable that exists with a different kind is left untouched and
    /// reported as [`Error::KindConflict`].
    pub fn upsert_variable<A: SceneAdapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        name: &str,
        kind: PrimitiveKind,
        value: &PrimitiveValue,
    ) -> Result<Upserted<VariableHandle>> {
        let upserted = match self.variables.get(name) {
            Some(existing) if existing.kind != kind => {
                return Err(Error::KindConflict {
                    name: name.to_string(),
                    existing: existing.kind,
                    requested: kind,
                });
            }
            Some(existing) => Upserted::Reused(existing.clone()),
            None => {
                let created = adapter.create_variable(name, &self.collection.id, kind)?;
                self.variables.insert(name.to_string(), created.clone());
                Upserted::Created(created)
            }
        };

        adapter.set_variable_value(&upserted.handle().id, &self.collection.default_mode, value)?;
        debug!(name, created = upserted.was_created(), "Upserted variable");
        Ok(upserted)
    }

    /// Create the paint style if needed and bind it to `variable`.
    pub fn upsert_color_style<A: SceneAdapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        name: &str,
        variable: &VariableHandle,
    ) -> Result<Upserted<StyleHandle>> {
        let upserted = match self.styles.get(name) {
            Some(existing) => Upserted::Reused(existing.clone()),
            None => {
                let created = adapter.create_paint_style(name)?;
                self.styles.insert(name.to_string(), created.clone());
                Upserted::Created(created)
            }
        };

        adapter.bind_style_to_variable(&upserted.handle().id, &variable.id)?;
        Ok(upserted)
    }
}

/// Counts reported after a token sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSyncReport {
    pub variables_created: usize,
    pub variables_updated: usize,
    pub styles_created: usize,
    pub styles_updated: usize,
    /// Names skipped because a variable of another kind already owns them
    pub skipped: Vec<String>,
    /// String primitives that are not synchronized
    pub ignored: usize,
}

impl TokenSyncReport {
    pub fn variables(&self) -> usize {
        self.variables_created + self.variables_updated
    }

    pub fn styles(&self) -> usize {
        self.styles_created + self.styles_updated
    }

    /// One-line summary shown to the user.
    pub fn message(&self) -> String {
        let mut message = format!(
            "Synced {} variables ({} created, {} updated) and {} color styles ({} created, {} updated)",
            self.variables(),
            self.variables_created,
            self.variables_updated,
            self.styles(),
            self.styles_created,
            self.styles_updated,
        );
        if !self.skipped.is_empty() {
            message.push_str(&format!(", {} skipped", self.skipped.len()));
        }
        message
    }
}

/// Upsert every primitive into the named collection.
///
/// The collection is created when it does not exist yet. Colors also get a
/// mirrored paint style with the same name. Duplicate names resolve to the
/// last primitive written and are counted once.
pub fn sync_primitives<A: SceneAdapter + ?Sized>(
    adapter: &mut A,
    collection_name: &str,
    primitives: &[Primitive],
    string_keywords: &[String],
) -> Result<TokenSyncReport> {
    let collection = match adapter.resolve_collection(collection_name)? {
        Some(collection) => collection,
        None => {
            info!(collection = collection_name, "Creating variable collection");
            adapter.create_collection(collection_name)?
        }
    };

    let mut registry = VariableRegistry::hydrate(adapter, collection)?.with_styles(adapter)?;
    let mut report = TokenSyncReport::default();
    let mut synced: HashSet<String> = HashSet::new();

    for primitive in primitives {
        let Some(name) = variable_name(primitive, string_keywords) else {
            report.ignored += 1;
            continue;
        };

        let variable =
            match registry.upsert_variable(adapter, &name, primitive.kind(), &primitive.value) {
                Ok(upserted) => upserted,
                Err(Error::KindConflict {
                    name,
                    existing,
                    requested,
                }) => {
                    warn!(%name, %existing, %requested, "Skipping token with conflicting kind");
                    report.skipped.push(name);
                    continue;
                }
                Err(e) => return Err(e),
            };

        let first_write = synced.insert(name.clone());
        if !first_write {
            debug!(%name, "Overwriting value written earlier in this run");
        } else if variable.was_created() {
            report.variables_created += 1;
        } else {
            report.variables_updated += 1;
        }

        if primitive.kind() == PrimitiveKind::Color {
            let style = registry.upsert_color_style(adapter, &name, variable.handle())?;
            if first_write && style.was_created() {
                report.styles_created += 1;
            } else if first_write {
                report.styles_updated += 1;
            }
        }
    }

    info!(
        variables = report.variables(),
        styles = report.styles(),
        skipped = report.skipped.len(),
        "Token sync complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokens_scene::MemoryScene;

    #[test]
    fn test_report_message() {
        let report = TokenSyncReport {
            variables_created: 3,
            variables_updated: 2,
            styles_created: 1,
            styles_updated: 1,
            skipped: vec![],
            ignored: 4,
        };
        assert_eq!(
            report.message(),
            "Synced 5 variables (3 created, 2 updated) and 2 color styles (1 created, 1 updated)"
        );
    }

    #[test]
    fn test_report_message_mentions_skipped() {
        let report = TokenSyncReport {
            skipped: vec!["numbers/x".into()],
            ..TokenSyncReport::default()
        };
        assert!(report.message().ends_with(", 1 skipped"));
    }

    #[test]
    fn test_upsert_reuses_cached_handle() {
        let mut scene = MemoryScene::new();
        let collection = scene.create_collection("Design Tokens").unwrap();
        let mut registry = VariableRegistry::hydrate(&mut scene, collection).unwrap();

        let first = registry
            .upsert_variable(
                &mut scene,
                "numbers/spacing/4",
                PrimitiveKind::Number,
                &PrimitiveValue::Number(16.0),
            )
            .unwrap();
        let second = registry
            .upsert_variable(
                &mut scene,
                "numbers/spacing/4",
                PrimitiveKind::Number,
                &PrimitiveValue::Number(20.0),
            )
            .unwrap();

        assert!(first.was_created());
        assert!(!second.was_created());
        assert_eq!(first.handle(), second.handle());
        assert_eq!(registry.len(), 1);
        assert_eq!(
            scene.default_value("numbers/spacing/4"),
            Some(&PrimitiveValue::Number(20.0))
        );
    }

    #[test]
    fn test_upsert_rejects_kind_conflict() {
        let mut scene = MemoryScene::new();
        let collection = scene.create_collection("Design Tokens").unwrap();
        let mut registry = VariableRegistry::hydrate(&mut scene, collection).unwrap();
        registry
            .upsert_variable(
                &mut scene,
                "numbers/x",
                PrimitiveKind::Number,
                &PrimitiveValue::Number(1.0),
            )
            .unwrap();

        let err = registry
            .upsert_variable(
                &mut scene,
                "numbers/x",
                PrimitiveKind::String,
                &PrimitiveValue::String("x".into()),
            )
            .unwrap_err();
        assert!(matches!(err, Error::KindConflict { .. }));
        assert_eq!(scene.default_value("numbers/x"), Some(&PrimitiveValue::Number(1.0)));
    }

    #[test]
    fn test_repeated_name_counts_once() {
        let mut scene = MemoryScene::new();
        let primitives = [
            Primitive::new("spacing", "4", PrimitiveValue::Number(16.0)),
            Primitive::new("spacing", "4", PrimitiveValue::Number(18.0)),
        ];

        let report = sync_primitives(&mut scene, "Design Tokens", &primitives, &[]).unwrap();

        assert_eq!(report.variables_created, 1);
        assert_eq!(report.variables_updated, 0);
        assert_eq!(
            scene.default_value("numbers/spacing/4"),
            Some(&PrimitiveValue::Number(18.0))
        );
    }
}
