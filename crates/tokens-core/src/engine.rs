//! Command handler
//!
//! `SyncEngine` ties configuration, the family catalog and an adapter
//! together. Its typed entry points return `Result`; [`SyncEngine::run`]
//! turns any outcome into exactly one user notification.

use tokens_scene::SceneAdapter;
use tokens_tree::{Flattener, TokenSource};
use tracing::{error, info};

use crate::config::SyncConfig;
use crate::family::FamilyCatalog;
use crate::registry::{TokenSyncReport, sync_primitives};
use crate::synth::{SynthesisReport, VariantSynthesizer};
use crate::Result;

/// A command from the host shell.
#[derive(Debug, Clone)]
pub enum Command {
    /// Flatten a token source and upsert it into the collection
    SyncTokens(TokenSource),
    /// Rebuild one family's variant set
    SyncFamily(String),
    /// Rebuild every configured family, in order
    SyncAllFamilies,
}

/// What the user is told after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub message: String,
}

impl CommandOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Reports of a completed "sync all families" run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncAllReport {
    pub families: Vec<SynthesisReport>,
}

impl SyncAllReport {
    pub fn total_nodes(&self) -> usize {
        self.families.iter().map(|r| r.nodes_created).sum()
    }

    pub fn message(&self) -> String {
        format!(
            "Created {} variants across {} families",
            self.total_nodes(),
            self.families.len()
        )
    }
}

/// Runs token sync and family synthesis against an adapter.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    config: SyncConfig,
    catalog: FamilyCatalog,
}

impl SyncEngine {
    pub fn new(config: SyncConfig, catalog: FamilyCatalog) -> Self {
        Self { config, catalog }
    }

    /// Engine over the built-in families.
    pub fn with_builtins(config: SyncConfig) -> Result<Self> {
        Ok(Self::new(config, FamilyCatalog::with_builtins()?))
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FamilyCatalog {
        &self.catalog
    }

    fn synthesizer(&self) -> VariantSynthesizer {
        VariantSynthesizer::from_config(&self.config)
    }

    /// Flatten `source` and upsert every primitive.
    pub fn sync_tokens<A: SceneAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        source: &TokenSource,
    ) -> Result<TokenSyncReport> {
        let namespace = &self.config.namespace;
        let flattener = Flattener::new(self.config.flatten_options());
        let primitives = flattener.flatten(source.namespace_tree(namespace), namespace);

        sync_primitives(
            adapter,
            &self.config.collection,
            &primitives,
            &self.config.string_keywords,
        )
    }

    /// Rebuild the variant set of one family.
    pub fn sync_family<A: SceneAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        name: &str,
    ) -> Result<SynthesisReport> {
        let family = self.catalog.require(name)?;
        self.synthesizer().synthesize(adapter, family)
    }

    /// Rebuild every configured family in order, stopping at the first
    /// failure. Families finished before the failure stay in the scene.
    pub fn sync_all<A: SceneAdapter + ?Sized>(&self, adapter: &mut A) -> Result<SyncAllReport> {
        let mut report = SyncAllReport::default();
        for name in &self.config.families {
            let family = self.catalog.require(name)?;
            report
                .families
                .push(self.synthesizer().synthesize(adapter, family)?);
        }
        Ok(report)
    }

    /// Execute a command and notify the user exactly once.
    ///
    /// Errors never leave this function; they become the notification.
    pub fn run<A: SceneAdapter + ?Sized>(&self, adapter: &mut A, command: Command) -> CommandOutcome {
        let result = match &command {
            Command::SyncTokens(source) => self.sync_tokens(adapter, source).map(|r| r.message()),
            Command::SyncFamily(name) => self.sync_family(adapter, name).map(|r| r.message()),
            Command::SyncAllFamilies => self.sync_all(adapter).map(|r| r.message()),
        };

        let outcome = match result {
            Ok(message) => {
                info!(%message, "Command succeeded");
                CommandOutcome::success(message)
            }
            Err(e) => {
                error!(error = %e, "Command failed");
                CommandOutcome::failure(e.to_string())
            }
        };

        adapter.notify(&outcome.message);
        outcome
    }
}
