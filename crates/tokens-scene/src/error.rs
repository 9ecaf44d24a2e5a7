//! Error types for tokens-scene

use std::fmt;

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, Error>;

/// Adapter operations, used to name the call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneOperation {
    ResolveCollection,
    CreateCollection,
    ListVariables,
    CreateVariable,
    SetVariableValue,
    ListPaintStyles,
    CreatePaintStyle,
    BindStyleToVariable,
    BindProperty,
    SetProperty,
    CreateComponentNode,
    CloneNode,
    RenameNode,
    RemoveNodeByName,
    GroupAsVariantSet,
}

impl fmt::Display for SceneOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SceneOperation::ResolveCollection => "resolve_collection",
            SceneOperation::CreateCollection => "create_collection",
            SceneOperation::ListVariables => "list_variables",
            SceneOperation::CreateVariable => "create_variable",
            SceneOperation::SetVariableValue => "set_variable_value",
            SceneOperation::ListPaintStyles => "list_paint_styles",
            SceneOperation::CreatePaintStyle => "create_paint_style",
            SceneOperation::BindStyleToVariable => "bind_style_to_variable",
            SceneOperation::BindProperty => "bind_property",
            SceneOperation::SetProperty => "set_property",
            SceneOperation::CreateComponentNode => "create_component_node",
            SceneOperation::CloneNode => "clone_node",
            SceneOperation::RenameNode => "rename_node",
            SceneOperation::RemoveNodeByName => "remove_node_by_name",
            SceneOperation::GroupAsVariantSet => "group_as_variant_set",
        };
        write!(f, "{}", name)
    }
}

/// Errors raised by a scene adapter
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host rejected or failed a call
    #[error("Scene operation {operation} failed: {message}")]
    Operation {
        operation: SceneOperation,
        message: String,
    },

    #[error("Unknown collection: {id}")]
    UnknownCollection { id: String },

    #[error("Unknown variable: {id}")]
    UnknownVariable { id: String },

    #[error("Unknown style: {id}")]
    UnknownStyle { id: String },

    #[error("Unknown node: {id}")]
    UnknownNode { id: String },

    #[error("Scene snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl Error {
    pub fn operation(operation: SceneOperation, message: impl Into<String>) -> Self {
        Self::Operation {
            operation,
            message: message.into(),
        }
    }
}
