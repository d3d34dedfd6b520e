//! Error types for button configuration and rendering.

use thiserror::Error;

/// Error returned when a button configuration is rejected.
///
/// Both variants are raised before anything is rendered, so an invalid
/// configuration never produces an unstyled or unlabeled control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A color or variant value outside the recognized set.
    #[error("invalid {field} '{value}'")]
    InvalidConfiguration { field: &'static str, value: String },
    /// The label was absent, empty, or whitespace only.
    #[error("button label must not be empty")]
    MissingLabel,
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        ConfigError::InvalidConfiguration {
            field,
            value: value.to_string(),
        }
    }
}

/// Error type for the markup and untyped-input paths.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Template compilation or rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// The untyped arguments could not be deserialized.
    #[error("invalid button arguments: {0}")]
    Args(#[from] serde_json::Error),
}
