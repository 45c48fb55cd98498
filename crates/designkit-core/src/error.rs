//! Error types.

use thiserror::Error;

/// Errors decoding or encoding a persisted document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported document version: {0}")]
    UnsupportedVersion(u32),
}

/// Structural rejection of an untrusted (AI-generated) document.
///
/// Only the top level is ever rejected; individual objects are dropped or
/// coerced instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("Generated document is not a JSON object")]
    NotAnObject,
    #[error("Generated document has no canvas")]
    MissingCanvas,
    #[error("Generated document objects is not an array")]
    ObjectsNotArray,
}

/// A component's `interactionConfig` does not fit its `interactionType`.
#[derive(Debug, Error)]
#[error("Invalid {interaction_type} configuration: {source}")]
pub struct InteractiveError {
    pub interaction_type: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// An AI generation request that cannot be sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Structured mode requires structured input")]
    MissingStructuredInput,
    #[error("Prompt mode requires a non-empty prompt")]
    EmptyPrompt,
    #[error("Canvas size must be positive")]
    InvalidCanvas,
}
