//! Request contract for the external AI generation service.
//!
//! The service itself is a collaborator; this module only shapes and checks
//! what is sent, and routes whatever comes back through the sanitizer.

use crate::document::DesignDocument;
use crate::error::{GenerationError, SanitizeError};
use crate::sanitize::sanitize_document;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the generator is asked for a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Fill a layout from structured fields.
    Structured,
    /// Free-form natural language prompt.
    Prompt,
}

/// Target canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationCanvas {
    pub width: f64,
    pub height: f64,
}

/// Fields for [`GenerationMode::Structured`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub mode: GenerationMode,
    pub canvas: GenerationCanvas,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

impl GenerationRequest {
    pub fn structured(width: f64, height: f64, input: StructuredInput) -> Self {
        Self {
            mode: GenerationMode::Structured,
            canvas: GenerationCanvas { width, height },
            structured: Some(input),
            prompt: None,
            template_id: None,
        }
    }

    pub fn prompt(width: f64, height: f64, prompt: impl Into<String>) -> Self {
        Self {
            mode: GenerationMode::Prompt,
            canvas: GenerationCanvas { width, height },
            structured: None,
            prompt: Some(prompt.into()),
            template_id: None,
        }
    }

    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Check the request is complete for its mode.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let canvas_ok = [self.canvas.width, self.canvas.height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0);
        if !canvas_ok {
            return Err(GenerationError::InvalidCanvas);
        }
        match self.mode {
            GenerationMode::Structured if self.structured.is_none() => {
                Err(GenerationError::MissingStructuredInput)
            }
            GenerationMode::Prompt
                if self.prompt.as_deref().is_none_or(|p| p.trim().is_empty()) =>
            {
                Err(GenerationError::EmptyPrompt)
            }
            _ => Ok(()),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Accept a raw generator response. Never load a generated document any
/// other way.
pub fn accept_generated(raw: &Value) -> Result<DesignDocument, SanitizeError> {
    let document = sanitize_document(raw)?;
    log::info!(
        "Accepted generated design with {} objects",
        document.objects.len()
    );
    Ok(document)
}
