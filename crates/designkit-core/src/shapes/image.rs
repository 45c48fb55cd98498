//! Image object.

use super::{ObjectBase, Shadow};
use serde::{Deserialize, Serialize};

/// How the image fills its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
    Fill,
}

/// A raster image. `asset_id` links into the document's asset map; `src`
/// is the resolved URL the renderer loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    #[serde(default)]
    pub asset_id: String,
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub fit: ImageFit,
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl ImageObject {
    /// Link this image to an asset.
    pub fn with_asset(mut self, asset_id: impl Into<String>, src: impl Into<String>) -> Self {
        self.asset_id = asset_id.into();
        self.src = src.into();
        self
    }

    /// A placeholder has no source yet.
    pub fn is_placeholder(&self) -> bool {
        self.src.is_empty()
    }
}
