//! Persisted document schema.

use crate::error::DocumentError;
use crate::shapes::{DesignObject, MIN_OBJECT_SIZE, ObjectId, ShapeTrait};
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Current document format version.
pub const DOCUMENT_VERSION: u32 = 1;

/// Default canvas width (mobile portrait).
pub const DEFAULT_CANVAS_WIDTH: f64 = 390.0;

/// Default canvas height (mobile portrait).
pub const DEFAULT_CANVAS_HEIGHT: f64 = 844.0;

/// Default canvas background.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

/// Canvas configuration. Width/height are a soft bound: objects may extend
/// outside but are not guaranteed to be visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// An uploaded asset referenced by image objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub url: String,
    #[serde(default)]
    pub name: String,
}

/// The persisted document: the exact shape produced by `get_document` and
/// consumed by `load_document`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    pub canvas: CanvasConfig,
    pub objects: Vec<DesignObject>,
    #[serde(default)]
    pub assets: BTreeMap<String, Asset>,
}

impl Default for DesignDocument {
    /// Empty mobile-sized canvas; the baseline for new designs.
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            canvas: CanvasConfig::default(),
            objects: Vec::new(),
            assets: BTreeMap::new(),
        }
    }
}

/// A structural problem found in a document.
///
/// These are reported, not rejected: loading tolerates them so that
/// previously accepted documents keep loading.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrityIssue {
    /// Two top-level objects share an ID.
    DuplicateId(ObjectId),
    /// Two children of one component share an ID.
    DuplicateChildId { component: ObjectId, child: ObjectId },
    /// A group references an ID missing from the component's children.
    DanglingGroupId {
        component: ObjectId,
        role: String,
        child: ObjectId,
    },
    /// Width or height below the minimum.
    DegenerateSize(ObjectId),
    /// Opacity outside `0..=1`.
    OpacityOutOfRange(ObjectId),
}

impl DesignDocument {
    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let doc: Self = serde_json::from_str(json)?;
        if doc.version != DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion(doc.version));
        }
        Ok(doc)
    }

    /// Serialize the document to pretty JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find a top-level object by ID.
    pub fn find(&self, id: &str) -> Option<&DesignObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Asset IDs referenced by image objects, including component children.
    pub fn referenced_assets(&self) -> HashSet<&str> {
        let mut ids = HashSet::new();
        for object in &self.objects {
            match object {
                DesignObject::Shape(shape) => {
                    if let crate::shapes::StaticObject::Image(image) = shape {
                        ids.insert(image.asset_id.as_str());
                    }
                }
                DesignObject::Interactive(component) => {
                    for child in &component.children {
                        if let crate::shapes::StaticObject::Image(image) = child {
                            ids.insert(image.asset_id.as_str());
                        }
                    }
                }
            }
        }
        ids.remove("");
        ids
    }

    /// Assets no image references. Tolerated, but worth pruning on save.
    pub fn orphaned_assets(&self) -> Vec<&str> {
        let referenced = self.referenced_assets();
        self.assets
            .keys()
            .map(String::as_str)
            .filter(|id| !referenced.contains(id))
            .collect()
    }

    /// Check the structural invariants and report every violation.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for object in &self.objects {
            let base = object.base();
            if !seen.insert(base.id.as_str()) {
                issues.push(IntegrityIssue::DuplicateId(base.id.clone()));
            }
            check_base(base, &mut issues);

            if let DesignObject::Interactive(component) = object {
                let mut child_ids = HashSet::new();
                for child in &component.children {
                    if !child_ids.insert(child.id()) {
                        issues.push(IntegrityIssue::DuplicateChildId {
                            component: base.id.clone(),
                            child: child.id().to_string(),
                        });
                    }
                    check_base(child.base(), &mut issues);
                }
                for (role, child) in component.dangling_group_ids() {
                    issues.push(IntegrityIssue::DanglingGroupId {
                        component: base.id.clone(),
                        role: role.to_string(),
                        child: child.to_string(),
                    });
                }
            }
        }
        issues
    }
}

fn check_base(base: &crate::shapes::ObjectBase, issues: &mut Vec<IntegrityIssue>) {
    if base.width < MIN_OBJECT_SIZE || base.height < MIN_OBJECT_SIZE {
        issues.push(IntegrityIssue::DegenerateSize(base.id.clone()));
    }
    if !(0.0..=1.0).contains(&base.opacity) {
        issues.push(IntegrityIssue::OpacityOutOfRange(base.id.clone()));
    }
}
