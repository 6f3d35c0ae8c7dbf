//! Gallery item model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identity of a gallery item, unique within one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric identifier
    Number(i64),
    /// String identifier
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

const fn default_span() -> u32 {
    1
}

/// An item in a gallery.
///
/// Items are immutable inputs to the layout engines: engines read them and
/// produce derived placement records, they never mutate the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Unique identifier
    pub id: ItemId,
    /// Source locator of the image
    pub src: String,
    /// Alternative text for the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Intrinsic width of the original image in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Intrinsic height of the original image in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Explicit aspect ratio (width / height), e.g. 16/9
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,
    /// Number of columns the item spans horizontally
    #[serde(default = "default_span")]
    pub col_span: u32,
    /// Number of rows the item spans vertically
    #[serde(default = "default_span")]
    pub row_span: u32,
    /// Additional properties, carried through layout untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GalleryItem {
    /// Create a new item with an id and image source.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            alt: None,
            width: None,
            height: None,
            aspect_ratio: None,
            col_span: 1,
            row_span: 1,
            extra: Map::new(),
        }
    }

    /// Set the alt text.
    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Set the intrinsic width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(0.0));
        self
    }

    /// Set the intrinsic height.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height.max(0.0));
        self
    }

    /// Set both intrinsic dimensions.
    #[must_use]
    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    /// Set an explicit aspect ratio (width / height).
    #[must_use]
    pub fn aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Set the column span (clamped to at least 1).
    #[must_use]
    pub fn col_span(mut self, span: u32) -> Self {
        self.col_span = span.max(1);
        self
    }

    /// Set the row span (clamped to at least 1).
    #[must_use]
    pub fn row_span(mut self, span: u32) -> Self {
        self.row_span = span.max(1);
        self
    }

    /// Attach an additional property.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The item's own aspect ratio, when one can be determined.
    ///
    /// The explicit ratio wins when it is finite and positive; otherwise the
    /// ratio is derived from intrinsic width and height. Items without
    /// usable dimensions yield `None` — a zero height is never divided by.
    #[must_use]
    pub fn intrinsic_ratio(&self) -> Option<f32> {
        if let Some(ratio) = self.aspect_ratio {
            if ratio.is_finite() && ratio > 0.0 {
                return Some(ratio);
            }
        }
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Some(w / h),
            _ => None,
        }
    }
}
