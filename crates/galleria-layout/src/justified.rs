//! Justified layout: row packing scaled to fill the container width.
//!
//! Items accumulate into rows at a target height until the next item would
//! overflow the available width; each completed row (the final row
//! included) is then scaled so items plus interior gutters fill the width
//! exactly, capped so no row grows past the maximum row height.

use galleria_core::{
    normalize, resolve_gutter, GalleryItem, ResponsiveValue, Size, DEFAULT_GUTTER,
};
use serde::{Deserialize, Serialize};

/// Target row height in pixels used when none is configured.
pub const DEFAULT_TARGET_ROW_HEIGHT: f32 = 200.0;

/// Maximum row height in pixels used when none is configured.
pub const DEFAULT_MAX_ROW_HEIGHT: f32 = 400.0;

/// Options for the justified engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JustifiedOptions {
    /// Target height for each row in pixels
    pub target_row_height: f32,
    /// Maximum height for each row in pixels
    pub max_row_height: f32,
    /// Padding around the container in pixels
    pub container_padding: f32,
    /// Spacing between items in pixels, possibly breakpoint-keyed
    pub gutter: ResponsiveValue<f32>,
}

impl Default for JustifiedOptions {
    fn default() -> Self {
        Self {
            target_row_height: DEFAULT_TARGET_ROW_HEIGHT,
            max_row_height: DEFAULT_MAX_ROW_HEIGHT,
            container_padding: 0.0,
            gutter: ResponsiveValue::Value(DEFAULT_GUTTER),
        }
    }
}

impl JustifiedOptions {
    /// Create options with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target row height.
    #[must_use]
    pub const fn with_target_row_height(mut self, height: f32) -> Self {
        self.target_row_height = height;
        self
    }

    /// Set the maximum row height.
    #[must_use]
    pub const fn with_max_row_height(mut self, height: f32) -> Self {
        self.max_row_height = height;
        self
    }

    /// Set the container padding.
    #[must_use]
    pub const fn with_container_padding(mut self, padding: f32) -> Self {
        self.container_padding = padding;
        self
    }

    /// Set the gutter.
    #[must_use]
    pub fn with_gutter(mut self, gutter: impl Into<ResponsiveValue<f32>>) -> Self {
        self.gutter = gutter.into();
        self
    }
}

/// A placed justified item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JustifiedPlacement<'a> {
    /// The item this placement was computed for
    pub item: &'a GalleryItem,
    /// Index of the item in the input collection
    pub index: usize,
    /// Scaled pixel width
    pub width: f32,
    /// Scaled pixel height (shared by the whole row)
    pub height: f32,
    /// Index of the row containing this item
    pub row: usize,
}

/// A completed row of justified items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JustifiedRow<'a> {
    /// Items in packing order
    pub placements: Vec<JustifiedPlacement<'a>>,
    /// Scaled row width: items plus interior gutters
    pub width: f32,
    /// Scaled row height
    pub height: f32,
}

/// Computed justified layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JustifiedLayout<'a> {
    /// Rows in top-to-bottom order
    pub rows: Vec<JustifiedRow<'a>>,
    /// Resolved gutter in pixels
    pub gutter: f32,
    /// Width available to rows: container width minus both paddings
    pub available_width: f32,
}

impl JustifiedLayout<'_> {
    /// Total number of placed items across all rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(|row| row.placements.len()).sum()
    }

    /// Whether the layout holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.placements.is_empty())
    }
}

/// Pack items into width-justified rows.
///
/// A column span widens an item for packing purposes by multiplying its
/// aspect ratio — there is no true multi-column placement in this engine.
/// A single item wider than the available width still forms its own row
/// and is shrunk to fit. Zero available width degenerates to zero-sized
/// rows; items are never dropped.
#[must_use]
pub fn compute_justified_layout<'a>(
    items: &'a [GalleryItem],
    options: &JustifiedOptions,
    container_width: f32,
    viewport: Option<Size>,
) -> JustifiedLayout<'a> {
    let gutter = resolve_gutter(&options.gutter, viewport);
    let available = (container_width - 2.0 * options.container_padding).max(0.0);
    let target = options.target_row_height.max(0.0);

    let mut rows: Vec<JustifiedRow<'a>> = Vec::new();
    let mut current: Vec<(usize, &'a GalleryItem, f32)> = Vec::new();
    let mut current_width = 0.0f32;

    for (index, normalized) in normalize(items).into_iter().enumerate() {
        let effective_ratio = normalized.aspect_ratio * normalized.col_span() as f32;
        let provisional_width = target * effective_ratio;

        let would_overflow = !current.is_empty()
            && current_width + provisional_width + gutter * current.len() as f32 > available;

        if would_overflow {
            flush_row(&mut rows, &current, current_width, available, gutter, options);
            current.clear();
            current_width = 0.0;
        }

        current.push((index, normalized.item, provisional_width));
        current_width += provisional_width;
    }

    if !current.is_empty() {
        flush_row(&mut rows, &current, current_width, available, gutter, options);
    }

    JustifiedLayout {
        rows,
        gutter,
        available_width: available,
    }
}

/// Scale a finished row to the available width, capped by the maximum row
/// height, and append it.
fn flush_row<'a>(
    rows: &mut Vec<JustifiedRow<'a>>,
    current: &[(usize, &'a GalleryItem, f32)],
    items_width: f32,
    available: f32,
    gutter: f32,
    options: &JustifiedOptions,
) {
    let raw_width = items_width + gutter * (current.len() - 1) as f32;
    let scale = row_scale(available, raw_width, options.target_row_height, options.max_row_height);
    let row_index = rows.len();
    let height = options.target_row_height.max(0.0) * scale;

    let placements = current
        .iter()
        .map(|&(index, item, width)| JustifiedPlacement {
            item,
            index,
            width: width * scale,
            height,
            row: row_index,
        })
        .collect();

    rows.push(JustifiedRow {
        placements,
        width: raw_width * scale,
        height,
    });
}

fn row_scale(available: f32, raw_width: f32, target: f32, max_height: f32) -> f32 {
    if raw_width <= 0.0 {
        return 0.0;
    }
    let width_bound = available / raw_width;
    if target <= 0.0 {
        return width_bound.max(0.0);
    }
    width_bound.min(max_height / target).max(0.0)
}
