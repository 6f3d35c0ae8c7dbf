//! Stack layout: wrap layout with fractional column-span widths.
//!
//! Each item's width is a percentage of the container scaled by its column
//! span, minus a proportional share of the gutters, so that N single-span
//! items plus N−1 gutters fill one row exactly. Heights follow the item's
//! intrinsic aspect ratio at whatever pixel width the host realizes.

use galleria_core::{
    normalize, resolve_columns, resolve_gutter, GalleryItem, ResponsiveValue, Size,
    DEFAULT_COLUMNS, DEFAULT_GUTTER,
};
use serde::{Deserialize, Serialize};

/// Horizontal alignment of items within the wrap container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackAlignment {
    /// Align to the start
    #[default]
    Start,
    /// Center items
    Center,
    /// Align to the end
    End,
}

/// Options for the stack engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackOptions {
    /// Number of columns, possibly breakpoint-keyed
    pub columns: ResponsiveValue<u32>,
    /// Spacing between items in pixels, possibly breakpoint-keyed
    pub gutter: ResponsiveValue<f32>,
    /// Upper bound on the container width in pixels, if any
    pub max_width: Option<f32>,
    /// Horizontal alignment of items
    pub alignment: StackAlignment,
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            columns: ResponsiveValue::Value(DEFAULT_COLUMNS),
            gutter: ResponsiveValue::Value(DEFAULT_GUTTER),
            max_width: None,
            alignment: StackAlignment::Start,
        }
    }
}

impl StackOptions {
    /// Create options with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column count.
    #[must_use]
    pub fn with_columns(mut self, columns: impl Into<ResponsiveValue<u32>>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Set the gutter.
    #[must_use]
    pub fn with_gutter(mut self, gutter: impl Into<ResponsiveValue<f32>>) -> Self {
        self.gutter = gutter.into();
        self
    }

    /// Set the maximum container width.
    #[must_use]
    pub const fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Set the alignment.
    #[must_use]
    pub const fn with_alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// A placed stack item: fractional width plus row-span adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StackPlacement<'a> {
    /// The item this placement was computed for
    pub item: &'a GalleryItem,
    /// Index of the item in the input collection
    pub index: usize,
    /// Width as a percentage of the container, before the gutter deduction
    pub width_percent: f32,
    /// Pixels deducted from the percentage width for gutter share
    pub width_offset: f32,
    /// Resolved aspect ratio, for deriving height from the realized width
    pub aspect_ratio: f32,
    /// Extra height in pixels granted by row spanning
    pub height_extension: f32,
    /// Bottom margin in pixels; negative when row spanning tucks the
    /// following row upward
    pub bottom_margin: f32,
}

/// Computed stack layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackLayout<'a> {
    /// One placement per input item, in input order
    pub placements: Vec<StackPlacement<'a>>,
    /// Resolved column count
    pub columns: u32,
    /// Resolved gutter in pixels
    pub gutter: f32,
    /// Upper bound on the container width in pixels, if any
    pub max_width: Option<f32>,
    /// Horizontal alignment of items
    pub alignment: StackAlignment,
}

/// Compute fractional widths for a wrap layout.
///
/// Row spanning is approximated: the item grows by one gutter per extra
/// row and pulls the following content up by the same amount. This is not
/// true multi-row placement — an accepted limitation of wrap layouts.
#[must_use]
pub fn compute_stack_layout<'a>(
    items: &'a [GalleryItem],
    options: &StackOptions,
    viewport: Option<Size>,
) -> StackLayout<'a> {
    let columns = resolve_columns(&options.columns, viewport);
    let gutter = resolve_gutter(&options.gutter, viewport);

    let placements = normalize(items)
        .into_iter()
        .enumerate()
        .map(|(index, normalized)| {
            let span = normalized.col_span().min(columns);
            let row_span = normalized.row_span();

            let width_percent = 100.0 / columns as f32 * span as f32;
            let width_offset = (columns - span) as f32 / columns as f32 * gutter;
            let height_extension = gutter * (row_span - 1) as f32;

            StackPlacement {
                item: normalized.item,
                index,
                width_percent,
                width_offset,
                aspect_ratio: normalized.aspect_ratio,
                height_extension,
                bottom_margin: -height_extension,
            }
        })
        .collect();

    StackLayout {
        placements,
        columns,
        gutter,
        max_width: options.max_width,
        alignment: options.alignment,
    }
}
