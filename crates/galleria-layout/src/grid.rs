//! Grid layout: uniform cells with column/row spans.
//!
//! Placement is declarative — "span X columns, span Y rows" — with cell
//! assignment delegated to the host's grid flow (left-to-right, wrapping).
//! The engine computes the per-item pixel height from the spanned width and
//! the effective aspect ratio, or from a fixed item height when no ratio
//! applies.

use galleria_core::{
    resolve_columns, resolve_gutter, GalleryItem, ResponsiveValue, Size, DEFAULT_COLUMNS,
    DEFAULT_GUTTER,
};
use serde::{Deserialize, Serialize};

/// Fixed item height used when neither the item nor the options carry an
/// aspect ratio.
pub const DEFAULT_ITEM_HEIGHT: f32 = 200.0;

/// Options for the grid engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Number of columns, possibly breakpoint-keyed
    pub columns: ResponsiveValue<u32>,
    /// Spacing between items in pixels, possibly breakpoint-keyed
    pub gutter: ResponsiveValue<f32>,
    /// Fixed height for items without any aspect ratio
    pub item_height: f32,
    /// Engine-level aspect ratio applied to items without their own
    pub aspect_ratio: Option<f32>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: ResponsiveValue::Value(DEFAULT_COLUMNS),
            gutter: ResponsiveValue::Value(DEFAULT_GUTTER),
            item_height: DEFAULT_ITEM_HEIGHT,
            aspect_ratio: None,
        }
    }
}

impl GridOptions {
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

    /// Set the fixed item height.
    #[must_use]
    pub const fn with_item_height(mut self, height: f32) -> Self {
        self.item_height = height;
        self
    }

    /// Set the engine-level aspect ratio fallback.
    #[must_use]
    pub const fn with_aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }
}

/// A placed grid item: spans plus computed pixel height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPlacement<'a> {
    /// The item this placement was computed for
    pub item: &'a GalleryItem,
    /// Index of the item in the input collection
    pub index: usize,
    /// Columns spanned, clamped to the resolved column count
    pub col_span: u32,
    /// Rows spanned
    pub row_span: u32,
    /// Rendered pixel height, including gutters interior to the row span
    pub height: f32,
}

/// Computed grid layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout<'a> {
    /// One placement per input item, in input order
    pub placements: Vec<GridPlacement<'a>>,
    /// Resolved column count
    pub columns: u32,
    /// Resolved gutter in pixels
    pub gutter: f32,
    /// Width of a single cell in pixels
    pub cell_width: f32,
}

/// Compute declarative grid placements.
///
/// The effective aspect ratio is the item's own (explicit or derived from
/// intrinsic dimensions), else the engine-level fallback; items with
/// neither use the fixed `item_height`. Row spans multiply the base height
/// and absorb the gutters between the spanned rows.
#[must_use]
pub fn compute_grid_layout<'a>(
    items: &'a [GalleryItem],
    options: &GridOptions,
    container_width: f32,
    viewport: Option<Size>,
) -> GridLayout<'a> {
    let columns = resolve_columns(&options.columns, viewport);
    let gutter = resolve_gutter(&options.gutter, viewport);
    let cell_width =
        ((container_width - (columns - 1) as f32 * gutter) / columns as f32).max(0.0);
    let fallback_ratio = options
        .aspect_ratio
        .filter(|r| r.is_finite() && *r > 0.0);

    let placements = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let col_span = item.col_span.clamp(1, columns);
            let row_span = item.row_span.max(1);
            let spanned_width =
                col_span as f32 * cell_width + (col_span - 1) as f32 * gutter;

            let base_height = item
                .intrinsic_ratio()
                .or(fallback_ratio)
                .map_or(options.item_height, |ratio| spanned_width / ratio);
            let height = base_height * row_span as f32 + gutter * (row_span - 1) as f32;

            GridPlacement {
                item,
                index,
                col_span,
                row_span,
                height,
            }
        })
        .collect();

    GridLayout {
        placements,
        columns,
        gutter,
        cell_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(id: i64) -> GalleryItem {
        GalleryItem::new(id, format!("{id}.jpg"))
    }

    // ===== Span Tests =====

    #[test]
    fn test_col_span_clamped() {
        let items = vec![plain(0).col_span(3)];
        let options = GridOptions::new().with_columns(2);
        let layout = compute_grid_layout(&items, &options, 400.0, None);
        assert_eq!(layout.placements[0].col_span, 2);
    }

    #[test]
    fn test_row_span_passes_through() {
        let items = vec![plain(0).row_span(3)];
        let layout = compute_grid_layout(&items, &GridOptions::new(), 400.0, None);
        assert_eq!(layout.placements[0].row_span, 3);
    }

    // ===== Height Tests =====

    #[test]
    fn test_fixed_height_when_no_ratio() {
        let items = vec![plain(0)];
        let options = GridOptions::new().with_item_height(150.0);
        let layout = compute_grid_layout(&items, &options, 400.0, None);
        assert_eq!(layout.placements[0].height, 150.0);
    }

    #[test]
    fn test_height_from_item_ratio() {
        // 3 columns, gutter 0, width 600: cell width 200.
        let items = vec![plain(0).aspect_ratio(2.0)];
        let options = GridOptions::new().with_gutter(0.0);
        let layout = compute_grid_layout(&items, &options, 600.0, None);
        assert_eq!(layout.cell_width, 200.0);
        assert_eq!(layout.placements[0].height, 100.0);
    }

    #[test]
    fn test_height_from_derived_ratio() {
        let items = vec![plain(0).size(400.0, 200.0)];
        let options = GridOptions::new().with_gutter(0.0);
        let layout = compute_grid_layout(&items, &options, 600.0, None);
        assert_eq!(layout.placements[0].height, 100.0);
    }

    #[test]
    fn test_engine_ratio_fallback() {
        let items = vec![plain(0)];
        let options = GridOptions::new().with_gutter(0.0).with_aspect_ratio(4.0);
        let layout = compute_grid_layout(&items, &options, 600.0, None);
        assert_eq!(layout.placements[0].height, 50.0);
    }

    #[test]
    fn test_item_ratio_beats_engine_ratio() {
        let items = vec![plain(0).aspect_ratio(1.0)];
        let options = GridOptions::new().with_gutter(0.0).with_aspect_ratio(4.0);
        let layout = compute_grid_layout(&items, &options, 600.0, None);
        assert_eq!(layout.placements[0].height, 200.0);
    }

    #[test]
    fn test_spanned_width_includes_interior_gutter() {
        // 3 columns, gutter 10, width 620: cell width 200; a span-2 item is
        // 410 wide, so a 2.05 ratio brings it back to square cells.
        let items = vec![plain(0).col_span(2).aspect_ratio(4.1)];
        let options = GridOptions::new().with_gutter(10.0);
        let layout = compute_grid_layout(&items, &options, 620.0, None);
        assert_eq!(layout.cell_width, 200.0);
        assert_eq!(layout.placements[0].height, 100.0);
    }

    #[test]
    fn test_row_span_absorbs_gutters() {
        let items = vec![plain(0).row_span(2)];
        let options = GridOptions::new().with_gutter(10.0).with_item_height(100.0);
        let layout = compute_grid_layout(&items, &options, 400.0, None);
        assert_eq!(layout.placements[0].height, 210.0);
    }

    // ===== Edge Cases =====

    #[test]
    fn test_count_preserved_at_zero_width() {
        let items: Vec<_> = (0..4).map(plain).collect();
        let layout = compute_grid_layout(&items, &GridOptions::new(), 0.0, None);
        assert_eq!(layout.placements.len(), 4);
        assert_eq!(layout.cell_width, 0.0);
    }

    #[test]
    fn test_invalid_engine_ratio_ignored() {
        let items = vec![plain(0)];
        let options = GridOptions::new().with_aspect_ratio(0.0).with_item_height(120.0);
        let layout = compute_grid_layout(&items, &options, 400.0, None);
        assert_eq!(layout.placements[0].height, 120.0);
    }

    #[test]
    fn test_order_preserved() {
        let items: Vec<_> = (0..6).map(plain).collect();
        let layout = compute_grid_layout(&items, &GridOptions::new(), 400.0, None);
        let indices: Vec<usize> = layout.placements.iter().map(|p| p.index).collect();
        assert_eq!(indices, (0..6).collect::<Vec<_>>());
    }
}
