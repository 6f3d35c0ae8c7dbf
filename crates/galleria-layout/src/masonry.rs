//! Masonry layout: shortest-column greedy packing.
//!
//! Items are placed in input order into the column (or run of columns, for
//! spanned items) whose current height is lowest, producing absolute pixel
//! positions. The greedy heuristic is O(items × columns) and does not
//! guarantee a globally optimal packing.

use galleria_core::{
    normalize, resolve_columns, resolve_gutter, GalleryItem, Rect, ResponsiveValue, Size,
    DEFAULT_COLUMNS, DEFAULT_GUTTER,
};
use serde::{Deserialize, Serialize};

/// Options for the masonry engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasonryOptions {
    /// Number of columns, possibly breakpoint-keyed
    pub columns: ResponsiveValue<u32>,
    /// Spacing between items in pixels, possibly breakpoint-keyed
    pub gutter: ResponsiveValue<f32>,
}

impl Default for MasonryOptions {
    fn default() -> Self {
        Self {
            columns: ResponsiveValue::Value(DEFAULT_COLUMNS),
            gutter: ResponsiveValue::Value(DEFAULT_GUTTER),
        }
    }
}

impl MasonryOptions {
    /// Create options with the documented defaults (3 columns, 10px gutter).
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
}

/// A placed masonry item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MasonryPlacement<'a> {
    /// The item this placement was computed for
    pub item: &'a GalleryItem,
    /// Index of the item in the input collection
    pub index: usize,
    /// Absolute pixel position and size within the container
    pub rect: Rect,
    /// First column occupied
    pub column: usize,
    /// Number of columns occupied
    pub span: u32,
}

/// Computed masonry layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MasonryLayout<'a> {
    /// One placement per input item, in input order
    pub placements: Vec<MasonryPlacement<'a>>,
    /// Resolved column count
    pub columns: u32,
    /// Resolved gutter in pixels
    pub gutter: f32,
    /// Width of a single column in pixels
    pub column_width: f32,
    /// Container height: the tallest column, without the trailing gutter
    pub height: f32,
}

/// Pack items into columns, minimizing the height of the tallest column.
///
/// Single-span items go to the shortest column; spanned items scan every
/// run of adjacent columns and take the one whose tallest member is lowest.
/// Ties break toward the lowest column index, so identical inputs always
/// produce identical output. Row spans do not participate: item height
/// comes from the aspect ratio alone.
#[must_use]
pub fn compute_masonry_layout<'a>(
    items: &'a [GalleryItem],
    options: &MasonryOptions,
    container_width: f32,
    viewport: Option<Size>,
) -> MasonryLayout<'a> {
    let columns = resolve_columns(&options.columns, viewport);
    let gutter = resolve_gutter(&options.gutter, viewport);
    let column_count = columns as usize;
    let column_width =
        ((container_width - (columns - 1) as f32 * gutter) / columns as f32).max(0.0);

    let mut heights = vec![0.0f32; column_count];
    let mut placements = Vec::with_capacity(items.len());

    for (index, normalized) in normalize(items).into_iter().enumerate() {
        let span = normalized.col_span().min(columns) as usize;
        let (column, top) = best_start(&heights, span);

        let width = span as f32 * column_width + (span as f32 - 1.0) * gutter;
        let height = (column_width / normalized.aspect_ratio).round();
        let left = column as f32 * (column_width + gutter);

        for h in &mut heights[column..column + span] {
            *h = top + height + gutter;
        }

        placements.push(MasonryPlacement {
            item: normalized.item,
            index,
            rect: Rect::new(left, top, width, height),
            column,
            span: span as u32,
        });
    }

    let tallest = heights.iter().fold(0.0f32, |acc, &h| acc.max(h));
    MasonryLayout {
        placements,
        columns,
        gutter,
        column_width,
        height: (tallest - gutter).max(0.0),
    }
}

/// Find the starting column minimizing the max height over `span` columns.
/// Strict comparison keeps the lowest index on ties.
fn best_start(heights: &[f32], span: usize) -> (usize, f32) {
    let mut best_column = 0;
    let mut best_top = f32::INFINITY;
    for column in 0..=(heights.len() - span) {
        let top = heights[column..column + span]
            .iter()
            .fold(0.0f32, |acc, &h| acc.max(h));
        if top < best_top {
            best_top = top;
            best_column = column;
        }
    }
    (best_column, best_top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: i64) -> GalleryItem {
        GalleryItem::new(id, format!("{id}.jpg")).size(100.0, 100.0)
    }

    fn squares(count: i64) -> Vec<GalleryItem> {
        (0..count).map(square).collect()
    }

    fn two_columns_no_gutter() -> MasonryOptions {
        MasonryOptions::new().with_columns(2).with_gutter(0.0)
    }

    // ===== Placement Tests =====

    #[test]
    fn test_five_squares_two_columns() {
        let items = squares(5);
        let layout = compute_masonry_layout(&items, &two_columns_no_gutter(), 400.0, None);

        let columns: Vec<usize> = layout.placements.iter().map(|p| p.column).collect();
        assert_eq!(columns, vec![0, 1, 0, 1, 0]);

        // Column heights differ by at most one item height.
        let item_height = layout.placements[0].rect.height;
        assert_eq!(layout.height, 3.0 * item_height);
        assert_eq!(layout.placements[3].rect.bottom(), 2.0 * item_height);
    }

    #[test]
    fn test_input_order_preserved() {
        let mut items = squares(4);
        items[1] = items[1].clone().col_span(2);
        let layout = compute_masonry_layout(&items, &two_columns_no_gutter(), 400.0, None);
        let indices: Vec<usize> = layout.placements.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_spanned_item_takes_lowest_window() {
        // First item fills column 0; the span-2 item must start at column 1.
        let items = vec![
            square(0),
            square(1).col_span(2),
            square(2),
        ];
        let options = MasonryOptions::new().with_columns(3).with_gutter(0.0);
        let layout = compute_masonry_layout(&items, &options, 300.0, None);

        assert_eq!(layout.placements[0].column, 0);
        assert_eq!(layout.placements[1].column, 1);
        assert_eq!(layout.placements[1].span, 2);
        // Third square lands next to the first, under nothing.
        assert_eq!(layout.placements[2].column, 0);
        assert_eq!(layout.placements[2].rect.y, 100.0);
    }

    #[test]
    fn test_span_clamped_to_column_count() {
        let items = vec![square(0).col_span(5)];
        let layout = compute_masonry_layout(&items, &two_columns_no_gutter(), 400.0, None);
        assert_eq!(layout.placements[0].span, 2);
        assert_eq!(layout.placements[0].rect.width, 400.0);
    }

    #[test]
    fn test_gutter_arithmetic() {
        let items = squares(2);
        let options = MasonryOptions::new().with_columns(2).with_gutter(10.0);
        let layout = compute_masonry_layout(&items, &options, 410.0, None);

        assert_eq!(layout.column_width, 200.0);
        assert_eq!(layout.placements[0].rect.x, 0.0);
        assert_eq!(layout.placements[1].rect.x, 210.0);
        // Tallest column is 200 + 10 trailing gutter, trimmed back off.
        assert_eq!(layout.height, 200.0);
    }

    #[test]
    fn test_taller_items_render_taller() {
        let portrait = GalleryItem::new(0, "p.jpg").size(100.0, 200.0);
        let landscape = GalleryItem::new(1, "l.jpg").size(200.0, 100.0);
        let items = vec![portrait, landscape];
        let layout = compute_masonry_layout(&items, &two_columns_no_gutter(), 400.0, None);

        assert_eq!(layout.placements[0].rect.height, 400.0);
        assert_eq!(layout.placements[1].rect.height, 100.0);
    }

    #[test]
    fn test_row_span_ignored() {
        let items = vec![square(0), square(1).row_span(4)];
        let layout = compute_masonry_layout(&items, &two_columns_no_gutter(), 400.0, None);
        assert_eq!(
            layout.placements[0].rect.height,
            layout.placements[1].rect.height
        );
    }

    #[test]
    fn test_placements_never_overlap() {
        let mut items = squares(8);
        items[2] = items[2].clone().col_span(2);
        items[5] = items[5].clone().size(100.0, 300.0);
        let options = MasonryOptions::new().with_columns(3).with_gutter(10.0);
        let layout = compute_masonry_layout(&items, &options, 620.0, None);

        for a in &layout.placements {
            for b in &layout.placements {
                if a.index != b.index {
                    assert!(
                        !a.rect.intersects(&b.rect),
                        "items {} and {} overlap",
                        a.index,
                        b.index
                    );
                }
            }
        }
    }

    // ===== Responsive Tests =====

    #[test]
    fn test_columns_resolved_from_viewport() {
        use galleria_core::Breakpoints;
        let options = MasonryOptions::new()
            .with_columns(Breakpoints::new().with_default(1).at(768, 2))
            .with_gutter(0.0);
        let items = squares(4);

        let narrow = compute_masonry_layout(&items, &options, 400.0, Some(Size::new(500.0, 800.0)));
        assert_eq!(narrow.columns, 1);

        let wide = compute_masonry_layout(&items, &options, 400.0, Some(Size::new(1000.0, 800.0)));
        assert_eq!(wide.columns, 2);
    }

    // ===== Edge Cases =====

    #[test]
    fn test_empty_items() {
        let layout = compute_masonry_layout(&[], &MasonryOptions::default(), 400.0, None);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.height, 0.0);
    }

    #[test]
    fn test_zero_container_width_degenerates() {
        let items = squares(3);
        let layout = compute_masonry_layout(&items, &two_columns_no_gutter(), 0.0, None);
        assert_eq!(layout.placements.len(), 3);
        assert_eq!(layout.column_width, 0.0);
        for p in &layout.placements {
            assert_eq!(p.rect.width, 0.0);
            assert_eq!(p.rect.height, 0.0);
        }
    }

    #[test]
    fn test_deterministic() {
        let mut items = squares(10);
        items[3] = items[3].clone().col_span(3);
        items[7] = items[7].clone().size(300.0, 100.0);
        let options = MasonryOptions::new().with_columns(4).with_gutter(8.0);

        let first = compute_masonry_layout(&items, &options, 1024.0, None);
        let second = compute_masonry_layout(&items, &options, 1024.0, None);
        assert_eq!(first, second);
    }
}
