//! Item normalization: every item gets a usable aspect ratio.

use crate::item::GalleryItem;
use serde::Serialize;

/// Ratio applied when an item has no usable dimensions.
pub const DEFAULT_ASPECT_RATIO: f32 = 1.0;

/// A gallery item paired with its resolved aspect ratio.
///
/// Borrowed view over a caller-owned item; valid for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedItem<'a> {
    /// The underlying item
    pub item: &'a GalleryItem,
    /// Resolved aspect ratio (width / height), always finite and positive
    pub aspect_ratio: f32,
}

impl<'a> NormalizedItem<'a> {
    /// Resolve an item's aspect ratio, defaulting to square.
    #[must_use]
    pub fn from_item(item: &'a GalleryItem) -> Self {
        Self {
            item,
            aspect_ratio: item.intrinsic_ratio().unwrap_or(DEFAULT_ASPECT_RATIO),
        }
    }

    /// Column span of the underlying item (at least 1).
    #[must_use]
    pub fn col_span(&self) -> u32 {
        self.item.col_span.max(1)
    }

    /// Row span of the underlying item (at least 1).
    #[must_use]
    pub fn row_span(&self) -> u32 {
        self.item.row_span.max(1)
    }
}

/// Normalize a collection, preserving order.
///
/// Pure and non-mutating: the caller keeps ownership of the items.
#[must_use]
pub fn normalize(items: &[GalleryItem]) -> Vec<NormalizedItem<'_>> {
    items.iter().map(NormalizedItem::from_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_derives_ratio() {
        let items = vec![GalleryItem::new(1, "a.jpg").size(1600.0, 800.0)];
        let normalized = normalize(&items);
        assert_eq!(normalized[0].aspect_ratio, 2.0);
    }

    #[test]
    fn test_normalize_defaults_to_square() {
        let items = vec![GalleryItem::new(1, "a.jpg")];
        assert_eq!(normalize(&items)[0].aspect_ratio, 1.0);
    }

    #[test]
    fn test_normalize_keeps_explicit_ratio() {
        let items = vec![GalleryItem::new(1, "a.jpg").size(100.0, 100.0).aspect_ratio(1.5)];
        assert_eq!(normalize(&items)[0].aspect_ratio, 1.5);
    }

    #[test]
    fn test_normalize_zero_height_not_divided() {
        let items = vec![GalleryItem::new(1, "a.jpg").width(100.0).height(0.0)];
        assert_eq!(normalize(&items)[0].aspect_ratio, 1.0);
    }

    #[test]
    fn test_normalize_preserves_order_and_count() {
        let items: Vec<_> = (0..5)
            .map(|i| GalleryItem::new(i64::from(i), format!("{i}.jpg")))
            .collect();
        let normalized = normalize(&items);
        assert_eq!(normalized.len(), 5);
        for (i, n) in normalized.iter().enumerate() {
            assert!(std::ptr::eq(n.item, &items[i]));
        }
    }

    #[test]
    fn test_normalized_spans_clamped() {
        let mut item = GalleryItem::new(1, "a.jpg");
        item.col_span = 0;
        item.row_span = 0;
        let n = NormalizedItem::from_item(&item);
        assert_eq!(n.col_span(), 1);
        assert_eq!(n.row_span(), 1);
    }
}
