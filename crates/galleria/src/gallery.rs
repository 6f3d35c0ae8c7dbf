//! Gallery dispatch over the four layout engines.

use galleria_core::{GalleryItem, Rect, Size};
use galleria_layout::{
    compute_grid_layout, compute_justified_layout, compute_masonry_layout, compute_stack_layout,
    GridLayout, GridOptions, JustifiedLayout, JustifiedOptions, MasonryLayout, MasonryOptions,
    StackLayout, StackOptions,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available gallery layout algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    /// Shortest-column packing with absolute positions
    #[default]
    Masonry,
    /// Uniform cells with column/row spans
    Grid,
    /// Wrap layout with fractional widths
    Stack,
    /// Rows scaled to fill the container width
    Justified,
}

impl GalleryLayout {
    /// The layout's canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Masonry => "masonry",
            Self::Grid => "grid",
            Self::Stack => "stack",
            Self::Justified => "justified",
        }
    }

    /// Parse a layout name, falling back to masonry for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for GalleryLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a layout name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutError {
    name: String,
}

impl fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gallery layout: {}", self.name)
    }
}

impl std::error::Error for ParseLayoutError {}

impl FromStr for GalleryLayout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "masonry" => Ok(Self::Masonry),
            "grid" => Ok(Self::Grid),
            "stack" => Ok(Self::Stack),
            "justified" => Ok(Self::Justified),
            _ => Err(ParseLayoutError {
                name: s.to_string(),
            }),
        }
    }
}

/// Per-layout option records, keyed by layout name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Options for the masonry layout
    pub masonry: MasonryOptions,
    /// Options for the grid layout
    pub grid: GridOptions,
    /// Options for the stack layout
    pub stack: StackOptions,
    /// Options for the justified layout
    pub justified: JustifiedOptions,
}

/// A configured gallery: one layout plus options for every layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gallery {
    /// The layout algorithm in effect
    pub layout: GalleryLayout,
    /// Options, keyed by layout name
    pub options: LayoutOptions,
}

impl Gallery {
    /// Create a gallery with default options.
    #[must_use]
    pub fn new(layout: GalleryLayout) -> Self {
        Self {
            layout,
            options: LayoutOptions::default(),
        }
    }

    /// Create a gallery from a layout name, falling back to masonry.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::new(GalleryLayout::from_name(name))
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Run one layout pass.
    ///
    /// Pure: identical inputs produce identical geometry, and nothing is
    /// cached between calls — re-invoke whenever items, the container or
    /// the viewport change.
    #[must_use]
    pub fn compute<'a>(
        &self,
        items: &'a [GalleryItem],
        container_width: f32,
        viewport: Option<Size>,
    ) -> ComputedLayout<'a> {
        match self.layout {
            GalleryLayout::Masonry => ComputedLayout::Masonry(compute_masonry_layout(
                items,
                &self.options.masonry,
                container_width,
                viewport,
            )),
            GalleryLayout::Grid => ComputedLayout::Grid(compute_grid_layout(
                items,
                &self.options.grid,
                container_width,
                viewport,
            )),
            GalleryLayout::Stack => {
                ComputedLayout::Stack(compute_stack_layout(items, &self.options.stack, viewport))
            }
            GalleryLayout::Justified => ComputedLayout::Justified(compute_justified_layout(
                items,
                &self.options.justified,
                container_width,
                viewport,
            )),
        }
    }
}

/// Geometry computed for one item, in the shape its engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Geometry {
    /// Absolute pixel rect (masonry)
    Absolute {
        /// Position and size within the container
        rect: Rect,
        /// First column occupied
        column: usize,
        /// Number of columns occupied
        span: u32,
    },
    /// Declarative cell spans with a computed height (grid)
    Cell {
        /// Columns spanned
        col_span: u32,
        /// Rows spanned
        row_span: u32,
        /// Rendered pixel height
        height: f32,
    },
    /// Fractional width with auto height (stack)
    Fractional {
        /// Width as a percentage of the container
        width_percent: f32,
        /// Pixels deducted from the percentage width
        width_offset: f32,
        /// Aspect ratio for deriving height from the realized width
        aspect_ratio: f32,
        /// Extra height from row spanning
        height_extension: f32,
        /// Bottom margin; negative when row spanning pulls rows up
        bottom_margin: f32,
    },
    /// Fixed box within a scaled row (justified)
    Row {
        /// Scaled pixel width
        width: f32,
        /// Scaled pixel height
        height: f32,
        /// Row index, top to bottom
        row: usize,
    },
}

/// One placed item in a uniform shape across engines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement<'a> {
    /// The item this placement was computed for
    pub item: &'a GalleryItem,
    /// Index of the item in the input collection
    pub index: usize,
    /// Computed geometry
    pub geometry: Geometry,
}

/// The result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ComputedLayout<'a> {
    /// Masonry result
    Masonry(MasonryLayout<'a>),
    /// Grid result
    Grid(GridLayout<'a>),
    /// Stack result
    Stack(StackLayout<'a>),
    /// Justified result
    Justified(JustifiedLayout<'a>),
}

impl<'a> ComputedLayout<'a> {
    /// Which layout produced this result.
    #[must_use]
    pub const fn layout(&self) -> GalleryLayout {
        match self {
            Self::Masonry(_) => GalleryLayout::Masonry,
            Self::Grid(_) => GalleryLayout::Grid,
            Self::Stack(_) => GalleryLayout::Stack,
            Self::Justified(_) => GalleryLayout::Justified,
        }
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Masonry(layout) => layout.placements.len(),
            Self::Grid(layout) => layout.placements.len(),
            Self::Stack(layout) => layout.placements.len(),
            Self::Justified(layout) => layout.len(),
        }
    }

    /// Whether no items were placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate placements in a uniform shape, in placement order.
    ///
    /// The sequence is lazy and restartable: call this again (or clone the
    /// iterator) for another pass. Nothing is consumed from the layout.
    #[must_use]
    pub fn placements<'l>(&'l self) -> Placements<'l, 'a> {
        Placements {
            layout: self,
            index: 0,
            row: 0,
            slot: 0,
        }
    }
}

/// Lazy iterator over uniform placements.
#[derive(Debug, Clone)]
pub struct Placements<'l, 'a> {
    layout: &'l ComputedLayout<'a>,
    index: usize,
    row: usize,
    slot: usize,
}

impl<'l, 'a> Iterator for Placements<'l, 'a> {
    type Item = Placement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.layout {
            ComputedLayout::Masonry(layout) => {
                let p = layout.placements.get(self.index)?;
                self.index += 1;
                Some(Placement {
                    item: p.item,
                    index: p.index,
                    geometry: Geometry::Absolute {
                        rect: p.rect,
                        column: p.column,
                        span: p.span,
                    },
                })
            }
            ComputedLayout::Grid(layout) => {
                let p = layout.placements.get(self.index)?;
                self.index += 1;
                Some(Placement {
                    item: p.item,
                    index: p.index,
                    geometry: Geometry::Cell {
                        col_span: p.col_span,
                        row_span: p.row_span,
                        height: p.height,
                    },
                })
            }
            ComputedLayout::Stack(layout) => {
                let p = layout.placements.get(self.index)?;
                self.index += 1;
                Some(Placement {
                    item: p.item,
                    index: p.index,
                    geometry: Geometry::Fractional {
                        width_percent: p.width_percent,
                        width_offset: p.width_offset,
                        aspect_ratio: p.aspect_ratio,
                        height_extension: p.height_extension,
                        bottom_margin: p.bottom_margin,
                    },
                })
            }
            ComputedLayout::Justified(layout) => loop {
                let row = layout.rows.get(self.row)?;
                if let Some(p) = row.placements.get(self.slot) {
                    self.slot += 1;
                    return Some(Placement {
                        item: p.item,
                        index: p.index,
                        geometry: Geometry::Row {
                            width: p.width,
                            height: p.height,
                            row: p.row,
                        },
                    });
                }
                self.row += 1;
                self.slot = 0;
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Placements<'_, '_> {}

impl Placements<'_, '_> {
    fn remaining(&self) -> usize {
        match self.layout {
            ComputedLayout::Masonry(layout) => layout.placements.len().saturating_sub(self.index),
            ComputedLayout::Grid(layout) => layout.placements.len().saturating_sub(self.index),
            ComputedLayout::Stack(layout) => layout.placements.len().saturating_sub(self.index),
            ComputedLayout::Justified(layout) => layout
                .rows
                .iter()
                .skip(self.row)
                .map(|row| row.placements.len())
                .sum::<usize>()
                .saturating_sub(self.slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: i64) -> Vec<GalleryItem> {
        (0..count)
            .map(|i| GalleryItem::new(i, format!("{i}.jpg")).size(400.0, 300.0))
            .collect()
    }

    // ===== Layout Name Tests =====

    #[test]
    fn test_layout_parse_known_names() {
        assert_eq!("masonry".parse(), Ok(GalleryLayout::Masonry));
        assert_eq!("grid".parse(), Ok(GalleryLayout::Grid));
        assert_eq!("stack".parse(), Ok(GalleryLayout::Stack));
        assert_eq!("justified".parse(), Ok(GalleryLayout::Justified));
    }

    #[test]
    fn test_layout_parse_unknown_name() {
        let err = "carousel".parse::<GalleryLayout>().unwrap_err();
        assert_eq!(err.to_string(), "unknown gallery layout: carousel");
    }

    #[test]
    fn test_layout_from_name_falls_back_to_masonry() {
        assert_eq!(GalleryLayout::from_name("carousel"), GalleryLayout::Masonry);
        assert_eq!(GalleryLayout::from_name("grid"), GalleryLayout::Grid);
    }

    #[test]
    fn test_layout_display_roundtrip() {
        for layout in [
            GalleryLayout::Masonry,
            GalleryLayout::Grid,
            GalleryLayout::Stack,
            GalleryLayout::Justified,
        ] {
            assert_eq!(GalleryLayout::from_name(&layout.to_string()), layout);
        }
    }

    // ===== Dispatch Tests =====

    #[test]
    fn test_compute_dispatches_each_engine() {
        let items = items(4);
        for (layout, expected) in [
            (GalleryLayout::Masonry, "masonry"),
            (GalleryLayout::Grid, "grid"),
            (GalleryLayout::Stack, "stack"),
            (GalleryLayout::Justified, "justified"),
        ] {
            let computed = Gallery::new(layout).compute(&items, 800.0, None);
            assert_eq!(computed.layout().as_str(), expected);
            assert_eq!(computed.len(), 4);
        }
    }

    #[test]
    fn test_default_gallery_is_masonry() {
        let sample = items(1);
        let computed = Gallery::default().compute(&sample, 800.0, None);
        assert_eq!(computed.layout(), GalleryLayout::Masonry);
    }

    // ===== Placements Iterator Tests =====

    #[test]
    fn test_placements_cover_every_item_in_order() {
        let items = items(7);
        for layout in [
            GalleryLayout::Masonry,
            GalleryLayout::Grid,
            GalleryLayout::Stack,
            GalleryLayout::Justified,
        ] {
            let computed = Gallery::new(layout).compute(&items, 800.0, None);
            let indices: Vec<usize> = computed.placements().map(|p| p.index).collect();
            assert_eq!(indices, (0..7).collect::<Vec<_>>(), "{layout}");
        }
    }

    #[test]
    fn test_placements_restartable() {
        let items = items(5);
        let computed = Gallery::new(GalleryLayout::Justified).compute(&items, 800.0, None);

        let first: Vec<_> = computed.placements().collect();
        let second: Vec<_> = computed.placements().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_placements_exact_size() {
        let items = items(6);
        let computed = Gallery::new(GalleryLayout::Justified).compute(&items, 800.0, None);

        let mut placements = computed.placements();
        assert_eq!(placements.len(), 6);
        placements.next();
        placements.next();
        assert_eq!(placements.len(), 4);
    }

    #[test]
    fn test_placements_geometry_matches_engine() {
        let items = items(2);
        let computed = Gallery::new(GalleryLayout::Masonry).compute(&items, 800.0, None);
        for placement in computed.placements() {
            assert!(matches!(placement.geometry, Geometry::Absolute { .. }));
        }
    }

    // ===== Serde Tests =====

    #[test]
    fn test_gallery_config_from_json() {
        let gallery: Gallery = serde_json::from_str(
            r#"{
                "layout": "justified",
                "options": {
                    "justified": {
                        "target_row_height": 240.0,
                        "gutter": 6.0
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(gallery.layout, GalleryLayout::Justified);
        assert_eq!(gallery.options.justified.target_row_height, 240.0);
        // Untouched layouts keep their defaults.
        assert_eq!(gallery.options.grid.item_height, 200.0);
    }

    #[test]
    fn test_gallery_config_roundtrip() {
        let gallery = Gallery::new(GalleryLayout::Stack);
        let json = serde_json::to_string(&gallery).unwrap();
        let back: Gallery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gallery);
    }
}
