//! Galleria: responsive image-gallery layouts for component-based hosts.
//!
//! Four deterministic layout engines — masonry, grid, stack and justified —
//! behind one dispatch surface. The host supplies items, per-layout options
//! and the current container width/viewport; Galleria returns pure
//! geometry, one placement per item, and the host renders it however it
//! likes. Nothing is cached and nothing is mutated: recompute whenever
//! items or the viewport change (see [`ResizeCoalescer`] for coalescing
//! resize bursts).
//!
//! # Example
//!
//! ```
//! use galleria::{DefaultRenderer, Gallery, GalleryItem, GalleryLayout};
//!
//! let items = vec![
//!     GalleryItem::new(1, "sunset.jpg").size(1600.0, 900.0).alt("Sunset"),
//!     GalleryItem::new(2, "dunes.jpg").size(900.0, 1600.0),
//!     GalleryItem::new(3, "reef.jpg").col_span(2),
//! ];
//!
//! let gallery = Gallery::new(GalleryLayout::Masonry);
//! let layout = gallery.compute(&items, 1200.0, None);
//! assert_eq!(layout.placements().len(), items.len());
//!
//! let rendered = gallery.render_with(&items, 1200.0, None, &mut DefaultRenderer::new());
//! assert_eq!(rendered[0].visual.alt, "Sunset");
//! ```

pub use galleria_core::{
    normalize, resolve_columns, resolve_gutter, Breakpoints, GalleryItem, ItemId, NormalizedItem,
    Rect, ResponsiveValue, Size, DEFAULT_ASPECT_RATIO, DEFAULT_COLUMNS, DEFAULT_GUTTER,
};
pub use galleria_layout as layout;
pub use galleria_layout::{
    compute_grid_layout, compute_justified_layout, compute_masonry_layout, compute_stack_layout,
    GridLayout, GridOptions, GridPlacement, JustifiedLayout, JustifiedOptions, JustifiedPlacement,
    JustifiedRow, MasonryLayout, MasonryOptions, MasonryPlacement, StackAlignment, StackLayout,
    StackOptions, StackPlacement,
};

mod gallery;
mod render;
mod viewport;

pub use gallery::{
    ComputedLayout, Gallery, GalleryLayout, Geometry, LayoutOptions, ParseLayoutError, Placement,
    Placements,
};
pub use render::{
    notify_click, renderer_fn, DefaultRenderer, ImageView, ItemRenderer, RenderedItem, RendererFn,
};
pub use viewport::{FixedViewport, Headless, ResizeCoalescer, ViewportSource};
