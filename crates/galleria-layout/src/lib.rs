#![allow(clippy::suboptimal_flops)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
//! Layout engines for Galleria image galleries.
//!
//! Four deterministic placement algorithms over a shared item model:
//!
//! - **Masonry**: shortest-column greedy packing with absolute pixel
//!   positions ([`compute_masonry_layout`])
//! - **Grid**: uniform cells with column/row spans and aspect-driven
//!   heights ([`compute_grid_layout`])
//! - **Stack**: wrap layout with fractional column-span widths
//!   ([`compute_stack_layout`])
//! - **Justified**: row packing scaled to exactly fill the container
//!   width ([`compute_justified_layout`])
//!
//! Every engine is a pure function of `(items, options, container,
//! viewport)`. Results borrow the input items and are computed fresh on
//! each call; callers re-invoke on item or viewport change and own the
//! result for the duration of one render pass.

mod grid;
mod justified;
mod masonry;
mod stack;

pub use grid::{compute_grid_layout, GridLayout, GridOptions, GridPlacement, DEFAULT_ITEM_HEIGHT};
pub use justified::{
    compute_justified_layout, JustifiedLayout, JustifiedOptions, JustifiedPlacement, JustifiedRow,
    DEFAULT_MAX_ROW_HEIGHT, DEFAULT_TARGET_ROW_HEIGHT,
};
pub use masonry::{compute_masonry_layout, MasonryLayout, MasonryOptions, MasonryPlacement};
pub use stack::{compute_stack_layout, StackAlignment, StackLayout, StackOptions, StackPlacement};
