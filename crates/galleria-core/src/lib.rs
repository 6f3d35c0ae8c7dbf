//! Core types for the Galleria gallery layout engines.
//!
//! This crate provides the foundational types shared by every layout engine:
//! - Geometric primitives: [`Size`], [`Rect`]
//! - The item model: [`GalleryItem`], [`ItemId`], [`NormalizedItem`]
//! - Responsive configuration: [`ResponsiveValue`], [`Breakpoints`]
//!
//! Everything here is pure data and pure functions; engines read items and
//! produce derived records without mutating caller state.

mod geometry;
mod item;
mod normalize;
mod responsive;

pub use geometry::{Rect, Size};
pub use item::{GalleryItem, ItemId};
pub use normalize::{normalize, NormalizedItem, DEFAULT_ASPECT_RATIO};
pub use responsive::{
    resolve_columns, resolve_gutter, Breakpoints, ResponsiveValue, DEFAULT_COLUMNS, DEFAULT_GUTTER,
};
