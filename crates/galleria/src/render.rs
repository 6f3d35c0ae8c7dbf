//! Rendering and notification seams.
//!
//! The engines compute geometry only; a host renders it. These interfaces
//! keep that collaboration explicit: a renderer turns `(item, index)` into
//! the host's visual, and click notification reports `(item, index)` back.

use crate::gallery::{Gallery, Placement};
use galleria_core::{GalleryItem, Size};
use serde::{Deserialize, Serialize};

/// Renders one gallery item to a host-specific visual.
///
/// Wrap a closure with [`renderer_fn`] to use it where an `ItemRenderer`
/// is expected.
pub trait ItemRenderer {
    /// The host's visual representation of one item
    type Output;

    /// Render one item at its index in the collection.
    fn render(&mut self, item: &GalleryItem, index: usize) -> Self::Output;
}

/// An [`ItemRenderer`] backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct RendererFn<F>(F);

/// Adapt a `(item, index)` closure into an [`ItemRenderer`].
pub fn renderer_fn<F, O>(f: F) -> RendererFn<F>
where
    F: FnMut(&GalleryItem, usize) -> O,
{
    RendererFn(f)
}

impl<F, O> ItemRenderer for RendererFn<F>
where
    F: FnMut(&GalleryItem, usize) -> O,
{
    type Output = O;

    fn render(&mut self, item: &GalleryItem, index: usize) -> O {
        (self.0)(item, index)
    }
}

/// Description of an image element: the default visual for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageView {
    /// Image source locator
    pub src: String,
    /// Alt text
    pub alt: String,
    /// Whether the host should lazy-load the image
    pub lazy: bool,
}

/// Default renderer: the image source with alt text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultRenderer {
    /// Request native lazy loading from the host
    pub lazy_load: bool,
}

impl DefaultRenderer {
    /// Create a default renderer without lazy loading.
    #[must_use]
    pub const fn new() -> Self {
        Self { lazy_load: false }
    }

    /// Enable or disable lazy loading.
    #[must_use]
    pub const fn with_lazy_load(mut self, lazy_load: bool) -> Self {
        self.lazy_load = lazy_load;
        self
    }
}

impl ItemRenderer for DefaultRenderer {
    type Output = ImageView;

    fn render(&mut self, item: &GalleryItem, index: usize) -> ImageView {
        ImageView {
            src: item.src.clone(),
            alt: item
                .alt
                .clone()
                .unwrap_or_else(|| format!("Gallery item {index}")),
            lazy: self.lazy_load,
        }
    }
}

/// A placement paired with its rendered visual.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem<'a, V> {
    /// Geometry and source item
    pub placement: Placement<'a>,
    /// The renderer's output
    pub visual: V,
}

impl Gallery {
    /// Run one layout pass and render every placement.
    pub fn render_with<'a, R: ItemRenderer>(
        &self,
        items: &'a [GalleryItem],
        container_width: f32,
        viewport: Option<Size>,
        renderer: &mut R,
    ) -> Vec<RenderedItem<'a, R::Output>> {
        self.compute(items, container_width, viewport)
            .placements()
            .map(|placement| {
                let visual = renderer.render(placement.item, placement.index);
                RenderedItem { placement, visual }
            })
            .collect()
    }
}

/// Invoke a click callback for the item at `index`.
///
/// Returns `false` without invoking the callback when the index is out of
/// bounds.
pub fn notify_click<F>(items: &[GalleryItem], index: usize, handler: &mut F) -> bool
where
    F: FnMut(&GalleryItem, usize),
{
    match items.get(index) {
        Some(item) => {
            handler(item, index);
            true
        }
        None => false,
    }
}
