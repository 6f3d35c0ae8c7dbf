//! Viewport collaboration: size providers and resize coalescing.

use crate::gallery::{ComputedLayout, Gallery};
use galleria_core::{GalleryItem, Size};
use std::time::{Duration, Instant};

/// Supplies the current viewport dimensions.
pub trait ViewportSource {
    /// Current viewport, or `None` in a headless context.
    fn viewport(&self) -> Option<Size>;
}

/// A fixed viewport, for tests and static hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub Size);

impl ViewportSource for FixedViewport {
    fn viewport(&self) -> Option<Size> {
        Some(self.0)
    }
}

/// No viewport at all; responsive values resolve to their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headless;

impl ViewportSource for Headless {
    fn viewport(&self) -> Option<Size> {
        None
    }
}

impl Gallery {
    /// Run one layout pass against a viewport source.
    #[must_use]
    pub fn compute_with<'a>(
        &self,
        items: &'a [GalleryItem],
        container_width: f32,
        source: &impl ViewportSource,
    ) -> ComputedLayout<'a> {
        self.compute(items, container_width, source.viewport())
    }
}

/// Coalesces rapid resize events into a single recompute signal.
///
/// Purely timestamp-driven so any host event loop can drive it: feed every
/// resize through [`observe`](Self::observe), then ask
/// [`poll`](Self::poll) whether the quiescence window has elapsed. No
/// timers, no threads; recomputation stays caller-driven, and a superseded
/// burst is simply overwritten.
#[derive(Debug, Clone)]
pub struct ResizeCoalescer {
    quiescence: Duration,
    pending: Option<(Size, Instant)>,
}

impl ResizeCoalescer {
    /// Default quiescence window between resize bursts.
    pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

    /// Create a coalescer with the default window.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quiescence(Self::DEFAULT_QUIESCENCE)
    }

    /// Create a coalescer with a custom window.
    #[must_use]
    pub const fn with_quiescence(quiescence: Duration) -> Self {
        Self {
            quiescence,
            pending: None,
        }
    }

    /// Record a resize event observed at `now`.
    pub fn observe(&mut self, size: Size, now: Instant) {
        self.pending = Some((size, now));
    }

    /// The settled viewport, once the window has elapsed since the last
    /// event. Yields each burst's final size exactly once.
    pub fn poll(&mut self, now: Instant) -> Option<Size> {
        match self.pending {
            Some((size, last)) if now.duration_since(last) >= self.quiescence => {
                self.pending = None;
                Some(size)
            }
            _ => None,
        }
    }
}

impl Default for ResizeCoalescer {
    fn default() -> Self {
        Self::new()
    }
}
