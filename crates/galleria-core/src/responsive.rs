//! Breakpoint-keyed configuration values.
//!
//! A [`ResponsiveValue`] is either a plain scalar or a set of breakpoints:
//! minimum viewport widths mapped to values, with an optional default that
//! applies below every breakpoint and in headless contexts.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column count used when none is configured.
pub const DEFAULT_COLUMNS: u32 = 3;

/// Gutter in pixels used when none is configured.
pub const DEFAULT_GUTTER: f32 = 10.0;

/// Breakpoint-keyed values with a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Breakpoints<T> {
    /// Fallback when no breakpoint matches or no viewport is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<T>,
    /// Minimum viewport width (px) mapped to the value taking effect there
    #[serde(default)]
    pub steps: BTreeMap<u32, T>,
}

impl<T> Default for Breakpoints<T> {
    fn default() -> Self {
        Self {
            default: None,
            steps: BTreeMap::new(),
        }
    }
}

impl<T> Breakpoints<T> {
    /// Create an empty breakpoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback value.
    #[must_use]
    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Add a value taking effect at the given minimum viewport width.
    #[must_use]
    pub fn at(mut self, min_width: u32, value: T) -> Self {
        self.steps.insert(min_width, value);
        self
    }
}

impl<T: Clone> Breakpoints<T> {
    /// Resolve against a viewport: the value of the largest breakpoint not
    /// exceeding the viewport width, else the default. A missing viewport
    /// (headless context) always resolves to the default.
    #[must_use]
    pub fn resolve(&self, viewport: Option<Size>) -> Option<T> {
        if let Some(vp) = viewport {
            let width = vp.width.max(0.0) as u32;
            if let Some((_, value)) = self.steps.range(..=width).next_back() {
                return Some(value.clone());
            }
        }
        self.default.clone()
    }
}

/// A value that may vary by viewport width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    /// The same value at every viewport width
    Value(T),
    /// Breakpoint-keyed values
    Breakpoints(Breakpoints<T>),
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Breakpoints<T>> for ResponsiveValue<T> {
    fn from(breakpoints: Breakpoints<T>) -> Self {
        Self::Breakpoints(breakpoints)
    }
}

impl<T: Clone> ResponsiveValue<T> {
    /// Resolve to a concrete value for the given viewport.
    ///
    /// Scalars resolve to themselves. Breakpoint sets without a matching
    /// breakpoint or default resolve to `None`; call sites apply their own
    /// documented fallback. Never panics.
    #[must_use]
    pub fn resolve(&self, viewport: Option<Size>) -> Option<T> {
        match self {
            Self::Value(value) => Some(value.clone()),
            Self::Breakpoints(breakpoints) => breakpoints.resolve(viewport),
        }
    }
}

/// Resolve a column count, falling back to [`DEFAULT_COLUMNS`].
#[must_use]
pub fn resolve_columns(columns: &ResponsiveValue<u32>, viewport: Option<Size>) -> u32 {
    columns.resolve(viewport).unwrap_or(DEFAULT_COLUMNS).max(1)
}

/// Resolve a gutter in pixels, falling back to [`DEFAULT_GUTTER`].
#[must_use]
pub fn resolve_gutter(gutter: &ResponsiveValue<f32>, viewport: Option<Size>) -> f32 {
    gutter.resolve(viewport).unwrap_or(DEFAULT_GUTTER).max(0.0)
}
