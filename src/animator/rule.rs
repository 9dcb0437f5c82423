//! Visibility rule - when does an element count as "in view"
//!
//! The trigger region is the viewport with its bottom edge pulled up by
//! `bottom_margin`. An element intersects once at least `threshold` of its
//! area lies inside that region. The browser's IntersectionObserver applies
//! this natively; the polling fallback applies it by hand.

use crate::config::AnimatorConfig;

/// Axis-aligned box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right >= x && bottom >= y).then(|| Self::new(x, y, right - x, bottom - y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityRule {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl VisibilityRule {
    pub fn from_config(config: &AnimatorConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin: config.bottom_margin_px,
        }
    }

    /// The viewport shrunk by the bottom margin
    pub fn trigger_region(&self, viewport_width: f64, viewport_height: f64) -> Rect {
        Rect::new(
            0.0,
            0.0,
            viewport_width,
            (viewport_height - self.bottom_margin).max(0.0),
        )
    }

    /// Share of the element's area inside the trigger region, in [0, 1]
    pub fn visible_ratio(&self, element: &Rect, viewport_width: f64, viewport_height: f64) -> f64 {
        let region = self.trigger_region(viewport_width, viewport_height);
        let Some(overlap) = element.intersection(&region) else {
            return 0.0;
        };
        let area = element.area();
        if area == 0.0 {
            // Zero-area targets count as fully visible when they touch the region
            return 1.0;
        }
        (overlap.area() / area).clamp(0.0, 1.0)
    }

    pub fn is_intersecting(
        &self,
        element: &Rect,
        viewport_width: f64,
        viewport_height: f64,
    ) -> bool {
        let ratio = self.visible_ratio(element, viewport_width, viewport_height);
        ratio > 0.0 && ratio >= self.threshold
    }

    /// `layout` is `None` for elements that are not rendered (`display: none`,
    /// detached). Those never intersect, whatever their zero rect says.
    pub fn layout_intersects(
        &self,
        layout: Option<&Rect>,
        viewport_width: f64,
        viewport_height: f64,
    ) -> bool {
        layout.is_some_and(|rect| self.is_intersecting(rect, viewport_width, viewport_height))
    }
}

impl Default for VisibilityRule {
    fn default() -> Self {
        Self::from_config(&AnimatorConfig::default())
    }
}
