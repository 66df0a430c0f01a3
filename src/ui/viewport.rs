//! Sentinel visibility geometry
//!
//! The grid ends in a fixed-height sentinel strip. Whenever that strip
//! is inside the viewport (expanded by a margin), the gallery reveals
//! the next batch. This module only does the geometry; the decision is
//! re-evaluated as a boolean level on every scroll event and on a
//! periodic tick. While no scroll event has supplied geometry (short
//! content cannot be scrolled at all), the sentinel container is
//! measured directly instead.
use iced::widget::{container, scrollable};
use iced::Rectangle;

/// Height of the load-more sentinel strip at the bottom of the grid
pub const SENTINEL_HEIGHT: f32 = 80.0;

/// Extra margin around the viewport when testing sentinel visibility
const VIEWPORT_MARGIN: f32 = 100.0;

/// Fraction of the sentinel that must be inside the expanded viewport
const SENTINEL_THRESHOLD: f32 = 0.1;

/// Id of the sentinel container, so its on-screen bounds can be
/// measured with a widget operation when no scroll geometry exists
pub fn sentinel_id() -> container::Id {
    container::Id::new("photo-grid-sentinel")
}

/// Whether a direct measurement of the sentinel container reports
/// enough of it on screen. `None` means the sentinel is clipped away
/// entirely (or not laid out yet).
pub fn sentinel_level(visible_bounds: Option<Rectangle>) -> bool {
    match visible_bounds {
        Some(visible) => visible.height >= SENTINEL_HEIGHT * SENTINEL_THRESHOLD,
        None => false,
    }
}

/// Geometry of the grid scrollable, captured from its scroll events
#[derive(Debug, Clone, Copy)]
pub struct GridViewport {
    /// Vertical scroll offset in content units
    pub offset_y: f32,
    /// Height of the visible viewport
    pub height: f32,
    /// Total height of the scrolled content
    pub content_height: f32,
}

impl From<scrollable::Viewport> for GridViewport {
    fn from(viewport: scrollable::Viewport) -> Self {
        Self {
            offset_y: viewport.absolute_offset().y,
            height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        }
    }
}

/// Whether the sentinel strip at the bottom of the grid content is
/// sufficiently inside the viewport, expanded by the margin.
pub fn sentinel_in_view(viewport: GridViewport) -> bool {
    let GridViewport {
        offset_y,
        height,
        content_height,
    } = viewport;

    let sentinel_top = (content_height - SENTINEL_HEIGHT).max(0.0);
    let sentinel_extent = content_height - sentinel_top;
    if sentinel_extent <= 0.0 {
        return false;
    }

    let view_top = offset_y - VIEWPORT_MARGIN;
    let view_bottom = offset_y + height + VIEWPORT_MARGIN;

    let overlap = (view_bottom.min(content_height) - sentinel_top.max(view_top)).max(0.0);
    overlap / sentinel_extent >= SENTINEL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(offset_y: f32, height: f32, content_height: f32) -> GridViewport {
        GridViewport {
            offset_y,
            height,
            content_height,
        }
    }

    #[test]
    fn content_shorter_than_viewport_exposes_the_sentinel() {
        // Everything is on screen, so more photos should keep loading
        assert!(sentinel_in_view(viewport(0.0, 900.0, 400.0)));
    }

    #[test]
    fn scrolled_to_the_top_of_tall_content_hides_the_sentinel() {
        assert!(!sentinel_in_view(viewport(0.0, 800.0, 5000.0)));
    }

    #[test]
    fn sentinel_counts_as_visible_within_the_margin() {
        // View bottom at 4950 against a sentinel spanning 4920..5000
        assert!(sentinel_in_view(viewport(4050.0, 800.0, 5000.0)));
    }

    #[test]
    fn sentinel_barely_inside_the_margin_is_below_threshold() {
        // Overlap of 5 units is less than 10% of the 80-unit strip
        assert!(!sentinel_in_view(viewport(4025.0, 800.0, 5000.0)));
    }

    #[test]
    fn scrolled_to_the_bottom_exposes_the_sentinel() {
        assert!(sentinel_in_view(viewport(4200.0, 800.0, 5000.0)));
    }

    #[test]
    fn empty_content_never_reports_the_sentinel() {
        assert!(!sentinel_in_view(viewport(0.0, 800.0, 0.0)));
    }

    fn measured(height: f32) -> Option<Rectangle> {
        Some(Rectangle::new(
            iced::Point::ORIGIN,
            iced::Size::new(1600.0, height),
        ))
    }

    #[test]
    fn fully_measured_sentinel_reports_the_level() {
        assert!(sentinel_level(measured(SENTINEL_HEIGHT)));
    }

    #[test]
    fn measurement_at_the_threshold_reports_the_level() {
        assert!(sentinel_level(measured(SENTINEL_HEIGHT * SENTINEL_THRESHOLD)));
    }

    #[test]
    fn sliver_below_the_threshold_does_not_report_the_level() {
        assert!(!sentinel_level(measured(4.0)));
    }

    #[test]
    fn clipped_away_sentinel_does_not_report_the_level() {
        assert!(!sentinel_level(None));
    }
}
