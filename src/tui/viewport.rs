//! Scroll state for the virtual page: current offset, smooth-scroll
//! animation toward anchor targets, and the sticky header's hide/show rule.

use crate::site::page::UNITS_PER_ROW;

/// The header only hides once the page has scrolled down past this offset.
pub const HEADER_FLOOR: i64 = 100;

/// Units moved by one arrow key press or mouse wheel notch.
pub const SCROLL_STEP: i64 = 30;

/// Smooth scrolling covers a quarter of the remaining distance per tick,
/// with a floor so it always settles.
const SMOOTH_MIN_STEP: i64 = 24;

#[derive(Debug)]
pub struct Viewport {
    offset: i64,
    last_offset: i64,
    target: Option<i64>,
    height_units: i64,
    page_height: i64,
    header_hidden: bool,
}

impl Viewport {
    #[must_use]
    pub fn new(page_height: i64) -> Self {
        Self {
            offset: 0,
            last_offset: 0,
            target: None,
            height_units: 0,
            page_height,
            header_hidden: false,
        }
    }

    /// Matches the viewport to the terminal's content area. Returns true if
    /// the height changed (first draw included).
    pub fn resize(&mut self, rows: u16) -> bool {
        let height = i64::from(rows) * i64::from(UNITS_PER_ROW);
        if height == self.height_units {
            return false;
        }
        self.height_units = height;
        self.offset = self.offset.min(self.max_offset());
        true
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    #[must_use]
    pub fn last_offset(&self) -> i64 {
        self.last_offset
    }

    #[must_use]
    pub fn height_units(&self) -> i64 {
        self.height_units
    }

    #[must_use]
    pub fn header_hidden(&self) -> bool {
        self.header_hidden
    }

    fn max_offset(&self) -> i64 {
        (self.page_height - self.height_units).max(0)
    }

    /// Manual scrolling: moves immediately and abandons any smooth-scroll
    /// target in flight.
    pub fn scroll_by(&mut self, delta: i64) {
        self.target = None;
        self.set_offset(self.offset + delta);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.height_units);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.height_units);
    }

    /// Begins an animated scroll that brings `top` to the viewport's top edge.
    pub fn scroll_to(&mut self, top: i64) {
        self.target = Some(top.clamp(0, self.max_offset()));
    }

    /// Advances the smooth-scroll animation one step. Returns true when the
    /// offset moved, so callers can re-run their scroll-event handlers.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let remaining = target - self.offset;
        if remaining == 0 {
            self.target = None;
            return false;
        }
        let step = (remaining.abs() / 4)
            .max(SMOOTH_MIN_STEP)
            .min(remaining.abs());
        let step = if remaining < 0 { -step } else { step };
        self.set_offset(self.offset + step);
        if self.offset == target {
            self.target = None;
        }
        true
    }

    /// Every offset change runs the sticky-header rule: hide when moving
    /// down past the floor, show otherwise. No debouncing.
    fn set_offset(&mut self, next: i64) {
        let next = next.clamp(0, self.max_offset());
        self.header_hidden = next > self.offset && next > HEADER_FLOOR;
        self.last_offset = self.offset;
        self.offset = next;
    }
}

#[cfg(test)]
mod tests {
    use super::{Viewport, HEADER_FLOOR, SCROLL_STEP};

    fn viewport() -> Viewport {
        let mut viewport = Viewport::new(1560);
        viewport.resize(40);
        viewport
    }

    #[test]
    fn header_hides_scrolling_down_past_the_floor_and_returns_on_the_way_up() {
        let mut viewport = viewport();

        viewport.scroll_by(HEADER_FLOOR - 10);
        assert!(!viewport.header_hidden(), "below the floor stays visible");

        viewport.scroll_by(SCROLL_STEP);
        assert!(viewport.header_hidden(), "down past the floor hides");

        viewport.scroll_by(-SCROLL_STEP);
        assert!(!viewport.header_hidden(), "any upward scroll shows");
    }

    #[test]
    fn offsets_clamp_to_the_page() {
        let mut viewport = viewport();
        viewport.scroll_by(-500);
        assert_eq!(viewport.offset(), 0);

        viewport.scroll_by(100_000);
        assert_eq!(viewport.offset(), 1560 - 400);
        // clamped at the bottom: pressing down again is not "scrolling down"
        viewport.scroll_by(SCROLL_STEP);
        assert!(!viewport.header_hidden());
    }

    #[test]
    fn smooth_scroll_settles_on_its_target() {
        let mut viewport = viewport();
        viewport.scroll_to(600);

        let mut moved = 0;
        while viewport.tick() {
            moved += 1;
            assert!(moved < 100, "animation must settle");
        }
        assert_eq!(viewport.offset(), 600);
        assert!(viewport.header_hidden(), "animated down-scroll hides the header");
    }

    #[test]
    fn manual_scroll_abandons_the_animation() {
        let mut viewport = viewport();
        viewport.scroll_to(600);
        viewport.tick();
        viewport.scroll_by(-SCROLL_STEP);
        assert!(!viewport.tick(), "no target left to animate toward");
    }
}
