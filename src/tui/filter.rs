//! The portfolio category filter. Exactly one control is active; items
//! transition in two timed phases so nothing pops: matches are displayed
//! immediately and grow to full scale after a short delay, misses shrink
//! immediately and leave the display after a longer one.

use super::timers::{Effect, TimerQueue};
use crate::site::portfolio::{Category, PortfolioItem};

pub const SHOW_DELAY_MS: u64 = 100;
pub const HIDE_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(Category),
}

impl Filter {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category == category,
        }
    }
}

pub const CONTROLS: [Filter; 4] = [
    Filter::All,
    Filter::Category(Category::Residential),
    Filter::Category(Category::Commercial),
    Filter::Category(Category::Hospitality),
];

/// What one portfolio item currently looks like. `displayed` answers "does
/// it occupy the page at all", `full` answers "is it at full opacity and
/// scale"; the in-between combinations are the transition phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemVisual {
    pub displayed: bool,
    pub full: bool,
}

#[derive(Debug)]
pub struct PortfolioFilter {
    active: usize,
    visuals: Vec<ItemVisual>,
}

impl PortfolioFilter {
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            active: 0,
            visuals: vec![
                ItemVisual {
                    displayed: true,
                    full: true
                };
                item_count
            ],
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active(&self) -> Filter {
        CONTROLS[self.active]
    }

    #[must_use]
    pub fn visual(&self, index: usize) -> ItemVisual {
        self.visuals[index]
    }

    /// Activates one control (clearing the rest) and starts both transition
    /// phases for every item. The timers are fire-once: selecting again
    /// before they land leaves the earlier phases running.
    pub fn select(
        &mut self,
        index: usize,
        items: &[PortfolioItem],
        timers: &mut TimerQueue,
        now_ms: u64,
    ) {
        if index >= CONTROLS.len() {
            return;
        }
        self.active = index;
        let filter = CONTROLS[index];

        for (item_index, item) in items.iter().enumerate() {
            if filter.matches(item) {
                // show before fade: on display at once, full after the delay
                self.visuals[item_index].displayed = true;
                timers.schedule(now_ms, SHOW_DELAY_MS, Effect::ShowItem(item_index));
            } else {
                // hide after fade: shrink at once, off display after the delay
                self.visuals[item_index].full = false;
                timers.schedule(now_ms, HIDE_DELAY_MS, Effect::HideItem(item_index));
            }
        }
    }

    /// Timer landings. Applied unconditionally: a stale timer from an older
    /// selection overwrites newer state, last write wins.
    pub fn show_item(&mut self, index: usize) {
        if let Some(visual) = self.visuals.get_mut(index) {
            visual.full = true;
        }
    }

    pub fn hide_item(&mut self, index: usize) {
        if let Some(visual) = self.visuals.get_mut(index) {
            visual.displayed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, PortfolioFilter, CONTROLS, HIDE_DELAY_MS, SHOW_DELAY_MS};
    use crate::site::portfolio::{sample_items, Category};
    use crate::tui::timers::{Effect, TimerQueue};

    fn apply(filter: &mut PortfolioFilter, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ShowItem(index) => filter.show_item(index),
                Effect::HideItem(index) => filter.hide_item(index),
                _ => {}
            }
        }
    }

    #[test]
    fn exactly_one_control_is_active_after_any_sequence() {
        let items = sample_items();
        let mut timers = TimerQueue::default();
        let mut filter = PortfolioFilter::new(items.len());

        for index in [2, 0, 3, 3, 1] {
            filter.select(index, &items, &mut timers, 0);
            assert!(filter.active_index() < CONTROLS.len());
        }
        assert_eq!(filter.active(), Filter::Category(Category::Residential));
    }

    #[test]
    fn misses_shrink_immediately_and_leave_display_after_the_delay() {
        let items = sample_items();
        let mut timers = TimerQueue::default();
        let mut filter = PortfolioFilter::new(items.len());

        // Commercial: items 1 and 4 match, the rest miss
        filter.select(2, &items, &mut timers, 0);

        let miss = filter.visual(0);
        assert!(miss.displayed && !miss.full, "miss fades but still occupies the page");

        apply(&mut filter, timers.fire_due(HIDE_DELAY_MS));
        assert!(!filter.visual(0).displayed);
        assert!(filter.visual(1).displayed && filter.visual(1).full);
    }

    #[test]
    fn matches_display_before_they_reach_full_scale() {
        let items = sample_items();
        let mut timers = TimerQueue::default();
        let mut filter = PortfolioFilter::new(items.len());

        filter.select(2, &items, &mut timers, 0);
        apply(&mut filter, timers.fire_due(HIDE_DELAY_MS));

        // back to All: the hidden items return shrunk, then grow
        filter.select(0, &items, &mut timers, HIDE_DELAY_MS);
        let returning = filter.visual(0);
        assert!(returning.displayed && !returning.full);

        apply(&mut filter, timers.fire_due(HIDE_DELAY_MS + SHOW_DELAY_MS));
        assert!(filter.visual(0).full);
    }

    #[test]
    fn stale_timers_land_last_write_wins() {
        let items = sample_items();
        let mut timers = TimerQueue::default();
        let mut filter = PortfolioFilter::new(items.len());

        // hide item 0, then re-show it before the hide timer lands
        filter.select(2, &items, &mut timers, 0);
        filter.select(0, &items, &mut timers, 100);

        apply(&mut filter, timers.fire_due(400));
        // the stale hide from the first selection fired after the re-show
        assert!(!filter.visual(0).displayed);
    }
}
