//! Ad-hoc tooltips. A single slot holds the active floater; re-entering a
//! source before leaving the last one replaces the slot, so rapid pointer
//! movement can never strand an untracked tooltip.

use ratatui::prelude::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub text: String,
    /// Screen rect of the element the tooltip describes; the floater sits
    /// beneath it, horizontally centered.
    pub anchor: Rect,
}

#[derive(Debug, Default)]
pub struct TooltipSlot {
    active: Option<Tooltip>,
}

impl TooltipSlot {
    pub fn show(&mut self, text: &str, anchor: Rect) {
        self.active = Some(Tooltip {
            text: text.to_string(),
            anchor,
        });
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn active(&self) -> Option<&Tooltip> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::TooltipSlot;
    use ratatui::prelude::Rect;

    #[test]
    fn reentry_replaces_instead_of_stacking() {
        let mut slot = TooltipSlot::default();
        slot.show("first", Rect::new(0, 0, 10, 1));
        slot.show("second", Rect::new(5, 5, 10, 1));

        let active = slot.active().cloned();
        assert_eq!(active.map(|tooltip| tooltip.text), Some("second".into()));

        slot.clear();
        assert!(slot.active().is_none());
    }
}
