//! The per-frame hit map: every interactive region rendered this frame
//! registers (rect, target) here, and mouse events resolve against it. This
//! is the explicit registration table the behaviors dispatch through, so
//! pointer handling is testable without a live terminal.

use ratatui::prelude::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardId {
    Service(usize),
    Team(usize),
    Portfolio(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    ThemeToggle,
    NavToggle,
    NavLink(usize),
    FilterButton(usize),
    Card(CardId),
    FormField(usize),
    SubmitButton,
    ModalBackdrop,
    ModalContent,
}

#[derive(Debug, Default)]
pub struct HitMap {
    entries: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn push(&mut self, area: Rect, target: Target) {
        self.entries.push((area, target));
    }

    /// Later registrations win: overlays push after the page, so the topmost
    /// region under the pointer is the one that reacts.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        self.entries
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, target)| *target)
    }

    #[must_use]
    pub fn area_of(&self, target: Target) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == target)
            .map(|(area, _)| *area)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}
