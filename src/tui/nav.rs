//! The collapsible navigation menu. State is transient: open/closed plus a
//! highlighted link, reset every launch.

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const LINKS: [NavLink; 6] = [
    NavLink { label: "Home", anchor: "#home" },
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Services", anchor: "#services" },
    NavLink { label: "Portfolio", anchor: "#portfolio" },
    NavLink { label: "Team", anchor: "#team" },
    NavLink { label: "Contact", anchor: "#contact" },
];

#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
    selected: usize,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The toggle control's glyph: hamburger when closed, cross when open.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < LINKS.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % LINKS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.checked_sub(1).unwrap_or(LINKS.len() - 1);
    }

    #[must_use]
    pub fn selected_link(&self) -> &'static NavLink {
        &LINKS[self.selected]
    }
}
