//! The virtual page: the site's sections stacked top to bottom in abstract
//! units. One terminal row spans [`UNITS_PER_ROW`] units, so scroll math
//! (thresholds, offsets, smooth-scroll targets) is independent of the
//! terminal size and testable without one.

/// How many vertical units one terminal row covers.
pub const UNITS_PER_ROW: u16 = 10;

/// A section is revealed once its top edge rises to within this many units
/// of the viewport's bottom edge.
pub const REVEAL_THRESHOLD: i64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Services,
    Portfolio,
    Team,
    Contact,
}

#[derive(Debug)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub anchor: &'static str,
    /// Top edge in units from the top of the page.
    pub top: i64,
    pub height: i64,
    /// One-way reveal flag: set when the section first scrolls into view,
    /// never cleared.
    pub revealed: bool,
}

/// A card shown inside the services and team sections.
pub struct Card {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tooltip: Option<&'static str>,
}

pub const SERVICES: [Card; 3] = [
    Card {
        title: "Interior Styling",
        blurb: "Full-room concepts, furniture and finishes.",
        tooltip: Some("Concept to final styling"),
    },
    Card {
        title: "Space Planning",
        blurb: "Layouts that make small rooms work harder.",
        tooltip: Some("Layouts and flow studies"),
    },
    Card {
        title: "Lighting Design",
        blurb: "Layered lighting plans for every hour.",
        tooltip: Some("Ambient, task and accent plans"),
    },
];

pub const TEAM: [Card; 3] = [
    Card {
        title: "Maya Okafor",
        blurb: "Principal Designer",
        tooltip: None,
    },
    Card {
        title: "Jonas Feld",
        blurb: "Studio Lead",
        tooltip: None,
    },
    Card {
        title: "Priya Nair",
        blurb: "Project Manager",
        tooltip: None,
    },
];

pub struct PageMap {
    sections: Vec<Section>,
}

impl PageMap {
    #[must_use]
    pub fn new() -> Self {
        let heights = [
            (SectionId::Home, "PHOZZEL Designs", "#home", 260),
            (SectionId::About, "About", "#about", 200),
            (SectionId::Services, "Services", "#services", 240),
            (SectionId::Portfolio, "Portfolio", "#portfolio", 360),
            (SectionId::Team, "Team", "#team", 200),
            (SectionId::Contact, "Contact", "#contact", 300),
        ];

        let mut top = 0;
        let sections = heights
            .into_iter()
            .map(|(id, title, anchor, height)| {
                let section = Section {
                    id,
                    title,
                    anchor,
                    top,
                    height,
                    revealed: false,
                };
                top += height;
                section
            })
            .collect();

        Self { sections }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> &Section {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .unwrap_or(&self.sections[0])
    }

    #[must_use]
    pub fn total_height(&self) -> i64 {
        self.sections
            .last()
            .map_or(0, |section| section.top + section.height)
    }

    /// Resolves a fragment anchor to the top edge of its section. Anchors
    /// that match no section resolve to `None`; callers no-op on those.
    #[must_use]
    pub fn resolve_anchor(&self, anchor: &str) -> Option<i64> {
        self.sections
            .iter()
            .find(|section| section.anchor == anchor)
            .map(|section| section.top)
    }

    /// Marks every section whose top edge has entered the reveal band as
    /// revealed. Runs on every scroll event and once at startup; flags only
    /// ever turn on.
    pub fn reveal_in_view(&mut self, offset: i64, viewport_units: i64) {
        for section in &mut self.sections {
            if section.top - offset < viewport_units - REVEAL_THRESHOLD {
                section.revealed = true;
            }
        }
    }
}

impl Default for PageMap {
    fn default() -> Self {
        Self::new()
    }
}
