//! The portfolio catalog: the studio's showcase pieces, each tagged with a
//! category for filtering and carrying lazily-loaded artwork.

/// Units reserved for the filter bar at the top of the portfolio section.
pub const FILTER_BAR_UNITS: i64 = 40;

/// Vertical units each portfolio item occupies in the nominal layout. Lazy
/// loading intersects these nominal positions with the viewport.
pub const ITEM_UNITS: i64 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Residential,
    Commercial,
    Hospitality,
}

impl Category {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Hospitality => "Hospitality",
        }
    }
}

#[derive(Debug)]
pub struct PortfolioItem {
    /// Key into the project catalog backing the detail modal.
    pub project_id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub blurb: &'static str,
    pub art: &'static [&'static str],
    /// Lazy-load marker: artwork renders as a placeholder until the item
    /// first intersects the viewport.
    pub art_loaded: bool,
}

/// Top edge of item `index` in page units, measured from the portfolio
/// section's top. Positions are nominal: filtering hides items visually but
/// does not reflow this layout.
#[must_use]
pub fn item_top(portfolio_top: i64, index: usize) -> i64 {
    portfolio_top + FILTER_BAR_UNITS + ITEM_UNITS * index as i64
}

#[must_use]
pub fn sample_items() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            project_id: "project1",
            title: "Modern Living Room",
            category: Category::Residential,
            blurb: "Clean lines, neutral colors.",
            art: &["┌──────┐ ╷  ╷", "│ ▒▒▒▒ │ ├──┤", "└──────┘ ╵  ╵"],
            art_loaded: false,
        },
        PortfolioItem {
            project_id: "project2",
            title: "Corporate Office",
            category: Category::Commercial,
            blurb: "Built for focus and collaboration.",
            art: &["▤ ▤ ▤ ▤ ▤", "▤ ▤ ▤ ▤ ▤", "═════════"],
            art_loaded: false,
        },
        PortfolioItem {
            project_id: "project3",
            title: "Coastal Kitchen",
            category: Category::Residential,
            blurb: "Salt air, pale oak, open shelving.",
            art: &["╔═══╦═══╗", "║ ○ ║ ○ ║", "╚═══╩═══╝"],
            art_loaded: false,
        },
        PortfolioItem {
            project_id: "project4",
            title: "Boutique Hotel Lobby",
            category: Category::Hospitality,
            blurb: "An arrival moment worth lingering in.",
            art: &["╭─────────╮", "│ ✦  ✦  ✦ │", "╰─────────╯"],
            art_loaded: false,
        },
        PortfolioItem {
            project_id: "project5",
            title: "Startup Loft",
            category: Category::Commercial,
            blurb: "Exposed brick, flexible desks.",
            art: &["▛▀▀▀▀▀▀▀▜", "▌ ▪ ▪ ▪ ▐", "▙▄▄▄▄▄▄▄▟"],
            art_loaded: false,
        },
        PortfolioItem {
            project_id: "project6",
            title: "Rooftop Lounge",
            category: Category::Hospitality,
            blurb: "Evening light over the skyline.",
            art: &["  ☽   ·  ·", "──────────", " ▗▄▖  ▗▄▖ "],
            art_loaded: false,
        },
    ]
}
