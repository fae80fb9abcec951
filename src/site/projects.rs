//! Project details backing the portfolio modal. The modal pulls its copy
//! through the [`ProjectSource`] trait so it can be exercised against any
//! catalog, not just the studio's sample data.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
    pub details: String,
}

impl ProjectDetails {
    fn new(title: &str, description: &str, details: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            details: details.to_string(),
        }
    }
}

pub trait ProjectSource {
    fn project(&self, id: &str) -> Option<ProjectDetails>;

    /// The entry shown when an id is unknown.
    fn fallback(&self) -> ProjectDetails;

    /// Unknown ids degrade to the fallback entry rather than failing.
    fn lookup(&self, id: &str) -> ProjectDetails {
        self.project(id).unwrap_or_else(|| self.fallback())
    }
}

/// The studio's built-in catalog.
pub struct SampleProjects;

impl ProjectSource for SampleProjects {
    fn project(&self, id: &str) -> Option<ProjectDetails> {
        match id {
            "project1" => Some(ProjectDetails::new(
                "Modern Living Room",
                "A minimalist approach to contemporary living with clean lines and neutral colors.",
                "This project involved transforming a cramped living space into an open, airy environment with custom millwork and a restrained material palette.",
            )),
            "project2" => Some(ProjectDetails::new(
                "Corporate Office",
                "Professional workspace designed for productivity and collaboration.",
                "We created a modern office environment that promotes creativity and efficiency, balancing quiet focus rooms against open collaboration zones.",
            )),
            "project3" => Some(ProjectDetails::new(
                "Coastal Kitchen",
                "A bright galley kitchen that borrows its palette from the shoreline.",
                "Pale oak cabinetry, open shelving and a zellige backsplash keep the room light while hiding serious storage behind every panel.",
            )),
            "project4" => Some(ProjectDetails::new(
                "Boutique Hotel Lobby",
                "An arrival sequence that trades a front desk for a salon.",
                "Layered seating, a sculptural stair and warm brass details slow guests down the moment they step inside.",
            )),
            "project5" => Some(ProjectDetails::new(
                "Startup Loft",
                "A converted warehouse floor for a team that outgrew its garage.",
                "Exposed brick and services stay honest overhead while movable partitions let the floor plan change as fast as the company does.",
            )),
            "project6" => Some(ProjectDetails::new(
                "Rooftop Lounge",
                "An open-air bar built around the evening skyline.",
                "Wind-tolerant planting, low lounge seating and concealed heaters stretch the season at both ends.",
            )),
            _ => None,
        }
    }

    fn fallback(&self) -> ProjectDetails {
        self.project("project1")
            .unwrap_or_else(|| ProjectDetails::new("Project", "", ""))
    }
}
