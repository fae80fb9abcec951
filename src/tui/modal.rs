//! The project-detail modal: a boolean visibility mirrored by the rendered
//! entry. Lookup goes through the injected [`ProjectSource`].

use crate::site::projects::{ProjectDetails, ProjectSource};

#[derive(Debug, Default)]
pub struct Modal {
    entry: Option<ProjectDetails>,
}

impl Modal {
    pub fn open(&mut self, source: &dyn ProjectSource, project_id: &str) {
        self.entry = Some(source.lookup(project_id));
    }

    pub fn close(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.entry.is_some()
    }

    #[must_use]
    pub fn entry(&self) -> Option<&ProjectDetails> {
        self.entry.as_ref()
    }
}
