use super::file_manager::FileManager;
use crate::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const PREFS_FILE_NAME: &str = "theme.toml";

/// The single persisted preference: which theme the visitor last picked.
#[derive(Serialize, Deserialize)]
pub struct Prefs {
    pub theme: Theme,
}

pub struct ConfigManager<'a> {
    file_manager: &'a FileManager,
}

impl<'a> ConfigManager<'a> {
    #[must_use]
    pub fn new(file_manager: &'a FileManager) -> Self {
        Self { file_manager }
    }

    /// Reads the stored theme preference. A missing or unparseable file means
    /// "no preference" rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences file exists but cannot be read.
    pub fn read_theme(&self) -> Result<Option<Theme>> {
        if !self.file_manager.has_data_file(PREFS_FILE_NAME.into()) {
            return Ok(None);
        }
        let file = self
            .file_manager
            .read_data(PREFS_FILE_NAME.into())
            .context("Could not read the theme preference file.")?;
        let prefs: Option<Prefs> = toml::from_str(file.as_str()).ok();
        Ok(prefs.map(|prefs| prefs.theme))
    }

    /// # Errors
    ///
    /// Returns an error if something goes wrong while writing to the file.
    pub fn write_theme(&self, theme: Theme) -> Result<()> {
        let contents = toml::to_string_pretty(&Prefs { theme })?;
        self.file_manager
            .write_data(PREFS_FILE_NAME.into(), &contents)
            .context("Could not write the theme preference file.")?;
        Ok(())
    }
}
