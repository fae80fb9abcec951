#![warn(clippy::all, clippy::pedantic, clippy::unwrap_used)]

#[cfg(test)]
mod theme_cli {
    use assert_cmd::Command;
    use assert_fs::prelude::PathChild;
    use predicates::prelude::predicate;

    #[test]
    fn storing_a_theme_writes_the_prefs_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = assert_fs::TempDir::new()?;
        let local_dir = dir.path().to_str().ok_or("bad temp dir path")?;

        Command::cargo_bin("phozzel-tui")?
            .args(["theme", "dark", "--local-dir", local_dir])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Stored theme preference 'dark-theme'",
            ));

        let stored = std::fs::read_to_string(dir.child("theme.toml").path())?;
        assert!(stored.contains("theme = \"dark-theme\""));

        Ok(())
    }

    #[test]
    fn unknown_themes_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = assert_fs::TempDir::new()?;
        let local_dir = dir.path().to_str().ok_or("bad temp dir path")?;

        Command::cargo_bin("phozzel-tui")?
            .args(["theme", "mauve", "--local-dir", local_dir])
            .assert()
            .failure()
            .stderr(predicate::str::contains("is not a theme"));

        Ok(())
    }
}
