#![warn(clippy::all, clippy::pedantic, clippy::unwrap_used)]
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use phozzel_tui::{
    storage::{config_manager::ConfigManager, file_manager::FileManager},
    theme::Theme,
    tui,
};
use std::{fs::File, sync::Mutex};

const LOG_FILE_NAME: &str = "phozzel-tui.log";

#[derive(Parser)]
#[command(author)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Override the local app storage directory (mostly for testing purposes)
    #[arg(long = "local-dir", hide = true, global = true)]
    local_dir: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Store a theme preference without opening the site
    #[command(name = "theme")]
    SetTheme {
        /// "light-theme" or "dark-theme" (short forms work too)
        theme: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_manager = FileManager::init(args.local_dir.as_deref())?;
    let config_manager = ConfigManager::new(&file_manager);

    match args.command {
        Some(Command::SetTheme { theme }) => {
            let theme = Theme::parse(&theme)
                .ok_or_else(|| anyhow!("'{theme}' is not a theme. Try 'light' or 'dark'."))?;
            config_manager.write_theme(theme)?;
            println!("Stored theme preference '{}'.", theme.as_str());
        }

        None => {
            // the terminal owns stdout, so logs go to a file in the data dir
            let log_file = File::create(file_manager.data_dir().join(LOG_FILE_NAME))?;
            tracing_subscriber::fmt()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .init();

            let theme = config_manager.read_theme()?.unwrap_or_default();
            tui::run(&config_manager, theme)?;
        }
    };

    Ok(())
}
