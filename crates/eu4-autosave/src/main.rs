//! eu4-autosave - clones Ironman backup saves into dated copies
//!
//! The game keeps a single rolling `<name>_Backup.eu4` next to each Ironman
//! save. Whenever a new backup appears in the save directory, it is copied
//! to `<name>_<YYYY_MM_DD>.eu4` using the in-game date from the save's
//! metadata, and `<name>.eu4` is touched so the game still lists it first.
//!
//! # Usage
//!
//! ```bash
//! # Watch the default save directory
//! eu4-autosave
//!
//! # Watch a specific directory with debug logging
//! eu4-autosave --backup-path ~/saves -v
//!
//! # Clone one backup and exit
//! eu4-autosave --once ~/saves/Castile_Backup.eu4
//! ```

mod backup;
mod watch;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use directories::UserDirs;
use tracing::{error, info, warn};

use crate::backup::{process_backup, Settings};
use crate::watch::{SaveWatcher, WatchEvent};

/// Clones EU4 Ironman backup saves into dated copies whenever they change
#[derive(Parser)]
#[command(name = "eu4-autosave")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Save files directory [default: <Documents>/Paradox Interactive/Europa Universalis IV/save games]
    #[arg(long, env = "EU4_BACKUP_PATH", value_name = "DIR")]
    backup_path: Option<PathBuf>,

    /// Milliseconds to wait after a backup appears before reading it
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    settle_ms: u64,

    /// Attempts per backup file before giving up on it
    #[arg(long, value_name = "N", default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    retries: u32,

    /// Clone a single backup file and exit instead of watching
    #[arg(long, value_name = "FILE")]
    once: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            _ => "trace",
        }
    }

    fn settings(&self) -> Settings {
        Settings {
            settle: Duration::from_millis(self.settle_ms),
            attempts: self.retries,
        }
    }
}

fn default_backup_path() -> Option<PathBuf> {
    let dirs = UserDirs::new()?;
    let docs = dirs.document_dir()?;
    Some(
        docs.join("Paradox Interactive")
            .join("Europa Universalis IV")
            .join("save games"),
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/-q
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level())),
        )
        .init();

    let settings = cli.settings();

    if let Some(file) = &cli.once {
        return handle_backup(file, &settings);
    }

    let dir = match cli.backup_path.clone().or_else(default_backup_path) {
        Some(dir) => dir,
        None => bail!("Couldn't determine the save directory, pass --backup-path"),
    };
    if !dir.is_dir() {
        bail!("Save directory {} does not exist", dir.display());
    }

    let mut watcher = SaveWatcher::new(&dir)?;
    info!("Watching {} for *_Backup.eu4 changes...", dir.display());

    while let Some(event) = watcher.next_event() {
        match event {
            WatchEvent::Backup(path) => {
                // Failures are per file; the next backup gets a fresh try
                if let Err(e) = handle_backup(&path, &settings) {
                    error!("{:#}", e);
                }
            }
            WatchEvent::Error(e) => warn!("{}", e),
        }
    }

    info!("Watcher stopped");
    Ok(())
}

fn handle_backup(path: &Path, settings: &Settings) -> Result<()> {
    let name = file_name(path);
    let outcome =
        process_backup(path, settings).with_context(|| format!("Failed to backup {}", name))?;
    info!("{} backed up as {}.", name, file_name(&outcome.dated));

    match outcome.touched {
        Ok(companion) => info!("{} touched", file_name(&companion)),
        Err(e) => warn!("Failed to touch companion save of {}: {:#}", name, e),
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["eu4-autosave"]).unwrap();
        assert_eq!(cli.settle_ms, 1000);
        assert_eq!(cli.retries, 3);
        assert_eq!(cli.log_level(), "info");
        assert!(cli.once.is_none());

        let settings = cli.settings();
        assert_eq!(settings.settle, Duration::from_secs(1));
        assert_eq!(settings.attempts, 3);
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["eu4-autosave", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
        let cli = Cli::try_parse_from(["eu4-autosave", "-q"]).unwrap();
        assert_eq!(cli.log_level(), "warn");
        assert!(Cli::try_parse_from(["eu4-autosave", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_retries_must_be_positive() {
        assert!(Cli::try_parse_from(["eu4-autosave", "--retries", "0"]).is_err());
        let cli = Cli::try_parse_from(["eu4-autosave", "--retries", "5", "--settle-ms", "0"]).unwrap();
        assert_eq!(cli.settings().attempts, 5);
        assert_eq!(cli.settings().settle, Duration::ZERO);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("a/b/Castile_Backup.eu4")), "Castile_Backup.eu4");
    }
}
