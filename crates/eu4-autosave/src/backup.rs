//! Cloning backup saves into dated copies.
//!
//! `X_Backup.eu4` is copied to `X_Backup.eu4.tmp`, the date is read from the
//! copy, and the copy is renamed to `X_<date>.eu4`. The companion save
//! `X.eu4` then gets its modification time bumped.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use eu4_meta::read_save_date;
use tracing::{debug, warn};

/// File name suffix the game uses for Ironman backups.
pub const BACKUP_SUFFIX: &str = "_Backup.eu4";

/// How backups are processed.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Wait before each read of a freshly created file.
    pub settle: Duration,
    /// Clone attempts per backup file.
    pub attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            settle: Duration::from_secs(1),
            attempts: 3,
        }
    }
}

/// Result of processing one backup file.
#[derive(Debug)]
pub struct Outcome {
    /// The dated copy.
    pub dated: PathBuf,
    /// The companion save that was touched, or why it wasn't.
    pub touched: Result<PathBuf>,
}

/// Returns true if `path` names an Ironman backup save.
pub fn is_backup(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(BACKUP_SUFFIX))
}

fn backup_stem(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()?.strip_suffix(BACKUP_SUFFIX)
}

/// `X_Backup.eu4` -> `X_<date>.eu4`
pub fn dated_path(backup: &Path, date: &str) -> Option<PathBuf> {
    let stem = backup_stem(backup)?;
    Some(backup.with_file_name(format!("{stem}_{date}.eu4")))
}

/// `X_Backup.eu4` -> `X.eu4`
pub fn companion_path(backup: &Path) -> Option<PathBuf> {
    let stem = backup_stem(backup)?;
    Some(backup.with_file_name(format!("{stem}.eu4")))
}

fn tmp_path(backup: &Path) -> PathBuf {
    let mut name = backup.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Copies `backup` to a dated file next to it. Returns the dated path.
///
/// The temporary copy is removed on failure.
pub fn clone_backup(backup: &Path) -> Result<PathBuf> {
    let tmp = tmp_path(backup);
    fs::copy(backup, &tmp)
        .with_context(|| format!("Failed to copy {} to {}", backup.display(), tmp.display()))?;

    let result = date_and_rename(backup, &tmp);
    if result.is_err() {
        if let Err(e) = fs::remove_file(&tmp) {
            debug!("Failed to remove {}: {}", tmp.display(), e);
        }
    }
    result
}

fn date_and_rename(backup: &Path, tmp: &Path) -> Result<PathBuf> {
    let date = read_save_date(tmp)
        .with_context(|| format!("Failed to read date from {}", tmp.display()))?;
    let dated = dated_path(backup, &date)
        .with_context(|| format!("Not a backup save: {}", backup.display()))?;
    fs::rename(tmp, &dated).with_context(|| {
        format!("Failed to rename {} to {}", tmp.display(), dated.display())
    })?;
    Ok(dated)
}

/// Sets the modification time of an existing file to now.
pub fn touch(path: &Path) -> Result<()> {
    let file = File::options()
        .write(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.set_modified(SystemTime::now())
        .with_context(|| format!("Failed to set modification time of {}", path.display()))
}

/// Clones `backup`, retrying while the file may still be mid-write, then
/// touches its companion save.
pub fn process_backup(backup: &Path, settings: &Settings) -> Result<Outcome> {
    let attempts = settings.attempts.max(1);
    let mut attempt = 1;
    let dated = loop {
        thread::sleep(settings.settle);
        match clone_backup(backup) {
            Ok(dated) => break dated,
            Err(e) if attempt < attempts => {
                warn!(
                    "Attempt {}/{} to back up {} failed: {:#}",
                    attempt,
                    attempts,
                    backup.display(),
                    e
                );
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    };

    let touched = companion_path(backup)
        .with_context(|| format!("Not a backup save: {}", backup.display()))
        .and_then(|companion| touch(&companion).map(|()| companion));

    Ok(Outcome { dated, touched })
}
