//! Save directory watching.
//!
//! Reports backup saves as they are created (or renamed into place) in the
//! watched directory.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::{Context, Result};
use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::backup::is_backup;

/// Event received from the save watcher
#[derive(Debug)]
pub enum WatchEvent {
    /// A backup save appeared
    Backup(PathBuf),
    /// Watch error occurred
    Error(String),
}

/// Watcher for a single save directory
pub struct SaveWatcher {
    rx: mpsc::Receiver<notify::Result<Event>>,
    /// Holds the OS watch open
    _watcher: RecommendedWatcher,
    /// Backups from the last event not yet handed out
    pending: Vec<PathBuf>,
}

impl SaveWatcher {
    /// Starts watching `dir` (non-recursively).
    pub fn new(dir: &Path) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher =
            notify::recommended_watcher(tx).context("Failed to create a filesystem watcher")?;
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {} for changes", dir.display()))?;

        Ok(Self {
            rx,
            _watcher: watcher,
            pending: Vec::new(),
        })
    }

    /// Blocks until the next backup appears.
    ///
    /// Returns `None` once the watcher has shut down.
    pub fn next_event(&mut self) -> Option<WatchEvent> {
        loop {
            if let Some(path) = self.pending.pop() {
                return Some(WatchEvent::Backup(path));
            }
            match self.rx.recv() {
                Ok(Ok(event)) => {
                    let mut paths = backup_paths(&event);
                    paths.reverse();
                    self.pending = paths;
                }
                Ok(Err(e)) => return Some(WatchEvent::Error(format!("Watch error: {}", e))),
                Err(_) => return None,
            }
        }
    }
}

/// Backup saves created by `event`, in event order.
pub fn backup_paths(event: &Event) -> Vec<PathBuf> {
    let paths: &[PathBuf] = match event.kind {
        EventKind::Create(_) | EventKind::Modify(ModifyKind::Name(RenameMode::To)) => &event.paths,
        // The rename target is the last path
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            event.paths.last().map(std::slice::from_ref).unwrap_or_default()
        }
        _ => return Vec::new(),
    };
    paths.iter().filter(|p| is_backup(p)).cloned().collect()
}
