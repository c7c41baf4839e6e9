//! Save container access.
//!
//! A `.eu4` save is a zip archive with three entries: `meta`, `gamestate`
//! and `ai`. Only `meta` is needed to read the save date.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::codec::decode_date;
use crate::error::{ArchiveError, SaveError};
use crate::limits::{AI_ENTRY, GAMESTATE_ENTRY, META_ENTRY};

/// Named entries of a save container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveEntry {
    Meta,
    Gamestate,
    Ai,
}

impl SaveEntry {
    /// Returns the entry's name inside the container.
    pub fn name(self) -> &'static str {
        match self {
            SaveEntry::Meta => META_ENTRY,
            SaveEntry::Gamestate => GAMESTATE_ENTRY,
            SaveEntry::Ai => AI_ENTRY,
        }
    }
}

/// Reads the full contents of `entry` from the save container at `path`.
pub fn extract_entry(path: impl AsRef<Path>, entry: SaveEntry) -> Result<Vec<u8>, ArchiveError> {
    let path = path.as_ref();
    let name = entry.name();
    let open_err = |source| ArchiveError::Open {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(|e| open_err(e.into()))?;
    let mut archive = zip::ZipArchive::new(file).map_err(open_err)?;

    let mut inner = match archive.by_name(name) {
        Ok(inner) => inner,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ArchiveError::NotFound { entry: name });
        }
        Err(e) => return Err(open_err(e)),
    };

    let mut buf = Vec::new();
    inner
        .read_to_end(&mut buf)
        .map_err(|source| ArchiveError::Read { entry: name, source })?;
    debug!(path = %path.display(), entry = name, len = buf.len(), "extracted entry");
    Ok(buf)
}

/// Reads the binary metadata entry.
pub fn read_meta(path: impl AsRef<Path>) -> Result<Vec<u8>, ArchiveError> {
    extract_entry(path, SaveEntry::Meta)
}

/// Reads the date of the save at `path` as `YYYY_MM_DD`.
pub fn read_save_date(path: impl AsRef<Path>) -> Result<String, SaveError> {
    let meta = read_meta(path)?;
    Ok(decode_date(&meta)?)
}
