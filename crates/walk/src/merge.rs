use std::fs;
use std::path::Path;

use tracing::trace;

use crate::entry::{DirEntry, EntryKind, PairedEntry};
use crate::error::WalkError;

/// Verifies that a comparison root exists and is a directory.
pub fn ensure_root(path: &Path) -> Result<(), WalkError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        _ => Err(WalkError::root_missing(path.to_path_buf())),
    }
}

/// Lists one directory level, sorted lexicographically by name.
///
/// The listing is a point-in-time snapshot: name, kind, and size are
/// captured immediately so later comparison steps never re-stat the entry.
/// Symbolic links are classified without following them, matching how the
/// operating system reports them in the parent listing.
pub fn read_sorted(dir: &Path) -> Result<Vec<DirEntry>, WalkError> {
    trace!(directory = %dir.display(), "listing directory level");

    let read_dir = fs::read_dir(dir).map_err(|error| WalkError::read_dir(dir.to_path_buf(), error))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|error| WalkError::read_dir(dir.to_path_buf(), error))?;
        let metadata = entry
            .metadata()
            .map_err(|error| WalkError::metadata(entry.path(), error))?;
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push(DirEntry {
            name: entry.file_name(),
            kind,
            size: metadata.len(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Pairs one compared listing against one original listing by name.
///
/// Both listings must be sorted by name. For each compared entry the original
/// cursor advances while `original[cursor].name <= compared.name`, retaining
/// the last entry scanned; the retained candidate matches by name when a
/// match exists, and is `None` when the compared name sorts before every
/// remaining original name. A single merge pass covers the level in O(n+m).
///
/// Should the original listing somehow contain duplicate names, the last one
/// scanned wins. Candidate names are not checked for equality here; the
/// classifier re-verifies names so pairing bugs surface as mismatches.
#[must_use]
pub fn pair_level(
    rel_dir: &Path,
    original: &[DirEntry],
    compared: Vec<DirEntry>,
) -> Vec<PairedEntry> {
    let mut pairs = Vec::with_capacity(compared.len());
    let mut cursor = 0;

    for comp in compared {
        let path = rel_dir.join(&comp.name);

        let mut candidate = None;
        while cursor < original.len() && original[cursor].name <= comp.name {
            candidate = Some(original[cursor].clone());
            cursor += 1;
        }

        pairs.push(PairedEntry {
            path,
            original: candidate,
            compared: comp,
        });
    }
    pairs
}
