use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Filesystem classification of a listed entry.
///
/// Symbolic links are reported as whatever the operating system classifies
/// them as when listing the parent directory; the walker has no
/// link-specific semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file (or anything that is not a directory).
    File,
    /// A directory.
    Directory,
}

/// One entry captured from a snapshot-in-time directory listing.
#[derive(Clone, Debug)]
pub struct DirEntry {
    pub(crate) name: OsString,
    pub(crate) kind: EntryKind,
    pub(crate) size: u64,
}

impl DirEntry {
    /// Creates an entry from its parts. Exposed for tests that exercise the
    /// merge without touching a filesystem.
    #[must_use]
    pub fn new<N: Into<OsString>>(name: N, kind: EntryKind, size: u64) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
        }
    }

    /// Returns the entry's file name.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Returns the entry's classification.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Indicates whether the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns the size captured at listing time. Meaningful for files only.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// A compared-side entry paired with its original-side candidate.
///
/// The compared entry is always present; traversal is driven by the compared
/// listing. An absent original means the entry exists only on the compared
/// side as far as the merge can tell.
#[derive(Clone, Debug)]
pub struct PairedEntry {
    pub(crate) path: PathBuf,
    pub(crate) original: Option<DirEntry>,
    pub(crate) compared: DirEntry,
}

impl PairedEntry {
    /// Creates a pair directly. [`pair_level`](crate::pair_level) is the
    /// normal producer; this constructor exists for callers exercising
    /// classification without a merge.
    #[must_use]
    pub fn new(path: PathBuf, original: Option<DirEntry>, compared: DirEntry) -> Self {
        Self {
            path,
            original,
            compared,
        }
    }

    /// Returns the path of the entry relative to either comparison root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the original-side candidate, if the merge found one.
    #[must_use]
    pub fn original(&self) -> Option<&DirEntry> {
        self.original.as_ref()
    }

    /// Returns the compared-side entry.
    #[must_use]
    pub fn compared(&self) -> &DirEntry {
        &self.compared
    }

    /// Consumes the pair, yielding the relative path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
