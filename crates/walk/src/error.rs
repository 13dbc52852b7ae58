use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when a listing or root check fails.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn root_missing(path: PathBuf) -> Self {
        Self::new(WalkErrorKind::RootMissing { path })
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir { path, source })
    }

    pub(crate) fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Metadata { path, source })
    }

    /// Returns the specific failure.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }

    /// Indicates whether the error is a missing or non-directory root.
    ///
    /// Root failures are the only fatal condition in a comparison run; every
    /// other failure is recovered locally by abandoning the affected level.
    #[must_use]
    pub fn is_root_missing(&self) -> bool {
        matches!(self.kind, WalkErrorKind::RootMissing { .. })
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::RootMissing { path } => {
                write!(f, "{}: no such directory", path.display())
            }
            WalkErrorKind::ReadDir { path, source } => {
                write!(
                    f,
                    "failed to read directory '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::Metadata { path, source } => {
                write!(
                    f,
                    "failed to inspect metadata for '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::RootMissing { .. } => None,
            WalkErrorKind::ReadDir { source, .. } | WalkErrorKind::Metadata { source, .. } => {
                Some(source)
            }
        }
    }
}

/// Classification of listing failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// A comparison root does not exist or is not a directory.
    RootMissing {
        /// The root path that failed validation.
        path: PathBuf,
    },
    /// Failed to read the contents of a directory.
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to retrieve metadata for an entry while listing.
    Metadata {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            WalkErrorKind::RootMissing { path }
            | WalkErrorKind::ReadDir { path, .. }
            | WalkErrorKind::Metadata { path, .. } => path,
        }
    }
}
