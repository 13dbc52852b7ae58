//! Common error types for the engine crate.

use std::fmt;
use std::io;
use std::path::PathBuf;

use walk::WalkError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during a comparison run.
///
/// Only root validation failures abort a run; every other failure is
/// captured as a per-entry [`Outcome::Failure`](crate::Outcome::Failure) and
/// routed through the result stream so sibling work continues.
#[derive(Debug)]
pub enum EngineError {
    /// I/O failure while opening or reading a specific file pair.
    Io {
        /// Path of the file the failure relates to, relative to its root.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Listing or root validation failure propagated from the walker.
    Walk(WalkError),
}

impl EngineError {
    pub(crate) fn io(path: PathBuf, source: io::Error) -> Self {
        Self::Io { path, source }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "unable to read '{}': {}", path.display(), source)
            }
            Self::Walk(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Walk(error) => Some(error),
        }
    }
}

impl From<WalkError> for EngineError {
    fn from(error: WalkError) -> Self {
        Self::Walk(error)
    }
}
