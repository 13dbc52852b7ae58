//! Per-entry comparison outcomes and run statistics.

use std::fmt;
use std::path::PathBuf;

use crate::error::EngineError;

/// Human-readable reason attached to a directory mismatch. Covers both a
/// missing original and an original whose type changed from file to
/// directory.
pub const DIRECTORY_ONLY_IN_COMPARED: &str = "Directory only in compared.";
/// Reason attached when a file has no matching original.
pub const FILE_ONLY_IN_COMPARED: &str = "File only in compared.";
/// Reason attached when two files' sizes differ.
pub const FILE_SIZE_DIFFERS: &str = "File size differs.";
/// Reason attached when two files' contents differ within a sampled chunk.
pub const FILE_CONTENT_DIFFERS: &str = "File content differs.";
/// Reason attached when one stream reaches end-of-input before the other.
pub const FILE_ENDED_EARLY: &str = "One file ended before the other.";

/// The classified result of one comparison step.
///
/// Every outcome flows through a single aggregation point, including the
/// [`Outcome::SearchedFile`] tick emitted for each file dispatched to a
/// comparison. An explicit variant set replaces the sentinel "empty result"
/// a struct-equality check would need.
#[derive(Debug)]
pub enum Outcome {
    /// The entry pair matched; nothing to report.
    Unchanged,
    /// A file comparison was dispatched. Emitted before the comparison runs
    /// so only-in-compared files still count as searched.
    SearchedFile,
    /// A directory present on the compared side has no matching original.
    DirectoryMismatch {
        /// Why the pair mismatched.
        message: &'static str,
        /// Path of the entry relative to either root.
        path: PathBuf,
    },
    /// A file pair differs, or a file has no matching original.
    FileMismatch {
        /// Why the pair mismatched.
        message: &'static str,
        /// Path of the entry relative to either root.
        path: PathBuf,
    },
    /// A recoverable failure tied to one entry or directory level.
    Failure(EngineError),
}

/// Counters accumulated over one comparison run.
///
/// Exactly one logical owner updates these: the aggregation loop consuming
/// the outcome stream. Workers never touch the counters, which is what makes
/// them safe without locks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of files dispatched to a comparison.
    pub files_searched: u64,
    /// Number of file mismatches of any kind.
    pub different_files: u64,
    /// Number of directory mismatches.
    pub different_directories: u64,
    /// Number of recoverable failures.
    pub errors: u64,
}

impl Stats {
    /// Applies one outcome to the counters.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Unchanged => {}
            Outcome::SearchedFile => self.files_searched += 1,
            Outcome::DirectoryMismatch { .. } => self.different_directories += 1,
            Outcome::FileMismatch { .. } => self.different_files += 1,
            Outcome::Failure(_) => self.errors += 1,
        }
    }

    /// Total number of differing entries of either kind.
    #[must_use]
    pub fn total_different(&self) -> u64 {
        self.different_files + self.different_directories
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Searched {} file(s), {} file(s) different, {} director(ies) different, {} total entr(ies) different. {} error(s).",
            self.files_searched,
            self.different_files,
            self.different_directories,
            self.total_different(),
            self.errors
        )
    }
}
