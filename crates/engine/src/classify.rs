//! Entry classification: deciding whether a paired entry matches.
//!
//! The merge guarantees that a present original candidate matches the
//! compared entry by name, but the checks here re-verify the name anyway.
//! A pairing bug must surface as a mismatch report, never as a silently
//! wrong comparison.

use walk::PairedEntry;

use crate::compare::compare_file_pair;
use crate::config::Config;
use crate::outcome::{DIRECTORY_ONLY_IN_COMPARED, FILE_ONLY_IN_COMPARED, Outcome};

/// Classifies a directory-kind compared entry.
///
/// Returns `None` when the pair matches and the walker should descend, or
/// the mismatch outcome to report. A missing original and an original that
/// is not a directory produce the same report.
pub(crate) fn classify_directory(pair: &PairedEntry) -> Option<Outcome> {
    match pair.original() {
        Some(orig) if orig.name() == pair.compared().name() && orig.is_dir() => None,
        _ => Some(Outcome::DirectoryMismatch {
            message: DIRECTORY_ONLY_IN_COMPARED,
            path: pair.path().to_path_buf(),
        }),
    }
}

/// Classifies a file-kind compared entry and compares contents on a match.
pub(crate) fn classify_file(config: &Config, pair: &PairedEntry) -> Outcome {
    match pair.original() {
        Some(orig) if orig.name() == pair.compared().name() && !orig.is_dir() => {
            compare_file_pair(config, pair, orig.size(), pair.compared().size())
        }
        _ => Outcome::FileMismatch {
            message: FILE_ONLY_IN_COMPARED,
            path: pair.path().to_path_buf(),
        },
    }
}
