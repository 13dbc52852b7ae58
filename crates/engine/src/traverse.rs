//! Iterative depth-first traversal of the paired directory trees.

use std::path::PathBuf;

use tracing::debug;
use walk::{PairedEntry, pair_level, read_sorted};

use crate::classify::classify_directory;
use crate::config::Config;
use crate::outcome::Outcome;

/// Work produced by the traversal: either an outcome ready for aggregation
/// or a file pair awaiting comparison. The serial driver compares files
/// inline; the parallel driver forwards them to the worker pool.
pub(crate) enum Dispatch {
    /// A directory mismatch or a listing failure.
    Outcome(Outcome),
    /// A file-kind compared entry and its original candidate.
    File(PairedEntry),
}

/// Drives the merge-walk over both trees, one directory level at a time.
///
/// Descent is iterative over an explicit LIFO stack of relative paths, so
/// traversal depth never grows the call stack. A listing failure on either
/// side of a level reports one failure and abandons that subtree; traversal
/// continues with the remaining stack. Matched directories are pushed for
/// descent, mismatched ones are reported without descending.
pub(crate) fn traverse(config: &Config, mut sink: impl FnMut(Dispatch)) {
    let mut pending = vec![PathBuf::new()];

    while let Some(dir) = pending.pop() {
        let original = match read_sorted(&config.original().join(&dir)) {
            Ok(entries) => entries,
            Err(error) => {
                sink(Dispatch::Outcome(Outcome::Failure(error.into())));
                continue;
            }
        };
        let compared = match read_sorted(&config.compared().join(&dir)) {
            Ok(entries) => entries,
            Err(error) => {
                sink(Dispatch::Outcome(Outcome::Failure(error.into())));
                continue;
            }
        };

        for pair in pair_level(&dir, &original, compared) {
            if pair.compared().is_dir() {
                match classify_directory(&pair) {
                    Some(outcome) => sink(Dispatch::Outcome(outcome)),
                    None => {
                        debug!(directory = %pair.path().display(), "descending");
                        pending.push(pair.into_path());
                    }
                }
            } else {
                sink(Dispatch::File(pair));
            }
        }
    }
}
