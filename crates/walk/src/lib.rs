#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the directory-level primitives used by the dircmp
//! comparison engine: snapshot listings of a single directory level and the
//! merge pass that pairs entries from two independently listed levels by
//! name. The crate never descends on its own; the engine owns the traversal
//! order and calls back into [`read_sorted`] one level at a time.
//!
//! # Design
//!
//! - [`read_sorted`] captures one directory level as a vector of
//!   [`DirEntry`] values sorted lexicographically by name. Sorting is always
//!   performed locally because no platform guarantees listing order.
//! - [`pair_level`] walks the compared listing left to right with a
//!   co-advancing cursor into the original listing, yielding one
//!   [`PairedEntry`] per compared entry. The pass is a single O(n+m) merge,
//!   not a nested search.
//! - [`ensure_root`] validates a comparison root before traversal starts.
//!
//! # Invariants
//!
//! - Every [`PairedEntry`] carries a compared-side entry; the original side
//!   is optional. Entries present only in the original listing are never
//!   yielded; the pairing is driven by the compared side.
//! - Listings are point-in-time snapshots and are never mutated.
//! - Pairing never touches the filesystem; it operates purely on the two
//!   sorted listings, which keeps the merge testable in isolation.
//!
//! # Errors
//!
//! Filesystem failures surface as [`WalkError`] values that capture the
//! offending path. Callers can inspect [`WalkError::kind`] or forward the
//! rendered message directly into diagnostics.

mod entry;
mod error;
mod merge;

#[cfg(test)]
mod tests;

pub use entry::{DirEntry, EntryKind, PairedEntry};
pub use error::{WalkError, WalkErrorKind};
pub use merge::{ensure_root, pair_level, read_sorted};
