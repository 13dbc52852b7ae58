#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` is the traversal-and-comparison core of dircmp. It walks two
//! directory trees in lock-step using the merge pairing from the [`walk`]
//! crate, classifies every entry reachable from the compared root, and
//! performs sampled (or full) byte comparison of file pairs. Results stream
//! to the caller as [`Outcome`] values and accumulate into a final
//! [`Stats`] snapshot.
//!
//! # Design
//!
//! - [`SamplePolicy`] maps a file size to the byte offset skipped between
//!   chunk reads; entire-file mode is the degenerate zero-offset case.
//! - The traversal is iterative over an explicit work stack of relative
//!   directory paths, never the call stack.
//! - [`run_serial`] is the single-threaded correctness baseline;
//!   [`run_parallel`] fans file comparisons out to a bounded worker pool and
//!   funnels every outcome through one aggregation point. [`run`] selects
//!   between them from the configured parallelism.
//! - Rendering lives with the caller: the engine invokes an observer per
//!   outcome and never formats or prints.
//!
//! # Invariants
//!
//! - Traversal is driven by the compared side; entries present only in the
//!   original tree are never visited.
//! - Serial and parallel runs over the same tree pair produce identical
//!   [`Stats`]. Outcome arrival order in parallel runs is unspecified.
//! - At most `parallelism` file-handle pairs are open simultaneously.
//! - Counters are only ever touched by the single aggregation point.
//!
//! # Errors
//!
//! A missing or non-directory root is the only fatal condition and is
//! returned as [`EngineError`] before traversal starts. Unreadable
//! directories and unreadable files are reported as [`Outcome::Failure`]
//! values, counted, and skipped; sibling work continues.

mod classify;
mod compare;
mod config;
mod error;
mod outcome;
mod run;
mod sample;
mod traverse;


pub use config::{Config, ConfigBuilder, ConfigError};
pub use error::{EngineError, EngineResult};
pub use outcome::{
    DIRECTORY_ONLY_IN_COMPARED, FILE_CONTENT_DIFFERS, FILE_ENDED_EARLY, FILE_ONLY_IN_COMPARED,
    FILE_SIZE_DIFFERS, Outcome, Stats,
};
pub use run::{run, run_parallel, run_serial};
pub use sample::SamplePolicy;
