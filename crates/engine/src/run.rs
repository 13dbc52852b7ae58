//! Serial and parallel execution drivers.
//!
//! Both drivers produce identical [`Stats`] for the same tree pair; they
//! differ only in scheduling. The serial path is the correctness baseline:
//! one thread, explicit work stack, files compared inline. The parallel
//! path keeps the same coordinating traversal but fans file comparisons out
//! to a fixed pool of workers over a bounded channel, so at most
//! `parallelism` file-handle pairs are ever open at once.

use std::thread;

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use tracing::debug;
use walk::{PairedEntry, ensure_root};

use crate::classify::classify_file;
use crate::config::Config;
use crate::error::EngineResult;
use crate::outcome::{Outcome, Stats};
use crate::traverse::{Dispatch, traverse};

/// Runs the comparison, choosing the execution path from the configured
/// parallelism: one worker selects the serial baseline, anything higher the
/// worker pool.
pub fn run<F: FnMut(&Outcome)>(config: &Config, observe: &mut F) -> EngineResult<Stats> {
    if config.parallelism() <= 1 {
        run_serial(config, observe)
    } else {
        run_parallel(config, observe)
    }
}

/// Runs the comparison on the calling thread.
///
/// Every outcome is passed to `observe` in traversal order before being
/// folded into the returned [`Stats`]. Only a missing root is fatal.
pub fn run_serial<F: FnMut(&Outcome)>(config: &Config, observe: &mut F) -> EngineResult<Stats> {
    check_roots(config)?;

    let mut stats = Stats::default();
    traverse(config, |dispatch| match dispatch {
        Dispatch::Outcome(outcome) => consume(&mut stats, observe, outcome),
        Dispatch::File(pair) => {
            consume(&mut stats, observe, Outcome::SearchedFile);
            let outcome = classify_file(config, &pair);
            consume(&mut stats, observe, outcome);
        }
    });
    Ok(stats)
}

/// Runs the comparison with a pool of `parallelism` comparison workers.
///
/// One coordinating thread drives the traversal, sending directory outcomes
/// straight to the result channel and file pairs into a bounded task queue.
/// Workers drain the queue, emitting a searched tick plus the comparison
/// outcome per file. The aggregation loop below runs on the calling thread
/// and finishes once the coordinator and every worker have dropped their
/// result senders; no separate completion count is needed. Outcome arrival
/// order across workers is unspecified.
pub fn run_parallel<F: FnMut(&Outcome)>(config: &Config, observe: &mut F) -> EngineResult<Stats> {
    check_roots(config)?;

    let workers = config.parallelism();
    // Two pending tasks per worker keeps the pool busy without letting the
    // coordinator race far ahead of the comparisons.
    let (task_tx, task_rx) = bounded::<PairedEntry>(workers * 2);
    let (result_tx, result_rx) = unbounded::<Outcome>();

    let stats = thread::scope(|scope| {
        let coordinator_results = result_tx.clone();
        scope.spawn(move || {
            traverse(config, |dispatch| match dispatch {
                Dispatch::Outcome(outcome) => {
                    let _ = coordinator_results.send(outcome);
                }
                Dispatch::File(pair) => {
                    let _ = task_tx.send(pair);
                }
            });
            // task_tx drops here, closing the queue and stopping the pool.
        });

        for worker in 0..workers {
            let tasks: Receiver<PairedEntry> = task_rx.clone();
            let results: Sender<Outcome> = result_tx.clone();
            scope.spawn(move || {
                debug!(worker, "comparison worker started");
                for pair in tasks {
                    let _ = results.send(Outcome::SearchedFile);
                    let _ = results.send(classify_file(config, &pair));
                }
            });
        }
        drop(task_rx);
        drop(result_tx);

        let mut stats = Stats::default();
        for outcome in result_rx {
            consume(&mut stats, observe, outcome);
        }
        stats
    });

    Ok(stats)
}

fn check_roots(config: &Config) -> EngineResult<()> {
    ensure_root(config.original())?;
    ensure_root(config.compared())?;
    Ok(())
}

fn consume<F: FnMut(&Outcome)>(stats: &mut Stats, observe: &mut F, outcome: Outcome) {
    stats.record(&outcome);
    observe(&outcome);
}
