#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the thin command-line front-end for the dircmp comparison
//! engine. It parses the flag surface (`--entire`, `--samples`, `--size`,
//! `--jobs`, `--serial`), builds an [`engine::Config`], and renders the
//! outcome stream: one padded line per mismatch on stdout, failures on
//! stderr, and the canonical statistics summary as the final line of every
//! completed run.
//!
//! # Design
//!
//! [`run_with`] accepts an argument iterator together with handles for
//! standard output and error and returns a plain exit code, which keeps the
//! whole front-end exercisable from tests without spawning a process. The
//! binary crate wires it to `env::args_os()` and locked stdio.
//!
//! # Errors
//!
//! Exit code 0 means the comparison ran to completion, differences
//! included. Usage and configuration errors exit with 2 before any
//! traversal; a missing root or other fatal engine failure exits with 1.
//! The summary line prints whenever traversal ran, even with errors.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, value_parser};
use engine::{Config, ConfigError, Outcome};

/// Exit code for a completed comparison, differences included.
const EXIT_OK: i32 = 0;
/// Exit code for a fatal failure such as a missing root.
const EXIT_FATAL: i32 = 1;
/// Exit code for a usage or configuration error.
const EXIT_USAGE: i32 = 2;

/// Width of the message column in per-entry report lines.
const MESSAGE_WIDTH: usize = 30;

fn command() -> Command {
    Command::new("dircmp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare directory COMPARED to directory ORIGINAL.")
        .arg(
            Arg::new("entire")
                .short('e')
                .long("entire")
                .action(ArgAction::SetTrue)
                .help("Read entire file for comparison. More accurate but slower."),
        )
        .arg(
            Arg::new("samples")
                .long("samples")
                .value_name("N")
                .value_parser(value_parser!(u32))
                .default_value("4")
                .help("Number of samples to take per file."),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .value_name("BYTES")
                .value_parser(value_parser!(usize))
                .default_value("4000")
                .help("Size of each sample in bytes."),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of comparison workers. Defaults to the available hardware concurrency."),
        )
        .arg(
            Arg::new("serial")
                .long("serial")
                .action(ArgAction::SetTrue)
                .conflicts_with("jobs")
                .help("Compare files inline on one thread."),
        )
        .arg(
            Arg::new("original")
                .value_name("ORIGINAL")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Reference tree."),
        )
        .arg(
            Arg::new("compared")
                .value_name("COMPARED")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Tree to audit against ORIGINAL."),
        )
}

/// Parses `args`, runs the comparison, and renders the report.
///
/// Mismatch lines and the final summary go to `stdout`; failures and
/// diagnostics go to `stderr`. Report line order is unspecified when more
/// than one worker is active.
pub fn run_with<I, T, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    init_tracing();

    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) if matches!(
            error.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ) =>
        {
            let _ = write!(stdout, "{error}");
            return EXIT_OK;
        }
        Err(error) => {
            let _ = write!(stderr, "{error}");
            return EXIT_USAGE;
        }
    };

    let original: &PathBuf = matches.get_one("original").expect("required argument");
    let compared: &PathBuf = matches.get_one("compared").expect("required argument");

    let mut builder = Config::builder(original, compared)
        .entire(matches.get_flag("entire"))
        .samples(*matches.get_one::<u32>("samples").expect("defaulted"))
        .sample_size(*matches.get_one::<usize>("size").expect("defaulted"));
    if matches.get_flag("serial") {
        builder = builder.parallelism(1);
    } else if let Some(jobs) = matches.get_one::<usize>("jobs") {
        builder = builder.parallelism(*jobs);
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(error) => return usage_failure(stderr, &error),
    };

    let _ = writeln!(stdout, "Searching through {}", compared.display());

    let result = {
        let mut observe = |outcome: &Outcome| match outcome {
            Outcome::DirectoryMismatch { message, path }
            | Outcome::FileMismatch { message, path } => {
                let _ = writeln!(stdout, "{message:<MESSAGE_WIDTH$} | {}", path.display());
            }
            Outcome::Failure(error) => {
                let _ = writeln!(stderr, "Error: {error}");
            }
            Outcome::Unchanged | Outcome::SearchedFile => {}
        };
        engine::run(&config, &mut observe)
    };

    match result {
        Ok(stats) => {
            let _ = writeln!(stdout, "{stats}");
            EXIT_OK
        }
        Err(error) => {
            let _ = writeln!(stderr, "dircmp: {error}");
            EXIT_FATAL
        }
    }
}

fn usage_failure<E: Write>(stderr: &mut E, error: &ConfigError) -> i32 {
    let _ = writeln!(stderr, "dircmp: {error}");
    let _ = writeln!(stderr, "dircmp: Try 'dircmp --help' for more information.");
    EXIT_USAGE
}

/// Installs the process-wide tracing subscriber, filtered through the
/// standard `RUST_LOG` environment variable. Safe to call repeatedly; only
/// the first call wins.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run(args: &[&str]) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run_with(args.iter().copied(), &mut stdout, &mut stderr);
        (
            code,
            String::from_utf8(stdout).expect("stdout utf8"),
            String::from_utf8(stderr).expect("stderr utf8"),
        )
    }

    #[test]
    fn version_flag_prints_banner() {
        let (code, stdout, stderr) = run(&["dircmp", "--version"]);
        assert_eq!(code, EXIT_OK);
        assert!(stdout.contains("dircmp"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn missing_positional_is_a_usage_error() {
        let (code, _, stderr) = run(&["dircmp", "only-one"]);
        assert_eq!(code, EXIT_USAGE);
        assert!(!stderr.is_empty());
    }

    #[test]
    fn too_many_positionals_is_a_usage_error() {
        let (code, _, _) = run(&["dircmp", "a", "b", "c"]);
        assert_eq!(code, EXIT_USAGE);
    }

    #[test]
    fn single_sample_is_rejected_before_traversal() {
        let (code, _, stderr) = run(&["dircmp", "--samples", "1", "a", "b"]);
        assert_eq!(code, EXIT_USAGE);
        assert!(stderr.contains("sample count must be at least 2"));
        assert!(stderr.contains("Try 'dircmp --help'"));
    }

    #[test]
    fn missing_root_is_fatal() {
        let temp = tempfile::tempdir().expect("tempdir");
        let compared = temp.path().join("compared");
        fs::create_dir(&compared).expect("mkdir");
        let missing = temp.path().join("missing");

        let (code, _, stderr) = run(&[
            "dircmp",
            missing.to_str().expect("utf8"),
            compared.to_str().expect("utf8"),
        ]);
        assert_eq!(code, EXIT_FATAL);
        assert!(stderr.contains("no such directory"));
    }

    #[test]
    fn identical_trees_print_clean_summary() {
        let temp = tempfile::tempdir().expect("tempdir");
        let original = temp.path().join("original");
        let compared = temp.path().join("compared");
        fs::create_dir(&original).expect("mkdir");
        fs::create_dir(&compared).expect("mkdir");
        fs::write(original.join("a.txt"), b"same").expect("write");
        fs::write(compared.join("a.txt"), b"same").expect("write");

        let (code, stdout, stderr) = run(&[
            "dircmp",
            "--serial",
            original.to_str().expect("utf8"),
            compared.to_str().expect("utf8"),
        ]);
        assert_eq!(code, EXIT_OK);
        assert!(stdout.starts_with("Searching through "));
        assert!(stdout.contains(
            "Searched 1 file(s), 0 file(s) different, 0 director(ies) different, \
             0 total entr(ies) different. 0 error(s)."
        ));
        assert!(stderr.is_empty());
    }

    #[test]
    fn differences_render_one_padded_line_per_entry() {
        let temp = tempfile::tempdir().expect("tempdir");
        let original = temp.path().join("original");
        let compared = temp.path().join("compared");
        fs::create_dir(&original).expect("mkdir");
        fs::create_dir(&compared).expect("mkdir");
        fs::write(original.join("a.txt"), b"abc").expect("write");
        fs::write(compared.join("a.txt"), b"abd").expect("write");
        fs::write(compared.join("b.txt"), b"extra").expect("write");

        let (code, stdout, _) = run(&[
            "dircmp",
            "--serial",
            original.to_str().expect("utf8"),
            compared.to_str().expect("utf8"),
        ]);
        assert_eq!(code, EXIT_OK);
        assert!(stdout.contains("File content differs.          | a.txt"));
        assert!(stdout.contains("File only in compared.         | b.txt"));
        assert!(stdout.contains("2 file(s) different"));
    }

    #[test]
    fn jobs_flag_controls_the_worker_pool() {
        let temp = tempfile::tempdir().expect("tempdir");
        let original = temp.path().join("original");
        let compared = temp.path().join("compared");
        fs::create_dir(&original).expect("mkdir");
        fs::create_dir(&compared).expect("mkdir");
        for index in 0..20 {
            let name = format!("file{index}.txt");
            fs::write(original.join(&name), b"payload").expect("write");
            fs::write(compared.join(&name), b"payload").expect("write");
        }

        let (code, stdout, _) = run(&[
            "dircmp",
            "-j",
            "4",
            original.to_str().expect("utf8"),
            compared.to_str().expect("utf8"),
        ]);
        assert_eq!(code, EXIT_OK);
        assert!(stdout.contains("Searched 20 file(s)"));
    }

    #[test]
    fn zero_jobs_is_a_usage_error() {
        let (code, _, stderr) = run(&["dircmp", "--jobs", "0", "a", "b"]);
        assert_eq!(code, EXIT_USAGE);
        assert!(stderr.contains("parallelism must be at least 1"));
    }
}
