#![deny(unsafe_code)]

//! Binary entry point for `dircmp`.
//!
//! All behavior lives in the `cli` crate; this shim wires it to the
//! process environment and locked standard streams.

use std::env;
use std::io;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = cli::run_with(env::args_os(), &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
