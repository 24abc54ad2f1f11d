//! CLI entrypoint for decoding sc-server response envelopes.
//!
//! The binary delegates to [`sc_decode::run`], which loads configuration,
//! parses arguments, decodes one envelope, and prints the typed result.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'_> = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    sc_decode::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
