//! qstat CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! container, and exit with 0 on success or 1 on any failure.
//! For programmatic use, prefer the library API (`qstat::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    match cli::CliArgs::try_parse() {
        Ok(args) => cli::run(args),
        Err(e) => {
            // --help and --version land here too and are not failures
            let failed = e.use_stderr();
            let _ = e.print();
            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
