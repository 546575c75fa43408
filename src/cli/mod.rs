//! Command Line Interface (CLI) layer for qstat.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns parsed options into an
//! `Invoker` run and a process exit code.
//!
//! If you are embedding qstat into another application, prefer the
//! `qstat::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
