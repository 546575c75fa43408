use std::io;
use std::process::Stdio;

use tracing::debug;

use super::command::ContainerCommand;

/// Executes a built command and reports how it ended.
pub trait CommandRunner {
    /// Run `cmd` to completion. `Ok(Some(code))` is a normal exit,
    /// `Ok(None)` means the child was killed by a signal, `Err` means it never
    /// started.
    fn run(&self, cmd: &ContainerCommand) -> io::Result<Option<i32>>;
}

/// Spawns the command as a child process inheriting the standard streams and
/// blocks until it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &ContainerCommand) -> io::Result<Option<i32>> {
        debug!("spawning: {}", cmd);
        let status = cmd
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.code())
    }
}
