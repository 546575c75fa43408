//! Builds and runs the container invocation for a single input file.
//!
//! [`Invoker::run`] resolves the input, mounts it read-only under the
//! configured root, launches the runtime and maps its exit status onto
//! `Result<()>`. Exit code 0 is the only success.
pub mod command;
pub mod runner;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::mount::MountSpec;
use crate::core::params::InvokerConfig;
use crate::core::path;
use crate::error::{Error, Result};

pub use command::ContainerCommand;
pub use runner::{CommandRunner, SystemRunner};

#[derive(Debug, Clone)]
pub struct Invoker<R = SystemRunner> {
    config: InvokerConfig,
    runner: R,
}

impl Invoker<SystemRunner> {
    pub fn new(config: InvokerConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl Default for Invoker<SystemRunner> {
    fn default() -> Self {
        Self::new(InvokerConfig::default())
    }
}

impl<R: CommandRunner> Invoker<R> {
    pub fn with_runner(config: InvokerConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Build the invocation for `input` without running anything.
    pub fn plan<P: AsRef<Path>>(&self, input: P) -> Result<ContainerCommand> {
        let input = input.as_ref();
        if input.as_os_str().is_empty() {
            return Err(Error::invalid_input(input, "path is empty"));
        }

        let resolved = path::resolve(input)?;
        debug!("resolved {:?} -> {:?}", input, resolved);
        if self.config.check_input {
            path::ensure_regular_file(&resolved)?;
        }

        let mount = MountSpec::read_only(&resolved, &self.config.mount_root)?;
        debug!("mount {}", mount);
        Ok(ContainerCommand::build(&self.config, &mount))
    }

    /// Run the analysis image against `input` and wait for it to finish.
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<()> {
        let cmd = self.plan(input)?;
        self.execute(&cmd)
    }

    /// Run an already planned command.
    pub fn execute(&self, cmd: &ContainerCommand) -> Result<()> {
        info!("Running {} on {:?}", self.config.image, cmd.tool_arg());
        let program = cmd.program_name();
        match self.runner.run(cmd) {
            Ok(Some(0)) => {
                info!("{} finished successfully", self.config.image);
                Ok(())
            }
            Ok(Some(code)) => {
                warn!("{} exited with status {}", program, code);
                Err(Error::ToolFailed { program, code })
            }
            Ok(None) => {
                warn!("{} was terminated by a signal", program);
                Err(Error::Terminated { program })
            }
            Err(source) => Err(Error::Launch { program, source }),
        }
    }
}
