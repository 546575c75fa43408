//! High-level entry points for running q_stat from other Rust code.
//!
//! These wrap [`Invoker`] with the standard process runner. Use
//! [`Invoker::with_runner`] directly when the subprocess needs to be replaced.
use std::path::Path;

use crate::core::params::InvokerConfig;
use crate::error::Result;
use crate::invoker::{ContainerCommand, Invoker};

/// Run the default `q_stat` image on `input` with the default invocation
/// (`sudo docker run -t --rm ...`).
pub fn run_path<P: AsRef<Path>>(input: P) -> Result<()> {
    Invoker::default().run(input)
}

/// Run with a caller-supplied configuration.
pub fn run_path_with_config<P: AsRef<Path>>(input: P, config: &InvokerConfig) -> Result<()> {
    Invoker::new(config.clone()).run(input)
}

/// Build the container command for `input` without spawning it.
pub fn build_command<P: AsRef<Path>>(input: P, config: &InvokerConfig) -> Result<ContainerCommand> {
    Invoker::new(config.clone()).plan(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn build_command_uses_config() {
        let config = InvokerConfig {
            image: "q_stat:dev".into(),
            mount_root: "/in".into(),
            ..InvokerConfig::default()
        };
        let cmd = build_command("/srv/a.mp4", &config).unwrap();
        assert_eq!(
            cmd.to_string(),
            "sudo docker run -t --rm -v /srv/a.mp4:/in/a.mp4:ro q_stat:dev a.mp4"
        );
    }

    #[cfg(unix)]
    #[test]
    fn run_with_missing_runtime_reports_launch_failure() {
        let config = InvokerConfig {
            privilege_prefix: None,
            runtime: "qstat-no-such-runtime".into(),
            ..InvokerConfig::default()
        };
        let err = run_path_with_config("/srv/a.mp4", &config).unwrap_err();
        assert!(matches!(err, Error::Launch { .. }));
    }
}
