use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;

use crate::core::mount::MountSpec;
use crate::core::params::InvokerConfig;

/// A fully built container-runtime invocation: program plus argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl ContainerCommand {
    /// `[prefix] <runtime> run [-t] [--rm] -v <mount> <image> <file name>`
    pub fn build(config: &InvokerConfig, mount: &MountSpec) -> Self {
        let mut argv: Vec<OsString> = Vec::with_capacity(10);
        if let Some(prefix) = config.privilege_prefix.as_deref().filter(|p| !p.is_empty()) {
            argv.push(prefix.into());
        }
        argv.push(config.runtime.as_str().into());
        argv.push("run".into());
        if config.tty {
            argv.push("-t".into());
        }
        if config.auto_remove {
            argv.push("--rm".into());
        }
        argv.push("-v".into());
        argv.push(mount.to_volume_arg());
        argv.push(config.image.as_str().into());
        argv.push(mount.file_name().to_os_string());

        let mut argv = argv.into_iter();
        let program = argv.next().unwrap_or_default();
        Self {
            program,
            args: argv.collect(),
        }
    }

    /// Program name for diagnostics.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Argument passed to the tool inside the container.
    pub fn tool_arg(&self) -> Option<&OsStr> {
        self.args.last().map(OsString::as_os_str)
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Renders as a POSIX shell line that reproduces the invocation.
impl fmt::Display for ContainerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_escape(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", shell_escape(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

// 0BSD — POSIX shell escaper from the mmx CLI, with `+`, `=` and `,` whitelisted
fn shell_escape(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if s.bytes().all(|b| {
        matches!(b,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' |
            b'_' | b'-' | b'.' | b'/' | b':' | b'@' | b'%' | b'+' | b'=' | b',')
    }) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\"'\"'");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}
