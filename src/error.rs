//! Crate-level error type and `Result` alias.
//! Every variant maps to the same non-zero process exit code at the CLI; the
//! variants only exist so library callers and logs can tell failures apart.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with status {code}")]
    ToolFailed { program: String, code: i32 },

    #[error("`{program}` was terminated by a signal")]
    Terminated { program: String },

    #[error("Invalid input path {path:?}: {reason}")]
    InvalidInput { path: PathBuf, reason: &'static str },

    #[error("Invalid config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_input(path: impl Into<PathBuf>, reason: &'static str) -> Self {
        Error::InvalidInput {
            path: path.into(),
            reason,
        }
    }
}
