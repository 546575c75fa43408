use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_IMAGE: &str = "q_stat";
pub const DEFAULT_RUNTIME: &str = "docker";
pub const DEFAULT_PRIVILEGE_PREFIX: &str = "sudo";
pub const DEFAULT_MOUNT_ROOT: &str = "/root";

/// Invocation parameters suitable for config files and command-line overrides.
///
/// Missing fields in a config file fall back to [`InvokerConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvokerConfig {
    /// Container runtime program (e.g. `docker`, `podman`)
    pub runtime: String,
    /// Program the runtime is launched through; `None` runs the runtime directly
    pub privilege_prefix: Option<String>,
    /// Image holding the analysis tool
    pub image: String,
    /// Directory inside the container the input file is mounted under
    pub mount_root: String,
    /// Pass `-t` to allocate a terminal
    pub tty: bool,
    /// Pass `--rm` so the container is removed on exit
    pub auto_remove: bool,
    /// Require the input to be an existing regular file before spawning
    pub check_input: bool,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            privilege_prefix: Some(DEFAULT_PRIVILEGE_PREFIX.to_string()),
            image: DEFAULT_IMAGE.to_string(),
            mount_root: DEFAULT_MOUNT_ROOT.to_string(),
            tty: true,
            auto_remove: true,
            check_input: false,
        }
    }
}

impl InvokerConfig {
    /// Load a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
