//! Input path resolution.
//!
//! Relative inputs are joined onto the working directory without any
//! normalization: `..` components and symlinks are passed through to the
//! container runtime untouched.
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve `input` against `cwd` unless it is already absolute.
pub fn resolve_against(input: &Path, cwd: &Path) -> PathBuf {
    if input.is_absolute() {
        input.to_path_buf()
    } else {
        cwd.join(input)
    }
}

/// Resolve `input` against the process working directory.
pub fn resolve(input: &Path) -> Result<PathBuf> {
    if input.is_absolute() {
        return Ok(input.to_path_buf());
    }
    let cwd = env::current_dir()?;
    Ok(resolve_against(input, &cwd))
}

/// Final component of `path`, used both as the in-container file name and as
/// the tool argument.
pub fn base_name(path: &Path) -> Result<&OsStr> {
    path.file_name()
        .ok_or_else(|| Error::invalid_input(path, "path has no file name component"))
}

/// Fail unless `path` names an existing regular file.
pub fn ensure_regular_file(path: &Path) -> Result<()> {
    match path.metadata() {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(Error::invalid_input(path, "not a regular file")),
        Err(_) => Err(Error::invalid_input(path, "file does not exist")),
    }
}
