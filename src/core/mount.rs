use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::path::base_name;
use crate::error::Result;

/// A bind mount of one host file into the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub host: PathBuf,
    pub container: OsString,
    pub read_only: bool,
}

impl MountSpec {
    /// Mount `host` (already absolute) read-only as `<root>/<base name>`.
    pub fn read_only(host: &Path, root: &str) -> Result<Self> {
        let name = base_name(host)?;
        let mut container = OsString::from(root.trim_end_matches('/'));
        container.push("/");
        container.push(name);
        Ok(Self {
            host: host.to_path_buf(),
            container,
            read_only: true,
        })
    }

    /// File name as seen from inside the container.
    pub fn file_name(&self) -> &OsStr {
        // `read_only` only builds specs from paths with a file name
        self.host.file_name().unwrap_or_default()
    }

    /// The `-v` argument: `<host>:<container>[:ro]`.
    pub fn to_volume_arg(&self) -> OsString {
        let mut arg = OsString::with_capacity(
            self.host.as_os_str().len() + self.container.len() + 4,
        );
        arg.push(self.host.as_os_str());
        arg.push(":");
        arg.push(&self.container);
        if self.read_only {
            arg.push(":ro");
        }
        arg
    }
}

impl fmt::Display for MountSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_volume_arg().to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_input_mount() {
        let spec = MountSpec::read_only(Path::new("/data/videos/sample.mkv"), "/root").unwrap();
        assert_eq!(spec.to_volume_arg(), "/data/videos/sample.mkv:/root/sample.mkv:ro");
        assert_eq!(spec.file_name(), "sample.mkv");
    }

    #[test]
    fn trailing_slash_on_root_is_not_doubled() {
        let spec = MountSpec::read_only(Path::new("/home/u/clip.mp4"), "/root/").unwrap();
        assert_eq!(spec.to_string(), "/home/u/clip.mp4:/root/clip.mp4:ro");
    }

    #[test]
    fn writable_mount_has_no_suffix() {
        let mut spec = MountSpec::read_only(Path::new("/a/b.ts"), "/media").unwrap();
        spec.read_only = false;
        assert_eq!(spec.to_volume_arg(), "/a/b.ts:/media/b.ts");
    }

    #[test]
    fn rootless_path_is_rejected() {
        assert!(MountSpec::read_only(Path::new("/"), "/root").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_host_path_is_preserved_byte_for_byte() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let host = PathBuf::from(OsStr::from_bytes(b"/v/clip\xff.mp4"));
        let spec = MountSpec::read_only(&host, "/root").unwrap();
        assert_eq!(
            spec.to_volume_arg().into_vec(),
            b"/v/clip\xff.mp4:/root/clip\xff.mp4:ro".to_vec()
        );
    }
}
