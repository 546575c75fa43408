#![doc = r#"
qstat — run the containerized `q_stat` video analysis tool on a local file.

The tool itself lives in a container image. This crate resolves the input
path, bind-mounts the file read-only into the container and runs the image
with the file's base name as its only argument:

```text
sudo docker run -t --rm -v /abs/path/clip.mp4:/root/clip.mp4:ro q_stat clip.mp4
```

It powers the `qstat` CLI and can be embedded in other Rust programs.

Quick start
-----------
```rust,no_run
fn main() -> qstat::Result<()> {
    qstat::run_path("clip.mp4")
}
```

Custom runtime or image
-----------------------
```rust,no_run
use qstat::{Invoker, InvokerConfig};

fn main() -> qstat::Result<()> {
    let config = InvokerConfig {
        runtime: "podman".to_string(),
        privilege_prefix: None,
        image: "registry.local/q_stat:latest".to_string(),
        ..InvokerConfig::default()
    };
    Invoker::new(config).run("/data/videos/sample.mkv")
}
```

Inspect without running
-----------------------
```rust
use qstat::{build_command, InvokerConfig};

let cmd = build_command("/data/videos/sample.mkv", &InvokerConfig::default()).unwrap();
assert_eq!(
    cmd.to_string(),
    "sudo docker run -t --rm -v /data/videos/sample.mkv:/root/sample.mkv:ro q_stat sample.mkv"
);
```

Error handling
--------------
All public functions return `qstat::Result<T>`. The CLI collapses every
error to exit code 1, but library callers can match on `qstat::Error`:

```rust,no_run
use qstat::{run_path, Error};

match run_path("clip.mp4") {
    Ok(()) => {}
    Err(Error::Launch { program, source }) => eprintln!("cannot start {program}: {source}"),
    Err(Error::ToolFailed { code, .. }) => eprintln!("q_stat failed with {code}"),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`invoker`] — command construction and the subprocess runner seam.
- [`core`] — configuration, path resolution and mount specs.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod invoker;

pub use core::mount::MountSpec;
pub use core::params::InvokerConfig;
pub use error::{Error, Result};
pub use invoker::{CommandRunner, ContainerCommand, Invoker, SystemRunner};

pub use api::{build_command, run_path, run_path_with_config};
