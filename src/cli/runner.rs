use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use qstat::{Invoker, InvokerConfig};

use super::args::CliArgs;
use super::errors::AppError;

pub const USAGE: &str = "Usage: qstat <video file>";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Logs go to stderr; stdout belongs to the container.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// Merge the optional config file with command-line overrides.
fn invoker_config(args: &CliArgs) -> Result<InvokerConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            InvokerConfig::from_json_file(path)?
        }
        None => InvokerConfig::default(),
    };

    if let Some(image) = &args.image {
        config.image = image.clone();
    }
    if let Some(runtime) = &args.runtime {
        config.runtime = runtime.clone();
    }
    if let Some(root) = &args.mount_root {
        config.mount_root = root.clone();
    }
    if args.no_sudo {
        config.privilege_prefix = None;
    }
    if args.check {
        config.check_input = true;
    }
    Ok(config)
}

fn try_run(args: CliArgs) -> Result<(), AppError> {
    let video = args.video.clone().ok_or(AppError::MissingArgument {
        arg: "<video file>".to_string(),
    })?;
    if !args.extra.is_empty() {
        debug!("ignoring {} extra argument(s)", args.extra.len());
    }

    let config = invoker_config(&args)?;
    debug!("invoker config: {:?}", config);
    let invoker = Invoker::new(config);

    if args.dry_run {
        let cmd = invoker.plan(&video)?;
        println!("{cmd}");
        return Ok(());
    }

    invoker.run(&video)?;
    Ok(())
}

pub fn run(args: CliArgs) -> ExitCode {
    init_logging(args.log);

    match try_run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::MissingArgument { .. }) => {
            println!("{USAGE}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = invoker_config(&parse(&["qstat", "a.mp4"])).unwrap();
        assert_eq!(config, InvokerConfig::default());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"runtime": "podman", "image": "from-file", "mount_root": "/data"}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let args = parse(&[
            "qstat", "a.mp4", "--config", path, "--image", "from-cli", "--no-sudo", "--check",
        ]);
        let config = invoker_config(&args).unwrap();
        assert_eq!(config.runtime, "podman");
        assert_eq!(config.image, "from-cli");
        assert_eq!(config.mount_root, "/data");
        assert_eq!(config.privilege_prefix, None);
        assert!(config.check_input);
    }

    #[test]
    fn missing_video_is_a_usage_error() {
        let err = try_run(parse(&["qstat"])).unwrap_err();
        assert!(matches!(err, AppError::MissingArgument { .. }));
    }
}
