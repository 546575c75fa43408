use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "qstat",
    version,
    about = "Run the q_stat video analysis container on a local file"
)]
pub struct CliArgs {
    /// Video file to analyze (absolute or relative to the current directory)
    #[arg(allow_hyphen_values = true)]
    pub video: Option<PathBuf>,

    /// Everything after the video path is accepted and ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,

    /// Container image holding the analysis tool
    #[arg(long)]
    pub image: Option<String>,

    /// Container runtime program (docker, podman, ...)
    #[arg(long)]
    pub runtime: Option<String>,

    /// Directory inside the container where the file is mounted
    #[arg(long)]
    pub mount_root: Option<String>,

    /// Run the container runtime directly instead of through sudo
    #[arg(long, default_value_t = false)]
    pub no_sudo: bool,

    /// JSON file with invocation settings; command-line options take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail before starting the container if the input is not an existing regular file
    #[arg(long, default_value_t = false)]
    pub check: bool,

    /// Print the container command instead of running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_path() {
        let args = CliArgs::try_parse_from(["qstat", "clip.mp4"]).unwrap();
        assert_eq!(args.video, Some(PathBuf::from("clip.mp4")));
        assert!(args.extra.is_empty());
        assert!(!args.dry_run && !args.no_sudo && !args.check);
    }

    #[test]
    fn no_arguments_is_not_a_parse_error() {
        let args = CliArgs::try_parse_from(["qstat"]).unwrap();
        assert!(args.video.is_none());
    }

    #[test]
    fn extra_positionals_are_collected_not_rejected() {
        let args = CliArgs::try_parse_from(["qstat", "a.mp4", "b.mp4", "c.mp4"]).unwrap();
        assert_eq!(args.video, Some(PathBuf::from("a.mp4")));
        assert_eq!(args.extra.len(), 2);
    }

    #[test]
    fn unknown_flags_after_the_path_are_ignored() {
        let args =
            CliArgs::try_parse_from(["qstat", "a.mp4", "--verbose", "-x", "b.mp4"]).unwrap();
        assert_eq!(args.video, Some(PathBuf::from("a.mp4")));
        assert_eq!(args.extra, ["--verbose", "-x", "b.mp4"]);
    }

    #[test]
    fn hyphen_leading_file_name_is_a_path() {
        let args = CliArgs::try_parse_from(["qstat", "-clip.mp4"]).unwrap();
        assert_eq!(args.video, Some(PathBuf::from("-clip.mp4")));
    }

    #[test]
    fn options_around_the_path() {
        let args = CliArgs::try_parse_from([
            "qstat", "--no-sudo", "clip.mp4", "--image", "q_stat:dev", "--dry-run",
        ])
        .unwrap();
        assert!(args.no_sudo && args.dry_run);
        assert_eq!(args.image.as_deref(), Some("q_stat:dev"));
        assert_eq!(args.video, Some(PathBuf::from("clip.mp4")));
    }
}
