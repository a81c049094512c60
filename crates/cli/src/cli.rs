//! Command line definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use fxphoto_core::{ConverterBackend, OrderingRule, StitchDirection, TargetFormat};

#[derive(Debug, Parser)]
#[command(name = "fx-photo", version, about = "Batch photo conversion and timestamp rewriting")]
pub struct Cli {
    /// Configuration file (TOML). Falls back to $FXPHOTO_CONFIG.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert images to another format (HEIC by default).
    Convert(ConvertArgs),
    /// Rewrite capture timestamps, increasing by a fixed step.
    Time(TimeArgs),
    /// Join images side by side or top to bottom.
    Append(AppendArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// File or directory to convert.
    pub path: PathBuf,

    /// Number of parallel conversions.
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Output format: heic, jpeg, png or tiff.
    #[arg(long)]
    pub format: Option<TargetFormat>,

    /// Converter tool: sips or magick.
    #[arg(long)]
    pub backend: Option<ConverterBackend>,

    /// Keep source files after conversion.
    #[arg(long)]
    pub keep_originals: bool,
}

#[derive(Debug, Args)]
pub struct TimeArgs {
    /// Base timestamp, "YYYY-MM-DD HH:MM:SS".
    pub datetime: String,

    /// File or directory to update.
    pub path: PathBuf,

    /// Seconds between consecutive files.
    #[arg(short, long)]
    pub step: Option<u32>,

    /// File ordering: name or numeric_suffix.
    #[arg(long)]
    pub order: Option<OrderingRule>,
}

#[derive(Debug, Args)]
pub struct AppendArgs {
    /// Images to join, in order.
    #[arg(required = true, num_args = 2..)]
    pub images: Vec<PathBuf>,

    /// horizontal or vertical.
    #[arg(short, long)]
    pub direction: Option<StitchDirection>,
}

impl Cli {
    /// Default log filter when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["fx-photo", "convert", "/photos", "-t", "4", "--format", "jpg"])
            .unwrap();
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.path, PathBuf::from("/photos"));
                assert_eq!(args.threads, Some(4));
                assert_eq!(args.format, Some(TargetFormat::Jpeg));
                assert!(!args.keep_originals);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_time_with_global_flags() {
        let cli = Cli::try_parse_from([
            "fx-photo",
            "time",
            "2024-05-01 09:30:00",
            "/photos",
            "--step",
            "2",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.log_filter(), "trace");
        match cli.command {
            Command::Time(args) => {
                assert_eq!(args.datetime, "2024-05-01 09:30:00");
                assert_eq!(args.step, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_append_needs_two_images() {
        assert!(Cli::try_parse_from(["fx-photo", "append", "a.heic"]).is_err());
        let cli = Cli::try_parse_from(["fx-photo", "append", "a.heic", "b.jpg", "-d", "vertical"])
            .unwrap();
        match cli.command {
            Command::Append(args) => {
                assert_eq!(args.images.len(), 2);
                assert_eq!(args.direction, Some(StitchDirection::Vertical));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["fx-photo", "-q", "-v", "convert", "x"]).is_err());
    }
}
