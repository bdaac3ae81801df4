use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{MissingDataPolicy, PointMode};

#[derive(Parser)]
#[command(name = "fm128-radar")]
#[command(about = "Convert radar observation volumes to WRFDA FM-128 RADAR ASCII files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase logging verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode observation sets (JSON) into an FM-128 RADAR file
    Encode {
        #[arg(short, long, help = "Input JSON file with radar observation sets")]
        input: PathBuf,

        #[arg(short, long, help = "Output FM-128 file [default: fm128_radar.out]")]
        output_file: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        point_mode: Option<PointMode>,

        #[arg(short, long, value_enum)]
        missing_data: Option<MissingDataPolicy>,

        #[arg(short, long, help = "TOML settings file")]
        config: Option<PathBuf>,
    },

    /// Check the declared counts of an FM-128 file against its records
    Validate {
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display information about an FM-128 file
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "5")]
        sample: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from([
            "fm128-radar",
            "-vv",
            "encode",
            "--input",
            "obs.json",
            "--point-mode",
            "per-level-grid",
            "--missing-data",
            "none",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Encode {
                input,
                output_file,
                point_mode,
                missing_data,
                config,
            } => {
                assert_eq!(input, PathBuf::from("obs.json"));
                assert!(output_file.is_none());
                assert_eq!(point_mode, Some(PointMode::PerLevelGrid));
                assert_eq!(missing_data, Some(MissingDataPolicy::None));
                assert!(config.is_none());
            }
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_info_default_sample() {
        let cli = Cli::try_parse_from(["fm128-radar", "info", "--file", "out.fm128"]).unwrap();
        assert!(matches!(cli.command, Commands::Info { sample: 5, .. }));
    }
}
