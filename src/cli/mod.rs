//! Command-line interface.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | Run the full pipeline on a score file |
//! | `validate` | Check a stored insight against a score file |
//! | `rating` | Apply one performance to a rating |
//! | `achievements` | List newly unlocked achievements |

mod analyze;
mod progress;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use self::analyze::{render_report, run_analyze, run_validate};
pub use self::progress::{run_achievements, run_rating};
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "psyinsight",
    version,
    about = "Archetype classification and consistency-checked insight reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a score profile (.json or .toml)
    Analyze {
        /// Path to the score profile
        input: PathBuf,

        /// Seed for the generalist fallback draw (overrides PSYINSIGHT_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Report the generated insight without applying corrections
        #[arg(long)]
        no_correct: bool,
    },

    /// Validate a stored insight (JSON) against the scores it describes
    Validate {
        /// Path to the insight JSON
        insight: PathBuf,

        /// Path to the score profile the insight was generated from
        #[arg(long)]
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Compute a rating update
    Rating {
        /// Current rating
        #[arg(long)]
        current: i32,

        /// Performance score, 0-100
        #[arg(long)]
        performance: f64,

        /// Matches played before this one
        #[arg(long)]
        matches: u32,

        /// Rating of the reference opponent
        #[arg(long, default_value_t = 1500)]
        reference: i32,
    },

    /// Evaluate achievements for a player stats file
    Achievements {
        /// Path to player stats (.json or .toml)
        stats: PathBuf,

        /// Achievement ids that are already unlocked
        #[arg(long = "unlocked")]
        unlocked: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Dispatch a parsed command.
pub fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    match cli.command {
        Command::Analyze {
            input,
            seed,
            format,
            no_correct,
        } => run_analyze(&config, &input, seed, format, !no_correct),
        Command::Validate {
            insight,
            input,
            format,
        } => run_validate(&config, &insight, &input, format),
        Command::Rating {
            current,
            performance,
            matches,
            reference,
        } => run_rating(&config, current, performance, matches, reference),
        Command::Achievements { stats, unlocked } => run_achievements(&stats, unlocked),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "psyinsight",
            "analyze",
            "scores.json",
            "--seed",
            "7",
            "--format",
            "json",
            "--no-correct",
        ])
        .unwrap();
        match cli.command {
            Command::Analyze {
                input,
                seed,
                format,
                no_correct,
            } => {
                assert_eq!(input, PathBuf::from("scores.json"));
                assert_eq!(seed, Some(7));
                assert_eq!(format, OutputFormat::Json);
                assert!(no_correct);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_achievements_repeated_unlocked() {
        let cli = Cli::try_parse_from([
            "psyinsight",
            "achievements",
            "stats.json",
            "--unlocked",
            "first_boot",
            "--unlocked",
            "all_in",
        ])
        .unwrap();
        match cli.command {
            Command::Achievements { unlocked, .. } => {
                assert_eq!(unlocked, vec!["first_boot", "all_in"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rating_reference_defaults() {
        let cli = Cli::try_parse_from([
            "psyinsight",
            "rating",
            "--current",
            "1500",
            "--performance",
            "80",
            "--matches",
            "3",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Rating {
                reference: 1500,
                ..
            }
        ));
    }
}
