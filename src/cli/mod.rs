//! CLI module for the Truthiness Evaluator
//!
//! Provides subcommands for scoring answers:
//! - `compare`: score two answers against a source
//! - `evaluate`: build a complete evaluation record

pub mod compare;
pub mod evaluate;
mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

pub use input::WeightArgs;

/// Truthiness Evaluator - Compare LLM answers given with and without a source
#[derive(Parser)]
#[command(name = "truthiness")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Extra configuration file, read after config/default and config/local
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a source-grounded answer against a source-free one
    Compare(compare::CompareArgs),

    /// Create an evaluation record, complete it and print it
    Evaluate(evaluate::EvaluateArgs),
}

/// Load configuration and install logging
pub(crate) fn bootstrap(config_path: Option<&std::path::Path>) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load_with(config_path)?;
    logging::init_logging(&config.logging);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from([
            "truthiness",
            "compare",
            "--without-source",
            "a.txt",
            "--with-source",
            "b.txt",
            "--source",
            "s.txt",
            "--fallback",
            "--difference-weight",
            "15",
        ])
        .unwrap();

        let Command::Compare(args) = cli.command else {
            panic!("expected compare command");
        };
        assert_eq!(args.without_source, PathBuf::from("a.txt"));
        assert!(args.fallback);
        assert_eq!(args.weights.difference_weight, Some(15.0));
        assert_eq!(args.weights.alignment_weight, None);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_evaluate_offline() {
        let cli = Cli::try_parse_from([
            "truthiness",
            "evaluate",
            "--question",
            "Who painted the Mona Lisa?",
            "--source",
            "-",
            "--offline",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        let Command::Evaluate(args) = cli.command else {
            panic!("expected evaluate command");
        };
        assert!(args.offline);
        assert!(args.without_source.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_evaluate_requires_answers_or_offline() {
        let result = Cli::try_parse_from([
            "truthiness",
            "evaluate",
            "--question",
            "Q?",
            "--source",
            "s.txt",
            "--with-source",
            "b.txt",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_offline_conflicts_with_answers() {
        let result = Cli::try_parse_from([
            "truthiness",
            "evaluate",
            "--question",
            "Q?",
            "--source",
            "s.txt",
            "--offline",
            "--with-source",
            "b.txt",
        ]);

        assert!(result.is_err());
    }
}
