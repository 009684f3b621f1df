//! Compare command - scores two answers against a source and prints the result

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::input::{ensure_single_stdin, print_json, read_text, WeightArgs};
use crate::domain::truthiness::{ComparisonInput, ComparisonResult, TruthinessEngine};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Answer produced without the source (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub without_source: PathBuf,

    /// Answer produced with the source (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub with_source: PathBuf,

    /// Reference source text (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub source: PathBuf,

    /// The answers are offline placeholders; report the fallback score
    #[arg(long)]
    pub fallback: bool,

    #[command(flatten)]
    pub weights: WeightArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Run the compare command
pub fn run(args: CompareArgs, config_path: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = super::bootstrap(config_path)?;
    let engine = config.scoring.build_engine();

    let result = execute(&args, &engine)?;

    info!(
        differences = result.difference_count(),
        alignment_score = result.alignment_score,
        truthiness = %result.truthiness_score,
        "Comparison complete"
    );

    print_json(&result, args.pretty)
}

fn execute(args: &CompareArgs, engine: &TruthinessEngine) -> anyhow::Result<ComparisonResult> {
    ensure_single_stdin([
        args.without_source.as_path(),
        args.with_source.as_path(),
        args.source.as_path(),
    ])?;

    let without_source = read_text(&args.without_source)?;
    let with_source = read_text(&args.with_source)?;
    let source = read_text(&args.source)?;
    let overrides = args.weights.to_weights();

    let mut input = ComparisonInput::new(&without_source, &with_source, &source)
        .with_fallback(args.fallback);
    input.weights = overrides.as_ref();

    Ok(engine.compare(input))
}
