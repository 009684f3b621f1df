//! Evaluate command - builds an evaluation record from a question, a source and
//! two answers, then prints the completed record

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Args;
use tracing::{info, warn};

use super::input::{ensure_single_stdin, print_json, read_text, WeightArgs};
use crate::domain::evaluation::{Evaluation, EvaluationRequest, GeneratedAnswers};
use crate::domain::truthiness::TruthinessEngine;

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Question put to the model
    #[arg(long)]
    pub question: String,

    /// Reference source text (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub source: PathBuf,

    /// Page the source was captured from; switches the input mode to `url`
    #[arg(long, value_name = "URL")]
    pub source_url: Option<String>,

    /// When the source was captured (RFC 3339); defaults to now in URL mode
    #[arg(long, value_name = "TIMESTAMP", requires = "source_url")]
    pub capture_date: Option<DateTime<Utc>>,

    /// Answer produced without the source (`-` for stdin)
    #[arg(long, value_name = "PATH", required_unless_present = "offline", requires = "with_source")]
    pub without_source: Option<PathBuf>,

    /// Answer produced with the source (`-` for stdin)
    #[arg(long, value_name = "PATH", required_unless_present = "offline", requires = "without_source")]
    pub with_source: Option<PathBuf>,

    /// Use the offline placeholder answers instead of supplied ones
    #[arg(long, conflicts_with_all = ["without_source", "with_source"])]
    pub offline: bool,

    #[command(flatten)]
    pub weights: WeightArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Run the evaluate command
pub fn run(args: EvaluateArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::bootstrap(config_path)?;
    let engine = config.scoring.build_engine();

    let evaluation = execute(&args, &engine)?;

    info!(
        evaluation_id = %evaluation.id(),
        input_mode = %evaluation.input_mode(),
        truthiness = %evaluation.comparison_results().truthiness_score,
        "Evaluation complete"
    );

    print_json(&evaluation, args.pretty)
}

fn execute(args: &EvaluateArgs, engine: &TruthinessEngine) -> anyhow::Result<Evaluation> {
    let answer_paths = args.without_source.iter().chain(args.with_source.iter());
    ensure_single_stdin(
        std::iter::once(args.source.as_path()).chain(answer_paths.map(PathBuf::as_path)),
    )?;

    let mut request = EvaluationRequest::new(args.question.clone(), read_text(&args.source)?);
    if let Some(url) = &args.source_url {
        request = request.with_source_url(url.clone());
    }
    if let Some(captured_at) = args.capture_date {
        request = request.with_capture_date(captured_at);
    }
    if let Some(weights) = args.weights.to_weights() {
        request = request.with_weights(weights);
    }

    let mut evaluation = Evaluation::new(request)?;

    let answers = match (&args.without_source, &args.with_source) {
        (Some(without_source), Some(with_source)) => {
            GeneratedAnswers::new(read_text(without_source)?, read_text(with_source)?)
        }
        _ => {
            warn!("Using offline placeholder answers; the score will not be meaningful");
            GeneratedAnswers::offline(evaluation.question())
        }
    };

    evaluation.complete(engine, answers)?;

    Ok(evaluation)
}
