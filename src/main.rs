use clap::Parser;
use truthiness_evaluator::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Compare(args) => cli::compare::run(args, config_path),
        Command::Evaluate(args) => cli::evaluate::run(args, config_path),
    }
}
