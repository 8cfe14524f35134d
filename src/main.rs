mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::{InputError, ScoreFormat, load_scores};
use crate::model::evaluation::Evaluation;
use crate::model::params::{DEFAULT_OMEGA, EvalParams, N_BINS_SENTINEL, SAMPLES_PER_BIN};
use crate::pipeline::stage5_report::{Stage5Input, write_reports};
use crate::pipeline::{EvalError, evaluate};

const DEFAULT_TITLE: &str = "Unlinkability analysis";

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate local and system unlinkability from mated and non-mated scores
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Mated comparison scores
    #[arg(long)]
    mated: PathBuf,

    /// Non-mated comparison scores
    #[arg(long)]
    non_mated: PathBuf,

    /// Output directory for unlinkability.tsv, summary.json and report.txt
    #[arg(long)]
    out: PathBuf,

    /// Prior odds of mated over non-mated comparisons
    #[arg(long, default_value_t = DEFAULT_OMEGA)]
    omega: f64,

    /// Number of bins; defaults to min(#mated / 10, 100), -1 also selects the default
    #[arg(long, allow_negative_numbers = true)]
    n_bins: Option<i64>,

    /// Score file format
    #[arg(long, value_enum, default_value_t = ScoreFormat::Auto)]
    format: ScoreFormat,

    /// Title carried into the reports
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Debug-level logging unless RUST_LOG is set
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("failed to write reports: {0}")]
    Report(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    logging::init_logging(args.verbose);
    match run(&args) {
        Ok(eval) => println!("{}", eval.dsys),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(args: &RunArgs) -> Result<Evaluation, AppError> {
    let mated = load_scores(&args.mated, args.format)?;
    let non_mated = load_scores(&args.non_mated, args.format)?;
    tracing::info!(
        mated = mated.len(),
        non_mated = non_mated.len(),
        "loaded comparison scores"
    );

    let params = EvalParams::new(args.omega, args.n_bins);
    let requested_default = matches!(params.n_bins, None | Some(N_BINS_SENTINEL));
    if requested_default && mated.len() < SAMPLES_PER_BIN {
        tracing::warn!(
            "only {} mated scores; default bin count floored at 1",
            mated.len()
        );
    }

    let eval = evaluate(&mated.scores, &non_mated.scores, &params)?;
    log_evaluation(&eval);

    let input = Stage5Input {
        evaluation: &eval,
        mated: &mated,
        non_mated: &non_mated,
        title: args.title.clone(),
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out)?;

    Ok(eval)
}

fn log_evaluation(eval: &Evaluation) {
    tracing::info!(
        n_bins = eval.n_bins,
        omega = eval.omega,
        dsys = eval.dsys,
        "unlinkability evaluated"
    );
    match eval.first_non_positive_center() {
        Some(score) => tracing::debug!(score, "D(s) first reaches 0"),
        None => tracing::warn!("D(s) never reaches 0; mated and non-mated scores barely overlap"),
    }
    let empty = eval.empty_mated_bins().max(eval.empty_non_mated_bins());
    if empty * 2 > eval.n_bins {
        tracing::warn!(
            empty_bins = empty,
            n_bins = eval.n_bins,
            "more than half of the bins are empty; consider fewer bins"
        );
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
