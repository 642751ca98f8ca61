// Command-line evaluation of one or more assignment matrices.
//
// Usage:
//   cargo run --bin evaluate_matrix -- [--locale en] [--group-size 3] <file.xlsx|file.csv>...
//
// Prints one JSON report per line for each file that evaluates; failures go to stderr.
// Exit status is non-zero when any file fails.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nurse_shift_feasibility::api::EvaluationOptions;
use nurse_shift_feasibility::app::{get_default_config_path, AppState};
use nurse_shift_feasibility::importer::{MatrixImporter, MatrixImporterImpl};

#[derive(Parser, Debug)]
#[command(name = "evaluate_matrix")]
#[command(about = "Evaluate binary nurse-shift assignment matrices against the weekly hours limit")]
#[command(version)]
struct Args {
    /// Matrix files (.xlsx / .xls / .csv, headerless)
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Verdict language (zh-CN / en / es)
    #[arg(long)]
    locale: Option<String>,

    /// Slots per load group (defaults to the configured slots per day)
    #[arg(long)]
    group_size: Option<usize>,

    /// Minimum workers per slot
    #[arg(long)]
    min_per_slot: Option<u32>,

    /// Maximum workers per slot
    #[arg(long)]
    max_per_slot: Option<u32>,
}

impl Args {
    fn options(&self) -> EvaluationOptions {
        EvaluationOptions {
            locale: self.locale.clone(),
            group_size: self.group_size,
            min_per_slot: self.min_per_slot,
            max_per_slot: self.max_per_slot,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    nurse_shift_feasibility::logging::init_cli();

    let options = args.options();
    let state = AppState::from_config_path(&get_default_config_path())?;
    let importer = MatrixImporterImpl::new();

    let mut failed = 0usize;
    let results = importer.batch_import(args.files.clone()).await;
    for (path, result) in args.files.iter().zip(results) {
        let outcome = match result {
            Ok(imported) => state
                .dashboard_api
                .evaluate_imported(&imported, &options)
                .await
                .map_err(anyhow::Error::from),
            Err(e) => Err(e.into()),
        };

        match outcome {
            Ok(report) => println!("{}", serde_json::to_string(&report)?),
            Err(e) => {
                failed += 1;
                eprintln!("{}: {}", path.display(), e);
            }
        }
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
