use clap::Args;
use jee_scorecard::answer_key::{session_id, AnswerKeyStore, ShiftTable};
use jee_scorecard::config::AppConfig;
use jee_scorecard::error::AppError;
use jee_scorecard::report::{format_report, write_summary_csv};
use jee_scorecard::scoring::{evaluate, MarkingScheme};
use jee_scorecard::sheet::parse_sheet;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Saved response-sheet HTML document to score
    #[arg(long)]
    pub(crate) sheet: PathBuf,
    /// Answer-key dataset (defaults to the configured dataset path)
    #[arg(long)]
    pub(crate) keys: Option<PathBuf>,
    /// Emit the per-subject breakdown as CSV instead of the text report
    #[arg(long)]
    pub(crate) csv: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let dataset = match args.keys {
        Some(path) => path,
        None => AppConfig::load()?.answer_keys.dataset,
    };
    let store = AnswerKeyStore::from_path(dataset)?;

    let html = std::fs::read_to_string(&args.sheet)?;
    let parsed = parse_sheet(&html)?;
    let session = session_id(&parsed.general_info, &ShiftTable::standard())?;
    let key = store.lookup(&session)?;
    let summary = evaluate(&parsed.questions, key).summary();

    if args.csv {
        write_summary_csv(std::io::stdout(), &parsed.general_info, &summary)?;
    } else {
        println!(
            "{}",
            format_report(&parsed.general_info, &summary, &MarkingScheme::standard())
        );
    }

    Ok(())
}
