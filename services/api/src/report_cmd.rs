use crate::infra::parse_date;
use chrono::NaiveDate;
use clap::Args;
use klub::club::report::{participants_from_reader, ActionCounts, AnnualReportRow};
use klub::error::AppError;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ActionReportArgs {
    /// Participant CSV with `pol` and `datum_rodjenja` columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Action date (YYYY-MM-DD) used for age computation
    #[arg(long, value_parser = parse_date)]
    pub(crate) datum: NaiveDate,
    /// Action title for the printed report row
    #[arg(long, default_value = "Akcija")]
    pub(crate) naziv: String,
}

/// Aggregates an exported participant list into one annual-report row and
/// prints it as JSON, so a year's rows can be assembled without the service
/// running.
pub(crate) fn run_action_report(args: ActionReportArgs) -> Result<(), AppError> {
    let ActionReportArgs { csv, datum, naziv } = args;

    let file = File::open(&csv)?;
    let participants = participants_from_reader(file)?;
    let counts = ActionCounts::from_participants(&participants, datum);

    let row = AnnualReportRow {
        rb: 1,
        naziv_i_mesto: naziv,
        datum,
        counts,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&row).expect("report row serializes")
    );
    Ok(())
}
