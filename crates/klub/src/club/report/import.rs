//! CSV participant import for offline report generation.
//!
//! Expects a header row containing `pol` and `datum_rodjenja` columns (case
//! insensitive, any order, extra columns ignored). Rows keep their raw field
//! values; classification and exclusion happen during aggregation, so a
//! malformed row degrades exactly like a malformed API record.

use super::ReportParticipant;
use std::io::Read;

#[derive(Debug, thiserror::Error)]
pub enum ReportImportError {
    #[error("failed to read participant CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("participant CSV is missing the '{0}' column")]
    MissingColumn(&'static str),
}

pub fn participants_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<ReportParticipant>, ReportImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let pol_index = column_index(&headers, "pol")
        .ok_or(ReportImportError::MissingColumn("pol"))?;
    let birth_index = column_index(&headers, "datum_rodjenja")
        .ok_or(ReportImportError::MissingColumn("datum_rodjenja"))?;

    let mut participants = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        participants.push(ReportParticipant {
            pol: field(&record, pol_index),
            datum_rodjenja: field(&record, birth_index),
        });
    }

    Ok(participants)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}

fn field(record: &csv::StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::report::ActionCounts;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[test]
    fn imports_participants_with_reordered_columns() {
        let csv = "clan,datum_rodjenja,pol\nMarko,1990-06-15,M\nJelena,2015-06-01,Ž\n";
        let participants =
            participants_from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].pol.as_deref(), Some("M"));
        assert_eq!(participants[1].datum_rodjenja.as_deref(), Some("2015-06-01"));
    }

    #[test]
    fn missing_gender_column_is_rejected() {
        let csv = "clan,datum_rodjenja\nMarko,1990-06-15\n";
        let err = participants_from_reader(Cursor::new(csv)).expect_err("column required");
        assert!(matches!(err, ReportImportError::MissingColumn("pol")));
    }

    #[test]
    fn empty_fields_become_missing_values() {
        let csv = "pol,datum_rodjenja\n,\nM,\n";
        let participants =
            participants_from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(participants[0], ReportParticipant::default());
        assert_eq!(participants[1].pol.as_deref(), Some("M"));
        assert_eq!(participants[1].datum_rodjenja, None);
    }

    #[test]
    fn imported_rows_aggregate_like_api_records() {
        let csv = "pol,datum_rodjenja\nM,2015-06-01\nnepoznato,1990-01-01\nŽ,1975-02-02\n";
        let participants =
            participants_from_reader(Cursor::new(csv)).expect("import succeeds");
        let action_date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");

        let counts = ActionCounts::from_participants(&participants, action_date);
        assert_eq!(counts.m_juniori, 1);
        assert_eq!(counts.z_veterani, 1);
        // The unrecognized gender row is dropped from every total.
        assert_eq!(counts.ukupno, 2);
    }
}
