//! Annual-report aggregation: age at action date, age brackets, and
//! per-gender counts for a set of summited participants.
//!
//! Participants with a missing or unparseable birth date are excluded from
//! bracket cells; participants whose gender field cannot be classified are
//! excluded from the per-gender sub-totals and therefore from the grand total
//! as well. Aggregation never fails on malformed input.

mod import;

pub use import::{participants_from_reader, ReportImportError};

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Age classification used by the annual activity report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    Podmladak,
    Juniori,
    Seniori,
    Veterani,
}

impl AgeBracket {
    pub const fn ordered() -> [Self; 4] {
        [Self::Podmladak, Self::Juniori, Self::Seniori, Self::Veterani]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Podmladak => "podmladak",
            Self::Juniori => "juniori",
            Self::Seniori => "seniori",
            Self::Veterani => "veterani",
        }
    }

    /// Brackets: <10 podmladak, 10–17 juniori, 18–44 seniori, 45+ veterani.
    pub const fn for_age(age: i32) -> Self {
        if age < 10 {
            Self::Podmladak
        } else if age < 18 {
            Self::Juniori
        } else if age < 45 {
            Self::Seniori
        } else {
            Self::Veterani
        }
    }
}

/// Gender classification accepted by the report. Anything outside the known
/// encodings stays unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Muski,
    Zenski,
}

impl Gender {
    pub fn classify(pol: &str) -> Option<Self> {
        match pol {
            "M" | "m" | "muški" => Some(Self::Muski),
            "Ž" | "ž" | "z" | "zenski" | "ženski" => Some(Self::Zenski),
            _ => None,
        }
    }
}

/// Age in full years at a reference date. A birthday not yet reached in the
/// reference year decrements the naive year difference. A reference date
/// before the birth date yields `None`.
pub fn age_at(birth: NaiveDate, on: NaiveDate) -> Option<i32> {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    (age >= 0).then_some(age)
}

/// Birth dates arrive either as plain `YYYY-MM-DD` or as RFC 3339 timestamps
/// (the backend serializes `time.Time`). Anything else is unknown.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Participant fields consumed by the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParticipant {
    #[serde(default)]
    pub pol: Option<String>,
    #[serde(
        rename = "datumRodjenja",
        alias = "datum_rodjenja",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub datum_rodjenja: Option<String>,
}

/// Per-action counts: (gender × bracket) cells, per-gender totals, and the
/// grand total. Accumulation is commutative, so permuting the participant
/// list cannot change the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionCounts {
    pub m_podmladak: u32,
    pub m_juniori: u32,
    pub m_seniori: u32,
    pub m_veterani: u32,
    pub m_ukupno: u32,
    pub z_podmladak: u32,
    pub z_juniori: u32,
    pub z_seniori: u32,
    pub z_veterani: u32,
    pub z_ukupno: u32,
    pub ukupno: u32,
}

impl ActionCounts {
    /// Folds one participant into the counts.
    pub fn add(&mut self, participant: &ReportParticipant, action_date: NaiveDate) {
        let bracket = participant
            .datum_rodjenja
            .as_deref()
            .and_then(parse_birth_date)
            .and_then(|birth| age_at(birth, action_date))
            .map(AgeBracket::for_age);

        let gender = participant.pol.as_deref().and_then(Gender::classify);

        match gender {
            Some(Gender::Muski) => {
                self.m_ukupno += 1;
                match bracket {
                    Some(AgeBracket::Podmladak) => self.m_podmladak += 1,
                    Some(AgeBracket::Juniori) => self.m_juniori += 1,
                    Some(AgeBracket::Seniori) => self.m_seniori += 1,
                    Some(AgeBracket::Veterani) => self.m_veterani += 1,
                    None => {}
                }
            }
            Some(Gender::Zenski) => {
                self.z_ukupno += 1;
                match bracket {
                    Some(AgeBracket::Podmladak) => self.z_podmladak += 1,
                    Some(AgeBracket::Juniori) => self.z_juniori += 1,
                    Some(AgeBracket::Seniori) => self.z_seniori += 1,
                    Some(AgeBracket::Veterani) => self.z_veterani += 1,
                    None => {}
                }
            }
            None => {
                tracing::debug!(
                    pol = participant.pol.as_deref().unwrap_or(""),
                    "participant excluded from report counts: unclassified gender"
                );
            }
        }

        self.ukupno = self.m_ukupno + self.z_ukupno;
    }

    pub fn from_participants<'a, I>(participants: I, action_date: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a ReportParticipant>,
    {
        let mut counts = Self::default();
        for participant in participants {
            counts.add(participant, action_date);
        }
        counts
    }
}

/// One row of the annual report (one completed action).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualReportRow {
    pub rb: usize,
    #[serde(rename = "nazivIMesto")]
    pub naziv_i_mesto: String,
    pub datum: NaiveDate,
    pub counts: ActionCounts,
}
