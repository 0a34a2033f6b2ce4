use crate::club::ranks::MemberStatistics;
use crate::club::report::ReportParticipant;
use crate::club::roles::Role;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A club member as served by `/api/korisnici/:id`. The role stays a raw
/// string on the record so unknown roles survive the boundary; callers parse
/// it when they need the typed enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub pol: Option<String>,
    #[serde(
        rename = "datumRodjenja",
        alias = "datum_rodjenja",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub datum_rodjenja: Option<String>,
    #[serde(flatten)]
    pub statistics: MemberStatistics,
}

impl Member {
    pub fn parsed_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// The fields the annual report consumes.
    pub fn report_participant(&self) -> ReportParticipant {
        ReportParticipant {
            pol: self.pol.clone(),
            datum_rodjenja: self.datum_rodjenja.clone(),
        }
    }
}

/// A scheduled group hike. Opaque to the rule engines; the report only reads
/// its date and completion flag, the accrual path only its distance and
/// elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubAction {
    pub id: u64,
    pub naziv: String,
    pub vrh: String,
    pub datum: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tezina: Option<String>,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
    #[serde(rename = "duzinaStazeKm", default)]
    pub duzina_staze_km: f64,
    #[serde(rename = "kumulativniUsponM", default)]
    pub kumulativni_uspon_m: i64,
    #[serde(rename = "vodicId", default)]
    pub vodic_id: u64,
}

impl ClubAction {
    pub fn date(&self) -> NaiveDate {
        self.datum.date_naive()
    }
}

/// Outcome status of a member's enrollment in an action. Wire strings match
/// the backend's enumeration exactly, spaces included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    #[serde(rename = "prijavljen")]
    Prijavljen,
    #[serde(rename = "popeo se")]
    PopeoSe,
    #[serde(rename = "nije uspeo")]
    NijeUspeo,
    #[serde(rename = "otkazano")]
    Otkazano,
}

impl EnrollmentStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Prijavljen, Self::PopeoSe, Self::NijeUspeo, Self::Otkazano]
    }

    pub const fn wire(self) -> &'static str {
        match self {
            Self::Prijavljen => "prijavljen",
            Self::PopeoSe => "popeo se",
            Self::NijeUspeo => "nije uspeo",
            Self::Otkazano => "otkazano",
        }
    }

    /// Strict parse used by the status PATCH; anything outside the known set
    /// is rejected at the boundary.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|status| status.wire() == raw)
    }
}

/// A member's registration and outcome for one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: u64,
    #[serde(rename = "akcijaId")]
    pub akcija_id: u64,
    #[serde(rename = "korisnikId")]
    pub korisnik_id: u64,
    pub status: EnrollmentStatus,
    #[serde(rename = "prijavljenAt")]
    pub prijavljen_at: DateTime<Utc>,
}
