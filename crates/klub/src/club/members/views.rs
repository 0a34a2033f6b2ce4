//! Serialized response shapes for the HTTP API. Views carry the derived
//! presentation values (labels, styles, rank tier) so clients never repeat
//! the rule tables.

use crate::club::ranks::{MemberStatistics, RankTier};
use crate::club::report::{ActionCounts, AnnualReportRow};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankBadgeView {
    pub tier: RankTier,
    pub tier_label: &'static str,
}

impl RankBadgeView {
    pub fn for_tier(tier: RankTier) -> Self {
        Self {
            tier,
            tier_label: tier.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberProfileView {
    pub id: u64,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub role: String,
    pub role_label: String,
    pub role_style: &'static str,
    pub statistics: MemberStatistics,
    pub rank: RankBadgeView,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsView {
    #[serde(flatten)]
    pub statistics: MemberStatistics,
    pub rank: RankBadgeView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrollmentView {
    pub id: u64,
    #[serde(rename = "akcijaId")]
    pub akcija_id: u64,
    #[serde(rename = "korisnikId")]
    pub korisnik_id: u64,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionReportView {
    #[serde(rename = "akcijaId")]
    pub akcija_id: u64,
    pub naziv: String,
    pub datum: NaiveDate,
    pub counts: ActionCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualReportView {
    pub godina: i32,
    pub rows: Vec<AnnualReportRow>,
}
