//! Club domain logic: role policy, rank classification, report aggregation,
//! and the membership service behind the HTTP API.

pub mod members;
pub mod ranks;
pub mod report;
pub mod roles;
pub mod session;

pub use ranks::{MemberStatistics, RankTier};
pub use report::{ActionCounts, AgeBracket, AnnualReportRow, Gender, ReportParticipant};
pub use roles::{allowed_roles, can_access, role_label, role_style, Capability, Role, StyleToken};
pub use session::{AuthSession, GuardRedirect, SessionResolver};
