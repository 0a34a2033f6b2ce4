//! Member and enrollment records, the repository seam, and the service layer
//! that derives profile, statistics, and report views for the HTTP API.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{ClubAction, Enrollment, EnrollmentStatus, Member};
pub use memory::InMemoryClubRepository;
pub use repository::{ClubRepository, RepositoryError};
pub use router::club_router;
pub use service::{ClubService, ClubServiceError};
pub use views::{
    ActionReportView, AnnualReportView, EnrollmentView, MemberProfileView, RankBadgeView,
    StatisticsView,
};
