use super::domain::{ClubAction, Enrollment, Member};

/// Persistence seam for members, actions, and enrollments. The API service
/// provides an in-memory implementation; a database-backed one slots in
/// behind the same trait.
pub trait ClubRepository: Send + Sync {
    fn member(&self, id: u64) -> Result<Option<Member>, RepositoryError>;
    fn members(&self) -> Result<Vec<Member>, RepositoryError>;
    fn insert_member(&self, member: Member) -> Result<Member, RepositoryError>;

    fn action(&self, id: u64) -> Result<Option<ClubAction>, RepositoryError>;
    fn actions_in_year(&self, year: i32) -> Result<Vec<ClubAction>, RepositoryError>;

    fn enrollment(&self, id: u64) -> Result<Option<Enrollment>, RepositoryError>;
    fn enrollments_for_action(&self, action_id: u64) -> Result<Vec<Enrollment>, RepositoryError>;
    fn enrollments_for_member(&self, member_id: u64) -> Result<Vec<Enrollment>, RepositoryError>;
    fn update_enrollment(&self, enrollment: Enrollment) -> Result<(), RepositoryError>;

    /// Adds one summited action's distance and elevation to a member's
    /// cumulative counters and bumps the summit count.
    fn accrue_statistics(
        &self,
        member_id: u64,
        km: f64,
        uspon_m: i64,
    ) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Conflict,
}
