use std::sync::Arc;

use super::domain::{Enrollment, EnrollmentStatus, Member};
use super::repository::{ClubRepository, RepositoryError};
use super::views::{
    ActionReportView, AnnualReportView, EnrollmentView, MemberProfileView, RankBadgeView,
    StatisticsView,
};
use crate::club::report::{ActionCounts, AnnualReportRow};
use crate::club::roles::{role_label, role_style};
use tracing::info;

/// Read-side and status-transition operations over the club repository.
/// Rank tiers and report counts are derived here on every call; nothing
/// presentation-shaped is ever written back.
pub struct ClubService<R> {
    repository: Arc<R>,
}

impl<R> ClubService<R>
where
    R: ClubRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn member(&self, member_id: u64) -> Result<Member, ClubServiceError> {
        self.repository
            .member(member_id)?
            .ok_or(RepositoryError::NotFound)
            .map_err(ClubServiceError::from)
    }

    /// Member record enriched with role presentation and the derived rank.
    pub fn profile(&self, member_id: u64) -> Result<MemberProfileView, ClubServiceError> {
        let member = self.member(member_id)?;
        Ok(MemberProfileView {
            id: member.id,
            username: member.username.clone(),
            full_name: member.full_name.clone(),
            role_label: role_label(&member.role).into_owned(),
            role_style: role_style(&member.role).css_class(),
            role: member.role,
            rank: RankBadgeView::for_tier(member.statistics.rank()),
            statistics: member.statistics,
        })
    }

    pub fn statistics(&self, member_id: u64) -> Result<StatisticsView, ClubServiceError> {
        let member = self.member(member_id)?;
        Ok(StatisticsView {
            statistics: member.statistics,
            rank: RankBadgeView::for_tier(member.statistics.rank()),
        })
    }

    /// Enrollments for one action, joined with the member's display fields.
    pub fn enrollments_for_action(
        &self,
        action_id: u64,
    ) -> Result<Vec<EnrollmentView>, ClubServiceError> {
        self.repository
            .action(action_id)?
            .ok_or(RepositoryError::NotFound)?;

        let mut views = Vec::new();
        for enrollment in self.repository.enrollments_for_action(action_id)? {
            // A dangling member reference degrades to a blank display name.
            let member = self.repository.member(enrollment.korisnik_id)?;
            let (username, full_name) = member
                .map(|member| (member.username, member.full_name))
                .unwrap_or_default();
            views.push(EnrollmentView {
                id: enrollment.id,
                akcija_id: enrollment.akcija_id,
                korisnik_id: enrollment.korisnik_id,
                username,
                full_name,
                status: enrollment.status.wire(),
            });
        }
        Ok(views)
    }

    /// A member's own enrollments, newest first.
    pub fn enrollments_for_member(
        &self,
        member_id: u64,
    ) -> Result<Vec<Enrollment>, ClubServiceError> {
        self.repository
            .member(member_id)?
            .ok_or(RepositoryError::NotFound)?;
        let mut enrollments = self.repository.enrollments_for_member(member_id)?;
        enrollments.sort_by(|a, b| b.prijavljen_at.cmp(&a.prijavljen_at));
        Ok(enrollments)
    }

    /// Applies a validated status to an enrollment. Transitioning *into*
    /// "popeo se" accrues the action's distance and elevation onto the
    /// member; moving away never subtracts, and a repeated transition does
    /// not double-accrue.
    pub fn set_enrollment_status(
        &self,
        enrollment_id: u64,
        status: EnrollmentStatus,
    ) -> Result<Enrollment, ClubServiceError> {
        let mut enrollment = self
            .repository
            .enrollment(enrollment_id)?
            .ok_or(RepositoryError::NotFound)?;

        if status == EnrollmentStatus::PopeoSe && enrollment.status != EnrollmentStatus::PopeoSe {
            let action = self
                .repository
                .action(enrollment.akcija_id)?
                .ok_or(RepositoryError::NotFound)?;
            self.repository.accrue_statistics(
                enrollment.korisnik_id,
                action.duzina_staze_km,
                action.kumulativni_uspon_m,
            )?;
            info!(
                member_id = enrollment.korisnik_id,
                action_id = enrollment.akcija_id,
                km = action.duzina_staze_km,
                uspon_m = action.kumulativni_uspon_m,
                "summit recorded, statistics accrued"
            );
        }

        enrollment.status = status;
        self.repository.update_enrollment(enrollment.clone())?;
        Ok(enrollment)
    }

    /// Per-gender, per-bracket counts over an action's summited participants.
    pub fn action_report(&self, action_id: u64) -> Result<ActionReportView, ClubServiceError> {
        let action = self
            .repository
            .action(action_id)?
            .ok_or(RepositoryError::NotFound)?;

        let datum = action.date();
        let mut counts = ActionCounts::default();
        for enrollment in self.repository.enrollments_for_action(action_id)? {
            if enrollment.status != EnrollmentStatus::PopeoSe {
                continue;
            }
            if let Some(member) = self.repository.member(enrollment.korisnik_id)? {
                counts.add(&member.report_participant(), datum);
            }
        }

        Ok(ActionReportView {
            akcija_id: action.id,
            naziv: action.naziv,
            datum,
            counts,
        })
    }

    /// One row per completed action in the year, ordered by date and numbered
    /// from 1. An empty year yields an empty report, not an error.
    pub fn annual_report(&self, year: i32) -> Result<AnnualReportView, ClubServiceError> {
        let mut actions = self
            .repository
            .actions_in_year(year)?
            .into_iter()
            .filter(|action| action.is_completed)
            .collect::<Vec<_>>();
        actions.sort_by_key(|action| (action.date(), action.id));

        let mut rows = Vec::with_capacity(actions.len());
        for (index, action) in actions.into_iter().enumerate() {
            let report = self.action_report(action.id)?;
            rows.push(AnnualReportRow {
                rb: index + 1,
                naziv_i_mesto: format!("{}, {}", action.naziv, action.vrh),
                datum: report.datum,
                counts: report.counts,
            });
        }

        Ok(AnnualReportView { godina: year, rows })
    }
}

/// Error raised by the club service.
#[derive(Debug, thiserror::Error)]
pub enum ClubServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ClubServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound))
    }
}
