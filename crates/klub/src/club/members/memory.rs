use std::collections::HashMap;
use std::sync::Mutex;

use super::domain::{ClubAction, Enrollment, Member};
use super::repository::{ClubRepository, RepositoryError};
use chrono::Datelike;

/// In-memory [`ClubRepository`] used by the API service and by tests.
#[derive(Default)]
pub struct InMemoryClubRepository {
    members: Mutex<HashMap<u64, Member>>,
    actions: Mutex<HashMap<u64, ClubAction>>,
    enrollments: Mutex<HashMap<u64, Enrollment>>,
}

impl InMemoryClubRepository {
    pub fn insert_action(&self, action: ClubAction) -> Result<(), RepositoryError> {
        let mut guard = self.actions.lock().expect("action mutex poisoned");
        if guard.contains_key(&action.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(action.id, action);
        Ok(())
    }

    pub fn insert_enrollment(&self, enrollment: Enrollment) -> Result<(), RepositoryError> {
        let mut guard = self.enrollments.lock().expect("enrollment mutex poisoned");
        if guard.contains_key(&enrollment.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(enrollment.id, enrollment);
        Ok(())
    }
}

impl ClubRepository for InMemoryClubRepository {
    fn member(&self, id: u64) -> Result<Option<Member>, RepositoryError> {
        let guard = self.members.lock().expect("member mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn members(&self) -> Result<Vec<Member>, RepositoryError> {
        let guard = self.members.lock().expect("member mutex poisoned");
        let mut members = guard.values().cloned().collect::<Vec<_>>();
        members.sort_by_key(|member| member.id);
        Ok(members)
    }

    fn insert_member(&self, member: Member) -> Result<Member, RepositoryError> {
        let mut guard = self.members.lock().expect("member mutex poisoned");
        let username_taken = guard
            .values()
            .any(|existing| existing.username == member.username);
        if guard.contains_key(&member.id) || username_taken {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(member.id, member.clone());
        Ok(member)
    }

    fn action(&self, id: u64) -> Result<Option<ClubAction>, RepositoryError> {
        let guard = self.actions.lock().expect("action mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn actions_in_year(&self, year: i32) -> Result<Vec<ClubAction>, RepositoryError> {
        let guard = self.actions.lock().expect("action mutex poisoned");
        Ok(guard
            .values()
            .filter(|action| action.datum.year() == year)
            .cloned()
            .collect())
    }

    fn enrollment(&self, id: u64) -> Result<Option<Enrollment>, RepositoryError> {
        let guard = self.enrollments.lock().expect("enrollment mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn enrollments_for_action(&self, action_id: u64) -> Result<Vec<Enrollment>, RepositoryError> {
        let guard = self.enrollments.lock().expect("enrollment mutex poisoned");
        let mut enrollments = guard
            .values()
            .filter(|enrollment| enrollment.akcija_id == action_id)
            .cloned()
            .collect::<Vec<_>>();
        enrollments.sort_by_key(|enrollment| enrollment.id);
        Ok(enrollments)
    }

    fn enrollments_for_member(&self, member_id: u64) -> Result<Vec<Enrollment>, RepositoryError> {
        let guard = self.enrollments.lock().expect("enrollment mutex poisoned");
        let mut enrollments = guard
            .values()
            .filter(|enrollment| enrollment.korisnik_id == member_id)
            .cloned()
            .collect::<Vec<_>>();
        enrollments.sort_by_key(|enrollment| enrollment.id);
        Ok(enrollments)
    }

    fn update_enrollment(&self, enrollment: Enrollment) -> Result<(), RepositoryError> {
        let mut guard = self.enrollments.lock().expect("enrollment mutex poisoned");
        if guard.contains_key(&enrollment.id) {
            guard.insert(enrollment.id, enrollment);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn accrue_statistics(
        &self,
        member_id: u64,
        km: f64,
        uspon_m: i64,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.members.lock().expect("member mutex poisoned");
        let member = guard.get_mut(&member_id).ok_or(RepositoryError::NotFound)?;
        member.statistics.ukupno_km += km;
        member.statistics.ukupno_metara_uspona += uspon_m;
        member.statistics.broj_popeo_se += 1;
        Ok(())
    }
}
