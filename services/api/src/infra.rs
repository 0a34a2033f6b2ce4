use chrono::{NaiveDate, TimeZone, Utc};
use klub::club::members::{
    ClubAction, ClubRepository, Enrollment, EnrollmentStatus, InMemoryClubRepository, Member,
};
use klub::club::ranks::MemberStatistics;
use klub::club::roles::Role;
use klub::club::session::{AuthSession, SessionResolver};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Bearer-token session store. Login/logout flows would mutate this; the
/// service seeds it at startup.
#[derive(Default)]
pub(crate) struct TokenSessionStore {
    sessions: Mutex<HashMap<String, AuthSession>>,
}

impl TokenSessionStore {
    pub(crate) fn insert(&self, token: &str, session: AuthSession) {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.insert(token.to_string(), session);
    }
}

impl SessionResolver for TokenSessionStore {
    fn resolve(&self, token: &str) -> Option<AuthSession> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        guard.get(token).cloned()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Seeds a small demo club so the service is explorable without a database:
/// an admin, a guide, two members, one completed action, and their tokens.
pub(crate) fn seed_demo_club(repository: &InMemoryClubRepository, sessions: &TokenSessionStore) {
    let created = Utc
        .with_ymd_and_hms(2024, 1, 10, 8, 0, 0)
        .single()
        .expect("valid seed timestamp");

    let members = [
        (1, "ana", "Ana Adamović", "admin", "Ž", "1985-04-12"),
        (2, "mira", "Mira Marković", "vodic", "Ž", "1979-09-30"),
        (3, "pera", "Petar Perić", "clan", "M", "2001-01-20"),
        (4, "vera", "Vera Vasić", "clan", "Ž", "1972-11-05"),
    ];
    for (id, username, full_name, role, pol, birth) in members {
        let inserted = repository.insert_member(Member {
            id,
            username: username.to_string(),
            full_name: full_name.to_string(),
            role: role.to_string(),
            created_at: created,
            pol: Some(pol.to_string()),
            datum_rodjenja: Some(birth.to_string()),
            statistics: MemberStatistics::default(),
        });
        if inserted.is_err() {
            tracing::warn!(username, "seed member skipped: already present");
            continue;
        }
        sessions.insert(
            &format!("token-{username}"),
            AuthSession::for_member(id, username, Role::parse(role)),
        );
    }

    let action = ClubAction {
        id: 10,
        naziv: "Prolećni uspon".to_string(),
        vrh: "Midžor".to_string(),
        datum: Utc
            .with_ymd_and_hms(2025, 6, 1, 7, 0, 0)
            .single()
            .expect("valid seed timestamp"),
        tezina: Some("srednja".to_string()),
        is_completed: true,
        duzina_staze_km: 18.5,
        kumulativni_uspon_m: 1_200,
        vodic_id: 2,
    };
    if repository.insert_action(action).is_err() {
        tracing::warn!("seed action skipped: already present");
    }

    for (id, member_id, status) in [
        (100, 3, EnrollmentStatus::PopeoSe),
        (101, 4, EnrollmentStatus::Prijavljen),
    ] {
        let inserted = repository.insert_enrollment(Enrollment {
            id,
            akcija_id: 10,
            korisnik_id: member_id,
            status,
            prijavljen_at: Utc
                .with_ymd_and_hms(2025, 5, 1, 9, 0, 0)
                .single()
                .expect("valid seed timestamp"),
        });
        if inserted.is_err() {
            tracing::warn!(enrollment = id, "seed enrollment skipped: already present");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_is_idempotent() {
        let repository = InMemoryClubRepository::default();
        let sessions = TokenSessionStore::default();
        seed_demo_club(&repository, &sessions);
        seed_demo_club(&repository, &sessions);

        assert_eq!(repository.members().expect("members list").len(), 4);
        let session = sessions.resolve("token-ana").expect("admin token resolves");
        assert_eq!(session.role, Some(Role::Admin));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2025-06-01").is_ok());
        assert!(parse_date("juni prvi").is_err());
    }
}
