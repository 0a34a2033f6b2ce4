use std::collections::HashMap;
use std::sync::Arc;

use crate::club::members::domain::{ClubAction, Enrollment, EnrollmentStatus, Member};
use crate::club::members::memory::InMemoryClubRepository;
use crate::club::members::repository::ClubRepository;
use crate::club::members::service::ClubService;
use crate::club::ranks::MemberStatistics;
use crate::club::roles::Role;
use crate::club::session::{AuthSession, SessionResolver};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub(crate) struct FixedSessionResolver {
    sessions: HashMap<String, AuthSession>,
}

impl FixedSessionResolver {
    pub(crate) fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub(crate) fn with_session(mut self, token: &str, session: AuthSession) -> Self {
        self.sessions.insert(token.to_string(), session);
        self
    }
}

impl SessionResolver for FixedSessionResolver {
    fn resolve(&self, token: &str) -> Option<AuthSession> {
        self.sessions.get(token).cloned()
    }
}

pub(crate) fn timestamp(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).single().expect("valid timestamp")
}

pub(crate) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(crate) fn member(id: u64, username: &str, role: &str) -> Member {
    Member {
        id,
        username: username.to_string(),
        full_name: format!("Member {username}"),
        role: role.to_string(),
        created_at: timestamp(2024, 1, 10),
        pol: Some("M".to_string()),
        datum_rodjenja: Some("1990-06-15".to_string()),
        statistics: MemberStatistics::default(),
    }
}

pub(crate) fn action(id: u64, datum: DateTime<Utc>, km: f64, uspon_m: i64) -> ClubAction {
    ClubAction {
        id,
        naziv: format!("Akcija {id}"),
        vrh: "Midžor".to_string(),
        datum,
        tezina: Some("srednja".to_string()),
        is_completed: true,
        duzina_staze_km: km,
        kumulativni_uspon_m: uspon_m,
        vodic_id: 1,
    }
}

pub(crate) fn enrollment(
    id: u64,
    akcija_id: u64,
    korisnik_id: u64,
    status: EnrollmentStatus,
) -> Enrollment {
    Enrollment {
        id,
        akcija_id,
        korisnik_id,
        status,
        prijavljen_at: timestamp(2025, 5, 1),
    }
}

pub(crate) fn seeded_repository() -> Arc<InMemoryClubRepository> {
    let repository = Arc::new(InMemoryClubRepository::default());

    repository
        .insert_member(member(1, "ana", "admin"))
        .expect("admin inserted");
    repository
        .insert_member(member(2, "mira", "vodic"))
        .expect("guide inserted");
    let mut clan = member(3, "pera", "clan");
    clan.pol = Some("M".to_string());
    clan.datum_rodjenja = Some("2015-06-01".to_string());
    repository.insert_member(clan).expect("clan inserted");
    let mut veteranka = member(4, "vera", "clan");
    veteranka.pol = Some("Ž".to_string());
    veteranka.datum_rodjenja = Some("1975-02-02".to_string());
    repository.insert_member(veteranka).expect("member inserted");

    repository
        .insert_action(action(10, timestamp(2025, 6, 1), 18.5, 1_200))
        .expect("action inserted");
    repository
        .insert_enrollment(enrollment(100, 10, 3, EnrollmentStatus::Prijavljen))
        .expect("enrollment inserted");
    repository
        .insert_enrollment(enrollment(101, 10, 4, EnrollmentStatus::PopeoSe))
        .expect("enrollment inserted");

    repository
}

pub(crate) fn club_service() -> (Arc<InMemoryClubRepository>, ClubService<InMemoryClubRepository>) {
    let repository = seeded_repository();
    let service = ClubService::new(Arc::clone(&repository));
    (repository, service)
}

pub(crate) fn session_resolver() -> Arc<FixedSessionResolver> {
    Arc::new(
        FixedSessionResolver::new()
            .with_session("token-ana", AuthSession::for_member(1, "ana", Some(Role::Admin)))
            .with_session("token-mira", AuthSession::for_member(2, "mira", Some(Role::Vodic)))
            .with_session("token-pera", AuthSession::for_member(3, "pera", Some(Role::Clan))),
    )
}
