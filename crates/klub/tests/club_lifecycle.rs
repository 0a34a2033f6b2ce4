use std::sync::Arc;

use chrono::{TimeZone, Utc};
use klub::club::members::{
    ClubAction, ClubRepository, ClubService, Enrollment, EnrollmentStatus, InMemoryClubRepository,
    Member,
};
use klub::club::ranks::{MemberStatistics, RankTier};
use klub::club::roles::{can_access, Capability, Role};

fn member(id: u64, username: &str, role: &str, pol: &str, birth: &str) -> Member {
    Member {
        id,
        username: username.to_string(),
        full_name: username.to_string(),
        role: role.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).single().expect("valid"),
        pol: Some(pol.to_string()),
        datum_rodjenja: Some(birth.to_string()),
        statistics: MemberStatistics::default(),
    }
}

fn action(id: u64, month: u32, day: u32, km: f64, uspon_m: i64) -> ClubAction {
    ClubAction {
        id,
        naziv: format!("Uspon {id}"),
        vrh: "Rtanj".to_string(),
        datum: Utc
            .with_ymd_and_hms(2025, month, day, 7, 0, 0)
            .single()
            .expect("valid"),
        tezina: None,
        is_completed: true,
        duzina_staze_km: km,
        kumulativni_uspon_m: uspon_m,
        vodic_id: 1,
    }
}

fn enrollment(id: u64, akcija_id: u64, korisnik_id: u64) -> Enrollment {
    Enrollment {
        id,
        akcija_id,
        korisnik_id,
        status: EnrollmentStatus::Prijavljen,
        prijavljen_at: Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).single().expect("valid"),
    }
}

#[test]
fn season_of_summits_produces_statistics_rank_and_report() {
    let repository = Arc::new(InMemoryClubRepository::default());
    repository
        .insert_member(member(1, "mira", "vodic", "Ž", "1980-03-03"))
        .expect("guide inserted");
    repository
        .insert_member(member(2, "pera", "clan", "M", "2015-06-01"))
        .expect("member inserted");

    repository
        .insert_action(action(10, 6, 1, 150.0, 4_000))
        .expect("action inserted");
    repository
        .insert_action(action(11, 8, 15, 100.0, 2_000))
        .expect("action inserted");

    repository
        .insert_enrollment(enrollment(100, 10, 2))
        .expect("enrollment inserted");
    repository
        .insert_enrollment(enrollment(101, 11, 2))
        .expect("enrollment inserted");
    repository
        .insert_enrollment(enrollment(102, 10, 1))
        .expect("enrollment inserted");

    let service = ClubService::new(Arc::clone(&repository));

    // The guide may record outcomes; a plain member may not.
    assert!(can_access(Capability::CreateAction, Some(Role::Vodic)));
    assert!(!can_access(Capability::CreateAction, Some(Role::Clan)));

    service
        .set_enrollment_status(100, EnrollmentStatus::PopeoSe)
        .expect("first summit recorded");
    service
        .set_enrollment_status(101, EnrollmentStatus::PopeoSe)
        .expect("second summit recorded");
    service
        .set_enrollment_status(102, EnrollmentStatus::NijeUspeo)
        .expect("failed attempt recorded");

    // 250 km total pushes the member past the Početnik distance bound even
    // though the elevation bound still holds.
    let statistics = service.statistics(2).expect("statistics load");
    assert_eq!(statistics.statistics.ukupno_km, 250.0);
    assert_eq!(statistics.statistics.ukupno_metara_uspona, 6_000);
    assert_eq!(statistics.statistics.broj_popeo_se, 2);
    assert_eq!(statistics.rank.tier, RankTier::Istrazivac);

    let annual = service.annual_report(2025).expect("annual report builds");
    assert_eq!(annual.rows.len(), 2);
    // pera was 10 on 2025-06-01, so he lands in juniori; the guide's failed
    // attempt is not counted.
    assert_eq!(annual.rows[0].counts.m_juniori, 1);
    assert_eq!(annual.rows[0].counts.ukupno, 1);
    assert_eq!(annual.rows[1].counts.m_juniori, 1);
    assert_eq!(annual.rows[0].rb, 1);
    assert_eq!(annual.rows[1].rb, 2);
}
