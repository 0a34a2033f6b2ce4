//! Rank classification from cumulative climbing statistics.
//!
//! A member's tier is the first tier (ascending) whose distance AND elevation
//! bounds both still hold; exceeding either bound pushes the member onward.
//! The top tier is a catch-all with no bounds. Tiers are derived on read,
//! never persisted.

use serde::{Deserialize, Serialize};

/// Ordered rank tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Pocetnik,
    Istrazivac,
    Sedlar,
    Osvajac,
    Oblakolovac,
    LegendaStijena,
}

impl RankTier {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Pocetnik,
            Self::Istrazivac,
            Self::Sedlar,
            Self::Osvajac,
            Self::Oblakolovac,
            Self::LegendaStijena,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pocetnik => "Početnik",
            Self::Istrazivac => "Istraživač",
            Self::Sedlar => "Sedlar",
            Self::Osvajac => "Osvajač",
            Self::Oblakolovac => "Oblakolovac",
            Self::LegendaStijena => "Legenda stijena",
        }
    }

    /// Inclusive upper bounds `(max_km, max_m)`; `None` for the catch-all.
    pub const fn bounds(self) -> Option<(f64, i64)> {
        match self {
            Self::Pocetnik => Some((200.0, 5_000)),
            Self::Istrazivac => Some((900.0, 20_000)),
            Self::Sedlar => Some((3_500.0, 60_000)),
            Self::Osvajac => Some((10_000.0, 140_000)),
            Self::Oblakolovac => Some((25_000.0, 300_000)),
            Self::LegendaStijena => None,
        }
    }

    /// Ordinal position, lowest tier first. Useful for monotonicity checks.
    pub fn ordinal(self) -> usize {
        Self::ordered()
            .iter()
            .position(|tier| *tier == self)
            .unwrap_or(0)
    }

    /// Classifies cumulative totals into a tier.
    pub fn for_totals(ukupno_km: f64, ukupno_metara_uspona: i64) -> Self {
        for tier in Self::ordered() {
            match tier.bounds() {
                Some((max_km, max_m)) => {
                    if ukupno_km <= max_km && ukupno_metara_uspona <= max_m {
                        return tier;
                    }
                }
                None => return tier,
            }
        }
        Self::LegendaStijena
    }
}

/// Cumulative climbing counters as served by the statistics endpoint.
/// Absent or null fields deserialize to zero, so a fresh member lands in the
/// lowest tier rather than failing the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberStatistics {
    #[serde(rename = "ukupnoKm", default, deserialize_with = "null_to_zero_f64")]
    pub ukupno_km: f64,
    #[serde(
        rename = "ukupnoMetaraUspona",
        default,
        deserialize_with = "null_to_zero_i64"
    )]
    pub ukupno_metara_uspona: i64,
    #[serde(rename = "brojPopeoSe", default, deserialize_with = "null_to_zero_u32")]
    pub broj_popeo_se: u32,
}

impl MemberStatistics {
    pub fn rank(&self) -> RankTier {
        RankTier::for_totals(self.ukupno_km, self.ukupno_metara_uspona)
    }
}

fn null_to_zero_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn null_to_zero_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

fn null_to_zero_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_member_is_pocetnik() {
        assert_eq!(RankTier::for_totals(0.0, 0), RankTier::Pocetnik);
        assert_eq!(MemberStatistics::default().rank(), RankTier::Pocetnik);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(RankTier::for_totals(200.0, 5_000), RankTier::Pocetnik);
        assert_eq!(RankTier::for_totals(200.01, 5_000), RankTier::Istrazivac);
        assert_eq!(RankTier::for_totals(200.0, 5_001), RankTier::Istrazivac);
    }

    #[test]
    fn exceeding_one_bound_fails_the_tier() {
        // Distance bound of Istraživač violated even though elevation is not.
        assert_eq!(RankTier::for_totals(901.0, 19_999), RankTier::Sedlar);
        // And the mirror case on elevation.
        assert_eq!(RankTier::for_totals(899.0, 20_001), RankTier::Sedlar);
    }

    #[test]
    fn extreme_totals_land_in_the_catch_all() {
        assert_eq!(
            RankTier::for_totals(1_000_000.0, 1_000_000),
            RankTier::LegendaStijena
        );
    }

    #[test]
    fn tier_assignment_is_monotonic_in_each_counter() {
        let distances = [0.0, 150.0, 200.0, 201.0, 900.0, 3_500.0, 9_999.0, 30_000.0];
        let elevations = [0, 4_000, 5_000, 5_001, 20_000, 60_000, 150_000, 400_000];

        for &elevation in &elevations {
            let mut previous = 0;
            for &distance in &distances {
                let ordinal = RankTier::for_totals(distance, elevation).ordinal();
                assert!(ordinal >= previous, "tier regressed at km={distance}");
                previous = ordinal;
            }
        }

        for &distance in &distances {
            let mut previous = 0;
            for &elevation in &elevations {
                let ordinal = RankTier::for_totals(distance, elevation).ordinal();
                assert!(ordinal >= previous, "tier regressed at m={elevation}");
                previous = ordinal;
            }
        }
    }

    #[test]
    fn labels_cover_every_tier() {
        for tier in RankTier::ordered() {
            assert!(!tier.label().is_empty());
        }
        assert_eq!(RankTier::LegendaStijena.label(), "Legenda stijena");
    }

    #[test]
    fn null_statistics_fields_default_to_zero() {
        let stats: MemberStatistics = serde_json::from_str(
            r#"{ "ukupnoKm": null, "ukupnoMetaraUspona": null, "brojPopeoSe": null }"#,
        )
        .expect("null counters tolerated");
        assert_eq!(stats, MemberStatistics::default());

        let stats: MemberStatistics = serde_json::from_str("{}").expect("absent counters tolerated");
        assert_eq!(stats.rank(), RankTier::Pocetnik);
    }

    #[test]
    fn statistics_round_trip_wire_names() {
        let stats = MemberStatistics {
            ukupno_km: 901.0,
            ukupno_metara_uspona: 19_999,
            broj_popeo_se: 12,
        };
        let json = serde_json::to_value(stats).expect("serializes");
        assert_eq!(json["ukupnoKm"], 901.0);
        assert_eq!(json["ukupnoMetaraUspona"], 19_999);
        assert_eq!(json["brojPopeoSe"], 12);
        assert_eq!(stats.rank(), RankTier::Sedlar);
    }
}
