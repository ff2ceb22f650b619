//! Unit tests for hs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DistributionId, HouseholdId, PersonId, ZoneId};

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(HouseholdId::INVALID.0, u32::MAX);
        assert_eq!(ZoneId::INVALID.0, u32::MAX);
        assert_eq!(DistributionId::INVALID.0, u16::MAX);
        assert!(!ZoneId::default().is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(ZoneId(7).to_string(), "ZoneId(7)");
    }

    #[test]
    fn distribution_offset() {
        assert_eq!(DistributionId(84).offset(6), DistributionId(90));
    }
}

#[cfg(test)]
mod time {
    use crate::Time;

    #[test]
    fn arithmetic_is_exact() {
        let mut t = Time::hm(8, 0);
        for _ in 0..1_000 {
            t += Time::minutes(5);
            t -= Time::minutes(5);
        }
        assert_eq!(t, Time::hm(8, 0));
        assert_eq!(Time::hm(9, 30) - Time::hm(8, 0), Time::minutes(90));
    }

    #[test]
    fn display_hh_mm() {
        assert_eq!(Time::hm(8, 5).to_string(), "08:05");
        assert_eq!(Time::hm(26, 30).to_string(), "26:30");
        assert_eq!(Time::minutes(-15).to_string(), "-00:15");
    }

    #[test]
    fn scaling() {
        let d = Time::minutes(125);
        assert_eq!(d.scale_ceil(0.5), Time::minutes(63));
        assert_eq!(d.scale_floor(0.5), Time::minutes(62));
        assert_eq!(Time::minutes(120).scale(0.25), Time::minutes(30));
    }

    #[test]
    fn sum_and_clamp() {
        let total: Time = [Time::minutes(10), Time::minutes(20)].into_iter().sum();
        assert_eq!(total, Time::minutes(30));
        assert_eq!(Time::minutes(-3).non_negative(), Time::ZERO);
    }
}

#[cfg(test)]
mod config {
    use crate::{SchedulerConfig, Time};

    #[test]
    fn defaults_validate() {
        let cfg = SchedulerConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.bin_width(), Time::minutes(15));
        assert_eq!(cfg.latest_end(), Time::hm(28, 5));
    }

    #[test]
    fn bins_map_both_ways() {
        let cfg = SchedulerConfig::default();
        assert_eq!(cfg.bin_of(Time::hm(4, 0)), 0);
        assert_eq!(cfg.bin_of(Time::hm(8, 14)), 16);
        assert_eq!(cfg.time_of_bin(16), Time::hm(8, 0));
        // Times outside the day clamp to the table.
        assert_eq!(cfg.bin_of(Time::hm(2, 0)), 0);
        assert_eq!(cfg.bin_of(Time::hm(29, 0)), 95);
        assert_eq!(cfg.duration_bins(Time::hm(2, 0)), 8);
    }

    #[test]
    fn rejects_inverted_day() {
        let cfg = SchedulerConfig {
            day_end: Time::hm(3, 0),
            ..SchedulerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_fraction() {
        let cfg = SchedulerConfig { overlap_allowed: 0.0, ..SchedulerConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SchedulerConfig { overlap_allowed: 1.5, ..SchedulerConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_uneven_quanta() {
        let cfg = SchedulerConfig { start_time_quanta: 97, ..SchedulerConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod activity {
    use crate::Activity;

    #[test]
    fn classification() {
        assert!(Activity::WorkBasedBusiness.is_work());
        assert!(!Activity::Market.is_work());
        assert!(Activity::JointMarket.is_joint());
        assert!(Activity::ReturnFromWork.is_at_home());
        assert!(Activity::Home.is_joint_trip_purpose());
        assert!(!Activity::Market.is_joint_trip_purpose());
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Activity::ALL.iter().map(|a| a.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Activity::ALL.len());
    }
}

#[cfg(test)]
mod rng {
    use crate::{HouseholdId, HouseholdRng};

    #[test]
    fn same_inputs_same_stream() {
        let mut a = HouseholdRng::new(99, HouseholdId(5), 0);
        let mut b = HouseholdRng::new(99, HouseholdId(5), 0);
        for _ in 0..16 {
            assert_eq!(a.unit_f32().to_bits(), b.unit_f32().to_bits());
        }
    }

    #[test]
    fn iterations_differ() {
        let mut a = HouseholdRng::new(99, HouseholdId(5), 0);
        let mut b = HouseholdRng::new(99, HouseholdId(5), 1);
        let xs: Vec<u32> = (0..8).map(|_| a.unit_f32().to_bits()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.unit_f32().to_bits()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn unit_draw_in_range() {
        let mut r = HouseholdRng::new(1, HouseholdId(0), 0);
        for _ in 0..1_000 {
            let u = r.unit_f32();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
