//! Unit tests for hs-distribution.

use hs_core::{Activity, DistributionId, DistrictId, HouseholdId, HouseholdRng, PersonId, SchedulerConfig, Time, ZoneId};
use hs_household::{
    EmploymentStatus, Household, HouseholdBuilder, HouseholdStatus, Occupation, PersonBuilder,
    PersonStatus, StudentStatus, Workplace,
};

use crate::{
    AdultDistributions, Adjustments, DistributionEntry, DistributionError, DistributionTable,
    DistributionTableBuilder, GenerationAdjustment, StartTimeAdjustment, StartTimeProfile,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const ID: DistributionId = DistributionId(0);

fn cfg() -> SchedulerConfig {
    SchedulerConfig::default()
}

fn empty_entry() -> DistributionEntry {
    DistributionEntry::zeros(96, 11)
}

fn table_with(entry: DistributionEntry) -> DistributionTable {
    DistributionTableBuilder::new(&cfg()).entry(ID, entry).build().unwrap()
}

fn rng() -> HouseholdRng {
    HouseholdRng::new(7, HouseholdId(1), 0)
}

fn household(adults: u8, children: u8) -> Household {
    let mut b = HouseholdBuilder::new(HouseholdId(1), ZoneId(1));
    let mut id = 0;
    for _ in 0..adults {
        b = b.person(PersonBuilder::new(PersonId(id), 40).build());
        id += 1;
    }
    for _ in 0..children {
        b = b.person(PersonBuilder::new(PersonId(id), 8).build());
        id += 1;
    }
    b.build().unwrap()
}

// ── Table construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use super::*;

    #[test]
    fn unknown_id_is_an_error() {
        let table = table_with(empty_entry());
        let err = table.entry(DistributionId(5)).unwrap_err();
        assert!(matches!(err, DistributionError::UnknownDistribution(DistributionId(5))));
    }

    #[test]
    fn wrong_shape_rejected() {
        let entry = DistributionEntry::from_rows(vec![1.0; 11], vec![vec![0.0; 11]; 95], vec![vec![0.0; 97]; 96]);
        let err = DistributionTableBuilder::new(&cfg()).entry(ID, entry).build().unwrap_err();
        assert!(matches!(err, DistributionError::Shape { what: "start-time table", .. }));
    }

    #[test]
    fn id_beyond_table_rejected() {
        let err = DistributionTableBuilder::new(&cfg())
            .entry(DistributionId(262), empty_entry())
            .build()
            .unwrap_err();
        assert!(matches!(err, DistributionError::IdOutOfRange { rows: 262, .. }));
    }

    #[test]
    fn from_rows_matches_setters() {
        let mut starts = vec![vec![0.0; 11]; 96];
        starts[20][1] = 3.0;
        let rows = DistributionEntry::from_rows(vec![0.0; 11], starts, vec![vec![0.0; 97]; 96]);
        let mut set = empty_entry();
        set.set_start_weight(20, 1, 3.0);
        assert_eq!(rows, set);
        assert_eq!(rows.start_weight(20, 1), 3.0);
    }
}

// ── Sampling ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampling {
    use super::*;

    #[test]
    fn zero_frequency_row_is_infeasible() {
        let table = table_with(empty_entry());
        let mut r = rng();
        for _ in 0..10 {
            assert_eq!(table.sample_frequency(ID, 0..=10, 1.0, &mut r).unwrap(), None);
        }
    }

    #[test]
    fn point_mass_frequency() {
        let mut e = empty_entry();
        e.set_frequency(2, 1.0);
        let table = table_with(e);
        let mut r = rng();
        for _ in 0..50 {
            assert_eq!(table.sample_frequency(ID, 0..=10, 1.0, &mut r).unwrap(), Some(2));
        }
    }

    #[test]
    fn degenerate_range_returns_its_value() {
        let table = table_with(empty_entry());
        assert_eq!(table.sample_frequency(ID, 1..=1, 1.0, &mut rng()).unwrap(), Some(1));
        assert_eq!(table.sample_frequency(ID, 3..=2, 1.0, &mut rng()).unwrap(), None);
    }

    #[test]
    fn zero_factor_removes_positive_outcomes() {
        let mut e = empty_entry();
        e.set_frequency(0, 1.0).set_frequency(1, 5.0);
        let table = table_with(e);
        let mut r = rng();
        for _ in 0..50 {
            assert_eq!(table.sample_frequency(ID, 0..=10, 0.0, &mut r).unwrap(), Some(0));
        }
    }

    #[test]
    fn frequency_proportions() {
        let mut e = empty_entry();
        e.set_frequency(0, 1.0).set_frequency(1, 3.0);
        let table = table_with(e);
        let mut r = rng();
        let ones = (0..4_000)
            .filter(|_| table.sample_frequency(ID, 0..=10, 1.0, &mut r).unwrap() == Some(1))
            .count();
        assert!((2_800..3_200).contains(&ones), "got {ones}");
    }

    #[test]
    fn start_time_maps_bins_to_clock() {
        let mut e = empty_entry();
        e.set_start_weight(20, 1, 1.0);
        let table = table_with(e);
        let t = table
            .sample_start_time(ID, 1, 0..96, &StartTimeProfile::neutral(), &mut rng())
            .unwrap();
        assert_eq!(t, Some(Time::hm(9, 0)));
    }

    #[test]
    fn start_time_outside_window_is_infeasible() {
        let mut e = empty_entry();
        e.set_start_weight(20, 1, 1.0);
        let table = table_with(e);
        let profile = StartTimeProfile::neutral();
        assert_eq!(table.sample_start_time(ID, 1, 21..96, &profile, &mut rng()).unwrap(), None);
        assert_eq!(table.sample_start_time(ID, 1, 30..30, &profile, &mut rng()).unwrap(), None);
    }

    #[test]
    fn start_at_day_start_is_infeasible() {
        let mut e = empty_entry();
        e.set_start_weight(0, 1, 1.0);
        let table = table_with(e);
        let t = table.sample_start_time(ID, 1, 0..96, &StartTimeProfile::neutral(), &mut rng()).unwrap();
        assert_eq!(t, None);
    }

    #[test]
    fn start_time_frequency_out_of_range() {
        let table = table_with(empty_entry());
        let err = table
            .sample_start_time(ID, 11, 0..96, &StartTimeProfile::neutral(), &mut rng())
            .unwrap_err();
        assert!(matches!(err, DistributionError::FrequencyOutOfRange { frequency: 11, .. }));
    }

    #[test]
    fn duration_bins_to_minutes() {
        let mut e = empty_entry();
        let start_bin = 16; // 08:00
        e.set_duration_weight(start_bin, 8, 1.0);
        let table = table_with(e);
        let d = table.sample_duration(ID, Time::hm(8, 0), None, &mut rng()).unwrap();
        assert_eq!(d, Some(Time::hm(2, 0)));
    }

    #[test]
    fn duration_bin_zero_is_one_bin() {
        let mut e = empty_entry();
        e.set_duration_weight(16, 0, 1.0);
        let table = table_with(e);
        let d = table.sample_duration(ID, Time::hm(8, 0), None, &mut rng()).unwrap();
        assert_eq!(d, Some(Time::minutes(15)));
    }

    #[test]
    fn duration_limited_by_max() {
        let mut e = empty_entry();
        e.set_duration_weight(16, 8, 1.0);
        let table = table_with(e);
        let mut r = rng();
        assert_eq!(table.sample_duration(ID, Time::hm(8, 0), Some(Time::hm(1, 0)), &mut r).unwrap(), None);
        assert_eq!(table.sample_duration(ID, Time::hm(8, 0), Some(Time::minutes(10)), &mut r).unwrap(), None);
        assert_eq!(
            table.sample_duration(ID, Time::hm(8, 0), Some(Time::hm(3, 0)), &mut r).unwrap(),
            Some(Time::hm(2, 0))
        );
    }

    #[test]
    fn same_seed_same_draws() {
        let mut e = empty_entry();
        for f in 0..=10 {
            e.set_frequency(f, 1.0);
        }
        let table = table_with(e);
        let (mut a, mut b) = (rng(), rng());
        for _ in 0..100 {
            assert_eq!(
                table.sample_frequency(ID, 0..=10, 1.0, &mut a).unwrap(),
                table.sample_frequency(ID, 0..=10, 1.0, &mut b).unwrap()
            );
        }
    }
}

// ── Adjustments ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjustments {
    use super::*;

    fn adjustments() -> Adjustments {
        Adjustments {
            generation: vec![
                GenerationAdjustment {
                    distribution_ids:   vec![ID, DistributionId(3)],
                    household_district: Some(DistrictId(1)),
                    work_district:      None,
                    factor:             2.0,
                },
                GenerationAdjustment {
                    distribution_ids:   vec![ID],
                    household_district: None,
                    work_district:      Some(DistrictId(9)),
                    factor:             0.5,
                },
            ],
            start_time: vec![StartTimeAdjustment {
                distribution_ids:   vec![ID],
                household_district: None,
                work_district:      None,
                start:              Time::hm(7, 0),
                end:                Time::hm(9, 0),
                factor:             3.0,
            }],
        }
    }

    #[test]
    fn generation_factors_multiply() {
        let a = adjustments();
        assert_eq!(a.generation_factor(ID, Some(DistrictId(1)), None), 2.0);
        assert_eq!(a.generation_factor(ID, Some(DistrictId(1)), Some(DistrictId(9))), 1.0);
        assert_eq!(a.generation_factor(ID, Some(DistrictId(2)), None), 1.0);
        assert_eq!(a.generation_factor(DistributionId(4), Some(DistrictId(1)), None), 1.0);
    }

    #[test]
    fn start_profile_windows() {
        let a = adjustments();
        let profile = a.start_time_profile(ID, None, None);
        assert!(!profile.is_neutral());
        assert_eq!(profile.factor(Time::hm(7, 0)), 3.0);
        assert_eq!(profile.factor(Time::hm(9, 0)), 1.0);
        assert!(a.start_time_profile(DistributionId(3), None, None).is_neutral());
    }

    #[test]
    fn start_profile_reweights_draws() {
        let mut e = empty_entry();
        e.set_start_weight(12, 1, 1.0); // 07:00
        e.set_start_weight(24, 1, 1.0); // 10:00
        let adjust = Adjustments {
            start_time: vec![StartTimeAdjustment {
                distribution_ids:   vec![ID],
                household_district: None,
                work_district:      None,
                start:              Time::hm(10, 0),
                end:                Time::hm(11, 0),
                factor:             0.0,
            }],
            ..Adjustments::default()
        };
        let table = DistributionTableBuilder::new(&cfg())
            .entry(ID, e)
            .adjustments(adjust)
            .build()
            .unwrap();
        let profile = table.adjustments().start_time_profile(ID, None, None);
        let mut r = rng();
        for _ in 0..50 {
            let t = table.sample_start_time(ID, 1, 0..96, &profile, &mut r).unwrap();
            assert_eq!(t, Some(Time::hm(7, 0)));
        }
    }
}

// ── Adult distributions ───────────────────────────────────────────────────────

#[cfg(test)]
mod adults {
    use super::*;

    #[test]
    fn draws_within_household_adults() {
        let adults = AdultDistributions::new(vec![vec![0.0, 0.0, 0.0, 0.0, 1.0]]);
        // Four adults wanted but only three live there: no mass left.
        assert_eq!(adults.sample(0, 3, &mut rng()).unwrap(), None);
        assert_eq!(adults.sample(0, 4, &mut rng()).unwrap(), Some(4));
    }

    #[test]
    fn unknown_row() {
        let adults = AdultDistributions::new(vec![]);
        assert!(adults.sample(2, 3, &mut rng()).is_err());
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use super::*;
    use crate::{adult_distribution, fixed_adult_count, household_distribution, person_distribution};

    fn worker(age: u8, status: EmploymentStatus, occupation: Occupation) -> hs_household::Person {
        PersonBuilder::new(PersonId(0), age)
            .employment(status, occupation)
            .workplace(Workplace::Zone(ZoneId(5)))
            .build()
    }

    const NONE: PersonStatus = PersonStatus::NoWorkOrSchool;

    #[test]
    fn primary_work_rows() {
        let p = worker(30, EmploymentStatus::FullTime, Occupation::Office);
        assert_eq!(person_distribution(&p, Activity::PrimaryWork, NONE), Some(DistributionId(16)));
        let p = worker(20, EmploymentStatus::PartTime, Occupation::Retail);
        assert_eq!(person_distribution(&p, Activity::PrimaryWork, NONE), Some(DistributionId(15)));
        assert_eq!(person_distribution(&p, Activity::SecondaryWork, NONE), Some(DistributionId(39)));
        assert_eq!(person_distribution(&p, Activity::WorkBasedBusiness, NONE), Some(DistributionId(55)));
        assert_eq!(person_distribution(&p, Activity::ReturnFromWork, NONE), Some(DistributionId(101)));
    }

    #[test]
    fn primary_work_needs_a_workplace() {
        let p = PersonBuilder::new(PersonId(0), 30)
            .employment(EmploymentStatus::FullTime, Occupation::Office)
            .build();
        assert_eq!(person_distribution(&p, Activity::PrimaryWork, NONE), None);
        let young = worker(10, EmploymentStatus::FullTime, Occupation::Office);
        assert_eq!(person_distribution(&young, Activity::PrimaryWork, NONE), None);
    }

    #[test]
    fn work_at_home_rows() {
        let p = worker(70, EmploymentStatus::WorkAtHomeFullTime, Occupation::Professional);
        assert_eq!(person_distribution(&p, Activity::WorkAtHomeBusiness, NONE), Some(DistributionId(82)));
        let p = worker(18, EmploymentStatus::WorkAtHomeFullTime, Occupation::Professional);
        assert_eq!(person_distribution(&p, Activity::WorkAtHomeBusiness, NONE), None);
    }

    #[test]
    fn school_rows() {
        let p = PersonBuilder::new(PersonId(0), 17).student(StudentStatus::FullTime, None).build();
        assert_eq!(person_distribution(&p, Activity::School, NONE), Some(DistributionId(86)));
        let p = PersonBuilder::new(PersonId(0), 40).student(StudentStatus::PartTime, None).build();
        assert_eq!(person_distribution(&p, Activity::School, NONE), Some(DistributionId(93)));
        let p = PersonBuilder::new(PersonId(0), 40).build();
        assert_eq!(person_distribution(&p, Activity::School, NONE), None);
    }

    #[test]
    fn individual_rows_use_status() {
        let p = PersonBuilder::new(PersonId(0), 30).female().build();
        assert_eq!(
            person_distribution(&p, Activity::Market, PersonStatus::FullTimeEvening),
            Some(DistributionId(219))
        );
        assert_eq!(person_distribution(&p, Activity::IndividualOther, NONE), Some(DistributionId(137)));
        let kid = PersonBuilder::new(PersonId(0), 9).build();
        assert_eq!(person_distribution(&kid, Activity::IndividualOther, NONE), None);
        assert_eq!(person_distribution(&p, Activity::JointOther, NONE), None);
    }

    #[test]
    fn household_rows() {
        let hh = household(2, 1);
        assert_eq!(
            household_distribution(&hh, Activity::JointOther, HouseholdStatus::NoEveningWorkOrSchool),
            Some(DistributionId(163))
        );
        let hh = household(3, 0);
        assert_eq!(
            household_distribution(&hh, Activity::JointMarket, HouseholdStatus::DayAndEveningWorkOrSchool),
            Some(DistributionId(261))
        );
        assert_eq!(household_distribution(&hh, Activity::Market, HouseholdStatus::NoWorkOrSchool), None);
    }

    #[test]
    fn adult_rows() {
        assert_eq!(adult_distribution(&household(2, 1), Activity::JointMarket), Some(3));
        assert_eq!(adult_distribution(&household(4, 0), Activity::JointOther), Some(2));
        assert_eq!(adult_distribution(&household(2, 0), Activity::JointOther), None);
        assert_eq!(fixed_adult_count(&household(2, 0)), Some(2));
        assert_eq!(fixed_adult_count(&household(1, 2)), Some(1));
        assert_eq!(fixed_adult_count(&household(3, 0)), None);
    }
}
