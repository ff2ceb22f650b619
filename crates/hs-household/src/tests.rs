//! Unit tests for hs-household.

use hs_core::{HouseholdId, PersonId, Time, ZoneId};

use crate::{
    EmploymentStatus, HouseholdBuilder, HouseholdError, HouseholdStatus, Occupation, Person,
    PersonBuilder, PersonStatus, Population, StudentStatus,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn adult(id: u32) -> Person {
    PersonBuilder::new(PersonId(id), 35).build()
}

fn child(id: u32, age: u8) -> Person {
    PersonBuilder::new(PersonId(id), age)
        .student(StudentStatus::FullTime, None)
        .build()
}

fn classify(start: Time, end: Time) -> PersonStatus {
    PersonStatus::classify(Some((start, end)), Time::hm(4, 0), Time::hm(4, 40))
}

// ── Builders ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builders {
    use super::*;

    #[test]
    fn composition_counts() {
        let hh = HouseholdBuilder::new(HouseholdId(1), ZoneId(10))
            .person(adult(0))
            .person(adult(1))
            .person(child(2, 8))
            .build()
            .unwrap();
        assert_eq!(hh.size(), 3);
        assert_eq!(hh.adults(), 2);
        assert_eq!(hh.children(), 1);
        assert_eq!(hh.position_of(PersonId(2)), Some(2));
    }

    #[test]
    fn empty_household_rejected() {
        let err = HouseholdBuilder::new(HouseholdId(1), ZoneId(10)).build().unwrap_err();
        assert!(matches!(err, HouseholdError::Empty(HouseholdId(1))));
    }

    #[test]
    fn duplicate_person_rejected() {
        let err = HouseholdBuilder::new(HouseholdId(1), ZoneId(10))
            .persons([adult(4), adult(4)])
            .build()
            .unwrap_err();
        assert!(matches!(err, HouseholdError::DuplicatePerson { person: PersonId(4), .. }));
    }

    #[test]
    fn invalid_home_zone_rejected() {
        let err = HouseholdBuilder::new(HouseholdId(1), ZoneId::INVALID)
            .person(adult(0))
            .build()
            .unwrap_err();
        assert!(matches!(err, HouseholdError::MissingHomeZone(_)));
    }

    #[test]
    fn student_first_rule() {
        let p = PersonBuilder::new(PersonId(0), 20)
            .employment(EmploymentStatus::PartTime, Occupation::Retail)
            .student(StudentStatus::FullTime, Some(ZoneId(3)))
            .build();
        assert!(p.is_student_first());
        assert!(!adult(1).is_student_first());
    }

    #[test]
    fn occupation_table_index() {
        assert_eq!(Occupation::Professional.table_index(), Some(2));
        assert_eq!(Occupation::Unknown.table_index(), None);
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use super::*;

    #[test]
    fn no_window_is_no_work() {
        let s = PersonStatus::classify(None, Time::hm(4, 0), Time::hm(4, 40));
        assert_eq!(s, PersonStatus::NoWorkOrSchool);
        assert_eq!(classify(Time::hm(4, 0), Time::hm(12, 0)), PersonStatus::NoWorkOrSchool);
    }

    #[test]
    fn full_time_shapes() {
        assert_eq!(classify(Time::hm(7, 0), Time::hm(13, 0)), PersonStatus::FullTimeNoEvening);
        assert_eq!(classify(Time::hm(10, 0), Time::hm(18, 0)), PersonStatus::FullTimeEvening);
        assert_eq!(classify(Time::hm(8, 0), Time::hm(17, 0)), PersonStatus::FullTimeDayAndEvening);
    }

    #[test]
    fn part_time_shapes() {
        assert_eq!(classify(Time::hm(6, 0), Time::hm(9, 0)), PersonStatus::PartTimeDay);
        assert_eq!(classify(Time::hm(10, 0), Time::hm(13, 0)), PersonStatus::PartTimeEvening);
        assert_eq!(classify(Time::hm(17, 0), Time::hm(20, 0)), PersonStatus::Other);
    }

    #[test]
    fn household_aggregate() {
        use PersonStatus::*;
        assert_eq!(HouseholdStatus::aggregate([NoWorkOrSchool]), HouseholdStatus::NoWorkOrSchool);
        assert_eq!(
            HouseholdStatus::aggregate([FullTimeNoEvening, NoWorkOrSchool]),
            HouseholdStatus::NoEveningWorkOrSchool
        );
        assert_eq!(HouseholdStatus::aggregate([Other]), HouseholdStatus::EveningWorkOrSchool);
        assert_eq!(
            HouseholdStatus::aggregate([PartTimeDay, FullTimeEvening]),
            HouseholdStatus::DayAndEveningWorkOrSchool
        );
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population {
    use super::*;

    fn household(id: u32) -> crate::Household {
        HouseholdBuilder::new(HouseholdId(id), ZoneId(1))
            .person(adult(0))
            .person(child(1, 9))
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_by_id() {
        let pop = Population::new(vec![household(7), household(3)]).unwrap();
        assert_eq!(pop.len(), 2);
        assert_eq!(pop.person_count(), 4);
        assert_eq!(pop.get(HouseholdId(3)).unwrap().id, HouseholdId(3));
        assert!(pop.get(HouseholdId(4)).is_none());
    }

    #[test]
    fn duplicate_household_rejected() {
        let err = Population::new(vec![household(7), household(7)]).unwrap_err();
        assert!(matches!(err, HouseholdError::DuplicateHousehold(HouseholdId(7))));
    }
}
