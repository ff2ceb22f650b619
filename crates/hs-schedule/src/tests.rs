//! Unit tests for hs-schedule.

use hs_core::{Activity, HouseholdId, HouseholdRng, PersonId, SchedulerConfig, Time, ZoneId};
use hs_household::{Person, PersonBuilder};

use crate::{
    ConflictType, ConstantTravelTime, DayBounds, Episode, HomeLocation, InsertOutcome, NoPadding,
    PersonSchedule, ProjectKind, ProjectSchedule, Rejection, Trip, TripChain, UniformZones, classify,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const P0: PersonId = PersonId(0);
const HOME: ZoneId = ZoneId(1);

fn t(h: i32, m: i32) -> Time {
    Time::hm(h, m)
}

fn ep(activity: Activity, start: Time, end: Time) -> Episode {
    Episode::new(activity, start, end - start, P0)
}

fn located(activity: Activity, start: Time, end: Time, zone: u32) -> Episode {
    ep(activity, start, end).with_zone(ZoneId(zone))
}

fn project(kind: ProjectKind) -> ProjectSchedule {
    ProjectSchedule::new(kind, &SchedulerConfig::default())
}

fn person_schedule() -> PersonSchedule {
    PersonSchedule::new(P0, HOME, &SchedulerConfig::default())
}

fn person() -> Person {
    PersonBuilder::new(P0, 30).build()
}

fn travel() -> ConstantTravelTime {
    ConstantTravelTime { intrazonal: Time::ZERO, interzonal: Time::minutes(20) }
}

fn rng() -> HouseholdRng {
    HouseholdRng::new(99, HouseholdId(1), 0)
}

fn windows(schedule: &crate::Schedule) -> Vec<(Time, Time)> {
    schedule.iter().map(|e| (e.start(), e.end())).collect()
}

fn insert(p: &mut ProjectSchedule, e: Episode) -> InsertOutcome {
    p.insert(e).unwrap()
}

// ── Episode ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod episode {
    use super::*;

    #[test]
    fn negative_duration_is_clamped() {
        let e = Episode::new(Activity::Market, t(9, 0), Time::minutes(-30), P0);
        assert_eq!(e.end(), e.start());
        assert_eq!(e.original_duration(), Time::ZERO);
    }

    #[test]
    fn floor_rounds_up() {
        let e = ep(Activity::Market, t(9, 0), t(9, 25));
        assert_eq!(e.floor(0.5), Time::minutes(13));
    }

    #[test]
    fn joint_owner_is_first_participant() {
        let e = Episode::joint(Activity::JointOther, t(18, 0), Time::ONE_HOUR, vec![PersonId(3), PersonId(1)]);
        assert!(e.is_joint());
        assert_eq!(e.owner(), PersonId(3));
    }

    #[test]
    fn overlap_minutes() {
        let e = ep(Activity::Market, t(9, 0), t(10, 0));
        assert_eq!(e.overlap_with(t(9, 30), t(11, 0)), Time::minutes(30));
        assert_eq!(e.overlap_with(t(10, 0), t(11, 0)), Time::ZERO);
    }
}

// ── Classification ────────────────────────────────────────────────────────────

#[cfg(test)]
mod conflict {
    use super::*;

    fn existing() -> Vec<Episode> {
        vec![ep(Activity::Market, t(8, 0), t(9, 0)), ep(Activity::Market, t(10, 0), t(11, 0))]
    }

    #[test]
    fn empty_list_is_no_conflict() {
        let r = classify(&[], &ep(Activity::Market, t(9, 0), t(10, 0)), &NoPadding);
        assert_eq!(r.kind, ConflictType::NoConflict);
        assert_eq!(r.position, 0);
    }

    #[test]
    fn touching_windows_do_not_conflict() {
        let r = classify(&existing(), &ep(Activity::Market, t(9, 0), t(10, 0)), &NoPadding);
        assert_eq!(r.kind, ConflictType::NoConflict);
        assert_eq!(r.position, 1);
    }

    #[test]
    fn identical_window_is_complete_overlap() {
        let r = classify(&existing(), &ep(Activity::Market, t(10, 0), t(11, 0)), &NoPadding);
        assert_eq!(r.kind, ConflictType::CompleteOverlap);
    }

    #[test]
    fn covering_the_next_episode_is_complete_overlap() {
        let r = classify(&existing(), &ep(Activity::Market, t(8, 30), t(11, 30)), &NoPadding);
        assert_eq!(r.kind, ConflictType::CompleteOverlap);
        assert_eq!(r.position, 1);
    }

    #[test]
    fn strictly_inside_is_split() {
        let r = classify(&existing(), &ep(Activity::Market, t(10, 15), t(10, 45)), &NoPadding);
        assert_eq!(r.kind, ConflictType::Split);
        assert_eq!(r.position, 1);
    }

    #[test]
    fn head_overlap_is_anterior() {
        let r = classify(&existing(), &ep(Activity::Market, t(9, 30), t(10, 30)), &NoPadding);
        assert_eq!(r.kind, ConflictType::Anterior);
        assert_eq!(r.position, 1);
    }

    #[test]
    fn tail_overlap_is_posterior() {
        let r = classify(&existing(), &ep(Activity::Market, t(8, 30), t(9, 30)), &NoPadding);
        assert_eq!(r.kind, ConflictType::Posterior);
        assert_eq!(r.position, 0);
    }

    #[test]
    fn reclassifying_inserted_episodes_is_idempotent() {
        let mut p = project(ProjectKind::Market);
        for (s, e) in [(t(8, 0), t(9, 0)), (t(8, 30), t(10, 0)), (t(13, 0), t(14, 0)), (t(12, 30), t(13, 30))] {
            assert!(insert(&mut p, ep(Activity::Market, s, e)).is_inserted());
        }
        let all = p.episodes().to_vec();
        for i in 0..all.len() {
            let mut others = all.clone();
            let me = others.remove(i);
            let r = classify(&others, &me, &NoPadding);
            assert_eq!(r.kind, ConflictType::NoConflict, "episode {i}");
            assert_eq!(r.position, i);
        }
    }
}

// ── Project schedules ─────────────────────────────────────────────────────────

#[cfg(test)]
mod project {
    use super::*;

    #[test]
    fn work_based_business_splits_primary_work() {
        let mut p = project(ProjectKind::Work);
        insert(&mut p, ep(Activity::PrimaryWork, t(8, 0), t(16, 0)));
        let wbb = ep(Activity::WorkBasedBusiness, t(11, 0), t(12, 0));
        assert_eq!(p.classify(&wbb).kind, ConflictType::Split);

        assert_eq!(insert(&mut p, wbb), InsertOutcome::Inserted { position: 1 });
        assert_eq!(windows(&p), vec![(t(8, 0), t(11, 0)), (t(11, 0), t(12, 0)), (t(12, 0), t(16, 0))]);

        let work: Time = p.iter().filter(|e| e.activity() == Activity::PrimaryWork).map(Episode::duration).sum();
        assert_eq!(work, Time::hm(8, 0) - Time::ONE_HOUR);
        assert_eq!(p.episodes()[2].original_duration(), Time::hm(4, 0));
    }

    #[test]
    fn secondary_work_may_not_split() {
        let mut p = project(ProjectKind::Work);
        insert(&mut p, ep(Activity::PrimaryWork, t(8, 0), t(16, 0)));
        let out = insert(&mut p, ep(Activity::SecondaryWork, t(11, 0), t(12, 0)));
        assert_eq!(out, InsertOutcome::Rejected(Rejection::IllegalSplit));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn non_work_projects_never_split() {
        let mut p = project(ProjectKind::School);
        insert(&mut p, ep(Activity::School, t(8, 0), t(15, 0)));
        let out = insert(&mut p, ep(Activity::School, t(10, 0), t(11, 0)));
        assert_eq!(out, InsertOutcome::Rejected(Rejection::IllegalSplit));
    }

    #[test]
    fn gap_fill_moves_only_the_candidate() {
        let mut p = project(ProjectKind::IndividualOther);
        insert(&mut p, ep(Activity::IndividualOther, t(8, 0), t(10, 0)));
        let out = insert(&mut p, ep(Activity::IndividualOther, t(9, 50), t(11, 50)));
        assert_eq!(out, InsertOutcome::Inserted { position: 1 });
        assert_eq!(windows(&p), vec![(t(8, 0), t(10, 0)), (t(10, 0), t(12, 0))]);
    }

    #[test]
    fn neighbours_slide_in_proportion_to_their_room() {
        let mut p = project(ProjectKind::Market);
        insert(&mut p, ep(Activity::Market, t(8, 0), t(10, 0)));
        insert(&mut p, ep(Activity::Market, t(12, 0), t(14, 0)));
        let out = insert(&mut p, ep(Activity::Market, t(9, 30), t(12, 30)));
        assert_eq!(out, InsertOutcome::Inserted { position: 1 });
        // 60 min deficit; 240 min of room before, 845 after.
        assert_eq!(
            windows(&p),
            vec![(t(7, 47), t(9, 47)), (t(9, 47), t(12, 47)), (t(12, 47), t(14, 47))]
        );
    }

    #[test]
    fn squeeze_shares_the_window_by_original_duration() {
        let bounds = DayBounds { day_start: t(8, 0), latest_end: t(12, 0), overlap_allowed: 0.5 };
        let mut p = ProjectSchedule::with_bounds(ProjectKind::Market, bounds);
        insert(&mut p, ep(Activity::Market, t(8, 0), t(10, 0)));
        let out = insert(&mut p, ep(Activity::Market, t(9, 0), t(12, 0)));
        assert!(out.is_inserted());
        assert_eq!(windows(&p), vec![(t(8, 0), t(9, 36)), (t(9, 36), t(12, 0))]);
    }

    #[test]
    fn floors_that_cannot_fit_are_rejected_without_change() {
        let bounds = DayBounds { day_start: t(8, 0), latest_end: t(12, 0), overlap_allowed: 0.5 };
        let mut p = ProjectSchedule::with_bounds(ProjectKind::Market, bounds);
        insert(&mut p, ep(Activity::Market, t(8, 0), t(12, 0)));
        let out = insert(&mut p, ep(Activity::Market, t(11, 0), t(15, 10)));
        assert_eq!(out, InsertOutcome::Rejected(Rejection::NoRoom));
        assert_eq!(windows(&p), vec![(t(8, 0), t(12, 0))]);
    }

    #[test]
    fn random_insertions_keep_every_invariant() {
        let mut r = rng();
        let mut p = project(ProjectKind::Market);
        for _ in 0..300 {
            let start = Time::minutes(r.gen_range(5 * 60..22 * 60));
            let length = Time::minutes(r.gen_range(15..240));
            p.insert(ep(Activity::Market, start, start + length)).unwrap();
            p.check_integrity().unwrap();
            assert!(p.iter().all(|e| e.duration() >= e.floor(0.5)));
        }
        assert!(!p.is_empty());
    }

    #[test]
    fn window_of_spans_fragments() {
        let mut p = project(ProjectKind::Work);
        insert(&mut p, ep(Activity::PrimaryWork, t(8, 0), t(16, 0)));
        insert(&mut p, ep(Activity::ReturnFromWork, t(12, 0), t(12, 30)));
        assert_eq!(p.window_of(Activity::PrimaryWork), Some((t(8, 0), t(16, 0))));
        assert_eq!(p.window_of(Activity::School), None);
    }
}

// ── Person schedules ──────────────────────────────────────────────────────────

#[cfg(test)]
mod person {
    use super::*;

    #[test]
    fn single_episode_into_empty_day_is_unchanged() {
        let mut s = person_schedule();
        let e = ep(Activity::Market, t(9, 0), t(11, 0));
        assert_eq!(classify(s.episodes(), &e, &NoPadding).kind, ConflictType::NoConflict);

        let zones = UniformZones::new(vec![ZoneId(2)]);
        let out = s.insert(e, &person(), &travel(), &zones, &mut rng()).unwrap();
        assert_eq!(out, InsertOutcome::Inserted { position: 0 });
        let only = &s.episodes()[0];
        assert_eq!((only.start(), only.end()), (t(9, 0), t(11, 0)));
        assert_eq!(only.zone(), Some(ZoneId(2)));
        assert_eq!(only.travel_time(), Time::minutes(20));
    }

    #[test]
    fn exact_duplicate_is_rejected_and_schedule_unchanged() {
        let mut s = person_schedule();
        s.insert_located(located(Activity::Market, t(9, 0), t(11, 0), 2), &travel()).unwrap();
        let out = s.insert_located(located(Activity::Market, t(9, 0), t(11, 0), 2), &travel()).unwrap();
        assert_eq!(out, InsertOutcome::Rejected(Rejection::CompleteOverlap));
        assert_eq!(windows(&s), vec![(t(9, 0), t(11, 0))]);
    }

    #[test]
    fn travel_time_is_reserved_between_zones() {
        let mut s = person_schedule();
        s.insert_located(located(Activity::PrimaryWork, t(9, 0), t(11, 0), 2), &travel()).unwrap();
        let out = s.insert_located(located(Activity::Market, t(11, 0), t(12, 0), 3), &travel()).unwrap();
        assert_eq!(out, InsertOutcome::Inserted { position: 1 });
        assert_eq!(windows(&s), vec![(t(9, 0), t(11, 0)), (t(11, 20), t(12, 20))]);
        assert_eq!(s.episodes()[0].travel_time(), Time::minutes(20));
    }

    #[test]
    fn same_zone_needs_no_padding() {
        let mut s = person_schedule();
        s.insert_located(located(Activity::PrimaryWork, t(9, 0), t(11, 0), 2), &travel()).unwrap();
        s.insert_located(located(Activity::WorkBasedBusiness, t(11, 0), t(12, 0), 2), &travel()).unwrap();
        assert_eq!(windows(&s), vec![(t(9, 0), t(11, 0)), (t(11, 0), t(12, 0))]);
    }

    #[test]
    fn person_schedules_never_split() {
        let mut s = person_schedule();
        s.insert_located(located(Activity::PrimaryWork, t(8, 0), t(16, 0), 2), &travel()).unwrap();
        let out = s.insert_located(located(Activity::WorkBasedBusiness, t(11, 0), t(12, 0), 2), &travel()).unwrap();
        assert_eq!(out, InsertOutcome::Rejected(Rejection::IllegalSplit));
    }

    #[test]
    fn no_zone_rejects_the_attempt() {
        let mut s = person_schedule();
        let none = UniformZones::new(Vec::new());
        let out = s.insert(ep(Activity::Market, t(9, 0), t(10, 0)), &person(), &travel(), &none, &mut rng()).unwrap();
        assert_eq!(out, InsertOutcome::Rejected(Rejection::NoLocation));
        assert!(s.is_empty());
    }

    #[test]
    fn home_location_keeps_trips_intrazonal() {
        let mut s = person_schedule();
        s.insert(ep(Activity::Market, t(9, 0), t(10, 0)), &person(), &travel(), &HomeLocation, &mut rng()).unwrap();
        assert_eq!(s.zone_at(0), HOME);
        assert_eq!(s.episodes()[0].travel_time(), Time::ZERO);
    }

    #[test]
    fn short_work_fragments_are_removed() {
        let mut s = person_schedule();
        s.insert_located(located(Activity::PrimaryWork, t(8, 0), t(8, 20), 2), &travel()).unwrap();
        s.insert_located(located(Activity::Market, t(9, 0), t(10, 0), 2), &travel()).unwrap();
        assert_eq!(s.remove_short_work(Time::minutes(30)), 1);
        assert_eq!(s.len(), 1);
        assert_eq!(s.episodes()[0].activity(), Activity::Market);
    }

    #[test]
    fn dump_lists_every_episode() {
        let mut s = person_schedule();
        s.insert_located(located(Activity::Market, t(9, 0), t(10, 0), 2), &travel()).unwrap();
        let dump = s.dump();
        assert!(dump.contains("Activity -> market, Start -> 09:00, End -> 10:00, TT -> 00:20"));
    }
}

// ── Trips ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trip {
    use super::*;

    fn chain(person: u32, purpose: Activity) -> TripChain {
        let mut c = TripChain::new(PersonId(person));
        c.push(Trip { purpose, start: t(18, 0), origin: HOME, destination: ZoneId(4), duration: Time::minutes(15) });
        c.push(Trip { purpose: Activity::Home, start: t(20, 0), origin: ZoneId(4), destination: HOME, duration: Time::minutes(15) });
        c
    }

    #[test]
    fn identical_joint_chains_match() {
        assert!(chain(0, Activity::JointOther).matches(&chain(1, Activity::JointOther)));
    }

    #[test]
    fn same_person_never_matches() {
        assert!(!chain(0, Activity::JointOther).matches(&chain(0, Activity::JointOther)));
    }

    #[test]
    fn individual_purposes_never_match() {
        assert!(!chain(0, Activity::Market).matches(&chain(1, Activity::Market)));
    }

    #[test]
    fn closed_chain_ends_home() {
        let c = chain(0, Activity::JointMarket);
        assert!(c.is_closed());
        assert_eq!(c.end_time(), Some(t(20, 15)));
    }
}
