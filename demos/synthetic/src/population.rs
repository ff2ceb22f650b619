//! Synthetic households on a small zone grid.

use hs_core::{DistrictId, HouseholdId, PersonId, ZoneId};
use hs_household::{
    EmploymentStatus, HouseholdBuilder, HouseholdResult, Occupation, Person, PersonBuilder, Population,
    StudentStatus, Workplace,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const OCCUPATIONS: [Occupation; 4] =
    [Occupation::Office, Occupation::Manufacturing, Occupation::Professional, Occupation::Retail];

/// Zones are numbered `1..=zones`; districts group ten zones each.
pub fn district_of(zone: ZoneId) -> DistrictId {
    DistrictId((zone.0 / 10) as u16)
}

fn random_zone(rng: &mut SmallRng, zones: u32) -> ZoneId {
    ZoneId(rng.gen_range(1..=zones))
}

fn adult(rng: &mut SmallRng, id: PersonId, zones: u32) -> Person {
    let age = rng.gen_range(19..=80);
    let mut b = PersonBuilder::new(id, age).expansion_factor(rng.gen_range(5.0..25.0));
    if rng.gen_bool(0.5) {
        b = b.female();
    }
    if age < 67 && rng.gen_bool(0.75) {
        let occupation = OCCUPATIONS[rng.gen_range(0..OCCUPATIONS.len())];
        let roll: f64 = rng.r#gen();
        if roll < 0.08 {
            b = b.employment(EmploymentStatus::WorkAtHomeFullTime, occupation);
        } else {
            let status = if roll < 0.75 { EmploymentStatus::FullTime } else { EmploymentStatus::PartTime };
            let workplace = if rng.gen_bool(0.03) {
                Workplace::Roaming
            } else {
                Workplace::Zone(random_zone(rng, zones))
            };
            b = b.employment(status, occupation).workplace(workplace);
            if let Workplace::Zone(zone) = workplace {
                b = b.work_district(district_of(zone));
            }
        }
    }
    if age < 26 && rng.gen_bool(0.4) {
        b = b.student(StudentStatus::FullTime, Some(random_zone(rng, zones)));
    }
    b.build()
}

fn child(rng: &mut SmallRng, id: PersonId, zones: u32) -> Person {
    let age = rng.gen_range(0..=18);
    let mut b = PersonBuilder::new(id, age);
    if rng.gen_bool(0.5) {
        b = b.female();
    }
    if age >= 5 {
        b = b.student(StudentStatus::FullTime, Some(random_zone(rng, zones)));
    }
    if age >= 16 && rng.gen_bool(0.3) {
        b = b
            .employment(EmploymentStatus::PartTime, Occupation::Retail)
            .workplace(Workplace::Zone(random_zone(rng, zones)));
    }
    b.build()
}

/// `households` households of one to five members, reproducible from `seed`.
pub fn build_population(households: u32, zones: u32, seed: u64) -> HouseholdResult<Population> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(households as usize);
    for h in 0..households {
        let home = random_zone(&mut rng, zones);
        let adults = rng.gen_range(1..=2u32);
        let children = if rng.gen_bool(0.4) { rng.gen_range(1..=3u32) } else { 0 };

        let mut persons = Vec::with_capacity((adults + children) as usize);
        for p in 0..adults {
            persons.push(adult(&mut rng, PersonId(p), zones));
        }
        for p in adults..adults + children {
            persons.push(child(&mut rng, PersonId(p), zones));
        }

        out.push(
            HouseholdBuilder::new(HouseholdId(h), home)
                .home_district(district_of(home))
                .persons(persons)
                .build()?,
        );
    }
    Population::new(out)
}
