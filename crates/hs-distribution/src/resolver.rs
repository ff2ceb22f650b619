//! Distribution-id resolver.
//!
//! Pure offset tables mapping a person's (or household's) attributes and an
//! activity to a row of the distribution table.  `None` means the activity
//! does not apply to this entity and must be read as "zero episodes", never
//! as an error.
//!
//! # Row layout
//!
//! | Activity              | Base | Refinement                                        |
//! |-----------------------|------|---------------------------------------------------|
//! | primary work          |    0 | work age band × 8 + occupation × 2 + part time    |
//! | secondary work        |   32 | occupation × 2 + part time                        |
//! | work-based business   |   40 | work age band × 8 + occupation × 2 + part time    |
//! | work-at-home business |   72 | home-work age band × 4 + occupation               |
//! | school                |   84 | school age band × 2 + part time                   |
//! | return from work      |   94 | occupation × 2 + part time                        |
//! | individual other      |  102 | personal age band × 14 + female × 7 + status      |
//! | joint other           |  158 | no children × 12 + adult band × 4 + hh status     |
//! | market                |  182 | personal age band × 14 + female × 7 + status      |
//! | joint market          |  238 | no children × 12 + adult band × 4 + hh status     |

use hs_core::{Activity, DistributionId};
use hs_household::{EmploymentStatus, Household, HouseholdStatus, Person, PersonStatus, StudentStatus};

const PRIMARY_WORK: u16 = 0;
const SECONDARY_WORK: u16 = 32;
const WORK_BASED_BUSINESS: u16 = 40;
const WORK_AT_HOME_BUSINESS: u16 = 72;
const SCHOOL: u16 = 84;
const RETURN_FROM_WORK: u16 = 94;
const INDIVIDUAL_OTHER: u16 = 102;
const JOINT_OTHER: u16 = 158;
const MARKET: u16 = 182;
const JOINT_MARKET: u16 = 238;

/// Youngest age any work or school distribution covers.
const MIN_TABLE_AGE: u8 = 11;

// ── Age bands ─────────────────────────────────────────────────────────────────

fn work_age_band(age: u8) -> Option<u16> {
    match age {
        0..=10  => None,
        11..=18 => Some(0),
        19..=25 => Some(1),
        26..=64 => Some(2),
        _       => Some(3),
    }
}

fn home_work_age_band(age: u8) -> Option<u16> {
    match age {
        0..=18  => None,
        19..=25 => Some(0),
        26..=64 => Some(1),
        _       => Some(2),
    }
}

fn school_age_band(age: u8) -> Option<u16> {
    match age {
        0..=10  => None,
        11..=15 => Some(0),
        16..=18 => Some(1),
        19..=25 => Some(2),
        26..=30 => Some(3),
        _       => Some(4),
    }
}

fn personal_age_band(age: u8) -> Option<u16> {
    match age {
        0..=10  => None,
        11..=15 => Some(0),
        16..=24 => Some(1),
        25..=64 => Some(2),
        _       => Some(3),
    }
}

/// 0 for full time, 1 for part time, `None` for anything but a regular
/// worker.
fn part_time_offset(status: EmploymentStatus) -> Option<u16> {
    match status {
        EmploymentStatus::FullTime => Some(0),
        EmploymentStatus::PartTime => Some(1),
        _ => None,
    }
}

// ── Person ────────────────────────────────────────────────────────────────────

/// Row for a person doing `activity`.
///
/// `status` is the person's work/school day shape and only matters for the
/// individual-other and market rows.
pub fn person_distribution(
    person: &Person,
    activity: Activity,
    status: PersonStatus,
) -> Option<DistributionId> {
    let row = match activity {
        Activity::PrimaryWork => {
            person.workplace?;
            let age = work_age_band(person.age)?;
            let occupation = person.occupation.table_index()?;
            PRIMARY_WORK + age * 8 + occupation * 2 + part_time_offset(person.employment)?
        }
        Activity::SecondaryWork => {
            person.workplace?;
            if person.age < MIN_TABLE_AGE {
                return None;
            }
            let occupation = person.occupation.table_index()?;
            SECONDARY_WORK + occupation * 2 + part_time_offset(person.employment)?
        }
        Activity::WorkBasedBusiness => {
            let part_time = part_time_offset(person.employment)?;
            let age = work_age_band(person.age)?;
            let occupation = person.occupation.table_index()?;
            WORK_BASED_BUSINESS + age * 8 + occupation * 2 + part_time
        }
        Activity::WorkAtHomeBusiness => {
            if !person.employment.works_at_home() {
                return None;
            }
            let age = home_work_age_band(person.age)?;
            WORK_AT_HOME_BUSINESS + age * 4 + person.occupation.table_index().unwrap_or(0)
        }
        Activity::ReturnFromWork => {
            let part_time = part_time_offset(person.employment)?;
            let occupation = person.occupation.table_index()?;
            RETURN_FROM_WORK + occupation * 2 + part_time
        }
        Activity::School => {
            let part_time = match person.student {
                StudentStatus::FullTime => 0,
                StudentStatus::PartTime => 1,
                _ => return None,
            };
            SCHOOL + school_age_band(person.age)? * 2 + part_time
        }
        Activity::IndividualOther | Activity::Market => {
            let base = if activity == Activity::Market { MARKET } else { INDIVIDUAL_OTHER };
            let age = personal_age_band(person.age)?;
            let female = if person.is_female() { 7 } else { 0 };
            base + age * 14 + female + status.offset()
        }
        Activity::JointOther | Activity::JointMarket | Activity::Home => return None,
    };
    Some(DistributionId(row))
}

// ── Household ─────────────────────────────────────────────────────────────────

/// Row for a household doing a joint activity.  `None` for other activities
/// and for households without adults.
pub fn household_distribution(
    household: &Household,
    activity: Activity,
    status: HouseholdStatus,
) -> Option<DistributionId> {
    let base = match activity {
        Activity::JointOther => JOINT_OTHER,
        Activity::JointMarket => JOINT_MARKET,
        _ => return None,
    };
    let children = if household.children() > 0 { 0 } else { 12 };
    let adults = match household.adults() {
        0 => return None,
        1 => 0,
        2 => 1,
        _ => 2,
    };
    Some(DistributionId(base + children + adults * 4 + status.offset()))
}

/// Row of [`AdultDistributions`][crate::AdultDistributions] for a joint
/// activity, or `None` when the household's composition fixes the count
/// (see [`fixed_adult_count`]) or is not covered by the tables.
pub fn adult_distribution(household: &Household, activity: Activity) -> Option<usize> {
    let base = match activity {
        Activity::JointOther => 0,
        Activity::JointMarket => 3,
        _ => return None,
    };
    let row = match (household.children() > 0, household.adults()) {
        (true, 2) => 0,
        (true, a) if a >= 3 => 1,
        (false, a) if a >= 3 => 2,
        _ => return None,
    };
    Some(base + row)
}

/// Adult count implied by the household's composition alone: one adult
/// always goes alone, two adults without children always go together.
pub fn fixed_adult_count(household: &Household) -> Option<usize> {
    match (household.adults(), household.children()) {
        (1, _) => Some(1),
        (2, 0) => Some(2),
        _ => None,
    }
}
