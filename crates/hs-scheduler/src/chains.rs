//! Trip chains walked from a merged person schedule.

use hs_core::{Activity, Time, ZoneId};
use hs_schedule::{PersonSchedule, TravelTime, Trip, TripChain};

/// Split a person's day into home-based trip chains.
///
/// Consecutive out-of-home episodes share a chain.  Between two of them the
/// person goes home (closing the chain) when the trips home and back plus
/// `min_at_home` fit in the gap.  Reaching an at-home episode closes the
/// chain too, and a person still out at the end of the day travels home.
pub fn build_chains<T: TravelTime + ?Sized>(
    schedule: &PersonSchedule,
    travel: &T,
    min_at_home: Time,
) -> Vec<TripChain> {
    let person = schedule.person();
    let home = schedule.home_zone();
    let mut chains = Vec::new();
    let mut chain = TripChain::new(person);
    // Zone and end time of the last out-of-home episode while away.
    let mut away: Option<(ZoneId, Time)> = None;

    let go_home = |chain: &mut TripChain, chains: &mut Vec<TripChain>, (zone, end): (ZoneId, Time)| {
        let duration = travel.travel_time(person, zone, home, end).non_negative();
        chain.push(Trip { purpose: Activity::Home, start: end, origin: zone, destination: home, duration });
        chains.push(std::mem::replace(chain, TripChain::new(person)));
    };

    for (index, ep) in schedule.iter().enumerate() {
        if ep.activity().is_at_home() {
            if let Some(last) = away.take() {
                go_home(&mut chain, &mut chains, last);
            }
            continue;
        }
        let zone = schedule.zone_at(index);

        if let Some((from, end)) = away {
            let to_home = travel.travel_time(person, from, home, end).non_negative();
            let from_home = travel.travel_time(person, home, zone, ep.start()).non_negative();
            if to_home + from_home + min_at_home < ep.start() - end {
                go_home(&mut chain, &mut chains, (from, end));
                away = None;
            }
        }

        let origin = away.map_or(home, |(from, _)| from);
        let duration = travel.travel_time(person, origin, zone, ep.start()).non_negative();
        chain.push(Trip { purpose: ep.activity(), start: ep.start() - duration, origin, destination: zone, duration });
        away = Some((zone, ep.end()));
    }

    if let Some(last) = away {
        go_home(&mut chain, &mut chains, last);
    }
    chains
}
