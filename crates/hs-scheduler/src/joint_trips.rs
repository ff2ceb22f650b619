//! Linking identical trip chains of different members into joint tours.

use crate::PersonDay;

/// Give every group of matching chains a shared tour number and return how
/// many tours were formed.
///
/// Chains are visited in household order; the first chain of a group is its
/// representative.  A person contributes at most one chain to a tour.
pub fn link_joint_trips(persons: &mut [PersonDay]) -> u32 {
    let slots: Vec<(usize, usize)> = persons
        .iter()
        .enumerate()
        .flat_map(|(p, day)| (0..day.chains.len()).map(move |c| (p, c)))
        .collect();

    let mut tours = 0u32;
    for (i, &(p, c)) in slots.iter().enumerate() {
        if persons[p].chains[c].joint_tour.is_some() {
            continue;
        }
        let mut members = vec![p];
        let mut partners = Vec::new();
        for &(q, d) in &slots[i + 1..] {
            let candidate = &persons[q].chains[d];
            if candidate.joint_tour.is_none() && !members.contains(&q) && persons[p].chains[c].matches(candidate) {
                members.push(q);
                partners.push((q, d));
            }
        }
        if partners.is_empty() {
            continue;
        }

        let lead = &mut persons[p].chains[c];
        lead.joint_tour = Some(tours);
        lead.representative = true;
        for (q, d) in partners {
            persons[q].chains[d].joint_tour = Some(tours);
        }
        tours += 1;
    }
    tours
}
