//! Desk plan — numbered desk assignments and a proximity summary.

use serde::{Deserialize, Serialize};

use crate::occupant::{Occupant, ProximityPreference};

/// One desk in the row, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskAssignment {
    pub desk: usize,
    pub occupant: Occupant,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskPlan {
    pub desks: Vec<DeskAssignment>,
}

impl DeskPlan {
    /// Number desks in sequence order.
    pub fn from_sequence(sequence: &[Occupant]) -> Self {
        Self {
            desks: sequence
                .iter()
                .enumerate()
                .map(|(i, occupant)| DeskAssignment {
                    desk: i + 1,
                    occupant: occupant.clone(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.desks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desks.is_empty()
    }

    /// Desk number for an occupant id.
    pub fn desk_of(&self, occupant_id: &str) -> Option<usize> {
        self.desks
            .iter()
            .find(|d| d.occupant.id == occupant_id)
            .map(|d| d.desk)
    }

    pub fn report(&self) -> ProximityReport {
        let seq: Vec<Occupant> = self.desks.iter().map(|d| d.occupant.clone()).collect();
        ProximityReport::of(&seq)
    }
}

/// How well a sequence keeps dogs apart from each other and from avoiders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProximityReport {
    /// Neighbouring desks both holding dog owners.
    pub have_have_adjacent: usize,
    /// Neighbouring desks pairing an avoider with a dog owner.
    pub avoid_have_adjacent: usize,
    /// Closest desk distance between any avoider and any dog owner.
    pub min_avoid_have_distance: Option<usize>,
}

impl ProximityReport {
    pub fn of(sequence: &[Occupant]) -> Self {
        use ProximityPreference::*;

        let mut report = Self::default();
        for pair in sequence.windows(2) {
            match (pair[0].preference, pair[1].preference) {
                (Have, Have) => report.have_have_adjacent += 1,
                (Avoid, Have) | (Have, Avoid) => report.avoid_have_adjacent += 1,
                _ => {}
            }
        }

        let positions = |pref: ProximityPreference| -> Vec<usize> {
            sequence
                .iter()
                .enumerate()
                .filter(|(_, o)| o.is(pref))
                .map(|(i, _)| i)
                .collect()
        };
        let avoid = positions(Avoid);
        let have = positions(Have);
        report.min_avoid_have_distance = avoid
            .iter()
            .flat_map(|&a| have.iter().map(move |&h| a.abs_diff(h)))
            .min();

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupant::ProximityPreference::*;

    fn seq(prefs: &[ProximityPreference]) -> Vec<Occupant> {
        prefs
            .iter()
            .enumerate()
            .map(|(i, &p)| Occupant::new(i.to_string(), format!("P{i}"), p))
            .collect()
    }

    #[test]
    fn test_desks_numbered_from_one() {
        let plan = DeskPlan::from_sequence(&seq(&[Like, Have, Avoid]));
        let desks: Vec<_> = plan.desks.iter().map(|d| d.desk).collect();
        assert_eq!(desks, [1, 2, 3]);
        assert_eq!(plan.desk_of("2"), Some(3));
        assert_eq!(plan.desk_of("missing"), None);
    }

    #[test]
    fn test_report_counts_adjacent_pairs() {
        let report = ProximityReport::of(&seq(&[Avoid, Have, Have, Like, Have]));
        assert_eq!(report.have_have_adjacent, 1);
        assert_eq!(report.avoid_have_adjacent, 1);
        assert_eq!(report.min_avoid_have_distance, Some(1));
    }

    #[test]
    fn test_report_distance_absent_without_both_sides() {
        let report = ProximityReport::of(&seq(&[Like, Have, Like, Have]));
        assert_eq!(report.min_avoid_have_distance, None);
        assert_eq!(report.have_have_adjacent, 0);
        assert_eq!(ProximityReport::of(&[]), ProximityReport::default());
    }

    #[test]
    fn test_report_distance_picks_closest_pair() {
        let report = ProximityReport::of(&seq(&[Avoid, Like, Like, Have, Avoid, Like, Have]));
        assert_eq!(report.min_avoid_have_distance, Some(1));
        let report = ProximityReport::of(&seq(&[Avoid, Avoid, Like, Like, Have]));
        assert_eq!(report.min_avoid_have_distance, Some(3));
    }
}
