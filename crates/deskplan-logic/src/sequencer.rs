//! Team ordering — decides which arranged team block sits where.
//!
//! Teams with more dog-averse members are pushed toward the front of the
//! row. Two teams get a special case: a team of only avoiders (no owners)
//! always shields a team of only owners (no avoiders). Blocks are never
//! split or interleaved.

use crate::occupant::{count_with, Occupant, ProximityPreference};

/// Per-team counts used for ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockStats {
    pub avoid: usize,
    pub have: usize,
}

impl BlockStats {
    pub fn of(block: &[&Occupant]) -> Self {
        Self {
            avoid: count_with(block.iter().copied(), ProximityPreference::Avoid),
            have: count_with(block.iter().copied(), ProximityPreference::Have),
        }
    }

    /// Has avoiders and no dog owners.
    pub fn avoid_only(&self) -> bool {
        self.avoid > 0 && self.have == 0
    }

    /// Has dog owners and no avoiders.
    pub fn have_only(&self) -> bool {
        self.have > 0 && self.avoid == 0
    }
}

/// Outcome of the two-team rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOrder {
    /// First team is avoid-only, second is owner-only.
    FirstShields,
    /// Second team is avoid-only, first is owner-only.
    SecondShields,
    /// Neither shield case: more avoiders first, ties keep input order.
    ByAvoidCount { first_leads: bool },
}

impl PairOrder {
    pub fn decide(first: BlockStats, second: BlockStats) -> Self {
        if first.avoid_only() && second.have_only() {
            Self::FirstShields
        } else if second.avoid_only() && first.have_only() {
            Self::SecondShields
        } else {
            Self::ByAvoidCount {
                first_leads: first.avoid >= second.avoid,
            }
        }
    }

    pub fn first_leads(self) -> bool {
        match self {
            Self::FirstShields => true,
            Self::SecondShields => false,
            Self::ByAvoidCount { first_leads } => first_leads,
        }
    }
}

/// Order arranged team blocks. Blocks themselves are moved, not modified.
pub fn sequence_blocks<'a>(blocks: Vec<Vec<&'a Occupant>>) -> Vec<Vec<&'a Occupant>> {
    if blocks.len() <= 1 {
        return blocks;
    }

    let mut scored: Vec<(BlockStats, Vec<&'a Occupant>)> = blocks
        .into_iter()
        .map(|block| (BlockStats::of(&block), block))
        .collect();

    for (i, (stats, _)) in scored.iter().enumerate() {
        log::debug!(
            "team block {}: avoid={} have={}",
            i + 1,
            stats.avoid,
            stats.have
        );
    }

    if scored.len() == 2 {
        let order = PairOrder::decide(scored[0].0, scored[1].0);
        log::debug!("two teams: {:?}", order);
        if !order.first_leads() {
            scored.swap(0, 1);
        }
    } else {
        // `sort_by` is stable; equal avoid counts keep input order.
        scored.sort_by(|a, b| b.0.avoid.cmp(&a.0.avoid));
    }

    scored.into_iter().map(|(_, block)| block).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupant::ProximityPreference::*;

    fn people(shape: &[(&str, ProximityPreference)]) -> Vec<Occupant> {
        shape.iter()
            .map(|&(name, pref)| Occupant::new(name, name, pref))
            .collect()
    }

    fn order(blocks: &[Vec<Occupant>]) -> Vec<String> {
        let refs: Vec<Vec<&Occupant>> = blocks.iter().map(|b| b.iter().collect()).collect();
        sequence_blocks(refs)
            .into_iter()
            .flatten()
            .map(|o| o.name.clone())
            .collect()
    }

    #[test]
    fn test_zero_and_one_block_unchanged() {
        assert!(order(&[]).is_empty());
        let solo = vec![people(&[("H", Have), ("A", Avoid)])];
        assert_eq!(order(&solo), ["H", "A"]);
    }

    #[test]
    fn test_pair_first_shields() {
        let blocks = vec![people(&[("P1", Avoid)]), people(&[("P2", Have)])];
        assert_eq!(order(&blocks), ["P1", "P2"]);
    }

    #[test]
    fn test_pair_second_shields() {
        let blocks = vec![
            people(&[("H", Have), ("L", Like)]),
            people(&[("A", Avoid), ("L2", Like)]),
        ];
        assert_eq!(order(&blocks), ["A", "L2", "H", "L"]);
    }

    #[test]
    fn test_pair_falls_back_to_avoid_count() {
        // First team mixes owners and avoiders, so no shield case applies.
        let blocks = vec![
            people(&[("A1", Avoid), ("H1", Have)]),
            people(&[("A2", Avoid), ("A3", Avoid)]),
        ];
        assert_eq!(order(&blocks), ["A2", "A3", "A1", "H1"]);
    }

    #[test]
    fn test_pair_tie_keeps_input_order() {
        let blocks = vec![people(&[("L1", Like)]), people(&[("L2", Like)])];
        assert_eq!(order(&blocks), ["L1", "L2"]);

        let blocks = vec![
            people(&[("A1", Avoid), ("H1", Have)]),
            people(&[("A2", Avoid)]),
        ];
        assert_eq!(order(&blocks), ["A1", "H1", "A2"]);
    }

    #[test]
    fn test_pair_decide() {
        let avoid_only = BlockStats { avoid: 2, have: 0 };
        let have_only = BlockStats { avoid: 0, have: 3 };
        let mixed = BlockStats { avoid: 1, have: 1 };
        assert_eq!(PairOrder::decide(avoid_only, have_only), PairOrder::FirstShields);
        assert_eq!(PairOrder::decide(have_only, avoid_only), PairOrder::SecondShields);
        assert_eq!(
            PairOrder::decide(mixed, avoid_only),
            PairOrder::ByAvoidCount { first_leads: false }
        );
        assert_eq!(
            PairOrder::decide(BlockStats::default(), BlockStats::default()),
            PairOrder::ByAvoidCount { first_leads: true }
        );
    }

    #[test]
    fn test_many_blocks_stable_by_avoid_desc() {
        let blocks = vec![
            people(&[("X1", Like)]),
            people(&[("Y1", Avoid), ("Y2", Have)]),
            people(&[("Z1", Like), ("Z2", Have)]),
            people(&[("W1", Avoid), ("W2", Avoid)]),
            people(&[("V1", Avoid)]),
        ];
        assert_eq!(
            order(&blocks),
            ["W1", "W2", "Y1", "Y2", "V1", "X1", "Z1", "Z2"]
        );
    }

    #[test]
    fn test_block_stats() {
        let block = people(&[("A", Avoid), ("H", Have), ("H2", Have), ("L", Like)]);
        let refs: Vec<&Occupant> = block.iter().collect();
        assert_eq!(BlockStats::of(&refs), BlockStats { avoid: 1, have: 2 });
    }
}
