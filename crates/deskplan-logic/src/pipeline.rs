//! Desk layout pipeline: group → arrange each team → order teams → flatten.

use crate::arranger::arrange_group;
use crate::grouping::group_occupants;
use crate::occupant::Occupant;
use crate::sequencer::sequence_blocks;

/// Compute the seating order for `occupants`.
///
/// The result is always a permutation of the input: every occupant appears
/// exactly once and each team sits as one contiguous run. Deterministic and
/// free of side effects beyond `debug`-level logging.
pub fn arrange(occupants: &[Occupant]) -> Vec<Occupant> {
    arrange_refs(occupants).into_iter().cloned().collect()
}

/// Same as [`arrange`] but borrows from the input instead of cloning.
pub fn arrange_refs(occupants: &[Occupant]) -> Vec<&Occupant> {
    if occupants.is_empty() {
        return Vec::new();
    }

    log::debug!(
        "desk layout input: {}",
        describe(occupants.iter())
    );

    let groups = group_occupants(occupants);
    log::debug!("{} team group(s)", groups.len());

    let blocks: Vec<Vec<&Occupant>> = groups
        .iter()
        .map(|group| {
            let block = arrange_group(&group.members);
            log::debug!(
                "team {}: [{}]",
                group.key.unwrap_or("<none>"),
                describe(block.iter().copied())
            );
            block
        })
        .collect();

    let result: Vec<&Occupant> = sequence_blocks(blocks).into_iter().flatten().collect();
    log::debug!("final arrangement: {}", describe(result.iter().copied()));
    result
}

fn describe<'a>(people: impl Iterator<Item = &'a Occupant>) -> String {
    people
        .map(|o| format!("{}({})", o.name, o.preference.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}
