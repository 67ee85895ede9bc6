//! Team grouping — partitions occupants into teams in first-seen order.
//!
//! Groups are derived from each occupant's `group_id`; everyone without a
//! team lands in a single implicit group. Slot lookup goes through a map,
//! but iteration order comes from the slot vector, never from the map.

use std::collections::HashMap;

use crate::occupant::Occupant;

/// One team's members, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    /// Team id, or `None` for the no-team group.
    pub key: Option<&'a str>,
    pub members: Vec<&'a Occupant>,
}

impl Group<'_> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Split occupants into groups ordered by the position of each group's
/// first member. Members keep their relative input order.
pub fn group_occupants(occupants: &[Occupant]) -> Vec<Group<'_>> {
    let mut slots: HashMap<Option<&str>, usize> = HashMap::new();
    let mut groups: Vec<Group<'_>> = Vec::new();

    for occupant in occupants {
        let key = occupant.group_id.as_deref();
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Group {
                key,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(occupant);
    }

    groups
}
