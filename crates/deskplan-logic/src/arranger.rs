//! Intra-team arrangement — orders one team's members by dog preference.
//!
//! Dog owners are spread apart using likers as one-person buffers, and
//! avoiders sit as a block at the start of the team, away from the owners.
//! The heuristic branches on exact counts; each branch places buffers
//! differently, so the cases are dispatched explicitly instead of folded
//! into a single formula.
//!
//! Note the two-owner and many-owner rules with avoiders present differ in
//! shape: two owners get likers split around the first owner, three or more
//! get likers only between owners. Both are kept as-is.

use crate::occupant::{Occupant, ProximityPreference};

/// Members of one team split by preference, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categorized<'a> {
    pub avoid: Vec<&'a Occupant>,
    pub like: Vec<&'a Occupant>,
    pub have: Vec<&'a Occupant>,
}

impl<'a> Categorized<'a> {
    pub fn from_members(members: &[&'a Occupant]) -> Self {
        let mut out = Self::default();
        for &m in members {
            match m.preference {
                ProximityPreference::Avoid => out.avoid.push(m),
                ProximityPreference::Like => out.like.push(m),
                ProximityPreference::Have => out.have.push(m),
            }
        }
        out
    }
}

/// Dog-owner count bucket used for case selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaveCount {
    None,
    One,
    Two,
    Many,
}

impl HaveCount {
    pub fn of(n: usize) -> Self {
        match n {
            0 => Self::None,
            1 => Self::One,
            2 => Self::Two,
            _ => Self::Many,
        }
    }
}

/// Which placement rule a team falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrangeCase {
    /// No dog owners: avoiders then likers.
    NoOwners,
    /// One owner, no avoiders: owner at the far end.
    LoneOwner,
    /// Several owners, no avoiders: likers interleaved between owners.
    Interleaved,
    /// One owner behind avoiders and likers.
    ShieldedOwner,
    /// Two owners with avoiders: likers split before and between them.
    SplitPair,
    /// Three or more owners with avoiders: likers only between owners.
    InteriorBuffers,
}

impl ArrangeCase {
    pub fn select(has_avoid: bool, have: HaveCount) -> Self {
        match (has_avoid, have) {
            (_, HaveCount::None) => Self::NoOwners,
            (false, HaveCount::One) => Self::LoneOwner,
            (false, HaveCount::Two | HaveCount::Many) => Self::Interleaved,
            (true, HaveCount::One) => Self::ShieldedOwner,
            (true, HaveCount::Two) => Self::SplitPair,
            (true, HaveCount::Many) => Self::InteriorBuffers,
        }
    }
}

/// Order one team's members. The result is a permutation of `members`.
pub fn arrange_group<'a>(members: &[&'a Occupant]) -> Vec<&'a Occupant> {
    arrange_group_with_case(members).1
}

/// Like [`arrange_group`], also returning the placement rule that fired.
pub fn arrange_group_with_case<'a>(members: &[&'a Occupant]) -> (ArrangeCase, Vec<&'a Occupant>) {
    let cats = Categorized::from_members(members);
    let case = ArrangeCase::select(!cats.avoid.is_empty(), HaveCount::of(cats.have.len()));

    log::trace!(
        "team of {} (avoid={}, like={}, have={}) -> {:?}",
        members.len(),
        cats.avoid.len(),
        cats.like.len(),
        cats.have.len(),
        case
    );

    let Categorized { avoid, like, have } = cats;
    let arranged = match case {
        ArrangeCase::NoOwners => concat([avoid, like]),
        ArrangeCase::LoneOwner => concat([like, have]),
        ArrangeCase::Interleaved => interleave(&like, &have),
        ArrangeCase::ShieldedOwner => concat([avoid, like, have]),
        ArrangeCase::SplitPair => split_pair(avoid, &like, &have),
        ArrangeCase::InteriorBuffers => interior_buffers(avoid, &like, &have),
    };
    (case, arranged)
}

fn concat<'a, const N: usize>(parts: [Vec<&'a Occupant>; N]) -> Vec<&'a Occupant> {
    parts.into_iter().flatten().collect()
}

/// Owner, liker, owner, liker, ... with leftover likers at the tail.
/// Gaps with no liker left stay unbuffered.
fn interleave<'a>(like: &[&'a Occupant], have: &[&'a Occupant]) -> Vec<&'a Occupant> {
    let mut out = Vec::with_capacity(like.len() + have.len());
    for (i, &owner) in have.iter().enumerate() {
        out.push(owner);
        if i + 1 < have.len() {
            if let Some(&buffer) = like.get(i) {
                out.push(buffer);
            }
        }
    }
    out.extend(like.iter().skip(have.len() - 1).copied());
    out
}

/// Avoiders, first share of likers, owner, remaining likers, owner.
fn split_pair<'a>(
    mut out: Vec<&'a Occupant>,
    like: &[&'a Occupant],
    have: &[&'a Occupant],
) -> Vec<&'a Occupant> {
    if like.is_empty() {
        out.extend_from_slice(have);
        return out;
    }

    // A lone liker sits between the avoid block and the first owner, so
    // [Alice:Like, Charlie:Avoid, David:Have, Eve:Have] seats as
    // Charlie, Alice, David, Eve. Larger counts use the floor/ceil split.
    let before = if like.len() == 1 { 1 } else { like.len() / 2 };

    out.extend_from_slice(&like[..before]);
    out.push(have[0]);
    out.extend_from_slice(&like[before..]);
    out.push(have[1]);
    out
}

/// Avoiders, then owners with one liker ahead of each owner after the
/// first, up to `min(likes, owners - 1)` buffers. Leftover likers go last.
fn interior_buffers<'a>(
    mut out: Vec<&'a Occupant>,
    like: &[&'a Occupant],
    have: &[&'a Occupant],
) -> Vec<&'a Occupant> {
    let buffers = like.len().min(have.len() - 1);
    if buffers == 0 {
        out.extend_from_slice(have);
        return out;
    }

    for (i, &owner) in have.iter().enumerate() {
        if (1..=buffers).contains(&i) {
            out.push(like[i - 1]);
        }
        out.push(owner);
    }
    out.extend_from_slice(&like[buffers..]);
    out
}
