//! Desk layout logic for dog-friendly offices.
//!
//! Seats a row of people so that teams stay together, dog owners are spread
//! apart, and people who would rather avoid dogs sit as far from them as the
//! heuristic allows. Everything here is plain data in, plain data out: no
//! storage, no UI, no global state.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`occupant`] | Occupants and their dog preference (Avoid / Like / Have) |
//! | [`grouping`] | Team grouping in first-seen order |
//! | [`arranger`] | Per-team ordering with Like buffers between dog owners |
//! | [`sequencer`] | Team-block ordering by avoid/have counts |
//! | [`pipeline`] | `arrange`: group → arrange → sequence → flatten |
//! | [`roster`] | Serde roster document (people + teams) and validation |
//! | [`plan`] | Numbered desks and proximity report |
//!
//! ```
//! use deskplan_logic::{arrange, Occupant, ProximityPreference::*};
//!
//! let team = vec![
//!     Occupant::new("1", "Alice", Like),
//!     Occupant::new("2", "Bob", Like),
//!     Occupant::new("3", "Charlie", Avoid),
//!     Occupant::new("4", "David", Have),
//!     Occupant::new("5", "Eve", Have),
//! ];
//! let names: Vec<_> = arrange(&team).into_iter().map(|o| o.name).collect();
//! assert_eq!(names, ["Charlie", "Alice", "David", "Bob", "Eve"]);
//! ```

pub mod arranger;
pub mod grouping;
pub mod occupant;
pub mod pipeline;
pub mod plan;
pub mod roster;
pub mod sequencer;

pub use occupant::{Occupant, ProximityPreference};
pub use pipeline::{arrange, arrange_refs};
