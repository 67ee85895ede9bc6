//! Roster document — people and teams as supplied by the records layer.
//!
//! The document is plain serde data so it can come from a JSON export, a
//! fixture, or a query result. Validation follows the collect-all-errors
//! style: an empty error list means the roster is usable.
//!
//! ```
//! use deskplan_logic::roster::{validate_roster, Roster};
//!
//! let roster: Roster = serde_json::from_str(r#"{
//!     "teams": [{ "id": "t1", "name": "Platform" }],
//!     "people": [
//!         { "id": "p1", "name": "Alice", "dog_status": "LIKE", "team_id": "t1" },
//!         { "id": "p2", "name": "Bob", "dog_status": "HAVE" }
//!     ]
//! }"#).unwrap();
//! assert!(validate_roster(&roster).is_empty());
//! assert_eq!(roster.occupants().len(), 2);
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::occupant::{Occupant, ProximityPreference};

/// Team id the records layer uses to mean "no team".
pub const NO_TEAM: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub dog_status: ProximityPreference,
    #[serde(default)]
    pub team_id: Option<String>,
}

impl Person {
    /// Team id with the "none" sentinel and blank ids folded to `None`.
    pub fn team(&self) -> Option<&str> {
        self.team_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != NO_TEAM)
    }

    pub fn to_occupant(&self) -> Occupant {
        Occupant {
            id: self.id.clone(),
            name: self.name.clone(),
            preference: self.dog_status,
            group_id: self.team().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub teams: Vec<Team>,
    pub people: Vec<Person>,
}

impl Roster {
    /// People as occupants, in document order.
    pub fn occupants(&self) -> Vec<Occupant> {
        self.people.iter().map(Person::to_occupant).collect()
    }

    pub fn team_name(&self, team_id: &str) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .map(|t| t.name.as_str())
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }
}

/// Roster validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Two people share an id.
    DuplicatePerson(String),
    /// Two teams share an id.
    DuplicateTeam(String),
    /// Person references a team that is not in the roster.
    UnknownTeam { person: String, team: String },
    /// Person with a blank name.
    EmptyPersonName(String),
    /// Team with a blank name.
    EmptyTeamName(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePerson(id) => write!(f, "duplicate person id '{id}'"),
            Self::DuplicateTeam(id) => write!(f, "duplicate team id '{id}'"),
            Self::UnknownTeam { person, team } => {
                write!(f, "person '{person}' references unknown team '{team}'")
            }
            Self::EmptyPersonName(id) => write!(f, "person '{id}' has an empty name"),
            Self::EmptyTeamName(id) => write!(f, "team '{id}' has an empty name"),
        }
    }
}

impl std::error::Error for RosterError {}

/// Validate a roster, returning all errors found.
pub fn validate_roster(roster: &Roster) -> Vec<RosterError> {
    let mut errors = Vec::new();

    let mut team_ids = HashSet::new();
    for team in &roster.teams {
        if !team_ids.insert(team.id.as_str()) {
            errors.push(RosterError::DuplicateTeam(team.id.clone()));
        }
        if team.name.trim().is_empty() {
            errors.push(RosterError::EmptyTeamName(team.id.clone()));
        }
    }

    let mut person_ids = HashSet::new();
    for person in &roster.people {
        if !person_ids.insert(person.id.as_str()) {
            errors.push(RosterError::DuplicatePerson(person.id.clone()));
        }
        if person.name.trim().is_empty() {
            errors.push(RosterError::EmptyPersonName(person.id.clone()));
        }
        if let Some(team) = person.team() {
            if !team_ids.contains(team) {
                errors.push(RosterError::UnknownTeam {
                    person: person.id.clone(),
                    team: team.to_string(),
                });
            }
        }
    }

    errors
}
