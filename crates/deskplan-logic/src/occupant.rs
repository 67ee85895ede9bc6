//! Occupant model — the people being seated and their attitude toward dogs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// How an occupant feels about sitting near dogs.
///
/// Spacing precedence is `Have` > `Avoid` > `Like`: dog owners are the
/// hazards being separated, avoiders are pushed away from them, and likers
/// fill the gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProximityPreference {
    /// Averse to dogs.
    Avoid,
    /// Neutral or positive, owns no dog.
    Like,
    /// Brings a dog to the office.
    Have,
}

impl ProximityPreference {
    pub const ALL: [ProximityPreference; 3] = [Self::Avoid, Self::Like, Self::Have];

    /// Wire name, matching the roster document spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avoid => "AVOID",
            Self::Like => "LIKE",
            Self::Have => "HAVE",
        }
    }

    /// Human-readable label for tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::Avoid => "Avoid",
            Self::Like => "Like",
            Self::Have => "Have",
        }
    }
}

impl fmt::Display for ProximityPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a dog status string is not one of AVOID/LIKE/HAVE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreference(pub String);

impl fmt::Display for UnknownPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dog status '{}'", self.0)
    }
}

impl std::error::Error for UnknownPreference {}

impl FromStr for ProximityPreference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPreference(s.to_string()))
    }
}

/// Accepts any casing, so exports spelling `"Have"` or `"have"` load too.
impl<'de> Deserialize<'de> for ProximityPreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A person to be seated.
///
/// Never mutated by the placement pipeline; the output sequence holds
/// clones of the input values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub id: String,
    pub name: String,
    pub preference: ProximityPreference,
    /// Team the occupant belongs to. `None` puts them in the shared
    /// no-team group.
    #[serde(default)]
    pub group_id: Option<String>,
}

impl Occupant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        preference: ProximityPreference,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            preference,
            group_id: None,
        }
    }

    /// Builder-style group assignment.
    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn is(&self, preference: ProximityPreference) -> bool {
        self.preference == preference
    }
}

/// Count members with the given preference.
pub fn count_with<'a, I>(members: I, preference: ProximityPreference) -> usize
where
    I: IntoIterator<Item = &'a Occupant>,
{
    members.into_iter().filter(|o| o.is(preference)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("AVOID".parse::<ProximityPreference>(), Ok(ProximityPreference::Avoid));
        assert_eq!("like".parse::<ProximityPreference>(), Ok(ProximityPreference::Like));
        assert_eq!(" Have ".parse::<ProximityPreference>(), Ok(ProximityPreference::Have));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "cat".parse::<ProximityPreference>().unwrap_err();
        assert_eq!(err, UnknownPreference("cat".into()));
        assert_eq!(err.to_string(), "unknown dog status 'cat'");
    }

    #[test]
    fn test_serde_uses_uppercase_names() {
        let json = serde_json::to_string(&ProximityPreference::Have).unwrap();
        assert_eq!(json, "\"HAVE\"");
        let back: ProximityPreference = serde_json::from_str("\"AVOID\"").unwrap();
        assert_eq!(back, ProximityPreference::Avoid);
        let mixed: ProximityPreference = serde_json::from_str("\"Have\"").unwrap();
        assert_eq!(mixed, ProximityPreference::Have);
        assert!(serde_json::from_str::<ProximityPreference>("\"DOG\"").is_err());
    }

    #[test]
    fn test_occupant_group_defaults_to_none() {
        let o: Occupant =
            serde_json::from_str(r#"{"id":"1","name":"Alice","preference":"LIKE"}"#).unwrap();
        assert_eq!(o.group_id, None);
        assert_eq!(o, Occupant::new("1", "Alice", ProximityPreference::Like));
    }

    #[test]
    fn test_count_with() {
        let people = vec![
            Occupant::new("1", "A", ProximityPreference::Have),
            Occupant::new("2", "B", ProximityPreference::Like),
            Occupant::new("3", "C", ProximityPreference::Have),
        ];
        assert_eq!(count_with(&people, ProximityPreference::Have), 2);
        assert_eq!(count_with(&people, ProximityPreference::Avoid), 0);
    }
}
