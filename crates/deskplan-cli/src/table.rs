//! Desk plan rendering for terminals.

use deskplan_logic::plan::{DeskAssignment, DeskPlan};
use deskplan_logic::roster::Roster;
use tabled::{settings::style::Style, Table, Tabled};

#[derive(Debug, Tabled)]
pub struct DeskRow {
    #[tabled(rename = "Desk")]
    pub desk: usize,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Dogs")]
    pub dogs: String,
    #[tabled(rename = "Team")]
    pub team: String,
}

impl DeskRow {
    /// Team column shows the roster's display name, falling back to the raw
    /// id, or `-` for people without a team.
    pub fn from_assignment(assignment: &DeskAssignment, roster: &Roster) -> Self {
        let occupant = &assignment.occupant;
        let team = match occupant.group_id.as_deref() {
            Some(id) => roster.team_name(id).unwrap_or(id).to_string(),
            None => "-".to_string(),
        };
        Self {
            desk: assignment.desk,
            name: occupant.name.clone(),
            dogs: occupant.preference.label().to_string(),
            team,
        }
    }
}

pub fn desk_rows(plan: &DeskPlan, roster: &Roster) -> Vec<DeskRow> {
    plan.desks
        .iter()
        .map(|d| DeskRow::from_assignment(d, roster))
        .collect()
}

/// Render the plan as a psql-style table: desk, name, dog status, team.
pub fn render_plan(plan: &DeskPlan, roster: &Roster) -> String {
    let mut table = Table::new(desk_rows(plan, roster));
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskplan_logic::roster::{Person, Team};
    use deskplan_logic::{Occupant, ProximityPreference::*};

    fn roster() -> Roster {
        Roster {
            teams: vec![Team {
                id: "t1".into(),
                name: "Platform".into(),
            }],
            people: vec![Person {
                id: "0".into(),
                name: "P0".into(),
                dog_status: Avoid,
                team_id: Some("t1".into()),
            }],
        }
    }

    fn plan() -> DeskPlan {
        DeskPlan::from_sequence(&[
            Occupant::new("0", "P0", Avoid).in_group("t1"),
            Occupant::new("1", "P1", Have),
            Occupant::new("2", "P2", Like).in_group("ghost"),
        ])
    }

    #[test]
    fn test_rows_resolve_team_names() {
        let rows = desk_rows(&plan(), &roster());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].desk, 1);
        assert_eq!(rows[0].dogs, "Avoid");
        assert_eq!(rows[0].team, "Platform");
        assert_eq!(rows[1].team, "-");
        assert_eq!(rows[2].team, "ghost");
    }

    #[test]
    fn test_render_plan() {
        let table = render_plan(&plan(), &roster());
        let lines: Vec<&str> = table.lines().collect();
        // Header, rule, one line per desk.
        assert_eq!(lines.len(), 5, "{table}");
        for header in ["Desk", "Name", "Dogs", "Team"] {
            assert!(lines[0].contains(header), "missing {header}: {table}");
        }
        assert!(lines[1].starts_with('-'), "{table}");
        for cell in ["1", "P0", "Avoid", "Platform"] {
            assert!(lines[2].contains(cell), "missing {cell}: {table}");
        }
        assert!(lines[3].contains("Have") && lines[3].contains('-'));
    }

    #[test]
    fn test_render_empty_plan_has_header_only() {
        let table = render_plan(&DeskPlan::default(), &roster());
        assert!(table.contains("Desk"));
        assert!(!table.contains("P0"));
    }
}
