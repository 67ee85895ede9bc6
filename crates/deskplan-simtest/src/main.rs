//! deskplan Headless Layout Harness
//!
//! Validates the desk layout logic against documented scenarios and a
//! seeded sweep of random rosters. Runs entirely in-process — no storage,
//! no networking, no rendering.
//!
//! Usage:
//!   cargo run -p deskplan-simtest
//!   cargo run -p deskplan-simtest -- --verbose --seed 42 --rounds 5000

use std::collections::{HashMap, HashSet};

use clap::Parser;
use deskplan_cli::table::render_plan;
use deskplan_logic::arranger::arrange_group_with_case;
use deskplan_logic::grouping::group_occupants;
use deskplan_logic::plan::{DeskPlan, ProximityReport};
use deskplan_logic::roster::{validate_roster, Roster, RosterError};
use deskplan_logic::sequencer::{BlockStats, PairOrder};
use deskplan_logic::{arrange, Occupant, ProximityPreference, ProximityPreference::*};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Bundled sample roster ───────────────────────────────────────────────
const SAMPLE_ROSTER_JSON: &str = include_str!("../../../data/sample_roster.json");

#[derive(Parser, Debug)]
#[command(name = "deskplan-simtest", version, about = "Headless desk layout harness")]
struct Args {
    /// Print every check, not just failures.
    #[arg(long)]
    verbose: bool,
    /// Seed for the random roster sweep.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Number of random rosters to check.
    #[arg(long, default_value_t = 2000)]
    rounds: usize,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args = Args::parse();
    println!("=== deskplan Layout Harness ===\n");

    let mut results = Vec::new();

    // 1. Documented scenarios
    results.extend(validate_scenarios(args.verbose));

    // 2. Case coverage of the per-team heuristic
    results.extend(validate_case_coverage(args.verbose));

    // 3. Two-team and multi-team ordering
    results.extend(validate_team_ordering(args.verbose));

    // 4. Random roster sweep
    results.extend(validate_random_sweep(args.seed, args.rounds, args.verbose));

    // 5. Bundled roster document
    results.extend(validate_sample_roster(args.verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn team(shape: &[(&str, ProximityPreference)]) -> Vec<Occupant> {
    shape.iter()
        .map(|&(name, pref)| Occupant::new(name, name, pref))
        .collect()
}

fn names(seq: &[Occupant]) -> Vec<String> {
    seq.iter().map(|o| o.name.clone()).collect()
}

fn expect_order(name: &str, people: &[Occupant], expected: &[&str]) -> TestResult {
    let got = names(&arrange(people));
    TestResult {
        name: name.into(),
        passed: got == expected,
        detail: format!("got [{}], expected [{}]", got.join(", "), expected.join(", ")),
    }
}

// ── 1. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Documented Scenarios ---");
    let mut results = Vec::new();

    results.push(expect_order(
        "scenario_team_of_five",
        &team(&[
            ("Alice", Like),
            ("Bob", Like),
            ("Charlie", Avoid),
            ("David", Have),
            ("Eve", Have),
        ]),
        &["Charlie", "Alice", "David", "Bob", "Eve"],
    ));

    results.push(expect_order(
        "scenario_bob_removed",
        &team(&[("Alice", Like), ("Charlie", Avoid), ("David", Have), ("Eve", Have)]),
        &["Charlie", "Alice", "David", "Eve"],
    ));

    results.push(expect_order(
        "scenario_no_dog_owners",
        &team(&[("Alice", Like), ("Charlie", Avoid)]),
        &["Charlie", "Alice"],
    ));

    results.push(expect_order(
        "scenario_two_groups_pure_shield",
        &[
            Occupant::new("1", "P1", Avoid).in_group("A"),
            Occupant::new("2", "P2", Have).in_group("B"),
        ],
        &["P1", "P2"],
    ));

    results.push(expect_order("scenario_empty_input", &[], &[]));

    if verbose {
        println!("  {} scenarios checked", results.len());
    }
    results
}

// ── 2. Case coverage ────────────────────────────────────────────────────

fn validate_case_coverage(verbose: bool) -> Vec<TestResult> {
    println!("--- Per-Team Case Coverage ---");
    let mut results = Vec::new();

    // Every (avoid, like, have) combination up to 4 each: record the rule the
    // arranger actually took and check both the block and the full pipeline
    // return a permutation.
    let mut seen = HashSet::new();
    let mut bad = Vec::new();
    for a in 0..=4 {
        for l in 0..=4 {
            for h in 0..=4 {
                let mut people = Vec::new();
                for i in 0..a {
                    people.push(Occupant::new(format!("a{i}"), format!("A{i}"), Avoid));
                }
                for i in 0..l {
                    people.push(Occupant::new(format!("l{i}"), format!("L{i}"), Like));
                }
                for i in 0..h {
                    people.push(Occupant::new(format!("h{i}"), format!("H{i}"), Have));
                }
                let refs: Vec<&Occupant> = people.iter().collect();
                let (case, arranged) = arrange_group_with_case(&refs);
                seen.insert(case);
                let arranged: Vec<Occupant> = arranged.into_iter().cloned().collect();
                if !is_permutation(&people, &arranged) {
                    bad.push(format!("a={a} l={l} h={h} (team block)"));
                }

                let out = arrange(&people);
                if !is_permutation(&people, &out) {
                    bad.push(format!("a={a} l={l} h={h}"));
                }
                if verbose {
                    println!("  a={a} l={l} h={h}: {}", names(&out).join(" "));
                }
            }
        }
    }

    results.push(TestResult {
        name: "cases_all_reached".into(),
        passed: seen.len() == 6,
        detail: format!("{} of 6 placement cases taken: {:?}", seen.len(), seen),
    });
    results.push(TestResult {
        name: "cases_total".into(),
        passed: bad.is_empty(),
        detail: if bad.is_empty() {
            "125 team shapes arranged as permutations".into()
        } else {
            format!("non-permutation output for {}", bad.join(", "))
        },
    });

    // Avoiders lead whenever owners are present.
    let t = team(&[("H1", Have), ("L1", Like), ("A1", Avoid), ("H2", Have), ("H3", Have)]);
    let out = arrange(&t);
    results.push(TestResult {
        name: "avoiders_lead_block".into(),
        passed: out.first().map(|o| o.preference) == Some(Avoid),
        detail: format!("[{}]", names(&out).join(", ")),
    });

    results
}

// ── 3. Team ordering ────────────────────────────────────────────────────

fn validate_team_ordering(_verbose: bool) -> Vec<TestResult> {
    println!("--- Team Ordering ---");
    let mut results = Vec::new();

    let avoid_only = BlockStats { avoid: 1, have: 0 };
    let have_only = BlockStats { avoid: 0, have: 1 };
    results.push(TestResult {
        name: "pair_shield_both_directions".into(),
        passed: PairOrder::decide(avoid_only, have_only) == PairOrder::FirstShields
            && PairOrder::decide(have_only, avoid_only) == PairOrder::SecondShields,
        detail: "avoid-only team always precedes owner-only team".into(),
    });

    results.push(expect_order(
        "pair_tie_keeps_input_order",
        &[
            Occupant::new("1", "X", Like).in_group("x"),
            Occupant::new("2", "Y", Like).in_group("y"),
        ],
        &["X", "Y"],
    ));

    results.push(expect_order(
        "many_teams_stable_sort",
        &[
            Occupant::new("1", "X", Like).in_group("x"),
            Occupant::new("2", "Y", Avoid).in_group("y"),
            Occupant::new("3", "Z", Like).in_group("z"),
            Occupant::new("4", "W", Avoid).in_group("w"),
        ],
        &["Y", "W", "X", "Z"],
    ));

    results
}

// ── 4. Random sweep ─────────────────────────────────────────────────────

fn random_people(rng: &mut StdRng) -> Vec<Occupant> {
    let n = rng.gen_range(0..=30);
    let teams = rng.gen_range(1..=5);
    (0..n)
        .map(|i| {
            let pref = ProximityPreference::ALL[rng.gen_range(0..3)];
            let o = Occupant::new(format!("p{i}"), format!("Person {i}"), pref);
            match rng.gen_range(0..=teams) {
                0 => o,
                t => o.in_group(format!("t{t}")),
            }
        })
        .collect()
}

fn is_permutation(input: &[Occupant], output: &[Occupant]) -> bool {
    let mut a: Vec<&str> = input.iter().map(|o| o.id.as_str()).collect();
    let mut b: Vec<&str> = output.iter().map(|o| o.id.as_str()).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

fn is_contiguous(output: &[Occupant]) -> bool {
    let mut closed: HashSet<Option<&str>> = HashSet::new();
    let mut current: Option<Option<&str>> = None;
    for o in output {
        let key = o.group_id.as_deref();
        if current != Some(key) {
            if closed.contains(&key) {
                return false;
            }
            if let Some(prev) = current {
                closed.insert(prev);
            }
            current = Some(key);
        }
    }
    true
}

/// Each team's ids in seating order, keyed by team.
fn team_blocks(seq: &[Occupant]) -> HashMap<Option<String>, Vec<String>> {
    let mut blocks: HashMap<Option<String>, Vec<String>> = HashMap::new();
    for o in seq {
        blocks.entry(o.group_id.clone()).or_default().push(o.id.clone());
    }
    blocks
}

fn validate_random_sweep(seed: u64, rounds: usize, verbose: bool) -> Vec<TestResult> {
    println!("--- Random Sweep (seed={seed}, rounds={rounds}) ---");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut not_permutation = 0;
    let mut not_contiguous = 0;
    let mut not_deterministic = 0;
    let mut run_mismatch = 0;
    let mut not_idempotent = 0;
    let mut have_have_total = 0;
    let mut people_total = 0;

    for round in 0..rounds {
        let people = random_people(&mut rng);
        let out = arrange(&people);
        people_total += people.len();

        if !is_permutation(&people, &out) {
            not_permutation += 1;
        }
        if !is_contiguous(&out) {
            not_contiguous += 1;
        }
        if arrange(&people) != out {
            not_deterministic += 1;
        }
        let runs = out
            .windows(2)
            .filter(|w| w[0].group_id != w[1].group_id)
            .count()
            + usize::from(!out.is_empty());
        if runs != group_occupants(&people).len() {
            run_mismatch += 1;
        }

        // Regrouping the input (stable, so each team keeps its internal
        // order) must leave every team's block unchanged.
        let mut regrouped = people.clone();
        regrouped.sort_by_key(|o| o.group_id.clone());
        if team_blocks(&arrange(&regrouped)) != team_blocks(&out) {
            not_idempotent += 1;
        }

        let report = ProximityReport::of(&out);
        have_have_total += report.have_have_adjacent;

        if verbose && round < 5 {
            println!("  round {round}: [{}]", names(&out).join(", "));
        }
    }

    vec![
        TestResult {
            name: "sweep_permutation".into(),
            passed: not_permutation == 0,
            detail: format!("{not_permutation} of {rounds} outputs not a permutation"),
        },
        TestResult {
            name: "sweep_team_contiguity".into(),
            passed: not_contiguous == 0,
            detail: format!("{not_contiguous} of {rounds} outputs split a team"),
        },
        TestResult {
            name: "sweep_deterministic".into(),
            passed: not_deterministic == 0,
            detail: format!("{not_deterministic} of {rounds} outputs differed on rerun"),
        },
        TestResult {
            name: "sweep_one_run_per_team".into(),
            passed: run_mismatch == 0,
            detail: format!("{run_mismatch} of {rounds} outputs with extra team runs"),
        },
        TestResult {
            name: "sweep_idempotence".into(),
            passed: not_idempotent == 0,
            detail: format!("{not_idempotent} of {rounds} regrouped inputs changed a team block"),
        },
        TestResult {
            name: "sweep_owner_adjacency".into(),
            passed: true,
            detail: format!(
                "{have_have_total} adjacent owner pairs across {people_total} seated people"
            ),
        },
    ]
}

// ── 5. Sample roster ────────────────────────────────────────────────────

fn validate_sample_roster(verbose: bool) -> Vec<TestResult> {
    println!("--- Sample Roster ---");
    let mut results = Vec::new();

    let roster: Roster = match serde_json::from_str(SAMPLE_ROSTER_JSON) {
        Ok(r) => r,
        Err(e) => {
            results.push(TestResult {
                name: "roster_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    let errors: Vec<RosterError> = validate_roster(&roster);
    results.push(TestResult {
        name: "roster_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!(
                "{} people in {} teams",
                roster.people.len(),
                roster.teams.len()
            )
        } else {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    let occupants = roster.occupants();
    let plan = DeskPlan::from_sequence(&arrange(&occupants));
    results.push(TestResult {
        name: "roster_every_person_seated".into(),
        passed: plan.len() == roster.people.len()
            && roster.people.iter().all(|p| plan.desk_of(&p.id).is_some()),
        detail: format!("{} desks assigned", plan.len()),
    });

    let report = plan.report();
    results.push(TestResult {
        name: "roster_proximity_report".into(),
        passed: true,
        detail: format!(
            "have/have adjacent={}, avoid/have adjacent={}, closest avoid-have distance={:?}",
            report.have_have_adjacent, report.avoid_have_adjacent, report.min_avoid_have_distance
        ),
    });

    if verbose {
        println!("{}", render_plan(&plan, &roster));
    }

    results
}
