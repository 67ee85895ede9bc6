//! `deskplan` — seat a roster along a single row of desks.
//!
//! ```bash
//! deskplan arrange data/sample_roster.json
//! deskplan arrange data/sample_roster.json --format json --report
//! deskplan validate data/sample_roster.json
//! RUST_LOG=deskplan_logic=debug deskplan arrange data/sample_roster.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use deskplan_cli::table::render_plan;
use deskplan_logic::plan::{DeskAssignment, DeskPlan, ProximityReport};
use deskplan_logic::roster::{validate_roster, Roster};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "deskplan", version, about = "Dog-aware desk layout")]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the desk order for a roster file
    Arrange {
        /// Path to roster JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Append the proximity report
        #[arg(long)]
        report: bool,
    },
    /// Check a roster file for duplicate ids and dangling team references
    Validate {
        /// Path to roster JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    desks: &'a [DeskAssignment],
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ProximityReport>,
}

fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_roster(path: &Path) -> Result<Roster> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    let roster: Roster = serde_json::from_str(&raw)
        .with_context(|| format!("parsing roster {}", path.display()))?;
    info!(
        "loaded {} people in {} teams from {}",
        roster.people.len(),
        roster.teams.len(),
        path.display()
    );
    Ok(roster)
}

fn load_valid_roster(path: &Path) -> Result<Roster> {
    let roster = load_roster(path)?;
    let errors = validate_roster(&roster);
    if !errors.is_empty() {
        for e in &errors {
            warn!("{e}");
        }
        bail!(
            "{} has {} validation error(s): {}",
            path.display(),
            errors.len(),
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        );
    }
    Ok(roster)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Arrange {
            file,
            format,
            report,
        } => {
            let roster = load_valid_roster(&file)?;
            let sequence = deskplan_logic::arrange(&roster.occupants());
            let plan = DeskPlan::from_sequence(&sequence);
            let proximity = report.then(|| plan.report());

            match format {
                Format::Table => {
                    println!("{}", render_plan(&plan, &roster));
                    if let Some(r) = proximity {
                        println!();
                        println!("Adjacent dog owners:        {}", r.have_have_adjacent);
                        println!("Avoider next to dog owner:  {}", r.avoid_have_adjacent);
                        match r.min_avoid_have_distance {
                            Some(d) => println!("Closest avoider to a dog:   {d} desk(s)"),
                            None => println!("Closest avoider to a dog:   n/a"),
                        }
                    }
                }
                Format::Json => {
                    let out = JsonOutput {
                        desks: &plan.desks,
                        report: proximity,
                    };
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
            }
        }
        Commands::Validate { file } => {
            let roster = load_roster(&file)?;
            let errors = validate_roster(&roster);
            if errors.is_empty() {
                println!(
                    "{}: ok ({} people, {} teams)",
                    file.display(),
                    roster.people.len(),
                    roster.teams.len()
                );
            } else {
                for e in &errors {
                    println!("{}: {e}", file.display());
                }
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
