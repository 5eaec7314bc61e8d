//! `ds` — Query and verify the difference-set catalog.
//!
//! **Usage:**
//! ```text
//! ds [--catalog <path>] [--verbose] <command>
//!
//! ds status 'DS(16,6,2,[4,4])'
//! ds show 16 6 2 4,4
//! ds groups 16 6 2
//! ds get 21 5 1 21 --index 0
//! ds table --status No
//! ds verify 13 4 1 13
//! ds check --group 3,3 --lambda 1 0,0 1,0 0,1 2,2
//! ds audit
//! ```
//!
//! The catalog path defaults to `ds.json` and can be set with `DS_CATALOG`.
//! `verify`, `check` and `audit` exit non-zero when a set fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use diffset::{AbelianGroup, Parameters};
use diffset_catalog::{all_groups, audit, Catalog, DsName, Severity, Status, Summary, Table};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Query and verify the difference-set catalog.
#[derive(Parser)]
#[command(
    name = "ds",
    version,
    about = "Look up, summarise, and verify difference sets"
)]
struct Args {
    /// Path to the catalog JSON file.
    #[arg(long, env = "DS_CATALOG", default_value = "ds.json", global = true)]
    catalog: PathBuf,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the status and reference of a parameter name.
    Status {
        /// Name such as `DS(11,5,2,[11])`.
        name: DsName,
    },
    /// Print the summary for one group.
    Show {
        /// Group order.
        v: u64,
        /// Set size.
        k: u64,
        /// Multiplicity.
        lambda: u64,
        /// Invariant factors, comma separated (e.g. `4,4`).
        #[arg(value_parser = parse_factors)]
        group: Factors,
    },
    /// Print summaries for every group with these parameters.
    Groups {
        /// Group order.
        v: u64,
        /// Set size.
        k: u64,
        /// Multiplicity.
        lambda: u64,
    },
    /// Print one stored set with its representation group.
    Get {
        /// Group order.
        v: u64,
        /// Set size.
        k: u64,
        /// Multiplicity.
        lambda: u64,
        /// Invariant factors, comma separated.
        #[arg(value_parser = parse_factors)]
        group: Factors,
        /// Which stored set.
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Print the parameter table.
    Table {
        /// Only records with this status (All, Yes, Open, No).
        #[arg(long, value_parser = parse_status)]
        status: Option<Status>,
    },
    /// Verify one stored set.
    Verify {
        /// Group order.
        v: u64,
        /// Set size.
        k: u64,
        /// Multiplicity.
        lambda: u64,
        /// Invariant factors, comma separated.
        #[arg(value_parser = parse_factors)]
        group: Factors,
        /// Which stored set.
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Verify a set given on the command line.
    Check {
        /// Cyclic factor orders, comma separated.
        #[arg(long, value_parser = parse_factors)]
        group: Factors,
        /// Required multiplicity.
        #[arg(long)]
        lambda: u64,
        /// Elements; coordinates comma separated (e.g. `1,0`).
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_element)]
        elements: Vec<Coords>,
    },
    /// Verify every stored set and report.
    Audit,
}

#[derive(Clone, Debug)]
struct Factors(Vec<u64>);

#[derive(Clone, Debug)]
struct Coords(Vec<i64>);

impl AsRef<[i64]> for Coords {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

fn parse_factors(s: &str) -> Result<Factors, String> {
    s.trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .map(|f| {
            f.trim()
                .parse::<u64>()
                .map_err(|e| format!("bad factor {f:?}: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Factors)
}

fn parse_element(s: &str) -> Result<Coords, String> {
    s.trim_matches(|c| c == '(' || c == ')')
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<i64>()
                .map_err(|e| format!("bad coordinate {c:?}: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Coords)
}

fn parse_status(s: &str) -> Result<Status, String> {
    match s.to_ascii_lowercase().as_str() {
        "all" => Ok(Status::All),
        "yes" => Ok(Status::Yes),
        "open" => Ok(Status::Open),
        "no" => Ok(Status::No),
        _ => Err(format!("unknown status {s:?} (expected All, Yes, Open or No)")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if !run(args.command, &args.catalog)? {
        process::exit(1);
    }
    Ok(())
}

/// Runs one command. Returns `false` when a verified set fails, which
/// `main` turns into exit status 1.
fn run(command: Command, catalog_path: &Path) -> Result<bool> {
    let load = || -> Result<Catalog> {
        let catalog = Catalog::from_path(catalog_path)
            .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;
        info!(records = catalog.len(), "catalog loaded");
        Ok(catalog)
    };

    match command {
        Command::Status { name } => run_status(&load()?, &name).map(|()| true),
        Command::Show {
            v,
            k,
            lambda,
            group,
        } => {
            let catalog = load()?;
            let name = DsName::new(v, k, lambda, group.0);
            print!("{}", Summary::new(&catalog, &name)?);
            Ok(true)
        }
        Command::Groups { v, k, lambda } => {
            let text = all_groups(&load()?, v, k, lambda);
            if text.is_empty() {
                bail!("no DS({v},{k},{lambda}) in catalog");
            }
            print!("{text}");
            Ok(true)
        }
        Command::Get {
            v,
            k,
            lambda,
            group,
            index,
        } => {
            let catalog = load()?;
            let entry = catalog.get_ds(v, k, lambda, &group.0, index)?;
            let (representation, set) = entry.elements()?;
            let elements: Vec<String> = set.iter().map(ToString::to_string).collect();
            println!("{} #{}", entry.name, entry.index);
            println!("group: {representation}");
            println!("set:   {}", elements.join(" "));
            Ok(true)
        }
        Command::Table { status } => {
            print!("{}", Table::from_catalog(&load()?, status));
            Ok(true)
        }
        Command::Verify {
            v,
            k,
            lambda,
            group,
            index,
        } => run_verify(&load()?, v, k, lambda, &group.0, index),
        Command::Check {
            group,
            lambda,
            elements,
        } => run_check(&group, lambda, &elements),
        Command::Audit => Ok(run_audit(&load()?)),
    }
}

fn run_status(catalog: &Catalog, name: &DsName) -> Result<()> {
    let status = catalog
        .status(name)?
        .map_or_else(|| "unknown".to_owned(), |s| s.to_string());
    println!("{name}: {status}");
    if let Some(comment) = catalog.comment(name)? {
        println!("Reference: {comment}");
    }
    println!("Stored sets: {}", catalog.num_sets(name)?);
    Ok(())
}

fn run_verify(
    catalog: &Catalog,
    v: u64,
    k: u64,
    lambda: u64,
    group: &[u64],
    index: usize,
) -> Result<bool> {
    let entry = catalog.get_ds(v, k, lambda, group, index)?;
    let verdict = entry.verify()?;
    debug!(
        distinct = verdict.autocorrelation().len(),
        identity = verdict.autocorrelation().identity_count(),
        "autocorrelation computed"
    );
    match verdict.violation() {
        None => {
            println!("{} #{}: is a difference set", entry.name, entry.index);
            Ok(true)
        }
        Some(violation) => {
            println!("{} #{}: NOT a difference set", entry.name, entry.index);
            println!("       {violation}");
            Ok(false)
        }
    }
}

fn run_check(group: &Factors, lambda: u64, elements: &[Coords]) -> Result<bool> {
    let g = AbelianGroup::new(group.0.clone()).context("Invalid group")?;
    let set = g.elements(elements).context("Invalid element")?;
    let params = Parameters::new(g.order().unwrap_or(0), set.len() as u64, lambda);
    let verdict = diffset::verify(&params, &g, &set);

    println!("group {g}, k = {}, lambda = {lambda}", set.len());
    for (diff, count) in verdict.autocorrelation().nonzero() {
        debug!(%diff, count, "difference");
    }
    match verdict.violation() {
        None => {
            println!("is a difference set");
            if !verdict.is_complete_cover() {
                println!("note: some group elements never occur as a difference");
            }
            Ok(true)
        }
        Some(violation) => {
            println!("NOT a difference set: {violation}");
            Ok(false)
        }
    }
}

fn run_audit(catalog: &Catalog) -> bool {
    let report = audit(catalog);

    println!("Difference-Set Catalog Audit");
    println!("============================");
    println!();

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!("[{}] {} — {}", status, result.subject, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let passed = report.count(Severity::Pass);
    let warned = report.count(Severity::Warning);
    let failed = report.failure_count();

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        passed, warned, failed
    );

    if failed > 0 {
        eprintln!("Audit FAILED: {} set(s) did not verify.", failed);
        return false;
    }

    println!("Audit PASSED.");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const CATALOG: &str = r#"{
        "DS(7,3,1,[7])": {"status": "All", "sets": [[0,1,3],[0,1,2]]},
        "DS(13,4,1,[13])": {"status": "All", "sets": [[0,1,3,9]]}
    }"#;

    fn factors(s: &str) -> Factors {
        parse_factors(s).unwrap()
    }

    fn coords(items: &[&str]) -> Vec<Coords> {
        items.iter().map(|s| parse_element(s).unwrap()).collect()
    }

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn check_accepts_negative_coordinates() {
        let args = Args::try_parse_from([
            "ds", "check", "--group", "3,3", "--lambda", "1", "0,0", "-1,0",
        ])
        .unwrap();
        let Command::Check {
            group,
            lambda,
            elements,
        } = args.command
        else {
            unreachable!("parsed as another command");
        };
        assert_eq!(group.0, [3, 3]);
        assert_eq!(lambda, 1);
        let coords: Vec<&[i64]> = elements.iter().map(AsRef::as_ref).collect();
        assert_eq!(coords, [&[0i64, 0][..], &[-1i64, 0][..]]);
    }

    #[test]
    fn check_requires_elements() {
        assert!(Args::try_parse_from(["ds", "check", "--group", "7", "--lambda", "1"]).is_err());
    }

    #[test]
    fn catalog_path_is_global() {
        let args = Args::try_parse_from(["ds", "audit", "--catalog", "other.json"]).unwrap();
        assert_eq!(args.catalog, PathBuf::from("other.json"));
        assert!(matches!(args.command, Command::Audit));
    }

    #[test]
    fn factor_parsing() {
        assert_eq!(factors("4,4").0, [4, 4]);
        assert_eq!(factors("[2, 8]").0, [2, 8]);
        assert_eq!(factors("21").0, [21]);
        assert!(parse_factors("").is_err());
        assert!(parse_factors("4,x").is_err());
        assert!(parse_factors("-3").is_err());
    }

    #[test]
    fn element_parsing() {
        assert_eq!(parse_element("5").unwrap().0, [5]);
        assert_eq!(parse_element("(1, 2)").unwrap().0, [1, 2]);
        assert_eq!(parse_element("-1,0").unwrap().0, [-1, 0]);
        assert!(parse_element("1,,2").is_err());
        assert!(parse_element("a").is_err());
    }

    #[test]
    fn status_parsing_ignores_case() {
        assert_eq!(parse_status("All").unwrap(), Status::All);
        assert_eq!(parse_status("yes").unwrap(), Status::Yes);
        assert_eq!(parse_status("OPEN").unwrap(), Status::Open);
        assert_eq!(parse_status("nO").unwrap(), Status::No);
        assert!(parse_status("maybe").is_err());
    }

    #[test]
    fn check_reports_failure_as_false() {
        let g = factors("7");
        assert!(run_check(&g, 1, &coords(&["0", "1", "3"])).unwrap());
        assert!(!run_check(&g, 1, &coords(&["0", "1", "2"])).unwrap());
        assert!(!run_check(&factors("3,3"), 1, &coords(&["0,0", "1,0", "0,1", "2,2"])).unwrap());
    }

    #[test]
    fn check_rejects_invalid_input() {
        assert!(run_check(&factors("7"), 1, &coords(&["-1"])).is_err());
        assert!(run_check(&factors("7"), 1, &coords(&["1,0"])).is_err());
        assert!(run_check(&factors("0"), 1, &coords(&["0"])).is_err());
    }

    #[test]
    fn verify_reports_failure_as_false() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();
        assert!(run_verify(&catalog, 7, 3, 1, &[7], 0).unwrap());
        assert!(!run_verify(&catalog, 7, 3, 1, &[7], 1).unwrap());
        assert!(run_verify(&catalog, 7, 3, 1, &[7], 2).is_err());
    }

    #[test]
    fn audit_fails_when_any_set_fails() {
        let failing = Catalog::from_json_str(CATALOG).unwrap();
        assert!(!run_audit(&failing));

        let passing = Catalog::from_json_str(
            r#"{"DS(13,4,1,[13])": {"status": "All", "sets": [[0,1,3,9]]}}"#,
        )
        .unwrap();
        assert!(run_audit(&passing));
    }

    #[test]
    fn run_propagates_missing_catalog() {
        let err = run(Command::Audit, Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load catalog"));
    }
}
