//! ddex-identifiers CLI
//!
//! Check, format and generate release identifiers from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ddex_identifiers::{
    evaluate_with, format_with, generate_fixture, generate_fixtures_seeded, mask_for,
    EngineConfig, FieldReport, IdentifierFamily, IdentifierKind,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ddex-identifiers", version, about = "Validate and format UPC/EAN, ISNI and IPI identifiers")]
struct Cli {
    /// Config file (TOML); defaults to the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify an identifier and print the field report
    Check {
        /// barcode, isni or ipi (kind names like upc-a are accepted)
        family: IdentifierFamily,
        input: String,
        /// Report as if the field had lost focus
        #[arg(long)]
        touched: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the grouped display string
    Format {
        family: IdentifierFamily,
        input: String,
    },
    /// Generate identifiers with valid check digits
    Fixture {
        kind: IdentifierKind,
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List identifier kinds and their display masks
    Kinds,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    ExitCode::from(exit_status(run(cli)))
}

/// 0 when clean, 1 when a checked identifier has an error to show, 2 on
/// config or I/O errors.
fn exit_status(outcome: Result<bool, Box<dyn std::error::Error>>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    }
}

fn fixtures(kind: IdentifierKind, count: u32, seed: Option<u64>) -> Vec<String> {
    match seed {
        Some(seed) => generate_fixtures_seeded(kind, seed, count),
        None => (0..count).map(|_| generate_fixture(kind)).collect(),
    }
}

/// Returns `false` when a checked identifier has an error to show.
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::load_default()?,
    };

    match cli.command {
        Command::Check {
            family,
            input,
            touched,
            json,
        } => {
            let report = evaluate_with(family, &input, touched, &config.display);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            Ok(report.message.is_none())
        }
        Command::Format { family, input } => {
            let digits = ddex_identifiers::normalize(family, &input);
            println!("{}", format_with(family, &digits, &config.display));
            Ok(true)
        }
        Command::Fixture { kind, count, seed } => {
            for fixture in fixtures(kind, count, seed) {
                println!("{}", fixture);
            }
            Ok(true)
        }
        Command::Kinds => {
            for kind in IdentifierKind::all() {
                let groups = mask_for(kind.family(), kind.target_len())
                    .map(|mask| {
                        mask.groups
                            .iter()
                            .map(|g| g.to_string())
                            .collect::<Vec<_>>()
                            .join("-")
                    })
                    .unwrap_or_default();
                println!(
                    "{:<8} {:>2} digits  mask {:<9} checksum {}",
                    kind.display_name(),
                    kind.target_len(),
                    groups,
                    if kind.has_checksum() { "mod-10" } else { "none" }
                );
            }
            Ok(true)
        }
    }
}

fn print_report(report: &FieldReport) {
    println!("digits:         {}", report.digits);
    println!("display:        {}", report.display);
    println!(
        "kind:           {}",
        report
            .kind
            .map(|k| k.display_name())
            .unwrap_or("-")
    );
    println!("classification: {:?}", report.classification);
    if let Some(message) = &report.message {
        println!("error:          {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<bool, Box<dyn std::error::Error>> {
        let argv = std::iter::once("ddex-identifiers").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        run(cli)
    }

    #[test]
    fn check_bad_check_digit_fails() {
        assert!(!run_args(&["check", "barcode", "036000291451"]).unwrap());
        assert_eq!(exit_status(run_args(&["check", "barcode", "036000291451"])), 1);
    }

    #[test]
    fn check_valid_code_passes() {
        assert!(run_args(&["check", "upc-a", "0-36000-29145-2", "--json"]).unwrap());
    }

    #[test]
    fn check_ambiguous_gated_on_touched() {
        assert!(run_args(&["check", "barcode", "03600029145"]).unwrap());
        assert!(!run_args(&["check", "barcode", "03600029145", "--touched"]).unwrap());
    }

    #[test]
    fn format_and_kinds_succeed() {
        assert!(run_args(&["format", "isni", "0000000121032683"]).unwrap());
        assert!(run_args(&["kinds"]).unwrap());
    }

    #[test]
    fn seeded_fixtures_are_deterministic() {
        assert!(run_args(&["fixture", "upc-a", "--seed", "1", "--count", "3"]).unwrap());
        let first = fixtures(IdentifierKind::UpcA, 3, Some(1));
        let second = fixtures(IdentifierKind::UpcA, 3, Some(1));
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first
            .iter()
            .all(|f| ddex_identifiers::validate_checksum(IdentifierKind::UpcA, f)));
    }

    #[test]
    fn missing_config_is_an_error() {
        let outcome = run_args(&[
            "--config",
            "/nonexistent/ddex-identifiers/config.toml",
            "check",
            "barcode",
            "036000291452",
        ]);
        assert!(outcome.is_err());
        assert_eq!(exit_status(outcome), 2);
    }

    #[test]
    fn unknown_family_is_a_usage_error() {
        let err = Cli::try_parse_from(["ddex-identifiers", "check", "isbn", "123"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
