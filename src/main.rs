use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info};

mod bio;
mod logging;
mod report;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(
        value_name = "CODE",
        required_unless_present = "list",
        help = "One-letter amino acid code, e.g. H for histidine. Case is ignored."
    )]
    code: Option<String>,

    #[arg(
        short('l'),
        long("list"),
        conflicts_with = "code",
        help = "List all known amino acids instead of looking one up."
    )]
    list: bool,

    #[arg(
        long("no-color"),
        help = "Never color the output, even when writing to a terminal."
    )]
    no_color: bool,

    #[arg(
        short('v'),
        long("verbose"),
        action = clap::ArgAction::Count,
        help = "Increase log verbosity on stderr (-v INFO, -vv DEBUG, -vvv TRACE)."
    )]
    verbose: u8,

    #[arg(
        short('q'),
        long("quiet"),
        conflicts_with = "verbose",
        help = "Suppress all log output."
    )]
    quiet: bool,
}

#[derive(Debug, Error)]
#[error("Usage: {program} <one-letter amino acid code>")]
struct UsageError {
    program: String,
}

fn main() {
    // Both usage and lookup errors are reported on stdout, like the record itself.
    if let Err(e) = try_main() {
        println!("{e}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = parse_args(std::env::args_os())?;
    logging::setup_logging(args.verbose, args.quiet)?;
    report::configure_color(args.no_color);
    debug!("Parsed arguments: {:?}", args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

// Anything other than help or version that clap rejects is a wrong argument count.
fn parse_args<I, T>(argv: I) -> Result<Args, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = match argv.first() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => env!("CARGO_PKG_NAME").to_string(),
    };

    match Args::try_parse_from(argv.iter()) {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => Err(UsageError { program }),
    }
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    if args.list {
        info!("Listing {} amino acids.", bio::AMINO_ACIDS.len());
        report::write_table(out)?;
        return Ok(());
    }

    let code = args.code.as_deref().context("No amino acid code given")?;
    let aa = bio::lookup(code)?;
    info!("Resolved '{}' to {}.", code, aa.full_name);
    report::write_record(out, aa)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::UnknownCodeError;

    fn output_for(argv: &[&str]) -> Result<String> {
        yansi::disable();
        let args = parse_args(argv.iter().copied())?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn missing_code_is_a_usage_error() {
        let err = parse_args(["aminoref"]).unwrap_err();
        assert_eq!(err.to_string(), "Usage: aminoref <one-letter amino acid code>");
    }

    #[test]
    fn extra_arguments_are_a_usage_error() {
        assert!(parse_args(["aminoref", "h", "r"]).is_err());
        assert!(parse_args(["aminoref", "--list", "h"]).is_err());
        assert!(parse_args(["aminoref", "-v", "-q", "h"]).is_err());
    }

    #[test]
    fn usage_error_surfaces_through_anyhow() {
        let err = output_for(&["./aminoref"]).unwrap_err();
        assert!(err.downcast_ref::<UsageError>().is_some());
        assert_eq!(err.to_string(), "Usage: ./aminoref <one-letter amino acid code>");
    }

    #[test]
    fn flags_are_parsed_alongside_the_code() {
        let args = parse_args(["aminoref", "-vv", "--no-color", "h"]).unwrap();
        assert_eq!(args.code.as_deref(), Some("h"));
        assert_eq!(args.verbose, 2);
        assert!(args.no_color);
        assert!(!args.list);
    }

    #[test]
    fn histidine_lookup_prints_its_attributes() {
        let text = output_for(&["aminoref", "h"]).unwrap();
        assert!(text.starts_with("One-letter: H\n"));
        assert!(text.contains("Three-letter: His\n"));
        assert!(text.contains("Full name: Histidine\n"));
        assert!(text.contains("Essential: Yes\n"));
    }

    #[test]
    fn arginine_lookup_prints_conditional_essentiality() {
        let text = output_for(&["aminoref", "r"]).unwrap();
        assert!(text.contains("Essential: No\n"));
        assert!(text.contains("Conditionally essential: Yes\n"));
    }

    #[test]
    fn unknown_code_fails_with_message() {
        let err = output_for(&["aminoref", "Z"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnknownCodeError>(),
            Some(&UnknownCodeError { code: "Z".to_string() })
        );
        assert_eq!(err.to_string(), "Unknown amino acid code: Z");
    }

    #[test]
    fn list_mode_needs_no_code() {
        let text = output_for(&["aminoref", "--list"]).unwrap();
        assert_eq!(text.lines().count(), 21);
        assert!(text.ends_with("Total share of body mass: 105.5 %\n"));
    }
}
