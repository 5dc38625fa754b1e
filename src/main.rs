// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for the near-miss search.
//!
//! Values not given as flags are prompted for on stdin.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use fermat_near_miss::bounds::DEFAULT_LOWER_BOUND;
use fermat_near_miss::{search_with, ScanStrategy, SearchBounds};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "near-miss")]
#[command(about = "Search for near misses of Fermat's equation x^n + y^n = z^n")]
struct Cli {
    /// Exponent n (2 < n < 12); prompted for if omitted
    #[arg(short = 'n', long = "exponent", allow_negative_numbers = true)]
    exponent: Option<i64>,
    /// Upper bound k for x, y and z (k > 10); prompted for if omitted
    #[arg(short = 'k', long = "bound", allow_negative_numbers = true)]
    bound: Option<i64>,
    /// Smallest x and y examined
    #[arg(long, default_value_t = DEFAULT_LOWER_BOUND)]
    lower_bound: u64,
    /// How z is searched for each (x, y) pair
    #[arg(long, value_enum, default_value_t = CliStrategy::Bisection)]
    strategy: CliStrategy,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliStrategy {
    Bisection,
    Linear,
}

impl From<CliStrategy> for ScanStrategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Bisection => ScanStrategy::Bisection,
            CliStrategy::Linear => ScanStrategy::Linear,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&cli, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Gather n and k from flags or prompts, search, and write the report.
fn run(cli: &Cli, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    if cli.exponent.is_none() || cli.bound.is_none() {
        writeln!(output, "Welcome to the Fermat's Last Theorem Near Misses Finder!")?;
        writeln!(output, "-------------------------------------------------------")?;
    }
    let n = match cli.exponent {
        Some(n) => n,
        None => prompt(input, output, "Enter the value of n (2 < n < 12): ")?,
    };
    let k = match cli.bound {
        Some(k) => k,
        None => prompt(input, output, "Enter the value of k (k > 10): ")?,
    };

    let bounds = SearchBounds::new(n, k)?.with_lower_bound(cli.lower_bound)?;
    let best = search_with(bounds, cli.strategy.into())?;
    writeln!(output, "{best}")?;
    Ok(())
}

/// Write `message` and read one integer from `input`.
fn prompt(input: &mut impl BufRead, output: &mut impl Write, message: &str) -> Result<i64> {
    write!(output, "{message}")?;
    output.flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Err(anyhow!("unexpected end of input"));
    }
    let value = line.trim();
    value
        .parse::<i64>()
        .with_context(|| format!("invalid integer: {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("near-miss").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_prompt_parses_integer() {
        let mut input = io::Cursor::new("  7 \n");
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, "n? ").unwrap(), 7);
        assert_eq!(output, b"n? ");
    }

    #[test]
    fn test_prompt_rejects_garbage_and_eof() {
        let mut output = Vec::new();
        assert!(prompt(&mut io::Cursor::new("seven\n"), &mut output, "").is_err());
        assert!(prompt(&mut io::Cursor::new(""), &mut output, "").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = parse(&["-n", "3", "-k", "11", "--strategy", "linear"]);
        assert_eq!(cli.exponent, Some(3));
        assert_eq!(cli.bound, Some(11));
        assert_eq!(cli.lower_bound, 10);
        assert_eq!(ScanStrategy::from(cli.strategy), ScanStrategy::Linear);
    }

    #[test]
    fn test_run_prompts_then_reports() {
        let cli = parse(&[]);
        let mut input = io::Cursor::new("3\n11\n");
        let mut output = Vec::new();
        run(&cli, &mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Welcome to the Fermat's Last Theorem Near Misses Finder!\n"));
        assert!(text.contains("Enter the value of n (2 < n < 12): "));
        assert!(text.contains("Enter the value of k (k > 10): "));
        assert!(text.contains("for x: 10, y: 10, z: 11, n: 3, and k: 11\n"));
        assert!(text.contains("Relative Miss: 13.60%\n"));
    }

    #[test]
    fn test_validation_error_is_bare_message() {
        let cli = parse(&["-n", "12", "-k", "20"]);
        let mut output = Vec::new();
        let err = run(&cli, &mut io::Cursor::new(""), &mut output).unwrap_err();

        assert_eq!(
            format!("{err:#}"),
            "Invalid input. Please make sure 2 < n < 12 and k > 10."
        );
        // Flags supplied: no banner, and nothing printed before the error.
        assert!(output.is_empty());
    }

    #[test]
    fn test_overflow_error_is_bare_message() {
        let cli = parse(&["-n", "11", "-k", "53"]);
        let err = run(&cli, &mut io::Cursor::new(""), &mut Vec::new()).unwrap_err();
        assert_eq!(format!("{err:#}"), "k should be less than 53 to avoid overflow.");
    }
}
