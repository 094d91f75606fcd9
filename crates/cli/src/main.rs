use std::io;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use extrema_core::Tolerance;
use tracing_subscriber::EnvFilter;

mod console;
mod cubic;
mod lp;

use console::Console;

#[derive(Debug, Parser)]
#[command(name = "extrema")]
#[command(about = "Corner-point linear programs and cubic critical points")]
struct Cmd {
    /// Absolute tolerance for zero, feasibility, and repeated-root checks
    #[arg(long, global = true, default_value = "1e-9", value_parser = parse_tolerance)]
    tolerance: Tolerance,

    /// Increase log verbosity (-v for debug, -vv for trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Maximize a two-product profit subject to two resource constraints
    Lp(lp::LpArgs),
    /// Find and classify the critical points of a cubic
    Cubic(cubic::CubicArgs),
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_tracing(cmd.verbose);

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    match cmd.command {
        Command::Lp(args) => lp::run(&args, cmd.tolerance, &mut console),
        Command::Cubic(args) => cubic::run(&args, cmd.tolerance, &mut console),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn parse_tolerance(value: &str) -> Result<Tolerance, String> {
    let value: f64 = value.parse().map_err(|e| format!("{e}"))?;
    Tolerance::new(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn tolerance_defaults_and_parses() {
        let cmd = Cmd::try_parse_from(["extrema", "cubic"]).expect("valid args");
        assert_relative_eq!(cmd.tolerance.value(), 1e-9);

        let cmd = Cmd::try_parse_from(["extrema", "lp", "--tolerance", "1e-6"]).expect("valid args");
        assert_relative_eq!(cmd.tolerance.value(), 1e-6);
    }

    #[test]
    fn rejects_negative_tolerance() {
        assert!(Cmd::try_parse_from(["extrema", "--tolerance=-1", "cubic"]).is_err());
    }

    #[test]
    fn coefficients_accept_negative_values() {
        let cmd = Cmd::try_parse_from(["extrema", "cubic", "--b", "-3", "-v"]).expect("valid args");
        assert_eq!(cmd.verbose, 1);
        let Command::Cubic(args) = cmd.command else {
            panic!("expected cubic subcommand");
        };
        assert_eq!(args.b, Some(-3.0));
    }
}
