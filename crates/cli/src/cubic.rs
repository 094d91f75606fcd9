use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use extrema_core::Tolerance;
use extrema_solvers::critical_point::cubic::{
    Analysis, Config, CubicCoefficients, Direction, Kind, analyze,
};

use crate::console::Console;

/// Coefficients of `f(x) = a x³ + b x² + c x + d`.
///
/// Any coefficient not given on the command line is prompted for, with
/// `f(x) = 2x³ + 4x + 5` as the default.
#[derive(Debug, Default, Args)]
pub(crate) struct CubicArgs {
    /// Coefficient of x³
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) a: Option<f64>,

    /// Coefficient of x²
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) b: Option<f64>,

    /// Coefficient of x
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) c: Option<f64>,

    /// Constant term
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) d: Option<f64>,
}

const DEFAULT: CubicCoefficients = CubicCoefficients {
    a: 2.0,
    b: 0.0,
    c: 4.0,
    d: 5.0,
};

pub(crate) fn run<R: BufRead, W: Write>(
    args: &CubicArgs,
    tolerance: Tolerance,
    console: &mut Console<R, W>,
) -> Result<()> {
    let cubic = CubicCoefficients::new(
        console.number_or_prompt(args.a, "Coefficient A (x^3 term)", Some(DEFAULT.a))?,
        console.number_or_prompt(args.b, "Coefficient B (x^2 term)", Some(DEFAULT.b))?,
        console.number_or_prompt(args.c, "Coefficient C (x term)", Some(DEFAULT.c))?,
        console.number_or_prompt(args.d, "Coefficient D (constant term)", Some(DEFAULT.d))?,
    );
    tracing::info!(?cubic, "analyzing cubic");

    let analysis = analyze(&cubic, &Config::new(tolerance)).context("invalid cubic")?;
    render(&cubic, &analysis, console.out())?;
    Ok(())
}

/// Writes an analysis with four decimal places.
pub(crate) fn render(
    cubic: &CubicCoefficients,
    analysis: &Analysis,
    out: &mut impl Write,
) -> Result<()> {
    let derivative = cubic.derivative();
    writeln!(
        out,
        "f(x) = {}x^3 + {}x^2 + {}x + {}",
        cubic.a, cubic.b, cubic.c, cubic.d
    )?;
    writeln!(
        out,
        "f'(x) = {}x^2 + {}x + {}",
        derivative.a, derivative.b, derivative.c
    )?;

    let (points, best_minimum) = match analysis {
        Analysis::Degenerate => {
            writeln!(
                out,
                "A = 0: this is a quadratic or linear function, so cubic analysis does not apply."
            )?;
            return Ok(());
        }
        Analysis::Monotonic { direction } => {
            let (sign, trend) = match direction {
                Direction::Increasing => ("positive", "increasing"),
                Direction::Decreasing => ("negative", "decreasing"),
            };
            writeln!(out, "f'(x) has no real roots and is always {sign}.")?;
            writeln!(
                out,
                "The function is strictly {trend} and has no local minimum or maximum."
            )?;
            return Ok(());
        }
        Analysis::Classified {
            points,
            best_minimum,
        } => (points, best_minimum),
    };

    writeln!(out, "Found {} real critical point(s).", points.len())?;
    writeln!(out, "f''(x) = {}x + {}", 6.0 * cubic.a, 2.0 * cubic.b)?;

    match best_minimum {
        Some(best) => {
            writeln!(out, "Local minimum at x = {:.4}", best.x)?;
            writeln!(out, "Minimum f(x) value: {:.4}", best.fx)?;
        }
        None => writeln!(out, "No local minimum was found.")?,
    }

    writeln!(out)?;
    writeln!(out, "All critical points:")?;
    for point in points {
        writeln!(
            out,
            "  - x = {:.4}, f(x) = {:.4} -> {}",
            point.x,
            point.fx,
            kind_label(point.kind)
        )?;
    }
    Ok(())
}

fn kind_label(kind: Kind) -> &'static str {
    match kind {
        Kind::LocalMinimum => "local minimum",
        Kind::LocalMaximum => "local maximum",
        Kind::Inflection => "inconclusive (likely inflection point)",
    }
}
