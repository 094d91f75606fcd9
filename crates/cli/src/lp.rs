use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use extrema_core::Tolerance;
use extrema_solvers::linear_program::corner_point::{
    Config, Constraint, ObjectiveCoefficients, Problem, SkipReason, Solution, solve_unobserved,
};

use crate::console::Console;

/// Coefficients of `maximize profit_a * xa + profit_b * xb` subject to
/// `a1 xa + b1 xb <= m1` and `a2 xa + b2 xb <= m2`.
///
/// Any value not given on the command line is prompted for.
#[derive(Debug, Default, Args)]
pub(crate) struct LpArgs {
    /// Profit per unit of product A
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) profit_a: Option<f64>,

    /// Profit per unit of product B
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) profit_b: Option<f64>,

    /// Coefficient of xa in constraint 1
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) a1: Option<f64>,

    /// Coefficient of xb in constraint 1
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) b1: Option<f64>,

    /// Resource limit of constraint 1
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) m1: Option<f64>,

    /// Coefficient of xa in constraint 2
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) a2: Option<f64>,

    /// Coefficient of xb in constraint 2
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) b2: Option<f64>,

    /// Resource limit of constraint 2
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) m2: Option<f64>,
}

pub(crate) fn run<R: BufRead, W: Write>(
    args: &LpArgs,
    tolerance: Tolerance,
    console: &mut Console<R, W>,
) -> Result<()> {
    let problem = read_problem(args, console)?;
    tracing::info!(?problem, "solving corner-point problem");

    let solution = solve_unobserved(&problem, &Config::new(tolerance))
        .context("invalid linear program")?;
    render(&solution, console.out())?;
    Ok(())
}

fn read_problem<R: BufRead, W: Write>(
    args: &LpArgs,
    console: &mut Console<R, W>,
) -> Result<Problem> {
    let needs_prompt = [
        args.profit_a,
        args.profit_b,
        args.a1,
        args.b1,
        args.m1,
        args.a2,
        args.b2,
        args.m2,
    ]
    .iter()
    .any(Option::is_none);
    if needs_prompt {
        writeln!(console.out(), "Maximize P = P_A * X_A + P_B * X_B")?;
        writeln!(console.out(), "subject to two <= constraints.")?;
    }

    let profit_a = console.number_or_prompt(args.profit_a, "Profit per unit of A (P_A)", None)?;
    let profit_b = console.number_or_prompt(args.profit_b, "Profit per unit of B (P_B)", None)?;

    let a1 = console.number_or_prompt(args.a1, "Coefficient of X_A in constraint 1 (A1)", None)?;
    let b1 = console.number_or_prompt(args.b1, "Coefficient of X_B in constraint 1 (B1)", None)?;
    let m1 = console.number_or_prompt(args.m1, "Limit of constraint 1 (M1)", None)?;

    let a2 = console.number_or_prompt(args.a2, "Coefficient of X_A in constraint 2 (A2)", None)?;
    let b2 = console.number_or_prompt(args.b2, "Coefficient of X_B in constraint 2 (B2)", None)?;
    let m2 = console.number_or_prompt(args.m2, "Limit of constraint 2 (M2)", None)?;

    Ok(Problem::new(
        ObjectiveCoefficients::new(profit_a, profit_b),
        Constraint::new(a1, b1, m1),
        Constraint::new(a2, b2, m2),
    ))
}

/// Writes a solution with two decimal places.
pub(crate) fn render(solution: &Solution, out: &mut impl Write) -> Result<()> {
    if solution
        .skipped
        .iter()
        .any(|s| s.reason == SkipReason::ZeroBackSubstitutionDivisor)
    {
        writeln!(
            out,
            "Warning: constraint 1 has no X_B term, so the intersection point was skipped."
        )?;
    }

    let Some(optimal) = solution.optimal else {
        writeln!(
            out,
            "Optimization failed. No feasible solution found (perhaps due to negative intercepts or parallel lines)."
        )?;
        return Ok(());
    };

    writeln!(out, "Optimization successful (maximum profit found)")?;
    writeln!(out, "Profit maximized: {:.2}", optimal.profit)?;
    writeln!(out, "Optimal units of A (X_A): {:.2}", optimal.point.xa)?;
    writeln!(out, "Optimal units of B (X_B): {:.2}", optimal.point.xb)?;
    writeln!(out)?;
    writeln!(out, "Feasible corner points evaluated:")?;
    for evaluation in &solution.feasible {
        writeln!(
            out,
            "  - X_A={:.2}, X_B={:.2}, Profit={:.2}",
            evaluation.point.xa, evaluation.point.xb, evaluation.profit
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(args: &LpArgs, input: &str) -> Result<String> {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        run(args, Tolerance::default(), &mut console)?;
        Ok(String::from_utf8(console.out().clone()).expect("utf-8 output"))
    }

    fn textbook_args() -> LpArgs {
        LpArgs {
            profit_a: Some(6.0),
            profit_b: Some(5.0),
            a1: Some(1.0),
            b1: Some(1.0),
            m1: Some(5.0),
            a2: Some(3.0),
            b2: Some(2.0),
            m2: Some(12.0),
        }
    }

    #[test]
    fn renders_textbook_solution_from_flags() {
        let text = run_with(&textbook_args(), "").expect("all values given");

        assert_eq!(
            text,
            "Optimization successful (maximum profit found)\n\
             Profit maximized: 27.00\n\
             Optimal units of A (X_A): 2.00\n\
             Optimal units of B (X_B): 3.00\n\
             \n\
             Feasible corner points evaluated:\n  \
             - X_A=0.00, X_B=0.00, Profit=0.00\n  \
             - X_A=4.00, X_B=0.00, Profit=24.00\n  \
             - X_A=0.00, X_B=5.00, Profit=25.00\n  \
             - X_A=2.00, X_B=3.00, Profit=27.00\n"
        );
    }

    #[test]
    fn prompts_for_missing_values() {
        let args = LpArgs {
            m2: None,
            ..textbook_args()
        };
        let text = run_with(&args, "oops\n12\n").expect("valid after retry");

        assert!(text.starts_with("Maximize P"));
        assert!(text.contains("Invalid input. Please enter a valid number."));
        assert!(text.contains("Profit maximized: 27.00"));
    }

    #[test]
    fn reports_infeasible_problem() {
        let args = LpArgs {
            m1: Some(-1.0),
            ..textbook_args()
        };
        let text = run_with(&args, "").expect("all values given");
        assert!(text.starts_with("Optimization failed."));
    }

    #[test]
    fn warns_about_skipped_intersection() {
        let args = LpArgs {
            b1: Some(0.0),
            ..textbook_args()
        };
        let text = run_with(&args, "").expect("all values given");
        assert!(text.starts_with("Warning: constraint 1 has no X_B term"));
    }

    #[test]
    fn end_of_input_aborts() {
        let err = run_with(&LpArgs::default(), "6\n").expect_err("input ends early");
        assert!(err.to_string().contains("input cancelled"));
    }
}
