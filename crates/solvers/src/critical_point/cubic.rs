//! Critical points of a cubic polynomial.
//!
//! # Algorithm
//!
//! For `f(x) = A x³ + B x² + C x + D` the critical points are the real roots
//! of `f'(x) = 3A x² + 2B x + C`. Each root `x_c` is classified by the sign of
//! `f''(x_c) = 6A x_c + 2B`:
//!
//! - `|f''|` below the tolerance — [`Kind::Inflection`]
//! - `f'' > 0` — [`Kind::LocalMinimum`]
//! - `f'' < 0` — [`Kind::LocalMaximum`]
//!
//! When `A` is zero the polynomial is not a cubic and the analysis reports
//! [`Analysis::Degenerate`]. When `f'` has no real root, `f` is strictly
//! monotonic and the analysis reports [`Analysis::Monotonic`].
//!
//! Among the local minima, the one with the smallest `f(x)` is reported as the
//! best minimum. A cubic is unbounded below, so this is the lowest local
//! minimum rather than a global one.

mod analysis;
mod coefficients;
mod config;
mod error;


pub use analysis::{Analysis, CriticalPoint, Direction, Kind};
pub use coefficients::CubicCoefficients;
pub use config::Config;
pub use error::Error;

use crate::quadratic::{Roots, real_roots};

/// Finds and classifies the critical points of a cubic.
///
/// # Errors
///
/// Returns [`Error::NonFiniteInput`] if any coefficient is NaN or infinite.
/// A zero leading coefficient is not an error; it is reported as
/// [`Analysis::Degenerate`].
pub fn analyze(cubic: &CubicCoefficients, config: &Config) -> Result<Analysis, Error> {
    cubic.validate()?;

    let tol = config.tolerance();
    if tol.is_zero(cubic.a) {
        tracing::debug!(?cubic, "leading coefficient is zero; not a cubic");
        return Ok(Analysis::Degenerate);
    }

    let derivative = cubic.derivative();
    let roots = real_roots(derivative, tol);

    if let Roots::NoReal = roots {
        let direction = if derivative.c > 0.0 {
            Direction::Increasing
        } else {
            Direction::Decreasing
        };
        tracing::debug!(?direction, "derivative has no real root");
        return Ok(Analysis::Monotonic { direction });
    }

    let points: Vec<CriticalPoint> = roots
        .iter()
        .map(|x| {
            let point = CriticalPoint::classify(cubic, x, tol);
            tracing::debug!(x, fx = point.fx, kind = ?point.kind, "critical point");
            point
        })
        .collect();

    let best_minimum = points
        .iter()
        .filter(|p| p.kind == Kind::LocalMinimum)
        .min_by(|a, b| a.fx.total_cmp(&b.fx))
        .copied();

    Ok(Analysis::Classified {
        points,
        best_minimum,
    })
}
