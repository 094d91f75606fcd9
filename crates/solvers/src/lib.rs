//! Closed-form solvers for small optimization problems.
//!
//! - [`linear_program`] — two-variable, two-constraint linear programs solved
//!   by enumerating corner points
//! - [`critical_point`] — critical points of polynomials classified with the
//!   second-derivative test
//! - [`quadratic`] — real roots of quadratics, shared by the solvers above
//!
//! All solvers are pure functions of their inputs. Tolerances come from each
//! solver's `Config`, which wraps an [`extrema_core::Tolerance`].

pub mod critical_point;
pub mod linear_program;
pub mod quadratic;
