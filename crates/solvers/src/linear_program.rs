//! Solvers for linear programs — maximizing a linear objective subject to
//! linear `≤` constraints and non-negative decision variables.
//!
//! # Solvers
//!
//! - [`corner_point`] — exact enumeration of the corner points of a
//!   two-variable, two-constraint feasible region

pub mod corner_point;
