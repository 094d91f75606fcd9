//! Core types shared by the Extrema solvers.
//!
//! - [`Tolerance`] — the absolute zero tolerance every solver compares against
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod tolerance;

pub use observer::Observer;
pub use tolerance::{Tolerance, ToleranceError};
