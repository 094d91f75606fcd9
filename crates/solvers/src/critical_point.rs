//! Critical-point analysis — locating where a function's derivative vanishes
//! and classifying each point with the second-derivative test.
//!
//! # Solvers
//!
//! - [`cubic`] — closed-form analysis of `A x³ + B x² + C x + D`

pub mod cubic;
