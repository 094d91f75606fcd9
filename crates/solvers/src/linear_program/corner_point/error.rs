use thiserror::Error;

/// Errors that can occur when solving a corner-point problem.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{name} must be finite, got {value}")]
    NonFiniteInput { name: &'static str, value: f64 },
}
