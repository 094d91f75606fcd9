use thiserror::Error;

/// Errors that can occur when analyzing a cubic.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("coefficient {name} must be finite, got {value}")]
    NonFiniteInput { name: &'static str, value: f64 },
}
