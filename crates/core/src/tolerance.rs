use thiserror::Error;

/// Errors that can occur when constructing a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("tolerance must be finite, got {0}")]
    NonFinite(f64),

    #[error("tolerance must be non-negative, got {0}")]
    Negative(f64),
}

/// Absolute tolerance for floating-point comparisons against zero.
///
/// Every "is this zero?" and "does this satisfy `≤ limit`?" decision a solver
/// makes goes through one `Tolerance`, so classification and feasibility agree
/// on what counts as equal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// The tolerance used when none is configured.
    pub const DEFAULT: Self = Self(1e-9);

    /// Creates a tolerance from a finite, non-negative value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is negative or non-finite.
    pub fn new(value: f64) -> Result<Self, ToleranceError> {
        if !value.is_finite() {
            return Err(ToleranceError::NonFinite(value));
        }
        if value < 0.0 {
            return Err(ToleranceError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Returns the tolerance as a raw value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if `value` lies within the tolerance band around zero.
    #[must_use]
    pub fn is_zero(self, value: f64) -> bool {
        value.abs() <= self.0
    }

    /// Returns true if `|value|` is strictly less than the tolerance.
    ///
    /// Unlike [`is_zero`](Self::is_zero), a value exactly at the tolerance is
    /// not within it.
    #[must_use]
    pub fn is_within(self, value: f64) -> bool {
        value.abs() < self.0
    }

    /// Returns true if `value` lies outside the tolerance band around zero.
    #[must_use]
    pub fn is_nonzero(self, value: f64) -> bool {
        !self.is_zero(value)
    }

    /// Returns true if `lhs <= limit`, allowing `lhs` to exceed `limit` by the tolerance.
    #[must_use]
    pub fn admits(self, lhs: f64, limit: f64) -> bool {
        lhs <= limit + self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
