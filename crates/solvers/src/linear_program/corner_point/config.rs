use extrema_core::Tolerance;

/// Configuration for the corner-point solver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    tolerance: Tolerance,
}

impl Config {
    /// Creates a config with the given tolerance.
    #[must_use]
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Returns the tolerance used for zero checks and constraint checks.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
}
