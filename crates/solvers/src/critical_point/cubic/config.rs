use extrema_core::Tolerance;

/// Configuration for the cubic critical-point analysis.
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

    /// Returns the tolerance used for the degenerate check, repeated-root
    /// detection, and the second-derivative sign.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
}
