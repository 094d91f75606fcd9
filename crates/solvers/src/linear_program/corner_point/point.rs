/// A point in the two-variable decision space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Quantity of the first product.
    pub xa: f64,

    /// Quantity of the second product.
    pub xb: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Self = Self { xa: 0.0, xb: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub fn new(xa: f64, xb: f64) -> Self {
        Self { xa, xb }
    }

    /// Returns true if neither coordinate is negative.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.xa >= 0.0 && self.xb >= 0.0
    }
}
