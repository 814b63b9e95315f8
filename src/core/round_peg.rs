//! # Round Peg
//!
//! The shape the system was built for. Measured directly by its radius.

use crate::ports::RadiusProvider;

/// A circular peg
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundPeg {
    radius: f64,
}

impl RoundPeg {
    /// Create a round peg with the given radius
    ///
    /// # Example
    /// ```
    /// use peg_adapter::{RadiusProvider, RoundPeg};
    /// let peg = RoundPeg::new(5.0);
    /// assert_eq!(peg.radius(), 5.0);
    /// ```
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl RadiusProvider for RoundPeg {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn kind(&self) -> &'static str {
        "round"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_unchanged() {
        let peg = RoundPeg::new(3.25);
        assert_eq!(peg.radius(), 3.25);
        assert_eq!(peg.radius(), 3.25);
    }

    #[test]
    fn test_zero_radius() {
        assert_eq!(RoundPeg::new(0.0).radius(), 0.0);
    }

    #[test]
    fn test_kind() {
        assert_eq!(RoundPeg::new(1.0).kind(), "round");
    }
}
