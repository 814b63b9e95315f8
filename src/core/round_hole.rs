//! # Round Hole
//!
//! The consumer. A round hole accepts anything that can report a radius,
//! and nothing else.

use crate::ports::RadiusProvider;

/// Relative slack allowed when a peg is "exactly" as wide as the hole.
///
/// Equivalent radii are derived through `sqrt(2)`, so a peg that is
/// mathematically equal to the hole can come out a few ULPs larger.
const FIT_TOLERANCE: f64 = 8.0 * f64::EPSILON;

/// A circular hole
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundHole {
    radius: f64,
}

/// Outcome of checking one peg against a hole
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitCheck {
    pub hole_radius: f64,
    pub peg_radius: f64,
    pub fits: bool,
    /// `hole_radius - peg_radius`; negative when the peg is too wide
    pub clearance: f64,
}

impl RoundHole {
    /// Create a round hole with the given radius
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Check whether a peg fits into this hole
    ///
    /// The boundary is inclusive: a peg as wide as the hole fits.
    ///
    /// # Example
    /// ```
    /// use peg_adapter::{RoundHole, RoundPeg};
    /// let hole = RoundHole::new(5.0);
    /// assert!(hole.fits(&RoundPeg::new(5.0)));
    /// assert!(!hole.fits(&RoundPeg::new(5.5)));
    /// ```
    pub fn fits<P: RadiusProvider + ?Sized>(&self, peg: &P) -> bool {
        self.admits(peg.radius())
    }

    /// Check a peg and report the radii involved
    pub fn check<P: RadiusProvider + ?Sized>(&self, peg: &P) -> FitCheck {
        let peg_radius = peg.radius();
        FitCheck {
            hole_radius: self.radius,
            peg_radius,
            fits: self.admits(peg_radius),
            clearance: self.radius - peg_radius,
        }
    }

    fn admits(&self, peg_radius: f64) -> bool {
        if self.radius >= peg_radius {
            return true;
        }
        let scale = self.radius.abs().max(peg_radius.abs());
        peg_radius - self.radius <= FIT_TOLERANCE * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundPeg;

    #[test]
    fn test_smaller_peg_fits() {
        let hole = RoundHole::new(5.0);
        assert!(hole.fits(&RoundPeg::new(3.0)));
    }

    #[test]
    fn test_equal_radius_fits() {
        let hole = RoundHole::new(5.0);
        assert!(hole.fits(&RoundPeg::new(5.0)));
    }

    #[test]
    fn test_larger_peg_does_not_fit() {
        let hole = RoundHole::new(5.0);
        assert!(!hole.fits(&RoundPeg::new(5.0001)));
        assert!(!hole.fits(&RoundPeg::new(7.0)));
    }

    #[test]
    fn test_ulp_overshoot_fits() {
        let hole = RoundHole::new(5.0);
        let nudged = f64::from_bits(5.0_f64.to_bits() + 2);
        assert!(hole.fits(&RoundPeg::new(nudged)));
    }

    #[test]
    fn test_nan_peg_does_not_fit() {
        let hole = RoundHole::new(5.0);
        assert!(!hole.fits(&RoundPeg::new(f64::NAN)));
    }

    #[test]
    fn test_check_reports_clearance() {
        let hole = RoundHole::new(5.0);
        let check = hole.check(&RoundPeg::new(2.0));
        assert!(check.fits);
        assert_eq!(check.hole_radius, 5.0);
        assert_eq!(check.peg_radius, 2.0);
        assert_eq!(check.clearance, 3.0);

        let check = hole.check(&RoundPeg::new(6.0));
        assert!(!check.fits);
        assert_eq!(check.clearance, -1.0);
    }

    #[test]
    fn test_fits_trait_objects() {
        let hole = RoundHole::new(2.0);
        let pegs: Vec<Box<dyn RadiusProvider>> =
            vec![Box::new(RoundPeg::new(1.0)), Box::new(RoundPeg::new(3.0))];
        let results: Vec<bool> = pegs.iter().map(|p| hole.fits(p)).collect();
        assert_eq!(results, vec![true, false]);
    }
}
