//! # Square Peg Adapter
//!
//! Lets a `SquarePeg` answer the `RadiusProvider` question.
//!
//! Without it, a `RoundHole` has no way to measure a square peg: the peg
//! only knows its width, and the hole only asks for a radius. Neither type
//! changes; the adapter translates between them.
//!
//! # Example
//! ```
//! use peg_adapter::{RoundHole, SquarePeg, SquarePegAdapter};
//!
//! let hole = RoundHole::new(5.0);
//! let small = SquarePeg::new(5.0);
//! let large = SquarePeg::new(10.0);
//!
//! assert!(hole.fits(&SquarePegAdapter::new(&small)));
//! assert!(!hole.fits(&SquarePegAdapter::new(&large)));
//! ```

use std::f64::consts::SQRT_2;

use crate::core::SquarePeg;
use crate::ports::RadiusProvider;

/// Radius of the smallest circle around a square of the given width
///
/// Half the square's diagonal: the distance from its center to a corner.
pub fn circumscribed_radius(width: f64) -> f64 {
    width * SQRT_2 / 2.0
}

/// Presents a borrowed `SquarePeg` as something with a radius
#[derive(Clone, Copy, Debug)]
pub struct SquarePegAdapter<'a> {
    peg: &'a SquarePeg,
}

impl<'a> SquarePegAdapter<'a> {
    pub fn new(peg: &'a SquarePeg) -> Self {
        Self { peg }
    }

    /// The wrapped peg
    pub fn peg(&self) -> &'a SquarePeg {
        self.peg
    }
}

impl RadiusProvider for SquarePegAdapter<'_> {
    /// Computed from the peg's width on every call; nothing is cached.
    fn radius(&self) -> f64 {
        circumscribed_radius(self.peg.width)
    }

    fn kind(&self) -> &'static str {
        "square"
    }
}
