//! # Square Peg
//!
//! The shape the system was NOT built for. It only knows its width;
//! nothing in the core can measure it until an adapter wraps it.

/// A square peg
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquarePeg {
    /// Side length of the square cross-section
    pub width: f64,
}

impl SquarePeg {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}
