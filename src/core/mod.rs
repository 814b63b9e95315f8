//! # Core Domain
//!
//! Pure geometry, no I/O except the scenario file. The pegs and the hole.
//!
//! This module contains the fundamental types:
//! - `RoundHole` - The consumer; only understands radii
//! - `RoundPeg` - Fits the consumer as-is
//! - `SquarePeg` - Does not; needs an adapter
//!
//! ## Design Principles
//!
//! - Shapes are immutable once built
//! - The core never mentions adapters
//! - Measurement goes through the `RadiusProvider` port

mod round_hole;
mod round_peg;
mod square_peg;
pub mod config;

// Re-exports
pub use round_hole::{FitCheck, RoundHole};
pub use round_peg::RoundPeg;
pub use square_peg::SquarePeg;
