//! # Peg Adapter
//!
//! Fit square pegs into round holes.
//!
//! ## Overview
//!
//! A round hole only knows how to measure radii. Round pegs have one;
//! square pegs only have a width. Instead of teaching the hole about
//! squares, a `SquarePegAdapter` wraps a square peg and reports the radius
//! of the smallest circle around it (half the diagonal).
//!
//! ```text
//!   core                    ports                    adapters
//!   ────                    ─────                    ────────
//!   RoundHole ──fits──▶ RadiusProvider ◀──impl── SquarePegAdapter ──&──▶ SquarePeg
//!                              ▲
//!   RoundPeg ─────impl─────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use peg_adapter::{RoundHole, RoundPeg, SquarePeg, SquarePegAdapter};
//!
//! let hole = RoundHole::new(5.0);
//! assert!(hole.fits(&RoundPeg::new(5.0)));
//!
//! let small = SquarePeg::new(5.0);
//! let large = SquarePeg::new(10.0);
//! assert!(hole.fits(&SquarePegAdapter::new(&small)));   // ~3.54
//! assert!(!hole.fits(&SquarePegAdapter::new(&large)));  // ~7.07
//! ```
//!
//! ## Scenarios
//!
//! ```rust
//! use peg_adapter::Scenario;
//!
//! for report in Scenario::demo().run() {
//!     println!("{} fits: {}", report.label, report.fits);
//! }
//! ```

pub mod core;
pub mod ports;
pub mod adapters;
pub mod scenario;
pub mod logging;

// Re-exports for convenience
pub use crate::core::{FitCheck, RoundHole, RoundPeg, SquarePeg};
pub use crate::core::config::{ConfigError, ConfigResult, PegSpec, ScenarioConfig};
pub use ports::RadiusProvider;
pub use adapters::{circumscribed_radius, SquarePegAdapter};
pub use scenario::{FitReport, Scenario};
