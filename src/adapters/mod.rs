//! Adapters - Implementations of the radius port for shapes the core can't measure

pub mod square_peg;

pub use square_peg::{circumscribed_radius, SquarePegAdapter};
