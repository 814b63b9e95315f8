//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! This is the hexagonal architecture boundary:
//! - Ports define WHAT a consumer needs to know about a shape
//! - Adapters define HOW an incompatible shape answers it
//!
//! The CORE doesn't know about adapters.
//! Adapters implement these port traits.

mod radius;

pub use radius::RadiusProvider;
