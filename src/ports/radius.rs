//! # Radius Port
//!
//! The capability a round hole depends on.
//!
//! `RadiusProvider: fn() -> f64` - How wide is it, measured as a circle?
//!
//! Implemented natively by `RoundPeg` and by shape adapters
//! (e.g. `SquarePegAdapter`).

/// Anything that can be measured by a radius
///
/// A `RoundHole` only ever asks this one question, so any shape that can
/// answer it fits into the system without the hole knowing the concrete type.
pub trait RadiusProvider {
    /// Radius of the circle this object occupies
    fn radius(&self) -> f64;

    /// Short name of the underlying shape (for reports/logging)
    fn kind(&self) -> &'static str;
}

impl<T: RadiusProvider + ?Sized> RadiusProvider for &T {
    fn radius(&self) -> f64 {
        (**self).radius()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

impl<T: RadiusProvider + ?Sized> RadiusProvider for Box<T> {
    fn radius(&self) -> f64 {
        (**self).radius()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Coin;

    impl RadiusProvider for Coin {
        fn radius(&self) -> f64 {
            1.25
        }

        fn kind(&self) -> &'static str {
            "coin"
        }
    }

    #[test]
    fn test_reference_forwards() {
        let coin = Coin;
        let by_ref = &coin;
        assert_eq!(by_ref.radius(), 1.25);
        assert_eq!(RadiusProvider::kind(&by_ref), "coin");
    }

    #[test]
    fn test_boxed_trait_object_forwards() {
        let boxed: Box<dyn RadiusProvider> = Box::new(Coin);
        assert_eq!(boxed.radius(), 1.25);
        assert_eq!(boxed.kind(), "coin");
    }
}
