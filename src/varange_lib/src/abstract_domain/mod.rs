//! This module defines the value types of the range domain
//! together with the traits that describe their abstract-domain behavior.

use crate::prelude::*;

mod number;
pub use number::Number;

mod range;
pub use range::{Interval, Range, MAX_INTERVALS_IN_RANGE};

/// The main trait describing an abstract domain.
///
/// Each abstract domain is partially ordered.
/// Abstract domain elements also need to be clone-able and comparable.
pub trait AbstractDomain: Sized + Clone + PartialEq {
    /// Return an upper bound (with respect to the partial order on the domain)
    /// for the two inputs `self` and `other`.
    #[must_use]
    fn merge(&self, other: &Self) -> Self;

    /// Returns an upper bound (with respect to the partial order on the
    /// domain) for the two inputs `self` and `other`.
    ///
    /// Modifies `self` in-place to hold the result.
    fn merge_with(&mut self, other: &Self) -> &mut Self {
        if self != other {
            let new_value = self.merge(other);
            *self = new_value;
        }
        self
    }

    /// Returns whether the element represents the top element (i.e. maximal
    /// with respect to the partial order) or not.
    fn is_top(&self) -> bool;
}

/// A trait for abstract domains that can produce a maximal element
/// (of the same value type as `self`).
pub trait HasTop {
    /// Return an instance of the top element of the domain,
    /// carrying the same value type as `self`.
    #[must_use]
    fn top(&self) -> Self;
}

/// A trait for domains whose elements may represent a single concrete value.
pub trait TryToNumber {
    /// If `self` represents a single concrete value, return it.
    fn try_to_number(&self) -> Result<Number, Error>;
}

/// A trait for domains whose elements may be covered by a single interval.
pub trait TryToInterval {
    /// If `self` is covered by a single interval with concrete bounds,
    /// return the interval.
    fn try_to_interval(&self) -> Result<Interval, Error>;
}

/// A trait for domain elements that can be refined with the knowledge that a
/// comparison with another element evaluated to true on the taken branch.
///
/// All methods narrow `self` under the assumption that the named comparison
/// holds. The result is never empty: when the assumption cannot be
/// represented precisely, the methods fall back to a sound over-approximation
/// so that the analysis retains a usable value for the variable.
pub trait SpecializeByConditional: Sized {
    /// Restrict `self` under the assumption that `self == other` holds.
    #[must_use]
    fn specialize_eq(&self, other: &Self) -> Self;

    /// Restrict `self` under the assumption that `self != other` holds.
    #[must_use]
    fn specialize_neq(&self, other: &Self) -> Self;

    /// Restrict `self` under the assumption that `self < other` holds.
    #[must_use]
    fn specialize_lt(&self, other: &Self) -> Self;

    /// Restrict `self` under the assumption that `self > other` holds.
    #[must_use]
    fn specialize_gt(&self, other: &Self) -> Self;

    /// Restrict `self` under the assumption that `self <= other` holds.
    #[must_use]
    fn specialize_le(&self, other: &Self) -> Self;

    /// Restrict `self` under the assumption that `self >= other` holds.
    #[must_use]
    fn specialize_ge(&self, other: &Self) -> Self;
}
