//! Comparator type class - caller-supplied total orders.
//!
//! This module provides the [`Comparator`] trait, which describes a total
//! order over a type independently of any `Ord` implementation the type may
//! carry. The same element type can be ranked by many different comparators.
//!
//! - [`Natural`]: Delegates to `Ord::cmp`
//! - [`Reversed`]: Inverts another comparator
//! - [`ByKey`]: Compares by an `Ord` key extracted from each element
//! - [`ThenWith`]: Lexicographic composition of two comparators
//!
//! Every `Fn(&T, &T) -> Ordering` closure is a comparator as-is.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`, a comparator must be a total order:
//!
//! ## Antisymmetry
//!
//! ```text
//! compare(a, b) == compare(b, a).reverse()
//! ```
//!
//! ## Transitivity
//!
//! ```text
//! compare(a, b) != Greater && compare(b, c) != Greater => compare(a, c) != Greater
//! ```
//!
//! These laws are not checked. Selection results over an inconsistent
//! comparator are unspecified, though never unsafe.
//!
//! # Examples
//!
//! ```rust
//! use ordselect::comparator::{Comparator, Natural, by_key};
//!
//! let by_length = by_key(|word: &&str| word.len());
//! assert!(by_length.compare(&"fig", &"apple").is_lt());
//!
//! assert!(Natural.compare(&"fig", &"apple").is_gt());
//! assert!(Natural.reversed().compare(&"fig", &"apple").is_lt());
//! ```

mod combinator;

pub use combinator::{ByKey, Reversed, ThenWith, by_key, reverse, then_with};

use std::cmp::Ordering;

/// A total order over `T` supplied by the caller.
///
/// # Examples
///
/// ```rust
/// use ordselect::comparator::Comparator;
/// use std::cmp::Ordering;
///
/// struct Descending;
///
/// impl Comparator<i32> for Descending {
///     fn compare(&self, left: &i32, right: &i32) -> Ordering {
///         right.cmp(left)
///     }
/// }
///
/// assert_eq!(Descending.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Comparator<T> {
    /// Compares `left` with `right`.
    ///
    /// Returns [`Ordering::Less`] when `left` orders before `right`,
    /// [`Ordering::Equal`] when they are equivalent, and
    /// [`Ordering::Greater`] otherwise.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// The natural order of `T`, as defined by its `Ord` implementation.
///
/// # Examples
///
/// ```rust
/// use ordselect::comparator::{Comparator, Natural};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&3, &8), Ordering::Less);
/// assert_eq!(Natural.compare(&"b", &"a"), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}
