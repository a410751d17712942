//! Comparator combinators.
//!
//! Each combinator wraps other comparators (or a key function) and is itself
//! a [`Comparator`]. Combinators compose freely:
//!
//! ```rust
//! use ordselect::comparator::{Comparator, by_key};
//!
//! // Longest word first, alphabetical among words of equal length
//! let comparator = by_key(|word: &&str| word.len())
//!     .reversed()
//!     .then_with(|left: &&str, right: &&str| left.cmp(right));
//!
//! let mut words = vec!["fig", "kiwi", "apple", "date"];
//! words.sort_by(|left, right| comparator.compare(left, right));
//! assert_eq!(words, vec!["apple", "date", "kiwi", "fig"]);
//! ```

use std::cmp::Ordering;

use super::{Comparator, Natural};

/// Inverts the order of the wrapped comparator.
///
/// # Examples
///
/// ```rust
/// use ordselect::comparator::{Comparator, Natural, Reversed};
/// use std::cmp::Ordering;
///
/// let descending = Reversed::new(Natural);
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Wraps `comparator` so that it orders in the opposite direction.
    #[inline]
    pub const fn new(comparator: C) -> Self {
        Self(comparator)
    }

    /// Consumes the `Reversed` and returns the wrapped comparator.
    #[inline]
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Compares elements by an `Ord` key extracted with a function.
///
/// # Examples
///
/// ```rust
/// use ordselect::comparator::{ByKey, Comparator};
/// use std::cmp::Ordering;
///
/// let by_magnitude = ByKey::new(|value: &i32| value.unsigned_abs());
/// assert_eq!(by_magnitude.compare(&-7, &3), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByKey<F>(pub F);

impl<F> ByKey<F> {
    /// Creates a comparator that orders by the key `extract` returns.
    #[inline]
    pub const fn new(extract: F) -> Self {
        Self(extract)
    }
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.0)(left).cmp(&(self.0)(right))
    }
}

/// Lexicographic composition: `second` breaks the ties of `first`.
///
/// # Examples
///
/// ```rust
/// use ordselect::comparator::{ByKey, Comparator, Natural, ThenWith};
/// use std::cmp::Ordering;
///
/// let by_parity_then_value = ThenWith::new(ByKey::new(|value: &u8| value % 2), Natural);
/// assert_eq!(by_parity_then_value.compare(&4, &1), Ordering::Less);
/// assert_eq!(by_parity_then_value.compare(&4, &2), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ThenWith<A, B> {
    first: A,
    second: B,
}

impl<A, B> ThenWith<A, B> {
    /// Creates a comparator consulting `first`, then `second` on ties.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Consumes the composition and returns both comparators.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<T, A, B> Comparator<T> for ThenWith<A, B>
where
    A: Comparator<T>,
    B: Comparator<T>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.first
            .compare(left, right)
            .then_with(|| self.second.compare(left, right))
    }
}

/// Chaining methods shared by every named comparator.
///
/// Closures cannot carry inherent methods, so the free functions
/// [`reverse`] and [`then_with`] cover them.
macro_rules! impl_chaining {
    ($type:ident $(<$($parameter:ident),+>)?) => {
        impl$(<$($parameter),+>)? $type$(<$($parameter),+>)? {
            /// Returns this comparator with its order inverted.
            #[inline]
            pub const fn reversed(self) -> Reversed<Self> {
                Reversed(self)
            }

            /// Returns a comparator consulting `next` whenever this one
            /// reports [`Ordering::Equal`].
            #[inline]
            pub const fn then_with<D>(self, next: D) -> ThenWith<Self, D> {
                ThenWith::new(self, next)
            }
        }
    };
}

impl_chaining!(Natural);
impl_chaining!(Reversed<C>);
impl_chaining!(ByKey<F>);
impl_chaining!(ThenWith<A, B>);

/// Inverts `comparator`.
///
/// # Examples
///
/// ```rust
/// use ordselect::comparator::{Comparator, reverse};
///
/// let descending = reverse(|left: &i32, right: &i32| left.cmp(right));
/// assert!(descending.compare(&9, &1).is_lt());
/// ```
#[inline]
pub const fn reverse<C>(comparator: C) -> Reversed<C> {
    Reversed(comparator)
}

/// Orders elements by the key `extract` returns.
#[inline]
pub const fn by_key<F>(extract: F) -> ByKey<F> {
    ByKey(extract)
}

/// Consults `first`, then `second` when `first` reports equality.
#[inline]
pub const fn then_with<A, B>(first: A, second: B) -> ThenWith<A, B> {
    ThenWith::new(first, second)
}
