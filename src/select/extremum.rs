//! Minimum and maximum selection.

use std::cmp::Ordering;

use super::contract::{first_and_rest, require};
use super::diagnostics::record;
use super::error::SelectionError;
use crate::comparator::Comparator;

/// Scans `rest`, replacing the current pick only when a candidate compares
/// strictly `preferred` to it. Ties keep the earliest element.
pub(super) fn extreme<'a, T, C>(
    first: &'a T,
    rest: impl Iterator<Item = &'a T>,
    comparator: &C,
    preferred: Ordering,
) -> &'a T
where
    C: Comparator<T> + ?Sized,
{
    rest.fold(first, |current, candidate| {
        if comparator.compare(candidate, current) == preferred {
            candidate
        } else {
            current
        }
    })
}

/// Returns the minimum element of `collection` under `comparator`.
///
/// On ties the first minimal element in iteration order is returned.
///
/// # Errors
///
/// - [`SelectionError::InvalidArgument`] if `collection` or `comparator` is `None`
/// - [`SelectionError::NoSuchElement`] if `collection` is empty
///
/// # Examples
///
/// ```rust
/// use ordselect::select::min;
///
/// let values = vec![5, 3, 3, 8, 1];
/// let natural = |left: &i32, right: &i32| left.cmp(right);
/// assert_eq!(min(Some(&values), Some(&natural)), Ok(&1));
/// ```
pub fn min<'a, T, I, C>(
    collection: Option<I>,
    comparator: Option<&C>,
) -> Result<&'a T, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    record(
        "min",
        select_extreme("min", collection, comparator, Ordering::Less),
    )
}

/// Returns the maximum element of `collection` under `comparator`.
///
/// On ties the first maximal element in iteration order is returned.
///
/// # Errors
///
/// - [`SelectionError::InvalidArgument`] if `collection` or `comparator` is `None`
/// - [`SelectionError::NoSuchElement`] if `collection` is empty
///
/// # Examples
///
/// ```rust
/// use ordselect::select::max;
///
/// let values = vec![5, 3, 3, 8, 1];
/// let natural = |left: &i32, right: &i32| left.cmp(right);
/// assert_eq!(max(Some(&values), Some(&natural)), Ok(&8));
/// ```
pub fn max<'a, T, I, C>(
    collection: Option<I>,
    comparator: Option<&C>,
) -> Result<&'a T, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    record(
        "max",
        select_extreme("max", collection, comparator, Ordering::Greater),
    )
}

fn select_extreme<'a, T, I, C>(
    operation: &'static str,
    collection: Option<I>,
    comparator: Option<&C>,
    preferred: Ordering,
) -> Result<&'a T, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (collection, comparator) = require(operation, collection, comparator)?;
    let (first, rest) = first_and_rest(operation, collection)?;
    Ok(extreme(first, rest, comparator, preferred))
}
