//! Bound-based selection: ranges and nearest values around a key.
//!
//! Bounds and keys need not occur in the collection; only their position
//! under the comparator matters.

use std::cmp::Ordering;

use super::contract::{first_and_rest, require};
use super::diagnostics::record;
use super::error::{Absence, SelectionError};
use super::extremum::extreme;
use crate::comparator::Comparator;

/// Returns every element `e` of `collection` with `low <= e <= high`.
///
/// Duplicates are kept and the result follows the input's iteration order.
/// An inverted bound (`low > high`) selects nothing.
///
/// # Errors
///
/// - [`SelectionError::InvalidArgument`] if `collection` or `comparator` is `None`
/// - [`SelectionError::NoSuchElement`] if `collection` is empty or no element
///   lies within the bound
///
/// # Examples
///
/// ```rust
/// use ordselect::select::range;
///
/// let values = vec![5, 3, 3, 8, 1];
/// let natural = |left: &i32, right: &i32| left.cmp(right);
/// assert_eq!(range(Some(&values), &3, &8, Some(&natural)), Ok(vec![&5, &3, &3, &8]));
/// ```
pub fn range<'a, T, I, C>(
    collection: Option<I>,
    low: &T,
    high: &T,
    comparator: Option<&C>,
) -> Result<Vec<&'a T>, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    record("range", select_range(collection, low, high, comparator))
}

/// Returns the smallest element of `collection` that is greater than or
/// equal to `key`.
///
/// On ties the first such element in iteration order is returned.
///
/// # Errors
///
/// - [`SelectionError::InvalidArgument`] if `collection` or `comparator` is `None`
/// - [`SelectionError::NoSuchElement`] if `collection` is empty or every
///   element is less than `key`
///
/// # Examples
///
/// ```rust
/// use ordselect::select::ceiling;
///
/// let values = vec![5, 3, 3, 8, 1];
/// let natural = |left: &i32, right: &i32| left.cmp(right);
/// assert_eq!(ceiling(Some(&values), &4, Some(&natural)), Ok(&5));
/// assert_eq!(ceiling(Some(&values), &3, Some(&natural)), Ok(&3));
/// assert!(ceiling(Some(&values), &9, Some(&natural)).is_err());
/// ```
pub fn ceiling<'a, T, I, C>(
    collection: Option<I>,
    key: &T,
    comparator: Option<&C>,
) -> Result<&'a T, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    record(
        "ceiling",
        select_nearest("ceiling", collection, key, comparator, Ordering::Less),
    )
}

/// Returns the largest element of `collection` that is less than or equal
/// to `key`.
///
/// On ties the first such element in iteration order is returned.
///
/// # Errors
///
/// - [`SelectionError::InvalidArgument`] if `collection` or `comparator` is `None`
/// - [`SelectionError::NoSuchElement`] if `collection` is empty or every
///   element is greater than `key`
///
/// # Examples
///
/// ```rust
/// use ordselect::select::floor;
///
/// let values = vec![5, 3, 3, 8, 1];
/// let natural = |left: &i32, right: &i32| left.cmp(right);
/// assert_eq!(floor(Some(&values), &4, Some(&natural)), Ok(&3));
/// assert!(floor(Some(&values), &0, Some(&natural)).is_err());
/// ```
pub fn floor<'a, T, I, C>(
    collection: Option<I>,
    key: &T,
    comparator: Option<&C>,
) -> Result<&'a T, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    record(
        "floor",
        select_nearest("floor", collection, key, comparator, Ordering::Greater),
    )
}

fn select_range<'a, T, I, C>(
    collection: Option<I>,
    low: &T,
    high: &T,
    comparator: Option<&C>,
) -> Result<Vec<&'a T>, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (collection, comparator) = require("range", collection, comparator)?;
    let (first, rest) = first_and_rest("range", collection)?;

    let selected: Vec<&'a T> = std::iter::once(first)
        .chain(rest)
        .filter(|element| {
            comparator.compare(element, low).is_ge() && comparator.compare(element, high).is_le()
        })
        .collect();

    if selected.is_empty() {
        Err(SelectionError::absent("range", Absence::EmptyRange))
    } else {
        Ok(selected)
    }
}

/// Ceiling keeps elements at or above `key` and prefers smaller ones
/// (`Ordering::Less`); floor is the mirror image.
fn select_nearest<'a, T, I, C>(
    operation: &'static str,
    collection: Option<I>,
    key: &T,
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

    // Never on the preferred side of the key: at or above it for ceiling.
    let mut qualifying = std::iter::once(first)
        .chain(rest)
        .filter(|element| comparator.compare(element, key) != preferred);

    let Some(nearest) = qualifying.next() else {
        let cause = if preferred == Ordering::Less {
            Absence::NoCeiling
        } else {
            Absence::NoFloor
        };
        return Err(SelectionError::absent(operation, cause));
    };
    Ok(extreme(nearest, qualifying, comparator, preferred))
}
