//! Rank selection over distinct values.
//!
//! Ranks count *distinct* values: elements the comparator considers equal
//! share one rank position. `[5, 3, 3, 8, 1]` has the distinct values
//! `[1, 3, 5, 8]`, so its second smallest value is `3` and its fourth is `8`.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity   |
//! |------------|--------------|
//! | `kmin`     | O(n log n)   |
//! | `kmax`     | O(n log n)   |
//! | `distinct` | O(n log n)   |

use std::cmp::Ordering;

use super::contract::{Gathered, gather, require};
use super::diagnostics::record;
use super::error::{Absence, SelectionError};
use crate::comparator::Comparator;

/// The distinct values of a collection in ascending order.
///
/// Each value is represented by its first occurrence in the input.
#[derive(Debug)]
struct DistinctValues<'a, T> {
    values: Gathered<'a, T>,
}

impl<'a, T> DistinctValues<'a, T> {
    /// Sorts `elements` and collapses comparator-equal neighbours.
    ///
    /// The sort is stable, so the survivor of each run of equal values is
    /// the one that came first in the input.
    fn from_gathered<C>(mut elements: Gathered<'a, T>, comparator: &C) -> Self
    where
        C: Comparator<T> + ?Sized,
    {
        elements.sort_by(|left, right| comparator.compare(left, right));
        elements.dedup_by(|later, earlier| comparator.compare(later, earlier) == Ordering::Equal);
        Self { values: elements }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    /// The value at 1-based ascending `rank`.
    fn ascending(&self, rank: usize) -> Option<&'a T> {
        self.values.get(rank.checked_sub(1)?).copied()
    }

    /// The value at 1-based descending `rank`.
    fn descending(&self, rank: usize) -> Option<&'a T> {
        self.values.iter().rev().nth(rank.checked_sub(1)?).copied()
    }

    fn into_vec(self) -> Vec<&'a T> {
        self.values.into_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

/// Returns the `k`-th smallest distinct value of `collection`.
///
/// `k = 1` selects the smallest value. Comparator-equal elements occupy a
/// single rank, represented by their first occurrence.
///
/// # Errors
///
/// - [`SelectionError::InvalidArgument`] if `collection` or `comparator` is `None`
/// - [`SelectionError::NoSuchElement`] if `collection` is empty, if `k` lies
///   outside `1..=collection.len()`, or if `k` exceeds the number of distinct
///   values
///
/// # Examples
///
/// ```rust
/// use ordselect::select::kmin;
///
/// let values = vec![5, 3, 3, 8, 1];
/// let natural = |left: &i32, right: &i32| left.cmp(right);
///
/// assert_eq!(kmin(Some(&values), 1, Some(&natural)), Ok(&1));
/// assert_eq!(kmin(Some(&values), 2, Some(&natural)), Ok(&3));
/// assert_eq!(kmin(Some(&values), 4, Some(&natural)), Ok(&8));
/// assert!(kmin(Some(&values), 5, Some(&natural)).is_err());
/// ```
pub fn kmin<'a, T, I, C>(
    collection: Option<I>,
    k: usize,
    comparator: Option<&C>,
) -> Result<&'a T, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    record(
        "kmin",
        select_rank("kmin", collection, k, comparator, Direction::Ascending),
    )
}

/// Returns the `k`-th largest distinct value of `collection`.
///
/// `k = 1` selects the largest value. Comparator-equal elements occupy a
/// single rank, represented by their first occurrence.
///
/// # Errors
///
/// - [`SelectionError::InvalidArgument`] if `collection` or `comparator` is `None`
/// - [`SelectionError::NoSuchElement`] if `collection` is empty, if `k` lies
///   outside `1..=collection.len()`, or if `k` exceeds the number of distinct
///   values
///
/// # Examples
///
/// ```rust
/// use ordselect::select::kmax;
///
/// let values = vec![5, 3, 3, 8, 1];
/// let natural = |left: &i32, right: &i32| left.cmp(right);
///
/// assert_eq!(kmax(Some(&values), 1, Some(&natural)), Ok(&8));
/// assert_eq!(kmax(Some(&values), 4, Some(&natural)), Ok(&1));
/// ```
pub fn kmax<'a, T, I, C>(
    collection: Option<I>,
    k: usize,
    comparator: Option<&C>,
) -> Result<&'a T, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    record(
        "kmax",
        select_rank("kmax", collection, k, comparator, Direction::Descending),
    )
}

/// Returns the distinct values of `collection` in ascending order.
///
/// This is the list `kmin` and `kmax` rank against: one representative per
/// group of comparator-equal elements, namely the group's first occurrence.
///
/// # Errors
///
/// - [`SelectionError::InvalidArgument`] if `collection` or `comparator` is `None`
/// - [`SelectionError::NoSuchElement`] if `collection` is empty
///
/// # Examples
///
/// ```rust
/// use ordselect::select::distinct;
///
/// let values = vec![5, 3, 3, 8, 1];
/// let natural = |left: &i32, right: &i32| left.cmp(right);
/// assert_eq!(distinct(Some(&values), Some(&natural)), Ok(vec![&1, &3, &5, &8]));
/// ```
pub fn distinct<'a, T, I, C>(
    collection: Option<I>,
    comparator: Option<&C>,
) -> Result<Vec<&'a T>, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    record("distinct", select_distinct(collection, comparator))
}

fn select_distinct<'a, T, I, C>(
    collection: Option<I>,
    comparator: Option<&C>,
) -> Result<Vec<&'a T>, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (collection, comparator) = require("distinct", collection, comparator)?;
    let elements = gather("distinct", collection)?;
    let distinct = DistinctValues::from_gathered(elements, comparator);
    Ok(distinct.into_vec())
}

fn select_rank<'a, T, I, C>(
    operation: &'static str,
    collection: Option<I>,
    k: usize,
    comparator: Option<&C>,
    direction: Direction,
) -> Result<&'a T, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (collection, comparator) = require(operation, collection, comparator)?;
    let elements = gather(operation, collection)?;

    let size = elements.len();
    if k < 1 || k > size {
        return Err(SelectionError::absent(
            operation,
            Absence::RankOutOfBounds { rank: k, size },
        ));
    }

    let distinct = DistinctValues::from_gathered(elements, comparator);
    let selected = match direction {
        Direction::Ascending => distinct.ascending(k),
        Direction::Descending => distinct.descending(k),
    };
    selected.ok_or_else(|| {
        SelectionError::absent(
            operation,
            Absence::RankExceedsDistinct {
                rank: k,
                distinct: distinct.len(),
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Natural;
    use crate::select::error::MissingArgument;
    use rstest::rstest;

    fn case_insensitive(left: &&str, right: &&str) -> Ordering {
        left.to_lowercase().cmp(&right.to_lowercase())
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 3)]
    #[case(3, 5)]
    #[case(4, 8)]
    fn test_kmin_ranks_distinct_values(#[case] k: usize, #[case] expected: i32) {
        let values = vec![5, 3, 3, 8, 1];
        assert_eq!(kmin(Some(&values), k, Some(&Natural)), Ok(&expected));
    }

    #[rstest]
    #[case(1, 8)]
    #[case(2, 5)]
    #[case(3, 3)]
    #[case(4, 1)]
    fn test_kmax_ranks_distinct_values(#[case] k: usize, #[case] expected: i32) {
        let values = vec![5, 3, 3, 8, 1];
        assert_eq!(kmax(Some(&values), k, Some(&Natural)), Ok(&expected));
    }

    #[rstest]
    #[case(0, Absence::RankOutOfBounds { rank: 0, size: 5 })]
    #[case(5, Absence::RankExceedsDistinct { rank: 5, distinct: 4 })]
    #[case(6, Absence::RankOutOfBounds { rank: 6, size: 5 })]
    fn test_rank_out_of_range(#[case] k: usize, #[case] cause: Absence) {
        let values = vec![5, 3, 3, 8, 1];
        assert_eq!(
            kmin(Some(&values), k, Some(&Natural)),
            Err(SelectionError::absent("kmin", cause))
        );
        assert_eq!(
            kmax(Some(&values), k, Some(&Natural)),
            Err(SelectionError::absent("kmax", cause))
        );
    }

    #[rstest]
    fn test_single_element() {
        let values = vec![7];
        assert_eq!(kmin(Some(&values), 1, Some(&Natural)), Ok(&7));
        assert_eq!(kmax(Some(&values), 1, Some(&Natural)), Ok(&7));
        assert_eq!(
            kmin(Some(&values), 2, Some(&Natural)),
            Err(SelectionError::absent(
                "kmin",
                Absence::RankOutOfBounds { rank: 2, size: 1 }
            ))
        );
    }

    #[rstest]
    fn test_all_duplicates_have_one_rank() {
        let values = vec![4, 4, 4];
        assert_eq!(kmin(Some(&values), 1, Some(&Natural)), Ok(&4));
        assert_eq!(
            kmax(Some(&values), 2, Some(&Natural)),
            Err(SelectionError::absent(
                "kmax",
                Absence::RankExceedsDistinct {
                    rank: 2,
                    distinct: 1
                }
            ))
        );
    }

    #[rstest]
    fn test_two_distinct_values_use_sorted_order() {
        let values = vec![9, 2, 9];
        assert_eq!(kmin(Some(&values), 2, Some(&Natural)), Ok(&9));
        assert_eq!(kmax(Some(&values), 2, Some(&Natural)), Ok(&2));
    }

    #[rstest]
    fn test_comparator_defines_distinctness() {
        let words = vec!["Beta", "alpha", "ALPHA", "beta", "Gamma"];

        assert_eq!(kmin(Some(&words), 1, Some(&case_insensitive)), Ok(&"alpha"));
        assert_eq!(kmin(Some(&words), 2, Some(&case_insensitive)), Ok(&"Beta"));
        assert_eq!(kmax(Some(&words), 1, Some(&case_insensitive)), Ok(&"Gamma"));
        assert!(kmin(Some(&words), 4, Some(&case_insensitive)).is_err());
    }

    #[rstest]
    fn test_representative_is_first_occurrence() {
        let words = vec!["b", "A", "a", "B"];
        let ranked = distinct(Some(&words), Some(&case_insensitive)).unwrap();
        assert!(std::ptr::eq(ranked[0], &raw const words[1]));
        assert!(std::ptr::eq(ranked[1], &raw const words[0]));
    }

    #[rstest]
    fn test_distinct_lists_sorted_values() {
        let values = vec![5, 3, 3, 8, 1];
        assert_eq!(
            distinct(Some(&values), Some(&Natural)),
            Ok(vec![&1, &3, &5, &8])
        );
    }

    #[rstest]
    fn test_validation_order() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(
            kmin(None::<&Vec<i32>>, 0, None::<&Natural>),
            Err(SelectionError::missing("kmin", MissingArgument::Collection))
        );
        assert_eq!(
            kmax(Some(&empty), 0, None::<&Natural>),
            Err(SelectionError::missing("kmax", MissingArgument::Comparator))
        );
        assert_eq!(
            kmin(Some(&empty), 0, Some(&Natural)),
            Err(SelectionError::absent("kmin", Absence::EmptyCollection))
        );
        assert_eq!(
            distinct(None::<&Vec<i32>>, Some(&Natural)),
            Err(SelectionError::missing(
                "distinct",
                MissingArgument::Collection,
            ))
        );
        assert_eq!(
            distinct(Some(&empty), None::<&Natural>),
            Err(SelectionError::missing(
                "distinct",
                MissingArgument::Comparator,
            ))
        );
        assert_eq!(
            distinct(Some(&empty), Some(&Natural)),
            Err(SelectionError::absent("distinct", Absence::EmptyCollection))
        );
    }

    static_assertions::assert_not_impl_any!(DistinctValues<'static, i32>: Clone);

    #[rstest]
    fn test_distinct_values_ranks_both_directions() {
        let values = [30, 10, 20, 10];
        let gathered: Gathered<'_, i32> = values.iter().collect();
        let distinct = DistinctValues::from_gathered(gathered, &Natural);

        assert_eq!(distinct.len(), 3);
        assert_eq!(distinct.ascending(0), None);
        assert_eq!(distinct.ascending(1), Some(&10));
        assert_eq!(distinct.descending(1), Some(&30));
        assert_eq!(distinct.descending(3), Some(&10));
        assert_eq!(distinct.descending(4), None);
    }
}
