//! The argument contract shared by every selection operation.
//!
//! Checks run in a fixed order: absent collection, absent comparator, empty
//! collection. Operation-specific rank and bound checks come after.

use smallvec::SmallVec;

use super::error::{Absence, MissingArgument, SelectionError};

/// Element references gathered from a collection. Small inputs stay inline.
pub(super) type Gathered<'a, T> = SmallVec<[&'a T; INLINE_CAPACITY]>;

pub(super) const INLINE_CAPACITY: usize = 16;

/// Unwraps the collection and the comparator, in that order.
pub(super) fn require<'c, I, C>(
    operation: &'static str,
    collection: Option<I>,
    comparator: Option<&'c C>,
) -> Result<(I, &'c C), SelectionError>
where
    C: ?Sized,
{
    let collection = collection
        .ok_or_else(|| SelectionError::missing(operation, MissingArgument::Collection))?;
    let comparator = comparator
        .ok_or_else(|| SelectionError::missing(operation, MissingArgument::Comparator))?;
    Ok((collection, comparator))
}

/// Splits off the first element, failing on an empty collection.
pub(super) fn first_and_rest<'a, T, I>(
    operation: &'static str,
    collection: I,
) -> Result<(&'a T, I::IntoIter), SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut elements = collection.into_iter();
    elements
        .next()
        .map(|first| (first, elements))
        .ok_or_else(|| SelectionError::absent(operation, Absence::EmptyCollection))
}

/// Collects every element reference, failing on an empty collection.
pub(super) fn gather<'a, T, I>(
    operation: &'static str,
    collection: I,
) -> Result<Gathered<'a, T>, SelectionError>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    let gathered: Gathered<'a, T> = collection.into_iter().collect();
    if gathered.is_empty() {
        Err(SelectionError::absent(operation, Absence::EmptyCollection))
    } else {
        Ok(gathered)
    }
}
