//! A comparator bound once and reused for many selections.

use super::error::SelectionError;
use crate::comparator::{Comparator, Natural};

/// Binds a comparator so selections can be written as method calls.
///
/// Every method delegates to the free function of the same name, so the
/// argument contract and the results are identical. Only the comparator's
/// absence is ruled out by construction.
///
/// # Examples
///
/// ```rust
/// use ordselect::comparator::by_key;
/// use ordselect::select::Selector;
///
/// let scores = vec![("ada", 91), ("alan", 78), ("grace", 91), ("linus", 64)];
/// let by_score = Selector::new(by_key(|entry: &(&str, u32)| entry.1));
///
/// assert_eq!(by_score.max(&scores), Ok(&("ada", 91)));
/// assert_eq!(by_score.kmax(&scores, 2), Ok(&("alan", 78)));
/// assert_eq!(by_score.floor(&scores, &("", 80)), Ok(&("alan", 78)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selector<C> {
    comparator: C,
}

impl Selector<Natural> {
    /// Creates a selector over the natural (`Ord`) order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordselect::select::Selector;
    ///
    /// let selector = Selector::natural();
    /// assert_eq!(selector.kmin(&[5, 3, 3, 8, 1], 2), Ok(&3));
    /// ```
    #[inline]
    pub const fn natural() -> Self {
        Self::new(Natural)
    }
}

impl<C> Selector<C> {
    /// Creates a selector ordering elements with `comparator`.
    #[inline]
    pub const fn new(comparator: C) -> Self {
        Self { comparator }
    }

    /// Returns a reference to the bound comparator.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Consumes the selector and returns the bound comparator.
    #[inline]
    pub fn into_comparator(self) -> C {
        self.comparator
    }

    /// See [`min`](super::min).
    ///
    /// # Errors
    ///
    /// Fails exactly as [`min`](super::min) does for a present collection.
    pub fn min<'a, T, I>(&self, collection: I) -> Result<&'a T, SelectionError>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        C: Comparator<T>,
    {
        super::min(Some(collection), Some(&self.comparator))
    }

    /// See [`max`](super::max).
    ///
    /// # Errors
    ///
    /// Fails exactly as [`max`](super::max) does for a present collection.
    pub fn max<'a, T, I>(&self, collection: I) -> Result<&'a T, SelectionError>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        C: Comparator<T>,
    {
        super::max(Some(collection), Some(&self.comparator))
    }

    /// See [`kmin`](super::kmin).
    ///
    /// # Errors
    ///
    /// Fails exactly as [`kmin`](super::kmin) does for a present collection.
    pub fn kmin<'a, T, I>(&self, collection: I, k: usize) -> Result<&'a T, SelectionError>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        C: Comparator<T>,
    {
        super::kmin(Some(collection), k, Some(&self.comparator))
    }

    /// See [`kmax`](super::kmax).
    ///
    /// # Errors
    ///
    /// Fails exactly as [`kmax`](super::kmax) does for a present collection.
    pub fn kmax<'a, T, I>(&self, collection: I, k: usize) -> Result<&'a T, SelectionError>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        C: Comparator<T>,
    {
        super::kmax(Some(collection), k, Some(&self.comparator))
    }

    /// See [`range`](super::range).
    ///
    /// # Errors
    ///
    /// Fails exactly as [`range`](super::range) does for a present collection.
    pub fn range<'a, T, I>(
        &self,
        collection: I,
        low: &T,
        high: &T,
    ) -> Result<Vec<&'a T>, SelectionError>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        C: Comparator<T>,
    {
        super::range(Some(collection), low, high, Some(&self.comparator))
    }

    /// See [`ceiling`](super::ceiling).
    ///
    /// # Errors
    ///
    /// Fails exactly as [`ceiling`](super::ceiling) does for a present collection.
    pub fn ceiling<'a, T, I>(&self, collection: I, key: &T) -> Result<&'a T, SelectionError>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        C: Comparator<T>,
    {
        super::ceiling(Some(collection), key, Some(&self.comparator))
    }

    /// See [`floor`](super::floor).
    ///
    /// # Errors
    ///
    /// Fails exactly as [`floor`](super::floor) does for a present collection.
    pub fn floor<'a, T, I>(&self, collection: I, key: &T) -> Result<&'a T, SelectionError>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        C: Comparator<T>,
    {
        super::floor(Some(collection), key, Some(&self.comparator))
    }

    /// See [`distinct`](super::distinct).
    ///
    /// # Errors
    ///
    /// Fails exactly as [`distinct`](super::distinct) does for a present collection.
    pub fn distinct<'a, T, I>(&self, collection: I) -> Result<Vec<&'a T>, SelectionError>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        C: Comparator<T>,
    {
        super::distinct(Some(collection), Some(&self.comparator))
    }
}

static_assertions::assert_impl_all!(Selector<Natural>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{Reversed, by_key};
    use crate::select::error::Absence;
    use rstest::rstest;

    #[rstest]
    fn natural_selector_matches_scenario() {
        let selector = Selector::natural();
        let values = vec![5, 3, 3, 8, 1];

        assert_eq!(selector.min(&values), Ok(&1));
        assert_eq!(selector.max(&values), Ok(&8));
        assert_eq!(selector.kmin(&values, 4), Ok(&8));
        assert_eq!(selector.kmax(&values, 4), Ok(&1));
        assert_eq!(selector.range(&values, &3, &8), Ok(vec![&5, &3, &3, &8]));
        assert_eq!(selector.ceiling(&values, &4), Ok(&5));
        assert_eq!(selector.floor(&values, &4), Ok(&3));
        assert_eq!(selector.distinct(&values), Ok(vec![&1, &3, &5, &8]));
    }

    #[rstest]
    fn reversed_selector_swaps_extremes() {
        let selector = Selector::new(Reversed(Natural));
        let values = [2, 9, 4];

        assert_eq!(selector.min(&values), Ok(&9));
        assert_eq!(selector.max(&values), Ok(&2));
        assert_eq!(selector.kmin(&values, 2), Ok(&4));
    }

    #[rstest]
    fn closure_selector() {
        let selector = Selector::new(|left: &String, right: &String| left.len().cmp(&right.len()));
        let words = vec![
            String::from("pear"),
            String::from("fig"),
            String::from("banana"),
        ];

        assert_eq!(selector.min(&words).map(String::as_str), Ok("fig"));
        assert_eq!(selector.max(&words).map(String::as_str), Ok("banana"));
    }

    #[rstest]
    fn errors_name_the_operation() {
        let selector = Selector::new(by_key(|value: &i32| value.abs()));
        let empty: Vec<i32> = Vec::new();

        assert_eq!(
            selector.ceiling(&empty, &0),
            Err(SelectionError::absent("ceiling", Absence::EmptyCollection))
        );
    }

    #[rstest]
    fn every_method_reports_an_empty_collection() {
        let selector = Selector::natural();
        let empty: Vec<i32> = Vec::new();
        let outcomes = [
            ("min", selector.min(&empty).err()),
            ("max", selector.max(&empty).err()),
            ("kmin", selector.kmin(&empty, 1).err()),
            ("kmax", selector.kmax(&empty, 1).err()),
            ("range", selector.range(&empty, &0, &1).err()),
            ("ceiling", selector.ceiling(&empty, &0).err()),
            ("floor", selector.floor(&empty, &0).err()),
            ("distinct", selector.distinct(&empty).err()),
        ];

        for (operation, error) in outcomes {
            assert_eq!(
                error,
                Some(SelectionError::absent(operation, Absence::EmptyCollection))
            );
        }
    }

    #[rstest]
    fn comparator_accessors() {
        let selector = Selector::natural();
        assert_eq!(selector.comparator(), &Natural);
        assert_eq!(selector.into_comparator(), Natural);
    }
}
