//! Error types for selection operations.
//!
//! Every selection fails with exactly one of two kinds:
//!
//! - **invalid argument**: the collection or the comparator was absent.
//!   Checked before anything else.
//! - **no such element**: the collection was empty, or nothing in it
//!   satisfies the requested rank or bound.

use std::fmt;

/// The two categories every [`SelectionError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A required argument was absent.
    InvalidArgument,
    /// No element satisfies the selection.
    NoSuchElement,
}

/// The argument that was absent when an operation was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingArgument {
    /// The collection to select from.
    Collection,
    /// The comparator defining the order.
    Comparator,
}

impl fmt::Display for MissingArgument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => formatter.write_str("collection"),
            Self::Comparator => formatter.write_str("comparator"),
        }
    }
}

/// Why a selection found no element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Absence {
    /// The collection holds no elements.
    EmptyCollection,
    /// The requested rank lies outside `1..=size`.
    RankOutOfBounds {
        /// The requested rank.
        rank: usize,
        /// The number of elements in the collection, duplicates included.
        size: usize,
    },
    /// The requested rank is larger than the number of distinct values.
    RankExceedsDistinct {
        /// The requested rank.
        rank: usize,
        /// The number of distinct values in the collection.
        distinct: usize,
    },
    /// No element lies between the lower and upper bound.
    EmptyRange,
    /// No element is greater than or equal to the key.
    NoCeiling,
    /// No element is less than or equal to the key.
    NoFloor,
}

impl fmt::Display for Absence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection => formatter.write_str("collection is empty"),
            Self::RankOutOfBounds { rank, size } => {
                write!(formatter, "rank {rank} is outside 1..={size}")
            }
            Self::RankExceedsDistinct { rank, distinct } => write!(
                formatter,
                "rank {rank} exceeds the {distinct} distinct values"
            ),
            Self::EmptyRange => formatter.write_str("no element lies within the range"),
            Self::NoCeiling => {
                formatter.write_str("no element is greater than or equal to the key")
            }
            Self::NoFloor => formatter.write_str("no element is less than or equal to the key"),
        }
    }
}

/// Represents a failed selection.
///
/// # Examples
///
/// ```rust
/// use ordselect::select::{Absence, ErrorKind, SelectionError, kmin};
///
/// let values = vec![7];
/// let error = kmin(Some(&values), 2, Some(&|left: &i32, right: &i32| left.cmp(right)))
///     .unwrap_err();
///
/// assert_eq!(error.kind(), ErrorKind::NoSuchElement);
/// assert_eq!(
///     error,
///     SelectionError::absent("kmin", Absence::RankOutOfBounds { rank: 2, size: 1 })
/// );
/// assert_eq!(format!("{error}"), "kmin: rank 2 is outside 1..=1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SelectionError {
    /// The collection or the comparator was absent.
    InvalidArgument {
        /// The name of the operation that was called.
        operation: &'static str,
        /// The argument that was absent.
        argument: MissingArgument,
    },
    /// No element satisfies the selection.
    NoSuchElement {
        /// The name of the operation that was called.
        operation: &'static str,
        /// Why no element qualified.
        cause: Absence,
    },
}

impl SelectionError {
    /// Creates an invalid-argument error for `operation`.
    #[inline]
    pub const fn missing(operation: &'static str, argument: MissingArgument) -> Self {
        Self::InvalidArgument {
            operation,
            argument,
        }
    }

    /// Creates a no-such-element error for `operation`.
    #[inline]
    pub const fn absent(operation: &'static str, cause: Absence) -> Self {
        Self::NoSuchElement { operation, cause }
    }

    /// Returns the category of this error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NoSuchElement { .. } => ErrorKind::NoSuchElement,
        }
    }

    /// Returns the name of the operation that failed.
    #[inline]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::InvalidArgument { operation, .. } | Self::NoSuchElement { operation, .. } => {
                *operation
            }
        }
    }

    /// Returns `true` if a required argument was absent.
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if no element satisfied the selection.
    #[inline]
    pub const fn is_no_such_element(&self) -> bool {
        matches!(self, Self::NoSuchElement { .. })
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                operation,
                argument,
            } => write!(formatter, "{operation}: {argument} must be present"),
            Self::NoSuchElement { operation, cause } => write!(formatter, "{operation}: {cause}"),
        }
    }
}

impl std::error::Error for SelectionError {}

static_assertions::assert_impl_all!(SelectionError: Send, Sync, std::error::Error);
