//! Order-statistic selection over arbitrary collections.
//!
//! Every operation borrows a collection (anything iterable by reference) and
//! a [`Comparator`](crate::comparator::Comparator), and returns references
//! into the collection. Nothing is copied or mutated.
//!
//! - [`min`] / [`max`]: Extremes under the comparator
//! - [`kmin`] / [`kmax`]: The k-th smallest / largest distinct value
//! - [`range`]: Every element between two inclusive bounds
//! - [`ceiling`] / [`floor`]: The nearest element at or above / below a key
//! - [`distinct`]: The sorted distinct values ranks are taken from
//! - [`Selector`]: A comparator bound once, with all of the above as methods
//!
//! # Argument Contract
//!
//! The collection and the comparator are `Option`s; `None` stands for an
//! absent argument. Every operation checks, in order:
//!
//! 1. absent collection, then absent comparator: [`SelectionError::InvalidArgument`]
//! 2. empty collection: [`SelectionError::NoSuchElement`]
//! 3. operation-specific rank or bound: [`SelectionError::NoSuchElement`]
//!
//! # Examples
//!
//! ```rust
//! use ordselect::comparator::Natural;
//! use ordselect::select::{ErrorKind, ceiling, floor, kmax, kmin, max, min, range};
//!
//! let values = vec![5, 3, 3, 8, 1];
//! let natural = Some(&Natural);
//!
//! assert_eq!(min(Some(&values), natural), Ok(&1));
//! assert_eq!(max(Some(&values), natural), Ok(&8));
//! assert_eq!(kmin(Some(&values), 2, natural), Ok(&3));
//! assert_eq!(kmax(Some(&values), 4, natural), Ok(&1));
//! assert_eq!(range(Some(&values), &3, &8, natural), Ok(vec![&5, &3, &3, &8]));
//! assert_eq!(ceiling(Some(&values), &4, natural), Ok(&5));
//! assert_eq!(floor(Some(&values), &4, natural), Ok(&3));
//!
//! let error = min(None::<&Vec<i32>>, natural).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::InvalidArgument);
//! ```

mod bound;
mod contract;
mod diagnostics;
mod error;
mod extremum;
mod rank;
mod selector;

pub use bound::{ceiling, floor, range};
pub use error::{Absence, ErrorKind, MissingArgument, SelectionError};
pub use extremum::{max, min};
pub use rank::{distinct, kmax, kmin};
pub use selector::Selector;
