//! # ordselect
//!
//! Order-statistic selection over arbitrary collections, driven by a
//! caller-supplied total order.
//!
//! ## Overview
//!
//! Every operation is a pure function of a borrowed collection and a
//! comparator. Nothing is mutated and no state survives a call. It includes:
//!
//! - **Comparators**: the [`Comparator`](comparator::Comparator) trait, closure
//!   comparators, [`Natural`](comparator::Natural), and the combinators
//!   [`Reversed`](comparator::Reversed), [`ByKey`](comparator::ByKey) and
//!   [`ThenWith`](comparator::ThenWith)
//! - **Selection**: `min`, `max`, `kmin`, `kmax`, `range`, `ceiling`, `floor`
//!   and `distinct`, plus a [`Selector`](select::Selector) that binds a
//!   comparator once
//!
//! ## Feature Flags
//!
//! - `comparator`: Comparator trait and combinators
//! - `select`: Selection operations (implies `comparator`)
//! - `serde`: `Serialize`/`Deserialize` for the error vocabulary
//! - `tracing`: Emit `tracing` events for every selection
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordselect::prelude::*;
//!
//! let values = vec![5, 3, 3, 8, 1];
//! let natural = |left: &i32, right: &i32| left.cmp(right);
//!
//! assert_eq!(min(Some(&values), Some(&natural)), Ok(&1));
//! assert_eq!(kmin(Some(&values), 2, Some(&natural)), Ok(&3));
//! assert_eq!(ceiling(Some(&values), &4, Some(&natural)), Ok(&5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use ordselect::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "comparator")]
    pub use crate::comparator::*;

    #[cfg(feature = "select")]
    pub use crate::select::*;
}

#[cfg(feature = "comparator")]
pub mod comparator;

#[cfg(feature = "select")]
pub mod select;
