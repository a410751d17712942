//! Optional `tracing` events for selection outcomes.
//!
//! Without the `tracing` feature [`record`] is an identity function.

use super::error::SelectionError;

/// Passes `result` through, emitting an event describing it.
#[cfg(feature = "tracing")]
#[inline]
pub(super) fn record<R>(
    operation: &'static str,
    result: Result<R, SelectionError>,
) -> Result<R, SelectionError> {
    match &result {
        Ok(_) => tracing::trace!(operation, "selection succeeded"),
        Err(error) => tracing::debug!(operation, kind = ?error.kind(), %error, "selection failed"),
    }
    result
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(super) const fn record<R>(
    _operation: &'static str,
    result: Result<R, SelectionError>,
) -> Result<R, SelectionError> {
    result
}
