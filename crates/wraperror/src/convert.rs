//! Conversions between opaque errors and chain nodes.

use std::error::Error;
use std::sync::Arc;

use crate::node::{DynError, WrapError};

/// Convert any error into a [`WrapError`].
///
/// An error that already is a node comes back unchanged, sharing the same
/// cause allocations; anything else becomes a fresh node with the error as
/// its current cause.
pub fn to_wrapped<E>(err: E) -> WrapError
where
    E: Error + Send + Sync + 'static,
{
    let err: DynError = Arc::new(err);
    to_wrapped_dyn(Some(err))
}

/// [`to_wrapped`] for a type-erased, possibly absent error. `None` yields
/// the empty node.
pub fn to_wrapped_dyn(err: Option<DynError>) -> WrapError {
    let err = match err {
        Some(err) => err,
        None => return WrapError::new(),
    };
    if let Some(node) = err.downcast_ref::<WrapError>() {
        return node.clone();
    }
    WrapError {
        current: Some(err),
        child: None,
    }
}

/// The reverse extraction: `Some` when `err` itself is a chain node.
///
/// This is a top-level type check only; it does not walk `source()`
/// looking for a nested node.
pub fn from_wrapped<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a WrapError> {
    err.downcast_ref::<WrapError>()
}
