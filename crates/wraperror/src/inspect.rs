//! Generic chain inspection.
//!
//! The walk is written once against the `std::error::Error` protocol:
//! `Display` renders a step, `source()` yields the next cause, and a safe
//! downcast recovers concrete types. [`WrapError`] nodes encountered along
//! the way are asked about their current cause, so a caller holding only a
//! `&dyn Error` can see through chains built from this crate and foreign
//! chains alike.

use std::error::Error;

use crate::node::WrapError;

/// Iterator over an error and everything reachable through `source()`.
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let err = self.next?;
        self.next = err.source();
        Some(err)
    }
}

/// Walk `err` and its transitive causes, starting with `err` itself.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// True when `target` occurs anywhere in the cause chain of `err`.
///
/// Each step of the chain is either a [`WrapError`] node, which is asked
/// about its current cause, or a foreign error, which is downcast to `E`
/// and compared by value. Absence of a match is `false`, never a failure.
pub fn is<E>(err: &(dyn Error + 'static), target: &E) -> bool
where
    E: Error + PartialEq + 'static,
{
    for cause in chain(err) {
        if let Some(node) = cause.downcast_ref::<WrapError>() {
            if node.is(target) {
                return true;
            }
        } else if cause.downcast_ref::<E>() == Some(target) {
            return true;
        }
    }
    false
}

/// The first cause in the chain of `err` with concrete type `E`.
///
/// A step is tried directly before its contents, so asking for
/// [`WrapError`] recovers the node itself, empty or not.
pub fn find<'a, E>(err: &'a (dyn Error + 'static)) -> Option<&'a E>
where
    E: Error + 'static,
{
    for cause in chain(err) {
        if let Some(found) = cause.downcast_ref::<E>() {
            return Some(found);
        }
        if let Some(node) = cause.downcast_ref::<WrapError>() {
            if let Some(found) = node.find() {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("{0}")]
    struct StepError(&'static str);

    #[derive(Debug, Error)]
    #[error("archive scan failed")]
    struct ScanError {
        #[source]
        source: StepError,
    }

    fn sample_chain() -> WrapError {
        WrapError::new()
            .wrap(StepError("one"))
            .wrap(StepError("two"))
            .wrap(StepError("three"))
    }

    #[test]
    fn chain_walks_the_node_spine() {
        let node = sample_chain();
        // The spine is node -> child node -> child node -> empty seed.
        assert_eq!(chain(&node).count(), 4);
    }

    #[test]
    fn is_matches_every_wrapped_cause() {
        let node = sample_chain();
        assert!(is(&node, &StepError("one")));
        assert!(is(&node, &StepError("two")));
        assert!(is(&node, &StepError("three")));
    }

    #[test]
    fn is_rejects_unrelated_target() {
        let node = sample_chain();
        assert!(!is(&node, &StepError("four")));
    }

    #[test]
    fn is_matches_nothing_on_empty_node() {
        let node = WrapError::new();
        assert!(!is(&node, &StepError("one")));
    }

    #[test]
    fn is_reaches_sources_of_foreign_causes() {
        let node = WrapError::new().wrap(ScanError {
            source: StepError("bad entry"),
        });
        assert!(is(&node, &StepError("bad entry")));
    }

    #[test]
    fn node_is_only_consults_current() {
        let deep = WrapError::new().wrap(StepError("deep"));
        let top = deep.wrap(StepError("top"));

        assert!(!top.is(&StepError("deep")));
        assert!(is(&top, &StepError("deep")));
    }

    #[test]
    fn find_recovers_concrete_cause() {
        let node = sample_chain().wrap(ScanError {
            source: StepError("bad entry"),
        });

        let scan = find::<ScanError>(&node).unwrap();
        assert_eq!(scan.to_string(), "archive scan failed");

        let step = find::<StepError>(&node).unwrap();
        assert_eq!(step, &StepError("bad entry"));
    }

    #[test]
    fn find_matches_node_type_trivially() {
        let empty = WrapError::new();
        assert!(find::<WrapError>(&empty).is_some());
    }

    #[test]
    fn find_none_when_type_absent() {
        let node = sample_chain();
        assert!(find::<std::io::Error>(&node).is_none());
    }
}
