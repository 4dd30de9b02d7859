//! The chain node type.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Shared, type-erased error reference used throughout the crate.
pub type DynError = Arc<dyn Error + Send + Sync + 'static>;

/// An error value that chains an arbitrary number of causes.
///
/// A node holds the most recently attached cause (`current`) and the
/// previously accumulated chain (`child`). Wrapping never mutates: it
/// allocates a new node whose child is the receiver, so chains are
/// persistent and a wrapped node stays independently usable. Causes are
/// shared through [`Arc`], which makes cloning cheap and the whole value
/// `Send + Sync`.
#[derive(Clone, Debug, Default)]
pub struct WrapError {
    pub(crate) current: Option<DynError>,
    pub(crate) child: Option<DynError>,
}

impl WrapError {
    /// An empty node: no causes, renders to `""`, matches nothing.
    pub fn new() -> Self {
        Self {
            current: None,
            child: None,
        }
    }

    /// The most recently attached cause.
    pub fn current(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.current.as_deref()
    }

    /// The previously accumulated chain, or a foreign cause.
    pub fn child(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.child.as_deref()
    }

    /// True when the node carries no cause and no chain.
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.child.is_none()
    }

    /// Returns a new node with `err` as its current cause and the receiver
    /// as its child. The receiver is left untouched.
    pub fn wrap<E>(&self, err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let err: DynError = Arc::new(err);
        self.wrap_dyn(Some(err))
    }

    /// [`wrap`](Self::wrap) for an already type-erased cause. `None` still
    /// chains the receiver, producing a node with no current cause.
    pub fn wrap_dyn(&self, err: Option<DynError>) -> Self {
        Self {
            current: err,
            child: Some(Arc::new(self.clone())),
        }
    }

    /// Equality check against the current cause and anything reachable
    /// beneath it.
    ///
    /// Only `current` is consulted; continuing into `child` is the walking
    /// caller's job, via [`source`](Error::source) or [`crate::is`].
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        match self.current.as_deref() {
            Some(current) => crate::inspect::is(current, target),
            None => false,
        }
    }

    /// Type-recovery over the current cause and anything reachable beneath
    /// it. Like [`is`](Self::is), `child` is not consulted.
    pub fn find<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.current
            .as_deref()
            .and_then(|current| crate::inspect::find(current))
    }

    /// The ordered list of leaf causes reachable from this node.
    ///
    /// Current-subtree first, then child-subtree, depth-first: nested
    /// nodes are expanded structurally, foreign values are emitted and
    /// their `source()` chain unwound through the same rule. A foreign
    /// error with a cyclic source graph makes this walk unbounded; that is
    /// a caller contract violation, not a handled case.
    pub fn flatten(&self) -> Vec<&(dyn Error + 'static)> {
        let mut leaves = Vec::new();
        if let Some(current) = self.current.as_deref() {
            collect_leaves(current, &mut leaves);
        }
        if let Some(child) = self.child.as_deref() {
            collect_leaves(child, &mut leaves);
        }
        leaves
    }
}

fn collect_leaves<'a>(
    err: &'a (dyn Error + 'static),
    leaves: &mut Vec<&'a (dyn Error + 'static)>,
) {
    match err.downcast_ref::<WrapError>() {
        Some(node) => leaves.extend(node.flatten()),
        None => {
            leaves.push(err);
            if let Some(source) = err.source() {
                collect_leaves(source, leaves);
            }
        }
    }
}

impl fmt::Display for WrapError {
    /// Space-joined cause messages, outermost first. A node with no
    /// current cause renders to the empty string; a child that renders
    /// empty contributes neither separator nor text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = match &self.current {
            Some(current) => current,
            None => return Ok(()),
        };
        write!(f, "{}", current)?;
        if let Some(child) = &self.child {
            let rest = child.to_string();
            if !rest.is_empty() {
                write!(f, " {}", rest)?;
            }
        }
        Ok(())
    }
}

impl Error for WrapError {
    /// The hook that lets a generic chain walk continue past this node
    /// into whatever `child` holds.
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.child
            .as_deref()
            .map(|child| child as &(dyn Error + 'static))
    }
}

/// Builds a chain by wrapping each error in turn, so the last item
/// collected becomes the most recent cause.
impl FromIterator<DynError> for WrapError {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = DynError>,
    {
        iter.into_iter()
            .fold(Self::new(), |node, err| node.wrap_dyn(Some(err)))
    }
}
