//! Keys compared by allocation rather than by value.
//!
//! Identity-keyed maps hold the same value twice when it lives in two
//! allocations. Keys share their allocation through an [`Arc`], so converting
//! between identity maps keeps every key distinct.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Shared value whose equality and hash are those of its allocation.
pub struct Identity<T>(Arc<T>);

impl<T> Identity<T> {
    /// Moves `value` into a fresh allocation.
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// The shared allocation.
    pub fn shared(&self) -> &Arc<T> {
        &self.0
    }

    /// Gives back the shared allocation.
    pub fn into_shared(self) -> Arc<T> {
        self.0
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Identity<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for Identity<T> {}

impl<T> Hash for Identity<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl<T> Deref for Identity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<Arc<T>> for Identity<T> {
    fn from(shared: Arc<T>) -> Self {
        Self(shared)
    }
}

impl<T: fmt::Debug> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity")
            .field(&*self.0)
            .field(&Arc::as_ptr(&self.0))
            .finish()
    }
}

/// A key that can be rekeyed by identity without copying its value.
pub trait IdentityKey {
    /// Type of the shared value.
    type Target;

    /// Identity of the allocation behind this key.
    fn identity(&self) -> Identity<Self::Target>;
}

impl<T> IdentityKey for Arc<T> {
    type Target = T;

    fn identity(&self) -> Identity<T> {
        Identity(Arc::clone(self))
    }
}

impl<T> IdentityKey for Identity<T> {
    type Target = T;

    fn identity(&self) -> Identity<T> {
        self.clone()
    }
}
