//! Priority-ordered dispatch from raw connection handles to wrappers.

use std::any::Any;

use tracing::debug;

use crate::core::{DbError, Result};
use crate::wrapper::{ConnectionWrapper, WrapperKind};

/// The ordered set of backend kinds consulted to resolve a raw handle.
///
/// Order is significant: kinds are probed front to back and the first whose
/// probe accepts the handle wins, so more specific kinds must be registered
/// before more general ones.
pub struct WrapperRegistry {
    kinds: Vec<Box<dyn WrapperKind>>,
}

impl WrapperRegistry {
    /// An empty registry with no known backends.
    pub fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// A registry preloaded with every backend this build carries, in the
    /// stock priority order.
    pub fn with_default_wrappers() -> Self {
        let mut registry = Self::new();
        #[cfg(feature = "sqlite")]
        registry.register(Box::new(crate::wrapper::sqlite::SqliteKind));
        #[cfg(feature = "postgres")]
        registry.register(Box::new(crate::wrapper::postgres::PostgresKind));
        registry
    }

    /// Append a backend kind at the lowest-priority position.
    pub fn register(&mut self, kind: Box<dyn WrapperKind>) {
        self.kinds.push(kind);
    }

    /// Resolve `raw` to a wrapper bound to it.
    ///
    /// The handle is only borrowed: its open/close lifecycle stays with the
    /// caller for the whole life of the returned wrapper. Fails with
    /// [`DbError::UnsupportedConnectionKind`] when no registered kind accepts
    /// the handle.
    pub fn resolve<'c>(&self, raw: &'c mut dyn Any) -> Result<Box<dyn ConnectionWrapper + 'c>> {
        let kind = self
            .kinds
            .iter()
            .find(|kind| kind.handles(&*raw))
            .ok_or(DbError::UnsupportedConnectionKind)?;

        debug!(backend = kind.name(), "resolved connection wrapper");

        // The probe just accepted the handle, so binding can only come back
        // empty if a kind's probe and factory disagree; treat that the same
        // as no match.
        kind.wrap(raw).ok_or(DbError::UnsupportedConnectionKind)
    }
}

impl Default for WrapperRegistry {
    fn default() -> Self {
        Self::new()
    }
}
