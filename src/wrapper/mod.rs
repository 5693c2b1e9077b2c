//! Backend adapters: one module per connection technology.
//!
//! A wrapper binds the uniform execution contract onto one raw, already-open
//! driver handle. The handle arrives type-erased as `dyn Any`; each backend
//! contributes a [`WrapperKind`] whose probe classifies handles by kind alone
//! and whose factory binds a [`ConnectionWrapper`] around accepted ones.

use std::any::Any;

use crate::core::Result;
use crate::result::Table;

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

/// Uniform execution surface over one raw connection.
///
/// The wrapper borrows its handle for its whole lifetime; opening and closing
/// the connection stays with the caller, and one wrapper never migrates to a
/// different handle.
pub trait ConnectionWrapper {
    /// Short backend identifier, e.g. `"sqlite"`.
    fn backend(&self) -> &'static str;

    /// Direct access to the underlying handle.
    ///
    /// The wrapper augments rather than encapsulates the raw connection, so
    /// collaborators (test setup seeding state, for one) may issue statements
    /// through the handle itself.
    fn raw_connection(&mut self) -> &mut dyn Any;

    /// Execute one SQL statement and return its normalized result sets.
    ///
    /// The statement text is handed to the driver verbatim, in a single
    /// round-trip, with no parsing or keyword inspection on this side.
    /// Whether a [`Table`] comes back is decided entirely by the driver's
    /// post-execution metadata: no result-set metadata means an empty vec,
    /// metadata means a table even when zero rows matched. Driver failures
    /// propagate unaltered in meaning; no retry, no transaction management.
    fn execute_statement(&mut self, sql: &str) -> Result<Vec<Table>>;
}

/// A registerable backend: capability probe plus wrapper factory.
pub trait WrapperKind {
    /// Name of the backend this kind produces wrappers for.
    fn name(&self) -> &'static str;

    /// Capability probe: true iff this backend can operate `raw`.
    ///
    /// Pure classification by handle kind. Total over arbitrary inputs,
    /// never panics, touches no network. Overlap between kinds is legal;
    /// registry order resolves it.
    fn handles(&self, raw: &dyn Any) -> bool;

    /// Bind a wrapper around `raw`, or `None` when the handle is not of this
    /// backend's kind. Binding performs no I/O.
    fn wrap<'c>(&self, raw: &'c mut dyn Any) -> Option<Box<dyn ConnectionWrapper + 'c>>;
}
