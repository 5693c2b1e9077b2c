// ============================================================================
// dbpeek Library
// ============================================================================
//
// Backend-abstraction layer of an interactive database inspection shell: a
// raw, already-open connection handle of unknown kind is resolved to the
// backend adapter that can operate it, and every adapter exposes the same
// operation, execute a SQL statement and return zero or more normalized
// result tables.

pub mod core;
pub mod registry;
pub mod result;
pub mod wrapper;

// Re-export main types for convenience
pub use crate::core::{DbError, Result, Row, Value};
pub use crate::registry::WrapperRegistry;
pub use crate::result::Table;
pub use crate::wrapper::{ConnectionWrapper, WrapperKind};

#[cfg(feature = "postgres")]
pub use crate::wrapper::postgres::{PostgresKind, PostgresWrapper};
#[cfg(feature = "sqlite")]
pub use crate::wrapper::sqlite::{SqliteKind, SqliteWrapper};

use std::any::Any;

/// Resolve `raw` against the stock registry.
///
/// Shorthand for callers that do not register kinds of their own. The handle
/// must already be open and stays owned by the caller.
///
/// # Examples
///
/// ```
/// # fn main() -> dbpeek::Result<()> {
/// let mut conn = rusqlite::Connection::open_in_memory().unwrap();
///
/// let mut wrapper = dbpeek::wrap_connection(&mut conn)?;
/// let outputs = wrapper.execute_statement("select 1 as one")?;
///
/// assert_eq!(outputs[0].columns(), ["one"]);
/// # Ok(())
/// # }
/// ```
pub fn wrap_connection<'c>(raw: &'c mut dyn Any) -> Result<Box<dyn ConnectionWrapper + 'c>> {
    WrapperRegistry::with_default_wrappers().resolve(raw)
}
