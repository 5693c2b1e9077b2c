use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The registry probed every registered wrapper kind and none accepted
    /// the supplied handle.
    #[error("unsupported connection kind: no registered wrapper handles this connection")]
    UnsupportedConnectionKind,

    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[cfg(feature = "postgres")]
    #[error("postgres error: {0}")]
    Postgres(#[from] postgres::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;
