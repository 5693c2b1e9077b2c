use clap::{Parser, ValueEnum};
#[cfg(feature = "sqlite")]
use std::path::PathBuf;

/// Interactive inspection shell for an already-reachable database.
#[derive(Parser, Debug)]
#[command(name = "dbpeek", version, about)]
pub struct Args {
    /// Open a SQLite database file (":memory:" for a scratch database)
    #[cfg(feature = "sqlite")]
    #[arg(long, value_name = "PATH")]
    pub sqlite: Option<PathBuf>,

    /// Connect to a PostgreSQL server by URL
    #[cfg(feature = "postgres")]
    #[arg(long, value_name = "URL")]
    pub postgres: Option<String>,

    /// Output format for result tables
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Execute a single statement and exit instead of starting the shell
    #[arg(long, value_name = "SQL")]
    pub execute: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}
