mod cli;

use std::any::Any;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dbpeek::WrapperRegistry;

use crate::cli::app::App;
use crate::cli::args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut raw = open_raw_connection(&args)?;

    let registry = WrapperRegistry::with_default_wrappers();
    let wrapper = registry
        .resolve(raw.as_mut())
        .context("cannot inspect this connection")?;

    let mut app = App::new(wrapper, args.format);
    match args.execute.as_deref() {
        Some(sql) => app.run_statement(sql),
        None => app.run(),
    }
}

/// Open the raw handle selected on the command line.
///
/// The handle is owned here for the whole session; wrappers only borrow it
/// and it is closed on drop, after the shell exits.
fn open_raw_connection(args: &Args) -> Result<Box<dyn Any>> {
    #[cfg(feature = "sqlite")]
    if let Some(path) = args.sqlite.as_ref() {
        let conn = if path.as_os_str() == ":memory:" {
            rusqlite::Connection::open_in_memory()
        } else {
            rusqlite::Connection::open(path)
        }
        .with_context(|| format!("failed to open sqlite database {}", path.display()))?;
        return Ok(Box::new(conn));
    }

    #[cfg(feature = "postgres")]
    if let Some(url) = args.postgres.as_ref() {
        let client = postgres::Client::connect(url, postgres::NoTls)
            .context("failed to connect to postgres")?;
        return Ok(Box::new(client));
    }

    bail!("no connection selected; pass --sqlite or --postgres");
}
