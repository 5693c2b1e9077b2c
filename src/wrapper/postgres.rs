//! PostgreSQL adapter backed by the synchronous `postgres` client.

use std::any::Any;

use postgres::{Client, SimpleQueryMessage};
use tracing::debug;

use crate::core::{Result, Row, Value};
use crate::result::Table;
use crate::wrapper::{ConnectionWrapper, WrapperKind};

/// Wrapper around a connected [`postgres::Client`].
pub struct PostgresWrapper<'c> {
    conn: &'c mut Client,
}

impl<'c> PostgresWrapper<'c> {
    pub fn new(conn: &'c mut Client) -> Self {
        Self { conn }
    }
}

impl ConnectionWrapper for PostgresWrapper<'_> {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    fn raw_connection(&mut self) -> &mut dyn Any {
        &mut *self.conn
    }

    fn execute_statement(&mut self, sql: &str) -> Result<Vec<Table>> {
        // The simple-query protocol answers with a RowDescription message
        // exactly when a statement has a result set; that message, not the
        // SQL text, decides whether a table comes back. Values arrive in the
        // protocol's text form and are passed through untouched.
        let messages = self.conn.simple_query(sql)?;

        let mut tables: Vec<Table> = Vec::new();
        let mut columns: Option<Vec<String>> = None;
        let mut rows: Vec<Row> = Vec::new();

        for message in messages {
            match message {
                SimpleQueryMessage::RowDescription(description) => {
                    if let Some(finished) = columns.take() {
                        tables.push(Table::new(finished, std::mem::take(&mut rows)));
                    }
                    columns = Some(description.iter().map(|c| c.name().to_string()).collect());
                }
                SimpleQueryMessage::Row(row) => {
                    if columns.is_none() {
                        columns = Some(row.columns().iter().map(|c| c.name().to_string()).collect());
                    }
                    let tuple = (0..row.len())
                        .map(|index| match row.get(index) {
                            Some(text) => Value::Text(text.to_string()),
                            None => Value::Null,
                        })
                        .collect();
                    rows.push(tuple);
                }
                SimpleQueryMessage::CommandComplete(_) => {
                    // Statement boundary; flush the set it closed, if any.
                    if let Some(finished) = columns.take() {
                        tables.push(Table::new(finished, std::mem::take(&mut rows)));
                    }
                }
                _ => {}
            }
        }

        if let Some(finished) = columns.take() {
            tables.push(Table::new(finished, rows));
        }

        debug!(backend = "postgres", tables = tables.len(), "statement executed");
        Ok(tables)
    }
}

/// Registry entry for the PostgreSQL backend.
pub struct PostgresKind;

impl WrapperKind for PostgresKind {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn handles(&self, raw: &dyn Any) -> bool {
        raw.is::<Client>()
    }

    fn wrap<'c>(&self, raw: &'c mut dyn Any) -> Option<Box<dyn ConnectionWrapper + 'c>> {
        let conn = raw.downcast_mut::<Client>()?;
        Some(Box::new(PostgresWrapper::new(conn)))
    }
}
