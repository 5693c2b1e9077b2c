//! SQLite adapter backed by `rusqlite`.

use std::any::Any;

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tracing::debug;

use crate::core::{Result, Row, Value};
use crate::result::Table;
use crate::wrapper::{ConnectionWrapper, WrapperKind};

/// Wrapper around an open [`rusqlite::Connection`].
pub struct SqliteWrapper<'c> {
    conn: &'c mut Connection,
}

impl<'c> SqliteWrapper<'c> {
    pub fn new(conn: &'c mut Connection) -> Self {
        Self { conn }
    }
}

impl ConnectionWrapper for SqliteWrapper<'_> {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn raw_connection(&mut self) -> &mut dyn Any {
        &mut *self.conn
    }

    fn execute_statement(&mut self, sql: &str) -> Result<Vec<Table>> {
        let mut stmt = self.conn.prepare(sql)?;

        // SQLite reports zero result columns for statements without a result
        // set (DDL, plain DML). That statement metadata, not the SQL text,
        // decides whether a table comes back.
        if stmt.column_count() == 0 {
            stmt.execute([])?;
            debug!(backend = "sqlite", "statement produced no result set");
            return Ok(Vec::new());
        }

        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut rows: Vec<Row> = Vec::new();
        let mut result = stmt.query([])?;
        while let Some(row) = result.next()? {
            let mut tuple = Row::with_capacity(columns.len());
            for index in 0..columns.len() {
                tuple.push(Value::from(row.get_ref(index)?));
            }
            rows.push(tuple);
        }

        debug!(backend = "sqlite", rows = rows.len(), "materialized result set");
        Ok(vec![Table::new(columns, rows)])
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Float(r),
            ValueRef::Text(text) => Value::Text(String::from_utf8_lossy(text).into_owned()),
            ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
        }
    }
}

/// Registry entry for the SQLite backend.
pub struct SqliteKind;

impl WrapperKind for SqliteKind {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn handles(&self, raw: &dyn Any) -> bool {
        raw.is::<Connection>()
    }

    fn wrap<'c>(&self, raw: &'c mut dyn Any) -> Option<Box<dyn ConnectionWrapper + 'c>> {
        let conn = raw.downcast_mut::<Connection>()?;
        Some(Box::new(SqliteWrapper::new(conn)))
    }
}
