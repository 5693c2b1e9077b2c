use serde::Serialize;

use crate::core::Row;

/// The normalized in-memory form of one statement's result set.
///
/// A `Table` exists only for statements whose execution produced result-set
/// metadata; statements without one yield no table at all, never an empty
/// one. A SELECT that matched zero rows still carries its column list.
/// Once constructed the table is immutable and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from driver metadata and materialized rows.
    ///
    /// Every row must have exactly one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        debug_assert!(
            rows.iter().all(|row| row.len() == columns.len()),
            "row arity must match the column list"
        );
        Self { columns, rows }
    }

    /// Column names in the order the driver reported them.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in the order the driver returned them.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as an aligned text grid. Printing is the caller's
    /// business; this only builds the string.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();

        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                widths[i] = widths[i].max(value.to_string().len());
            }
        }

        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{:width$}", col, width = widths[i]))
            .collect();
        out.push_str(&header.join(" | "));
        out.push('\n');

        let separator: String = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        out.push_str(&separator);

        for row in &self.rows {
            out.push('\n');
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, value)| format!("{:width$}", value.to_string(), width = widths[i]))
                .collect();
            out.push_str(&cells.join(" | "));
        }

        out
    }
}
