//! Line-oriented shell: reads statements, prints tables.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use dbpeek::{ConnectionWrapper, Table};

use super::args::OutputFormat;

/// Interactive shell bound to one resolved connection wrapper.
pub struct App<'c> {
    wrapper: Box<dyn ConnectionWrapper + 'c>,
    format: OutputFormat,
}

impl<'c> App<'c> {
    pub fn new(wrapper: Box<dyn ConnectionWrapper + 'c>, format: OutputFormat) -> Self {
        Self { wrapper, format }
    }

    /// Read statements until EOF or `!exit`.
    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        println!(
            "Connected through the {} wrapper. Type !help for shell commands.",
            self.wrapper.backend()
        );

        loop {
            match editor.readline("dbpeek> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    editor.add_history_entry(line)?;

                    if let Some(command) = line.strip_prefix('!') {
                        if !self.run_command(command) {
                            break;
                        }
                        continue;
                    }

                    if let Err(err) = self.run_statement(line) {
                        eprintln!("error: {err:#}");
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    /// Execute one statement and print its outputs.
    pub fn run_statement(&mut self, sql: &str) -> Result<()> {
        let outputs = self.wrapper.execute_statement(sql)?;

        if outputs.is_empty() {
            println!("OK");
            return Ok(());
        }
        for table in &outputs {
            self.print_table(table)?;
        }
        Ok(())
    }

    fn print_table(&self, table: &Table) -> Result<()> {
        match self.format {
            OutputFormat::Table => {
                println!("{}", table.render());
                let n = table.row_count();
                println!("({} row{})", n, if n == 1 { "" } else { "s" });
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(table)?);
            }
        }
        Ok(())
    }

    /// Handle a `!` shell command; false means leave the loop.
    fn run_command(&mut self, command: &str) -> bool {
        let mut parts = command.split_whitespace();
        match parts.next() {
            Some("exit") | Some("quit") => return false,
            Some("backend") => println!("{}", self.wrapper.backend()),
            Some("format") => match parts.next() {
                Some("table") => self.format = OutputFormat::Table,
                Some("json") => self.format = OutputFormat::Json,
                _ => eprintln!("usage: !format table|json"),
            },
            _ => print_help(),
        }
        true
    }
}

fn print_help() {
    println!("Statements are sent to the database as typed.");
    println!();
    println!("Shell commands:");
    println!("  !help            show this message");
    println!("  !backend         show which wrapper is in use");
    println!("  !format <mode>   switch output between table and json");
    println!("  !exit            leave the shell");
}
