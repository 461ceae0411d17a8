//! Test doubles for the framework's external collaborators. Shipped as a
//! regular module so downstream crates can reuse them in their own tests.

use crate::app::Input;
use crate::domain::ports::{Cursor, DatabaseDriver, LogLevel, Logger, Row};
use crate::utils::error::{RegkitError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// Builders for pre-populated request input, so tests do not have to fake
/// argv or query strings.
pub struct MockInput;

impl MockInput {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Input {
        let mut input = Input::default();
        for (key, value) in pairs {
            input.set(*key, *value);
        }
        input
    }

    pub fn empty() -> Input {
        Input::default()
    }
}

/// Logger that records every message for later assertions.
#[derive(Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("{}: {}", level, message));
    }
}

/// Cursor over a pre-loaded row list.
pub struct MemoryCursor {
    rows: std::vec::IntoIter<Row>,
}

impl MemoryCursor {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into_iter(),
        }
    }
}

impl Cursor for MemoryCursor {
    fn fetch(&mut self) -> Result<Option<Row>> {
        Ok(self.rows.next())
    }
}

/// In-memory driver answering `SELECT * FROM <table>` from pre-loaded
/// tables and recording every executed statement.
#[derive(Default)]
pub struct MemoryDriver {
    tables: HashMap<String, Vec<Row>>,
    executed: Mutex<Vec<String>>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_table(&mut self, name: impl Into<String>, rows: Vec<Row>) {
        self.tables.insert(name.into(), rows);
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl DatabaseDriver for MemoryDriver {
    fn query(&self, sql: &str) -> Result<Box<dyn Cursor>> {
        let table = sql
            .trim()
            .strip_prefix("SELECT * FROM ")
            .ok_or_else(|| RegkitError::DatabaseError {
                message: format!("unsupported query: '{}'", sql),
            })?
            .trim();

        let rows = self
            .tables
            .get(table)
            .cloned()
            .ok_or_else(|| RegkitError::DatabaseError {
                message: format!("unknown table: '{}'", table),
            })?;

        Ok(Box::new(MemoryCursor::new(rows)))
    }

    fn execute(&self, sql: &str) -> Result<u64> {
        self.executed.lock().unwrap().push(sql.to_string());
        Ok(0)
    }
}
