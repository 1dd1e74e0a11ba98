//! In-memory client shared by unit tests.

use crate::client::HiveClient;
use crate::error::ClientError;
use crate::row::Row;
use std::cell::RefCell;

/// Records every submitted statement and serves canned rows.
#[derive(Default)]
pub(crate) struct RecordingClient {
    executed: RefCell<Vec<String>>,
    fail_prefix: RefCell<Option<String>>,
    rows: RefCell<Vec<Row>>,
}

impl RecordingClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fail every statement starting with `prefix`.
    pub(crate) fn failing_on(prefix: &str) -> Self {
        let client = Self::new();
        *client.fail_prefix.borrow_mut() = Some(prefix.to_string());
        client
    }

    pub(crate) fn with_rows(rows: Vec<Row>) -> Self {
        let client = Self::new();
        *client.rows.borrow_mut() = rows;
        client
    }

    pub(crate) fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }
}

impl HiveClient for RecordingClient {
    fn execute(&self, sql: &str) -> Result<(), ClientError> {
        self.executed.borrow_mut().push(sql.to_string());
        match self.fail_prefix.borrow().as_deref() {
            Some(prefix) if sql.starts_with(prefix) => {
                Err(ClientError::msg(format!("engine rejected: {prefix}")))
            }
            _ => Ok(()),
        }
    }

    fn fetch(&self) -> Result<Vec<Row>, ClientError> {
        Ok(self.rows.borrow().clone())
    }
}
