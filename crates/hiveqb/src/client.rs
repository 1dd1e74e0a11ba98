//! Execution client trait.
//!
//! hiveqb never opens or closes connections. Callers hand in anything that
//! implements [`HiveClient`] and keep ownership of its lifecycle.

use crate::error::ClientError;
use crate::row::Row;
use std::sync::Arc;

/// A blocking, stateful session against the query engine.
///
/// Methods take `&self`; implementations that track the last result set do so
/// with interior mutability. Every call blocks until the engine answers.
pub trait HiveClient {
    /// Submit one statement.
    fn execute(&self, sql: &str) -> Result<(), ClientError>;

    /// Return the buffered rows of the last executed statement.
    fn fetch(&self) -> Result<Vec<Row>, ClientError>;
}

impl<C: HiveClient + ?Sized> HiveClient for &C {
    fn execute(&self, sql: &str) -> Result<(), ClientError> {
        (**self).execute(sql)
    }

    fn fetch(&self) -> Result<Vec<Row>, ClientError> {
        (**self).fetch()
    }
}

impl<C: HiveClient + ?Sized> HiveClient for &mut C {
    fn execute(&self, sql: &str) -> Result<(), ClientError> {
        (**self).execute(sql)
    }

    fn fetch(&self) -> Result<Vec<Row>, ClientError> {
        (**self).fetch()
    }
}

impl<C: HiveClient + ?Sized> HiveClient for Box<C> {
    fn execute(&self, sql: &str) -> Result<(), ClientError> {
        (**self).execute(sql)
    }

    fn fetch(&self) -> Result<Vec<Row>, ClientError> {
        (**self).fetch()
    }
}

impl<C: HiveClient + ?Sized> HiveClient for Arc<C> {
    fn execute(&self, sql: &str) -> Result<(), ClientError> {
        (**self).execute(sql)
    }

    fn fetch(&self) -> Result<Vec<Row>, ClientError> {
        (**self).fetch()
    }
}
