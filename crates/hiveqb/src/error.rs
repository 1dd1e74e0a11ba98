//! Error types for hiveqb

use std::fmt;
use thiserror::Error;

/// Result type alias for hiveqb operations
pub type HiveResult<T> = Result<T, HiveError>;

/// Opaque failure reported by a [`HiveClient`](crate::client::HiveClient).
///
/// The engine driver decides what goes in here; hiveqb only carries it along
/// as the `source` of the error it raises.
pub struct ClientError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl ClientError {
    /// Wrap any driver error.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self { inner: err.into() }
    }

    /// Create a client error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(message.into())
    }

    /// Borrow the wrapped driver error.
    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Unwrap into the driver error.
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.inner
    }
}

impl fmt::Debug for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClientError").field(&self.inner).finish()
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

/// Error types for statement building and submission
#[derive(Debug, Error)]
pub enum HiveError {
    /// CREATE TABLE submission failed
    #[error("Failed to create table {table}: {source}")]
    TableCreation {
        table: String,
        #[source]
        source: ClientError,
    },

    /// DROP TABLE submission failed
    #[error("Failed to drop table {table}: {source}")]
    TableDeletion {
        table: String,
        #[source]
        source: ClientError,
    },

    /// Local validation of a statement failed; nothing was sent
    #[error("Query build error: {0}")]
    QueryBuild(String),

    /// Final statement submission failed
    #[error("Query failed: {0}")]
    QueryExecution(#[source] ClientError),

    /// Builder API used out of order (contract violation)
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Unwrapped client failure
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Table manifest could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl HiveError {
    /// Create a query build error
    pub fn query_build(message: impl Into<String>) -> Self {
        Self::QueryBuild(message.into())
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a local validation error
    pub fn is_query_build(&self) -> bool {
        matches!(self, Self::QueryBuild(_))
    }

    /// Check if this is a builder contract violation
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Check if the failure came from the execution client.
    ///
    /// Only these errors are worth retrying; build, precondition and config
    /// errors fail the same way every time.
    pub fn is_remote(&self) -> bool {
        self.client_error().is_some()
    }

    /// The underlying client failure, if any.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::TableCreation { source, .. } | Self::TableDeletion { source, .. } => Some(source),
            Self::QueryExecution(source) | Self::Client(source) => Some(source),
            Self::QueryBuild(_) | Self::Precondition(_) | Self::Config(_) => None,
        }
    }

    /// Name of the table an error refers to, for DDL failures.
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::TableCreation { table, .. } | Self::TableDeletion { table, .. } => Some(table),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_error_names_table_and_cause() {
        let err = HiveError::TableCreation {
            table: "events_42".to_string(),
            source: ClientError::msg("permission denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create table events_42: permission denied"
        );
        assert_eq!(err.table(), Some("events_42"));
        assert!(err.is_remote());
    }

    #[test]
    fn local_errors_are_not_remote() {
        assert!(!HiveError::query_build("missing").is_remote());
        assert!(!HiveError::precondition("where").is_remote());
        assert!(!HiveError::config("bad toml").is_remote());
    }

    #[test]
    fn client_error_keeps_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "socket closed");
        let err = HiveError::QueryExecution(ClientError::new(io));
        assert_eq!(err.to_string(), "Query failed: socket closed");
        let cause = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(cause.as_deref(), Some("socket closed"));
    }

    #[test]
    fn from_client_error_is_raw() {
        let err: HiveError = ClientError::msg("boom").into();
        assert!(matches!(err, HiveError::Client(_)));
        assert!(!err.is_query_build());
    }
}
