//! Catalog lookups.

use crate::client::HiveClient;
use crate::error::HiveResult;
use crate::sql::quote_literal;

/// The `SHOW TABLES LIKE` statement for `pattern`.
///
/// The pattern is passed through as-is; `*` and `|` keep their wildcard
/// meaning.
pub fn show_tables_sql(pattern: &str) -> String {
    format!("SHOW TABLES LIKE {}", quote_literal(pattern))
}

/// Check whether any table matches `pattern`.
///
/// Runs `SHOW TABLES LIKE '<pattern>'` and reports whether the following
/// fetch returned at least one row. Client failures surface unwrapped as
/// [`HiveError::Client`](crate::HiveError::Client).
pub fn table_exists<C: HiveClient + ?Sized>(client: &C, pattern: &str) -> HiveResult<bool> {
    client.execute(&show_tables_sql(pattern))?;
    let rows = client.fetch()?;
    Ok(!rows.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HiveError;
    use crate::row::Row;
    use crate::testing::RecordingClient;

    #[test]
    fn exists_when_rows_returned() {
        let client = RecordingClient::with_rows(vec![Row::from(vec!["events_42"])]);
        assert!(table_exists(&client, "events_42").unwrap());
        assert_eq!(client.executed(), vec!["SHOW TABLES LIKE 'events_42'"]);
    }

    #[test]
    fn missing_when_no_rows() {
        let client = RecordingClient::new();
        assert!(!table_exists(&client, "nope").unwrap());
    }

    #[test]
    fn pattern_not_validated() {
        let client = RecordingClient::new();
        table_exists(&client, "events_*").unwrap();
        assert_eq!(client.executed(), vec!["SHOW TABLES LIKE 'events_*'"]);
    }

    #[test]
    fn client_failure_is_raw() {
        let client = RecordingClient::failing_on("SHOW");
        let err = table_exists(&client, "events").unwrap_err();
        assert!(matches!(err, HiveError::Client(_)));
    }
}
