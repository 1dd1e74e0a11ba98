use super::column::{Column, column_defs};
use super::{DEFAULT_FIELD_SEPARATOR, default_field_separator, submit_create};
use crate::client::HiveClient;
use crate::error::HiveResult;
use crate::sql::quote_literal;
use crate::task::{TaskId, suffixed_name};
use serde::{Deserialize, Serialize};

/// A delimited text table over files at `location`.
///
/// # Example
///
/// ```rust
/// use hiveqb::ExternalTable;
///
/// let table = ExternalTable::new("events", "/data/events")
///     .column("id", "string")
///     .column("ts", "bigint")
///     .task_id("42");
///
/// assert_eq!(table.final_name(), "events_42");
/// assert!(table.to_sql().starts_with("CREATE EXTERNAL TABLE IF NOT EXISTS events_42 (id string,ts bigint)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalTable {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub task_id: Option<TaskId>,
    #[serde(default = "default_field_separator")]
    pub field_separator: String,
}

impl ExternalTable {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            columns: Vec::new(),
            task_id: None,
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
        }
    }

    pub fn column(mut self, name: &str, data_type: &str) -> Self {
        self.columns.push(Column::new(name, data_type));
        self
    }

    pub fn columns<I, T>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Column>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn task_id(mut self, task_id: impl Into<TaskId>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn field_separator(mut self, separator: impl Into<String>) -> Self {
        self.field_separator = separator.into();
        self
    }

    /// Table name including the task suffix.
    pub fn final_name(&self) -> String {
        suffixed_name(&self.name, self.task_id.as_ref())
    }

    pub fn to_sql(&self) -> String {
        format!(
            "CREATE EXTERNAL TABLE IF NOT EXISTS {} ({}) ROW FORMAT DELIMITED FIELDS TERMINATED BY {} STORED AS TEXTFILE LOCATION {}",
            self.final_name(),
            column_defs(&self.columns),
            quote_literal(&self.field_separator),
            quote_literal(&self.location),
        )
    }
}

/// Create an external delimited table and return its final name.
///
/// Client failures are wrapped in
/// [`HiveError::TableCreation`](crate::HiveError::TableCreation).
pub fn create_external_table<C: HiveClient + ?Sized>(
    client: &C,
    table: &ExternalTable,
) -> HiveResult<String> {
    submit_create(client, table.final_name(), &table.to_sql())
}
