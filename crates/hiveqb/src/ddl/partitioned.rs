use super::column::{Column, column_defs};
use super::{DEFAULT_FIELD_SEPARATOR, default_field_separator, drop_table_sql, submit_create};
use crate::client::HiveClient;
use crate::error::HiveResult;
use crate::sql::quote_literal;
use crate::task::{TaskId, suffixed_name};
use serde::{Deserialize, Serialize};

/// A managed, partitioned, delimited text table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionedTable {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub partition_columns: Vec<Column>,
    /// Drop the table before creating it, discarding stale partitions.
    #[serde(default)]
    pub drop_existing: bool,
    #[serde(default)]
    pub task_id: Option<TaskId>,
    #[serde(default = "default_field_separator")]
    pub field_separator: String,
}

impl PartitionedTable {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            columns: Vec::new(),
            partition_columns: Vec::new(),
            drop_existing: false,
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

    pub fn partition_column(mut self, name: &str, data_type: &str) -> Self {
        self.partition_columns.push(Column::new(name, data_type));
        self
    }

    pub fn partition_columns<I, T>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Column>,
    {
        self.partition_columns
            .extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn drop_existing(mut self, drop_existing: bool) -> Self {
        self.drop_existing = drop_existing;
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

    pub fn final_name(&self) -> String {
        suffixed_name(&self.name, self.task_id.as_ref())
    }

    /// The CREATE statement (the optional DROP is not included).
    pub fn to_sql(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {}({}) PARTITIONED BY ({}) ROW FORMAT DELIMITED FIELDS TERMINATED BY {} STORED AS TEXTFILE LOCATION {}",
            self.final_name(),
            column_defs(&self.columns),
            column_defs(&self.partition_columns),
            quote_literal(&self.field_separator),
            quote_literal(&self.location),
        )
    }
}

/// Create a partitioned table and return its final name.
///
/// With `drop_existing` set, `DROP TABLE <name>` runs first. A failure there
/// surfaces as the raw [`HiveError::Client`](crate::HiveError::Client) and
/// nothing is created; a failure of the CREATE itself is wrapped in
/// [`HiveError::TableCreation`](crate::HiveError::TableCreation). A drop that
/// succeeds followed by a failed create leaves no table behind.
pub fn create_partitioned_table<C: HiveClient + ?Sized>(
    client: &C,
    table: &PartitionedTable,
) -> HiveResult<String> {
    let name = table.final_name();
    if table.drop_existing {
        client.execute(&drop_table_sql(&name))?;
    }
    submit_create(client, name, &table.to_sql())
}
