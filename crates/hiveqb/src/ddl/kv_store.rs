use super::column::{Column, MappedColumn, mapped_column_defs, struct_fields};
use super::submit_create;
use crate::client::HiveClient;
use crate::error::HiveResult;
use crate::sql::quote_literal;
use crate::task::{TaskId, suffixed_name};
use serde::{Deserialize, Serialize};

/// Storage handler class for tables backed by the key-value store.
pub const KV_STORAGE_HANDLER: &str = "org.apache.hadoop.hive.hbase.HBaseStorageHandler";

/// A table whose rows live in a key-value store table.
///
/// The composite row key becomes a `key struct<...>` column; every other
/// column maps to one `<family>:<qualifier>` cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvStoreTable {
    pub name: String,
    /// Name of the table in the key-value store.
    pub kv_table: String,
    #[serde(default)]
    pub key_columns: Vec<Column>,
    #[serde(default)]
    pub columns: Vec<MappedColumn>,
    #[serde(default)]
    pub task_id: Option<TaskId>,
}

impl KvStoreTable {
    pub fn new(name: impl Into<String>, kv_table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kv_table: kv_table.into(),
            key_columns: Vec::new(),
            columns: Vec::new(),
            task_id: None,
        }
    }

    /// Append one field of the composite row key.
    pub fn key_column(mut self, name: &str, data_type: &str) -> Self {
        self.key_columns.push(Column::new(name, data_type));
        self
    }

    pub fn key_columns<I, T>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Column>,
    {
        self.key_columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append a column mapped to `<family>:<qualifier>`.
    pub fn column(mut self, name: &str, data_type: &str, mapping: &str) -> Self {
        self.columns.push(MappedColumn::new(name, data_type, mapping));
        self
    }

    pub fn columns<I, T>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<MappedColumn>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn task_id(mut self, task_id: impl Into<TaskId>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn final_name(&self) -> String {
        suffixed_name(&self.name, self.task_id.as_ref())
    }

    /// Value of the `hbase.columns.mapping` serde property.
    pub fn column_mapping(&self) -> String {
        let cells: Vec<&str> = self.columns.iter().map(|c| c.mapping.as_str()).collect();
        format!(":key, {}", cells.join(","))
    }

    pub fn to_sql(&self) -> String {
        format!(
            "CREATE EXTERNAL TABLE IF NOT EXISTS {}( key struct<{}>, {} ) ROW FORMAT DELIMITED COLLECTION ITEMS TERMINATED BY '~' STORED BY {} WITH SERDEPROPERTIES ('hbase.columns.mapping' = {}) TBLPROPERTIES ('hbase.table.name' = {})",
            self.final_name(),
            struct_fields(&self.key_columns),
            mapped_column_defs(&self.columns),
            quote_literal(KV_STORAGE_HANDLER),
            quote_literal(&self.column_mapping()),
            quote_literal(&self.kv_table),
        )
    }
}

/// Create a table over a key-value store table and return its final name.
///
/// Client failures are wrapped in
/// [`HiveError::TableCreation`](crate::HiveError::TableCreation).
pub fn create_external_table_over_kv_store<C: HiveClient + ?Sized>(
    client: &C,
    table: &KvStoreTable,
) -> HiveResult<String> {
    submit_create(client, table.final_name(), &table.to_sql())
}
