//! Table DDL helpers.
//!
//! Each helper renders one statement from a table definition, submits it and
//! returns the final table name (with the task suffix applied). Definitions
//! are plain values with builder-style setters and serde support, so they can
//! also come from a [`TableManifest`](crate::config::TableManifest).

mod column;
mod external;
mod kv_store;
mod partitioned;

pub use column::{Column, MappedColumn};
pub use external::{ExternalTable, create_external_table};
pub use kv_store::{KV_STORAGE_HANDLER, KvStoreTable, create_external_table_over_kv_store};
pub use partitioned::{PartitionedTable, create_partitioned_table};

use crate::client::HiveClient;
use crate::error::{HiveError, HiveResult};

/// Field separator used when none is given.
pub const DEFAULT_FIELD_SEPARATOR: &str = "\t";

pub(crate) fn default_field_separator() -> String {
    DEFAULT_FIELD_SEPARATOR.to_string()
}

pub fn drop_table_sql(table: &str) -> String {
    format!("DROP TABLE {table}")
}

/// Drop `table`.
///
/// Client failures are wrapped in [`HiveError::TableDeletion`].
pub fn drop_table<C: HiveClient + ?Sized>(client: &C, table: &str) -> HiveResult<()> {
    client
        .execute(&drop_table_sql(table))
        .map_err(|source| HiveError::TableDeletion {
            table: table.to_string(),
            source,
        })
}

fn submit_create<C: HiveClient + ?Sized>(client: &C, table: String, sql: &str) -> HiveResult<String> {
    match client.execute(sql) {
        Ok(()) => Ok(table),
        Err(source) => Err(HiveError::TableCreation { table, source }),
    }
}
