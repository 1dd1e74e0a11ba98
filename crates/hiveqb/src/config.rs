//! Declarative table manifests.
//!
//! A manifest lists the tables a job needs, in creation order:
//!
//! ```toml
//! task_id = "run42"
//!
//! [[table]]
//! kind = "external"
//! name = "events"
//! location = "/data/events"
//! columns = [{ name = "id", type = "string" }, { name = "ts", type = "bigint" }]
//!
//! [[table]]
//! kind = "partitioned"
//! name = "daily"
//! location = "/warehouse/daily"
//! drop_existing = true
//! columns = [{ name = "id", type = "string" }]
//! partition_columns = [{ name = "dt", type = "string" }]
//! ```

use crate::client::HiveClient;
use crate::ddl::{
    ExternalTable, KvStoreTable, PartitionedTable, create_external_table,
    create_external_table_over_kv_store, create_partitioned_table,
};
use crate::error::{HiveError, HiveResult};
use crate::task::TaskId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One table entry, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableDefinition {
    External(ExternalTable),
    KvStore(KvStoreTable),
    Partitioned(PartitionedTable),
}

impl TableDefinition {
    /// Name the table will have once created.
    pub fn final_name(&self) -> String {
        match self {
            TableDefinition::External(t) => t.final_name(),
            TableDefinition::KvStore(t) => t.final_name(),
            TableDefinition::Partitioned(t) => t.final_name(),
        }
    }

    fn task_id_mut(&mut self) -> &mut Option<TaskId> {
        match self {
            TableDefinition::External(t) => &mut t.task_id,
            TableDefinition::KvStore(t) => &mut t.task_id,
            TableDefinition::Partitioned(t) => &mut t.task_id,
        }
    }

    /// Submit the CREATE statement for this entry.
    pub fn create<C: HiveClient + ?Sized>(&self, client: &C) -> HiveResult<String> {
        match self {
            TableDefinition::External(t) => create_external_table(client, t),
            TableDefinition::KvStore(t) => create_external_table_over_kv_store(client, t),
            TableDefinition::Partitioned(t) => create_partitioned_table(client, t),
        }
    }
}

/// A list of table definitions plus an optional default task id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableManifest {
    /// Applied to every entry that has no task id of its own.
    #[serde(default)]
    pub task_id: Option<TaskId>,
    #[serde(rename = "table", default)]
    pub tables: Vec<TableDefinition>,
}

impl TableManifest {
    pub fn from_toml_str(raw: &str) -> HiveResult<Self> {
        toml::from_str(raw)
            .map_err(|e| HiveError::config(format!("failed to parse table manifest: {e}")))
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> HiveResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            HiveError::config(format!(
                "failed to read table manifest {}: {e}",
                path.display()
            ))
        })?;
        toml::from_str(&raw).map_err(|e| {
            HiveError::config(format!(
                "failed to parse table manifest {}: {e}",
                path.display()
            ))
        })
    }

    /// Entries with the manifest task id filled in where missing.
    pub fn resolved_tables(&self) -> Vec<TableDefinition> {
        self.tables
            .iter()
            .cloned()
            .map(|mut table| {
                let slot = table.task_id_mut();
                if slot.is_none() {
                    *slot = self.task_id.clone();
                }
                table
            })
            .collect()
    }

    /// Create every table in file order, stopping at the first failure.
    ///
    /// Returns the final names of the created tables.
    pub fn create_all<C: HiveClient + ?Sized>(&self, client: &C) -> HiveResult<Vec<String>> {
        self.resolved_tables()
            .iter()
            .map(|table| table.create(client))
            .collect()
    }
}
