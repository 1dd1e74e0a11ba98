//! Convenient imports for typical `hiveqb` usage.
//!
//! ```ignore
//! use hiveqb::prelude::*;
//! ```

pub use crate::{
    ClientError, HiveClient, HiveError, HiveResult, Insert, QueryBuilder, Row, SortDirection,
    Statement, TaskId, execute_raw, table_exists,
};
pub use crate::{
    ExternalTable, KvStoreTable, PartitionedTable, TableManifest, create_external_table,
    create_external_table_over_kv_store, create_partitioned_table, drop_table,
};
pub use crate::{InstrumentedClient, MonitorConfig};
