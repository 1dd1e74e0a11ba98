//! # hiveqb
//!
//! Statement builder and DDL helpers for Hive-style SQL-on-Hadoop engines.
//!
//! ## Features
//!
//! - **Multi-clause statements**: `FROM ... [JOIN ...] INSERT ... SELECT ...`
//!   assembled in any call order, rendered in a fixed clause order
//! - **Session hints**: dynamic partitioning, memory-conservative aggregation
//!   and reducer count, submitted right before the statement
//! - **Table DDL**: delimited external tables, tables over an HBase-style
//!   key-value store and partitioned tables, with per-run name suffixes
//! - **Existence check**: `SHOW TABLES LIKE` through the same client
//! - **Monitoring**: wrap any client to time, log, rewrite or block statements
//! - **Manifests**: declare tables in TOML and create them in one call
//!
//! hiveqb does not connect to anything itself: every operation goes through a
//! caller-supplied [`HiveClient`].
//!
//! ```ignore
//! use hiveqb::prelude::*;
//!
//! let events = create_external_table(
//!     &client,
//!     &ExternalTable::new("events", "/data/events")
//!         .columns([("user_id", "string"), ("kind", "string")])
//!         .task_id(TaskId::generate()),
//! )?;
//!
//! QueryBuilder::new(&client)
//!     .from_table(&events, Some("e"))
//!     .insert(Insert::table("clicks").partition("dt='2024-01-01'"))?
//!     .select("e.user_id")
//!     .where_("e.kind='click'")
//!     .with_dynamic_partitioning()
//!     .execute_query()?;
//!
//! drop_table(&client, &events)?;
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod ddl;
pub mod error;
pub mod monitor;
pub mod prelude;
pub mod query;
pub mod row;
pub mod sql;
pub mod task;

#[cfg(test)]
mod testing;

pub use catalog::{show_tables_sql, table_exists};
pub use client::HiveClient;
pub use config::{TableDefinition, TableManifest};
pub use ddl::{
    Column, DEFAULT_FIELD_SEPARATOR, ExternalTable, KV_STORAGE_HANDLER, KvStoreTable,
    MappedColumn, PartitionedTable, create_external_table, create_external_table_over_kv_store,
    create_partitioned_table, drop_table, drop_table_sql,
};
pub use error::{ClientError, HiveError, HiveResult};
pub use monitor::{
    CompositeHook, CompositeMonitor, HookAction, InstrumentedClient, LoggingMonitor, MonitorConfig,
    NoopMonitor, QueryContext, QueryHook, QueryMonitor, QueryResult, QueryStats, StatementKind,
    StatsMonitor,
};
pub use query::{
    Insert, InsertClause, InsertTarget, Join, JoinKind, OrderBy, QueryBuilder, RenderedQuery,
    SessionHint, SessionHints, SortDirection, Statement, TableRef, execute_raw,
};
pub use row::Row;
pub use sql::quote_literal;
pub use task::{TaskId, suffixed_name};

#[cfg(feature = "tracing")]
pub use monitor::TracingSqlHook;
