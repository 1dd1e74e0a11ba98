//! Statement monitoring and hooks for client calls.
//!
//! [`InstrumentedClient`] wraps any [`HiveClient`](crate::HiveClient) and
//! reports every `execute`/`fetch` to a [`QueryMonitor`], after letting an
//! optional [`QueryHook`] inspect, rewrite or block the statement.
//!
//! # Example
//!
//! ```rust,ignore
//! use hiveqb::monitor::{InstrumentedClient, LoggingMonitor, MonitorConfig};
//! use std::time::Duration;
//!
//! let config = MonitorConfig::new()
//!     .with_slow_query_threshold(Duration::from_secs(60))
//!     .enable_monitoring();
//!
//! let client = InstrumentedClient::new(engine)
//!     .with_config(config)
//!     .with_monitor(LoggingMonitor::new());
//!
//! QueryBuilder::new(&client)
//!     .from_table("src", None)
//!     .insert(Insert::table("dst"))?
//!     .select("*")
//!     .execute_query()?;
//! ```

mod config;
mod instrumented;
mod monitors;
mod types;

#[cfg(feature = "tracing")]
mod tracing_hook;

#[cfg(test)]
mod tests;

pub use config::MonitorConfig;
pub use instrumented::InstrumentedClient;
pub use monitors::{
    CompositeHook, CompositeMonitor, LoggingMonitor, NoopMonitor, QueryStats, StatsMonitor,
};
pub use types::{HookAction, QueryContext, QueryHook, QueryMonitor, QueryResult, StatementKind};

#[cfg(feature = "tracing")]
pub use tracing_hook::TracingSqlHook;

/// Longest prefix of `sql` that fits in `max_bytes` and ends on a char boundary.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
