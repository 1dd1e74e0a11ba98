use super::*;
use crate::client::HiveClient;
use crate::query::{Insert, QueryBuilder};
use crate::row::Row;
use crate::testing::RecordingClient;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Captures every completed context for later assertions.
#[derive(Default)]
struct CapturingMonitor {
    seen: Mutex<Vec<(StatementKind, String, String)>>,
    slow: Mutex<usize>,
}

impl CapturingMonitor {
    fn seen(&self) -> Vec<(StatementKind, String, String)> {
        self.seen.lock().unwrap().clone()
    }
}

impl QueryMonitor for CapturingMonitor {
    fn on_query_complete(&self, ctx: &QueryContext, _duration: Duration, result: &QueryResult) {
        self.seen
            .lock()
            .unwrap()
            .push((ctx.kind, ctx.sql.clone(), result.to_string()));
    }

    fn on_slow_query(&self, _ctx: &QueryContext, _duration: Duration) {
        *self.slow.lock().unwrap() += 1;
    }
}

struct BlockDropHook;
impl QueryHook for BlockDropHook {
    fn before_query(&self, ctx: &QueryContext) -> HookAction {
        if ctx.kind == StatementKind::Drop {
            HookAction::Abort("DROP not allowed".to_string())
        } else {
            HookAction::Continue
        }
    }
}

struct CommentHook(&'static str);
impl QueryHook for CommentHook {
    fn before_query(&self, ctx: &QueryContext) -> HookAction {
        HookAction::ModifySql(format!("/* {} */ {}", self.0, ctx.sql))
    }
}

#[test]
fn test_statement_kind_detection() {
    assert_eq!(StatementKind::from_sql("SELECT 1"), StatementKind::Select);
    assert_eq!(
        StatementKind::from_sql("FROM src \nINSERT OVERWRITE TABLE dst\nSELECT * "),
        StatementKind::Insert
    );
    assert_eq!(
        StatementKind::from_sql("  insert overwrite table t select 1"),
        StatementKind::Insert
    );
    assert_eq!(
        StatementKind::from_sql("CREATE EXTERNAL TABLE IF NOT EXISTS t (a int)"),
        StatementKind::Create
    );
    assert_eq!(StatementKind::from_sql("DROP TABLE t"), StatementKind::Drop);
    assert_eq!(
        StatementKind::from_sql("SET hive.map.aggr=false"),
        StatementKind::Set
    );
    assert_eq!(
        StatementKind::from_sql("-- lookup\nSHOW TABLES LIKE 't'"),
        StatementKind::Show
    );
    assert_eq!(
        StatementKind::from_sql("MSCK REPAIR TABLE t"),
        StatementKind::Other
    );
    assert_eq!(StatementKind::from_sql("SETTINGS"), StatementKind::Other);
}

#[test]
fn test_truncate_sql_bytes_respects_char_boundary() {
    assert_eq!(truncate_sql_bytes("SELECT 1", 100), "SELECT 1");
    assert_eq!(truncate_sql_bytes("SELECT 1", 3), "SEL");
    // 'é' is two bytes; cutting inside it backs off to the boundary.
    assert_eq!(truncate_sql_bytes("aé", 2), "a");
}

#[test]
fn test_query_result_error_truncated() {
    let long = "x".repeat(600);
    match QueryResult::error(long) {
        QueryResult::Error(msg) => {
            assert_eq!(msg.len(), 515);
            assert!(msg.ends_with("..."));
        }
        other => panic!("Expected Error, got {other:?}"),
    }
}

#[test]
fn test_logging_monitor_truncation() {
    let monitor = LoggingMonitor::new().max_sql_length(10);
    assert_eq!(monitor.truncate_sql("SELECT * FROM users"), "SELECT * F...");
    assert_eq!(monitor.truncate_sql("SELECT 1"), "SELECT 1");
}

#[test]
fn test_logging_monitor_line_is_single_line() {
    let monitor = LoggingMonitor::new().prefix("[etl]");
    let ctx = QueryContext::new("FROM src \nINSERT OVERWRITE TABLE dst\nSELECT * ").with_tag("daily");
    let line = monitor.format_line(&ctx, Duration::from_millis(5), &QueryResult::Executed);
    assert!(line.starts_with("[etl] [Insert] [daily]"));
    assert!(!line.contains('\n'));
    assert!(line.ends_with("| ok | FROM src  INSERT OVERWRITE TABLE dst SELECT * "));
}

#[test]
fn test_stats_monitor() {
    let monitor = StatsMonitor::new();
    let select = QueryContext::new("SELECT * FROM users");
    let hint = QueryContext::new("SET mapred.reduce.tasks=4");

    monitor.on_query_complete(&select, Duration::from_millis(10), &QueryResult::Executed);
    monitor.on_query_complete(&hint, Duration::from_millis(20), &QueryResult::Executed);
    monitor.on_query_complete(
        &QueryContext::new("DROP TABLE t"),
        Duration::from_millis(5),
        &QueryResult::error("boom".to_string()),
    );

    let stats = monitor.stats();
    assert_eq!(stats.total_queries, 3);
    assert_eq!(stats.failed_queries, 1);
    assert_eq!(stats.select_count, 1);
    assert_eq!(stats.hint_count, 1);
    assert_eq!(stats.ddl_count, 1);
    assert_eq!(stats.total_duration, Duration::from_millis(35));
    assert_eq!(stats.max_duration, Duration::from_millis(20));
    assert_eq!(
        stats.slowest_query.as_deref(),
        Some("SET mapred.reduce.tasks=4")
    );

    monitor.reset();
    let stats = monitor.stats();
    assert_eq!(stats.total_queries, 0);
    assert!(stats.slowest_query.is_none());
}

#[test]
fn test_composite_hook_modify_chains() {
    let hook = CompositeHook::new()
        .add(CommentHook("a"))
        .add(CommentHook("b"));
    let ctx = QueryContext::new("SELECT 1");

    match hook.before_query(&ctx) {
        HookAction::ModifySql(sql) => assert_eq!(sql, "/* b */ /* a */ SELECT 1"),
        other => panic!("Expected ModifySql, got {other:?}"),
    }
}

#[test]
fn test_composite_hook_abort() {
    let hook = CompositeHook::new().add(BlockDropHook).add(CommentHook("x"));

    let ctx = QueryContext::new("DROP TABLE t");
    assert!(matches!(hook.before_query(&ctx), HookAction::Abort(_)));

    let ctx = QueryContext::new("CREATE TABLE t (a int)");
    assert!(matches!(hook.before_query(&ctx), HookAction::ModifySql(_)));
}

#[test]
fn test_composite_monitor_fans_out() {
    let first = Arc::new(StatsMonitor::new());
    let second = Arc::new(StatsMonitor::new());
    let monitor = CompositeMonitor::new()
        .add_arc(first.clone())
        .add_arc(second.clone());

    monitor.on_query_complete(
        &QueryContext::new("SELECT 1"),
        Duration::from_millis(1),
        &QueryResult::Executed,
    );
    assert_eq!(first.stats().total_queries, 1);
    assert_eq!(second.stats().total_queries, 1);
}

#[test]
fn test_instrumented_client_reports_calls() {
    let capture = Arc::new(CapturingMonitor::default());
    let client = InstrumentedClient::new(RecordingClient::with_rows(vec![Row::from(vec!["t"])]))
        .with_monitor_arc(capture.clone())
        .enable_monitoring();

    client.execute("SHOW TABLES LIKE 't'").unwrap();
    let rows = client.fetch().unwrap();
    assert_eq!(rows.len(), 1);

    let seen = capture.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, StatementKind::Show);
    assert_eq!(seen[0].2, "ok");
    assert_eq!(seen[1].0, StatementKind::Fetch);
    assert_eq!(seen[1].2, "1 rows");
}

#[test]
fn test_instrumented_client_disabled_reports_nothing() {
    let capture = Arc::new(CapturingMonitor::default());
    let client = InstrumentedClient::new(RecordingClient::new()).with_monitor_arc(capture.clone());

    assert!(!client.is_monitoring_enabled());
    client.execute("SELECT 1").unwrap();
    assert!(capture.seen().is_empty());
}

#[test]
fn test_instrumented_client_reports_failures() {
    let capture = Arc::new(CapturingMonitor::default());
    let client = InstrumentedClient::new(RecordingClient::failing_on("DROP"))
        .with_monitor_arc(capture.clone())
        .enable_monitoring();

    assert!(client.execute("DROP TABLE t").is_err());
    let seen = capture.seen();
    assert_eq!(seen[0].2, "error: engine rejected: DROP");
}

#[test]
fn test_instrumented_client_hook_abort_skips_inner() {
    let client = InstrumentedClient::new(RecordingClient::new()).with_hook(BlockDropHook);

    let err = client.execute("DROP TABLE t").unwrap_err();
    assert_eq!(err.to_string(), "statement aborted by hook: DROP not allowed");
    assert!(client.inner().executed().is_empty());
}

#[test]
fn test_instrumented_client_hook_rewrites() {
    let client = InstrumentedClient::new(RecordingClient::new())
        .add_hook(CommentHook("etl"))
        .add_hook(BlockDropHook);

    client.execute("SELECT 1").unwrap();
    assert_eq!(client.inner().executed(), vec!["/* etl */ SELECT 1"]);
    // The rewritten text still classifies as DROP and is blocked.
    assert!(client.execute("DROP TABLE t").is_err());
}

/// Sleeps before delegating so every call crosses a small threshold.
struct SleepyClient(RecordingClient);
impl HiveClient for SleepyClient {
    fn execute(&self, sql: &str) -> Result<(), crate::error::ClientError> {
        std::thread::sleep(Duration::from_millis(5));
        self.0.execute(sql)
    }

    fn fetch(&self) -> Result<Vec<Row>, crate::error::ClientError> {
        self.0.fetch()
    }
}

#[test]
fn test_slow_query_threshold() {
    let capture = Arc::new(CapturingMonitor::default());
    let client = InstrumentedClient::new(SleepyClient(RecordingClient::new()))
        .with_config(
            MonitorConfig::new()
                .with_slow_query_threshold(Duration::from_millis(1))
                .enable_monitoring(),
        )
        .with_monitor_arc(capture.clone());

    client.execute("SELECT 1").unwrap();
    assert_eq!(capture.seen().len(), 1);
    assert_eq!(*capture.slow.lock().unwrap(), 1);

    let capture = Arc::new(CapturingMonitor::default());
    let client = InstrumentedClient::new(RecordingClient::new())
        .with_config(
            MonitorConfig::new()
                .with_slow_query_threshold(Duration::from_secs(3600))
                .enable_monitoring(),
        )
        .with_monitor_arc(capture.clone());
    client.execute("SELECT 1").unwrap();
    assert_eq!(*capture.slow.lock().unwrap(), 0);
}

#[test]
fn test_query_builder_through_instrumented_client() {
    let stats = Arc::new(StatsMonitor::new());
    let client = InstrumentedClient::new(RecordingClient::new())
        .with_monitor_arc(stats.clone())
        .enable_monitoring();

    QueryBuilder::new(&client)
        .from_table("src", None)
        .insert(Insert::table("dst"))
        .unwrap()
        .select("*")
        .with_dynamic_partitioning()
        .with_reducer_count(8)
        .execute_query()
        .unwrap();

    let stats = stats.stats();
    assert_eq!(stats.total_queries, 3);
    assert_eq!(stats.hint_count, 2);
    assert_eq!(stats.insert_count, 1);
}

#[cfg(feature = "tracing")]
#[test]
fn test_tracing_hook_passes_through() {
    let hook = TracingSqlHook::new().max_sql_length(6);
    assert_eq!(hook.truncate_sql("SELECT 1"), "SELECT...");
    assert_eq!(hook.clone().no_truncate().truncate_sql("SELECT 1"), "SELECT 1");

    let client = InstrumentedClient::new(RecordingClient::new()).with_hook(hook);
    client.execute("SELECT 1").unwrap();
    assert_eq!(client.inner().executed(), vec!["SELECT 1"]);
}
