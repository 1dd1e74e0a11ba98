use super::config::MonitorConfig;
use super::monitors::{CompositeHook, NoopMonitor};
use super::types::{HookAction, QueryContext, QueryHook, QueryMonitor, QueryResult, StatementKind};
use crate::client::HiveClient;
use crate::error::ClientError;
use crate::row::Row;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A client wrapper that reports every call to a monitor.
///
/// Monitoring must be explicitly enabled via `MonitorConfig::enable_monitoring()`.
/// Hooks run regardless, so a blocking hook still blocks when monitoring is off.
pub struct InstrumentedClient<C> {
    client: C,
    monitor: Arc<dyn QueryMonitor>,
    hook: Option<Arc<dyn QueryHook>>,
    config: MonitorConfig,
}

impl<C: HiveClient> InstrumentedClient<C> {
    /// Wrap `client` with no monitoring.
    pub fn new(client: C) -> Self {
        Self {
            client,
            monitor: Arc::new(NoopMonitor),
            hook: None,
            config: MonitorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MonitorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_monitor<M: QueryMonitor + 'static>(mut self, monitor: M) -> Self {
        self.monitor = Arc::new(monitor);
        self
    }

    /// Set the monitor from an Arc, keeping a handle for later inspection.
    pub fn with_monitor_arc(mut self, monitor: Arc<dyn QueryMonitor>) -> Self {
        self.monitor = monitor;
        self
    }

    /// Replace the hook.
    pub fn with_hook<H: QueryHook + 'static>(mut self, hook: H) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Add a hook after any existing one.
    pub fn add_hook<H: QueryHook + 'static>(self, hook: H) -> Self {
        self.add_hook_arc(Arc::new(hook))
    }

    pub fn add_hook_arc(mut self, hook: Arc<dyn QueryHook>) -> Self {
        self.hook = Some(match self.hook.take() {
            None => hook,
            Some(existing) => Arc::new(CompositeHook::new().add_arc(existing).add_arc(hook)),
        });
        self
    }

    pub fn enable_monitoring(mut self) -> Self {
        self.config.monitoring_enabled = true;
        self
    }

    pub fn is_monitoring_enabled(&self) -> bool {
        self.config.monitoring_enabled
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn inner(&self) -> &C {
        &self.client
    }

    pub fn into_inner(self) -> C {
        self.client
    }

    fn apply_hook(&self, ctx: &mut QueryContext) -> Result<(), ClientError> {
        let Some(hook) = &self.hook else {
            return Ok(());
        };

        match hook.before_query(ctx) {
            HookAction::Continue => Ok(()),
            HookAction::ModifySql(sql) => {
                ctx.kind = StatementKind::from_sql(&sql);
                ctx.sql = sql;
                Ok(())
            }
            HookAction::Abort(reason) => Err(ClientError::msg(format!(
                "statement aborted by hook: {reason}"
            ))),
        }
    }

    fn report_result(&self, ctx: &QueryContext, duration: Duration, result: &QueryResult) {
        if !self.config.monitoring_enabled {
            return;
        }

        if let Some(hook) = &self.hook {
            hook.after_query(ctx, duration, result);
        }

        self.monitor.on_query_complete(ctx, duration, result);

        if let Some(threshold) = self.config.slow_query_threshold {
            if duration > threshold {
                self.monitor.on_slow_query(ctx, duration);
            }
        }
    }
}

impl<C: HiveClient> HiveClient for InstrumentedClient<C> {
    fn execute(&self, sql: &str) -> Result<(), ClientError> {
        let mut ctx = QueryContext::new(sql);
        self.apply_hook(&mut ctx)?;

        if self.config.monitoring_enabled {
            self.monitor.on_query_start(&ctx);
        }

        let start = Instant::now();
        let result = self.client.execute(&ctx.sql);
        let duration = start.elapsed();

        let outcome = match &result {
            Ok(()) => QueryResult::Executed,
            Err(e) => QueryResult::error(e.to_string()),
        };
        self.report_result(&ctx, duration, &outcome);
        result
    }

    fn fetch(&self) -> Result<Vec<Row>, ClientError> {
        let ctx = QueryContext::fetch();

        if self.config.monitoring_enabled {
            self.monitor.on_query_start(&ctx);
        }

        let start = Instant::now();
        let result = self.client.fetch();
        let duration = start.elapsed();

        let outcome = match &result {
            Ok(rows) => QueryResult::Rows(rows.len()),
            Err(e) => QueryResult::error(e.to_string()),
        };
        self.report_result(&ctx, duration, &outcome);
        result
    }
}

impl<C> std::fmt::Debug for InstrumentedClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstrumentedClient")
            .field("config", &self.config)
            .field("has_hook", &self.hook.is_some())
            .finish_non_exhaustive()
    }
}
