use crate::sql::{starts_with_keyword, strip_sql_prefix};
use std::fmt;
use std::time::Duration;

/// What kind of statement went to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Plain SELECT
    Select,
    /// `FROM ... INSERT ...` or `INSERT ...`
    Insert,
    /// CREATE TABLE
    Create,
    /// DROP TABLE
    Drop,
    /// Session hint (`SET ...`)
    Set,
    /// Catalog lookup (`SHOW ...`)
    Show,
    /// Result fetch after a statement
    Fetch,
    /// Anything else
    Other,
}

impl StatementKind {
    /// Classify a statement by its leading keyword.
    pub fn from_sql(sql: &str) -> Self {
        let trimmed = strip_sql_prefix(sql);
        if starts_with_keyword(trimmed, "SELECT") {
            StatementKind::Select
        } else if starts_with_keyword(trimmed, "FROM") || starts_with_keyword(trimmed, "INSERT") {
            StatementKind::Insert
        } else if starts_with_keyword(trimmed, "CREATE") {
            StatementKind::Create
        } else if starts_with_keyword(trimmed, "DROP") {
            StatementKind::Drop
        } else if starts_with_keyword(trimmed, "SET") {
            StatementKind::Set
        } else if starts_with_keyword(trimmed, "SHOW") {
            StatementKind::Show
        } else {
            StatementKind::Other
        }
    }
}

/// Context information about the statement being executed.
#[derive(Debug, Clone)]
pub struct QueryContext {
    /// The statement sent to the engine.
    pub sql: String,
    /// Detected statement kind.
    pub kind: StatementKind,
    /// Optional tag for identification.
    pub tag: Option<String>,
}

impl QueryContext {
    pub fn new(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
            kind: StatementKind::from_sql(sql),
            tag: None,
        }
    }

    /// Context for a result fetch; carries no statement text.
    pub fn fetch() -> Self {
        Self {
            sql: String::new(),
            kind: StatementKind::Fetch,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Maximum length for error messages in `QueryResult::Error`.
const MAX_ERROR_LEN: usize = 512;

/// Outcome of one client call, for monitoring purposes.
#[derive(Debug, Clone)]
pub enum QueryResult {
    /// Statement accepted.
    Executed,
    /// Fetch returned rows.
    Rows(usize),
    /// Call failed (message truncated to 512 bytes).
    Error(String),
}

impl QueryResult {
    pub fn error(msg: String) -> Self {
        if msg.len() > MAX_ERROR_LEN {
            Self::Error(format!("{}...", super::truncate_sql_bytes(&msg, MAX_ERROR_LEN)))
        } else {
            Self::Error(msg)
        }
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResult::Executed => f.write_str("ok"),
            QueryResult::Rows(n) => write!(f, "{n} rows"),
            QueryResult::Error(e) => write!(f, "error: {e}"),
        }
    }
}

/// Receives timing and outcome of every monitored client call.
pub trait QueryMonitor: Send + Sync {
    /// Called before a statement is executed.
    fn on_query_start(&self, _ctx: &QueryContext) {}

    /// Called after a call completes (success or failure).
    fn on_query_complete(&self, ctx: &QueryContext, duration: Duration, result: &QueryResult);

    /// Called when a call runs past the slow threshold.
    fn on_slow_query(&self, _ctx: &QueryContext, _duration: Duration) {}
}

/// Action to take after a hook inspects a statement.
#[derive(Debug, Clone)]
pub enum HookAction {
    /// Continue with the original statement.
    Continue,
    /// Execute this statement instead.
    ModifySql(String),
    /// Refuse to execute.
    Abort(String),
}

/// Inspect, rewrite or block statements before they reach the engine.
pub trait QueryHook: Send + Sync {
    fn before_query(&self, ctx: &QueryContext) -> HookAction {
        let _ = ctx;
        HookAction::Continue
    }

    /// Called after a statement completes; runs before monitors see it.
    fn after_query(&self, _ctx: &QueryContext, _duration: Duration, _result: &QueryResult) {}
}
