use super::clause::{Insert, JoinKind, SortDirection};
use super::statement::Statement;
use crate::catalog;
use crate::client::HiveClient;
use crate::error::{HiveError, HiveResult};

/// Statement builder bound to an execution client.
///
/// Every setter takes the builder by value and returns the updated builder,
/// so calls chain in any order while [`QueryBuilder::build_query_text`]
/// always renders clauses in the same fixed order. The fallible setters
/// ([`insert`](QueryBuilder::insert), [`and_where`](QueryBuilder::and_where))
/// return `HiveResult<Self>` and chain with `?`.
///
/// # Example
///
/// ```rust,ignore
/// use hiveqb::{Insert, QueryBuilder};
///
/// QueryBuilder::new(&client)
///     .from_table("events", Some("e"))
///     .join("users", "u", Some("e.user_id=u.id"))
///     .insert(Insert::table("daily_events").partition("dt='2024-01-01'"))?
///     .select("e.*")
///     .where_("e.kind='click'")
///     .with_reducer_count(16)
///     .execute_query()?;
/// ```
pub struct QueryBuilder<'c, C: HiveClient + ?Sized> {
    client: &'c C,
    statement: Statement,
}

impl<'c, C: HiveClient + ?Sized> QueryBuilder<'c, C> {
    /// Create an empty builder bound to `client`.
    pub fn new(client: &'c C) -> Self {
        Self {
            client,
            statement: Statement::new(),
        }
    }

    /// Bind an already assembled statement to `client`.
    pub fn from_statement(client: &'c C, statement: Statement) -> Self {
        Self { client, statement }
    }

    /// The accumulated clauses.
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Unbind the statement from the client.
    pub fn into_statement(self) -> Statement {
        self.statement
    }

    fn map(mut self, f: impl FnOnce(Statement) -> Statement) -> Self {
        self.statement = f(self.statement);
        self
    }

    fn try_map(mut self, f: impl FnOnce(Statement) -> HiveResult<Statement>) -> HiveResult<Self> {
        self.statement = f(self.statement)?;
        Ok(self)
    }

    // ==================== Clauses ====================

    /// Set the base relation (`FROM <table> [<alias>]`).
    pub fn from_table(self, table: &str, alias: Option<&str>) -> Self {
        self.map(|s| s.from_table(table, alias))
    }

    /// Add `JOIN <table> <alias> [ON (<condition>)]`.
    pub fn join(self, table: &str, alias: &str, condition: Option<&str>) -> Self {
        self.map(|s| s.join_kind(JoinKind::Inner, table, alias, condition))
    }

    /// Add `LEFT OUTER JOIN`.
    pub fn left_outer_join(self, table: &str, alias: &str, condition: Option<&str>) -> Self {
        self.map(|s| s.join_kind(JoinKind::LeftOuter, table, alias, condition))
    }

    /// Add `RIGHT OUTER JOIN`.
    pub fn right_outer_join(self, table: &str, alias: &str, condition: Option<&str>) -> Self {
        self.map(|s| s.join_kind(JoinKind::RightOuter, table, alias, condition))
    }

    /// Add `FULL OUTER JOIN`.
    pub fn full_outer_join(self, table: &str, alias: &str, condition: Option<&str>) -> Self {
        self.map(|s| s.join_kind(JoinKind::FullOuter, table, alias, condition))
    }

    /// Set the INSERT target.
    pub fn insert(self, insert: Insert) -> HiveResult<Self> {
        self.try_map(|s| s.insert(insert))
    }

    pub fn select(self, projection: &str) -> Self {
        self.map(|s| s.select(projection))
    }

    pub fn where_(self, condition: &str) -> Self {
        self.map(|s| s.where_(condition))
    }

    /// Append `AND <condition>`; requires a prior [`QueryBuilder::where_`].
    pub fn and_where(self, condition: &str) -> HiveResult<Self> {
        self.try_map(|s| s.and_where(condition))
    }

    pub fn group_by<S: AsRef<str>>(self, columns: &[S]) -> Self {
        self.map(|s| s.group_by(columns))
    }

    pub fn order_by(self, column: &str, direction: Option<SortDirection>) -> Self {
        self.map(|s| s.order_by(column, direction))
    }

    pub fn sort_by(self, content: &str) -> Self {
        self.map(|s| s.sort_by(content))
    }

    pub fn union_all(self, query: &str) -> Self {
        self.map(|s| s.union_all(query))
    }

    // ==================== Session hints ====================

    /// `SET hive.exec.dynamic.partition.mode=nonstrict;` before the statement.
    pub fn with_dynamic_partitioning(self) -> Self {
        self.map(Statement::with_dynamic_partitioning)
    }

    /// `SET hive.map.aggr=false` before the statement.
    pub fn with_memory_conservative_mode(self) -> Self {
        self.map(Statement::with_memory_conservative_mode)
    }

    /// `SET mapred.reduce.tasks=<n>` before the statement.
    pub fn with_reducer_count(self, reducers: u32) -> Self {
        self.map(|s| s.with_reducer_count(reducers))
    }

    pub fn clear_hints(self) -> Self {
        self.map(Statement::clear_hints)
    }

    // ==================== Render & execute ====================

    /// Render the statement and submit its session hints.
    ///
    /// Validation happens first: a missing FROM, INSERT or SELECT fails with
    /// [`HiveError::QueryBuild`] before anything reaches the client. The hints
    /// are then submitted one by one (a hint failure surfaces as
    /// [`HiveError::Client`]) and the text is returned, not executed.
    ///
    /// Hints are re-submitted on every call.
    pub fn build_query_text(&self) -> HiveResult<String> {
        let rendered = self.statement.render()?;
        for hint in &rendered.hints {
            self.client.execute(&hint.to_string())?;
        }
        Ok(rendered.text)
    }

    /// Render, submit the hints, then submit the statement.
    ///
    /// Client failures, for hints and statement alike, are wrapped in
    /// [`HiveError::QueryExecution`]; validation errors pass through unchanged.
    pub fn execute_query(&self) -> HiveResult<()> {
        let rendered = self.statement.render()?;
        for hint in &rendered.hints {
            self.client
                .execute(&hint.to_string())
                .map_err(HiveError::QueryExecution)?;
        }
        self.client
            .execute(&rendered.text)
            .map_err(HiveError::QueryExecution)
    }

    /// Check whether a table matching `pattern` exists.
    pub fn table_exists(&self, pattern: &str) -> HiveResult<bool> {
        catalog::table_exists(self.client, pattern)
    }
}

impl<C: HiveClient + ?Sized> Clone for QueryBuilder<'_, C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            statement: self.statement.clone(),
        }
    }
}

impl<C: HiveClient + ?Sized> std::fmt::Debug for QueryBuilder<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("statement", &self.statement)
            .finish_non_exhaustive()
    }
}
