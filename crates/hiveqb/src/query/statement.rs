//! Client-free statement value.

use super::clause::{
    Insert, InsertClause, Join, JoinKind, OrderBy, SessionHint, SessionHints, SortDirection,
    TableRef,
};
use crate::error::{HiveError, HiveResult};

/// Accumulated clauses of one `FROM ... INSERT ... SELECT ...` statement.
///
/// Setters consume the value and return the updated one, so a `Statement`
/// can be cloned at any point and each copy evolves independently.
/// Rendering never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    from: Option<TableRef>,
    joins: Vec<Join>,
    insert: Option<InsertClause>,
    select: Option<String>,
    /// First entry is the WHERE condition, the rest are ANDed onto it.
    filters: Vec<String>,
    group_by: Vec<String>,
    order_by: Option<OrderBy>,
    sort_by: Option<String>,
    unions: Vec<String>,
    hints: SessionHints,
}

/// Output of [`Statement::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQuery {
    /// Statement text to submit.
    pub text: String,
    /// Session hints to submit first, in dispatch order.
    pub hints: Vec<SessionHint>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base relation, replacing any previous one.
    pub fn from_table(mut self, table: &str, alias: Option<&str>) -> Self {
        self.from = Some(TableRef::new(table, alias));
        self
    }

    /// Append a join of the given kind.
    pub fn join_kind(
        mut self,
        kind: JoinKind,
        table: &str,
        alias: &str,
        condition: Option<&str>,
    ) -> Self {
        self.joins.push(Join::new(kind, table, alias, condition));
        self
    }

    pub fn join(self, table: &str, alias: &str, condition: Option<&str>) -> Self {
        self.join_kind(JoinKind::Inner, table, alias, condition)
    }

    pub fn left_outer_join(self, table: &str, alias: &str, condition: Option<&str>) -> Self {
        self.join_kind(JoinKind::LeftOuter, table, alias, condition)
    }

    pub fn right_outer_join(self, table: &str, alias: &str, condition: Option<&str>) -> Self {
        self.join_kind(JoinKind::RightOuter, table, alias, condition)
    }

    pub fn full_outer_join(self, table: &str, alias: &str, condition: Option<&str>) -> Self {
        self.join_kind(JoinKind::FullOuter, table, alias, condition)
    }

    /// Set the INSERT target, replacing any previous one.
    ///
    /// Fails with [`HiveError::QueryBuild`] when neither a table nor a
    /// directory is given.
    pub fn insert(mut self, insert: Insert) -> HiveResult<Self> {
        self.insert = Some(insert.resolve()?);
        Ok(self)
    }

    /// Set the projection, replacing any previous one.
    pub fn select(mut self, projection: &str) -> Self {
        self.select = Some(projection.to_string());
        self
    }

    /// Set the filter, discarding any earlier conditions.
    pub fn where_(mut self, condition: &str) -> Self {
        self.filters.clear();
        self.filters.push(condition.to_string());
        self
    }

    /// AND another condition onto the filter set by [`Statement::where_`].
    pub fn and_where(mut self, condition: &str) -> HiveResult<Self> {
        if self.filters.is_empty() {
            return Err(HiveError::precondition(
                "and_where called before where_ initialized the filter",
            ));
        }
        self.filters.push(condition.to_string());
        Ok(self)
    }

    /// Set the GROUP BY columns. An empty list clears the clause.
    pub fn group_by<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.group_by = columns.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Set ORDER BY; direction defaults to ascending.
    pub fn order_by(mut self, column: &str, direction: Option<SortDirection>) -> Self {
        self.order_by = Some(OrderBy {
            column: column.to_string(),
            direction: direction.unwrap_or_default(),
        });
        self
    }

    pub fn sort_by(mut self, content: &str) -> Self {
        self.sort_by = Some(content.to_string());
        self
    }

    /// Append a `UNION ALL` branch. Branches render in call order.
    pub fn union_all(mut self, query: &str) -> Self {
        self.unions.push(query.to_string());
        self
    }

    pub fn with_dynamic_partitioning(mut self) -> Self {
        self.hints.dynamic_partitioning = true;
        self
    }

    pub fn with_memory_conservative_mode(mut self) -> Self {
        self.hints.memory_conservative = true;
        self
    }

    pub fn with_reducer_count(mut self, reducers: u32) -> Self {
        self.hints.reducers = Some(reducers);
        self
    }

    /// Drop all session hints.
    pub fn clear_hints(mut self) -> Self {
        self.hints = SessionHints::default();
        self
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn hints(&self) -> &SessionHints {
        &self.hints
    }

    fn missing_clause_error(&self) -> HiveError {
        let mut missing = Vec::new();
        if self.from.is_none() {
            missing.push("FROM");
        }
        if self.insert.is_none() {
            missing.push("INSERT");
        }
        if self.select.is_none() {
            missing.push("SELECT");
        }
        HiveError::query_build(format!(
            "missing required clause(s): {}",
            missing.join(", ")
        ))
    }

    /// Check that FROM, INSERT and SELECT are all present.
    pub fn validate(&self) -> HiveResult<()> {
        if self.from.is_some() && self.insert.is_some() && self.select.is_some() {
            Ok(())
        } else {
            Err(self.missing_clause_error())
        }
    }

    /// Render the statement text and the hints that must precede it.
    ///
    /// Clause order is fixed: FROM, joins, INSERT, SELECT, WHERE, GROUP BY,
    /// ORDER BY, SORT BY, UNION ALL branches; one line each, with all joins
    /// sharing a line.
    pub fn render(&self) -> HiveResult<RenderedQuery> {
        let (Some(from), Some(insert), Some(select)) = (&self.from, &self.insert, &self.select)
        else {
            return Err(self.missing_clause_error());
        };

        let mut lines: Vec<String> = Vec::with_capacity(8 + self.unions.len());
        lines.push(from.to_string());

        if !self.joins.is_empty() {
            let joins: Vec<String> = self.joins.iter().map(Join::to_string).collect();
            lines.push(joins.join(" "));
        }

        lines.push(insert.to_string());
        lines.push(format!("SELECT {select} "));

        if !self.filters.is_empty() {
            let mut filter = String::from("WHERE ");
            for (i, cond) in self.filters.iter().enumerate() {
                if i > 0 {
                    filter.push_str("AND ");
                }
                filter.push_str(cond);
                filter.push(' ');
            }
            lines.push(filter);
        }

        if !self.group_by.is_empty() {
            lines.push(format!("GROUP BY {} ", self.group_by.join(",")));
        }

        if let Some(order) = &self.order_by {
            lines.push(order.to_string());
        }

        if let Some(sort) = &self.sort_by {
            lines.push(format!("SORT BY {sort} "));
        }

        for query in &self.unions {
            lines.push(format!("UNION ALL {query} "));
        }

        Ok(RenderedQuery {
            text: lines.join("\n"),
            hints: self.hints.to_vec(),
        })
    }

    /// Render just the statement text.
    pub fn to_sql(&self) -> HiveResult<String> {
        self.render().map(|r| r.text)
    }
}
