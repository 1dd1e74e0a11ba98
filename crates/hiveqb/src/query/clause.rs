//! Typed clause fragments and their rendering.
//!
//! Each fragment renders exactly as the engine expects it inside a
//! multi-line `FROM ... INSERT ... SELECT ...` statement, including the
//! trailing space most fragments carry.

use crate::error::{HiveError, HiveResult};
use crate::sql::quote_literal;
use std::fmt;

/// Base relation of the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub table: String,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(table: &str, alias: Option<&str>) -> Self {
        Self {
            table: table.to_string(),
            alias: alias.filter(|a| !a.is_empty()).map(str::to_string),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "FROM {} {} ", self.table, alias),
            None => write!(f, "FROM {} ", self.table),
        }
    }
}

/// Kind of JOIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}

impl JoinKind {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "JOIN",
            JoinKind::LeftOuter => "LEFT OUTER JOIN",
            JoinKind::RightOuter => "RIGHT OUTER JOIN",
            JoinKind::FullOuter => "FULL OUTER JOIN",
        }
    }
}

/// One JOIN fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub alias: String,
    /// `None` renders the join without an ON predicate.
    pub condition: Option<String>,
}

impl Join {
    pub fn new(kind: JoinKind, table: &str, alias: &str, condition: Option<&str>) -> Self {
        Self {
            kind,
            table: table.to_string(),
            alias: alias.to_string(),
            condition: condition.filter(|c| !c.is_empty()).map(str::to_string),
        }
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.kind.keyword(), self.table, self.alias)?;
        if let Some(cond) = &self.condition {
            write!(f, "ON ({cond}) ")?;
        }
        Ok(())
    }
}

/// Where an INSERT writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertTarget {
    Table {
        name: String,
        partition: Option<String>,
    },
    Directory(String),
}

/// A validated INSERT fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertClause {
    pub target: InsertTarget,
    pub overwrite: bool,
}

impl fmt::Display for InsertClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            InsertTarget::Table { name, partition } => {
                if self.overwrite {
                    write!(f, "INSERT OVERWRITE TABLE {name}")?;
                } else {
                    write!(f, "INSERT INTO TABLE {name}")?;
                }
                if let Some(p) = partition {
                    write!(f, " PARTITION ({p})")?;
                }
                Ok(())
            }
            InsertTarget::Directory(dir) => {
                write!(f, "INSERT OVERWRITE DIRECTORY {}", quote_literal(dir))
            }
        }
    }
}

/// INSERT request as supplied by the caller.
///
/// Either a table or a directory must be given; empty strings count as
/// absent. When both are given the directory wins. `overwrite` defaults to
/// `true`.
///
/// # Example
///
/// ```rust
/// use hiveqb::Insert;
///
/// let clause = Insert::table("daily").partition("dt='2024-01-01'").resolve().unwrap();
/// assert_eq!(
///     clause.to_string(),
///     "INSERT OVERWRITE TABLE daily PARTITION (dt='2024-01-01')"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    table: Option<String>,
    directory: Option<String>,
    partition: Option<String>,
    overwrite: bool,
}

impl Default for Insert {
    fn default() -> Self {
        Self {
            table: None,
            directory: None,
            partition: None,
            overwrite: true,
        }
    }
}

impl Insert {
    /// Empty request; fill it with the setters below.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert into a table.
    pub fn table(table: &str) -> Self {
        Self::new().with_table(table)
    }

    /// Insert into a filesystem directory.
    pub fn directory(directory: &str) -> Self {
        Self::new().with_directory(directory)
    }

    pub fn with_table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn with_directory(mut self, directory: &str) -> Self {
        self.directory = Some(directory.to_string());
        self
    }

    /// Partition spec for table inserts, e.g. `dt='2024-01-01'`.
    pub fn partition(mut self, partition: &str) -> Self {
        self.partition = Some(partition.to_string());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Validate the request into a renderable clause.
    pub fn resolve(self) -> HiveResult<InsertClause> {
        let table = self.table.filter(|t| !t.is_empty());
        let directory = self.directory.filter(|d| !d.is_empty());
        let target = match (table, directory) {
            (_, Some(dir)) => {
                if !self.overwrite {
                    return Err(HiveError::query_build(format!(
                        "INSERT into directory '{dir}' must overwrite"
                    )));
                }
                InsertTarget::Directory(dir)
            }
            (Some(name), None) => InsertTarget::Table {
                name,
                partition: self.partition.filter(|p| !p.is_empty()),
            },
            (None, None) => {
                return Err(HiveError::query_build(
                    "INSERT needs a target: neither table nor directory specified",
                ));
            }
        };
        Ok(InsertClause {
            target,
            overwrite: self.overwrite,
        })
    }
}

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// ORDER BY fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: SortDirection,
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORDER BY {} {} ", self.column, self.direction.keyword())
    }
}

/// Session-scoped execution parameter, submitted before the main statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionHint {
    /// Allow fully dynamic partition inserts.
    DynamicPartitioning,
    /// Disable map-side aggregation to reduce memory pressure.
    MemoryConservative,
    /// Fix the number of reduce tasks.
    ReducerCount(u32),
}

impl fmt::Display for SessionHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionHint::DynamicPartitioning => {
                f.write_str("SET hive.exec.dynamic.partition.mode=nonstrict;")
            }
            SessionHint::MemoryConservative => f.write_str("SET hive.map.aggr=false"),
            SessionHint::ReducerCount(n) => write!(f, "SET mapred.reduce.tasks={n}"),
        }
    }
}

/// The set of session hints a statement carries.
///
/// Stored as flags so the dispatch order never depends on call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionHints {
    pub dynamic_partitioning: bool,
    pub memory_conservative: bool,
    pub reducers: Option<u32>,
}

impl SessionHints {
    pub fn is_empty(&self) -> bool {
        !self.dynamic_partitioning && !self.memory_conservative && self.reducers.is_none()
    }

    /// Hints in dispatch order: dynamic partitioning, memory, reducers.
    pub fn to_vec(&self) -> Vec<SessionHint> {
        let mut hints = Vec::with_capacity(3);
        if self.dynamic_partitioning {
            hints.push(SessionHint::DynamicPartitioning);
        }
        if self.memory_conservative {
            hints.push(SessionHint::MemoryConservative);
        }
        if let Some(n) = self.reducers {
            hints.push(SessionHint::ReducerCount(n));
        }
        hints
    }
}
