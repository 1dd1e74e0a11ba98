//! Multi-clause `FROM ... INSERT ... SELECT ...` statement builder.
//!
//! ## Design
//!
//! - [`Statement`] is a plain value: clauses accumulate through consuming
//!   setters and [`Statement::render`] is pure.
//! - [`QueryBuilder`] binds a statement to a [`HiveClient`] and adds the
//!   side effects: session hints are submitted at render time, and
//!   [`QueryBuilder::execute_query`] submits the result.
//! - Clause order in the output is fixed no matter the call order.
//!
//! ```rust
//! use hiveqb::{Insert, Statement};
//!
//! let sql = Statement::new()
//!     .from_table("t1", Some("a"))
//!     .join("t2", "b", Some("a.id=b.id"))
//!     .insert(Insert::table("out"))?
//!     .select("a.*")
//!     .where_("a.x>1")
//!     .group_by(&["a.y"])
//!     .to_sql()?;
//!
//! assert_eq!(
//!     sql,
//!     "FROM t1 a \nJOIN t2 b ON (a.id=b.id) \nINSERT OVERWRITE TABLE out\nSELECT a.* \nWHERE a.x>1 \nGROUP BY a.y "
//! );
//! # Ok::<(), hiveqb::HiveError>(())
//! ```

mod builder;
mod clause;
mod statement;

pub use builder::QueryBuilder;
pub use clause::{
    Insert, InsertClause, InsertTarget, Join, JoinKind, OrderBy, SessionHint, SessionHints,
    SortDirection, TableRef,
};
pub use statement::{RenderedQuery, Statement};

use crate::client::HiveClient;
use crate::error::{HiveError, HiveResult};

/// Submit a hand-written statement.
///
/// Client failures are wrapped in [`HiveError::QueryExecution`].
pub fn execute_raw<C: HiveClient + ?Sized>(client: &C, sql: &str) -> HiveResult<()> {
    client.execute(sql).map_err(HiveError::QueryExecution)
}
