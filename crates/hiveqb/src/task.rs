//! Task identifiers used to give per-run tables unique names.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of the job run that owns a table.
///
/// When attached to a table definition the final table name becomes
/// `<table>_<task_id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id without hyphens, so it stays a valid identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<Uuid> for TaskId {
    fn from(id: Uuid) -> Self {
        Self(id.simple().to_string())
    }
}

/// `<base>_<task_id>`, or `base` unchanged when there is no (or an empty) id.
pub fn suffixed_name(base: &str, task_id: Option<&TaskId>) -> String {
    match task_id {
        Some(id) if !id.is_empty() => format!("{base}_{id}"),
        _ => base.to_string(),
    }
}
