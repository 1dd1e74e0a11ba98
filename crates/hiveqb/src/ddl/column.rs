use crate::sql::join_with;
use serde::{Deserialize, Serialize};

/// A column definition: `<name> <type>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

impl From<(&str, &str)> for Column {
    fn from((name, data_type): (&str, &str)) -> Self {
        Self::new(name, data_type)
    }
}

/// A column backed by a cell in the key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    /// `<family>:<qualifier>` in the external store.
    pub mapping: String,
}

impl MappedColumn {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        mapping: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            mapping: mapping.into(),
        }
    }
}

impl From<(&str, &str, &str)> for MappedColumn {
    fn from((name, data_type, mapping): (&str, &str, &str)) -> Self {
        Self::new(name, data_type, mapping)
    }
}

/// `a string,b int`
pub(crate) fn column_defs(columns: &[Column]) -> String {
    join_with(columns, ",", |c, out| {
        out.push_str(&c.name);
        out.push(' ');
        out.push_str(&c.data_type);
    })
}

/// `a string,b int` for mapped columns.
pub(crate) fn mapped_column_defs(columns: &[MappedColumn]) -> String {
    join_with(columns, ",", |c, out| {
        out.push_str(&c.name);
        out.push(' ');
        out.push_str(&c.data_type);
    })
}

/// `k1:string,k2:int`, the field list of a struct type.
pub(crate) fn struct_fields(columns: &[Column]) -> String {
    join_with(columns, ",", |c, out| {
        out.push_str(&c.name);
        out.push(':');
        out.push_str(&c.data_type);
    })
}
