//! Result rows returned by [`HiveClient::fetch`](crate::client::HiveClient::fetch).

use serde_json::Value;

/// One fetched result row.
///
/// Cells are kept as dynamic JSON values since engine drivers hand back
/// loosely typed tuples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Cell at `idx`, if present.
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    /// Cell at `idx` as a string slice, if it is a string.
    pub fn get_str(&self, idx: usize) -> Option<&str> {
        self.values.get(idx).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl From<Vec<&str>> for Row {
    fn from(values: Vec<&str>) -> Self {
        Self::new(values.into_iter().map(Value::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_accessors() {
        let row = Row::new(vec![json!("events"), json!(3)]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get_str(0), Some("events"));
        assert_eq!(row.get_str(1), None);
        assert_eq!(row.get(1), Some(&json!(3)));
        assert!(row.get(2).is_none());
    }

    #[test]
    fn row_from_strs() {
        let row = Row::from(vec!["a", "b"]);
        assert_eq!(row.values(), &[json!("a"), json!("b")]);
        assert!(!row.is_empty());
    }
}
