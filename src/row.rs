//! Row type for drained cursor results.

use std::sync::Arc;

use crate::value::OracleValue;

/// A row of cursor results.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Column values, in select-list order.
    values: Vec<OracleValue>,
    /// Shared column names (reference counted across the drained set).
    columns: Arc<Vec<String>>,
}

impl Row {
    /// Create a new row with values and shared column names.
    pub fn new(values: Vec<OracleValue>, columns: Arc<Vec<String>>) -> Self {
        Self { values, columns }
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&OracleValue> {
        self.values.get(index)
    }

    /// Get value by column name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&OracleValue> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .and_then(|idx| self.values.get(idx))
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values.
    pub fn values(&self) -> &[OracleValue] {
        &self.values
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.as_str()).collect()
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = &OracleValue> {
        self.values.iter()
    }
}

impl IntoIterator for Row {
    type Item = OracleValue;
    type IntoIter = std::vec::IntoIter<OracleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a OracleValue;
    type IntoIter = std::slice::Iter<'a, OracleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_columns() -> Arc<Vec<String>> {
        Arc::new(vec!["NAME".to_string(), "VALUE".to_string()])
    }

    #[test]
    fn test_row_access() {
        let row = Row::new(
            vec![
                OracleValue::Text("test".to_string()),
                OracleValue::Int(42),
            ],
            make_test_columns(),
        );

        assert_eq!(row.len(), 2);
        assert_eq!(row.get(0), Some(&OracleValue::Text("test".to_string())));
        assert_eq!(row.get_by_name("value"), Some(&OracleValue::Int(42)));
        assert_eq!(row.get_by_name("VALUE"), row.get_by_name("value"));
    }

    #[test]
    fn test_row_column_names() {
        let row = Row::new(
            vec![OracleValue::Null, OracleValue::Int(1)],
            make_test_columns(),
        );

        assert_eq!(row.column_names(), vec!["NAME", "VALUE"]);
        assert!(row.get_by_name("missing").is_none());
    }
}
