//! Value type shared by parameter bindings and result rows.

use std::fmt;

/// A single Oracle value, used both for routine parameters and row columns.
#[derive(Debug, Clone, PartialEq)]
pub enum OracleValue {
    /// NULL, also the placeholder for a pure OUT parameter.
    Null,
    /// Integer value (NUMBER without scale).
    Int(i64),
    /// Text value (VARCHAR2, CHAR, etc.).
    Text(String),
}

impl OracleValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, OracleValue::Null)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OracleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to i64.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            OracleValue::Int(n) => Some(*n),
            OracleValue::Text(s) => s.parse().ok(),
            OracleValue::Null => None,
        }
    }
}

impl fmt::Display for OracleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleValue::Null => write!(f, "NULL"),
            OracleValue::Int(n) => write!(f, "{}", n),
            OracleValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for OracleValue {
    fn from(n: i64) -> Self {
        OracleValue::Int(n)
    }
}

impl From<&str> for OracleValue {
    fn from(s: &str) -> Self {
        OracleValue::Text(s.to_string())
    }
}

impl From<String> for OracleValue {
    fn from(s: String) -> Self {
        OracleValue::Text(s)
    }
}
