//! Stored routine invocation over anonymous PL/SQL blocks.
//!
//! An invocation moves through build → bind → execute → (drain) and any
//! failure along the way is terminal; there are no retries and no partial
//! row sequences.

use tracing::debug;

use crate::driver::{DriverConnection, DriverStatement};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::OracleValue;

/// Maximum character buffer length for text bindings.
const TEXT_BIND_MAX_LEN: u32 = 32;

/// Name of the dedicated ref-cursor OUT parameter.
pub const CURSOR_PARAM: &str = "cursor";

/// Wire type of a bound parameter, inferred once from the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindType {
    /// NUMBER binding.
    Number,
    /// Character buffer binding; `None` means the unbounded sentinel.
    Varchar { max_len: Option<u32> },
    /// Ref-cursor OUT binding.
    Cursor,
}

impl BindType {
    /// Infer the bind type for a value.
    ///
    /// Integers bind as NUMBER, text as a fixed 32-byte character buffer,
    /// anything else (including OUT placeholders) as an unbounded character
    /// buffer.
    pub fn infer(value: &OracleValue) -> Self {
        match value {
            OracleValue::Int(_) => BindType::Number,
            OracleValue::Text(_) => BindType::Varchar {
                max_len: Some(TEXT_BIND_MAX_LEN),
            },
            OracleValue::Null => BindType::Varchar { max_len: None },
        }
    }
}

/// Ordered parameter name → value mapping for a routine call.
///
/// Insertion order is the call-text parameter order. OUT values written by
/// the server are stored back here after a successful execute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: Vec<(String, OracleValue)>,
}

impl Bindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. The name may be given with or without the leading
    /// colon; it is normalized when the call text is built.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<OracleValue>) -> &mut Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Append an OUT placeholder parameter.
    pub fn push_out(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(name, OracleValue::Null)
    }

    /// Get a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&OracleValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Overwrite a parameter value by name (OUT write-back).
    pub fn set(&mut self, name: &str, value: OracleValue) {
        if let Some((_, v)) = self.entries.iter_mut().find(|(n, _)| n == name) {
            *v = value;
        }
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over (name, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OracleValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Prefix a parameter name with `:` unless it already carries one.
fn placeholder(name: &str) -> String {
    if name.starts_with(':') {
        name.to_string()
    } else {
        format!(":{name}")
    }
}

/// Build `begin <routine>(:p1,:p2,...); end;` from ordered binding names.
pub fn build_call_text(routine: &str, bindings: &Bindings) -> String {
    let params: Vec<String> = bindings.names().map(placeholder).collect();
    format!("begin {}({}); end;", routine, params.join(","))
}

/// Cursor-returning form: the caller's parameters plus the trailing
/// dedicated `:cursor` OUT parameter, against the supplied routine name.
pub fn build_cursor_call_text(routine: &str, bindings: &Bindings) -> String {
    let mut params: Vec<String> = bindings.names().map(placeholder).collect();
    params.push(placeholder(CURSOR_PARAM));
    format!("begin {}({}); end;", routine, params.join(","))
}

/// Scalar-returning function form: `begin :result := <expr>; end;`.
pub fn build_function_text(expression: &str) -> String {
    format!("begin :result := {expression}; end;")
}

/// Bind every parameter with its inferred wire type.
fn bind_all(stmt: &mut dyn DriverStatement, bindings: &Bindings) -> Result<()> {
    for (name, value) in bindings.iter() {
        let bind_type = BindType::infer(value);
        stmt.bind(&placeholder(name), value, &bind_type)?;
    }
    Ok(())
}

/// Copy OUT-parameter values written by the server back into the bindings.
fn write_back_outs(stmt: &dyn DriverStatement, bindings: &mut Bindings) {
    let names: Vec<String> = bindings.names().map(str::to_string).collect();
    for name in names {
        if let Some(value) = stmt.out_value(&placeholder(&name)) {
            bindings.set(&name, value);
        }
    }
}

/// Execute a PL/SQL procedure.
///
/// On success OUT-parameter values are written back into `bindings`.
pub async fn execute_procedure(
    conn: &mut dyn DriverConnection,
    routine: &str,
    bindings: &mut Bindings,
) -> Result<()> {
    let sql = build_call_text(routine, bindings);
    debug!(routine, sql = %sql, "executing procedure");

    let run = async {
        let mut stmt = conn.prepare(&sql).await?;
        bind_all(stmt.as_mut(), bindings)?;
        stmt.execute().await?;
        Ok(stmt)
    };
    let stmt = run.await.map_err(|e: Error| Error::execution(routine, &e))?;

    write_back_outs(stmt.as_ref(), bindings);
    Ok(())
}

/// Execute a PL/SQL procedure returning a ref cursor and drain it.
///
/// The result set is materialized eagerly; all-or-nothing, no pagination.
/// Suitable only for bounded result sets.
pub async fn execute_procedure_with_cursor(
    conn: &mut dyn DriverConnection,
    routine: &str,
    bindings: &mut Bindings,
) -> Result<Vec<Row>> {
    let sql = build_cursor_call_text(routine, bindings);
    debug!(routine, sql = %sql, "executing procedure with cursor");

    let run = async {
        let mut stmt = conn.prepare(&sql).await?;
        bind_all(stmt.as_mut(), bindings)?;
        stmt.bind_cursor(&placeholder(CURSOR_PARAM))?;
        stmt.execute().await?;

        let mut cursor = stmt.take_cursor()?;
        cursor.execute().await?;
        let rows = cursor.fetch_all().await?;
        Ok((stmt, rows))
    };
    let (stmt, rows) = run.await.map_err(|e: Error| Error::execution(routine, &e))?;

    write_back_outs(stmt.as_ref(), bindings);
    Ok(rows)
}

/// Execute a PL/SQL function expression and return its `:result` value.
///
/// `expression` is the call text inside the block, e.g.
/// `"my_func(:p1,:p2)"`; parameters come from `bindings` and the return
/// value is bound as `:result` with the supplied type.
pub async fn execute_function(
    conn: &mut dyn DriverConnection,
    expression: &str,
    bindings: &mut Bindings,
    return_type: &BindType,
) -> Result<OracleValue> {
    let sql = build_function_text(expression);
    debug!(expression, sql = %sql, "executing function");

    let run = async {
        let mut stmt = conn.prepare(&sql).await?;
        bind_all(stmt.as_mut(), bindings)?;
        stmt.bind(":result", &OracleValue::Null, return_type)?;
        stmt.execute().await?;
        Ok(stmt)
    };
    let stmt = run
        .await
        .map_err(|e: Error| Error::execution(expression, &e))?;

    write_back_outs(stmt.as_ref(), bindings);
    Ok(stmt.out_value(":result").unwrap_or(OracleValue::Null))
}
