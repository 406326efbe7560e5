//! High-level connection handle over a native driver connection.

use crate::driver::DriverConnection;
use crate::error::Result;
use crate::routine::{self, BindType, Bindings};
use crate::row::Row;
use crate::session;
use crate::value::OracleValue;

/// Default NLS date format applied by [`Connection::set_date_format`].
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD HH24:MI:SS";

/// An open adapter connection.
///
/// Owns the underlying driver connection exclusively; every operation takes
/// `&mut self`, so at most one statement is in flight at a time. Callers
/// needing concurrency open one connection per logical session.
pub struct Connection {
    /// Native driver connection.
    driver: Box<dyn DriverConnection>,
    /// Schema applied via `CURRENT_SCHEMA`, if any.
    schema: Option<String>,
}

impl Connection {
    /// Wrap an open driver connection.
    pub fn new(driver: Box<dyn DriverConnection>) -> Self {
        Self {
            driver,
            schema: None,
        }
    }

    /// Current schema, if one was applied.
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Switch the session to another schema.
    pub async fn set_schema(&mut self, schema: &str) -> Result<()> {
        session::apply_session_vars(self.driver.as_mut(), &[("CURRENT_SCHEMA", schema)]).await?;
        self.schema = Some(schema.to_string());
        Ok(())
    }

    /// Apply session variables in one batched `ALTER SESSION` directive.
    pub async fn set_session_vars(&mut self, vars: &[(&str, &str)]) -> Result<()> {
        session::apply_session_vars(self.driver.as_mut(), vars).await
    }

    /// Set the session date and timestamp formats.
    pub async fn set_date_format(&mut self, format: &str) -> Result<()> {
        self.set_session_vars(&[
            ("NLS_DATE_FORMAT", format),
            ("NLS_TIMESTAMP_FORMAT", format),
        ])
        .await
    }

    /// Execute a PL/SQL procedure; OUT values are written back into
    /// `bindings`.
    pub async fn execute_procedure(&mut self, routine: &str, bindings: &mut Bindings) -> Result<()> {
        routine::execute_procedure(self.driver.as_mut(), routine, bindings).await
    }

    /// Execute a cursor-returning PL/SQL procedure and drain all rows.
    pub async fn execute_procedure_with_cursor(
        &mut self,
        routine: &str,
        bindings: &mut Bindings,
    ) -> Result<Vec<Row>> {
        routine::execute_procedure_with_cursor(self.driver.as_mut(), routine, bindings).await
    }

    /// Execute a PL/SQL function expression and return its result.
    pub async fn execute_function(
        &mut self,
        expression: &str,
        bindings: &mut Bindings,
        return_type: &BindType,
    ) -> Result<OracleValue> {
        routine::execute_function(self.driver.as_mut(), expression, bindings, return_type).await
    }

    /// Raw access to the underlying driver connection.
    pub fn raw(&mut self) -> &mut dyn DriverConnection {
        self.driver.as_mut()
    }

    /// Close the connection.
    pub async fn close(mut self) -> Result<()> {
        self.driver.close().await
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
