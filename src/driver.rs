//! Native driver boundary.
//!
//! The adapter never speaks the Oracle wire protocol itself; it delegates to
//! a driver implementing these traits. The contract is the classic OCI-style
//! prepare / bind-by-name / execute / fetch-all surface, with the raw cursor
//! exposed as a first-class capability of the statement rather than reached
//! through a private handle.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ConnectOptions;
use crate::error::Result;
use crate::routine::BindType;
use crate::row::Row;
use crate::value::OracleValue;

/// Driver identifiers that select the Oracle adapter.
pub const ORACLE_DRIVER_ALIASES: [&str; 3] = ["oci8", "pdo-via-oci8", "oracle"];

/// A registered driver capable of opening physical connections.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Open a physical connection.
    ///
    /// This is the one wire-protocol boundary of the adapter. Failures
    /// (authentication, unreachable host, protocol mismatch) surface as
    /// [`Error::Driver`] and are propagated verbatim; retry policy belongs
    /// to the caller.
    ///
    /// [`Error::Driver`]: crate::Error::Driver
    async fn open(
        &self,
        descriptor: &str,
        username: &str,
        password: &str,
        options: &ConnectOptions,
    ) -> Result<Box<dyn DriverConnection>>;
}

/// An open physical connection.
///
/// Not designed for concurrent use: at most one in-flight statement at a
/// time, enforced by `&mut self` on every operation.
#[async_trait]
pub trait DriverConnection: Send {
    /// Execute a plain statement with no bindings (session directives).
    async fn execute(&mut self, sql: &str) -> Result<()>;

    /// Prepare a statement for bind-by-name execution.
    async fn prepare(&mut self, sql: &str) -> Result<Box<dyn DriverStatement>>;

    /// Close the connection and release server resources.
    async fn close(&mut self) -> Result<()>;
}

/// A prepared statement with bind-by-name parameters.
#[async_trait]
pub trait DriverStatement: Send {
    /// Bind a named parameter with an explicit wire type.
    fn bind(&mut self, name: &str, value: &OracleValue, bind_type: &BindType) -> Result<()>;

    /// Bind a named OUT parameter of ref-cursor type.
    fn bind_cursor(&mut self, name: &str) -> Result<()>;

    /// Execute the statement.
    async fn execute(&mut self) -> Result<()>;

    /// OUT-parameter value written by the server, if any.
    ///
    /// Only meaningful after a successful [`execute`](Self::execute).
    fn out_value(&self, name: &str) -> Option<OracleValue>;

    /// Take the bound ref cursor after execution.
    ///
    /// The cursor must still be opened via [`DriverCursor::execute`] before
    /// rows can be fetched.
    fn take_cursor(&mut self) -> Result<Box<dyn DriverCursor>>;
}

/// A server-side ref cursor handle.
#[async_trait]
pub trait DriverCursor: Send {
    /// Open the cursor on the server.
    async fn execute(&mut self) -> Result<()>;

    /// Drain all remaining rows into memory.
    ///
    /// Unbounded: acceptable only for bounded result sets.
    async fn fetch_all(&mut self) -> Result<Vec<Row>>;
}

/// Registry of named drivers.
///
/// Connector selection is an explicit lookup by the configured driver
/// identifier; an unknown identifier is a configuration error, there is no
/// implicit fall-through.
#[derive(Default, Clone)]
pub struct DriverRegistry {
    drivers: HashMap<String, Arc<dyn Driver>>,
}

impl DriverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a driver under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, driver: Arc<dyn Driver>) {
        self.drivers.insert(name.into(), driver);
    }

    /// Register a driver under all Oracle aliases.
    pub fn register_oracle(&mut self, driver: Arc<dyn Driver>) {
        for alias in ORACLE_DRIVER_ALIASES {
            self.register(alias, Arc::clone(&driver));
        }
    }

    /// Look up a driver by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Driver>> {
        self.drivers.get(name).cloned()
    }

    /// Registered driver names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.drivers.keys().map(|k| k.as_str())
    }
}

impl std::fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("drivers", &self.drivers.keys().collect::<Vec<_>>())
            .finish()
    }
}
