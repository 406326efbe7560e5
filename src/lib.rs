//! Oracle adapter shim for Rust
//!
//! Adapts a native Oracle driver (any implementation of the [`driver`]
//! traits) to a small connection API: TNS descriptor construction from
//! configuration, session configuration via batched `ALTER SESSION`
//! directives, and PL/SQL stored-routine invocation with OUT-parameter and
//! ref-cursor retrieval. The wire protocol itself is entirely the driver's
//! concern.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use oracle_adapter_rs::{Bindings, ConnectionConfig, Connector, DriverRegistry, Result};
//!
//! # async fn run(oci_driver: Arc<dyn oracle_adapter_rs::Driver>) -> Result<()> {
//! let mut registry = DriverRegistry::new();
//! registry.register_oracle(oci_driver);
//!
//! let config = ConnectionConfig::new("oracle", "scott", "tiger")
//!     .with_host("db1,db2")
//!     .with_service_name("FREEPDB1")
//!     .with_schema("APP");
//!
//! let mut conn = Connector::new(registry).connect(&config).await?;
//!
//! let mut bindings = Bindings::new();
//! bindings.push("p_userid", 42i64);
//! conn.execute_procedure("touch_user", &mut bindings).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connection;
pub mod connector;
pub mod descriptor;
pub mod driver;
pub mod error;
pub mod routine;
pub mod row;
pub mod session;
pub mod value;

// Re-export main types
pub use config::{ConnectOptions, ConnectionConfig};
pub use connection::Connection;
pub use connector::Connector;
pub use descriptor::build_descriptor;
pub use driver::{Driver, DriverConnection, DriverCursor, DriverRegistry, DriverStatement};
pub use error::{Error, Result};
pub use routine::{BindType, Bindings};
pub use row::Row;
pub use value::OracleValue;
