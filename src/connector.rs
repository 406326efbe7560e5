//! Connection establishment.

use tracing::debug;

use crate::config::ConnectionConfig;
use crate::connection::Connection;
use crate::descriptor::build_descriptor;
use crate::driver::DriverRegistry;
use crate::error::{Error, Result};

/// Opens connections by resolving a configuration against registered
/// drivers.
#[derive(Debug, Clone, Default)]
pub struct Connector {
    registry: DriverRegistry,
}

impl Connector {
    /// Create a connector over a driver registry.
    pub fn new(registry: DriverRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    /// Establish a connection.
    ///
    /// Builds the TNS descriptor, opens the physical connection through the
    /// configured driver and applies the post-connect schema when one is
    /// set. Driver failures propagate verbatim; no retry is attempted here.
    pub async fn connect(&self, config: &ConnectionConfig) -> Result<Connection> {
        let driver = self.registry.get(&config.driver).ok_or_else(|| {
            Error::config(format!("unknown driver '{}'", config.driver))
        })?;

        let descriptor = build_descriptor(config)?;
        let options = config.connect_options();
        debug!(driver = %config.driver, descriptor = %descriptor, "opening connection");

        let raw = driver
            .open(&descriptor, &config.username, &config.password, &options)
            .await?;
        let mut connection = Connection::new(raw);

        // Like Postgres, Oracle has the concept of a schema.
        if let Some(schema) = config.schema.as_deref() {
            connection.set_schema(schema).await?;
        }

        Ok(connection)
    }
}
