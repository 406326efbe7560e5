//! Connection configuration.

/// Default listener port.
pub const DEFAULT_PORT: u16 = 1521;
/// Default transport protocol in the descriptor.
pub const DEFAULT_PROTOCOL: &str = "TCP";
/// Default session character set.
pub const DEFAULT_CHARSET: &str = "AL32UTF8";

/// Connection configuration.
///
/// Owned by the caller and read-only to the adapter. Either a pre-supplied
/// `tns` descriptor is present, or `host`/`hostname` plus a service selection
/// (`service_name` or `database`) must be resolvable after defaulting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionConfig {
    /// Driver identifier, looked up in the [`DriverRegistry`].
    ///
    /// [`DriverRegistry`]: crate::driver::DriverRegistry
    pub driver: String,
    /// Host address, or a comma-separated failover list.
    pub host: Option<String>,
    /// Legacy alias for `host`, consulted only when `host` is absent.
    pub hostname: Option<String>,
    /// Listener port (default 1521).
    pub port: Option<u16>,
    /// Transport protocol (default TCP).
    pub protocol: Option<String>,
    /// Service name; preferred over `database` for instance selection.
    pub service_name: Option<String>,
    /// Database name, used as a legacy SID when `service_name` is absent.
    pub database: Option<String>,
    /// Database username.
    pub username: String,
    /// Database password.
    pub password: String,
    /// Schema to switch to after connecting.
    pub schema: Option<String>,
    /// Session character set (default AL32UTF8).
    pub charset: Option<String>,
    /// Pre-supplied full TNS descriptor, bypassing all defaulting.
    pub tns: Option<String>,
}

impl ConnectionConfig {
    /// Create a new configuration for the given driver and credentials.
    pub fn new(
        driver: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            driver: driver.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Set the host (single value or comma-separated list).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the listener port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the service name.
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    /// Set the database name (legacy SID selection).
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the post-connect schema.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Set the session character set.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Set a full TNS descriptor, bypassing descriptor construction.
    pub fn with_tns(mut self, tns: impl Into<String>) -> Self {
        self.tns = Some(tns.into());
        self
    }

    /// Character set after defaulting.
    pub fn effective_charset(&self) -> &str {
        self.charset.as_deref().unwrap_or(DEFAULT_CHARSET)
    }

    /// Connect options passed to the driver, merged with config defaults.
    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            charset: self.effective_charset().to_string(),
        }
    }
}

/// Options handed to the native driver when opening a connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectOptions {
    /// Session character set.
    pub charset: String,
}
