//! TNS connect descriptor construction.
//!
//! Pure string building, no I/O. A pre-supplied `tns` value short-circuits
//! everything else, as an escape hatch for hand-written descriptors.

use crate::config::{ConnectionConfig, DEFAULT_PORT, DEFAULT_PROTOCOL};
use crate::error::{Error, Result};

/// Build the TNS connect descriptor for a configuration.
///
/// Deterministic: the same configuration always yields a byte-identical
/// descriptor.
///
/// # Example
///
/// ```
/// use oracle_adapter_rs::{build_descriptor, ConnectionConfig};
///
/// let config = ConnectionConfig::new("oracle", "scott", "tiger")
///     .with_host("localhost")
///     .with_service_name("FREEPDB1");
/// let descriptor = build_descriptor(&config).unwrap();
/// assert!(descriptor.contains("(SERVICE_NAME = FREEPDB1)"));
/// ```
pub fn build_descriptor(config: &ConnectionConfig) -> Result<String> {
    if let Some(tns) = config.tns.as_deref() {
        if !tns.is_empty() {
            return Ok(tns.to_string());
        }
    }

    let host = config
        .host
        .as_deref()
        .or(config.hostname.as_deref())
        .ok_or_else(|| {
            Error::config("neither host nor hostname is set and no tns descriptor was given")
        })?;
    let port = config.port.unwrap_or(DEFAULT_PORT);
    let protocol = config.protocol.as_deref().unwrap_or(DEFAULT_PROTOCOL);
    let service = service_selection(config)?;

    let hosts: Vec<&str> = host
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect();

    if hosts.is_empty() {
        return Err(Error::config("host list is empty"));
    }

    if hosts.len() > 1 {
        // Multi-address failover descriptor with a single shared CONNECT_DATA.
        let mut address = String::new();
        for h in &hosts {
            address.push_str(&format!(
                "(ADDRESS = (PROTOCOL = {protocol})(HOST = {h})(PORT = {port}))"
            ));
        }
        return Ok(format!(
            "(DESCRIPTION = {address} (LOAD_BALANCE = yes) (FAILOVER = on) \
             (CONNECT_DATA = (SERVER = DEDICATED) ({service})))"
        ));
    }

    let h = hosts[0];
    Ok(format!(
        "(DESCRIPTION = (ADDRESS = (PROTOCOL = {protocol})(HOST = {h})(PORT = {port})) \
         (CONNECT_DATA =({service})))"
    ))
}

/// `SERVICE_NAME = ...` when a service name is configured, `SID = ...` for
/// legacy database/SID connects.
fn service_selection(config: &ConnectionConfig) -> Result<String> {
    match config.service_name.as_deref() {
        Some(name) if !name.is_empty() => Ok(format!("SERVICE_NAME = {name}")),
        _ => match config.database.as_deref() {
            Some(db) if !db.is_empty() => Ok(format!("SID = {db}")),
            _ => Err(Error::config(
                "neither service_name nor database is set; cannot select an instance",
            )),
        },
    }
}
