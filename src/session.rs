//! Session-scoped `ALTER SESSION` directives.

use tracing::debug;

use crate::driver::DriverConnection;
use crate::error::{Error, Result};

/// The one session variable rendered as an unquoted identifier.
const CURRENT_SCHEMA: &str = "CURRENT_SCHEMA";

/// Render the batched `ALTER SESSION SET` directive for a set of variables.
///
/// Returns `None` for an empty set. `CURRENT_SCHEMA` (matched
/// case-insensitively) is rendered unquoted since schema names are
/// identifiers; every other value becomes a single-quoted literal. Embedded
/// quotes are not escaped; values are caller-trusted.
pub fn render_directive(vars: &[(&str, &str)]) -> Option<String> {
    if vars.is_empty() {
        return None;
    }

    let assignments: Vec<String> = vars
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case(CURRENT_SCHEMA) {
                format!("{name}  = {value}")
            } else {
                format!("{name}  = '{value}'")
            }
        })
        .collect();

    Some(format!("ALTER SESSION SET {}", assignments.join(" ")))
}

/// Apply session variables over an open connection.
///
/// All variables are batched into one statement, one round trip per connect.
/// On failure the connection stays open but its session state may be
/// partially applied; callers should discard it.
pub async fn apply_session_vars(
    conn: &mut dyn DriverConnection,
    vars: &[(&str, &str)],
) -> Result<()> {
    let Some(directive) = render_directive(vars) else {
        return Ok(());
    };

    debug!(directive = %directive, "applying session variables");
    conn.execute(&directive)
        .await
        .map_err(|e| Error::session(directive, &e))
}
