//! Environment variable expansion for configuration strings.
//!
//! Only the braced forms are recognised:
//! - `${VAR}` expands to the value of VAR and fails if it is unset
//! - `${VAR:-default}` falls back to `default` when VAR is unset
//!
//! Any other `$` (`$HOME`, `$5`) is literal text.

use std::sync::LazyLock;

use regex::Regex;

use crate::ConfigError;

static BRACED_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").expect("braced variable pattern is valid"));

/// Variable that could not be resolved during expansion.
struct UnsetVar(String);

/// Expand `${VAR}` references in `value`.
///
/// `field` is the dotted config path reported in errors (e.g. `server.host`).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut last = 0;
    for reference in BRACED_VAR.find_iter(value) {
        expanded.push_str(&value[last..reference.start()]);
        expanded.push_str(&expand_reference(reference.as_str(), field)?);
        last = reference.end();
    }
    expanded.push_str(&value[last..]);
    Ok(expanded)
}

/// Expand a single `${...}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |name| match std::env::var(name) {
        Ok(found) => Ok(Some(found)),
        Err(_) => Err(UnsetVar(name.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}
