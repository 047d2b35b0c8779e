//! Raw value resolution across source tiers.
//!
//! Precedence, highest to lowest:
//! 1. Environment variable `<prefix><KEY>`, only when a prefix is
//!    configured.
//! 2. Environment variable `<KEY>`.
//! 3. The effective scope's file mapping.
//! 4. The default scope's file mapping, skipped when the default scope
//!    is the effective scope (no double consultation).
//!
//! A tier that does not define the key falls through silently. The only
//! terminal miss is `Ok(None)`; turning that into an error or a default
//! is the typed accessors' decision.

use super::env::env_var_or_none;
use super::settings::EngineSettings;
use crate::error::ConfigError;

/// Resolve the first raw string for `key` under `scope` across the
/// source tiers. `lookup` serves parsed-file entries (the engine backs
/// it with the scope cache) and may fail with `InvalidScopeName`.
pub(super) fn resolve_raw<F>(
    settings: &EngineSettings,
    scope: Option<&str>,
    key: &str,
    mut lookup: F,
) -> Result<Option<String>, ConfigError>
where
    F: FnMut(Option<&str>, &str) -> Result<Option<String>, ConfigError>,
{
    if let Some(prefix) = settings.env_prefix()
        && let Some(value) = env_var_or_none(&format!("{prefix}{key}"))
    {
        return Ok(Some(value));
    }

    if let Some(value) = env_var_or_none(key) {
        return Ok(Some(value));
    }

    if let Some(value) = lookup(scope, key)? {
        return Ok(Some(value));
    }

    if settings.default_scope() != scope
        && let Some(value) = lookup(settings.default_scope(), key)?
    {
        return Ok(Some(value));
    }

    Ok(None)
}
