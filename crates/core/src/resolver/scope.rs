//! Effective scope resolution.
//!
//! Precedence, highest to lowest:
//! 1. A scope supplied with the call.
//! 2. The engine's scope override, if set.
//! 3. The ambient scope environment variable, if non-empty.
//! 4. The configured default scope.
//!
//! Exactly one branch applies per call; resolution cannot fail. An empty
//! or whitespace-only ambient variable counts as absent.

use super::env::env_var_or_none;
use super::settings::EngineSettings;

/// Resolve the effective scope for a single call. `None` is the root
/// scope.
pub(super) fn effective_scope(
    settings: &EngineSettings,
    call_scope: Option<&str>,
    override_scope: Option<&str>,
) -> Option<String> {
    if let Some(scope) = call_scope {
        return Some(scope.to_string());
    }
    if let Some(scope) = override_scope {
        return Some(scope.to_string());
    }
    if let Some(scope) = env_var_or_none(settings.scope_env_var()) {
        return Some(scope);
    }
    settings.default_scope().map(str::to_string)
}
