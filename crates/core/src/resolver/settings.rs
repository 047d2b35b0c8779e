//! Engine settings.
//!
//! Responsibilities:
//! - Hold the configuration of an engine instance: base directory,
//!   default scope, environment prefix, ambient scope variable, and
//!   strictness.
//!
//! Does NOT handle:
//! - Per-call options (see `GetOptions` in `engine.rs`).
//!
//! Invariants:
//! - Settings never change after the engine is constructed.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_BASE_DIR, DEFAULT_SCOPE_ENV_VAR};

/// Immutable configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone)]
pub struct EngineSettings {
    base_dir: PathBuf,
    default_scope: Option<String>,
    env_prefix: Option<String>,
    scope_env_var: String,
    strict: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

impl EngineSettings {
    /// Create settings rooted at `base_dir`: no default scope, no
    /// environment prefix, the standard `SCOPE` ambient variable, and
    /// strict mode off.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            default_scope: None,
            env_prefix: None,
            scope_env_var: DEFAULT_SCOPE_ENV_VAR.to_string(),
            strict: false,
        }
    }

    /// Set the scope consulted when no call scope, override, or ambient
    /// scope applies. It also serves as the final source tier for keys
    /// missing from the effective scope's file.
    pub fn with_default_scope(mut self, scope: impl Into<String>) -> Self {
        self.default_scope = Some(scope.into());
        self
    }

    /// Set the prefix tried first when reading environment overrides,
    /// e.g. a prefix of `PM_` makes `PM_PORT` shadow `PORT`.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Set the environment variable that carries the ambient scope.
    pub fn with_scope_env_var(mut self, var: impl Into<String>) -> Self {
        self.scope_env_var = var.into();
        self
    }

    /// When strict, a missing key with no call default is a
    /// [`ConfigError::KeyNotFound`](crate::ConfigError::KeyNotFound)
    /// instead of `Ok(None)`.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Directory containing the scope files.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Scope used when nothing more specific applies.
    pub fn default_scope(&self) -> Option<&str> {
        self.default_scope.as_deref()
    }

    /// Prefix for first-tier environment lookups, if configured.
    pub fn env_prefix(&self) -> Option<&str> {
        self.env_prefix.as_deref()
    }

    /// Name of the ambient scope environment variable.
    pub fn scope_env_var(&self) -> &str {
        &self.scope_env_var
    }

    /// Whether missing keys without defaults are errors.
    pub fn strict(&self) -> bool {
        self.strict
    }
}
