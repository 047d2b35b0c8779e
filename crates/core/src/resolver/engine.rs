//! The engine: typed accessors, scope override, and cache lifecycle.
//!
//! Responsibilities:
//! - Own the resolution context (scope override + parsed scope cache).
//! - Expose the typed getters with default-or-fail policy.
//! - Provide the process-wide instance with distinct construct and get
//!   operations.
//!
//! Does NOT handle:
//! - Tier ordering (see `scope.rs` and `value.rs`).
//! - Raw conversions (see `convert.rs`).
//!
//! Invariants:
//! - The cache read-check-insert runs under the context lock, so each
//!   scope file is read at most once per cache epoch.
//! - Setting or clearing the scope override swaps in a fresh cache;
//!   no caller can observe the new override with stale entries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use serde::de::DeserializeOwned;

use super::convert;
use super::scope::effective_scope;
use super::settings::EngineSettings;
use super::value::resolve_raw;
use crate::error::ConfigError;
use crate::source::{read_scope_file, scope_file_path};

/// Per-call options for the typed getters.
///
/// `with_default` is an explicit presence flag: a supplied default wins
/// over both missing keys and conversion failures, while an untouched
/// `GetOptions` supplies none. There is no way to pass a default that
/// counts as absent.
#[derive(Debug, Clone)]
pub struct GetOptions<T> {
    scope: Option<String>,
    default: Option<T>,
}

impl<T> Default for GetOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GetOptions<T> {
    /// Options with no call scope and no default.
    pub fn new() -> Self {
        Self {
            scope: None,
            default: None,
        }
    }

    /// Resolve under `scope` for this call only. Takes precedence over
    /// the engine override, the ambient variable, and the default scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Return `default` when the key is missing or its raw value does
    /// not convert to the requested type.
    pub fn with_default(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }
}

/// The scope override and the parsed-file cache, replaced as one unit so
/// no reader observes an override paired with a stale cache.
struct ResolutionContext {
    scope_override: Option<String>,
    cache: HashMap<Option<String>, Arc<HashMap<String, String>>>,
}

impl ResolutionContext {
    fn fresh(scope_override: Option<String>) -> Self {
        Self {
            scope_override,
            cache: HashMap::new(),
        }
    }
}

static GLOBAL_ENGINE: OnceLock<Engine> = OnceLock::new();

/// The configuration resolution engine.
///
/// All getters are `&self`; interior state is limited to the resolution
/// context behind one mutex. Construct one with [`Engine::new`] and pass
/// it where it is needed, or use the process-wide instance via
/// [`Engine::init_global`] / [`Engine::global`].
pub struct Engine {
    settings: EngineSettings,
    context: Mutex<ResolutionContext>,
}

impl Engine {
    /// Create an engine with the given settings.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            context: Mutex::new(ResolutionContext::fresh(None)),
        }
    }

    /// Install the process-wide engine exactly once.
    ///
    /// Fails with [`ConfigError::GlobalAlreadyInitialized`] when a
    /// global engine already exists, whether installed by an earlier
    /// `init_global` or created by a defaulted [`Engine::global`] call.
    /// The supplied settings are never silently discarded in favor of
    /// the installed ones.
    pub fn init_global(settings: EngineSettings) -> Result<&'static Engine, ConfigError> {
        let mut installed = false;
        let engine = GLOBAL_ENGINE.get_or_init(|| {
            installed = true;
            Engine::new(settings)
        });
        if installed {
            Ok(engine)
        } else {
            Err(ConfigError::GlobalAlreadyInitialized)
        }
    }

    /// The process-wide engine, created with [`EngineSettings::default`]
    /// on first use when [`Engine::init_global`] was never called.
    pub fn global() -> &'static Engine {
        GLOBAL_ENGINE.get_or_init(|| Engine::new(EngineSettings::default()))
    }

    /// The settings this engine was constructed with.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Set (`Some`) or clear (`None`) the engine-level scope override.
    ///
    /// Both directions start a new cache epoch: values parsed under the
    /// previous scope context never leak into the new one.
    pub fn set_scope_override(&self, scope: Option<&str>) {
        let mut context = self.lock_context();
        *context = ResolutionContext::fresh(scope.map(str::to_string));
    }

    /// Drop every cached scope file, forcing re-reads on next access.
    /// The scope override is untouched.
    pub fn clear_cache(&self) {
        let mut context = self.lock_context();
        context.cache.clear();
    }

    /// The scope a call supplying `call_scope` would resolve under.
    /// `None` is the root scope.
    pub fn effective_scope(&self, call_scope: Option<&str>) -> Option<String> {
        let context = self.lock_context();
        effective_scope(&self.settings, call_scope, context.scope_override.as_deref())
    }

    /// Resolve `key` as a string. The raw text is the result.
    pub fn get_string(
        &self,
        key: &str,
        options: GetOptions<String>,
    ) -> Result<Option<String>, ConfigError> {
        self.get_typed(key, options, "string", |raw| Some(raw.to_string()))
    }

    /// Resolve `key` as a finite number.
    pub fn get_number(
        &self,
        key: &str,
        options: GetOptions<f64>,
    ) -> Result<Option<f64>, ConfigError> {
        self.get_typed(key, options, "number", convert::parse_number)
    }

    /// Resolve `key` as a boolean (`true`/`1`/`yes`/`on` or
    /// `false`/`0`/`no`/`off`, case-insensitive).
    pub fn get_bool(
        &self,
        key: &str,
        options: GetOptions<bool>,
    ) -> Result<Option<bool>, ConfigError> {
        self.get_typed(key, options, "boolean", convert::parse_bool)
    }

    /// Resolve `key` as a JSON literal deserialized into `T`.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        key: &str,
        options: GetOptions<T>,
    ) -> Result<Option<T>, ConfigError> {
        self.get_typed(key, options, "json", convert::parse_json)
    }

    /// Shared getter shape: resolve scope, resolve raw, then apply the
    /// default-or-fail policy.
    fn get_typed<T>(
        &self,
        key: &str,
        options: GetOptions<T>,
        expected: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>, ConfigError> {
        let scope = self.effective_scope(options.scope.as_deref());
        let raw = resolve_raw(&self.settings, scope.as_deref(), key, |scope, key| {
            self.scope_entry(scope, key)
        })?;

        let Some(raw) = raw else {
            return match options.default {
                Some(default) => Ok(Some(default)),
                None if self.settings.strict() => Err(ConfigError::KeyNotFound {
                    key: key.to_string(),
                }),
                None => Ok(None),
            };
        };

        match parse(&raw) {
            Some(value) => Ok(Some(value)),
            // A call default absorbs conversion failures even in strict mode.
            None => match options.default {
                Some(default) => Ok(Some(default)),
                None => Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    expected,
                    raw,
                }),
            },
        }
    }

    /// One entry from one scope's cached mapping.
    fn scope_entry(&self, scope: Option<&str>, key: &str) -> Result<Option<String>, ConfigError> {
        let mapping = self.scope_map(scope)?;
        Ok(mapping.get(key).cloned())
    }

    /// Read-through cache access. The read-check-insert runs under the
    /// context lock, preserving the one-read-per-scope-per-epoch
    /// invariant under parallel callers.
    fn scope_map(&self, scope: Option<&str>) -> Result<Arc<HashMap<String, String>>, ConfigError> {
        let cache_key = scope.map(str::to_string);
        let mut context = self.lock_context();

        if let Some(mapping) = context.cache.get(&cache_key) {
            return Ok(Arc::clone(mapping));
        }

        let path = scope_file_path(self.settings.base_dir(), scope)?;
        tracing::debug!(
            path = %path.display(),
            scope = scope.unwrap_or("(root)"),
            "loading scope file"
        );
        let mapping = Arc::new(read_scope_file(&path));
        context.cache.insert(cache_key, Arc::clone(&mapping));
        Ok(mapping)
    }

    fn lock_context(&self) -> MutexGuard<'_, ResolutionContext> {
        // Guarded state stays coherent across a panicking reader, so the
        // guard is recoverable.
        self.context.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
