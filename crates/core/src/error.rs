//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for every resolution failure.
//!
//! Does NOT handle:
//! - Scope file parsing failures (reading a scope file is total; see `source::file`).
//!
//! Invariants:
//! - Every variant carries the context needed to act on it (scope name,
//!   key, offending raw text).
//! - A conversion failure is only surfaced when the call supplied no
//!   default; a default absorbs it regardless of strict mode.

use thiserror::Error;

/// Errors surfaced by the resolution engine.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The scope name contains characters outside `[A-Za-z0-9._-]` or is
    /// empty. Illegal names are rejected, never sanitized.
    #[error("invalid scope name {scope:?}: only letters, digits, '.', '_' and '-' are allowed")]
    InvalidScopeName { scope: String },

    /// Strict mode only: no source tier defined the key and the call
    /// supplied no default.
    #[error("configuration key {key:?} not found in any source")]
    KeyNotFound { key: String },

    /// A raw value was found but did not convert to the requested type,
    /// and the call supplied no default.
    #[error("invalid value for {key}: expected {expected}, got {raw:?}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        raw: String,
    },

    /// A second explicit global initialization was attempted. The first
    /// engine stays installed; its settings are never silently replaced.
    #[error("global engine is already initialized")]
    GlobalAlreadyInitialized,
}
