//! Centralized constants for the envscope workspace.
//!
//! Default values and fixed vocabularies used across crates, kept in one
//! place to avoid magic-string duplication.

// =============================================================================
// Scope Resolution Defaults
// =============================================================================

/// Environment variable consulted for the ambient scope when neither a
/// call-level scope nor an engine override applies.
pub const DEFAULT_SCOPE_ENV_VAR: &str = "SCOPE";

/// Base directory searched for scope files when none is configured.
pub const DEFAULT_BASE_DIR: &str = ".";

/// File name of the root (unscoped) source. Named scopes append
/// `.<scope>` to this name, e.g. `.env.dev`.
pub const ROOT_FILE_NAME: &str = ".env";

// =============================================================================
// Boolean Value Vocabulary
// =============================================================================

/// Accepted truthy spellings for boolean values (matched case-insensitively).
pub const TRUTHY_VALUES: [&str; 4] = ["true", "1", "yes", "on"];

/// Accepted falsy spellings for boolean values (matched case-insensitively).
pub const FALSY_VALUES: [&str; 4] = ["false", "0", "no", "off"];
