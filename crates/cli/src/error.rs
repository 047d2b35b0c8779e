//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (messages go to stderr at the call site).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use envscope_core::ConfigError;

/// Structured exit codes for envscope.
///
/// These codes let scripts distinguish failure modes: fix the scope
/// name, supply a default, or treat the key as genuinely unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the command completed (including a non-strict miss).
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Usage error - arguments that cannot be interpreted, such as a
    /// `--default` that does not parse as the requested type.
    UsageError = 2,

    /// The scope name contains illegal characters.
    InvalidScope = 3,

    /// Strict mode: no source tier defined the key.
    NotFound = 4,

    /// The raw value did not convert to the requested type.
    InvalidValue = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Map a resolution error onto its exit code.
    pub fn from_config_error(error: &ConfigError) -> Self {
        match error {
            ConfigError::InvalidScopeName { .. } => ExitCode::InvalidScope,
            ConfigError::KeyNotFound { .. } => ExitCode::NotFound,
            ConfigError::InvalidValue { .. } => ExitCode::InvalidValue,
            ConfigError::GlobalAlreadyInitialized => ExitCode::GeneralError,
        }
    }
}
