//! Path construction for scope files.
//!
//! Responsibilities:
//! - Map a scope name to its backing file under the base directory.
//! - Validate scope names against the permitted character set.
//!
//! Does NOT handle:
//! - File I/O or parsing (see `file.rs`).
//!
//! Invariants:
//! - Scope names match `[A-Za-z0-9._-]+`; anything else is an error,
//!   never sanitized. The set excludes path separators, so a scope name
//!   can never escape the base directory.

use std::path::{Path, PathBuf};

use crate::constants::ROOT_FILE_NAME;
use crate::error::ConfigError;

/// Build the backing file path for a scope under `base_dir`.
///
/// The root scope (`None`) maps to `.env`; a named scope maps to
/// `.env.<scope>`.
pub fn scope_file_path(base_dir: &Path, scope: Option<&str>) -> Result<PathBuf, ConfigError> {
    match scope {
        None => Ok(base_dir.join(ROOT_FILE_NAME)),
        Some(name) => {
            validate_scope_name(name)?;
            Ok(base_dir.join(format!("{ROOT_FILE_NAME}.{name}")))
        }
    }
}

/// Check a scope name against the permitted character set.
pub fn validate_scope_name(name: &str) -> Result<(), ConfigError> {
    let legal = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));

    if legal {
        Ok(())
    } else {
        Err(ConfigError::InvalidScopeName {
            scope: name.to_string(),
        })
    }
}
