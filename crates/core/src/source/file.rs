//! Scope file parsing.
//!
//! Responsibilities:
//! - Read one scope file into a flat `String -> String` mapping.
//!
//! Does NOT handle:
//! - Path construction or scope name validation (see `path.rs`).
//!
//! Invariants:
//! - Reading is total: a missing or unreadable file yields an empty
//!   mapping and malformed lines are skipped, never surfaced as errors.
//! - The dotenv grammar applies: `#` comments and blank lines are
//!   ignored, keys and values are trimmed, surrounding matching single
//!   or double quotes are stripped.

use std::collections::HashMap;
use std::path::Path;

/// Parse a scope file into a flat key/value mapping.
///
/// Later occurrences of a key win over earlier ones within one file.
pub fn read_scope_file(path: &Path) -> HashMap<String, String> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::debug!(
                path = %path.display(),
                error = %error,
                "scope file missing or unreadable, treating as empty"
            );
            return HashMap::new();
        }
    };

    let mut mapping = HashMap::new();
    for entry in entries {
        match entry {
            Ok((key, value)) => {
                mapping.insert(key, value);
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "skipping malformed line in scope file"
                );
            }
        }
    }
    mapping
}
