//! Tests for the resolution engine.
//!
//! Responsibilities:
//! - Test scope precedence, source-tier precedence, typed conversion
//!   policy, and cache lifecycle.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` plus the
//!   crate-global lock, and distinctive variable names.
//! - Scope files live in per-test temporary directories.

use std::path::Path;
use std::sync::Mutex;

pub mod convert_tests;
pub mod policy_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write a scope file (`.env` or `.env.<scope>`) into `dir`.
pub fn write_scope_file(dir: &Path, scope: Option<&str>, contents: &str) {
    let name = match scope {
        None => ".env".to_string(),
        Some(scope) => format!(".env.{scope}"),
    };
    std::fs::write(dir.join(name), contents).unwrap();
}
