//! Default-or-fail policy tests for the typed accessors.
//!
//! Covers strict-mode misses, default absorption of conversion
//! failures, and scope name validation surfaced through getters.

use tempfile::TempDir;

use super::write_scope_file;
use crate::error::ConfigError;
use crate::resolver::engine::{Engine, GetOptions};
use crate::resolver::settings::EngineSettings;

const UNSET_AMBIENT: &str = "_ENVSCOPE_TEST_POLICY_SCOPE";

fn engine(dir: &TempDir, strict: bool) -> Engine {
    Engine::new(
        EngineSettings::new(dir.path())
            .with_default_scope("dev")
            .with_scope_env_var(UNSET_AMBIENT)
            .with_strict(strict),
    )
}

#[test]
fn test_missing_key_strict_without_default_fails() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir, true);

    let result = engine.get_string("ABSENT_SETTING", GetOptions::new());
    assert!(matches!(
        result,
        Err(ConfigError::KeyNotFound { key }) if key == "ABSENT_SETTING"
    ));
}

#[test]
fn test_missing_key_non_strict_is_none() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir, false);

    let value = engine.get_string("ABSENT_SETTING", GetOptions::new()).unwrap();
    assert_eq!(value, None);
}

#[test]
fn test_missing_key_default_wins_in_strict_mode() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir, true);

    let value = engine
        .get_number("ABSENT_SETTING", GetOptions::new().with_default(42.0))
        .unwrap();
    assert_eq!(value, Some(42.0));
}

#[test]
fn test_conversion_failure_default_wins_regardless_of_strictness() {
    let dir = TempDir::new().unwrap();
    write_scope_file(dir.path(), Some("dev"), "RETRY_BUDGET=not-a-number\n");

    for strict in [false, true] {
        let engine = engine(&dir, strict);
        let value = engine
            .get_number("RETRY_BUDGET", GetOptions::new().with_default(42.0))
            .unwrap();
        assert_eq!(value, Some(42.0), "strict={strict}");
    }
}

#[test]
fn test_conversion_failure_without_default_fails() {
    let dir = TempDir::new().unwrap();
    write_scope_file(dir.path(), Some("dev"), "COMPRESSION=maybe\n");
    let engine = engine(&dir, false);

    let result = engine.get_bool("COMPRESSION", GetOptions::new());
    match result {
        Err(ConfigError::InvalidValue { key, expected, raw }) => {
            assert_eq!(key, "COMPRESSION");
            assert_eq!(expected, "boolean");
            assert_eq!(raw, "maybe");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_empty_string_default_counts_as_present() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir, true);

    // Presence of the default matters, not its content: an empty-string
    // default still suppresses KeyNotFound.
    let value = engine
        .get_string("ABSENT_SETTING", GetOptions::new().with_default(String::new()))
        .unwrap();
    assert_eq!(value, Some(String::new()));
}

#[test]
fn test_string_getter_returns_raw_text() {
    let dir = TempDir::new().unwrap();
    write_scope_file(dir.path(), Some("dev"), "GREETING=hello world\n");
    let engine = engine(&dir, false);

    let value = engine.get_string("GREETING", GetOptions::new()).unwrap();
    assert_eq!(value, Some("hello world".to_string()));
}

#[test]
fn test_invalid_call_scope_surfaces_from_getter() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir, false);

    let result = engine.get_string("ANY_KEY", GetOptions::new().with_scope("../secrets"));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidScopeName { scope }) if scope == "../secrets"
    ));
}

#[test]
fn test_invalid_override_scope_surfaces_from_getter() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir, false);

    engine.set_scope_override(Some("bad/name"));
    let result = engine.get_string("ANY_KEY", GetOptions::new());
    assert!(matches!(
        result,
        Err(ConfigError::InvalidScopeName { scope }) if scope == "bad/name"
    ));
}
