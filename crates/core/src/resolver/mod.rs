//! The configuration resolution engine.
//!
//! Responsibilities:
//! - Resolve the effective scope for each call (call scope > engine
//!   override > ambient variable > configured default).
//! - Resolve raw values across source tiers (prefixed environment >
//!   bare environment > scope file > default-scope file).
//! - Convert raw values to typed results with default-or-fail policy.
//! - Cache parsed scope files for the lifetime of a cache epoch.
//!
//! Does NOT handle:
//! - File parsing or path construction (see `source`).
//!
//! Invariants:
//! - A scope file is read at most once per scope per cache epoch.
//! - The scope override and the cache are swapped as a single unit.

pub mod convert;
mod engine;
mod env;
mod scope;
mod settings;
mod value;

#[cfg(test)]
mod tests;

pub use engine::{Engine, GetOptions};
pub use env::env_var_or_none;
pub use settings::EngineSettings;
