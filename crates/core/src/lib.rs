//! Scoped configuration resolution for envscope.
//!
//! This crate provides the resolution engine that layers process
//! environment variables over per-scope `.env` files and caller-supplied
//! defaults, with typed accessors for strings, numbers, booleans, and
//! JSON values.
//!
//! Resolution runs in two steps per call: the effective scope is picked
//! from call options, the engine's scope override, the ambient `SCOPE`
//! variable, or the configured default; then source tiers are consulted
//! in order (prefixed environment variable, bare environment variable,
//! scope file, default-scope file). Parsed files are cached until the
//! cache is cleared or the scope override changes.

pub mod constants;
mod error;
mod resolver;
pub mod source;

pub use error::ConfigError;
pub use resolver::convert;
pub use resolver::{Engine, EngineSettings, GetOptions, env_var_or_none};
