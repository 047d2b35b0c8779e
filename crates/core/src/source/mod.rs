//! Scope file reading and path construction.
//!
//! Responsibilities:
//! - Turn a scope name into the path of its backing file.
//! - Parse a backing file into a flat key/value mapping.
//!
//! Does NOT handle:
//! - Precedence across sources (see the resolver).
//! - Caching of parsed files (owned by the engine).

mod file;
mod path;

pub use file::read_scope_file;
pub use path::{scope_file_path, validate_scope_name};
