//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map global flags onto engine settings fields.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not resolve values (see `envscope-core`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envscope")]
#[command(about = "Resolve scoped .env configuration values", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envscope get PORT --type number\n  envscope get FEATURES --type json --scope qa\n  envscope --env-prefix PM_ get PORT --default 8080\n  envscope --base-dir ./config scope\n  envscope path --scope prod\n"
)]
pub struct Cli {
    /// Directory containing the .env and .env.<scope> files
    #[arg(long, global = true, env = "ENVSCOPE_BASE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Scope consulted when no call scope or ambient scope applies
    #[arg(long, global = true, env = "ENVSCOPE_DEFAULT_SCOPE")]
    pub default_scope: Option<String>,

    /// Prefix tried first for environment variable overrides (e.g. PM_)
    #[arg(long, global = true, env = "ENVSCOPE_ENV_PREFIX")]
    pub env_prefix: Option<String>,

    /// Environment variable carrying the ambient scope
    #[arg(long, global = true, default_value = "SCOPE")]
    pub scope_env_var: String,

    /// Treat a missing key as an error instead of printing nothing
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one key and print its value
    Get {
        /// Key to resolve
        key: String,

        /// Target type for the value
        #[arg(long = "type", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,

        /// Scope for this call, overriding every other scope source
        #[arg(short, long)]
        scope: Option<String>,

        /// Fallback when the key is missing or the value does not convert
        #[arg(long)]
        default: Option<String>,
    },

    /// Print the effective scope
    Scope {
        /// Scope for this call, overriding every other scope source
        #[arg(short, long)]
        scope: Option<String>,
    },

    /// Print the backing file path for the effective scope
    Path {
        /// Scope for this call, overriding every other scope source
        #[arg(short, long)]
        scope: Option<String>,
    },
}

/// Value types the `get` command can resolve.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ValueType {
    String,
    Number,
    Bool,
    Json,
}
