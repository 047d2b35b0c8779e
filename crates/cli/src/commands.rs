//! Command execution for the envscope CLI.
//!
//! Responsibilities:
//! - Build engine settings from parsed arguments.
//! - Run one engine call per invocation and print the result.
//!
//! Invariants:
//! - stdout carries resolved values only; diagnostics go to stderr.
//! - A non-strict miss prints nothing and exits successfully.
//! - `--default` values are parsed with the same conversion rules as
//!   resolved values.

use anyhow::Context;
use envscope_core::{Engine, EngineSettings, GetOptions, convert, source};

use crate::args::{Cli, Commands, ValueType};
use crate::error::ExitCode;

/// Execute the parsed command and report its exit code.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let engine = Engine::new(settings_from(cli));
    tracing::debug!(
        base_dir = %engine.settings().base_dir().display(),
        strict = engine.settings().strict(),
        "engine configured"
    );

    match &cli.command {
        Commands::Get {
            key,
            value_type,
            scope,
            default,
        } => run_get(&engine, key, *value_type, scope.as_deref(), default.as_deref()),
        Commands::Scope { scope } => {
            match engine.effective_scope(scope.as_deref()) {
                Some(scope) => println!("{scope}"),
                None => println!("(root)"),
            }
            Ok(ExitCode::Success)
        }
        Commands::Path { scope } => {
            let effective = engine.effective_scope(scope.as_deref());
            match source::scope_file_path(engine.settings().base_dir(), effective.as_deref()) {
                Ok(path) => {
                    println!("{}", path.display());
                    Ok(ExitCode::Success)
                }
                Err(error) => {
                    eprintln!("envscope: {error}");
                    Ok(ExitCode::from_config_error(&error))
                }
            }
        }
    }
}

fn settings_from(cli: &Cli) -> EngineSettings {
    let mut settings = EngineSettings::new(cli.base_dir.clone())
        .with_scope_env_var(cli.scope_env_var.clone())
        .with_strict(cli.strict);
    if let Some(scope) = &cli.default_scope {
        settings = settings.with_default_scope(scope.clone());
    }
    if let Some(prefix) = &cli.env_prefix {
        settings = settings.with_env_prefix(prefix.clone());
    }
    settings
}

fn run_get(
    engine: &Engine,
    key: &str,
    value_type: ValueType,
    scope: Option<&str>,
    default: Option<&str>,
) -> anyhow::Result<ExitCode> {
    let outcome = match value_type {
        ValueType::String => engine.get_string(key, options(scope, default.map(str::to_string))),
        ValueType::Number => {
            let default = match default {
                Some(raw) => match convert::parse_number(raw) {
                    Some(value) => Some(value),
                    None => {
                        eprintln!("envscope: --default {raw:?} is not a number");
                        return Ok(ExitCode::UsageError);
                    }
                },
                None => None,
            };
            engine
                .get_number(key, options(scope, default))
                .map(|value| value.map(|number| number.to_string()))
        }
        ValueType::Bool => {
            let default = match default {
                Some(raw) => match convert::parse_bool(raw) {
                    Some(value) => Some(value),
                    None => {
                        eprintln!("envscope: --default {raw:?} is not a boolean");
                        return Ok(ExitCode::UsageError);
                    }
                },
                None => None,
            };
            engine
                .get_bool(key, options(scope, default))
                .map(|value| value.map(|flag| flag.to_string()))
        }
        ValueType::Json => {
            let default = match default {
                Some(raw) => match convert::parse_json::<serde_json::Value>(raw) {
                    Some(value) => Some(value),
                    None => {
                        eprintln!("envscope: --default {raw:?} is not valid JSON");
                        return Ok(ExitCode::UsageError);
                    }
                },
                None => None,
            };
            match engine.get_json::<serde_json::Value>(key, options(scope, default)) {
                Ok(Some(value)) => Ok(Some(
                    serde_json::to_string(&value).context("serializing resolved JSON value")?,
                )),
                Ok(None) => Ok(None),
                Err(error) => Err(error),
            }
        }
    };

    match outcome {
        Ok(Some(text)) => {
            println!("{text}");
            Ok(ExitCode::Success)
        }
        Ok(None) => Ok(ExitCode::Success),
        Err(error) => {
            eprintln!("envscope: {error}");
            Ok(ExitCode::from_config_error(&error))
        }
    }
}

fn options<T>(scope: Option<&str>, default: Option<T>) -> GetOptions<T> {
    let mut options = GetOptions::new();
    if let Some(scope) = scope {
        options = options.with_scope(scope);
    }
    if let Some(default) = default {
        options = options.with_default(default);
    }
    options
}
