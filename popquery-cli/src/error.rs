//! Error types emitted by the popquery CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use popquery_core::QueryError;
use popquery_data::LoadError;
use thiserror::Error;

/// Errors emitted by the popquery CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The requested menu number has no query behind it.
    #[error("no query is numbered {number}; run `popquery list` to see the menu")]
    UnknownQuery { number: u8 },
    /// Loading the datasets failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A query could not produce a result.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
