//! CLI error types.

use lemoo_config::ConfigError;
use lemoo_navigation::CodecError;
use lemoo_shell::NavigateError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("{0}")]
    Navigate(#[from] NavigateError),

    #[error("{0}")]
    Validation(String),
}
