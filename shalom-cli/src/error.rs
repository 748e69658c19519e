use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Loading the catalog failed
    #[error("Load failed: {0}")]
    Load(#[from] shalom_lib::StoreError),

    /// Media directory could not be scanned
    #[error("Asset scan of {path} failed: {source}")]
    Assets {
        path: String,
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Invalid command arguments
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
