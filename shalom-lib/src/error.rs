use shalom_data::DataError;
use thiserror::Error;

/// Errors surfaced by the catalog store and its settings.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Fetching or parsing the source table failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// A load was requested while another one is still in flight
    #[error("A catalog load is already in progress")]
    LoadInProgress,

    /// The load was dropped before it finished
    #[error("Catalog load was cancelled")]
    LoadCancelled,

    /// Settings file could not be read or parsed
    #[error("Settings error: {0}")]
    Settings(String),
}

impl StoreError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
