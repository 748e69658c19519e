//! Where the source table comes from.
//!
//! The catalog only needs the raw text of the table. [`HttpSource`] fetches it
//! from the deployed application (`{base_url}data/items.csv`), [`FileSource`]
//! reads a local copy and [`TextSource`] wraps text already in memory.

use std::path::PathBuf;

use crate::error::DataError;

/// Relative location of the source table under the application's base URL.
pub const DEFAULT_TABLE_PATH: &str = "data/items.csv";

/// A provider of the raw source table text.
#[allow(async_fn_in_trait)]
pub trait TableSource {
    /// Fetch the whole table as text.
    async fn fetch_table(&self) -> Result<String, DataError>;

    /// Human-readable location, used in log messages.
    fn describe(&self) -> String;
}

/// Fetches the table with one HTTP GET.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Source for `{base_url}{table_path}`. A missing trailing slash on
    /// `base_url` is added.
    pub fn new(base_url: &str, table_path: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, table_path)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str, table_path: &str) -> Self {
        Self {
            client,
            url: table_url(base_url, table_path),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TableSource for HttpSource {
    async fn fetch_table(&self) -> Result<String, DataError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DataError::fetch(format!("Failed to fetch '{}': {e}", self.url)))?;

        if !response.status().is_success() {
            return Err(DataError::Status {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| DataError::fetch(format!("Failed to read response from '{}': {e}", self.url)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the table from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for FileSource {
    async fn fetch_table(&self) -> Result<String, DataError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Table text that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TableSource for TextSource {
    async fn fetch_table(&self) -> Result<String, DataError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "<in-memory table>".to_string()
    }
}

/// Join the application's base URL and the table's relative path.
pub fn table_url(base_url: &str, table_path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = table_path.trim_start_matches('/');
    format!("{base}/{path}")
}
