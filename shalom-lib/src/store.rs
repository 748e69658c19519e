//! The catalog store: canonical record list, load pipeline and filter state.
//!
//! The store is an ordinary value constructed by the application and handed
//! to its consumers; there is no process-wide instance. Records are replaced
//! wholesale on every successful load and are only reachable through shared
//! references, so consumers cannot mutate them. All derived views (see
//! [`views`](crate::views), [`navigation`](crate::navigation) and
//! [`query`](crate::query)) are recomputed from the current state on every
//! call.
//!
//! # Load pipeline
//!
//! ```text
//! Idle ──begin_load──▶ Loading ──finish_load(Ok)──▶ Ready
//!                         │
//!                         └──finish_load(Err)──▶ Failed (items untouched)
//! ```

use shalom_core::Record;
use shalom_data::{AssetIndex, DataError, MatchMode, TableSource, parse_table};

use crate::error::StoreError;

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records now held by the store.
    pub loaded: usize,
    /// Records whose media asset could not be matched (empty `file_path`).
    pub unresolved: usize,
    /// Table rows that could not become records.
    pub skipped: usize,
}

/// In-memory catalog of archive records plus the UI's filter state.
pub struct CatalogStore {
    pub(crate) items: Vec<Record>,
    loading: bool,
    error: Option<String>,
    pub(crate) selected_tags: Vec<String>,
    pub(crate) current_year: Option<i32>,
    assets: AssetIndex,
    match_mode: MatchMode,
}

impl CatalogStore {
    /// An empty store that resolves media against `assets`.
    pub fn new(assets: AssetIndex) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            selected_tags: Vec::new(),
            current_year: None,
            assets,
            match_mode: MatchMode::default(),
        }
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// All records in source-table order.
    pub fn items(&self) -> &[Record] {
        &self.items
    }

    /// True strictly while a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed load, cleared when a new load starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Selected tags in the order they were selected.
    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    /// The year cursor. When set, always one of [`years`](Self::years).
    pub fn current_year(&self) -> Option<i32> {
        self.current_year
    }

    pub fn assets(&self) -> &AssetIndex {
        &self.assets
    }

    /// Fetch, parse and install the source table.
    ///
    /// On failure the error message is recorded in [`error`](Self::error) and
    /// the previously loaded records are kept. `loading` is cleared whatever
    /// the outcome, including when the returned future is dropped mid-fetch.
    pub async fn load_archive_data<S: TableSource>(
        &mut self,
        source: &S,
    ) -> Result<LoadReport, StoreError> {
        self.begin_load()?;
        log::debug!("Loading archive table from {}", source.describe());

        let in_flight = InFlight { store: Some(self) };
        let outcome = source.fetch_table().await;
        in_flight.finish(outcome)
    }

    /// Enter the loading state.
    ///
    /// Rejects the request when a load is already in flight so that two loads
    /// can never race to install their results.
    pub fn begin_load(&mut self) -> Result<(), StoreError> {
        if self.loading {
            log::warn!("Ignoring catalog load request: a load is already in flight");
            return Err(StoreError::LoadInProgress);
        }
        self.error = None;
        self.loading = true;
        Ok(())
    }

    /// Complete a load started with [`begin_load`](Self::begin_load) using
    /// the fetched table text (or the fetch error).
    pub fn finish_load(
        &mut self,
        fetched: Result<String, DataError>,
    ) -> Result<LoadReport, StoreError> {
        let result = fetched.and_then(|text| parse_table(&text));
        self.loading = false;

        let parsed = match result {
            Ok(parsed) => parsed,
            Err(e) => {
                log::error!("Error loading archive data: {e}");
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        let skipped = parsed.skipped;
        let records: Vec<Record> = parsed
            .rows
            .into_iter()
            .map(|row| {
                let path = self
                    .assets
                    .resolve_with(self.match_mode, row.visual_type, &row.visual_name)
                    .to_string();
                if path.is_empty() {
                    log::debug!("No media asset for {} '{}'", row.visual_type, row.visual_name);
                }
                row.into_record(path)
            })
            .collect();

        let report = LoadReport {
            loaded: records.len(),
            unresolved: records.iter().filter(|r| !r.has_asset()).count(),
            skipped,
        };

        self.items = records;
        self.reconcile_year_cursor();

        log::debug!(
            "Loaded {} records ({} without media, {} rows skipped)",
            report.loaded,
            report.unresolved,
            report.skipped
        );
        Ok(report)
    }

    /// Leave the loading state without touching the records, for a load
    /// that was abandoned before its result arrived.
    pub fn cancel_load(&mut self) {
        if self.loading {
            log::warn!("Catalog load abandoned before completion");
            self.loading = false;
            self.error = Some(StoreError::LoadCancelled.to_string());
        }
    }

    /// Point the cursor at the earliest year when it is unset or no longer
    /// names a year present in the records.
    fn reconcile_year_cursor(&mut self) {
        let valid = self
            .current_year
            .is_some_and(|y| self.items.iter().any(|r| r.year == Some(y)));
        if !valid {
            self.current_year = self.items.iter().filter_map(|r| r.year).min();
        }
    }

    /// Select `tag` if it is not selected, deselect it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        match self.selected_tags.iter().position(|t| t == tag) {
            Some(i) => {
                self.selected_tags.remove(i);
            }
            None => self.selected_tags.push(tag.to_string()),
        }
    }

    pub fn clear_selected_tags(&mut self) {
        self.selected_tags.clear();
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(AssetIndex::empty())
    }
}

/// Clears the loading state if a load future is dropped mid-fetch.
struct InFlight<'a> {
    store: Option<&'a mut CatalogStore>,
}

impl InFlight<'_> {
    fn finish(mut self, fetched: Result<String, DataError>) -> Result<LoadReport, StoreError> {
        match self.store.take() {
            Some(store) => store.finish_load(fetched),
            None => Err(StoreError::LoadCancelled),
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(store) = self.store.take() {
            store.cancel_load();
        }
    }
}
