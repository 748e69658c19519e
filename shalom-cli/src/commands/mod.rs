pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod query;
pub(crate) mod summary;
pub(crate) mod tags;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shalom_data::{DataError, MEDIA_EXTENSIONS, discover};
use shalom_lib::settings::{AssetSettings, SourceSettings};
use shalom_lib::{
    AssetIndex, CatalogStore, FileSource, HttpSource, MatchMode, Record, TableSource, VisualType,
};

use crate::CliError;

/// Where the source table comes from for this invocation.
pub(crate) enum CatalogSource {
    Http(HttpSource),
    File(FileSource),
}

impl CatalogSource {
    /// Pick the source: `--source` wins over the settings file. Arguments
    /// starting with `http://` or `https://` are base URLs, anything else is
    /// a path to a CSV file.
    pub(crate) fn select(arg: Option<&str>, settings: &SourceSettings) -> Self {
        match arg {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                Self::Http(HttpSource::new(url, &settings.table_path))
            }
            Some(path) => Self::File(FileSource::new(path)),
            None => match &settings.file {
                Some(path) => Self::File(FileSource::new(path.clone())),
                None => Self::Http(HttpSource::new(&settings.base_url, &settings.table_path)),
            },
        }
    }
}

impl TableSource for CatalogSource {
    async fn fetch_table(&self) -> Result<String, DataError> {
        match self {
            Self::Http(source) => source.fetch_table().await,
            Self::File(source) => source.fetch_table().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }
}

/// Scan the media directory (`--assets` or `[assets] root`) into an index.
/// Without one, every record ends up without an asset.
pub(crate) fn build_asset_index(
    arg: Option<&Path>,
    settings: &AssetSettings,
) -> Result<AssetIndex, CliError> {
    let Some(root) = arg.or(settings.root.as_deref()) else {
        log::debug!("No media directory configured, skipping asset matching");
        return Ok(AssetIndex::empty());
    };

    let paths = discover(root, MEDIA_EXTENSIONS).map_err(|source| CliError::Assets {
        path: root.display().to_string(),
        source,
    })?;
    log::debug!("Indexed {} media files under {}", paths.len(), root.display());
    Ok(AssetIndex::from_paths(paths))
}

/// Load the catalog from `source` and report what was skipped.
pub(crate) async fn load_catalog(
    source: &CatalogSource,
    assets: AssetIndex,
    match_mode: MatchMode,
) -> Result<CatalogStore, CliError> {
    let mut store = CatalogStore::new(assets).with_match_mode(match_mode);
    let report = store.load_archive_data(source).await?;

    log::debug!(
        "Loaded {} records from {} ({} without media)",
        report.loaded,
        source.describe(),
        report.unresolved,
    );
    if report.skipped > 0 {
        log::warn!(
            "{} Skipped {} unusable table rows",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.skipped,
        );
    }
    Ok(store)
}

/// Styled name of a visual type: doves green, hawks red.
pub(crate) fn type_label(visual_type: VisualType) -> String {
    let name = format!("{:<4}", visual_type.display_name());
    match visual_type {
        VisualType::Dove => name.if_supports_color(Stdout, |t| t.green()).to_string(),
        VisualType::Hawk => name.if_supports_color(Stdout, |t| t.red()).to_string(),
    }
}

fn year_label(year: Option<i32>) -> String {
    match year {
        Some(year) => year.to_string(),
        None => "----".to_string(),
    }
}

/// Print one record as a short block.
pub(crate) fn print_record(record: &Record) {
    log::info!(
        "  [{}] {} {}  {}",
        year_label(record.year).if_supports_color(Stdout, |t| t.cyan()),
        type_label(record.visual_type),
        record.visual_name.if_supports_color(Stdout, |t| t.bold()),
        record.headline,
    );
    if !record.text.is_empty() {
        log::info!("         {}", record.text);
    }
    if !record.tags.is_empty() {
        log::info!(
            "         {}",
            record.tags.join(", ").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if record.has_asset() {
        log::info!("         {}", record.file_path);
    } else {
        log::info!(
            "         {}",
            "(no media)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Print a titled list of records, or a note when it is empty.
pub(crate) fn print_records(title: &str, records: &[&Record]) {
    log::info!(
        "{} ({})",
        title.if_supports_color(Stdout, |t| t.bold()),
        records.len(),
    );
    if records.is_empty() {
        log::info!("  No matching records.");
        return;
    }
    for record in records {
        print_record(record);
    }
}
