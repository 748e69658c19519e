//! Source table (CSV) parser.
//!
//! The first row names the columns; every following row is one record.
//! Columns are looked up by header name, so their order in the file does not
//! matter and extra columns are ignored. Row-level problems never fail the
//! parse: missing optional cells fall back to defaults and only rows that
//! cannot carry a valid record at all are skipped (and counted).

use shalom_core::{Record, VisualType, parse_year, split_tags};

use crate::error::DataError;

pub const COL_VISUAL_NAME: &str = "VisualName";
pub const COL_TYPE: &str = "Type";
pub const COL_HEADLINE: &str = "Headline";
pub const COL_TEXT: &str = "Text";
pub const COL_TAGS: &str = "Tags";
pub const COL_YEAR: &str = "Year";

/// One parsed row, everything a [`Record`] needs except the asset path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub visual_name: String,
    pub visual_type: VisualType,
    pub headline: String,
    pub text: String,
    pub tags: Vec<String>,
    pub year: Option<i32>,
}

impl TableRow {
    /// Finish the row into a record with the resolved asset path.
    pub fn into_record(self, file_path: impl Into<String>) -> Record {
        Record {
            visual_name: self.visual_name,
            visual_type: self.visual_type,
            headline: self.headline,
            text: self.text,
            tags: self.tags,
            year: self.year,
            file_path: file_path.into(),
        }
    }
}

/// Result of parsing a whole table.
#[derive(Debug, Clone, Default)]
pub struct TableParse {
    /// Rows in source order.
    pub rows: Vec<TableRow>,
    /// Rows dropped because of broken CSV framing or an unknown `Type`.
    pub skipped: usize,
}

/// Header positions of the known columns.
struct Columns {
    visual_name: usize,
    visual_type: usize,
    headline: Option<usize>,
    text: Option<usize>,
    tags: Option<usize>,
    year: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DataError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };

        Ok(Self {
            visual_name: find(COL_VISUAL_NAME)
                .ok_or_else(|| DataError::missing_column(COL_VISUAL_NAME))?,
            visual_type: find(COL_TYPE).ok_or_else(|| DataError::missing_column(COL_TYPE))?,
            headline: find(COL_HEADLINE),
            text: find(COL_TEXT),
            tags: find(COL_TAGS),
            year: find(COL_YEAR),
        })
    }
}

/// Parse the raw text of the source table.
///
/// Fails only when the text has a header row lacking `VisualName` or `Type`.
/// Empty input yields an empty table.
pub fn parse_table(content: &str) -> Result<TableParse, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Ok(TableParse::default());
    }
    let columns = Columns::from_headers(&headers)?;

    let mut parsed = TableParse::default();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed table row: {e}");
                parsed.skipped += 1;
                continue;
            }
        };

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let cell = |i: Option<usize>| i.and_then(|i| record.get(i));

        let type_cell = cell(Some(columns.visual_type)).unwrap_or("");
        let visual_type = match type_cell.parse::<VisualType>() {
            Ok(t) => t,
            Err(e) => {
                let line = record.position().map_or(0, |p| p.line());
                log::warn!("Skipping table row at line {line}: {e}");
                parsed.skipped += 1;
                continue;
            }
        };

        parsed.rows.push(TableRow {
            visual_name: cell(Some(columns.visual_name)).unwrap_or("").to_string(),
            visual_type,
            headline: cell(columns.headline).unwrap_or("").to_string(),
            text: cell(columns.text).unwrap_or("").to_string(),
            tags: cell(columns.tags).map(split_tags).unwrap_or_default(),
            year: cell(columns.year).and_then(parse_year),
        });
    }

    Ok(parsed)
}
