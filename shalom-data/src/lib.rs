//! Source-table parsing, media asset matching and table fetching for the
//! Shalom archive catalog.

pub mod assets;
pub mod error;
pub mod source;
pub mod table;

pub use assets::{AssetIndex, MEDIA_EXTENSIONS, MatchMode, discover};
pub use error::DataError;
pub use source::{DEFAULT_TABLE_PATH, FileSource, HttpSource, TableSource, TextSource};
pub use table::{TableParse, TableRow, parse_table};
