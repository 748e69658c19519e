//! Catalog store for the Shalom media archive.
//!
//! Loads the archive's source table, matches each record to a media asset
//! and exposes the derived views, year navigation, queries and tag filter
//! state consumed by the presentation layer.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`store`] | Record list, load pipeline, tag selection |
//! | [`views`] | Partitions, groupings, distinct years/tags, counts |
//! | [`navigation`] | Year cursor |
//! | [`query`] | Search, range filter, tag predicates, random sampling |
//! | [`shared`] | Shared handle with single-flight loading |
//! | [`settings`] | TOML settings file |

pub mod error;
pub mod navigation;
pub mod query;
pub mod settings;
pub mod shared;
pub mod store;
pub mod views;

pub use error::StoreError;
pub use settings::{Settings, load_settings, settings_path};
pub use shared::SharedCatalog;
pub use store::{CatalogStore, LoadReport};

// Re-export the types consumers need alongside the store.
pub use shalom_core::{Record, VisualType};
pub use shalom_data::{AssetIndex, FileSource, HttpSource, MatchMode, TableSource, TextSource};
