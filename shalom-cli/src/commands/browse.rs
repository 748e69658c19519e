use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shalom_lib::{CatalogStore, VisualType};

use crate::CliError;

use super::print_records;

/// List the distinct years with per-type counts.
pub(crate) fn run_years(store: &CatalogStore) {
    let years = store.years();
    log::info!(
        "{} ({})",
        "Years".if_supports_color(Stdout, |t| t.bold()),
        years.len(),
    );
    for year in years {
        let records = store.items_by_year(year);
        let doves = records
            .iter()
            .filter(|r| r.visual_type == VisualType::Dove)
            .count();
        log::info!(
            "  {}  {:>4} records  ({} doves, {} hawks)",
            year.if_supports_color(Stdout, |t| t.cyan()),
            records.len(),
            doves,
            records.len() - doves,
        );
    }
}

/// Move the cursor to `year` (or leave it on the earliest year) and show
/// the records dated there together with the neighbouring years.
pub(crate) fn run_year(store: &mut CatalogStore, year: Option<i32>) -> Result<(), CliError> {
    if let Some(year) = year {
        if !store.set_year(year) {
            return Err(CliError::usage(format!("No records dated {year}")));
        }
    }
    let Some(current) = store.current_year() else {
        log::warn!("The catalog has no dated records");
        return Ok(());
    };

    print_records(&format!("Records from {current}"), &store.current_year_items());
    crate::log_blank();

    let neighbour = |y: Option<i32>| match y {
        Some(y) => y.to_string(),
        None => "-".to_string(),
    };
    log::info!(
        "  {} {}    {} {}",
        "prev:".if_supports_color(Stdout, |t| t.dimmed()),
        neighbour(store.prev_year()),
        "next:".if_supports_color(Stdout, |t| t.dimmed()),
        neighbour(store.next_year()),
    );
    Ok(())
}
