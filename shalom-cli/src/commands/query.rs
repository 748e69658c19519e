use shalom_lib::{CatalogStore, VisualType};

use super::print_records;

pub(crate) fn run_search(store: &CatalogStore, query: &str) {
    print_records(&format!("Matches for '{query}'"), &store.search_items(query));
}

pub(crate) fn run_random(store: &CatalogStore, count: usize, visual_type: Option<VisualType>) {
    let (title, records) = match visual_type {
        Some(t) => (
            format!("Random {} records", t.display_name()),
            store.random_by_type(t, count),
        ),
        None => ("Random records".to_string(), store.random_items(count)),
    };
    print_records(&title, &records);
}

pub(crate) fn run_range(store: &CatalogStore, start: i32, end: i32) {
    if start > end {
        log::warn!("Empty range: {start} is after {end}");
    }
    print_records(
        &format!("Records from {start} to {end}"),
        &store.filter_by_year_range(start, end),
    );
}
