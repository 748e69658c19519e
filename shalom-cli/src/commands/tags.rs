use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shalom_lib::{CatalogStore, VisualType};

use super::print_records;

/// List tags with their counts, optionally narrowed to one type or to the
/// tags that co-occur with `related`.
pub(crate) fn run_tags(store: &CatalogStore, visual_type: Option<VisualType>, related: Option<&str>) {
    let mut tags = match visual_type {
        Some(t) => store.tags_by_type(t),
        None => store.all_tags(),
    };
    if let Some(tag) = related {
        let related = store.related_tags(tag);
        tags.retain(|t| related.contains(t));
    }

    let title = match (visual_type, related) {
        (Some(t), Some(tag)) => format!("{} tags related to '{tag}'", t.display_name()),
        (Some(t), None) => format!("{} tags", t.display_name()),
        (None, Some(tag)) => format!("Tags related to '{tag}'"),
        (None, None) => "Tags".to_string(),
    };
    log::info!(
        "{} ({})",
        title.if_supports_color(Stdout, |t| t.bold()),
        tags.len(),
    );

    let counts = store.tag_counts();
    for tag in tags {
        log::info!(
            "  {:<24} {:>4}",
            tag.if_supports_color(Stdout, |t| t.cyan()),
            counts.get(tag).copied().unwrap_or(0),
        );
    }
}

/// Select `tags` and list the records carrying all of them (or any of
/// them with `any`).
pub(crate) fn run_filter(store: &mut CatalogStore, tags: &[String], any: bool) {
    for tag in tags {
        // Toggling twice would deselect a repeated tag.
        if !store.selected_tags().contains(tag) {
            store.toggle_tag(tag);
        }
    }
    log::debug!("Selected tags: {}", store.selected_tags().join(", "));

    let (title, records) = if any {
        ("Records with any selected tag", store.items_with_any_tags(store.selected_tags()))
    } else {
        ("Records with every selected tag", store.filtered_by_tags())
    };
    print_records(title, &records);
}
