use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shalom_lib::CatalogStore;

/// Number of tags listed under "Top tags".
const TOP_TAGS: usize = 10;

pub(crate) fn run_summary(store: &CatalogStore) {
    let years = store.years();
    let unresolved = store.items().iter().filter(|r| !r.has_asset()).count();
    let undated = store.items().iter().filter(|r| r.year.is_none()).count();

    log::info!("{}", "Archive Summary".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Records:        {:>6}", store.items_count());
    log::info!(
        "  Doves:          {:>6}",
        store.dove_count().if_supports_color(Stdout, |t| t.green()),
    );
    log::info!(
        "  Hawks:          {:>6}",
        store.hawk_count().if_supports_color(Stdout, |t| t.red()),
    );
    match (years.first(), years.last()) {
        (Some(first), Some(last)) => {
            log::info!("  Years:          {:>6} ({first}-{last})", years.len())
        }
        _ => log::info!("  Years:          {:>6}", 0),
    }
    if undated > 0 {
        log::info!("  Undated:        {:>6}", undated);
    }
    log::info!("  Tags:           {:>6}", store.all_tags().len());
    log::info!("  Without media:  {:>6}", unresolved);

    let mut counts: Vec<(&str, usize)> = store.tag_counts().into_iter().collect();
    if counts.is_empty() {
        return;
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    crate::log_blank();
    log::info!("{}", "Top tags".if_supports_color(Stdout, |t| t.bold()));
    for (tag, count) in counts.into_iter().take(TOP_TAGS) {
        log::info!(
            "  {:<24} {:>4}",
            tag.if_supports_color(Stdout, |t| t.cyan()),
            count
        );
    }
}
