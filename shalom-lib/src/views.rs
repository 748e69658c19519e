//! Derived views over the catalog.
//!
//! Every view is recomputed from the store's current records and filter
//! state on each call. Nothing is cached, so a view can never be stale.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use shalom_core::{Record, VisualType};

use crate::store::CatalogStore;

impl CatalogStore {
    /// Records of one type, in source order.
    pub fn items_of_type(&self, visual_type: VisualType) -> Vec<&Record> {
        self.items
            .iter()
            .filter(|r| r.visual_type == visual_type)
            .collect()
    }

    pub fn dove_items(&self) -> Vec<&Record> {
        self.items_of_type(VisualType::Dove)
    }

    pub fn hawk_items(&self) -> Vec<&Record> {
        self.items_of_type(VisualType::Hawk)
    }

    /// Records dated exactly `year`. Records with an unparsable year never match.
    pub fn items_by_year(&self, year: i32) -> Vec<&Record> {
        self.items.iter().filter(|r| r.year == Some(year)).collect()
    }

    /// Records carrying `tag` (exact match).
    pub fn items_by_tag(&self, tag: &str) -> Vec<&Record> {
        self.items.iter().filter(|r| r.has_tag(tag)).collect()
    }

    /// Distinct years, ascending. Unparsable years are left out.
    pub fn years(&self) -> Vec<i32> {
        self.items
            .iter()
            .filter_map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct tags across all records, ascending.
    pub fn all_tags(&self) -> Vec<&str> {
        distinct_tags(self.items.iter())
    }

    /// Distinct tags of the records of one type, ascending.
    pub fn tags_by_type(&self, visual_type: VisualType) -> Vec<&str> {
        distinct_tags(self.items.iter().filter(|r| r.visual_type == visual_type))
    }

    /// Distinct tags that appear next to `tag` on some record, excluding
    /// `tag` itself, ascending.
    pub fn related_tags(&self, tag: &str) -> Vec<&str> {
        self.items
            .iter()
            .filter(|r| r.has_tag(tag))
            .flat_map(|r| r.tags.iter().map(String::as_str))
            .filter(|t| *t != tag)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All records ordered by year, then by visual name. Records with an
    /// unparsable year come last.
    pub fn sorted_items(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.items.iter().collect();
        sorted.sort_by(|a, b| {
            compare_years(a.year, b.year).then_with(|| a.visual_name.cmp(&b.visual_name))
        });
        sorted
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    pub fn dove_count(&self) -> usize {
        self.count_of_type(VisualType::Dove)
    }

    pub fn hawk_count(&self) -> usize {
        self.count_of_type(VisualType::Hawk)
    }

    pub fn count_of_type(&self, visual_type: VisualType) -> usize {
        self.items
            .iter()
            .filter(|r| r.visual_type == visual_type)
            .count()
    }

    /// Number of occurrences of each tag across all records.
    pub fn tag_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.items.iter().flat_map(|r| r.tags.iter()) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Records carrying every selected tag; all records when none is selected.
    pub fn filtered_by_tags(&self) -> Vec<&Record> {
        self.items_with_all_tags(self.selected_tags.as_slice())
    }

    /// Records dated at the year cursor; empty when the cursor is unset.
    pub fn current_year_items(&self) -> Vec<&Record> {
        match self.current_year {
            Some(year) => self.items_by_year(year),
            None => Vec::new(),
        }
    }
}

fn distinct_tags<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<&'a str> {
    records
        .flat_map(|r| r.tags.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn compare_years(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
