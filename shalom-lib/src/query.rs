//! Ad-hoc queries and random sampling.

use shalom_core::{Record, VisualType};

use crate::store::CatalogStore;

impl CatalogStore {
    /// Up to `count` distinct records drawn uniformly at random, in draw order.
    pub fn random_items(&self, count: usize) -> Vec<&Record> {
        self.random_items_with(&mut fastrand::Rng::new(), count)
    }

    pub fn random_items_with(&self, rng: &mut fastrand::Rng, count: usize) -> Vec<&Record> {
        draw(rng, self.items.iter().collect(), count)
    }

    /// Up to `count` distinct records of one type, drawn uniformly at random.
    pub fn random_by_type(&self, visual_type: VisualType, count: usize) -> Vec<&Record> {
        self.random_by_type_with(&mut fastrand::Rng::new(), visual_type, count)
    }

    pub fn random_by_type_with(
        &self,
        rng: &mut fastrand::Rng,
        visual_type: VisualType,
        count: usize,
    ) -> Vec<&Record> {
        draw(rng, self.items_of_type(visual_type), count)
    }

    /// Records dated within `start..=end`. Undated records never match.
    pub fn filter_by_year_range(&self, start: i32, end: i32) -> Vec<&Record> {
        self.items
            .iter()
            .filter(|r| r.year.is_some_and(|y| (start..=end).contains(&y)))
            .collect()
    }

    /// Records whose headline, text or any tag contains `query`, ignoring case.
    pub fn search_items(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|r| {
                r.headline.to_lowercase().contains(&needle)
                    || r.text.to_lowercase().contains(&needle)
                    || r.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Records carrying every tag in `tags`; all records when `tags` is empty.
    pub fn items_with_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&Record> {
        self.items
            .iter()
            .filter(|r| tags.iter().all(|t| r.has_tag(t.as_ref())))
            .collect()
    }

    /// Records carrying at least one tag in `tags`; none when `tags` is empty.
    pub fn items_with_any_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&Record> {
        self.items
            .iter()
            .filter(|r| tags.iter().any(|t| r.has_tag(t.as_ref())))
            .collect()
    }
}

/// Draw-and-remove sampling without replacement.
fn draw<'a>(
    rng: &mut fastrand::Rng,
    mut pool: Vec<&'a Record>,
    count: usize,
) -> Vec<&'a Record> {
    let mut drawn = Vec::with_capacity(count.min(pool.len()));
    while drawn.len() < count && !pool.is_empty() {
        let index = rng.usize(..pool.len());
        drawn.push(pool.swap_remove(index));
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
VisualName,Type,Headline,Text,Tags,Year
Olive,Dove,Olive branch,A symbol of PEACE,hope,1980
Missile,Hawk,Missile parade,,\"war,military\",1979
Dove_Flight,Dove,Doves in flight,,\"peace,birds\",1979
Undated,Hawk,No year,,Disarmament,unknown
Tank,Hawk,Tank column,Armour,\"war,peace\",1981
";

    fn loaded() -> CatalogStore {
        let mut store = CatalogStore::default();
        store.begin_load().unwrap();
        store.finish_load(Ok(TABLE.to_string())).unwrap();
        store
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.visual_name.clone()).collect()
    }

    fn assert_distinct_members(store: &CatalogStore, drawn: &[&Record]) {
        for (i, a) in drawn.iter().enumerate() {
            assert!(store.items().iter().any(|r| std::ptr::eq(r, *a)));
            for b in &drawn[i + 1..] {
                assert!(!std::ptr::eq(*a, *b), "duplicate draw: {}", a.visual_name);
            }
        }
    }

    #[test]
    fn test_random_items_are_distinct_members() {
        let store = loaded();
        let mut rng = fastrand::Rng::with_seed(7);
        for count in 0..=7 {
            let drawn = store.random_items_with(&mut rng, count);
            assert_eq!(drawn.len(), count.min(store.items_count()));
            assert_distinct_members(&store, &drawn);
        }
    }

    #[test]
    fn test_random_items_fresh_rng() {
        let store = loaded();
        let drawn = store.random_items(3);
        assert_eq!(drawn.len(), 3);
        assert_distinct_members(&store, &drawn);
    }

    #[test]
    fn test_random_by_type() {
        let store = loaded();
        let mut rng = fastrand::Rng::with_seed(42);
        let drawn = store.random_by_type_with(&mut rng, VisualType::Dove, 10);
        assert_eq!(drawn.len(), 2);
        assert!(drawn.iter().all(|r| r.visual_type == VisualType::Dove));
        assert_distinct_members(&store, &drawn);

        assert_eq!(store.random_by_type(VisualType::Hawk, 1).len(), 1);
    }

    #[test]
    fn test_random_on_empty_store() {
        let store = CatalogStore::default();
        assert!(store.random_items(5).is_empty());
    }

    #[test]
    fn test_filter_by_year_range_inclusive() {
        let store = loaded();
        assert_eq!(
            names(&store.filter_by_year_range(1979, 1980)),
            ["Olive", "Missile", "Dove_Flight"]
        );
        assert_eq!(names(&store.filter_by_year_range(1981, 1981)), ["Tank"]);
        assert!(store.filter_by_year_range(1981, 1979).is_empty());
        assert_eq!(store.items_count(), 5);
    }

    #[test]
    fn test_search_is_case_insensitive_and_multi_field() {
        let store = loaded();
        assert_eq!(names(&store.search_items("PARADE")), ["Missile"]);
        assert_eq!(names(&store.search_items("armour")), ["Tank"]);
        // Tag-only match.
        assert_eq!(names(&store.search_items("disarm")), ["Undated"]);
        assert_eq!(
            names(&store.search_items("peace")),
            ["Olive", "Dove_Flight", "Tank"]
        );
        assert!(store.search_items("zeppelin").is_empty());
    }

    #[test]
    fn test_search_does_not_look_at_visual_name() {
        let store = loaded();
        assert!(store.search_items("dove_flight").is_empty());
    }

    #[test]
    fn test_items_with_all_and_any_tags() {
        let store = loaded();
        assert_eq!(names(&store.items_with_all_tags(&["war", "peace"])), ["Tank"]);
        assert_eq!(
            names(&store.items_with_any_tags(&["birds", "military"])),
            ["Missile", "Dove_Flight"]
        );
        assert_eq!(store.items_with_all_tags::<&str>(&[]).len(), 5);
        assert!(store.items_with_any_tags::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_all_tags_ignores_selection() {
        let mut store = loaded();
        store.toggle_tag("birds");
        assert_eq!(names(&store.items_with_all_tags(&["war"])), ["Missile", "Tank"]);
        assert_eq!(names(&store.filtered_by_tags()), ["Dove_Flight"]);
    }
}
