use super::*;

const TABLE: &str = "\
VisualName,Type,Headline,Text,Tags,Year
Olive,Dove,Olive branch,,\"peace,hope\",1980
Missile,Hawk,Missile parade,,\"war,military\",1979
Dove_Flight,Dove,Doves in flight,,\"peace,birds\",1979
Undated,Hawk,No year,,war,unknown
Tank,Hawk,Tank column,,\"war,peace\",1981
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

#[test]
fn test_partition_by_type() {
    let store = loaded();
    assert_eq!(names(&store.dove_items()), ["Olive", "Dove_Flight"]);
    assert_eq!(names(&store.hawk_items()), ["Missile", "Undated", "Tank"]);
    assert_eq!(store.items_count(), 5);
    assert_eq!(store.dove_count(), 2);
    assert_eq!(store.hawk_count(), 3);
    assert_eq!(store.dove_count() + store.hawk_count(), store.items_count());
}

#[test]
fn test_items_by_year_and_tag() {
    let store = loaded();
    assert_eq!(names(&store.items_by_year(1979)), ["Missile", "Dove_Flight"]);
    assert!(store.items_by_year(2000).is_empty());
    assert_eq!(names(&store.items_by_tag("peace")), ["Olive", "Dove_Flight", "Tank"]);
    assert!(store.items_by_tag("Peace").is_empty());
}

#[test]
fn test_years_skip_unparsable() {
    let store = loaded();
    assert_eq!(store.years(), vec![1979, 1980, 1981]);
}

#[test]
fn test_distinct_tags() {
    let store = loaded();
    assert_eq!(store.all_tags(), ["birds", "hope", "military", "peace", "war"]);
    assert_eq!(store.tags_by_type(VisualType::Dove), ["birds", "hope", "peace"]);
    assert_eq!(store.tags_by_type(VisualType::Hawk), ["military", "peace", "war"]);
}

#[test]
fn test_related_tags() {
    let store = loaded();
    assert_eq!(store.related_tags("war"), ["military", "peace"]);
    assert_eq!(store.related_tags("birds"), ["peace"]);
    assert!(store.related_tags("absent").is_empty());
}

#[test]
fn test_sorted_items() {
    let store = loaded();
    assert_eq!(
        names(&store.sorted_items()),
        ["Dove_Flight", "Missile", "Olive", "Tank", "Undated"]
    );
    // Source order is untouched.
    assert_eq!(store.items()[0].visual_name, "Olive");
}

#[test]
fn test_tag_counts() {
    let store = loaded();
    let counts = store.tag_counts();
    assert_eq!(counts["peace"], 3);
    assert_eq!(counts["war"], 3);
    assert_eq!(counts["birds"], 1);
    assert_eq!(counts.len(), 5);
}

#[test]
fn test_filtered_by_tags_is_intersection() {
    let mut store = loaded();
    assert_eq!(store.filtered_by_tags().len(), store.items_count());

    store.toggle_tag("peace");
    store.toggle_tag("war");
    assert_eq!(names(&store.filtered_by_tags()), ["Tank"]);

    let by_peace = store.items_by_tag("peace");
    let by_war = store.items_by_tag("war");
    let intersection: Vec<&Record> = by_peace
        .iter()
        .copied()
        .filter(|r| by_war.iter().any(|w| std::ptr::eq(*w, *r)))
        .collect();
    assert_eq!(store.filtered_by_tags(), intersection);
}

#[test]
fn test_current_year_items() {
    let mut store = loaded();
    assert_eq!(store.current_year(), Some(1979));
    assert_eq!(names(&store.current_year_items()), ["Missile", "Dove_Flight"]);

    assert!(store.set_year(1981));
    assert_eq!(names(&store.current_year_items()), ["Tank"]);

    assert!(CatalogStore::default().current_year_items().is_empty());
}
