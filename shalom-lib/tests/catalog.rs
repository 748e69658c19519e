use shalom_lib::{
    AssetIndex, CatalogStore, FileSource, MatchMode, StoreError, TextSource, VisualType,
};
use shalom_data::{MEDIA_EXTENSIONS, discover};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ITEMS_CSV: &str = "\
VisualName,Type,Headline,Text,Tags,Year
Foo,Dove,H,,\"a,b\",1979
Peace_Poster,Dove,Give peace a chance,Printed in Haifa,\"peace
poster\",1979
Missile,Hawk,Missile parade,,\"war,parade\",1980
Lost_Reel,Hawk,Lost reel,Footage never found,war,1981
";

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn setup_archive() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    touch(&data, "1979/dove/Foo.png");
    touch(&data, "1979/dove/Peace_Poster.mp4");
    touch(&data, "1980/hawk/MISSILE.webm");
    fs::write(data.join("items.csv"), ITEMS_CSV).unwrap();
    tmp
}

fn store_for(tmp: &TempDir) -> CatalogStore {
    let paths = discover(&tmp.path().join("data"), MEDIA_EXTENSIONS).unwrap();
    CatalogStore::new(AssetIndex::from_paths(paths))
}

#[tokio::test]
async fn load_from_file_resolves_assets() {
    let tmp = setup_archive();
    let mut store = store_for(&tmp);
    let source = FileSource::new(tmp.path().join("data").join("items.csv"));

    let report = store.load_archive_data(&source).await.unwrap();
    assert_eq!(report.loaded, 4);
    assert_eq!(report.unresolved, 1);
    assert_eq!(report.skipped, 0);

    let foo = &store.items()[0];
    assert_eq!(foo.visual_name, "Foo");
    assert_eq!(foo.visual_type, VisualType::Dove);
    assert_eq!(foo.headline, "H");
    assert_eq!(foo.text, "");
    assert_eq!(foo.tags, vec!["a", "b"]);
    assert_eq!(foo.year, Some(1979));
    assert_eq!(foo.file_path, "/data/1979/dove/Foo.png");

    let peace = &store.items()[1];
    assert_eq!(peace.tags, vec!["peace", "poster"]);
    assert_eq!(peace.file_path, "/data/1979/dove/Peace_Poster.mp4");

    assert_eq!(store.items()[2].file_path, "/data/1980/hawk/MISSILE.webm");
}

#[tokio::test]
async fn unmatched_asset_is_a_silent_miss() {
    let tmp = setup_archive();
    let mut store = store_for(&tmp);
    store
        .load_archive_data(&FileSource::new(tmp.path().join("data/items.csv")))
        .await
        .unwrap();

    let lost = store
        .items()
        .iter()
        .find(|r| r.visual_name == "Lost_Reel")
        .unwrap();
    assert_eq!(lost.file_path, "");
    assert_eq!(lost.headline, "Lost reel");
    assert_eq!(lost.text, "Footage never found");
    assert_eq!(lost.tags, vec!["war"]);
    assert_eq!(lost.year, Some(1981));
    assert!(store.error().is_none());
}

#[tokio::test]
async fn failed_reload_preserves_items() {
    let tmp = setup_archive();
    let mut store = store_for(&tmp);
    store
        .load_archive_data(&FileSource::new(tmp.path().join("data/items.csv")))
        .await
        .unwrap();
    let before = store.items().to_vec();
    let cursor = store.current_year();

    let missing = FileSource::new(tmp.path().join("data/missing.csv"));
    let err = store.load_archive_data(&missing).await.unwrap_err();
    assert!(matches!(err, StoreError::Data(_)));

    assert_eq!(store.items(), before.as_slice());
    assert_eq!(store.current_year(), cursor);
    assert!(!store.error().unwrap_or_default().is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn reload_replaces_items_wholesale() {
    let mut store = CatalogStore::default();
    store
        .load_archive_data(&TextSource::new(ITEMS_CSV))
        .await
        .unwrap();
    assert_eq!(store.items_count(), 4);

    store
        .load_archive_data(&TextSource::new("VisualName,Type,Year\nOnly,Hawk,1990\n"))
        .await
        .unwrap();
    assert_eq!(store.items_count(), 1);
    assert_eq!(store.items()[0].visual_name, "Only");
    assert_eq!(store.current_year(), Some(1990));
}

#[tokio::test]
async fn stem_matching_avoids_substring_collisions() {
    let assets = AssetIndex::from_paths([
        "/data/1979/dove/Foo_Bar.png",
        "/data/1979/dove/Foo.png",
        "/data/1979/dove/Bar.png",
    ]);
    let table = "VisualName,Type\nBar,Dove\n";

    let mut substring = CatalogStore::new(AssetIndex::from_paths(assets.paths()));
    substring
        .load_archive_data(&TextSource::new(table))
        .await
        .unwrap();
    assert_eq!(substring.items()[0].file_path, "/data/1979/dove/Bar.png");

    let mut stem = CatalogStore::new(assets).with_match_mode(MatchMode::Stem);
    stem.load_archive_data(&TextSource::new("VisualName,Type\nfoo,Dove\n"))
        .await
        .unwrap();
    assert_eq!(stem.items()[0].file_path, "/data/1979/dove/Foo.png");
}

#[tokio::test]
async fn tag_filter_and_navigation_after_load() {
    let mut store = CatalogStore::default();
    store
        .load_archive_data(&TextSource::new(ITEMS_CSV))
        .await
        .unwrap();

    store.toggle_tag("war");
    assert_eq!(store.filtered_by_tags().len(), 2);
    store.toggle_tag("parade");
    let filtered = store.filtered_by_tags();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].visual_name, "Missile");
    store.clear_selected_tags();
    assert_eq!(store.filtered_by_tags().len(), 4);

    assert_eq!(store.years(), vec![1979, 1980, 1981]);
    assert!(store.go_to_next_year());
    assert_eq!(store.current_year_items()[0].visual_name, "Missile");
}
