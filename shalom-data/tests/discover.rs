use shalom_core::VisualType;
use shalom_data::{AssetIndex, MEDIA_EXTENSIONS, discover};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

#[test]
fn discover_collects_media_files_only() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    touch(&data, "1979/dove/Peace.png");
    touch(&data, "1979/dove/notes.txt");
    touch(&data, "1979/hawk/March.MP4");
    touch(&data, "1980/hawk/clip.webm");
    touch(&data, "items.csv");

    let paths = discover(&data, MEDIA_EXTENSIONS).unwrap();
    assert_eq!(
        paths,
        vec![
            "/data/1979/dove/Peace.png",
            "/data/1979/hawk/March.MP4",
            "/data/1980/hawk/clip.webm",
        ]
    );
}

#[test]
fn discovered_paths_feed_the_index() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    touch(&data, "1979/dove/Peace_Poster.jpeg");
    touch(&data, "1979/hawk/Peace_Poster.jpg");

    let index = AssetIndex::from_paths(discover(&data, MEDIA_EXTENSIONS).unwrap());
    assert_eq!(index.len(), 2);
    assert_eq!(
        index.resolve(VisualType::Hawk, "peace_poster"),
        "/data/1979/hawk/Peace_Poster.jpg"
    );
    assert_eq!(
        index.resolve(VisualType::Dove, "Peace_Poster"),
        "/data/1979/dove/Peace_Poster.jpeg"
    );
}

#[test]
fn discover_missing_root_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(discover(&tmp.path().join("nope"), MEDIA_EXTENSIONS).is_err());
}
