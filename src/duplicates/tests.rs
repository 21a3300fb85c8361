use super::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

struct FakeTags(HashMap<PathBuf, Tags>);

impl FakeTags {
    fn new(entries: &[(&str, &str, &str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(path, artist, title)| {
                    (
                        PathBuf::from(path),
                        Tags {
                            artist: artist.to_string(),
                            title: title.to_string(),
                        },
                    )
                })
                .collect(),
        )
    }
}

impl TagReader for FakeTags {
    fn read(&self, path: &Path) -> Result<Tags, String> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| "no tag found".to_string())
    }
}

fn folder(key: &str, tracks: &[&str]) -> Folder {
    Folder {
        key: key.to_string(),
        tracks: tracks.iter().map(PathBuf::from).collect(),
    }
}

#[test]
fn finds_same_artist_and_title_across_folders() {
    let reader = FakeTags::new(&[
        ("/m/A/1.mp3", "Miles Davis", "So What"),
        ("/m/A/2.mp3", "Miles Davis", "Blue in Green"),
        ("/m/B/1.flac", "Miles Davis", "So What"),
        ("/m/B/2.flac", "Bill Evans", "Peace Piece"),
    ]);
    let folders = vec![
        folder("/m/A", &["/m/A/1.mp3", "/m/A/2.mp3"]),
        folder("/m/B", &["/m/B/1.flac", "/m/B/2.flac"]),
    ];

    let groups = find_duplicates(&folders, &reader);
    assert_eq!(
        groups,
        vec![DuplicateGroup {
            artist: "Miles Davis".into(),
            title: "So What".into(),
            paths: vec!["/m/A/1.mp3".into(), "/m/B/1.flac".into()],
        }]
    );
}

#[test]
fn matching_is_exact() {
    let reader = FakeTags::new(&[
        ("/m/1.mp3", "Miles Davis", "So What"),
        ("/m/2.mp3", "miles davis", "So What"),
        ("/m/3.mp3", "Miles Davis", "So What "),
    ]);
    let folders = vec![folder("/m", &["/m/1.mp3", "/m/2.mp3", "/m/3.mp3"])];
    assert!(find_duplicates(&folders, &reader).is_empty());
}

#[test]
fn unreadable_files_are_skipped() {
    let reader = FakeTags::new(&[
        ("/m/1.mp3", "A", "T"),
        ("/m/3.mp3", "A", "T"),
    ]);
    let folders = vec![folder("/m", &["/m/1.mp3", "/m/2.mp3", "/m/3.mp3"])];

    let groups = find_duplicates(&folders, &reader);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].paths, vec![PathBuf::from("/m/1.mp3"), PathBuf::from("/m/3.mp3")]);
}

#[test]
fn groups_keep_first_seen_order() {
    let reader = FakeTags::new(&[
        ("/m/1.mp3", "B", "Two"),
        ("/m/2.mp3", "A", "One"),
        ("/m/3.mp3", "A", "One"),
        ("/m/4.mp3", "B", "Two"),
    ]);
    let folders = vec![folder("/m", &["/m/1.mp3", "/m/2.mp3", "/m/3.mp3", "/m/4.mp3"])];

    let groups = find_duplicates(&folders, &reader);
    let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Two", "One"]);
}

#[test]
fn lofty_reader_reports_garbage_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.mp3");
    std::fs::write(&path, b"not a real mp3").unwrap();
    assert!(LoftyTagReader.read(&path).is_err());
}
