use serde_json::json;
use sfpopos_core::{
    DataSource, Hours, PlaceId, PlaceStore, PlaceValidationError, StoreError,
};
use std::io::Write;

#[test]
fn bundled_dataset_is_valid_and_uniquely_keyed() {
    let store = PlaceStore::bundled().unwrap();
    assert!(!store.is_empty());

    let mut seen = std::collections::HashSet::new();
    for place in &store {
        assert!(seen.insert(place.id), "duplicate id {}", place.id);
        assert!(place.primary_image().is_some());
        assert!(store.get(place.id).is_some());
    }
}

#[test]
fn bundled_dataset_keeps_structured_hours_opaque() {
    let store = PlaceStore::bundled().unwrap();
    let structured = store
        .iter()
        .find(|place| matches!(place.hours, Hours::Structured(_)))
        .expect("bundled data carries one structured schedule");
    let rendered = structured.hours.to_string();
    assert!(rendered.starts_with('{'), "unexpected hours: {rendered}");
}

#[test]
fn unknown_dataset_keys_are_ignored() {
    let json = json!([
        {
            "id": 12,
            "title": "Spear Street Terrace",
            "address": "1 Market St",
            "images": ["spear.jpg"],
            "hours": "Mon-Fri 8am-8pm",
            "desc": "A terrace.",
            "features": ["seating"]
        }
    ])
    .to_string();

    let store = PlaceStore::from_json_str(&json).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.places()[0].id, PlaceId(12));
}

#[test]
fn record_without_images_fails_load_with_diagnostic() {
    let json = json!([
        { "id": 1, "title": "Good", "address": "1 A St", "images": ["a.jpg"], "hours": "x" },
        { "id": 2, "title": "Bad", "address": "2 B St", "images": [], "hours": "x" }
    ])
    .to_string();

    let err = PlaceStore::from_json_str(&json).unwrap_err();
    assert!(matches!(
        err,
        StoreError::MalformedRecord {
            index: 1,
            id: PlaceId(2),
            reason: PlaceValidationError::MissingImage,
        }
    ));
    assert!(err.to_string().contains("id 2"));
}

#[test]
fn blank_first_image_fails_load_even_with_later_images() {
    let json = json!([
        { "id": 4, "title": "Blank Photo Court", "address": "4 D St",
          "images": ["  ", "b.jpg"], "hours": "x" }
    ])
    .to_string();

    let err = PlaceStore::from_json_str(&json).unwrap_err();
    assert!(matches!(
        err,
        StoreError::MalformedRecord {
            index: 0,
            id: PlaceId(4),
            reason: PlaceValidationError::BlankPrimaryImage,
        }
    ));
    assert!(err.to_string().contains("images[0]"));
}

#[test]
fn blank_title_fails_load() {
    let json = json!([
        { "id": 1, "title": "  ", "address": "1 A St", "images": ["a.jpg"], "hours": "x" }
    ])
    .to_string();

    let err = PlaceStore::from_json_str(&json).unwrap_err();
    assert!(matches!(
        err,
        StoreError::MalformedRecord {
            reason: PlaceValidationError::BlankTitle,
            ..
        }
    ));
}

#[test]
fn non_array_json_is_a_parse_error() {
    let err = PlaceStore::from_json_str("{\"id\": 1}").unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn load_from_path_reads_file_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!([
            { "id": 3, "title": "Rincon Center Atrium", "address": "101 Spear St",
              "images": ["rincon.jpg"], "hours": "7am-7pm" }
        ])
    )
    .unwrap();

    let source = DataSource::File(file.path().to_path_buf());
    let store = source.load().unwrap();
    assert_eq!(store.get(PlaceId(3)).unwrap().title, "Rincon Center Atrium");
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = PlaceStore::load_from_path(&path).unwrap_err();
    match err {
        StoreError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
