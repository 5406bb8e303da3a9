use super::*;

const SPEC_JSON: &[u8] = br#"{
    "walk": { "position": [0, 0], "size": [8, 8] },
    "jump": { "position": [8, 0], "size": [8, 12] }
}"#;

#[test]
fn parses_the_on_disk_format() {
    let spec = SpriteSheetSpec::from_json_bytes(SPEC_JSON).unwrap();
    assert_eq!(spec.len(), 2);
    assert_eq!(spec.region("walk"), Some(Rect::new(0, 0, 8, 8)));
    assert_eq!(spec.region("jump"), Some(Rect::new(8, 0, 8, 12)));
}

#[test]
fn unknown_names_resolve_to_none() {
    let spec = SpriteSheetSpec::from_json_bytes(SPEC_JSON).unwrap();
    assert_eq!(spec.region("swim"), None);
}

#[test]
fn rejects_malformed_json() {
    assert!(SpriteSheetSpec::from_json_bytes(b"{ nope").is_err());
    assert!(SpriteSheetSpec::from_json_bytes(br#"{"a": {"position": [1]}}"#).is_err());
}

#[test]
fn insert_replaces_existing_entries() {
    let mut spec = SpriteSheetSpec::new();
    assert!(spec.is_empty());
    spec.insert(
        "dot",
        SpriteEntry {
            position: [1, 2],
            size: [3, 4],
        },
    );
    spec.insert(
        "dot",
        SpriteEntry {
            position: [5, 6],
            size: [7, 8],
        },
    );
    assert_eq!(spec.len(), 1);
    assert_eq!(spec.region("dot"), Some(Rect::new(5, 6, 7, 8)));
}
