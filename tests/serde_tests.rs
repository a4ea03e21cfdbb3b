#![cfg(feature = "serde")]

//! Integration tests for serde support in combinars.
//!
//! Property paths serialize as their display string, so they can be kept in
//! configuration files next to the values they address.

use combinars::props::{PropertyPath, Segment, get};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("user.name")]
#[case("orders[0].sku")]
#[case("meta[\"a.b\"]")]
fn test_path_serializes_as_string(#[case] text: &str) {
    let path = PropertyPath::parse(text);
    let serialized = serde_json::to_string(&path).unwrap();
    assert_eq!(serialized, serde_json::to_string(text).unwrap());
}

#[rstest]
fn test_path_json_roundtrip_with_special_keys() {
    let path = PropertyPath::from_segments([
        Segment::Key("meta".to_string()),
        Segment::Key("a.b".to_string()),
        Segment::Index(3),
    ]);
    let serialized = serde_json::to_string(&path).unwrap();
    let restored: PropertyPath = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, path);
}

#[rstest]
#[case(vec![Segment::Index(0), Segment::Key(String::new()), Segment::Index(1)])]
#[case(vec![Segment::Key(String::new()), Segment::Index(0)])]
#[case(vec![Segment::Key(String::new())])]
#[case(vec![Segment::Key("a".to_string()), Segment::Key(String::new()), Segment::Key("b".to_string())])]
fn test_path_json_roundtrip_keeps_empty_keys(#[case] segments: Vec<Segment>) {
    let path = PropertyPath::from_segments(segments);
    let serialized = serde_json::to_string(&path).unwrap();
    let restored: PropertyPath = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, path);
}

#[rstest]
fn test_empty_key_lookup_survives_serialization() {
    let path = PropertyPath::from_segments([Segment::Index(0), Segment::Key(String::new())]);
    let restored: PropertyPath = serde_json::from_str(&serde_json::to_string(&path).unwrap()).unwrap();
    let document = json!([{ "": "blank" }]);
    assert_eq!(get(&document, restored), Some(&json!("blank")));
}

#[rstest]
fn test_deserialized_path_is_usable() {
    #[derive(serde::Deserialize)]
    struct Rule {
        path: PropertyPath,
    }

    let rule: Rule = serde_json::from_value(json!({ "path": "user.roles[1]" })).unwrap();
    let document = json!({ "user": { "roles": ["admin", "ops"] } });
    assert_eq!(get(&document, rule.path), Some(&json!("ops")));
}

#[rstest]
fn test_segment_json_roundtrip() {
    let segments = vec![Segment::Key("name".to_string()), Segment::Index(0)];
    let serialized = serde_json::to_string(&segments).unwrap();
    let restored: Vec<Segment> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, segments);
}
