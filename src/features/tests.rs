pub(crate) use super::*;
use std::io::Write;

fn ab_lookup() -> FeatureLookup {
    FeatureLookup::single([("a", vec![1.0, 0.0]), ("b", vec![0.0, 1.0])])
}

#[test]
fn test_single_dlen() {
    let lookup = ab_lookup();
    assert_eq!(lookup.dlen(), 2);
    assert_eq!(lookup.max_dim(), 2);
    assert_eq!(lookup.len(), 2);
    assert!(!lookup.is_paired());
    assert!(lookup.secondary().is_none());
}

#[test]
fn test_ragged_table_records_max() {
    let table = FeatureTable::new([("a", vec![1.0]), ("b", vec![1.0, 2.0, 3.0])]);
    assert_eq!(table.dlen(), 3);
    assert_eq!(table.get("a").map(Vector::len), Some(1));
}

#[test]
fn test_empty_table_dlen_zero() {
    let table = FeatureTable::new(Vec::<(String, Vec<f32>)>::new());
    assert!(table.is_empty());
    assert_eq!(table.dlen(), 0);
    let lookup = FeatureLookup::from(table);
    assert!(lookup.is_empty());
    assert_eq!(lookup.max_dim(), 0);
}

#[test]
fn test_duplicate_symbol_keeps_last() {
    let table = FeatureTable::new([("a", vec![1.0]), ("a", vec![2.0, 2.0])]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("a").map(Vector::as_slice), Some(&[2.0, 2.0][..]));
}

#[test]
fn test_array_values_convert() {
    let table = FeatureTable::new([("x", [0.5_f32, 0.25])]);
    assert_eq!(table.get("x").map(Vector::as_slice), Some(&[0.5, 0.25][..]));
}

#[test]
fn test_paired_dlen_uses_primary() {
    let lookup = FeatureLookup::paired(
        [("a", vec![1.0, 0.0]), ("e", vec![0.0, 1.0])],
        [("k", vec![1.0, 0.0, 0.0, 1.0])],
    );
    assert!(lookup.is_paired());
    assert_eq!(lookup.dlen(), 2);
    assert_eq!(lookup.max_dim(), 4);
}

#[test]
fn test_paired_contains_union() {
    let lookup = FeatureLookup::paired([("a", vec![1.0])], [("k", vec![2.0])]);
    assert!(lookup.contains("a"));
    assert!(lookup.contains("k"));
    assert!(!lookup.contains("z"));
    let symbols: Vec<&str> = lookup.symbols().into_iter().collect();
    assert_eq!(symbols, vec!["a", "k"]);
}

#[test]
fn test_paired_get_prefers_primary() {
    let lookup = FeatureLookup::paired([("x", vec![1.0])], [("x", vec![9.0]), ("y", vec![3.0])]);
    assert_eq!(lookup.get("x").map(Vector::as_slice), Some(&[1.0][..]));
    assert_eq!(lookup.get("y").map(Vector::as_slice), Some(&[3.0][..]));
    assert_eq!(lookup.len(), 2);
}

#[test]
fn test_unknown_symbols() {
    let lookup = ab_lookup();
    let unknown = lookup.unknown(["a", "q", "b", "z", "q"]);
    let expected: BTreeSet<String> = ["q", "z"].iter().map(|s| s.to_string()).collect();
    assert_eq!(unknown, expected);
}

#[test]
fn test_from_json_single() {
    let lookup = FeatureLookup::from_json_str(r#"{"a": [1, 0], "b": [0, 1]}"#).expect("valid");
    assert_eq!(lookup, ab_lookup());
}

#[test]
fn test_from_json_paired() {
    let lookup = FeatureLookup::from_json_str(r#"[{"a": [1.0]}, {"k": [0.0, 1.0]}]"#)
        .expect("valid");
    assert!(lookup.is_paired());
    assert!(lookup.contains("k"));
    assert_eq!(lookup.dlen(), 1);
}

#[test]
fn test_from_json_malformed() {
    let err = FeatureLookup::from_json_str(r#"{"a": "not a vector"}"#).expect_err("malformed");
    assert!(matches!(err, crate::error::LexfeatError::Serialization(_)));

    let err = FeatureLookup::from_json_str("[1, 2, 3]").expect_err("not tables");
    assert!(matches!(err, crate::error::LexfeatError::Serialization(_)));
}

#[test]
fn test_json_roundtrip_paired() {
    let lookup = FeatureLookup::paired([("a", vec![1.0])], [("k", vec![0.0, 1.0])]);
    let json = serde_json::to_string(&lookup).expect("serialize");
    let back = FeatureLookup::from_json_str(&json).expect("deserialize");
    assert_eq!(back, lookup);
}

#[test]
fn test_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp");
    write!(file, r#"{{"t": [1, 1, 0]}}"#).expect("write");
    let lookup = FeatureLookup::from_json_file(file.path()).expect("load");
    assert_eq!(lookup.dlen(), 3);
}

#[test]
fn test_from_json_file_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = FeatureLookup::from_json_file(dir.path().join("missing.json")).expect_err("missing");
    assert!(matches!(err, crate::error::LexfeatError::Io(_)));
}
