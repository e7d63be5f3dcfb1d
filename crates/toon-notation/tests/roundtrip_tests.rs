use serde_json::{json, Value};
use toon_notation::{decode, encode};

/// Assert that encode → decode reproduces the same value.
fn assert_roundtrip(value: Value) {
    let toon = encode(&value);
    let decoded = decode(&toon).unwrap_or_else(|e| panic!("decode failed: {e}\n  TOON: {toon}"));
    assert_eq!(
        value, decoded,
        "Roundtrip failed:\n  input:  {value}\n  TOON:   {toon}\n  output: {decoded}"
    );
}

// ============================================================================
// Values that survive
// ============================================================================

#[test]
fn roundtrip_root_wrapper() {
    assert_roundtrip(json!({"STORY": {"GENRE": "FANTASY", "RULES": ["no violence"]}}));
}

#[test]
fn roundtrip_flat_members() {
    assert_roundtrip(json!({"COUNT": 0, "NAME": "Ann", "OK": true, "RATIO": 0.75}));
}

#[test]
fn roundtrip_nested_objects_and_lists() {
    assert_roundtrip(json!({
        "PROMPT": {
            "CONTEXT": {"AUDIENCE": "kids aged 6-9", "EMPTY": {}},
            "EXAMPLES": [
                {"INPUT": "a dragon", "OUTPUT": "a friendly dragon"},
                {},
                "plain text",
                -12
            ],
            "DEPTH": {"A": {"B": {"C": [1, 2, 3]}}}
        }
    }));
}

#[test]
fn roundtrip_strings_with_quotes_and_newlines() {
    assert_roundtrip(json!({"A": "say \"hi\"", "B": "line one\nline two", "C": "it's"}));
}

#[test]
fn roundtrip_multiple_root_members_with_mapping() {
    assert_roundtrip(json!({"STORY": {"GENRE": "X"}, "SCENE": {"TIME": "night"}}));
}

#[test]
fn roundtrip_integers_at_the_edges() {
    assert_roundtrip(json!({
        "MIN": i64::MIN,
        "MAX": i64::MAX,
        "PAST_I64": i64::MAX as u64 + 1,
        "BIG": u64::MAX
    }));
}

#[test]
fn roundtrip_empty_object() {
    assert_roundtrip(json!({}));
}

// ============================================================================
// Documented lossy cases
// ============================================================================

#[test]
fn empty_list_member_vanishes() {
    let value = json!({"A": 1, "TAGS": []});
    assert_eq!(decode(&encode(&value)).unwrap(), json!({"A": 1}));
}

#[test]
fn upper_snake_string_true_becomes_boolean() {
    let value = json!({"A": "TRUE"});
    assert_eq!(decode(&encode(&value)).unwrap(), json!({"A": true}));
}

#[test]
fn null_comes_back_as_empty_string() {
    let value = json!({"A": null});
    assert_eq!(decode(&encode(&value)).unwrap(), json!({"A": ""}));
}

#[test]
fn camel_case_keys_come_back_snake_case() {
    let value = json!({"maxWords": 5});
    assert_eq!(decode(&encode(&value)).unwrap(), json!({"MAX_WORDS": 5}));
}

#[test]
fn nested_lists_merge_greedily() {
    let value = json!({"M": [[1], [2]]});
    assert_eq!(decode(&encode(&value)).unwrap(), json!({"M": [[1, [2]]]}));
}
