/// Compiler contract tests: exact text for every serialization rule.
use serde_json::{json, Number, Value};
use toon_notation::{compile_ast, encode, AstNode};

// ============================================================================
// Scalars as member values
// ============================================================================

#[test]
fn zero_is_emitted() {
    assert_eq!(encode(&json!({"COUNT": 0})), "COUNT: 0");
}

#[test]
fn null_becomes_empty_string() {
    assert_eq!(encode(&json!({"A": null})), r#"A: """#);
}

#[test]
fn booleans_are_upper_case() {
    assert_eq!(encode(&json!({"A": true, "B": false})), "A: TRUE\nB: FALSE");
}

#[test]
fn integers_and_floats() {
    assert_eq!(
        encode(&json!({"A": -7, "B": 3.25, "C": 1.0, "D": 18446744073709551615u64})),
        "A: -7\nB: 3.25\nC: 1\nD: 18446744073709551615"
    );
}

#[test]
fn negative_zero_float() {
    let v = json!({"A": Value::Number(Number::from_f64(-0.0).unwrap())});
    assert_eq!(encode(&v), "A: 0");
}

#[test]
fn large_float_has_no_exponent() {
    let v = json!({"A": 0.000001});
    assert_eq!(encode(&v), "A: 0.000001");
}

// ============================================================================
// String quoting
// ============================================================================

#[test]
fn upper_snake_strings_are_bare() {
    assert_eq!(encode(&json!({"GENRE": "FANTASY"})), "GENRE: FANTASY");
    assert_eq!(encode(&json!({"A": "_UNDER_SCORE_"})), "A: _UNDER_SCORE_");
}

#[test]
fn other_strings_are_quoted() {
    assert_eq!(encode(&json!({"A": "Fantasy"})), r#"A: "Fantasy""#);
    assert_eq!(encode(&json!({"A": "SCI-FI"})), r#"A: "SCI-FI""#);
    assert_eq!(encode(&json!({"A": "V2"})), r#"A: "V2""#);
    assert_eq!(encode(&json!({"A": ""})), r#"A: """#);
    assert_eq!(encode(&json!({"A": "42"})), r#"A: "42""#);
}

#[test]
fn embedded_double_quote_is_escaped() {
    assert_eq!(encode(&json!({"A": "say \"hi\""})), r#"A: "say \"hi\"""#);
}

#[test]
fn only_double_quotes_are_escaped() {
    assert_eq!(encode(&json!({"A": "it's a\\b"})), "A: \"it's a\\b\"");
}

#[test]
fn newlines_stay_raw_inside_quotes() {
    assert_eq!(encode(&json!({"A": "one\ntwo"})), "A: \"one\ntwo\"");
}

// ============================================================================
// Key transform
// ============================================================================

#[test]
fn camel_case_keys_become_snake_case() {
    assert_eq!(encode(&json!({"maxLength": 10})), "MAX_LENGTH: 10");
    assert_eq!(encode(&json!({"targetAudienceAge": 10})), "TARGET_AUDIENCE_AGE: 10");
}

#[test]
fn lowercase_keys_are_upper_cased() {
    assert_eq!(encode(&json!({"genre": "FANTASY"})), "GENRE: FANTASY");
}

#[test]
fn consecutive_capitals_get_no_separator() {
    assert_eq!(encode(&json!({"URLPath": 1})), "URLPATH: 1");
    assert_eq!(encode(&json!({"parseHTTPResponse": 1})), "PARSE_HTTPRESPONSE: 1");
}

#[test]
fn existing_underscores_are_kept() {
    assert_eq!(encode(&json!({"already_snake": 1})), "ALREADY_SNAKE: 1");
    assert_eq!(encode(&json!({"mixed_caseKey": 1})), "MIXED_CASE_KEY: 1");
}

#[test]
fn keys_that_are_not_one_word_are_quoted() {
    assert_eq!(encode(&json!({"note 2": 1})), r#""NOTE 2": 1"#);
    assert_eq!(encode(&json!({"": 1})), r#""": 1"#);
    assert_eq!(encode(&json!({"2nd": 1})), r#""2ND": 1"#);
    assert_eq!(encode(&json!({"true": 1})), r#""TRUE": 1"#);
}

#[test]
fn quoted_root_key_disables_wrapper() {
    assert_eq!(
        encode(&json!({"MY KEY": {"A": 1}})),
        "\"MY KEY\": {\n  A: 1\n}"
    );
}

#[test]
fn digits_do_not_trigger_separator() {
    assert_eq!(encode(&json!({"v2Name": 1})), "V2NAME: 1");
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn list_items_are_dashed_and_indented() {
    assert_eq!(
        encode(&json!({"RULES": ["no violence", "SHORT", 3, true]})),
        "RULES:\n  - \"no violence\"\n  - SHORT\n  - 3\n  - TRUE"
    );
}

#[test]
fn empty_list_member_is_omitted_entirely() {
    assert_eq!(encode(&json!({"A": 1, "TAGS": [], "B": 2})), "A: 1\nB: 2");
}

#[test]
fn list_of_only_empty_lists_is_omitted() {
    assert_eq!(encode(&json!({"A": [[], [[]]], "B": 2})), "B: 2");
}

#[test]
fn empty_list_items_are_skipped() {
    assert_eq!(encode(&json!({"A": [1, [], 2]})), "A:\n  - 1\n  - 2");
}

#[test]
fn object_items() {
    assert_eq!(
        encode(&json!({"CHARACTERS": [{"NAME": "Ann", "ROLE": "HERO"}, {}]})),
        "CHARACTERS:\n  - {\n    NAME: \"Ann\"\n    ROLE: HERO\n  }\n  - {}"
    );
}

#[test]
fn nested_list_item_on_lone_dash() {
    assert_eq!(
        encode(&json!({"M": [[1, 2]]})),
        "M:\n  -\n    - 1\n    - 2"
    );
}

// ============================================================================
// Mappings and the root wrapper
// ============================================================================

#[test]
fn root_wrapper_scenario() {
    let v = json!({"STORY": {"GENRE": "FANTASY", "RULES": ["no violence"]}});
    assert_eq!(
        encode(&v),
        "STORY {\n  GENRE: FANTASY\n  RULES:\n    - \"no violence\"\n}"
    );
}

#[test]
fn root_wrapper_with_empty_body() {
    assert_eq!(encode(&json!({"STORY": {}})), "STORY {\n}");
}

#[test]
fn root_wrapper_needs_upper_case_key() {
    assert_eq!(
        encode(&json!({"story": {"GENRE": "X"}})),
        "STORY: {\n  GENRE: X\n}"
    );
}

#[test]
fn root_wrapper_needs_single_member() {
    assert_eq!(
        encode(&json!({"A": {"X": 1}, "B": 2})),
        "A: {\n  X: 1\n}\nB: 2"
    );
}

#[test]
fn root_wrapper_needs_mapping_value() {
    assert_eq!(encode(&json!({"STORY": ["X"]})), "STORY:\n  - X");
}

#[test]
fn nested_mappings() {
    assert_eq!(
        encode(&json!({"STORY": {"SETTING": {"PLACE": "Rome", "YEAR": 1}, "EMPTY": {}}})),
        "STORY {\n  SETTING: {\n    PLACE: \"Rome\"\n    YEAR: 1\n  }\n  EMPTY: {}\n}"
    );
}

#[test]
fn key_order_follows_input_order() {
    let v: Value = serde_json::from_str(r#"{"Z":1,"A":2,"M":3}"#).unwrap();
    assert_eq!(encode(&v), "Z: 1\nA: 2\nM: 3");
}

// ============================================================================
// Non-object roots and ASTs
// ============================================================================

#[test]
fn empty_object_is_empty_text() {
    assert_eq!(encode(&json!({})), "");
}

#[test]
fn root_scalars() {
    assert_eq!(encode(&json!("hello")), "\"hello\"");
    assert_eq!(encode(&json!(5)), "5");
    assert_eq!(encode(&Value::Null), "\"\"");
}

#[test]
fn root_list() {
    assert_eq!(encode(&json!(["A", "b"])), "- A\n- \"b\"");
}

#[test]
fn compile_ast_matches_value_path() {
    let v = json!({"STORY": {"GENRE": "FANTASY", "maxWords": 300}});
    assert_eq!(compile_ast(&AstNode::from_value(&v)), encode(&v));
}

#[test]
fn encode_is_deterministic() {
    let v = json!({"STORY": {"B": [1, {"C": "d"}], "A": null}});
    assert_eq!(encode(&v), encode(&v));
}
