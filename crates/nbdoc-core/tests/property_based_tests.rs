//! Property-Based Tests
//!
//! Tests using property-based testing (proptest) to verify invariants:
//! - Round-trip equality over arbitrary valid notebooks
//! - Serialization doesn't panic and always yields required keys
//! - Per-line source storage is lossless
//!
//! These tests complement unit tests by exploring the input space automatically.

use nbdoc_core::{
    parse_notebook_from_str, to_json, Cell, JsonMap, JsonSerializer, Notebook, Output,
};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Generators
// ============================================================================

fn source_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,24}(\\n)?", 0..6)
}

fn id_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z0-9-]{1,12}")
}

fn output_strategy() -> impl Strategy<Value = Output> {
    prop_oneof![
        Just(json!({"output_type": "stream", "name": "stdout", "text": ["ok\n"]})),
        Just(json!({
            "output_type": "execute_result",
            "execution_count": 1,
            "data": {"text/plain": "4"},
            "metadata": {}
        })),
        Just(json!({
            "output_type": "error",
            "ename": "ValueError",
            "evalue": "bad input",
            "traceback": []
        })),
    ]
    .prop_map(|record| Output::from_value(&record).unwrap())
}

fn markdown_cell_strategy() -> impl Strategy<Value = Cell> {
    (source_strategy(), id_strategy()).prop_map(|(source, id)| Cell::Markdown {
        source,
        metadata: JsonMap::new(),
        id,
    })
}

fn code_cell_strategy() -> impl Strategy<Value = Cell> {
    (
        source_strategy(),
        id_strategy(),
        prop::option::of(0i32..100),
        prop::collection::vec(output_strategy(), 0..3),
    )
        .prop_map(|(source, id, execution_count, outputs)| Cell::Code {
            source,
            metadata: JsonMap::new(),
            id,
            execution_count,
            outputs,
        })
}

fn notebook_strategy() -> impl Strategy<Value = Notebook> {
    prop::collection::vec(
        prop_oneof![markdown_cell_strategy(), code_cell_strategy()],
        0..8,
    )
    .prop_map(Notebook::new)
}

// ============================================================================
// Round-Trip Properties
// ============================================================================

/// Property: Any valid notebook survives value-level round-trip unchanged
#[test]
fn proptest_value_round_trip_equality() {
    proptest!(|(notebook in notebook_strategy())| {
        let value = to_json(&notebook).unwrap();
        let parsed = Notebook::from_value(&value);
        prop_assert!(
            parsed.is_ok(),
            "serialized notebook must validate: {:?}",
            parsed.as_ref().err()
        );
        prop_assert_eq!(parsed.unwrap(), notebook);
    });
}

/// Property: Any valid notebook survives string-level round-trip, pretty or compact
#[test]
fn proptest_string_round_trip_equality() {
    proptest!(|(notebook in notebook_strategy(), pretty in any::<bool>())| {
        let serializer = JsonSerializer::with_options(nbdoc_core::JsonOptions { pretty });
        let text = serializer.serialize_notebook(&notebook).unwrap();
        prop_assert_eq!(parse_notebook_from_str(&text).unwrap(), notebook);
    });
}

// ============================================================================
// Serialization Shape Properties
// ============================================================================

/// Property: Every serialized cell carries its variant's required keys
#[test]
fn proptest_serialized_cells_have_required_keys() {
    proptest!(|(notebook in notebook_strategy())| {
        let value = to_json(&notebook).unwrap();
        for cell in value["cells"].as_array().unwrap() {
            let record = cell.as_object().unwrap();
            prop_assert!(record.contains_key("cell_type"));
            prop_assert!(record.contains_key("source"));
            prop_assert!(record.contains_key("metadata"));
            match record["cell_type"].as_str().unwrap() {
                "code" => {
                    prop_assert!(record.contains_key("execution_count"));
                    prop_assert!(record.contains_key("outputs"));
                }
                "markdown" => {
                    prop_assert!(!record.contains_key("execution_count"));
                    prop_assert!(!record.contains_key("outputs"));
                }
                other => prop_assert!(false, "unexpected cell_type {}", other),
            }
        }
        prop_assert_eq!(&value["nbformat"], &json!(4));
        prop_assert_eq!(&value["nbformat_minor"], &json!(5));
    });
}

/// Property: Unicode cell text serializes without panic and stays valid JSON
#[test]
fn proptest_unicode_handling() {
    proptest!(|(text in "\\PC{0,200}")| {
        let notebook = Notebook::new(vec![Cell::markdown(&text), Cell::code(&text)]);
        let json_str = JsonSerializer::new().serialize_notebook(&notebook).unwrap();
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(&json_str);
        prop_assert!(parsed.is_ok(), "Result should be valid JSON");
    });
}

// ============================================================================
// Source Storage Properties
// ============================================================================

/// Property: Splitting flat text into per-line storage is lossless
#[test]
fn proptest_source_split_is_lossless() {
    proptest!(|(text in "[ -~\\n]{0,80}")| {
        let cell = Cell::markdown(&text);
        prop_assert_eq!(cell.source_text(), text.clone());
        // Interior lines keep their terminator
        let source = cell.source();
        for line in &source[..source.len().saturating_sub(1)] {
            prop_assert!(line.ends_with('\n'), "interior line missing newline: {:?}", line);
        }
    });
}
