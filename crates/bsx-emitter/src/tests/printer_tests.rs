//! Tests for file-level printing and source map generation

use super::*;
use crate::ast::*;
use crate::test_fixtures::*;
use bsx_common::TokenKind;
use bsx_common::source_map::SourceMap;

const OUTPUT_PATH: &str = "source/main.brs";

fn two_assignments() -> Body {
    Body::new(vec![
        assign("x", 3, 4, int("1", 3, 8)),
        assign("y", 4, 4, int("2", 4, 8)),
    ])
}

fn print_file(body: &Body, options: TranspileOptions) -> PrintOutput {
    Printer::new(options).transpile_file(body, TEST_SOURCE_PATH, OUTPUT_PATH)
}

// =============================================================================
// Code
// =============================================================================

#[test]
fn test_code_and_map_agree() {
    let output = print_file(&two_assignments(), TranspileOptions::default());
    assert_eq!(output.code, "x = 1\ny = 2");
    assert!(output.source_map.is_some());
}

#[test]
fn test_print_to_string() {
    let output = print_to_string(&two_assignments(), TranspileOptions::default());
    assert_eq!(output, "x = 1\ny = 2");
}

#[test]
fn test_crlf_output() {
    let options = TranspileOptions {
        new_line: bsx_common::NewLineKind::Crlf,
        ..TranspileOptions::default()
    };
    let output = print_file(&two_assignments(), options);
    assert_eq!(output.code, "x = 1\r\ny = 2");
}

// =============================================================================
// Source map
// =============================================================================

#[test]
fn test_mappings_point_at_token_starts() {
    let output = print_file(&two_assignments(), TranspileOptions::default());
    let map = output.source_map.expect("source map enabled by default");
    let decoded = decode_mappings(&map.mappings);

    assert!(
        decoded.contains(&DecodedMapping {
            generated_line: 0,
            generated_column: 0,
            source_index: 0,
            original_line: 3,
            original_column: 4,
        }),
        "Mappings: {:?}",
        decoded
    );
    assert!(
        decoded.contains(&DecodedMapping {
            generated_line: 1,
            generated_column: 0,
            source_index: 0,
            original_line: 4,
            original_column: 4,
        }),
        "Mappings: {:?}",
        decoded
    );
    // `=` and the value on the second line.
    assert!(decoded.iter().any(|m| m.generated_line == 1
        && m.generated_column == 4
        && m.original_line == 4
        && m.original_column == 8));
}

#[test]
fn test_columns_after_astral_characters_count_utf16_units() {
    // x = "😀" + y
    let value = binary(string("\"😀\"", 0, 4), TokenKind::Plus, "+", var("y", 0, 10));
    let body = Body::new(vec![assign("x", 0, 0, value)]);
    let output = print_file(&body, TranspileOptions::default());
    assert_eq!(output.code, "x = \"😀\" + y");

    let map = output.source_map.expect("source map");
    let decoded = decode_mappings(&map.mappings);
    // `"😀"` is three chars but four UTF-16 units wide.
    assert!(
        decoded.iter().any(|m| m.generated_line == 0
            && m.generated_column == 11
            && m.original_column == 10),
        "Mappings: {:?}",
        decoded
    );
}

#[test]
fn test_map_metadata() {
    let options = TranspileOptions {
        source_root: Some("pkg:/".to_string()),
        ..TranspileOptions::default()
    };
    let output = print_file(&two_assignments(), options);
    let map = output.source_map.expect("source map");

    assert_eq!(map.version, 3);
    assert_eq!(map.file, OUTPUT_PATH);
    assert_eq!(map.sources, vec![TEST_SOURCE_PATH.to_string()]);
    assert_eq!(map.source_root.as_deref(), Some("pkg:/"));
    assert!(map.names.is_empty());

    let json = map.to_json().unwrap();
    assert!(json.contains("\"sourceRoot\":\"pkg:/\""), "JSON: {}", json);
    assert_eq!(SourceMap::from_json(&json).unwrap(), map);
}

#[test]
fn test_source_map_can_be_disabled() {
    let options = TranspileOptions {
        source_map: false,
        ..TranspileOptions::default()
    };
    let output = print_file(&two_assignments(), options);
    assert!(output.source_map.is_none());
    assert_eq!(output.code, "x = 1\ny = 2");
}

#[test]
fn test_fallback_text_is_unmapped() {
    let statement: Statement = IfStatement::new(
        tok(TokenKind::If, "if", 0, 0),
        var("a", 0, 3),
        None,
        block(0, 4, vec![print(1, 4, vec![var("a", 1, 10)])]),
        Vec::new(),
        None,
        None,
    )
    .into();
    let output = print_file(&Body::new(vec![statement]), TranspileOptions::default());
    assert_eq!(output.code, "if a then\n    print a\nend if");

    let decoded = decode_mappings(&output.source_map.expect("source map").mappings);
    // "then" at column 5 and "end if" on line 2 were synthesized.
    assert!(!decoded.iter().any(|m| m.generated_line == 0 && m.generated_column == 5));
    assert!(!decoded.iter().any(|m| m.generated_line == 2));
    // Indentation is not mapped; `print` is.
    assert!(decoded.iter().any(|m| m.generated_line == 1
        && m.generated_column == 4
        && m.original_line == 1
        && m.original_column == 4));
}

#[test]
fn test_lowered_helper_maps_to_operator() {
    let body = Body::new(vec![assign(
        "x",
        2,
        0,
        coalesce(var("a", 2, 4), var("b", 2, 9)),
    )]);
    let output = print_file(&body, TranspileOptions::default());
    assert_eq!(output.code, "x = bslib_simpleCoalesce(a, b)");

    let decoded = decode_mappings(&output.source_map.expect("source map").mappings);
    // The helper name points at `??`.
    assert!(
        decoded.contains(&DecodedMapping {
            generated_line: 0,
            generated_column: 4,
            source_index: 0,
            original_line: 2,
            original_column: 6,
        }),
        "Mappings: {:?}",
        decoded
    );
}

// =============================================================================
// Helpers
// =============================================================================

#[test]
fn test_helpers_are_reported() {
    let body = Body::new(vec![
        assign("x", 0, 0, coalesce(var("a", 0, 4), var("b", 0, 9))),
        assign("y", 1, 0, ternary(var("c", 1, 4), call(var("f", 1, 8), Vec::new()), var("d", 1, 14))),
    ]);
    let output = print_file(&body, TranspileOptions::default());

    assert!(output.helpers.simple_coalesce);
    assert!(output.helpers.scope_safe_ternary);
    assert!(!output.helpers.to_string);
    assert_eq!(
        output.helpers.iter().collect::<Vec<_>>(),
        vec![RuntimeHelper::ScopeSafeTernary, RuntimeHelper::SimpleCoalesce]
    );
}

#[test]
fn test_plain_file_needs_no_helpers() {
    let output = print_file(&two_assignments(), TranspileOptions::default());
    assert!(!output.helpers.any());
}
