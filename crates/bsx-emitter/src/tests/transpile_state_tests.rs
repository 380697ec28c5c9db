//! Tests for the walk-local transpile state and options

use super::*;
use crate::ast::*;
use crate::test_fixtures::*;
use bsx_common::{NewLineKind, Position, Range, TokenKind};
use std::sync::Arc;

// =============================================================================
// Indentation
// =============================================================================

#[test]
fn test_indent_follows_block_depth() {
    let options = TranspileOptions::default();
    let mut state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);

    assert_eq!(state.indent().text(), "");
    state.with_block(|state| {
        assert_eq!(state.indent().text(), "    ");
        state.with_block(|state| {
            assert_eq!(state.block_depth(), 2);
            assert_eq!(state.indent().text(), "        ");
        });
        assert_eq!(state.block_depth(), 1);
    });
    assert_eq!(state.block_depth(), 0);
}

#[test]
fn test_custom_indent_unit_and_newline() {
    let options = TranspileOptions {
        indent_unit: "\t".to_string(),
        new_line: NewLineKind::Crlf,
        ..TranspileOptions::default()
    };
    let mut state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);

    state.with_block(|state| {
        state.with_block(|state| assert_eq!(state.indent().text(), "\t\t"));
    });
    assert_eq!(state.newline().text(), "\r\n");
    assert_eq!(state.newline().position(), None);
}

#[test]
fn test_with_block_returns_closure_value() {
    let options = TranspileOptions::default();
    let mut state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);

    let depth_inside = state.with_block(|state| state.block_depth());
    assert_eq!(depth_inside, 1);
    assert_eq!(state.block_depth(), 0);
}

// =============================================================================
// Lineage
// =============================================================================

#[test]
fn test_with_ancestor_restores_lineage() {
    let options = TranspileOptions::default();
    let mut state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);
    let outer = Range::from_coords(0, 0, 10, 0);
    let inner = Range::from_coords(2, 4, 3, 0);

    assert!(state.parent().is_none());
    state.with_ancestor(Ancestor::Other(outer), |state| {
        assert_eq!(state.parent().map(Ancestor::range), Some(outer));
        state.with_ancestor(Ancestor::Other(inner), |state| {
            assert_eq!(state.lineage().len(), 2);
            assert_eq!(state.parent().map(Ancestor::range), Some(inner));
        });
        assert_eq!(state.lineage().len(), 1);
    });
    assert!(state.lineage().is_empty());
}

#[test]
fn test_enclosing_namespace_is_innermost() {
    let namespace = NamespaceStatement::new(
        tok(TokenKind::Namespace, "namespace", 0, 0),
        dotted(var("Foo", 0, 10), "Bar", 0, 14),
        Body::new(Vec::new()),
        tok(TokenKind::EndNamespace, "end namespace", 1, 0),
    )
    .expect("valid namespace name");

    let options = TranspileOptions::default();
    let mut state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);
    assert!(state.enclosing_namespace().is_none());

    state.with_ancestor(Ancestor::Namespace(&namespace), |state| {
        state.with_ancestor(Ancestor::Other(Range::default()), |state| {
            assert_eq!(
                state.enclosing_namespace_name(NameStyle::Dotted).as_deref(),
                Some("Foo.Bar")
            );
            assert_eq!(
                state.enclosing_namespace_name(NameStyle::Flattened).as_deref(),
                Some("Foo_Bar")
            );
        });
    });
    assert!(state.enclosing_namespace_name(NameStyle::Dotted).is_none());
}

// =============================================================================
// Position-tagged text
// =============================================================================

#[test]
fn test_token_node_is_tagged_with_token_start() {
    let options = TranspileOptions::default();
    let state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);
    let then = tok(TokenKind::Then, "THEN", 2, 10);

    assert_eq!(
        state.token_or(Some(&then), "then"),
        SourceNode::Mapped {
            position: Position::new(2, 10),
            source: Arc::from(TEST_SOURCE_PATH),
            text: "THEN".to_string(),
        }
    );
}

#[test]
fn test_missing_optional_token_falls_back_untagged() {
    let options = TranspileOptions::default();
    let state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);

    let node = state.token_or(None, "then");
    assert_eq!(node.text(), "then");
    assert_eq!(node.position(), None);
}

// =============================================================================
// Runtime helpers
// =============================================================================

#[test]
fn test_note_helper_records_and_names() {
    let options = TranspileOptions::default();
    let mut state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);

    assert!(!state.helpers().any());
    assert_eq!(
        state.note_helper(RuntimeHelper::ScopeSafeTernary),
        "bslib_scopeSafeTernary"
    );
    assert!(state.helpers().scope_safe_ternary);
    assert!(!state.helpers().simple_ternary);
    assert_eq!(
        state.helpers().iter().collect::<Vec<_>>(),
        vec![RuntimeHelper::ScopeSafeTernary]
    );
}

#[test]
fn test_helper_prefix_is_configurable() {
    let options = TranspileOptions {
        helper_prefix: "rt".to_string(),
        ..TranspileOptions::default()
    };
    let mut state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);
    assert_eq!(state.note_helper(RuntimeHelper::SimpleCoalesce), "rt_simpleCoalesce");
    assert_eq!(RuntimeHelper::ToString.name(""), "toString");
}

#[test]
fn test_helpers_merge() {
    let mut a = HelpersNeeded::default();
    a.mark(RuntimeHelper::SimpleTernary);
    let mut b = HelpersNeeded::default();
    b.mark(RuntimeHelper::ToString);

    a.merge(&b);
    assert!(a.needs(RuntimeHelper::SimpleTernary));
    assert!(a.needs(RuntimeHelper::ToString));
    assert!(!a.needs(RuntimeHelper::ScopeSafeCoalesce));
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn test_options_defaults() {
    let options = TranspileOptions::default();
    assert_eq!(options.indent_unit, "    ");
    assert_eq!(options.new_line, NewLineKind::Lf);
    assert!(options.source_map);
    assert_eq!(options.helper_prefix, "bslib");
    assert!(!options.newline_before_empty_block_end);
}

#[test]
fn test_options_from_json() {
    let options = TranspileOptions::from_json(
        r#"{"indentUnit":"\t","newLine":"crlf","helperPrefix":"rt","sourceRoot":"pkg:/"}"#,
    )
    .unwrap();
    assert_eq!(options.indent_unit, "\t");
    assert_eq!(options.new_line, NewLineKind::Crlf);
    assert_eq!(options.helper_prefix, "rt");
    assert_eq!(options.source_root.as_deref(), Some("pkg:/"));
    // Omitted fields keep their defaults.
    assert!(options.source_map);

    assert_eq!(
        TranspileOptions::from_json("{}").unwrap(),
        TranspileOptions::default()
    );
    assert!(TranspileOptions::from_json(r#"{"newLine":"cr"}"#).is_err());
}
