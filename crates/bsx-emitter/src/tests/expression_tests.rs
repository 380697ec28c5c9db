//! Tests for expression emission

use super::*;
use crate::ast::*;
use crate::emitter::{decode_string_literal, quote_string};
use crate::test_fixtures::*;
use bsx_common::TokenKind;

// =============================================================================
// Operators and calls
// =============================================================================

#[test]
fn test_binary_and_unary() {
    let sum = binary(var("a", 0, 0), TokenKind::Plus, "+", var("b", 0, 4));
    assert_eq!(transpile_expression(&sum), "a + b");

    let negated: Expression =
        UnaryExpression::new(tok(TokenKind::Not, "not", 0, 0), var("done", 0, 4)).into();
    assert_eq!(transpile_expression(&negated), "not done");
}

#[test]
fn test_call_joins_arguments() {
    let expression = call(var("doWork", 0, 0), vec![int("1", 0, 7), var("b", 0, 10)]);
    assert_eq!(transpile_expression(&expression), "doWork(1, b)");

    let no_args = call(var("init", 0, 0), Vec::new());
    assert_eq!(transpile_expression(&no_args), "init()");
}

fn callfunc(args: Vec<Expression>) -> Expression {
    CallfuncExpression::new(
        var("node", 0, 0),
        tok(TokenKind::Callfunc, "@.", 0, 4),
        ident("refresh", 0, 6),
        tok(TokenKind::LeftParen, "(", 0, 13),
        args,
        tok(TokenKind::RightParen, ")", 0, 20),
    )
    .into()
}

#[test]
fn test_callfunc_without_arguments_passes_invalid() {
    assert_eq!(
        transpile_expression(&callfunc(Vec::new())),
        "node.callfunc(\"refresh\", invalid)"
    );
}

#[test]
fn test_callfunc_with_arguments() {
    assert_eq!(
        transpile_expression(&callfunc(vec![int("1", 0, 14), var("b", 0, 17)])),
        "node.callfunc(\"refresh\", 1, b)"
    );
}

#[test]
fn test_function_literal_with_parameters_and_return_type() {
    let parameters = vec![
        FunctionParameter::new(ident("a", 0, 9), None, None),
        FunctionParameter::new(
            ident("b", 0, 12),
            Some(int("2", 0, 16)),
            Some(TypeClause::new(
                tok(TokenKind::As, "as", 0, 18),
                ident("integer", 0, 21),
            )),
        ),
    ];
    let func = FunctionExpression::new(
        tok(TokenKind::Function, "function", 0, 0),
        tok(TokenKind::LeftParen, "(", 0, 8),
        parameters,
        tok(TokenKind::RightParen, ")", 0, 28),
        Some(TypeClause::new(
            tok(TokenKind::As, "as", 0, 30),
            ident("string", 0, 33),
        )),
        block(
            0,
            39,
            vec![ReturnStatement::new(tok(TokenKind::Return, "return", 1, 4), Some(var("a", 1, 11))).into()],
        ),
        tok(TokenKind::EndFunction, "end function", 2, 0),
    );
    assert_eq!(
        transpile_expression(&Expression::Function(func)),
        "function(a, b = 2 as integer) as string\n    return a\nend function"
    );
}

// =============================================================================
// Access
// =============================================================================

#[test]
fn test_dotted_get_without_namespaces() {
    let expression = dotted(dotted(var("m", 0, 0), "top", 0, 2), "value", 0, 6);
    assert_eq!(transpile_expression(&expression), "m.top.value");
}

#[test]
fn test_namespaced_call_is_flattened() {
    let mut table = NamespaceTable::new();
    table.add_namespace("Foo.Bar");

    let expression = call(
        dotted(dotted(var("Foo", 0, 0), "Bar", 0, 4), "baz", 0, 8),
        Vec::new(),
    );
    let options = TranspileOptions::default();
    assert_eq!(
        transpile_expression_with(&expression, &options, &table),
        "Foo_Bar_baz()"
    );
    // Without a resolver the chain is left alone.
    assert_eq!(transpile_expression(&expression), "Foo.Bar.baz()");
}

#[test]
fn test_namespace_lookup_is_case_insensitive() {
    let mut table = NamespaceTable::new();
    table.add_namespace("foo");

    let expression = dotted(var("FOO", 0, 0), "run", 0, 4);
    assert_eq!(
        transpile_expression_with(&expression, &TranspileOptions::default(), &table),
        "FOO_run"
    );
}

#[test]
fn test_non_namespace_chain_is_kept_with_table() {
    let mut table = NamespaceTable::new();
    table.add_namespace("Foo");

    let expression = dotted(dotted(var("m", 0, 0), "top", 0, 2), "value", 0, 6);
    assert_eq!(
        transpile_expression_with(&expression, &TranspileOptions::default(), &table),
        "m.top.value"
    );
}

#[test]
fn test_indexed_and_attribute_access() {
    let indexed: Expression = IndexedGetExpression::new(
        var("list", 0, 0),
        tok(TokenKind::LeftSquare, "[", 0, 4),
        var("i", 0, 5),
        tok(TokenKind::RightSquare, "]", 0, 6),
    )
    .into();
    assert_eq!(transpile_expression(&indexed), "list[i]");

    let attribute: Expression = XmlAttributeGetExpression::new(
        var("xml", 0, 0),
        tok(TokenKind::At, "@", 0, 3),
        ident("id", 0, 4),
    )
    .into();
    assert_eq!(transpile_expression(&attribute), "xml@id");
}

#[test]
fn test_grouping() {
    let grouped = grouping(binary(var("a", 0, 1), TokenKind::Minus, "-", var("b", 0, 5)));
    let product = binary(grouped, TokenKind::Star, "*", int("2", 0, 10));
    assert_eq!(transpile_expression(&product), "(a - b) * 2");
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn test_string_literal_is_requoted() {
    assert_eq!(transpile_expression(&string("\"plain\"", 0, 0)), "\"plain\"");
    assert_eq!(
        transpile_expression(&string("\"say \"\"hi\"\"\"", 0, 0)),
        "\"say \"\"hi\"\"\""
    );
    // Unterminated literal gets its closing quote back.
    assert_eq!(transpile_expression(&string("\"abc", 0, 0)), "\"abc\"");
}

#[test]
fn test_string_helpers() {
    assert_eq!(decode_string_literal("\"a \"\"b\"\"\""), "a \"b\"");
    assert_eq!(decode_string_literal("\"open"), "open");
    assert_eq!(quote_string("a\"b"), "\"a\"\"b\"");
    assert_eq!(quote_string(""), "\"\"");
}

#[test]
fn test_other_literals_keep_token_text() {
    let hex: Expression = LiteralExpression::new(tok(TokenKind::HexLiteral, "&HFF", 0, 0)).into();
    let boolean: Expression = LiteralExpression::new(tok(TokenKind::True, "TRUE", 0, 0)).into();
    let float: Expression = LiteralExpression::new(tok(TokenKind::FloatLiteral, "1.5!", 0, 0)).into();
    assert_eq!(transpile_expression(&hex), "&HFF");
    assert_eq!(transpile_expression(&boolean), "TRUE");
    assert_eq!(transpile_expression(&float), "1.5!");
}

// =============================================================================
// Array literals
// =============================================================================

fn array(elements: Vec<Expression>, close_line: u32) -> Expression {
    ArrayLiteralExpression::new(
        tok(TokenKind::LeftSquare, "[", 0, 0),
        elements,
        tok(TokenKind::RightSquare, "]", close_line, 0),
    )
    .into()
}

#[test]
fn test_array_literal_one_element_per_line() {
    let expression = array(
        vec![
            int("1", 1, 4),
            comment_element("' c", 2, 4),
            int("2", 3, 4),
            int("3", 4, 4),
        ],
        5,
    );
    assert_eq!(
        transpile_expression(&expression),
        "[\n    1,\n    ' c\n    2,\n    3\n]"
    );
}

#[test]
fn test_array_literal_same_line_comment() {
    let expression = array(
        vec![int("1", 1, 4), comment_element("' one", 1, 7), int("2", 2, 4)],
        3,
    );
    assert_eq!(transpile_expression(&expression), "[\n    1, ' one\n    2\n]");
}

#[test]
fn test_array_literal_trailing_comment_has_no_comma_before_it() {
    let expression = array(vec![int("1", 1, 4), comment_element("' end", 2, 4)], 3);
    assert_eq!(transpile_expression(&expression), "[\n    1\n    ' end\n]");
}

#[test]
fn test_empty_array_literal() {
    let expression = array(Vec::new(), 0);
    assert_eq!(transpile_expression(&expression), "[]");
}

// =============================================================================
// Associative array literals
// =============================================================================

fn pair(key: &str, line: u32, value: Expression) -> AAMember {
    AAMember::Pair(AAPair::new(
        ident(key, line, 4),
        tok(TokenKind::Colon, ":", line, 5),
        value,
    ))
}

fn aa_comment(text: &str, line: u32, column: u32) -> AAMember {
    let tokens = vec![tok(TokenKind::Comment, text, line, column)];
    AAMember::Comment(Comment::element(tokens).expect("one comment token"))
}

fn aa(members: Vec<AAMember>, close_line: u32) -> Expression {
    AALiteralExpression::new(
        tok(TokenKind::LeftCurly, "{", 0, 0),
        members,
        tok(TokenKind::RightCurly, "}", close_line, 0),
    )
    .into()
}

#[test]
fn test_aa_literal_comment_on_open_brace_line() {
    let expression = aa(
        vec![
            aa_comment("' first", 0, 2),
            pair("a", 1, int("1", 1, 7)),
            pair("b", 2, string("\"x\"", 2, 7)),
        ],
        3,
    );
    assert_eq!(
        transpile_expression(&expression),
        "{ ' first\n    a: 1,\n    b: \"x\"\n}"
    );
}

#[test]
fn test_aa_literal_same_line_comment() {
    let expression = aa(
        vec![
            pair("a", 1, int("1", 1, 7)),
            aa_comment("' note", 1, 10),
            pair("b", 2, int("2", 2, 7)),
        ],
        3,
    );
    assert_eq!(
        transpile_expression(&expression),
        "{\n    a: 1, ' note\n    b: 2\n}"
    );
}

#[test]
fn test_empty_aa_literal() {
    assert_eq!(transpile_expression(&aa(Vec::new(), 0)), "{}");
}

#[test]
fn test_nested_literals_indent() {
    let inner = array(vec![int("1", 2, 8)], 3);
    let expression = aa(vec![pair("list", 1, inner)], 4);
    assert_eq!(
        transpile_expression(&expression),
        "{\n    list: [\n        1\n    ]\n}"
    );
}

// =============================================================================
// Class construction
// =============================================================================

#[test]
fn test_new_uses_flattened_class_name() {
    let expression: Expression = NewExpression::new(
        tok(TokenKind::New, "new", 0, 0),
        dotted(var("Shapes", 0, 4), "Circle", 0, 11),
        tok(TokenKind::LeftParen, "(", 0, 17),
        vec![int("2", 0, 18)],
        tok(TokenKind::RightParen, ")", 0, 19),
    )
    .unwrap()
    .into();
    assert_eq!(transpile_expression(&expression), "Shapes_Circle(2)");
}

// =============================================================================
// Template strings
// =============================================================================

fn template(parts: Vec<TemplatePart>) -> Expression {
    TemplateStringExpression::new(
        tok(TokenKind::BackTick, "`", 0, 0),
        parts,
        tok(TokenKind::BackTick, "`", 0, 30),
    )
    .into()
}

fn text(value: &str, column: u32) -> TemplatePart {
    TemplatePart::Text(tok(TokenKind::TemplateStringQuasi, value, 0, column))
}

#[test]
fn test_template_string_with_interpolation() {
    let expression = template(vec![
        text("Hello ", 1),
        TemplatePart::Expression(var("name", 0, 9)),
        text("!", 14),
    ]);

    let options = TranspileOptions::default();
    let mut state = TranspileState::new(&options, &NoNamespaces, TEST_SOURCE_PATH);
    let output = crate::source_node::to_text(&expression.transpile(&mut state));

    assert_eq!(output, "(\"Hello \" + bslib_toString(name) + \"!\")");
    assert!(state.helpers().to_string);
}

#[test]
fn test_empty_template_string() {
    assert_eq!(transpile_expression(&template(Vec::new())), "\"\"");
}

#[test]
fn test_template_string_line_breaks() {
    let expression = template(vec![text("a\nb", 1)]);
    assert_eq!(transpile_expression(&expression), "(\"a\" + chr(10) + \"b\")");
}

#[test]
fn test_template_string_single_text_is_not_parenthesized() {
    let expression = template(vec![text("abc", 1)]);
    assert_eq!(transpile_expression(&expression), "\"abc\"");
}

#[test]
fn test_template_string_quotes_are_doubled() {
    let expression = template(vec![text("say \"hi\"", 1)]);
    assert_eq!(transpile_expression(&expression), "\"say \"\"hi\"\"\"");
}
