use schemalect_core::{ObjectNode, SchemaNode};

use crate::test_utils::{emit_node, expect_node, expect_property, request_trigger};
use crate::{DialectId, Error, generate};

const ARKTYPE: DialectId = DialectId::ArkType;

#[test]
fn scalars_are_embedded_strings() {
    assert_eq!(expect_node(ARKTYPE, SchemaNode::boolean()), r#""boolean""#);
    assert_eq!(expect_node(ARKTYPE, SchemaNode::string()), r#""string""#);
    assert_eq!(expect_node(ARKTYPE, SchemaNode::string_min(1)), r#""string >= 1""#);
    assert_eq!(expect_node(ARKTYPE, SchemaNode::number()), r#""number""#);
    assert_eq!(
        expect_node(ARKTYPE, SchemaNode::number_range(Some(0.0), None)),
        r#""number >= 0""#
    );
}

#[test]
fn number_maximum_is_unsupported() {
    let root = ObjectNode::new().property("delay", SchemaNode::number_range(Some(0.0), Some(10.0)));
    let err = generate(&root, ARKTYPE, None).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedNode {
            dialect: ARKTYPE,
            construct: crate::Construct::NumberMaximum,
            path: crate::Scope::root().property("delay").path().clone(),
        }
    );
    assert_eq!(
        err.to_string(),
        "arktype cannot represent a number maximum at `delay`"
    );
}

#[test]
fn literals() {
    assert_eq!(expect_node(ARKTYPE, SchemaNode::literal("a")), r#""'a'""#);
    assert_eq!(expect_node(ARKTYPE, SchemaNode::literal(2)), r#""2""#);
    assert_eq!(expect_node(ARKTYPE, SchemaNode::literal(false)), r#""false""#);
}

#[test]
fn enum_is_pipe_joined_literals() {
    let node = SchemaNode::union([SchemaNode::literal("a"), SchemaNode::literal("b")]);
    let res = expect_node(ARKTYPE, node);
    assert_eq!(res, r#""'a' | 'b'""#);
    assert!(!res.contains(r#""|""#));
}

#[test]
fn string_union_is_one_string() {
    let node = SchemaNode::union([SchemaNode::string(), SchemaNode::number()]);
    assert_eq!(expect_node(ARKTYPE, node), r#""string | number""#);
}

#[test]
fn arrays_append_suffix() {
    assert_eq!(
        expect_node(ARKTYPE, SchemaNode::array(SchemaNode::string())),
        r#""string[]""#
    );
    assert_eq!(
        expect_node(
            ARKTYPE,
            SchemaNode::array(SchemaNode::union([SchemaNode::string(), SchemaNode::number()]))
        ),
        r#""(string | number)[]""#
    );
    assert_eq!(
        expect_node(ARKTYPE, SchemaNode::array(SchemaNode::string_min(1))),
        r#""(string >= 1)[]""#
    );
    assert_eq!(
        expect_node(ARKTYPE, SchemaNode::array(SchemaNode::array(SchemaNode::boolean()))),
        r#""boolean[][]""#
    );
}

#[test]
fn array_of_objects_parenthesizes_object() {
    let node = SchemaNode::array(
        ObjectNode::new()
            .property("id", SchemaNode::string())
            .property("value", SchemaNode::number())
            .into(),
    );
    insta::assert_snapshot!(expect_node(ARKTYPE, node), @r#"
    [(type({
      "id": "string",
      "value": "number",
    })), "[]"]
    "#);
}

#[test]
fn union_with_object_uses_tuple_expression() {
    let node = SchemaNode::union([
        SchemaNode::string(),
        ObjectNode::new().property("id", SchemaNode::string()).into(),
    ]);
    insta::assert_snapshot!(expect_node(ARKTYPE, node), @r#"
    ["string", "|", type({
      "id": "string",
    })]
    "#);
}

#[test]
fn optional_marks_key() {
    let res = expect_property(
        ARKTYPE,
        "tags",
        SchemaNode::optional(SchemaNode::array(SchemaNode::string())),
    );
    insta::assert_snapshot!(res, @r#"
    type({
      "tags?": "string[]",
    })
    "#);
}

#[test]
fn keys_ending_in_question_mark_are_escaped() {
    let res = expect_property(ARKTYPE, "done?", SchemaNode::boolean());
    assert!(res.contains(r#""done\\?": "boolean","#));

    let res = expect_property(ARKTYPE, "done?", SchemaNode::optional(SchemaNode::boolean()));
    assert!(res.contains(r#""done\\??": "boolean","#));
}

#[test]
fn meta_keys_are_escaped() {
    let root = ObjectNode::new()
        .property("+", SchemaNode::string())
        .property("...", SchemaNode::string())
        .property("[string]", SchemaNode::optional(SchemaNode::string()))
        .property("\\raw", SchemaNode::boolean())
        .property("plain", SchemaNode::boolean());
    let res = generate(&root, ARKTYPE, None).unwrap();
    insta::assert_snapshot!(res, @r#"
    import { type } from "arktype";
    import type { InferSchema } from "@/lib/schema";

    export const schema = type({
      "\\+": "string",
      "\\...": "string",
      "\\[string]?": "string",
      "\\\\raw": "boolean",
      "plain": "boolean",
    });
    export type Schema = InferSchema<typeof schema>;
    "#);
}

#[test]
fn string_literal_newline_is_kept_raw() {
    let res = expect_property(ARKTYPE, "q", SchemaNode::literal("a\nb"));
    assert!(res.contains(r#""q": "'a\nb'","#), "{res}");
}

#[test]
fn optional_outside_property_is_unsupported() {
    let node = SchemaNode::array(SchemaNode::optional(SchemaNode::string()));
    let err = emit_node(ARKTYPE, &node).unwrap_err();
    assert_eq!(
        err.to_string(),
        "arktype cannot represent an optional outside an object property at `<root>[]`"
    );
}

#[test]
fn deep_nesting_module() {
    let res = generate(&request_trigger(), ARKTYPE, None).unwrap();
    insta::assert_snapshot!(res, @r#"
    import { type } from "arktype";
    import type { InferSchema } from "@/lib/schema";

    export const schema = type({
      "request-trigger?": [["string", "|", [["string", "|", type({
        "event": "string",
        "from?": "string",
      })], "[]"]], "|", type({
        "event": "string",
        "from?": "string",
      })],
    });
    export type Schema = InferSchema<typeof schema>;
    "#);
}
