use schemalect_core::{ObjectNode, SchemaNode};

use crate::test_utils::{emit_node, expect_node, expect_property, kitchen_sink};
use crate::{DialectId, Error, generate};

const ZOD: DialectId = DialectId::Zod;

#[test]
fn scalars() {
    assert_eq!(expect_node(ZOD, SchemaNode::boolean()), "z.boolean()");
    assert_eq!(expect_node(ZOD, SchemaNode::string()), "z.string()");
    assert_eq!(expect_node(ZOD, SchemaNode::string_min(3)), "z.string().min(3)");
    assert_eq!(expect_node(ZOD, SchemaNode::number()), "z.number()");
    assert_eq!(
        expect_node(ZOD, SchemaNode::number_range(Some(0.5), Some(10.0))),
        "z.number().min(0.5).max(10)"
    );
    assert_eq!(
        expect_node(ZOD, SchemaNode::number_range(None, Some(-1.0))),
        "z.number().max(-1)"
    );
}

#[test]
fn literals() {
    assert_eq!(expect_node(ZOD, SchemaNode::literal("a")), r#"z.literal("a")"#);
    assert_eq!(expect_node(ZOD, SchemaNode::literal(4)), "z.literal(4)");
    assert_eq!(expect_node(ZOD, SchemaNode::literal(true)), "z.literal(true)");
}

#[test]
fn string_enum_uses_z_enum() {
    let node = SchemaNode::union([SchemaNode::literal("a"), SchemaNode::literal("b")]);
    let res = expect_node(ZOD, node);
    assert_eq!(res, r#"z.enum(["a", "b"])"#);
    assert!(!res.contains("z.union"));
}

#[test]
fn number_and_bool_enums_use_literal_list() {
    let numbers = SchemaNode::union([SchemaNode::literal(1), SchemaNode::literal(2)]);
    assert_eq!(expect_node(ZOD, numbers), "z.literal([1, 2])");

    let bools = SchemaNode::union([SchemaNode::literal(true), SchemaNode::literal(false)]);
    assert_eq!(expect_node(ZOD, bools), "z.literal([true, false])");
}

#[test]
fn mixed_literals_use_union() {
    let node = SchemaNode::union([SchemaNode::literal("a"), SchemaNode::literal(1)]);
    assert_eq!(
        expect_node(ZOD, node),
        r#"z.union([z.literal("a"), z.literal(1)])"#
    );
}

#[test]
fn generic_union() {
    let node = SchemaNode::union([SchemaNode::string(), SchemaNode::number()]);
    assert_eq!(expect_node(ZOD, node), "z.union([z.string(), z.number()])");
}

#[test]
fn optional_suffix_applies_to_any_variant() {
    let res = expect_property(
        ZOD,
        "tags",
        SchemaNode::optional(SchemaNode::array(SchemaNode::string())),
    );
    insta::assert_snapshot!(res, @r#"
    z.object({
      "tags": z.array(z.string()).optional(),
    })
    "#);

    let res = expect_property(
        ZOD,
        "value",
        SchemaNode::optional(SchemaNode::union([SchemaNode::string(), SchemaNode::number()])),
    );
    insta::assert_snapshot!(res, @r#"
    z.object({
      "value": z.union([z.string(), z.number()]).optional(),
    })
    "#);
}

#[test]
fn empty_object() {
    assert_eq!(
        expect_node(ZOD, ObjectNode::new().into()),
        "z.object({})"
    );
}

#[test]
fn array_of_objects() {
    let node = SchemaNode::array(
        ObjectNode::new()
            .property("id", SchemaNode::string())
            .property("value", SchemaNode::number())
            .into(),
    );
    insta::assert_snapshot!(expect_node(ZOD, node), @r#"
    z.array(z.object({
      "id": z.string(),
      "value": z.number(),
    }))
    "#);
}

#[test]
fn optional_item_is_unsupported() {
    let node = SchemaNode::array(SchemaNode::optional(SchemaNode::string()));
    let err = emit_node(ZOD, &node).unwrap_err();
    assert_eq!(
        err.to_string(),
        "zod cannot represent an optional outside an object property at `<root>[]`"
    );
}

#[test]
fn nested_optional_is_unsupported() {
    let root = ObjectNode::new().property(
        "x",
        SchemaNode::optional(SchemaNode::optional(SchemaNode::string())),
    );
    let err = generate(&root, ZOD, None).unwrap_err();
    assert!(matches!(err, Error::UnsupportedNode { .. }));
    assert_eq!(
        err.to_string(),
        "zod cannot represent an optional wrapping another optional at `x`"
    );
}

#[test]
fn module() {
    let res = generate(&kitchen_sink(), ZOD, None).unwrap();
    insta::assert_snapshot!(res, @r#"
    import { z } from "zod";
    import type { InferSchema } from "@/lib/schema";

    export const schema = z.object({
      "label": z.string().min(1),
      "delay": z.number().min(0).max(5000),
      "disabled": z.boolean().optional(),
      "placement": z.enum(["top", "bottom"]),
      "tags": z.array(z.string()).optional(),
      "items": z.array(z.object({
        "id": z.string(),
        "value": z.number(),
      })),
    });
    export type Schema = InferSchema<typeof schema>;
    "#);
}
