use schemalect_core::parse_canonical;

use super::ir::render_ir;

#[test]
fn compact_ir_keeps_property_order() {
    let root = parse_canonical(
        r#"{
            "type": "object",
            "properties": {
                "zeta": { "type": "boolean" },
                "alpha": { "type": "string", "minLength": 2 }
            },
            "required": ["alpha"]
        }"#,
    )
    .unwrap();

    insta::assert_snapshot!(render_ir(root, true).unwrap(), @r#"{"kind":"object","properties":{"zeta":{"kind":"optional","inner":{"kind":"boolean"}},"alpha":{"kind":"string","min_length":2}}}"#);
}

#[test]
fn pretty_ir_is_indented() {
    let root = parse_canonical(
        r#"{ "type": "object", "properties": { "on": { "const": true } }, "required": ["on"] }"#,
    )
    .unwrap();

    insta::assert_snapshot!(render_ir(root, false).unwrap(), @r#"
    {
      "kind": "object",
      "properties": {
        "on": {
          "kind": "literal",
          "value": true
        }
      }
    }
    "#);
}
