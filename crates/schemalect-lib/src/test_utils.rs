//! Shared fixtures for emitter and assembly tests.

use schemalect_core::{ObjectNode, SchemaNode};

use crate::emit::Scope;
use crate::{DialectId, Result};

/// Render a single node at the root scope.
pub fn emit_node(dialect: DialectId, node: &SchemaNode) -> Result<String> {
    dialect.emitter().emit(node, &Scope::root())
}

/// Render a single node at the root scope, panicking on error.
pub fn expect_node(dialect: DialectId, node: SchemaNode) -> String {
    emit_node(dialect, &node).unwrap()
}

/// Render an object with one property bound to `node`.
pub fn expect_property(dialect: DialectId, name: &str, node: SchemaNode) -> String {
    let object = ObjectNode::new().property(name, node);
    dialect
        .emitter()
        .emit_object(&object, &Scope::root())
        .unwrap()
}

/// `{ event: string, from?: string }`
pub fn event_object() -> SchemaNode {
    ObjectNode::new()
        .property("event", SchemaNode::string())
        .property("from", SchemaNode::optional(SchemaNode::string()))
        .into()
}

/// The `request-trigger` attribute: a string, a list of strings or event
/// objects, or a single event object.
pub fn request_trigger() -> ObjectNode {
    ObjectNode::new().property(
        "request-trigger",
        SchemaNode::optional(SchemaNode::union([
            SchemaNode::string(),
            SchemaNode::array(SchemaNode::union([SchemaNode::string(), event_object()])),
            event_object(),
        ])),
    )
}

/// A root exercising every node kind the chained and wrapping dialects support.
pub fn kitchen_sink() -> ObjectNode {
    ObjectNode::new()
        .property("label", SchemaNode::string_min(1))
        .property("delay", SchemaNode::number_range(Some(0.0), Some(5000.0)))
        .property("disabled", SchemaNode::optional(SchemaNode::boolean()))
        .property(
            "placement",
            SchemaNode::union([SchemaNode::literal("top"), SchemaNode::literal("bottom")]),
        )
        .property(
            "tags",
            SchemaNode::optional(SchemaNode::array(SchemaNode::string())),
        )
        .property(
            "items",
            SchemaNode::array(
                ObjectNode::new()
                    .property("id", SchemaNode::string())
                    .property("value", SchemaNode::number())
                    .into(),
            ),
        )
}
