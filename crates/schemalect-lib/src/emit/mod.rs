//! Dialect emitters.
//!
//! Each emitter renders the IR recursively as source text for one validation
//! library. Emitters are stateless unit structs; everything they need per call
//! travels in a [`Scope`].

mod arktype;
mod scope;
mod superstruct;
mod typebox;
mod valibot;
mod zod;

#[cfg(test)]
mod arktype_tests;
#[cfg(test)]
mod scope_tests;
#[cfg(test)]
mod zod_tests;

pub use arktype::ArkType;
pub use scope::{Construct, PropertyPath, Scope, Segment};
pub use superstruct::Superstruct;
pub use typebox::TypeBox;
pub use valibot::Valibot;
pub use zod::Zod;

use schemalect_core::{ObjectNode, SchemaNode};

use crate::{Config, DialectId, Error, Result};

/// Renders IR nodes as source text for one dialect.
pub trait Emitter: Send + Sync {
    fn dialect(&self) -> DialectId;

    /// The dialect's runtime import line.
    fn runtime_import(&self) -> &'static str;

    /// Render one node.
    ///
    /// `Optional` is only meaningful as the direct value of an object property
    /// and is rejected here; object rendering unwraps it.
    fn emit(&self, node: &SchemaNode, scope: &Scope) -> Result<String>;

    /// Render an object node.
    fn emit_object(&self, object: &ObjectNode, scope: &Scope) -> Result<String>;

    /// Import block: the runtime import followed by the inference helper import.
    fn header(&self, config: &Config) -> String {
        format!("{}\n{}\n", self.runtime_import(), config.helper_import())
    }

    /// Expression bound to the exported `schema`.
    fn root_expression(&self, root: &ObjectNode) -> Result<String> {
        self.emit_object(root, &Scope::root())
    }

    /// Module body: the `schema` value export and its inferred `Schema` type.
    fn emit_root(&self, root: &ObjectNode, config: &Config) -> Result<String> {
        let expression = self.root_expression(root)?;
        Ok(format!(
            "export const schema = {expression};\nexport type Schema = {};\n",
            config.schema_type()
        ))
    }

    /// Hand-written source to use verbatim instead of deriving from the IR.
    ///
    /// Only the canonical dialect accepts it.
    fn transform(&self, _root: &ObjectNode, _raw_source: &str) -> Option<String> {
        None
    }
}

pub(crate) fn unsupported(dialect: DialectId, construct: Construct, scope: &Scope) -> Error {
    Error::UnsupportedNode {
        dialect,
        construct,
        path: scope.path().clone(),
    }
}

/// Unwrap the optional marker of a property value.
pub(crate) fn property_value<'a>(
    dialect: DialectId,
    value: &'a SchemaNode,
    scope: &Scope,
) -> Result<(&'a SchemaNode, bool)> {
    let (inner, optional) = value.unwrap_optional();
    if optional && matches!(inner, SchemaNode::Optional { .. }) {
        return Err(unsupported(dialect, Construct::NestedOptional, scope));
    }
    Ok((inner, optional))
}

/// Render `{ ... }` with one property per line, in insertion order.
///
/// `entry` receives the property name, its raw value and the child scope, and
/// returns the `key: value` text for that line.
pub(crate) fn render_properties(
    object: &ObjectNode,
    scope: &Scope,
    mut entry: impl FnMut(&str, &SchemaNode, &Scope) -> Result<String>,
) -> Result<String> {
    if object.is_empty() {
        return Ok("{}".to_string());
    }

    let mut out = String::from("{\n");
    for (name, value) in &object.properties {
        let child = scope.property(name);
        let line = entry(name, value, &child)?;
        out.push_str(&format!("{}{line},\n", child.indent()));
    }
    out.push_str(&format!("{}}}", scope.indent()));
    Ok(out)
}

/// Comma-joined list of already rendered items.
pub(crate) fn list(items: &[String]) -> String {
    items.join(", ")
}
