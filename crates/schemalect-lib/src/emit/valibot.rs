//! Valibot: wrapping-call dialect.
//!
//! Constraints are actions piped after the base schema with `v.pipe`, and the
//! optional modifier wraps the whole schema.

use schemalect_core::utils::{format_number, quote};
use schemalect_core::{EnumLiterals, LiteralKind, ObjectNode, SchemaNode};

use super::{Construct, Emitter, Scope, list, property_value, render_properties, unsupported};
use crate::{DialectId, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct Valibot;

impl Emitter for Valibot {
    fn dialect(&self) -> DialectId {
        DialectId::Valibot
    }

    fn runtime_import(&self) -> &'static str {
        r#"import * as v from "valibot";"#
    }

    fn emit(&self, node: &SchemaNode, scope: &Scope) -> Result<String> {
        match node {
            SchemaNode::Boolean => Ok("v.boolean()".to_string()),
            SchemaNode::String { min_length } => {
                let actions: Vec<String> = min_length
                    .iter()
                    .map(|n| format!("v.minLength({n})"))
                    .collect();
                Ok(pipe("v.string()", &actions))
            }
            SchemaNode::Number { minimum, maximum } => {
                let mut actions = Vec::new();
                if let Some(min) = minimum {
                    actions.push(format!("v.minValue({})", format_number(*min)));
                }
                if let Some(max) = maximum {
                    actions.push(format!("v.maxValue({})", format_number(*max)));
                }
                Ok(pipe("v.number()", &actions))
            }
            SchemaNode::Literal { value } => Ok(format!("v.literal({})", value.to_js())),
            SchemaNode::Object(object) => self.emit_object(object, scope),
            SchemaNode::Array { items } => {
                Ok(format!("v.array({})", self.emit(items, &scope.item())?))
            }
            SchemaNode::Union { members } => {
                if let Some(literals) = EnumLiterals::classify(members) {
                    return Ok(literal_set(&literals));
                }
                let members = members
                    .iter()
                    .map(|m| self.emit(m, scope))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("v.union([{}])", list(&members)))
            }
            SchemaNode::Optional { .. } => Err(unsupported(
                self.dialect(),
                Construct::OptionalOutsideProperty,
                scope,
            )),
        }
    }

    fn emit_object(&self, object: &ObjectNode, scope: &Scope) -> Result<String> {
        let body = render_properties(object, scope, |name, value, child| {
            let (value, optional) = property_value(self.dialect(), value, child)?;
            let rendered = self.emit(value, child)?;
            let rendered = if optional {
                format!("v.optional({rendered})")
            } else {
                rendered
            };
            Ok(format!("{}: {rendered}", quote(name)))
        })?;
        Ok(format!("v.object({body})"))
    }
}

fn pipe(schema: &str, actions: &[String]) -> String {
    if actions.is_empty() {
        return schema.to_string();
    }
    format!("v.pipe({schema}, {})", list(actions))
}

/// `v.picklist` is typed for strings and numbers only, so boolean enums
/// intentionally render as a `v.union` of literals.
fn literal_set(literals: &EnumLiterals<'_>) -> String {
    match literals.kind {
        LiteralKind::String | LiteralKind::Number => {
            let values: Vec<String> = literals.values.iter().map(|v| v.to_js()).collect();
            format!("v.picklist([{}])", list(&values))
        }
        LiteralKind::Bool => {
            let values: Vec<String> = literals
                .values
                .iter()
                .map(|v| format!("v.literal({})", v.to_js()))
                .collect();
            format!("v.union([{}])", list(&values))
        }
    }
}
