//! Superstruct: wrapping-call dialect.
//!
//! Refinements nest the base struct as their first argument
//! (`s.min(s.number(), 0)`), as does `s.optional`.

use schemalect_core::utils::{format_number, quote};
use schemalect_core::{EnumLiterals, LiteralKind, ObjectNode, SchemaNode};

use super::{Construct, Emitter, Scope, list, property_value, render_properties, unsupported};
use crate::{DialectId, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct Superstruct;

impl Emitter for Superstruct {
    fn dialect(&self) -> DialectId {
        DialectId::Superstruct
    }

    fn runtime_import(&self) -> &'static str {
        r#"import * as s from "superstruct";"#
    }

    fn emit(&self, node: &SchemaNode, scope: &Scope) -> Result<String> {
        match node {
            SchemaNode::Boolean => Ok("s.boolean()".to_string()),
            SchemaNode::String { min_length } => Ok(match min_length {
                // `s.size` defaults its upper bound to the lower one
                Some(n) => format!("s.size(s.string(), {n}, Infinity)"),
                None => "s.string()".to_string(),
            }),
            SchemaNode::Number { minimum, maximum } => {
                let mut out = "s.number()".to_string();
                if let Some(min) = minimum {
                    out = format!("s.min({out}, {})", format_number(*min));
                }
                if let Some(max) = maximum {
                    out = format!("s.max({out}, {})", format_number(*max));
                }
                Ok(out)
            }
            SchemaNode::Literal { value } => Ok(format!("s.literal({})", value.to_js())),
            SchemaNode::Object(object) => self.emit_object(object, scope),
            SchemaNode::Array { items } => {
                Ok(format!("s.array({})", self.emit(items, &scope.item())?))
            }
            SchemaNode::Union { members } => {
                if let Some(literals) = EnumLiterals::classify(members) {
                    return Ok(literal_set(&literals));
                }
                let members = members
                    .iter()
                    .map(|m| self.emit(m, scope))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("s.union([{}])", list(&members)))
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
                format!("s.optional({rendered})")
            } else {
                rendered
            };
            Ok(format!("{}: {rendered}", quote(name)))
        })?;
        Ok(format!("s.object({body})"))
    }
}

/// `s.enums` is typed for strings and numbers only, so boolean enums
/// intentionally render as a `s.union` of literals.
fn literal_set(literals: &EnumLiterals<'_>) -> String {
    match literals.kind {
        LiteralKind::String | LiteralKind::Number => {
            let values: Vec<String> = literals.values.iter().map(|v| v.to_js()).collect();
            format!("s.enums([{}])", list(&values))
        }
        LiteralKind::Bool => {
            let values: Vec<String> = literals
                .values
                .iter()
                .map(|v| format!("s.literal({})", v.to_js()))
                .collect();
            format!("s.union([{}])", list(&values))
        }
    }
}
