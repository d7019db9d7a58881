//! Zod: chained-method dialect.
//!
//! Constraints and the optional modifier are appended as method calls on the
//! base schema.

use schemalect_core::utils::{format_number, quote};
use schemalect_core::{EnumLiterals, LiteralKind, ObjectNode, SchemaNode};

use super::{Construct, Emitter, Scope, list, property_value, render_properties, unsupported};
use crate::{DialectId, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct Zod;

impl Emitter for Zod {
    fn dialect(&self) -> DialectId {
        DialectId::Zod
    }

    fn runtime_import(&self) -> &'static str {
        r#"import { z } from "zod";"#
    }

    fn emit(&self, node: &SchemaNode, scope: &Scope) -> Result<String> {
        match node {
            SchemaNode::Boolean => Ok("z.boolean()".to_string()),
            SchemaNode::String { min_length } => {
                let mut out = "z.string()".to_string();
                if let Some(n) = min_length {
                    out.push_str(&format!(".min({n})"));
                }
                Ok(out)
            }
            SchemaNode::Number { minimum, maximum } => {
                let mut out = "z.number()".to_string();
                if let Some(min) = minimum {
                    out.push_str(&format!(".min({})", format_number(*min)));
                }
                if let Some(max) = maximum {
                    out.push_str(&format!(".max({})", format_number(*max)));
                }
                Ok(out)
            }
            SchemaNode::Literal { value } => Ok(format!("z.literal({})", value.to_js())),
            SchemaNode::Object(object) => self.emit_object(object, scope),
            SchemaNode::Array { items } => {
                Ok(format!("z.array({})", self.emit(items, &scope.item())?))
            }
            SchemaNode::Union { members } => {
                if let Some(literals) = EnumLiterals::classify(members) {
                    return Ok(literal_set(&literals));
                }
                let members = members
                    .iter()
                    .map(|m| self.emit(m, scope))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("z.union([{}])", list(&members)))
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
            let mut rendered = self.emit(value, child)?;
            if optional {
                rendered.push_str(".optional()");
            }
            Ok(format!("{}: {rendered}", quote(name)))
        })?;
        Ok(format!("z.object({body})"))
    }
}

/// `z.enum` only takes strings; other literal kinds use the multi-value `z.literal`.
fn literal_set(literals: &EnumLiterals<'_>) -> String {
    let values: Vec<String> = literals.values.iter().map(|v| v.to_js()).collect();
    match literals.kind {
        LiteralKind::String => format!("z.enum([{}])", list(&values)),
        LiteralKind::Number | LiteralKind::Bool => format!("z.literal([{}])", list(&values)),
    }
}
