//! TypeBox: the canonical authoring format.
//!
//! Behavior schemas are hand-written in TypeBox, so when that source is
//! available it is returned verbatim. Without it, the module is derived from the
//! IR like any other wrapping-call dialect, with constraints passed as JSON
//! Schema options.

use schemalect_core::utils::{format_number, quote};
use schemalect_core::{ObjectNode, SchemaNode};

use super::{Construct, Emitter, Scope, list, property_value, render_properties, unsupported};
use crate::{DialectId, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct TypeBox;

impl Emitter for TypeBox {
    fn dialect(&self) -> DialectId {
        DialectId::TypeBox
    }

    fn runtime_import(&self) -> &'static str {
        r#"import { Type } from "@sinclair/typebox";"#
    }

    fn emit(&self, node: &SchemaNode, scope: &Scope) -> Result<String> {
        match node {
            SchemaNode::Boolean => Ok("Type.Boolean()".to_string()),
            SchemaNode::String { min_length } => {
                let options: Vec<String> = min_length
                    .iter()
                    .map(|n| format!("minLength: {n}"))
                    .collect();
                Ok(with_options("Type.String", &options))
            }
            SchemaNode::Number { minimum, maximum } => {
                let mut options = Vec::new();
                if let Some(min) = minimum {
                    options.push(format!("minimum: {}", format_number(*min)));
                }
                if let Some(max) = maximum {
                    options.push(format!("maximum: {}", format_number(*max)));
                }
                Ok(with_options("Type.Number", &options))
            }
            SchemaNode::Literal { value } => Ok(format!("Type.Literal({})", value.to_js())),
            SchemaNode::Object(object) => self.emit_object(object, scope),
            SchemaNode::Array { items } => {
                Ok(format!("Type.Array({})", self.emit(items, &scope.item())?))
            }
            // Literal sets are unions of literals in TypeBox too.
            SchemaNode::Union { members } => {
                let members = members
                    .iter()
                    .map(|m| self.emit(m, scope))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("Type.Union([{}])", list(&members)))
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
                format!("Type.Optional({rendered})")
            } else {
                rendered
            };
            Ok(format!("{}: {rendered}", quote(name)))
        })?;
        Ok(format!("Type.Object({body})"))
    }

    fn transform(&self, _root: &ObjectNode, raw_source: &str) -> Option<String> {
        Some(raw_source.to_string())
    }
}

fn with_options(constructor: &str, options: &[String]) -> String {
    if options.is_empty() {
        format!("{constructor}()")
    } else {
        format!("{constructor}({{ {} }})", list(options))
    }
}
