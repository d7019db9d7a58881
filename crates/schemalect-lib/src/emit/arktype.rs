//! ArkType: embedded-expression dialect.
//!
//! Most types are strings in ArkType's own syntax (`"string >= 1"`,
//! `"'a' | 'b'"`, `"number[]"`). Objects become `type({...})` calls, and once a
//! call is involved, arrays and unions switch to ArkType tuple expressions
//! (`[def, "[]"]`, `[a, "|", b]`) since a call cannot be spliced into a string.
//!
//! Optional properties are marked on the key (`"from?"`), not on the value.
//! Upper number bounds are not supported.

use schemalect_core::utils::{format_number, quote, single_quote};
use schemalect_core::{EnumLiterals, LiteralValue, ObjectNode, SchemaNode};

use super::{Construct, Emitter, Scope, property_value, render_properties, unsupported};
use crate::{DialectId, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct ArkType;

/// A rendered ArkType definition.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Definition {
    /// Text in ArkType's string syntax, not yet quoted.
    Embedded(String),
    /// A JavaScript expression (`type(...)` call or tuple expression).
    Expression(String),
}

impl Definition {
    fn render(self) -> String {
        match self {
            Self::Embedded(text) => quote(&text),
            Self::Expression(code) => code,
        }
    }
}

impl Emitter for ArkType {
    fn dialect(&self) -> DialectId {
        DialectId::ArkType
    }

    fn runtime_import(&self) -> &'static str {
        r#"import { type } from "arktype";"#
    }

    fn emit(&self, node: &SchemaNode, scope: &Scope) -> Result<String> {
        self.define(node, scope).map(Definition::render)
    }

    /// Nested objects are explicit `type(...)` calls.
    fn emit_object(&self, object: &ObjectNode, scope: &Scope) -> Result<String> {
        Ok(format!("type({})", self.property_map(object, scope)?))
    }
}

impl ArkType {
    fn define(&self, node: &SchemaNode, scope: &Scope) -> Result<Definition> {
        match node {
            SchemaNode::Boolean => Ok(Definition::Embedded("boolean".to_string())),
            SchemaNode::String { min_length } => Ok(Definition::Embedded(match min_length {
                Some(n) => format!("string >= {n}"),
                None => "string".to_string(),
            })),
            SchemaNode::Number { minimum, maximum } => {
                if maximum.is_some() {
                    return Err(unsupported(self.dialect(), Construct::NumberMaximum, scope));
                }
                Ok(Definition::Embedded(match minimum {
                    Some(min) => format!("number >= {}", format_number(*min)),
                    None => "number".to_string(),
                }))
            }
            SchemaNode::Literal { value } => Ok(Definition::Embedded(embedded_literal(value))),
            SchemaNode::Object(object) => self.emit_object(object, scope).map(Definition::Expression),
            SchemaNode::Array { items } => {
                let item = self.define(items, &scope.item())?;
                Ok(array_of(item, matches!(**items, SchemaNode::Object(_))))
            }
            SchemaNode::Union { members } => {
                if let Some(literals) = EnumLiterals::classify(members) {
                    let values: Vec<String> =
                        literals.values.iter().map(|v| embedded_literal(v)).collect();
                    return Ok(Definition::Embedded(values.join(" | ")));
                }
                let members = members
                    .iter()
                    .map(|m| self.define(m, scope))
                    .collect::<Result<Vec<_>>>()?;
                Ok(union_of(members))
            }
            SchemaNode::Optional { .. } => Err(unsupported(
                self.dialect(),
                Construct::OptionalOutsideProperty,
                scope,
            )),
        }
    }

    /// The bare `{ "key": def }` map; optional properties carry a `?` key suffix.
    fn property_map(&self, object: &ObjectNode, scope: &Scope) -> Result<String> {
        render_properties(object, scope, |name, value, child| {
            let (value, optional) = property_value(self.dialect(), value, child)?;
            let mut key = escape_key(name);
            if optional {
                key.push('?');
            }
            Ok(format!("{}: {}", quote(&key), self.emit(value, child)?))
        })
    }
}

/// Escape keys ArkType would read as syntax: a trailing `?` becomes `\?`, and
/// the meta keys `+`, `...` and `[...]` (or a key already starting with `\`)
/// get a leading `\`.
fn escape_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 2);
    if is_meta_key(name) {
        key.push('\\');
    }
    match name.strip_suffix('?') {
        Some(stem) => {
            key.push_str(stem);
            key.push_str("\\?");
        }
        None => key.push_str(name),
    }
    key
}

fn is_meta_key(name: &str) -> bool {
    matches!(name, "+" | "...")
        || name.starts_with('\\')
        || (name.len() >= 2 && name.starts_with('[') && name.ends_with(']'))
}

fn embedded_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::String(s) => single_quote(s),
        LiteralValue::Number(n) => format_number(*n),
        LiteralValue::Bool(b) => b.to_string(),
    }
}

/// Operator expressions need grouping before a `[]` suffix.
fn is_compound(text: &str) -> bool {
    text.contains(|c: char| c == '|' || c.is_whitespace())
}

fn array_of(item: Definition, item_is_object: bool) -> Definition {
    match item {
        Definition::Embedded(text) if is_compound(&text) => {
            Definition::Embedded(format!("({text})[]"))
        }
        Definition::Embedded(text) => Definition::Embedded(format!("{text}[]")),
        Definition::Expression(code) if item_is_object => {
            Definition::Expression(format!(r#"[({code}), "[]"]"#))
        }
        Definition::Expression(code) => Definition::Expression(format!(r#"[{code}, "[]"]"#)),
    }
}

/// All-string unions stay one string; otherwise fold left into binary tuples.
fn union_of(members: Vec<Definition>) -> Definition {
    if members
        .iter()
        .all(|m| matches!(m, Definition::Embedded(_)))
    {
        let parts: Vec<String> = members
            .into_iter()
            .filter_map(|m| match m {
                Definition::Embedded(text) => Some(text),
                Definition::Expression(_) => None,
            })
            .collect();
        return Definition::Embedded(parts.join(" | "));
    }

    let mut members = members.into_iter().map(Definition::render);
    let Some(first) = members.next() else {
        return Definition::Expression("[]".to_string());
    };
    Definition::Expression(members.fold(first, |acc, next| format!(r#"[{acc}, "|", {next}]"#)))
}
