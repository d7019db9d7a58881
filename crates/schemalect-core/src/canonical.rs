//! Canonical schema loading.
//!
//! The canonical description of a behavior's attributes is the JSON Schema
//! document produced by its hand-authored TypeBox schema. This module reads
//! that document into the IR, keeping property order.
//!
//! Only the subset of JSON Schema the IR can express is accepted:
//! - `type`: `string` (`minLength`), `number`/`integer` (`minimum`, `maximum`),
//!   `boolean`, `array` (`items`), `object` (`properties`, `required`), or a list of those
//! - `const` and `enum` for literals
//! - `anyOf` / `oneOf` for unions

use serde_json::{Map, Value};

use crate::ir::{LiteralValue, ObjectNode, SchemaNode};

/// Errors raised while building the IR from a canonical schema document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("root schema must be an object, found {0}")]
    RootNotObject(&'static str),

    #[error("{message} at `{pointer}`")]
    Shape { pointer: String, message: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Parse a canonical schema document from JSON text.
pub fn parse_canonical(json: &str) -> Result<ObjectNode> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

/// Build the IR root from an already-parsed canonical schema document.
pub fn from_value(value: &Value) -> Result<ObjectNode> {
    match load_node(value, "")? {
        SchemaNode::Object(object) => Ok(object),
        other => Err(LoadError::RootNotObject(other.kind_name())),
    }
}

fn shape_error(pointer: &str, message: impl Into<String>) -> LoadError {
    LoadError::Shape {
        pointer: if pointer.is_empty() {
            "/".to_string()
        } else {
            pointer.to_string()
        },
        message: message.into(),
    }
}

/// Escape a key for use as a JSON Pointer segment.
fn pointer_segment(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

fn load_node(value: &Value, pointer: &str) -> Result<SchemaNode> {
    let Value::Object(schema) = value else {
        return Err(shape_error(pointer, "expected a schema object"));
    };

    if let Some(constant) = schema.get("const") {
        let value = literal(constant, &format!("{pointer}/const"))?;
        return Ok(SchemaNode::Literal { value });
    }

    if let Some(values) = schema.get("enum") {
        return load_enum(values, &format!("{pointer}/enum"));
    }

    for keyword in ["anyOf", "oneOf"] {
        if let Some(members) = schema.get(keyword) {
            return load_union(members, &format!("{pointer}/{keyword}"));
        }
    }

    match schema.get("type") {
        Some(Value::String(ty)) => load_typed(ty, schema, pointer),
        Some(Value::Array(types)) => {
            let mut members = Vec::with_capacity(types.len());
            for (i, ty) in types.iter().enumerate() {
                let Value::String(ty) = ty else {
                    return Err(shape_error(
                        &format!("{pointer}/type/{i}"),
                        "expected a type name",
                    ));
                };
                members.push(load_typed(ty, schema, pointer)?);
            }
            collapse_union(members, &format!("{pointer}/type"))
        }
        Some(_) => Err(shape_error(
            &format!("{pointer}/type"),
            "expected a type name or a list of type names",
        )),
        None => Err(shape_error(pointer, "missing `type`, `const`, `enum` or `anyOf`")),
    }
}

fn load_typed(ty: &str, schema: &Map<String, Value>, pointer: &str) -> Result<SchemaNode> {
    match ty {
        "string" => {
            let min_length = match schema.get("minLength") {
                None => None,
                Some(v) => Some(v.as_u64().ok_or_else(|| {
                    shape_error(
                        &format!("{pointer}/minLength"),
                        "expected a non-negative integer",
                    )
                })?),
            };
            Ok(SchemaNode::String { min_length })
        }
        "number" | "integer" => Ok(SchemaNode::Number {
            minimum: bound(schema, "minimum", pointer)?,
            maximum: bound(schema, "maximum", pointer)?,
        }),
        "boolean" => Ok(SchemaNode::Boolean),
        "array" => {
            let items = schema
                .get("items")
                .ok_or_else(|| shape_error(pointer, "array schema without `items`"))?;
            let items = load_node(items, &format!("{pointer}/items"))?;
            Ok(SchemaNode::array(items))
        }
        "object" => load_object(schema, pointer).map(SchemaNode::Object),
        other => Err(shape_error(
            &format!("{pointer}/type"),
            format!("unsupported type `{other}`"),
        )),
    }
}

fn bound(schema: &Map<String, Value>, keyword: &str, pointer: &str) -> Result<Option<f64>> {
    match schema.get(keyword) {
        None => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| shape_error(&format!("{pointer}/{keyword}"), "expected a number")),
    }
}

fn load_object(schema: &Map<String, Value>, pointer: &str) -> Result<ObjectNode> {
    let required: Vec<&str> = match schema.get("required") {
        None => Vec::new(),
        Some(Value::Array(names)) => names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                name.as_str().ok_or_else(|| {
                    shape_error(
                        &format!("{pointer}/required/{i}"),
                        "expected a property name",
                    )
                })
            })
            .collect::<Result<_>>()?,
        Some(_) => {
            return Err(shape_error(
                &format!("{pointer}/required"),
                "expected a list of property names",
            ));
        }
    };

    let properties = match schema.get("properties") {
        None => return Ok(ObjectNode::new()),
        Some(Value::Object(properties)) => properties,
        Some(_) => {
            return Err(shape_error(
                &format!("{pointer}/properties"),
                "expected an object",
            ));
        }
    };

    let mut object = ObjectNode::new();
    for (name, property) in properties {
        let child = format!("{pointer}/properties/{}", pointer_segment(name));
        let node = load_node(property, &child)?;
        let node = if required.contains(&name.as_str()) {
            node
        } else {
            SchemaNode::optional(node)
        };
        object.properties.insert(name.clone(), node);
    }
    Ok(object)
}

fn load_enum(values: &Value, pointer: &str) -> Result<SchemaNode> {
    let Value::Array(values) = values else {
        return Err(shape_error(pointer, "expected a list of values"));
    };
    let members = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            literal(v, &format!("{pointer}/{i}")).map(|value| SchemaNode::Literal { value })
        })
        .collect::<Result<Vec<_>>>()?;
    collapse_union(members, pointer)
}

fn load_union(members: &Value, pointer: &str) -> Result<SchemaNode> {
    let Value::Array(members) = members else {
        return Err(shape_error(pointer, "expected a list of schemas"));
    };
    let members = members
        .iter()
        .enumerate()
        .map(|(i, member)| load_node(member, &format!("{pointer}/{i}")))
        .collect::<Result<Vec<_>>>()?;
    collapse_union(members, pointer)
}

/// Unions keep at least two members; a single member stands for itself.
fn collapse_union(mut members: Vec<SchemaNode>, pointer: &str) -> Result<SchemaNode> {
    match members.len() {
        0 => Err(shape_error(pointer, "expected at least one alternative")),
        1 => Ok(members.remove(0)),
        _ => Ok(SchemaNode::Union { members }),
    }
}

fn literal(value: &Value, pointer: &str) -> Result<LiteralValue> {
    match value {
        Value::String(s) => Ok(LiteralValue::String(s.clone())),
        Value::Bool(b) => Ok(LiteralValue::Bool(*b)),
        Value::Number(n) => n
            .as_f64()
            .map(LiteralValue::Number)
            .ok_or_else(|| shape_error(pointer, "number out of range")),
        _ => Err(shape_error(
            pointer,
            "literal must be a string, number or boolean",
        )),
    }
}
