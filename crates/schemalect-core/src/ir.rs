//! Schema intermediate representation.
//!
//! A finite, read-only tree built once per canonical schema. Emitters borrow it
//! for the duration of a single transformation and never allocate or mutate nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node of the schema tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaNode {
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<u64>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maximum: Option<f64>,
    },
    Boolean,
    Literal {
        value: LiteralValue,
    },
    Object(ObjectNode),
    Array {
        items: Box<SchemaNode>,
    },
    /// At least two members.
    Union {
        members: Vec<SchemaNode>,
    },
    /// Never wraps another `Optional`.
    Optional {
        inner: Box<SchemaNode>,
    },
}

/// Primitive value of a literal node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Bool(bool),
    Number(f64),
    String(String),
}

/// Object node with properties in authoring order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectNode {
    #[serde(default)]
    pub properties: IndexMap<String, SchemaNode>,
}

impl SchemaNode {
    pub fn string() -> Self {
        Self::String { min_length: None }
    }

    pub fn string_min(min_length: u64) -> Self {
        Self::String {
            min_length: Some(min_length),
        }
    }

    pub fn number() -> Self {
        Self::Number {
            minimum: None,
            maximum: None,
        }
    }

    pub fn number_range(minimum: Option<f64>, maximum: Option<f64>) -> Self {
        Self::Number { minimum, maximum }
    }

    pub fn boolean() -> Self {
        Self::Boolean
    }

    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal {
            value: value.into(),
        }
    }

    pub fn array(items: SchemaNode) -> Self {
        Self::Array {
            items: Box::new(items),
        }
    }

    pub fn union(members: impl IntoIterator<Item = SchemaNode>) -> Self {
        Self::Union {
            members: members.into_iter().collect(),
        }
    }

    pub fn optional(inner: SchemaNode) -> Self {
        Self::Optional {
            inner: Box::new(inner),
        }
    }

    /// Strip one `Optional` layer, reporting whether it was present.
    pub fn unwrap_optional(&self) -> (&SchemaNode, bool) {
        match self {
            Self::Optional { inner } => (inner, true),
            other => (other, false),
        }
    }

    /// Short human-readable name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Number { .. } => "number",
            Self::Boolean => "boolean",
            Self::Literal { .. } => "literal",
            Self::Object(_) => "object",
            Self::Array { .. } => "array",
            Self::Union { .. } => "union",
            Self::Optional { .. } => "optional",
        }
    }
}

impl From<ObjectNode> for SchemaNode {
    fn from(object: ObjectNode) -> Self {
        Self::Object(object)
    }
}

impl ObjectNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property, keeping insertion order.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<SchemaNode>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
