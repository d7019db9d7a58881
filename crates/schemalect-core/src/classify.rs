//! Derived properties of IR nodes.
//!
//! Nothing here is stored on the tree; every answer is recomputed from the
//! node on demand.

use crate::ir::{LiteralValue, SchemaNode};

/// Primitive kind of a literal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Number,
    Bool,
}

impl LiteralValue {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Self::String(_) => LiteralKind::String,
            Self::Number(_) => LiteralKind::Number,
            Self::Bool(_) => LiteralKind::Bool,
        }
    }
}

/// Literal values of a union that classifies as an enum.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumLiterals<'a> {
    pub kind: LiteralKind,
    pub values: Vec<&'a LiteralValue>,
}

impl<'a> EnumLiterals<'a> {
    /// Classify union members. `None` unless every member is a literal of one kind.
    pub fn classify(members: &'a [SchemaNode]) -> Option<Self> {
        let mut values = Vec::with_capacity(members.len());
        for member in members {
            let SchemaNode::Literal { value } = member else {
                return None;
            };
            values.push(value);
        }

        let kind = values.first()?.kind();
        if values.iter().any(|v| v.kind() != kind) {
            return None;
        }

        Some(Self { kind, values })
    }
}

/// Whether a union with these members is a literal enumeration.
pub fn is_enum(members: &[SchemaNode]) -> bool {
    EnumLiterals::classify(members).is_some()
}

impl SchemaNode {
    /// True for a `Union` whose members are same-kind literals.
    pub fn is_enum(&self) -> bool {
        match self {
            Self::Union { members } => is_enum(members),
            _ => false,
        }
    }
}
