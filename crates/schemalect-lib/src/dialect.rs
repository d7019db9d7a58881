//! Supported target dialects.

use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::emit::{ArkType, Emitter, Superstruct, TypeBox, Valibot, Zod};

/// A target validation library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DialectId {
    Zod,
    Valibot,
    Superstruct,
    ArkType,
    /// Canonical authoring format; generation passes hand-written source through.
    TypeBox,
}

/// How a dialect composes schema expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Constraints and modifiers are methods on the base schema (`z.string().min(1)`).
    ChainedMethod,
    /// Constraints and modifiers wrap the base schema (`v.optional(v.string())`).
    WrappingCall,
    /// Types are written as strings inside a definition object (`"string >= 1"`).
    EmbeddedExpression,
    /// The canonical format itself.
    Passthrough,
}

impl DialectId {
    pub const ALL: [DialectId; 5] = [
        DialectId::Zod,
        DialectId::Valibot,
        DialectId::Superstruct,
        DialectId::ArkType,
        DialectId::TypeBox,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Zod => "zod",
            Self::Valibot => "valibot",
            Self::Superstruct => "superstruct",
            Self::ArkType => "arktype",
            Self::TypeBox => "typebox",
        }
    }

    /// npm package the generated module imports.
    pub fn package(self) -> &'static str {
        match self {
            Self::Zod => "zod",
            Self::Valibot => "valibot",
            Self::Superstruct => "superstruct",
            Self::ArkType => "arktype",
            Self::TypeBox => "@sinclair/typebox",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Self::Zod => Family::ChainedMethod,
            Self::Valibot | Self::Superstruct => Family::WrappingCall,
            Self::ArkType => Family::EmbeddedExpression,
            Self::TypeBox => Family::Passthrough,
        }
    }

    pub fn is_passthrough(self) -> bool {
        self.family() == Family::Passthrough
    }

    /// The emitter for this dialect.
    pub fn emitter(self) -> &'static dyn Emitter {
        match self {
            Self::Zod => &Zod,
            Self::Valibot => &Valibot,
            Self::Superstruct => &Superstruct,
            Self::ArkType => &ArkType,
            Self::TypeBox => &TypeBox,
        }
    }

    /// Comma-separated dialect names, for messages.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DialectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zod" => Ok(Self::Zod),
            "valibot" => Ok(Self::Valibot),
            "superstruct" => Ok(Self::Superstruct),
            "arktype" | "ark-type" | "ark" => Ok(Self::ArkType),
            "typebox" | "type-box" | "@sinclair/typebox" => Ok(Self::TypeBox),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ChainedMethod => "chained-method",
            Self::WrappingCall => "wrapping-call",
            Self::EmbeddedExpression => "embedded-expression",
            Self::Passthrough => "passthrough",
        })
    }
}
