//! Schema module generation.
//!
//! Re-derives a behavior's canonical attribute schema as TypeScript source for
//! the validation library a consuming project uses:
//! - `dialect` - supported target libraries and their emission families
//! - `emit` - one emitter per dialect, plus the shared emitter trait
//! - `generate` - assembles header, schema export and type export
//!
//! # Example
//!
//! ```
//! use schemalect_core::{ObjectNode, SchemaNode};
//! use schemalect_lib::{DialectId, generate};
//!
//! let root = ObjectNode::new().property("delay", SchemaNode::optional(SchemaNode::number()));
//! let module = generate(&root, DialectId::Valibot, None).unwrap();
//! assert!(module.contains(r#""delay": v.optional(v.number()),"#));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod dialect;
pub mod emit;
pub mod generate;

#[cfg(test)]
mod dialect_tests;
#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use dialect::{DialectId, Family};
pub use emit::{Construct, Emitter, PropertyPath, Scope};
pub use generate::{generate, generate_for, generate_with_config};

/// Errors that can occur while generating a schema module.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Requested target is not one of the supported dialects.
    #[error("unknown dialect `{0}` (expected one of: {list})", list = DialectId::supported_list())]
    UnknownDialect(String),

    /// The dialect has no rendering for a node or constraint.
    #[error("{dialect} cannot represent {construct} at `{path}`")]
    UnsupportedNode {
        dialect: DialectId,
        construct: Construct,
        path: PropertyPath,
    },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
