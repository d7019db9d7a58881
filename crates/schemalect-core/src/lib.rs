#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for schemalect.
//!
//! Three layers:
//! - **IR** (`ir`): the immutable schema tree every dialect emitter walks
//! - **Classification** (`classify`): derived properties such as "is this union an enum"
//! - **Loading** (`canonical`): builds the IR from the canonical JSON Schema document

pub mod canonical;
pub mod classify;
pub mod ir;
pub mod utils;


pub use canonical::{LoadError, from_value, parse_canonical};
pub use classify::{EnumLiterals, LiteralKind, is_enum};
pub use ir::{LiteralValue, ObjectNode, SchemaNode};
