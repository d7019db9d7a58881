//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Canonical schema document (positional), `-` for stdin.
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Canonical JSON Schema file, or - for stdin")
}

/// Target dialect (-t/--target).
pub fn target_arg() -> Arg {
    Arg::new("target")
        .short('t')
        .long("target")
        .value_name("DIALECT")
        .required(true)
        .help("Target validation library (see `schemalect dialects`)")
}

/// Hand-written canonical module (-s/--source).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .short('s')
        .long("source")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Hand-written canonical module, emitted verbatim for the canonical dialect")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the module to FILE instead of stdout")
}

/// Inference helper name (--helper-name).
pub fn helper_name_arg() -> Arg {
    Arg::new("helper_name")
        .long("helper-name")
        .value_name("NAME")
        .help("Type-inference helper imported by the generated module")
}

/// Inference helper module (--helper-module).
pub fn helper_module_arg() -> Arg {
    Arg::new("helper_module")
        .long("helper-module")
        .value_name("PATH")
        .help("Module the type-inference helper is imported from")
}

/// Single-line JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (overridden by SCHEMALECT_LOG)")
}
