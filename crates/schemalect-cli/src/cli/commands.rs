//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("schemalect")
        .about("Generate validation-library schema modules from a canonical JSON Schema")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(ir_command())
        .subcommand(dialects_command())
}

/// Generate a schema module for one dialect.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate a schema module for a target dialect")
        .after_help(
            r#"EXAMPLES:
  schemalect generate attributes.json -t zod
  schemalect generate attributes.json -t arktype -o schema.ts
  schemalect generate attributes.json -t typebox -s schema.ts
  cat attributes.json | schemalect generate - -t valibot"#,
        )
        .arg(schema_path_arg())
        .arg(target_arg())
        .arg(source_path_arg())
        .arg(output_arg())
        .arg(helper_name_arg())
        .arg(helper_module_arg())
}

/// Dump the loaded IR.
pub fn ir_command() -> Command {
    Command::new("ir")
        .about("Show the schema tree loaded from a canonical document")
        .arg(schema_path_arg())
        .arg(compact_arg())
}

/// List supported dialects.
pub fn dialects_command() -> Command {
    Command::new("dialects").about("List supported target dialects")
}
