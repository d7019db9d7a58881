use std::path::PathBuf;

use schemalect_core::{ObjectNode, SchemaNode, parse_canonical};

use crate::input::{fail, read_text, write_text};

pub struct IrArgs {
    pub schema_path: PathBuf,
    pub compact: bool,
}

pub fn run(args: IrArgs) {
    let text = read_text(&args.schema_path).unwrap_or_else(|e| fail(e));
    let root = parse_canonical(&text).unwrap_or_else(|e| fail(e));
    let output = render_ir(root, args.compact).unwrap_or_else(|e| fail(e));
    write_text(None, &output).unwrap_or_else(|e| fail(e));
}

pub fn render_ir(root: ObjectNode, compact: bool) -> serde_json::Result<String> {
    let node = SchemaNode::Object(root);
    let mut output = if compact {
        serde_json::to_string(&node)?
    } else {
        serde_json::to_string_pretty(&node)?
    };
    output.push('\n');
    Ok(output)
}
