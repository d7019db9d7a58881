use std::path::PathBuf;

use schemalect_core::parse_canonical;
use schemalect_lib::{Config, DialectId, generate_with_config};

use crate::input::{fail, read_text, write_text};

pub struct GenerateArgs {
    pub schema_path: PathBuf,
    pub target: String,
    pub source_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub helper_name: Option<String>,
    pub helper_module: Option<String>,
}

pub fn run(args: GenerateArgs) {
    let dialect: DialectId = args.target.parse().unwrap_or_else(|e| fail(e));

    let text = read_text(&args.schema_path).unwrap_or_else(|e| fail(e));
    let root = parse_canonical(&text).unwrap_or_else(|e| fail(e));

    let raw_source = match &args.source_path {
        Some(path) if dialect.is_passthrough() => {
            Some(read_text(path).unwrap_or_else(|e| fail(e)))
        }
        Some(path) => {
            tracing::info!(%dialect, path = %path.display(), "ignoring --source for derived dialect");
            None
        }
        None => None,
    };

    let config = build_config(&args);
    let module = generate_with_config(&root, dialect, raw_source.as_deref(), &config)
        .unwrap_or_else(|e| fail(e));

    write_text(args.output.as_deref(), &module).unwrap_or_else(|e| fail(e));
}

pub fn build_config(args: &GenerateArgs) -> Config {
    let mut config = Config::new();
    if let Some(name) = &args.helper_name {
        config = config.helper_name(name.clone());
    }
    if let Some(module) = &args.helper_module {
        config = config.helper_module(module.clone());
    }
    config
}
