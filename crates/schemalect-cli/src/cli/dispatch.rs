//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::generate::GenerateArgs;
use crate::commands::ir::IrArgs;

pub struct GenerateParams {
    pub schema_path: PathBuf,
    pub target: String,
    pub source_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub helper_name: Option<String>,
    pub helper_module: Option<String>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            target: m.get_one::<String>("target").cloned().unwrap_or_default(),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            helper_name: m.get_one::<String>("helper_name").cloned(),
            helper_module: m.get_one::<String>("helper_module").cloned(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            schema_path: p.schema_path,
            target: p.target,
            source_path: p.source_path,
            output: p.output,
            helper_name: p.helper_name,
            helper_module: p.helper_module,
        }
    }
}

pub struct IrParams {
    pub schema_path: PathBuf,
    pub compact: bool,
}

impl IrParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<IrParams> for IrArgs {
    fn from(p: IrParams) -> Self {
        Self {
            schema_path: p.schema_path,
            compact: p.compact,
        }
    }
}

pub struct DialectsParams;

impl DialectsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

/// Positional schema path; clap enforces presence, `-` is the fallback.
fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}
