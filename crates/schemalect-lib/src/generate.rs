//! Module assembly.
//!
//! Resolves the dialect's emitter and produces the complete module text:
//!
//! ```text
//! <dialect import line>
//! <inference helper import line>
//!
//! export const schema = <root expression>;
//! export type Schema = <helper><typeof schema>;
//! ```

use schemalect_core::ObjectNode;

use crate::{Config, DialectId, Result};

/// Generate a schema module for `dialect` with the default config.
///
/// `raw_source` is the hand-written canonical module; it is returned unchanged
/// when `dialect` is the canonical format and ignored otherwise.
pub fn generate(root: &ObjectNode, dialect: DialectId, raw_source: Option<&str>) -> Result<String> {
    generate_with_config(root, dialect, raw_source, &Config::default())
}

/// Generate a schema module for a dialect given by name.
pub fn generate_for(root: &ObjectNode, target: &str, raw_source: Option<&str>) -> Result<String> {
    let dialect: DialectId = target.parse()?;
    generate(root, dialect, raw_source)
}

/// Generate a schema module for `dialect` with a custom config.
pub fn generate_with_config(
    root: &ObjectNode,
    dialect: DialectId,
    raw_source: Option<&str>,
    config: &Config,
) -> Result<String> {
    let emitter = dialect.emitter();

    if let Some(raw) = raw_source {
        if let Some(output) = emitter.transform(root, raw) {
            tracing::debug!(%dialect, bytes = output.len(), "passing canonical source through");
            return Ok(output);
        }
    }

    tracing::debug!(%dialect, properties = root.len(), "generating schema module");
    let header = emitter.header(config);
    let body = emitter.emit_root(root, config)?;
    Ok(format!("{header}\n{body}"))
}
