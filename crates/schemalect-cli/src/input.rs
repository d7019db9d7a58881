//! Reading inputs and writing the generated module.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to write stdout: {0}")]
    Stdout(io::Error),
}

/// Read a file, or stdin when the path is `-`.
pub fn read_text(path: &Path) -> Result<String, InputError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write to a file, or stdout when no path is given.
pub fn write_text(path: Option<&Path>, text: &str) -> Result<(), InputError> {
    match path {
        Some(path) => fs::write(path, text).map_err(|source| InputError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .write_all(text.as_bytes())
            .map_err(InputError::Stdout),
    }
}

/// Print `error: <message>` and exit with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}
