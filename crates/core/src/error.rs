//! Model loading errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why an OBJ file could not become a [`crate::Model`].
///
/// None of these are fatal to the renderer: [`crate::load_or_default`]
/// logs them and falls back to the built-in cube.
#[derive(Debug)]
pub enum ModelError {
    /// The path could not be opened or read.
    FileOpen { path: PathBuf, source: io::Error },
    /// The file parsed but contained no `v` records.
    EmptyModel { path: PathBuf },
    /// A record had a non-numeric coordinate or vertex reference.
    Parse {
        line_no: usize,
        line: String,
        reason: &'static str,
    },
}

impl ModelError {
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::FileOpen { .. } => "file_open",
            ModelError::EmptyModel { .. } => "empty_model",
            ModelError::Parse { .. } => "parse",
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::FileOpen { path, source } => {
                write!(f, "could not open OBJ file {}: {}", path.display(), source)
            }
            ModelError::EmptyModel { path } => {
                write!(f, "no vertices found in OBJ file {}", path.display())
            }
            ModelError::Parse {
                line_no,
                line,
                reason,
            } => write!(f, "line {}: {}: {:?}", line_no, reason, line),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::FileOpen { source, .. } => Some(source),
            _ => None,
        }
    }
}
