use std::io;
use std::path::PathBuf;

/// Error loading a protocol document.
#[derive(Debug)]
pub enum SchemaError {
    /// The schema file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The input is not a protocol document.
    Parse { origin: String, message: String },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            SchemaError::Parse { origin, message } => {
                write!(f, "failed to parse protocol schema {origin}: {message}")
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::Io { source, .. } => Some(source),
            SchemaError::Parse { .. } => None,
        }
    }
}
