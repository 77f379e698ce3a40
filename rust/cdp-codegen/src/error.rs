use std::io;
use std::path::PathBuf;

use cdp_schema::SchemaError;

/// Error from a generation run.
#[derive(Debug)]
pub enum CodegenError {
    /// The protocol schema could not be loaded.
    Schema(SchemaError),
    /// Writing (or cleaning) the output directory failed.
    Io { path: PathBuf, source: io::Error },
    /// Rendering into the in-memory buffer failed.
    Format(std::fmt::Error),
    /// Refused to clean a directory that must never be wiped.
    UnsafeOutputDir(PathBuf),
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| CodegenError::Io { path, source }
    }
}

impl From<SchemaError> for CodegenError {
    fn from(e: SchemaError) -> Self {
        CodegenError::Schema(e)
    }
}

impl From<std::fmt::Error> for CodegenError {
    fn from(e: std::fmt::Error) -> Self {
        CodegenError::Format(e)
    }
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodegenError::Schema(e) => write!(f, "schema error: {e}"),
            CodegenError::Io { path, source } => {
                write!(f, "i/o error on {}: {source}", path.display())
            }
            CodegenError::Format(e) => write!(f, "render error: {e}"),
            CodegenError::UnsafeOutputDir(path) => {
                write!(f, "refusing to clean output directory {:?}", path.display())
            }
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodegenError::Schema(e) => Some(e),
            CodegenError::Io { source, .. } => Some(source),
            CodegenError::Format(e) => Some(e),
            CodegenError::UnsafeOutputDir(_) => None,
        }
    }
}
