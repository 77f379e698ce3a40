//! Output directory handling.
//!
//! Generation owns its output directory: [`OutputDir::clean`] wipes and
//! recreates it, so stale files from domains that disappeared from the schema
//! never survive a run. Point it at a directory that holds nothing else.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::{CodegenError, GeneratedFile};

/// A freshly cleaned directory that generated files are written into.
#[derive(Debug)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Remove `root` if it exists and create it again, empty.
    ///
    /// The empty path and the filesystem root are rejected with
    /// [`CodegenError::UnsafeOutputDir`].
    pub fn clean(root: impl Into<PathBuf>) -> Result<Self, CodegenError> {
        let root = root.into();
        let has_normal_component = root.components().any(|c| matches!(c, Component::Normal(_)));
        if !has_normal_component {
            return Err(CodegenError::UnsafeOutputDir(root));
        }

        if root.exists() {
            debug!(path = %root.display(), "removing previous output");
            std::fs::remove_dir_all(&root).map_err(CodegenError::io(&root))?;
        }
        std::fs::create_dir_all(&root).map_err(CodegenError::io(&root))?;

        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write every file, creating parent directories as needed.
    pub fn write_all(&self, files: &[GeneratedFile]) -> Result<(), CodegenError> {
        for file in files {
            let path = self.root.join(&file.path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(CodegenError::io(parent))?;
            }
            std::fs::write(&path, &file.contents).map_err(CodegenError::io(&path))?;
            info!(path = %path.display(), "wrote");
        }
        Ok(())
    }
}
