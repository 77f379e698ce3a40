#![deny(unsafe_code)]

//! Code generation for DevTools protocol client stubs.
//!
//! The input is a protocol document (see `cdp-schema`). The output is one
//! source file per domain, an aggregator exposing every domain through a
//! façade, and a fixed error file:
//!
//! | Target       | Domain file       | Aggregator | Error file         |
//! |--------------|-------------------|------------|--------------------|
//! | TypeScript   | `Page.ts`         | `index.ts` | `ProtocolError.ts` |
//! | Rust         | `page.rs`         | `mod.rs`   | `error.rs`         |
//!
//! Generated TypeScript wraps a debugger handle (`isAttached`, `attach`,
//! `sendCommand`, `on('message')`). Generated Rust wraps any
//! `cdp_session::Transport`.
//!
//! # The Pipeline
//!
//! ```text
//! protocol.json  →  ProtocolDocument  →  cdp-codegen  →  Page.ts, Runtime.ts, ..., index.ts
//!                    (cdp-schema)         (per domain)
//! ```
//!
//! Each domain renders independently from shared, read-only schema data.
//! Every file goes through [`render::tidy`] before it is returned.
//!
//! # Usage
//!
//! ```ignore
//! let document = cdp_schema::load_files(&["browser_protocol.json", "js_protocol.json"])?;
//! let files = cdp_codegen::generate(&document, &CodegenOptions::default())?;
//! cdp_codegen::OutputDir::clean("generated/typescript")?.write_all(&files)?;
//! ```

pub mod code_writer;
mod error;
mod output;
pub mod render;
pub mod targets;

use cdp_schema::{Domain, Filter, ProtocolDocument};
use tracing::info;

pub use error::CodegenError;
pub use output::OutputDir;

/// Language to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    TypeScript,
    Rust,
}

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    pub target: Target,

    /// Name of the aggregator class / struct.
    pub facade_name: String,

    /// Module the TypeScript transport handle type is imported from.
    pub transport_module: String,

    /// Name of the TypeScript transport handle type.
    pub transport_type: String,

    /// Path of the session runtime crate used by generated Rust.
    pub runtime_crate: String,

    /// Experimental / deprecated members to leave out.
    pub filter: Filter,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            target: Target::TypeScript,
            facade_name: "Protocol".to_string(),
            transport_module: "electron".to_string(),
            transport_type: "Debugger".to_string(),
            runtime_crate: "cdp_session".to_string(),
            filter: Filter::default(),
        }
    }
}

/// A rendered file, with its path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, contents: &str) -> Self {
        Self {
            path: path.into(),
            contents: render::tidy(contents),
        }
    }
}

/// Render every domain of `document`, the aggregator, and the error file.
pub fn generate(
    document: &ProtocolDocument,
    options: &CodegenOptions,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let domains: Vec<Domain> = document
        .domains
        .iter()
        .map(|d| d.filtered(&options.filter))
        .collect();

    let files = match options.target {
        Target::TypeScript => targets::typescript::generate(&domains, options)?,
        Target::Rust => targets::rust::generate(&domains, options)?,
    };

    info!(
        language = ?options.target,
        domains = domains.len(),
        files = files.len(),
        "rendered protocol stubs"
    );
    Ok(files)
}
