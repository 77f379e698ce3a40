use std::path::Path;

use tracing::debug;

use crate::{Domain, ProtocolDocument, SchemaError};

/// Parse a protocol document.
///
/// Accepts either the usual `{ "version": ..., "domains": [...] }` object or a
/// bare array of domains. `origin` only shows up in error messages.
pub fn parse_str(json: &str, origin: &str) -> Result<ProtocolDocument, SchemaError> {
    let parse_error = |message: String| SchemaError::Parse {
        origin: origin.to_string(),
        message,
    };

    if json.trim_start().starts_with('[') {
        let domains: Vec<Domain> =
            facet_json::from_str(json).map_err(|e| parse_error(e.to_string()))?;
        Ok(ProtocolDocument {
            version: None,
            domains,
        })
    } else {
        facet_json::from_str(json).map_err(|e| parse_error(e.to_string()))
    }
}

/// Read and parse one schema file.
pub fn load_file(path: &Path) -> Result<ProtocolDocument, SchemaError> {
    let json = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_str(&json, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        domains = document.domains.len(),
        "loaded protocol schema"
    );
    Ok(document)
}

/// Read several schema files and merge their domains in argument order.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<ProtocolDocument, SchemaError> {
    let mut merged = ProtocolDocument::default();
    for path in paths {
        merged.merge(load_file(path.as_ref())?);
    }
    Ok(merged)
}
