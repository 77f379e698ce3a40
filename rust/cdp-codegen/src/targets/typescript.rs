//! TypeScript code generation for protocol domains.
//!
//! Each domain becomes `<Domain>.ts` containing, in order:
//! - imports (transport handle, `EventEmitter` when the domain has events,
//!   `ProtocolError`, and every domain it depends on)
//! - the `<Domain>Events` interface
//! - the `<Domain>` class
//! - `export namespace <Domain>` with types, `Params`, `Result` and `EventParams`
//!
//! `index.ts` re-exports every domain and declares the façade class.

pub mod client;
pub mod index;
pub mod types;

use std::collections::BTreeSet;

use cdp_schema::Domain;
use tracing::debug;

use crate::code_writer::CodeWriter;
use crate::render::ts_string_literal;
use crate::{CodegenError, CodegenOptions, GeneratedFile, cw_writeln};

const HEADER: &str = "// @generated by cdp-codegen\n\
                      // DO NOT EDIT - regenerate with `cargo xtask codegen --typescript`";

/// Local name the transport handle is imported under.
///
/// The handle type often shares its name with a protocol domain (Electron's
/// `Debugger` and the `Debugger` domain), so it is always aliased to
/// `<type>Handle`, padded with `_` until no generated domain uses the name.
pub fn transport_alias(transport_type: &str, known: &BTreeSet<&str>) -> String {
    let mut alias = format!("{transport_type}Handle");
    while known.contains(alias.as_str()) {
        alias.push('_');
    }
    alias
}

fn write_transport_import<W: std::fmt::Write>(
    w: &mut CodeWriter<W>,
    options: &CodegenOptions,
    alias: &str,
) -> std::fmt::Result {
    cw_writeln!(
        w,
        "import {{ {} as {alias} }} from {};",
        options.transport_type,
        ts_string_literal(&options.transport_module)
    )
}

/// Render every domain file plus `index.ts` and `ProtocolError.ts`.
pub fn generate(
    domains: &[Domain],
    options: &CodegenOptions,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let known: BTreeSet<&str> = domains.iter().map(|d| d.domain.as_str()).collect();

    let mut files = Vec::with_capacity(domains.len() + 2);
    for domain in domains {
        let source = generate_domain(domain, &known, options)?;
        files.push(GeneratedFile::new(format!("{}.ts", domain.domain), &source));
    }

    let mut index = String::new();
    {
        let mut w = CodeWriter::with_indent_spaces(&mut index, 2);
        w.writeln(HEADER)?;
        w.blank_line()?;
        index::write_index(&mut w, domains, options)?;
    }
    files.push(GeneratedFile::new("index.ts", &index));

    let mut error = String::new();
    {
        let mut w = CodeWriter::with_indent_spaces(&mut error, 2);
        w.writeln(HEADER)?;
        w.blank_line()?;
        index::write_error_file(&mut w)?;
    }
    files.push(GeneratedFile::new("ProtocolError.ts", &error));

    Ok(files)
}

/// Render `<Domain>.ts`. `known` holds the names of every domain being
/// generated; dependencies outside it get no import.
pub fn generate_domain(
    domain: &Domain,
    known: &BTreeSet<&str>,
    options: &CodegenOptions,
) -> Result<String, CodegenError> {
    let mut out = String::new();
    let mut w = CodeWriter::with_indent_spaces(&mut out, 2);

    w.writeln(HEADER)?;
    w.blank_line()?;

    let transport = transport_alias(&options.transport_type, known);
    write_transport_import(&mut w, options, &transport)?;
    if domain.has_events() {
        w.writeln("import { EventEmitter } from 'events';")?;
    }
    if !domain.commands.is_empty() {
        w.writeln("import { ProtocolError } from './ProtocolError';")?;
    }
    for dependency in domain.dependencies() {
        if !known.contains(dependency.as_str()) {
            debug!(
                domain = %domain.domain,
                dependency = %dependency,
                "dependency is not being generated, skipping import"
            );
            continue;
        }
        cw_writeln!(
            w,
            "import {{ {dependency} }} from {};",
            ts_string_literal(&format!("./{dependency}"))
        )?;
    }
    w.blank_line()?;

    if domain.has_events() {
        client::write_events_interface(&mut w, domain)?;
        w.blank_line()?;
    }
    client::write_class(&mut w, domain, &transport)?;
    w.blank_line()?;
    types::write_namespace(&mut w, domain)?;

    Ok(out)
}
