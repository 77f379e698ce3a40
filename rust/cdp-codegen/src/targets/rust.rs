//! Rust code generation for protocol domains.
//!
//! Each domain becomes `<domain>.rs`, a module of the generated tree:
//!
//! ```text
//! mod.rs         pub mod error; pub mod page; ...; pub struct Protocol<T>
//! error.rs       re-exports of the runtime's error types
//! page.rs        types / params / results / events modules, Page<T> client
//! ```
//!
//! Generated code depends on `facet` and on the runtime crate named by
//! [`CodegenOptions::runtime_crate`].

pub mod client;
pub mod facade;
pub mod types;

use std::collections::BTreeSet;

use cdp_schema::Domain;
use tracing::debug;

use crate::code_writer::CodeWriter;
use crate::render::{doc_lines, rust_module_name, rustdoc_tag};
use crate::{CodegenError, CodegenOptions, GeneratedFile, cw_writeln};

use self::types::TypeIndex;

const HEADER: &str =
    "// @generated by cdp-codegen\n// DO NOT EDIT - regenerate with `cargo xtask codegen --rust`";

/// Render every domain module plus `mod.rs` and `error.rs`.
pub fn generate(
    domains: &[Domain],
    options: &CodegenOptions,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let known: BTreeSet<&str> = domains.iter().map(|d| d.domain.as_str()).collect();
    let index = TypeIndex::new(domains, &options.runtime_crate);

    let mut files = Vec::with_capacity(domains.len() + 2);
    for domain in domains {
        let source = generate_domain(domain, &known, &index, options)?;
        files.push(GeneratedFile::new(
            format!("{}.rs", rust_module_name(&domain.domain)),
            &source,
        ));
    }

    let mut root = String::new();
    {
        let mut w = CodeWriter::with_indent_spaces(&mut root, 4);
        w.writeln(HEADER)?;
        w.blank_line()?;
        w.writeln("//! Typed clients for every protocol domain.")?;
        w.blank_line()?;
        w.writeln("pub mod error;")?;
        for domain in domains {
            cw_writeln!(w, "pub mod {};", rust_module_name(&domain.domain))?;
        }
        w.blank_line()?;
        w.writeln(&facade::generate_facade(
            domains,
            &options.facade_name,
            &options.runtime_crate,
        ))?;
    }
    files.push(GeneratedFile::new("mod.rs", &root));

    let error = format!(
        "{HEADER}\n\n{}",
        facade::generate_error_file(&options.runtime_crate)
    );
    files.push(GeneratedFile::new("error.rs", &error));

    Ok(files)
}

/// Render `<domain>.rs`. Dependencies outside `known` get no import.
pub fn generate_domain(
    domain: &Domain,
    known: &BTreeSet<&str>,
    index: &TypeIndex,
    options: &CodegenOptions,
) -> Result<String, CodegenError> {
    let rt = options.runtime_crate.as_str();
    let mut out = String::new();
    let mut w = CodeWriter::with_indent_spaces(&mut out, 4);

    w.writeln(HEADER)?;
    w.blank_line()?;

    let doc = doc_lines(
        domain.description.as_deref(),
        domain.experimental,
        domain.deprecated,
        None,
        rustdoc_tag,
    );
    if doc.is_empty() {
        cw_writeln!(w, "//! The `{}` domain.", domain.domain)?;
    } else {
        for line in &doc {
            if line.trim().is_empty() {
                w.writeln("//!")?;
            } else {
                cw_writeln!(w, "//! {line}")?;
            }
        }
    }
    w.blank_line()?;
    w.writeln("#![allow(clippy::all, unused_imports)]")?;
    w.blank_line()?;

    let imports: Vec<String> = domain
        .dependencies()
        .into_iter()
        .filter(|dependency| {
            let keep = known.contains(dependency.as_str());
            if !keep {
                debug!(
                    domain = %domain.domain,
                    dependency = %dependency,
                    "dependency is not being generated, skipping import"
                );
            }
            keep
        })
        .map(|dependency| rust_module_name(&dependency))
        .collect();
    match imports.as_slice() {
        [] => {}
        [single] => cw_writeln!(w, "use super::{single};")?,
        many => cw_writeln!(w, "use super::{{{}}};", many.join(", "))?,
    }
    w.blank_line()?;

    types::write_data_modules(&mut w, domain, index)?;
    w.writeln(&client::generate_client(domain, rt))?;

    Ok(out)
}
