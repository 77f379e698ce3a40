//! Rust type generation.
//!
//! Renders the data modules of a domain file:
//! - `types`: one struct or alias per named type
//! - `params` / `results`: one struct per command with parameters / return values
//! - `events`: one struct per event with a payload
//!
//! Every struct derives `Facet`; fields use snake_case with a `rename` back to
//! the wire name when the two differ. Fields that close a reference cycle
//! carry `#[facet(recursive_type)]`.

use std::collections::{HashMap, HashSet};
use std::fmt;

use cdp_schema::{Domain, Primitive, Property, ShapeKind, TypeDef, TypeLike, TypeRef, classify};

use crate::code_writer::CodeWriter;
use crate::cw_writeln;
use crate::render::{
    doc_lines, qualified, rust_ident, rust_module_name, rust_type_name, rustdoc_tag,
    warn_unknown_shape,
};

/// What type rendering needs to know beyond the definition itself: the path
/// of the runtime crate, the qualified names (`DOM.Node`) of every named type
/// that renders as a struct, and which named types each one refers to.
///
/// Direct references to records are boxed, which keeps self-referencing and
/// mutually referencing records finitely sized.
#[derive(Debug)]
pub struct TypeIndex {
    records: HashSet<String>,
    references: HashMap<String, Vec<String>>,
    value: String,
}

/// The named type a definition points at, directly or as array items.
fn referenced<'a, T: TypeLike + ?Sized>(def: &'a T, domain: &'a str) -> Option<TypeRef<'a>> {
    match classify(def) {
        ShapeKind::Reference(raw) | ShapeKind::ArrayOfReference(raw) => {
            Some(TypeRef::parse(raw, domain))
        }
        _ => None,
    }
}

impl TypeIndex {
    pub fn new(domains: &[Domain], rt: &str) -> Self {
        let records = domains
            .iter()
            .flat_map(|d| {
                d.types()
                    .iter()
                    .filter(|t| t.properties.is_some())
                    .map(|t| qualified(&d.domain, &t.id))
            })
            .collect();

        let mut references = HashMap::new();
        for domain in domains {
            let name = domain.domain.as_str();
            for def in domain.types() {
                let targets: Vec<String> = match def.properties.as_deref() {
                    Some(properties) => properties
                        .iter()
                        .filter_map(|p| referenced(p, name))
                        .map(|r| qualified(r.domain, r.name))
                        .collect(),
                    None => referenced(def, name)
                        .map(|r| qualified(r.domain, r.name))
                        .into_iter()
                        .collect(),
                };
                references.insert(qualified(name, &def.id), targets);
            }
        }

        Self {
            records,
            references,
            value: format!("{rt}::Value"),
        }
    }

    pub fn is_record(&self, type_ref: &TypeRef<'_>) -> bool {
        self.records
            .contains(&qualified(type_ref.domain, type_ref.name))
    }

    /// Whether a field of the named type `owner` pointing at `target` closes a
    /// cycle back to `owner`.
    pub fn closes_cycle(&self, owner: &str, target: &TypeRef<'_>) -> bool {
        let mut pending = vec![qualified(target.domain, target.name)];
        let mut seen = HashSet::new();
        while let Some(name) = pending.pop() {
            if name == owner {
                return true;
            }
            if let Some(next) = self.references.get(&name) {
                if seen.insert(name) {
                    pending.extend(next.iter().cloned());
                }
            }
        }
        false
    }

    /// Fully qualified dynamic value type. A schema type named `Value` can
    /// never shadow it.
    pub fn value_type(&self) -> &str {
        &self.value
    }
}

/// Path to a named type from inside a domain file's data modules.
fn rust_reference(type_ref: &TypeRef<'_>, domain: &str) -> String {
    let name = rust_type_name(type_ref.name);
    if type_ref.is_local(domain) {
        format!("types::{name}")
    } else {
        format!("{}::types::{name}", rust_module_name(type_ref.domain))
    }
}

pub fn rust_primitive(primitive: Primitive, index: &TypeIndex) -> String {
    match primitive {
        Primitive::Object | Primitive::Any => index.value_type().to_string(),
        Primitive::Array => format!("Vec<{}>", index.value_type()),
        Primitive::String => "String".into(),
        Primitive::Number => "f64".into(),
        Primitive::Boolean => "bool".into(),
    }
}

/// Convert a definition to a Rust type.
pub fn rust_type<T: TypeLike + ?Sized>(
    def: &T,
    domain: &str,
    name: &str,
    index: &TypeIndex,
) -> String {
    render_type(def, domain, name, index, true)
}

fn render_type<T: TypeLike + ?Sized>(
    def: &T,
    domain: &str,
    name: &str,
    index: &TypeIndex,
    box_records: bool,
) -> String {
    match classify(def) {
        ShapeKind::Reference(raw) => {
            let type_ref = TypeRef::parse(raw, domain);
            let path = rust_reference(&type_ref, domain);
            if box_records && index.is_record(&type_ref) {
                format!("Box<{path}>")
            } else {
                path
            }
        }
        ShapeKind::ArrayOf(primitive) => format!("Vec<{}>", rust_primitive(primitive, index)),
        ShapeKind::ArrayOfReference(raw) => {
            format!("Vec<{}>", rust_reference(&TypeRef::parse(raw, domain), domain))
        }
        ShapeKind::Enum(_) => "String".into(),
        ShapeKind::Primitive(primitive) => rust_primitive(primitive, index),
        ShapeKind::Unknown => {
            warn_unknown_shape(domain, name);
            index.value_type().to_string()
        }
    }
}

fn allowed_values<T: TypeLike + ?Sized>(def: &T) -> Option<String> {
    match classify(def) {
        ShapeKind::Enum(values) => Some(format!(
            "Allowed values: {}.",
            values
                .iter()
                .map(|v| format!("`{v}`"))
                .collect::<Vec<_>>()
                .join(", ")
        )),
        _ => None,
    }
}

fn write_rustdoc<W: fmt::Write>(w: &mut CodeWriter<W>, lines: &[String]) -> fmt::Result {
    for line in lines {
        if line.trim().is_empty() {
            w.writeln("///")?;
        } else {
            cw_writeln!(w, "/// {}", line.trim_end())?;
        }
    }
    Ok(())
}

fn write_field<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    property: &Property,
    owner: Option<&str>,
    domain: &str,
    index: &TypeIndex,
) -> fmt::Result {
    let mut doc = doc_lines(
        property.description.as_deref(),
        property.experimental,
        property.deprecated,
        None,
        rustdoc_tag,
    );
    if let Some(values) = allowed_values(property) {
        doc.push(values);
    }
    write_rustdoc(w, &doc)?;

    let ident = rust_ident(&property.name);
    let mut attrs = Vec::new();
    if property.is_optional() {
        attrs.push("default".to_string());
        attrs.push("skip_serializing_if = Option::is_none".to_string());
    }
    if ident != property.name {
        attrs.push(format!("rename = {:?}", property.name));
    }
    if !attrs.is_empty() {
        cw_writeln!(w, "#[facet({})]", attrs.join(", "))?;
    }
    let recursive = owner.zip(referenced(property, domain));
    if recursive.is_some_and(|(owner, target)| index.closes_cycle(owner, &target)) {
        w.writeln("#[facet(recursive_type)]")?;
    }

    let ty = rust_type(property, domain, &property.name, index);
    if property.is_optional() {
        cw_writeln!(w, "pub {ident}: Option<{ty}>,")
    } else {
        cw_writeln!(w, "pub {ident}: {ty},")
    }
}

/// Render a `Facet` struct with one public field per property. `owner` is the
/// qualified name when the struct is a named type; only those can be part of
/// a reference cycle.
pub fn write_struct<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    name: &str,
    owner: Option<&str>,
    doc: &[String],
    properties: &[Property],
    domain: &str,
    index: &TypeIndex,
) -> fmt::Result {
    write_rustdoc(w, doc)?;
    w.writeln("#[derive(Debug, Facet)]")?;
    w.block(&format!("pub struct {}", rust_type_name(name)), |w| {
        for property in properties {
            write_field(w, property, owner, domain, index)?;
        }
        Ok(())
    })
}

/// Render a named type: a struct when it has properties, an alias otherwise.
pub fn write_type_def<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    def: &TypeDef,
    domain: &str,
    index: &TypeIndex,
) -> fmt::Result {
    let mut doc = doc_lines(
        def.description.as_deref(),
        def.experimental,
        def.deprecated,
        None,
        rustdoc_tag,
    );
    match def.properties.as_deref() {
        Some(properties) => {
            let owner = qualified(domain, &def.id);
            write_struct(w, &def.id, Some(&owner), &doc, properties, domain, index)
        }
        None => {
            if let Some(values) = allowed_values(def) {
                doc.push(values);
            }
            write_rustdoc(w, &doc)?;
            // Aliases never box: they name the value itself.
            let ty = render_type(def, domain, &def.id, index, false);
            cw_writeln!(w, "pub type {} = {ty};", rust_type_name(&def.id))
        }
    }
}

fn write_module<W, F>(w: &mut CodeWriter<W>, name: &str, doc: &str, body: F) -> fmt::Result
where
    W: fmt::Write,
    F: FnOnce(&mut CodeWriter<W>) -> fmt::Result,
{
    cw_writeln!(w, "/// {doc}")?;
    w.block(&format!("pub mod {name}"), |w| {
        w.writeln("use super::*;")?;
        w.writeln("use facet::Facet;")?;
        w.blank_line()?;
        body(w)
    })?;
    w.blank_line()
}

/// Render the `types`, `params`, `results` and `events` modules of a domain.
/// Modules with nothing to hold are left out, except `types`.
pub fn write_data_modules<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    domain: &Domain,
    index: &TypeIndex,
) -> fmt::Result {
    let name = domain.domain.as_str();

    write_module(w, "types", &format!("Types defined by the `{name}` domain."), |w| {
        for def in domain.types() {
            write_type_def(w, def, name, index)?;
            w.blank_line()?;
        }
        Ok(())
    })?;

    if domain.commands.iter().any(|c| c.has_params()) {
        write_module(w, "params", "Command parameters.", |w| {
            for command in domain.commands.iter().filter(|c| c.has_params()) {
                let doc = vec![format!("Parameters of `{}`.", qualified(name, &command.name))];
                write_struct(w, &command.name, None, &doc, command.params(), name, index)?;
                w.blank_line()?;
            }
            Ok(())
        })?;
    }

    if domain.commands.iter().any(|c| c.has_returns()) {
        write_module(w, "results", "Command results.", |w| {
            for command in domain.commands.iter().filter(|c| c.has_returns()) {
                let doc = vec![format!("Result of `{}`.", qualified(name, &command.name))];
                write_struct(w, &command.name, None, &doc, command.returns(), name, index)?;
                w.blank_line()?;
            }
            Ok(())
        })?;
    }

    if domain.events().iter().any(|e| !e.is_signal_only()) {
        write_module(w, "events", "Event payloads.", |w| {
            for event in domain.events().iter().filter(|e| !e.is_signal_only()) {
                let doc = vec![format!("Payload of `{}`.", qualified(name, &event.name))];
                write_struct(w, &event.name, None, &doc, event.params(), name, index)?;
                w.blank_line()?;
            }
            Ok(())
        })?;
    }

    Ok(())
}
