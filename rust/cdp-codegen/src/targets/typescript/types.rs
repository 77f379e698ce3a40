//! TypeScript type generation.
//!
//! This module handles:
//! - Converting schema definitions to TypeScript type expressions
//! - Rendering named types as interfaces or aliases
//! - Rendering the per-domain namespace with its `Params`, `Result` and
//!   `EventParams` sub-namespaces

use std::fmt;

use cdp_schema::{
    Command, Domain, Event, Primitive, Property, ShapeKind, TypeDef, TypeLike, TypeRef, classify,
};

use crate::code_writer::CodeWriter;
use crate::cw_writeln;
use crate::render::{
    doc_lines, format_jsdoc, jsdoc_tag, qualified, ts_string_literal, warn_unknown_shape,
};

/// Convert a definition to a TypeScript type expression.
///
/// `name` is only used to report definitions that could not be classified.
pub fn ts_type<T: TypeLike + ?Sized>(def: &T, domain: &str, name: &str) -> String {
    match classify(def) {
        ShapeKind::Reference(raw) => ts_reference(raw, domain),
        ShapeKind::ArrayOf(primitive) => format!("{}[]", ts_primitive(primitive)),
        ShapeKind::ArrayOfReference(raw) => format!("{}[]", ts_reference(raw, domain)),
        ShapeKind::Enum([]) => "never".into(),
        ShapeKind::Enum(values) => values
            .iter()
            .map(|v| ts_string_literal(v))
            .collect::<Vec<_>>()
            .join(" | "),
        ShapeKind::Primitive(primitive) => ts_primitive(primitive).into(),
        ShapeKind::Unknown => {
            warn_unknown_shape(domain, name);
            "unknown".into()
        }
    }
}

/// `FrameId` inside `Page` becomes `Page.FrameId`; qualified refs stay as written.
pub fn ts_reference(raw: &str, domain: &str) -> String {
    let type_ref = TypeRef::parse(raw, domain);
    qualified(type_ref.domain, type_ref.name)
}

pub fn ts_primitive(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Object => "object",
        Primitive::Array => "any[]",
        Primitive::String => "string",
        Primitive::Number => "number",
        Primitive::Boolean => "boolean",
        Primitive::Any => "any",
    }
}

pub fn write_jsdoc<W: fmt::Write>(w: &mut CodeWriter<W>, lines: &[String]) -> fmt::Result {
    let doc = format_jsdoc(lines);
    if doc.is_empty() {
        Ok(())
    } else {
        w.writeln(&doc)
    }
}

/// Render a structural record as an interface, one documented member per property.
pub fn write_record<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    name: &str,
    doc: &[String],
    properties: &[Property],
    domain: &str,
) -> fmt::Result {
    write_jsdoc(w, doc)?;
    w.block(&format!("export interface {name}"), |w| {
        for property in properties {
            let doc = doc_lines(
                property.description.as_deref(),
                property.experimental,
                property.deprecated,
                property.optional,
                jsdoc_tag,
            );
            write_jsdoc(w, &doc)?;
            let marker = if property.is_optional() { "?" } else { "" };
            cw_writeln!(
                w,
                "{}{marker}: {};",
                property.name,
                ts_type(property, domain, &property.name)
            )?;
        }
        Ok(())
    })
}

/// Render a named type: a record when it has properties, an alias otherwise.
pub fn write_type_def<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    def: &TypeDef,
    domain: &str,
) -> fmt::Result {
    let doc = doc_lines(
        def.description.as_deref(),
        def.experimental,
        def.deprecated,
        None,
        jsdoc_tag,
    );
    match def.properties.as_deref() {
        Some(properties) => write_record(w, &def.id, &doc, properties, domain),
        None => {
            write_jsdoc(w, &doc)?;
            cw_writeln!(
                w,
                "export type {} = {};",
                def.id,
                ts_type(def, domain, &def.id)
            )
        }
    }
}

/// Render `export namespace <Domain>` with every type of the domain plus the
/// parameter, result and event payload shapes.
pub fn write_namespace<W: fmt::Write>(w: &mut CodeWriter<W>, domain: &Domain) -> fmt::Result {
    let name = domain.domain.as_str();
    let doc = doc_lines(
        domain.description.as_deref(),
        domain.experimental,
        domain.deprecated,
        None,
        jsdoc_tag,
    );
    write_jsdoc(w, &doc)?;

    w.block(&format!("export namespace {name}"), |w| {
        for def in domain.types() {
            write_type_def(w, def, name)?;
            w.blank_line()?;
        }

        let with_params: Vec<&Command> =
            domain.commands.iter().filter(|c| c.has_params()).collect();
        if !with_params.is_empty() {
            w.block("export namespace Params", |w| {
                for command in with_params {
                    let doc = vec![format!("Parameters of `{}`.", qualified(name, &command.name))];
                    write_record(w, &command.name, &doc, command.params(), name)?;
                    w.blank_line()?;
                }
                Ok(())
            })?;
            w.blank_line()?;
        }

        let with_returns: Vec<&Command> =
            domain.commands.iter().filter(|c| c.has_returns()).collect();
        if !with_returns.is_empty() {
            w.block("export namespace Result", |w| {
                for command in with_returns {
                    let doc = vec![format!("Result of `{}`.", qualified(name, &command.name))];
                    write_record(w, &command.name, &doc, command.returns(), name)?;
                    w.blank_line()?;
                }
                Ok(())
            })?;
            w.blank_line()?;
        }

        let with_payload: Vec<&Event> = domain
            .events()
            .iter()
            .filter(|e| !e.is_signal_only())
            .collect();
        if !with_payload.is_empty() {
            w.block("export namespace EventParams", |w| {
                for event in with_payload {
                    let doc = vec![format!("Payload of `{}`.", qualified(name, &event.name))];
                    write_record(w, &event.name, &doc, event.params(), name)?;
                    w.blank_line()?;
                }
                Ok(())
            })?;
        }

        Ok(())
    })
}
