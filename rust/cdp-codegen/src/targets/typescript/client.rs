//! TypeScript domain client generation.
//!
//! Generates the `<Domain>Events` listener interface and the `<Domain>` class
//! that wraps a debugger handle: one promise-returning method per command,
//! `on`/`once` overloads per event.

use std::fmt;

use cdp_schema::{Command, Domain, Event};

use super::types::write_jsdoc;
use crate::code_writer::CodeWriter;
use crate::cw_writeln;
use crate::render::{doc_lines, jsdoc_tag, qualified, ts_string_literal};

/// Listener signature for an event: payload events receive their params,
/// signal-only events receive nothing.
fn listener_type(domain: &str, event: &Event) -> String {
    if event.is_signal_only() {
        "() => void".into()
    } else {
        format!("(params: {domain}.EventParams.{}) => void", event.name)
    }
}

fn events_interface_name(domain: &Domain) -> String {
    format!("{}Events", domain.domain)
}

/// `export interface <Domain>Events` with an `on` and a `once` overload per event.
pub fn write_events_interface<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    domain: &Domain,
) -> fmt::Result {
    let name = domain.domain.as_str();
    w.block(&format!("export interface {}", events_interface_name(domain)), |w| {
        for method in ["on", "once"] {
            for event in domain.events() {
                let doc = doc_lines(
                    event.description.as_deref(),
                    event.experimental,
                    event.deprecated,
                    None,
                    jsdoc_tag,
                );
                write_jsdoc(w, &doc)?;
                cw_writeln!(
                    w,
                    "{method}(event: {}, listener: {}): void;",
                    ts_string_literal(&event.name),
                    listener_type(name, event)
                )?;
            }
        }
        Ok(())
    })
}

/// `export class <Domain>`: construction check, message routing, event
/// subscription and one method per command. `transport` is the local name
/// of the debugger handle type.
pub fn write_class<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    domain: &Domain,
    transport: &str,
) -> fmt::Result {
    let name = domain.domain.as_str();
    let has_events = domain.has_events();

    let doc = doc_lines(
        domain.description.as_deref(),
        domain.experimental,
        domain.deprecated,
        None,
        jsdoc_tag,
    );
    write_jsdoc(w, &doc)?;

    let header = if has_events {
        format!("export class {name} implements {}", events_interface_name(domain))
    } else {
        format!("export class {name}")
    };

    w.block(&header, |w| {
        if has_events {
            w.writeln("private readonly events = new EventEmitter();")?;
            w.blank_line()?;
        }

        write_constructor(w, name, has_events, transport)?;

        if has_events {
            w.blank_line()?;
            write_subscription(w, domain, "on")?;
            w.blank_line()?;
            write_subscription(w, domain, "once")?;
        }

        for command in &domain.commands {
            w.blank_line()?;
            write_command(w, name, command)?;
        }

        if !domain.commands.is_empty() {
            w.blank_line()?;
            write_assert_error(w)?;
        }
        Ok(())
    })
}

fn write_constructor<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    name: &str,
    has_events: bool,
    transport: &str,
) -> fmt::Result {
    w.block(
        &format!("constructor(private readonly dbg: {transport})"),
        |w| {
            w.block("if (!dbg.isAttached())", |w| {
                cw_writeln!(
                    w,
                    "throw new Error({});",
                    ts_string_literal(&format!(
                        "Cannot create {name} domain: debugger is not attached"
                    ))
                )
            })?;

            if !has_events {
                return Ok(());
            }

            w.blank_line()?;
            w.block_with(
                "dbg.on('message', (_event: unknown, method: string, params: unknown) => {",
                "});",
                |w| {
                    w.writeln("const separator = method.indexOf('.');")?;
                    w.block(
                        "if (separator <= 0 || separator === method.length - 1 || method.indexOf('.', separator + 1) !== -1)",
                        |w| w.writeln("return;"),
                    )?;
                    w.block(
                        &format!(
                            "if (method.slice(0, separator) === {})",
                            ts_string_literal(name)
                        ),
                        |w| w.writeln("this.events.emit(method.slice(separator + 1), params);"),
                    )
                },
            )
        },
    )
}

/// `on` / `once`: the typed overloads come from the events interface, the
/// implementation signature accepts any listener.
fn write_subscription<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    domain: &Domain,
    method: &str,
) -> fmt::Result {
    for event in domain.events() {
        cw_writeln!(
            w,
            "{method}(event: {}, listener: {}): void;",
            ts_string_literal(&event.name),
            listener_type(&domain.domain, event)
        )?;
    }
    w.block(
        &format!("{method}(event: string, listener: (...args: any[]) => void): void"),
        |w| cw_writeln!(w, "this.events.{method}(event, listener);"),
    )
}

fn write_command<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    domain: &str,
    command: &Command,
) -> fmt::Result {
    let method = qualified(domain, &command.name);
    let result_type = if command.has_returns() {
        format!("{domain}.Result.{}", command.name)
    } else {
        "void".into()
    };
    let (argument, sent) = if !command.has_params() {
        (String::new(), "{}")
    } else if command.has_mandatory_params() {
        (format!("params: {domain}.Params.{}", command.name), "params")
    } else {
        (format!("params: {domain}.Params.{} = {{}}", command.name), "params")
    };

    let doc = doc_lines(
        command.description.as_deref(),
        command.experimental,
        command.deprecated,
        None,
        jsdoc_tag,
    );
    write_jsdoc(w, &doc)?;

    w.block(
        &format!("{}({argument}): Promise<{result_type}>", command.name),
        |w| {
            w.block_with(
                &format!("return new Promise<{result_type}>((resolve, reject) => {{"),
                "});",
                |w| {
                    w.block_with(
                        &format!(
                            "this.dbg.sendCommand({}, {sent}, (error: any, result: any) => {{",
                            ts_string_literal(&method)
                        ),
                        "});",
                        |w| {
                            w.writeln("try {")?;
                            {
                                let _indent = w.indent();
                                cw_writeln!(
                                    w,
                                    "this.assertError(error, {});",
                                    ts_string_literal(&method)
                                )?;
                            }
                            w.writeln("} catch (e) {")?;
                            {
                                let _indent = w.indent();
                                w.writeln("reject(e);")?;
                                w.writeln("return;")?;
                            }
                            w.writeln("}")?;
                            if command.has_returns() {
                                cw_writeln!(w, "resolve(result as {result_type});")
                            } else {
                                w.writeln("resolve();")
                            }
                        },
                    )
                },
            )
        },
    )
}

/// A reply is an error when it carries both a message and a numeric code.
fn write_assert_error<W: fmt::Write>(w: &mut CodeWriter<W>) -> fmt::Result {
    w.block(
        "private assertError(error: any, method: string): void",
        |w| {
            w.block(
                "if (error && error.message !== undefined && typeof error.code === 'number')",
                |w| w.writeln("throw new ProtocolError(error.message, error.code, method);"),
            )
        },
    )
}
