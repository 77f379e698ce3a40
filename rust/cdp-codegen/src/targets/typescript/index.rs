//! TypeScript aggregator (`index.ts`) and error file (`ProtocolError.ts`).

use std::collections::BTreeSet;
use std::fmt;

use cdp_schema::Domain;

use super::transport_alias;
use crate::code_writer::CodeWriter;
use crate::render::ts_string_literal;
use crate::{CodegenOptions, cw_writeln};

/// Re-export every domain and the error type, then declare the façade class
/// with one lazily constructed accessor per domain.
pub fn write_index<W: fmt::Write>(
    w: &mut CodeWriter<W>,
    domains: &[Domain],
    options: &CodegenOptions,
) -> fmt::Result {
    let known: BTreeSet<&str> = domains.iter().map(|d| d.domain.as_str()).collect();
    let transport = transport_alias(&options.transport_type, &known);

    cw_writeln!(
        w,
        "import {{ {} as {transport} }} from {};",
        options.transport_type,
        ts_string_literal(&options.transport_module)
    )?;
    for domain in domains {
        cw_writeln!(
            w,
            "import {{ {0} }} from {1};",
            domain.domain,
            ts_string_literal(&format!("./{}", domain.domain))
        )?;
    }
    w.blank_line()?;

    for domain in domains {
        cw_writeln!(
            w,
            "export * from {};",
            ts_string_literal(&format!("./{}", domain.domain))
        )?;
    }
    w.writeln("export { ProtocolError } from './ProtocolError';")?;
    w.blank_line()?;

    w.writeln("/** Entry point exposing every protocol domain over one debugger handle. */")?;
    w.block(&format!("export class {}", options.facade_name), |w| {
        for domain in domains {
            cw_writeln!(w, "private _{0}?: {0};", domain.domain)?;
        }
        if !domains.is_empty() {
            w.blank_line()?;
        }

        w.block(
            &format!("constructor(private readonly dbg: {transport})"),
            |w| {
                w.block("if (!dbg.isAttached())", |w| w.writeln("dbg.attach();"))
            },
        )?;

        for domain in domains {
            w.blank_line()?;
            w.block(&format!("get {0}(): {0}", domain.domain), |w| {
                w.block(&format!("if (this._{} === undefined)", domain.domain), |w| {
                    cw_writeln!(w, "this._{0} = new {0}(this.dbg);", domain.domain)
                })?;
                cw_writeln!(w, "return this._{};", domain.domain)
            })?;
        }
        Ok(())
    })
}

/// Contents of `ProtocolError.ts`. The file is fixed text, independent of the schema.
pub fn write_error_file<W: fmt::Write>(w: &mut CodeWriter<W>) -> fmt::Result {
    w.writeln("/** Error reported by the remote end for a command. */")?;
    w.block("export class ProtocolError extends Error", |w| {
        let constructor = "constructor(message: string, \
                           public readonly code: number, \
                           public readonly method: string)";
        w.block(constructor, |w| {
            w.writeln("super(message);")?;
            w.writeln("this.name = 'ProtocolError';")
        })
    })
}
