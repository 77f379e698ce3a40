//! Naming, documentation and whitespace helpers shared by every target.

use heck::{ToSnakeCase, ToUpperCamelCase};
use tracing::warn;

/// `Domain.member`, the name sent over the wire for commands and events.
pub fn qualified(domain: &str, member: &str) -> String {
    format!("{domain}.{member}")
}

/// Lines of a member's doc comment: its description followed by one note per
/// flag that is set.
pub fn doc_lines(
    description: Option<&str>,
    experimental: Option<bool>,
    deprecated: Option<bool>,
    optional: Option<bool>,
    tag: fn(&'static str) -> String,
) -> Vec<String> {
    let mut lines: Vec<String> = description
        .map(|d| d.lines().map(|l| l.trim_end().to_string()).collect())
        .unwrap_or_default();
    for (flag, name) in [
        (experimental, "experimental"),
        (deprecated, "deprecated"),
        (optional, "optional"),
    ] {
        if flag == Some(true) {
            lines.push(tag(name));
        }
    }
    lines
}

/// JSDoc tag for a flag (`@experimental`).
pub fn jsdoc_tag(name: &'static str) -> String {
    format!("@{name}")
}

/// Rustdoc note for a flag (`*[experimental]*`).
pub fn rustdoc_tag(name: &'static str) -> String {
    format!("*[{name}]*")
}

/// Format doc lines as a JSDoc comment: `/** text */` for a single line,
/// a `/** ... */` block otherwise. Returns an empty string for no lines.
pub fn format_jsdoc(lines: &[String]) -> String {
    match lines {
        [] => String::new(),
        [line] => format!("/** {} */", line.trim()),
        lines => {
            let mut out = String::from("/**\n");
            for line in lines {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    out.push_str(" *\n");
                } else {
                    out.push_str(&format!(" * {trimmed}\n"));
                }
            }
            out.push_str(" */");
            out
        }
    }
}

/// Escape a string for use inside a single-quoted TypeScript literal.
pub fn ts_string_literal(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const RUST_RESERVED: &[&str] = &["crate", "self", "Self", "super"];

/// snake_case Rust identifier for a schema name, escaped if it is a keyword.
pub fn rust_ident(name: &str) -> String {
    escape_rust_ident(name.to_snake_case())
}

/// UpperCamelCase Rust type name. Names that already start with an uppercase
/// letter (schema type ids such as `DOMNode`) are kept verbatim.
pub fn rust_type_name(name: &str) -> String {
    if name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        escape_rust_ident(name.to_string())
    } else {
        escape_rust_ident(name.to_upper_camel_case())
    }
}

/// Module name for a domain (`DOMDebugger` becomes `dom_debugger`).
pub fn rust_module_name(domain: &str) -> String {
    rust_ident(domain)
}

fn escape_rust_ident(ident: String) -> String {
    if RUST_RESERVED.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RUST_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Log a definition the renderers could not classify. It is rendered as the
/// target's "unknown" type instead of failing the run.
pub fn warn_unknown_shape(domain: &str, name: &str) {
    warn!(domain, name, "unrecognised schema shape, rendering as an unknown type");
}

/// Normalise whitespace in rendered source.
///
/// Trailing whitespace is trimmed, runs of blank lines collapse to one, blank
/// lines right after an opening brace or right before a closing brace are
/// dropped, and the result ends in exactly one newline.
pub fn tidy(source: &str) -> String {
    let lines: Vec<&str> = source.lines().map(str::trim_end).collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            let after_open = kept
                .last()
                .is_none_or(|prev| prev.is_empty() || prev.ends_with('{'));
            let before_close = lines[i + 1..]
                .iter()
                .find(|l| !l.is_empty())
                .is_none_or(|next| next.trim_start().starts_with('}'));
            if after_open || before_close {
                continue;
            }
        }
        kept.push(line);
    }

    let mut out = kept.join("\n");
    out.push('\n');
    out
}
