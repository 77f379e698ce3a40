//! Code writer with automatic indentation tracking.
//!
//! Both targets emit brace-delimited code (TypeScript classes and namespaces,
//! Rust modules and impls). `CodeWriter` keeps the indentation bookkeeping out
//! of the renderers:
//!
//! - `indent()` returns a guard; indentation drops back when it goes away
//! - `block()` writes `header {`, the body one level deeper, then `}`
//! - `block_with()` does the same with a custom closer such as `});`
//! - `cw_write!` / `cw_writeln!` format straight into the writer
//!
//! ```
//! use cdp_codegen::code_writer::CodeWriter;
//! use cdp_codegen::cw_writeln;
//!
//! let mut output = String::new();
//! let mut w = CodeWriter::with_indent_spaces(&mut output, 2);
//!
//! w.block("export class Widget", |w| {
//!     cw_writeln!(w, "ping(): Promise<void> {{")?;
//!     {
//!         let _indent = w.indent();
//!         w.writeln("return this.send('Widget.ping');")?;
//!     }
//!     w.writeln("}")
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     output,
//!     "export class Widget {\n  ping(): Promise<void> {\n    return this.send('Widget.ping');\n  }\n}\n"
//! );
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A writer that tracks indentation for brace-delimited languages.
pub struct CodeWriter<W> {
    writer: W,
    indent_level: Rc<Cell<usize>>,
    indent_string: String,
    at_line_start: bool,
}

impl<W: fmt::Write> CodeWriter<W> {
    pub fn new(writer: W, indent_string: impl Into<String>) -> Self {
        Self {
            writer,
            indent_level: Rc::new(Cell::new(0)),
            indent_string: indent_string.into(),
            at_line_start: true,
        }
    }

    pub fn with_indent_spaces(writer: W, spaces: usize) -> Self {
        Self::new(writer, " ".repeat(spaces))
    }

    /// Write text without a newline. Indents if at the start of a line.
    pub fn write(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }

        if self.at_line_start && !text.trim().is_empty() {
            for _ in 0..self.indent_level.get() {
                self.writer.write_str(&self.indent_string)?;
            }
            self.at_line_start = false;
        }

        self.writer.write_str(text)
    }

    /// Write text followed by a newline.
    ///
    /// Embedded newlines are honoured: every line of `text` is indented.
    pub fn writeln(&mut self, text: &str) -> fmt::Result {
        if text.contains('\n') {
            for line in text.lines() {
                self.writeln(line)?;
            }
            return Ok(());
        }
        self.write(text)?;
        self.writer.write_char('\n')?;
        self.at_line_start = true;
        Ok(())
    }

    pub fn blank_line(&mut self) -> fmt::Result {
        self.writer.write_char('\n')?;
        self.at_line_start = true;
        Ok(())
    }

    /// Increase indentation while the returned guard is alive.
    pub fn indent(&mut self) -> IndentGuard {
        self.indent_level.set(self.indent_level.get() + 1);
        IndentGuard {
            indent_level: Rc::clone(&self.indent_level),
        }
    }

    /// Write each line of `text` behind `prefix` (e.g. `///` or `//`).
    pub fn doc_comment(&mut self, prefix: &str, text: &str) -> fmt::Result {
        for line in text.lines() {
            if line.trim().is_empty() {
                self.writeln(prefix)?;
            } else {
                self.writeln(&format!("{prefix} {}", line.trim_end()))?;
            }
        }
        Ok(())
    }

    /// Write `header {`, the body one level deeper, then `}`.
    pub fn block<F>(&mut self, header: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.block_with(&format!("{header} {{"), "}", body)
    }

    /// Write `opener`, the body one level deeper, then `closer`.
    pub fn block_with<F>(&mut self, opener: &str, closer: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.writeln(opener)?;
        {
            let _indent = self.indent();
            body(self)?;
        }
        self.writeln(closer)
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level.get()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Use `cw_write!` rather than calling this directly.
    #[doc(hidden)]
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.write(&args.to_string())
    }

    /// Use `cw_writeln!` rather than calling this directly.
    #[doc(hidden)]
    pub fn writeln_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.writeln(&args.to_string())
    }
}

/// RAII guard returned by [`CodeWriter::indent`].
pub struct IndentGuard {
    indent_level: Rc<Cell<usize>>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        let current = self.indent_level.get();
        self.indent_level.set(current.saturating_sub(1));
    }
}

/// Write formatted text to a `CodeWriter` (like `std::write!`).
#[macro_export]
macro_rules! cw_write {
    ($writer:expr, $($arg:tt)*) => {
        $writer.write_fmt(format_args!($($arg)*))
    };
}

/// Write formatted text and a newline to a `CodeWriter` (like `std::writeln!`).
#[macro_export]
macro_rules! cw_writeln {
    ($writer:expr, $($arg:tt)*) => {
        $writer.writeln_fmt(format_args!($($arg)*))
    };
}
