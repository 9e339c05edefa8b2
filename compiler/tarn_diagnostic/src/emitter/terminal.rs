//! Human-readable diagnostics for a terminal.
//!
//! With the source attached, the label location is printed as `line:col`
//! followed by the offending line and a caret underline.

use std::io::{self, Write};

use tarn_ir::Span;

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// When to emit ANSI escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text so labels render as `line:col` with a snippet.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the file path shown in front of label locations.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_location(&mut self, span: Span) {
        if let Some(path) = &self.file_path {
            let _ = write!(self.writer, "{path}:");
        }
        match self.source.as_deref().map(|src| line_col(src, span.start)) {
            Some((line, col)) => {
                let _ = write!(self.writer, "{line}:{col}");
            }
            None => {
                let _ = write!(self.writer, "{span:?}");
            }
        }
    }

    fn write_snippet(&mut self, span: Span) {
        let Some(source) = self.source.as_deref() else {
            return;
        };
        let (line_no, col) = line_col(source, span.start);
        let Some(line) = source.lines().nth(line_no - 1) else {
            return;
        };
        let line = line.to_owned();
        let remaining = line.chars().count().saturating_sub(col - 1).max(1);
        let carets = "^".repeat((span.len() as usize).clamp(1, remaining));
        let gutter = " ".repeat(line_no.to_string().len());

        let _ = writeln!(self.writer, "  {gutter} |");
        let _ = writeln!(self.writer, "  {line_no} | {line}");
        let _ = write!(self.writer, "  {gutter} | {}", " ".repeat(col - 1));
        self.write_colored(&carets, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

/// One-based line and column (in characters) of a byte offset.
fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(label) = &diagnostic.label {
            let _ = write!(self.writer, "  --> ");
            self.write_location(label.span);
            let _ = write!(self.writer, ": ");
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
            self.write_snippet(label.span);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
        for help in &diagnostic.help {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {help}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    /// An emitter for stderr; `Auto` colors only when stderr is a terminal.
    pub fn stderr(mode: ColorMode) -> Self {
        let is_tty = io::IsTerminal::is_terminal(&io::stderr());
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;

    fn sample_diagnostic() -> Diagnostic {
        Diagnostic::error(ErrorCode::E2001)
            .with_message("type mismatch: expected `int`, found `str`")
            .with_label(Span::new(3, 7), "expected `int`")
            .with_note("list elements must all have the same type")
            .with_suggestion("convert the value first")
    }

    #[test]
    fn terminal_emitter_no_color() {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);
        emitter.emit(&sample_diagnostic());
        emitter.flush();

        let text = String::from_utf8(emitter.into_inner()).unwrap();
        assert!(text.starts_with("error[E2001]: type mismatch"));
        assert!(text.contains("--> 3..7: expected `int`"));
        assert!(text.contains("= note: list elements"));
        assert!(text.contains("= help: convert the value first"));
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn terminal_emitter_with_color() {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
        emitter.emit(&sample_diagnostic());

        let text = String::from_utf8(emitter.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("E2001"));
    }

    #[test]
    fn source_snippet_points_at_span() {
        let source = "(+ 1\n   \"hi\")";
        let diag = Diagnostic::error(ErrorCode::E2001)
            .with_message("type mismatch")
            .with_label(Span::new(8, 12), "expected `int`");
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
            .with_source(source)
            .with_file_path("main.tarn");
        emitter.emit(&diag);

        let text = String::from_utf8(emitter.into_inner()).unwrap();
        assert!(text.contains("--> main.tarn:2:4: expected `int`"));
        assert!(text.contains("  2 |    \"hi\")"));
        assert!(text.contains("  |    ^^^^"));
    }

    #[test]
    fn line_col_counts_from_one() {
        assert_eq!(line_col("abc", 0), (1, 1));
        assert_eq!(line_col("abc\ndef", 5), (2, 2));
        assert_eq!(line_col("abc", 99), (1, 4));
    }

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
        assert_eq!(ColorMode::default(), ColorMode::Auto);
    }
}
