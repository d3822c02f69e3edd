//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

/// Structure implementing [`Display`] that prints the line a span starts on and marks the start of
/// the span with a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed next to the caret.
    pub help_display: Option<T>,
}

impl<T: Display> Display for SourceCodeDisplay<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = self.span.start_location();
        let line_number = location.line.to_string();
        let gutter = " ".repeat(line_number.len());
        let pipe = Style::Bold.with(Color::Cyan.with("┃"));

        writeln!(
            f,
            "{gutter}{} {}:{}:{}",
            Style::Bold.with(Color::Cyan.with("-->")),
            self.span.source_file().full_path().display(),
            location.line,
            location.column
        )?;
        writeln!(f, "{gutter} {pipe}")?;

        let line = self
            .span
            .source_file()
            .get_line(location.line)
            .unwrap_or_default();

        // tabs are widened so the caret below stays aligned
        let mut padding = String::new();
        write!(f, "{} {pipe} ", Style::Bold.with(Color::Cyan.with(&line_number)))?;
        for (index, character) in line.trim_end_matches(['\n', '\r']).chars().enumerate() {
            let rendered = if character == '\t' { "    " } else { " " };
            if index + 1 < location.column {
                padding.push_str(rendered);
            }

            if character == '\t' {
                write!(f, "    ")?;
            } else {
                write!(f, "{character}")?;
            }
        }
        writeln!(f)?;

        write!(
            f,
            "{gutter} {pipe} {padding}{}",
            Style::Bold.with(Color::Red.with("^"))
        )?;
        if let Some(help) = &self.help_display {
            write!(f, " {}: {help}", Style::Bold.with("help"))?;
        }
        writeln!(f)
    }
}
