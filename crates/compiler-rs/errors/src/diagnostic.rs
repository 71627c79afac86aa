//! Diagnostic rendering
//!
//! Renders errors in the `path:line:col: Error: message` format followed by
//! the offending source line(s) with the span underlined.

use std::io;

use owo_colors::{OwoColorize, Style};
use tokens::SourceLocation;

use crate::Note;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Note,
}

impl ErrorSeverity {
    fn label(self) -> &'static str {
        match self {
            ErrorSeverity::Error => "Error",
            ErrorSeverity::Note => "Note",
        }
    }

    fn style(self) -> Style {
        match self {
            ErrorSeverity::Error => Style::new().red().bold(),
            ErrorSeverity::Note => Style::new().cyan().bold(),
        }
    }
}

/// A reportable error with optional source context and attached notes
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic<'a> {
    pub severity: ErrorSeverity,
    pub message: String,
    /// `None` for errors without source context (internal errors)
    pub location: Option<SourceLocation<'a>>,
    /// Innermost last
    pub notes: Vec<Note<'a>>,
}

impl<'a> Diagnostic<'a> {
    pub fn new(severity: ErrorSeverity, message: impl Into<String>, location: Option<SourceLocation<'a>>) -> Self {
        Self {
            severity,
            message: message.into(),
            location,
            notes: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: Vec<Note<'a>>) -> Self {
        self.notes = notes;
        self
    }

    /// Write the diagnostic followed by its notes, innermost note first.
    pub fn render(&self, out: &mut impl io::Write, use_color: bool) -> io::Result<()> {
        render_entry(out, self.severity, &self.message, self.location, use_color)?;
        for note in self.notes.iter().rev() {
            render_entry(out, ErrorSeverity::Note, &note.message, Some(note.location), use_color)?;
        }
        Ok(())
    }

    /// Render into a string without colors
    pub fn render_to_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(&mut buffer, false);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

fn paint(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

fn render_entry(
    out: &mut impl io::Write,
    severity: ErrorSeverity,
    message: &str,
    location: Option<SourceLocation<'_>>,
    use_color: bool,
) -> io::Result<()> {
    if let Some(location) = location {
        write!(out, "{}: ", location)?;
    }
    let label = format!("{}:", severity.label());
    writeln!(out, "{} {}", paint(&label, severity.style(), use_color), message)?;
    if let Some(location) = location {
        render_source_lines(out, location, use_color)?;
    }
    Ok(())
}

fn render_source_lines(out: &mut impl io::Write, location: SourceLocation<'_>, use_color: bool) -> io::Result<()> {
    let position = location.position();
    let lines = location.surrounding_lines();
    let line_style = Style::new().white();
    let marker_style = Style::new().green();

    for (index, line) in lines.iter().enumerate() {
        let line_number = position.start_line + index;
        let first_column = if index == 0 { position.start_column } else { 1 };
        let end_column = if line_number == position.end_line {
            position.end_column
        } else {
            line.len() + 1
        };
        // Columns count bytes, the underline counts characters
        let start = first_column - 1;
        let end = end_column.saturating_sub(1).max(start);
        let padding = line.get(..start).map_or(start, |prefix| prefix.chars().count());
        let width = line
            .get(start..end)
            .map_or(end - start, |span| span.chars().count())
            .max(1);
        let marker = if index == 0 {
            format!("^{}", "~".repeat(width - 1))
        } else {
            "~".repeat(width)
        };

        writeln!(
            out,
            "{} | {}",
            paint(&format!("{:5}", line_number), line_style, use_color),
            line
        )?;
        writeln!(
            out,
            "      | {}{}",
            " ".repeat(padding),
            paint(&marker, marker_style, use_color)
        )?;
    }
    Ok(())
}
