//! Compiler Errors
//!
//! Error types shared by the lexer and the parser, and the [`Diagnostic`]
//! representation every error is reported through.

mod diagnostic;

pub use diagnostic::{Diagnostic, ErrorSeverity};

use thiserror::Error;
use tokens::SourceLocation;

/// Contextual annotation attached to an error, e.g. the construct that was
/// being parsed when it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note<'a> {
    pub location: SourceLocation<'a>,
    pub message: String,
}

impl<'a> Note<'a> {
    pub fn new(location: SourceLocation<'a>, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// A broken invariant inside the compiler itself, never caused by user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Internal compiler error: {message}")]
pub struct InternalCompilerError {
    pub message: String,
}

impl InternalCompilerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parser error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParserError<'a> {
    #[error("{message}")]
    InvalidSyntax {
        message: String,
        location: SourceLocation<'a>,
        /// Notes active when the error was raised, innermost last
        notes: Vec<Note<'a>>,
    },
    #[error(transparent)]
    Internal(#[from] InternalCompilerError),
}

impl<'a> ParserError<'a> {
    /// Create a syntax error without notes
    pub fn syntax(message: impl Into<String>, location: SourceLocation<'a>) -> Self {
        ParserError::InvalidSyntax {
            message: message.into(),
            location,
            notes: Vec::new(),
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            ParserError::InvalidSyntax { message, .. } => message.clone(),
            ParserError::Internal(error) => error.to_string(),
        }
    }

    /// Get the error location; internal errors have none
    pub fn location(&self) -> Option<SourceLocation<'a>> {
        match self {
            ParserError::InvalidSyntax { location, .. } => Some(*location),
            ParserError::Internal(_) => None,
        }
    }

    pub fn notes(&self) -> &[Note<'a>] {
        match self {
            ParserError::InvalidSyntax { notes, .. } => notes,
            ParserError::Internal(_) => &[],
        }
    }

    /// Replace the notes of a syntax error; internal errors are unchanged
    pub fn with_notes(self, notes: Vec<Note<'a>>) -> Self {
        match self {
            ParserError::InvalidSyntax {
                message, location, ..
            } => ParserError::InvalidSyntax {
                message,
                location,
                notes,
            },
            internal => internal,
        }
    }

    /// Convert to a diagnostic for reporting
    pub fn to_diagnostic(&self) -> Diagnostic<'a> {
        Diagnostic::new(ErrorSeverity::Error, self.message(), self.location())
            .with_notes(self.notes().to_vec())
    }
}

/// Result type for parser operations
pub type ParserResult<'a, T> = Result<T, ParserError<'a>>;
