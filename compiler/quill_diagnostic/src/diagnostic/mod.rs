//! Core diagnostic types and constructors for resolution errors.

use std::fmt;

use quill_ir::Span;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with everything needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {:?}: {}", marker, label.span, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}

// Constructors for the resolution errors

/// A reference that was still unresolved when the pass budget ran out.
#[cold]
pub fn unresolved_reference(span: Span, reason: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("unresolved reference: {reason}"))
        .with_label(span, "could not be resolved")
}

/// The previous enumerator value has no increment rule.
#[cold]
pub fn impossible_increment(span: Span, element: &str, underlying: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message(format!(
            "cannot compute a value for `{element}`: type `{underlying}` has no increment rule"
        ))
        .with_label(span, "implicit value here")
        .with_suggestion(format!("give `{element}` an explicit value"))
}

/// A name used in type position denotes something else.
#[cold]
pub fn not_a_type(span: Span, name: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2003)
        .with_message(format!("`{name}` is not a type"))
        .with_label(span, format!("`{name}` is a {found}"))
}

/// A name used in value position denotes a type.
#[cold]
pub fn not_a_value(span: Span, name: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2006)
        .with_message(format!("`{name}` is not a value"))
        .with_label(span, format!("`{name}` is a {found}"))
}

/// A second member with the same name in one type declaration.
#[cold]
pub fn duplicate_member(span: Span, name: &str, owner: &str, previous: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2004)
        .with_message(format!("`{name}` is declared more than once in `{owner}`"))
        .with_label(span, "duplicate declaration")
        .with_secondary_label(previous, "first declared here")
}

/// An implicit enumerator value does not fit its type.
#[cold]
pub fn increment_overflow(span: Span, element: &str, underlying: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2005)
        .with_message(format!("implicit value of `{element}` overflows `{underlying}`"))
        .with_label(span, "value out of range")
}

/// The resolver hit a state it cannot make sense of.
#[cold]
pub fn internal_error(span: Span, message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001)
        .with_message(message)
        .with_label(span, "while resolving this")
        .with_note("this is a compiler bug")
}
