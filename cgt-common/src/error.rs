//! Error handling for the C-to-Go transpiler
//!
//! This module defines the error type shared by every transpilation phase
//! and the diagnostic reporting used when a batch of units is processed.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main transpiler error type.
///
/// Errors come in two tiers. Fatal errors mean the type model has a gap
/// (a descriptor no rule accepts, a base that cannot be indexed, a
/// declaration child nobody knows how to handle) and the whole run must stop.
/// Every other error only invalidates the unit being transpiled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranspileError {
    #[error("I couldn't find an appropriate Go type for the C type '{descriptor}'")]
    UnresolvedType { descriptor: String },

    #[error("Cannot dereference type '{descriptor}' for the expression '{expression}'")]
    NotDereferenceable {
        descriptor: String,
        expression: String,
    },

    #[error("Unknown declaration child {variant} at {address}")]
    UnknownDeclarationChild { variant: String, address: String },

    #[error("Unsupported node {variant} at {address}")]
    UnsupportedNode { variant: String, address: String },

    #[error("Unsupported {variant} at {address}: {message}")]
    UnsupportedConstruct {
        variant: String,
        address: String,
        message: String,
    },

    #[error("Malformed node {variant} at {address}: {message}")]
    MalformedNode {
        variant: String,
        address: String,
        message: String,
    },

    #[error("Invalid input tree: {message}")]
    InvalidInput { message: String },
}

impl TranspileError {
    /// Create an error for a type descriptor that no resolution rule accepts
    pub fn unresolved_type(descriptor: &str) -> Self {
        TranspileError::UnresolvedType {
            descriptor: descriptor.to_string(),
        }
    }

    /// Create an error for an indexed or dereferenced value whose type has no element type
    pub fn not_dereferenceable(descriptor: &str, expression: impl fmt::Display) -> Self {
        TranspileError::NotDereferenceable {
            descriptor: descriptor.to_string(),
            expression: expression.to_string(),
        }
    }

    /// Create an error for a declaration statement child that is neither a variable nor a record
    pub fn unknown_declaration_child(variant: &str, address: &str) -> Self {
        TranspileError::UnknownDeclarationChild {
            variant: variant.to_string(),
            address: address.to_string(),
        }
    }

    /// Create an error for a node variant that cannot appear in expression position
    pub fn unsupported_node(variant: &str, address: &str) -> Self {
        TranspileError::UnsupportedNode {
            variant: variant.to_string(),
            address: address.to_string(),
        }
    }

    /// Create an error for a supported node used in a form with no faithful Go translation
    pub fn unsupported_construct(variant: &str, address: &str, message: impl Into<String>) -> Self {
        TranspileError::UnsupportedConstruct {
            variant: variant.to_string(),
            address: address.to_string(),
            message: message.into(),
        }
    }

    /// Create an error for a node missing a child it needs
    pub fn malformed_node(variant: &str, address: &str, message: impl Into<String>) -> Self {
        TranspileError::MalformedNode {
            variant: variant.to_string(),
            address: address.to_string(),
            message: message.into(),
        }
    }

    /// Whether this error must abort the entire run rather than just the current unit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TranspileError::UnresolvedType { .. }
                | TranspileError::NotDereferenceable { .. }
                | TranspileError::UnknownDeclarationChild { .. }
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message attached to one transpilation unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Address of the top-level node the message is about
    pub unit: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: String, unit: String) -> Self {
        Self {
            severity: Severity::Error,
            message,
            unit,
            notes: Vec::new(),
        }
    }

    pub fn warning(message: String, unit: String) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            unit,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.unit, self.severity, self.message)?;

        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }

        Ok(())
    }
}

/// Collects diagnostics for the units of one run
#[derive(Debug, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the error that stopped the run at `unit`
    pub fn report(&mut self, err: &TranspileError, unit: &str) {
        let mut diagnostic = Diagnostic::error(err.to_string(), unit.to_string());
        if err.is_fatal() {
            diagnostic = diagnostic.with_note("fatal: the run was stopped here".to_string());
        }
        self.diagnostics.push(diagnostic);
        self.error_count += 1;
    }

    /// Report a unit left out of the output after a recoverable error
    pub fn report_skipped(&mut self, err: &TranspileError, unit: &str) {
        let diagnostic = Diagnostic::warning(err.to_string(), unit.to_string());
        self.diagnostics.push(diagnostic.with_note("the unit was skipped".to_string()));
        self.warning_count += 1;
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Print all diagnostics to stderr
    pub fn print_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }

    /// Create a summary string
    pub fn summary(&self) -> String {
        match (self.error_count, self.warning_count) {
            (0, 0) => "No errors or warnings".to_string(),
            (0, w) => format!("{} warning{}", w, if w == 1 { "" } else { "s" }),
            (e, 0) => format!("{} error{}", e, if e == 1 { "" } else { "s" }),
            (e, w) => format!(
                "{} error{} and {} warning{}",
                e,
                if e == 1 { "" } else { "s" },
                w,
                if w == 1 { "" } else { "s" }
            ),
        }
    }
}
