//! C-to-Go Transpiler - Common Types and Utilities
//!
//! This crate contains the shared error type and the diagnostic
//! reporting used by the frontend and the driver.

pub mod error;

pub use error::{Diagnostic, ErrorReporter, Severity, TranspileError};
