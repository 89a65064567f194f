//! Error types for the equation system solver.
//!
//! This module provides a unified error type [`EqsysError`] that covers
//! all error conditions that can occur during equation parsing, system
//! assembly, and solving.

use thiserror::Error;

/// Result type alias using [`EqsysError`].
pub type Result<T> = std::result::Result<T, EqsysError>;

/// Unified error type for all Eqsys operations.
#[derive(Error, Debug)]
pub enum EqsysError {
    // ============ Parsing Errors ============
    /// Malformed equation text
    #[error("Syntax error in equation {equation}, column {column}: {message}")]
    SyntaxError {
        equation: usize,
        column: usize,
        message: String,
    },

    // ============ System Assembly Errors ============
    /// Empty system or structured rows that do not line up
    #[error("Dimension error: {message}")]
    DimensionError { message: String },

    // ============ Solving Errors ============
    /// No exact or approximate solution could be produced
    #[error("System could not be solved: {message}")]
    UnsolvableError { message: String },

    // ============ I/O Errors ============
    /// Error reading an equations file
    #[error("Failed to read equations file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl EqsysError {
    /// Create a syntax error
    pub fn syntax(equation: usize, column: usize, message: impl Into<String>) -> Self {
        Self::SyntaxError {
            equation,
            column,
            message: message.into(),
        }
    }

    /// Create a dimension error
    pub fn dimension(message: impl Into<String>) -> Self {
        Self::DimensionError {
            message: message.into(),
        }
    }

    /// Create an unsolvable error
    pub fn unsolvable(message: impl Into<String>) -> Self {
        Self::UnsolvableError {
            message: message.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::SyntaxError { .. })
    }

    pub fn is_dimension(&self) -> bool {
        matches!(self, Self::DimensionError { .. })
    }

    pub fn is_unsolvable(&self) -> bool {
        matches!(self, Self::UnsolvableError { .. })
    }
}
