// quomod-core - Error types for quomod operations
// Copyright (c) 2026 Tom Waddington. MIT licensed.

//! Error types for quomod operations.
//!
//! Trap-style conditions (`DivisionByZero`, `InvalidOperation`,
//! `Underflow`, `Overflow`, `Inexact`) are only raised as errors when
//! the matching trap is enabled on the context; with the trap disabled
//! the condition is recorded as a sticky context flag and the operation
//! still returns a result. Integer and rational zero division has no
//! trap and is always fatal to the call.

use std::fmt;

/// Result type for quomod operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a numeric operation.
#[derive(Debug, Clone)]
pub enum Error {
    /// Division or modulo by zero
    DivisionByZero { op: &'static str },
    /// Invalid operation - NaN or infinite operands where the result is
    /// mathematically undefined (trapped)
    InvalidOperation { op: &'static str },
    /// Result fell below the exponent range (trapped)
    Underflow { op: &'static str },
    /// Result exceeded the exponent range (trapped)
    Overflow { op: &'static str },
    /// Result could not be represented exactly (trapped)
    Inexact { op: &'static str },
    /// Operand kinds are not jointly usable for an operation
    TypeError {
        op: &'static str,
        message: &'static str,
    },
    /// Wrong number of arguments to an entry point
    ArityError {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    /// Invalid value for a context attribute
    InvalidValue {
        what: &'static str,
        message: &'static str,
    },
    /// Internal error - invariant violation in kind conversion
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero { op } => {
                write!(f, "{}: division or modulo by zero", op)
            }
            Error::InvalidOperation { op } => {
                write!(f, "invalid operation in {}", op)
            }
            Error::Underflow { op } => {
                write!(f, "underflow in {}", op)
            }
            Error::Overflow { op } => {
                write!(f, "overflow in {}", op)
            }
            Error::Inexact { op } => {
                write!(f, "inexact result in {}", op)
            }
            Error::TypeError { op, message } => {
                write!(f, "{}: {}", op, message)
            }
            Error::ArityError {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Wrong number of arguments to '{}': expected {}, got {}",
                    name, expected, got
                )
            }
            Error::InvalidValue { what, message } => {
                write!(f, "invalid {}: {}", what, message)
            }
            Error::Internal(msg) => {
                write!(f, "Internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a type error for an operation.
    pub fn type_error(op: &'static str, message: &'static str) -> Self {
        Error::TypeError { op, message }
    }

    /// Create an arity error for exact arity with entry-point name.
    pub fn arity_named(name: &'static str, expected: usize, got: usize) -> Self {
        Error::ArityError {
            name,
            expected,
            got,
        }
    }

    /// Create an internal conversion error. Reaching this means the
    /// classifier accepted a value its kind conversion then rejected,
    /// which is a defect in the tower, not a user-facing condition.
    pub fn conversion(kind: &'static str, got: &'static str) -> Self {
        Error::Internal(format!("could not convert {} to {}", got, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::DivisionByZero { op: "divmod" }.to_string(),
            "divmod: division or modulo by zero"
        );
        assert_eq!(
            Error::arity_named("divmod", 2, 3).to_string(),
            "Wrong number of arguments to 'divmod': expected 2, got 3"
        );
        assert_eq!(
            Error::type_error("divmod", "argument type not supported").to_string(),
            "divmod: argument type not supported"
        );
        assert_eq!(
            Error::conversion("integer", "real").to_string(),
            "Internal error: could not convert real to integer"
        );
    }
}
