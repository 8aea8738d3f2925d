//! Unified error types for the autohelm control loop.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! controller's error handling uniform. Parse failures are recovered locally
//! by the configuration gate (substituting defaults) and never surface past
//! it; a version mismatch is the only condition that halts periodic
//! execution, and it is reported through the status surface rather than by
//! unwinding.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The persisted configuration document is malformed.
    Parse(ParseError),
    /// The stored configuration was written by a newer script version.
    VersionMismatch { stored: f32, running: f32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "config parse: {e}"),
            Self::VersionMismatch { stored, running } => {
                write!(f, "stored version {stored} is newer than running version {running}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Document parse errors
// ---------------------------------------------------------------------------

/// A malformed line in the section/key/value document.
///
/// Carries the 1-based line number so operators can fix the persisted text
/// by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `key=value` line appeared before any `[Section]` header.
    KeyOutsideSection,
    /// A section header was opened with `[` but never closed with `]`.
    UnterminatedSection,
    /// A non-blank, non-comment line without a `=` delimiter.
    MissingDelimiter,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::KeyOutsideSection => {
                write!(f, "line {}: key outside any section", self.line)
            }
            ParseErrorKind::UnterminatedSection => {
                write!(f, "line {}: unterminated section header", self.line)
            }
            ParseErrorKind::MissingDelimiter => {
                write!(f, "line {}: expected 'key=value'", self.line)
            }
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Version gate verdict
// ---------------------------------------------------------------------------

/// Outcome of comparing a stored configuration version against the running
/// script version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCheck {
    /// Stored version is older or equal — safe to adopt.
    Accept,
    /// Stored version is newer — the load must abort and the scheduler halt.
    Reject,
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
