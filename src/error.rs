//! vCard error types.

use thiserror::Error;

/// Result type for vCard operations.
pub type VCardResult<T> = Result<T, VCardError>;

/// An error from loading, parsing, validating, or saving a vCard.
///
/// Parsing and validation fail fast: the first structural or property-level
/// violation aborts the whole operation and no partial card is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VCardError {
    /// The source file cannot be opened or read.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Envelope or structural violation: bad begin/end/version line,
    /// missing FN property, or a line without a CRLF terminator.
    #[error("invalid vCard: {0}")]
    InvalidCard(String),

    /// Malformed property, parameter, or value shape.
    #[error("invalid property in vCard: {0}")]
    InvalidProperty(String),

    /// Inconsistent date-and-or-time value on a birthday or anniversary.
    #[error("invalid date-time in vCard: {0}")]
    InvalidDateTime(String),

    /// The destination cannot be opened or a write call failed.
    #[error("error writing to file: {0}")]
    Write(String),

    /// A failure unrelated to vCard data, such as resource exhaustion.
    #[error("error unrelated to vCard: {0}")]
    Other(String),
}

impl VCardError {
    /// Returns the flat error kind for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFile(_) => ErrorKind::InvalidFile,
            Self::InvalidCard(_) => ErrorKind::InvalidCard,
            Self::InvalidProperty(_) => ErrorKind::InvalidProperty,
            Self::InvalidDateTime(_) => ErrorKind::InvalidDateTime,
            Self::Write(_) => ErrorKind::Write,
            Self::Other(_) => ErrorKind::Other,
        }
    }

    /// Creates a structural error tied to a physical line.
    pub(crate) fn card_at(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidCard(format!("line {line}: {}", message.into()))
    }

    /// Creates a property-shape error tied to a logical line.
    pub(crate) fn property_at(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidProperty(format!("line {line}: {}", message.into()))
    }
}

/// The kind of a [`VCardError`], without its message.
///
/// Callers that only need to distinguish failure classes (structural vs.
/// property vs. date-time vs. I/O) can match on this instead of the full
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source file cannot be opened or read.
    InvalidFile,
    /// Envelope or structural violation.
    InvalidCard,
    /// Malformed property, parameter, or value.
    InvalidProperty,
    /// Inconsistent date-and-or-time value.
    InvalidDateTime,
    /// Destination cannot be opened or written.
    Write,
    /// Failure unrelated to vCard data.
    Other,
}

impl ErrorKind {
    /// Returns a short human-readable description of the error kind.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidFile => "invalid file",
            Self::InvalidCard => "invalid vCard",
            Self::InvalidProperty => "invalid property in vCard",
            Self::InvalidDateTime => "invalid date-time in vCard",
            Self::Write => "error writing to file",
            Self::Other => "error unrelated to vCard",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
