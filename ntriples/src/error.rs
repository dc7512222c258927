use oxilangtag::LanguageTagParseError;
use std::error::Error;
use std::fmt;
use std::io;
use trine_api::parser::{LineColumn, ParseError};

/// Error that might be returned during parsing.
///
/// It might wrap an IO error or be a parsing error.
#[derive(Debug)]
pub struct NTriplesError {
    pub(crate) kind: NTriplesErrorKind,
    pub(crate) position: Option<LineColumn>,
}

/// The different kinds of [`NTriplesError`].
#[derive(Debug, thiserror::Error)]
pub enum NTriplesErrorKind {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("unexpected character '{}'", .0.escape_debug())]
    UnexpectedCharacter(char),
    #[error("unexpected end of file")]
    UnexpectedEndOfInput,
    #[error("wrong number of terms in line")]
    WrongTermCount,
    #[error("unterminated IRI, expecting '>'")]
    UnterminatedIri,
    #[error("unterminated literal, expecting '\"'")]
    UnterminatedLiteral,
    #[error("unterminated triple, expecting '.'")]
    MissingTerminator,
    #[error("invalid unicode code point '{0:X}'")]
    InvalidCodepoint(u32),
    #[error("error while parsing language tag '{tag}': {error}")]
    InvalidLanguageTag {
        tag: String,
        #[source]
        error: LanguageTagParseError,
    },
}

impl NTriplesError {
    pub fn kind(&self) -> &NTriplesErrorKind {
        &self.kind
    }

    /// The line where the error occurred, starting at 1.
    pub fn line(&self) -> Option<u64> {
        self.position.map(|p| p.line())
    }

    /// The index of the code point that triggered the error, starting at 0.
    pub fn column(&self) -> Option<u64> {
        self.position.map(|p| p.column())
    }
}

impl fmt::Display for NTriplesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)?;
        if let Some(position) = self.position {
            write!(f, " on {}", position)?;
        }
        Ok(())
    }
}

impl Error for NTriplesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            NTriplesErrorKind::Io(error) => Some(error),
            NTriplesErrorKind::InvalidLanguageTag { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl ParseError for NTriplesError {
    fn textual_position(&self) -> Option<LineColumn> {
        self.position
    }
}

impl From<io::Error> for NTriplesError {
    fn from(error: io::Error) -> Self {
        Self {
            kind: NTriplesErrorKind::Io(error),
            position: None,
        }
    }
}

impl From<NTriplesError> for io::Error {
    fn from(error: NTriplesError) -> Self {
        match error.kind {
            NTriplesErrorKind::Io(error) => error,
            _ => io::Error::new(io::ErrorKind::InvalidData, error),
        }
    }
}
