//! Interfaces for RDF parsers.

use crate::model::Triple;
use std::error::Error;
use std::fmt;

/// A parser returning [`Triple`](../model/struct.Triple.html).
///
/// The input is consumed strictly forward, one triple per call to `read_triple`.
pub trait TripleParser: Sized {
    type Error: Error;

    /// Reads the next triple.
    ///
    /// Returns `Ok(None)` once the input is exhausted between two triples.
    /// After an error the parser state is unspecified and it should not be used anymore.
    fn read_triple(&mut self) -> Result<Option<Triple>, Self::Error>;

    /// Parses the complete file and calls `on_triple` each time a new triple is read.
    ///
    /// May fail on errors caused by the parser itself or by the callback function ``on_triple``.
    fn parse_all<E: From<Self::Error>>(
        &mut self,
        on_triple: &mut impl FnMut(Triple) -> Result<(), E>,
    ) -> Result<(), E> {
        while let Some(triple) = self.read_triple()? {
            on_triple(triple)?;
        }
        Ok(())
    }

    /// Converts the parser into a `Result<Triple, Self::Error>` iterator.
    ///
    /// The iterator stops after the first error.
    fn into_iter(self) -> TriplesParserIterator<Self> {
        TriplesParserIterator {
            parser: self,
            done: false,
        }
    }
}

/// Created with the method [`into_iter`](trait.TripleParser.html#method.into_iter).
pub struct TriplesParserIterator<P: TripleParser> {
    parser: P,
    done: bool,
}

impl<P: TripleParser> Iterator for TriplesParserIterator<P> {
    type Item = Result<Triple, P::Error>;

    fn next(&mut self) -> Option<Result<Triple, P::Error>> {
        if self.done {
            return None;
        }
        match self.parser.read_triple() {
            Ok(Some(triple)) => Some(Ok(triple)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl<P: TripleParser> std::iter::FusedIterator for TriplesParserIterator<P> {}

/// A position in a text file: a 1-based line number and a 0-based column,
/// counted in Unicode code points.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub struct LineColumn {
    line: u64,
    column: u64,
}

impl LineColumn {
    pub fn new(line: u64, column: u64) -> Self {
        Self { line, column }
    }

    /// The line number, starting at 1.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// The index of the code point in the line, starting at 0.
    pub fn column(&self) -> u64 {
        self.column
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} at column {}", self.line, self.column)
    }
}

/// An error raised by a parser.
pub trait ParseError: Error {
    /// The position in the input where the error occurred, if known.
    fn textual_position(&self) -> Option<LineColumn>;
}
