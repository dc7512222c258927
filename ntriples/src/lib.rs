//! Implementation of a streaming [N-Triples](https://www.w3.org/TR/n-triples/) reader and formatter.
//!
//! The parser reads from a `BufRead` implementation, one triple per line,
//! and reports errors with the line and the column (in code points) where they occurred.
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]
#![doc(test(attr(deny(warnings))))]

mod error;
mod formatter;
mod lexer;
mod ntriples;
mod reader;

pub use error::NTriplesError;
pub use error::NTriplesErrorKind;
pub use formatter::NTriplesFormatter;
pub use ntriples::NTriplesParser;
pub use ntriples::ParserOptions;
