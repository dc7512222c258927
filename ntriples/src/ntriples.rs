//! Implementation of the N-Triples RDF syntax

use crate::error::*;
use crate::lexer::*;
use crate::reader::CodepointReader;
use log::{debug, trace};
use std::io::BufRead;
use trine_api::model::*;
use trine_api::parser::*;

/// Options of a [`NTriplesParser`].
///
/// ```
/// use trine_ntriples::ParserOptions;
///
/// let options = ParserOptions {
///     validate_language_tags: true,
///     ..ParserOptions::default()
/// };
/// assert!(options.iri_predicates);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ParserOptions {
    /// Rejects triples whose predicate is not an IRI. Enabled by default.
    pub iri_predicates: bool,
    /// Checks that language tags are well-formed [BCP 47](https://tools.ietf.org/html/bcp47) tags. Disabled by default.
    pub validate_language_tags: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            iri_predicates: true,
            validate_language_tags: false,
        }
    }
}

/// A [N-Triples](https://www.w3.org/TR/n-triples/) streaming parser.
///
/// It implements the `TripleParser` trait.
///
/// Each line holds exactly one triple. Lines starting with `#` and blank lines are skipped.
/// Its memory consumption is linear in the size of the longest term of the file.
///
/// Count the number of people using the `TripleParser` API:
/// ```
/// use trine_ntriples::NTriplesParser;
/// use trine_api::parser::TripleParser;
/// use trine_api::model::RdfTerm;
///
/// let file = b"<http://example.com/foo> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> .
/// <http://example.com/foo> <http://schema.org/name> \"Foo\" .
/// <http://example.com/bar> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> .
/// <http://example.com/bar> <http://schema.org/name> \"Bar\" .";
///
/// let rdf_type = RdfTerm::Iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type".into());
/// let schema_person = RdfTerm::Iri("http://schema.org/Person".into());
/// let mut count = 0;
/// NTriplesParser::new(file.as_ref()).parse_all(&mut |t| -> Result<(), trine_ntriples::NTriplesError> {
///     if t.predicate == rdf_type && t.object == schema_person {
///         count += 1;
///     }
///     Ok(())
/// })?;
/// assert_eq!(2, count);
/// # Result::<_, trine_ntriples::NTriplesError>::Ok(())
/// ```
pub struct NTriplesParser<R: BufRead> {
    read: CodepointReader<R>,
    lexer: TermLexer,
    options: ParserOptions,
    line: u64,
    count: u64,
}

impl<R: BufRead> NTriplesParser<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ParserOptions::default())
    }

    pub fn with_options(reader: R, options: ParserOptions) -> Self {
        Self {
            read: CodepointReader::new(reader),
            lexer: TermLexer::new(options.validate_language_tags),
            options,
            line: 0,
            count: 0,
        }
    }

    /// The number of the line read last, starting at 1.
    pub fn line(&self) -> u64 {
        self.line
    }

    fn start_line(&mut self) {
        self.line += 1;
        self.read.start_line(self.line);
    }

    /// Skips a comment or blank line.
    ///
    /// Returns `false` if the line holds a triple; the separators before it are consumed.
    fn skip_comment_or_blank_line(&mut self) -> Result<bool, NTriplesError> {
        loop {
            match self.read.next()? {
                Some(c) if is_separator(c) => (),
                Some('#') => {
                    skip_until_eol(&mut self.read)?;
                    return Ok(true);
                }
                Some('\n') | None => return Ok(true),
                Some(_) => {
                    self.read.pushback();
                    return Ok(false);
                }
            }
        }
    }

    fn parse_triple_line(&mut self) -> Result<Triple, NTriplesError> {
        let subject = self.lexer.parse_term(&mut self.read)?;
        check_separator(&mut self.read)?;

        let predicate = self.lexer.parse_term(&mut self.read)?;
        if self.options.iri_predicates && !predicate.is_iri() {
            let first = match predicate {
                RdfTerm::BlankNode(_) => '_',
                _ => '"',
            };
            return Err(NTriplesError {
                kind: NTriplesErrorKind::UnexpectedCharacter(first),
                position: Some(self.lexer.term_start()),
            });
        }
        check_separator(&mut self.read)?;

        let object = self.lexer.parse_term(&mut self.read)?;
        read_to_eol(&mut self.read)?;

        Ok(Triple {
            subject,
            predicate,
            object,
        })
    }
}

impl<R: BufRead> TripleParser for NTriplesParser<R> {
    type Error = NTriplesError;

    fn read_triple(&mut self) -> Result<Option<Triple>, NTriplesError> {
        loop {
            self.start_line();
            if self.read.next()?.is_none() {
                debug!("end of input after {} triples", self.count);
                return Ok(None);
            }
            self.read.pushback();

            if self.skip_comment_or_blank_line()? {
                trace!("skipped line {}", self.line);
                continue;
            }

            return match self.parse_triple_line() {
                Ok(triple) => {
                    self.count += 1;
                    trace!("line {}: {}", self.line, triple);
                    Ok(Some(triple))
                }
                Err(error) => {
                    debug!("failed to parse line {}: {}", self.line, error);
                    Err(error)
                }
            };
        }
    }
}

/// Checks that a term is followed by a space or a tab.
fn check_separator(read: &mut CodepointReader<impl BufRead>) -> Result<(), NTriplesError> {
    match read.next()? {
        Some(c) if is_separator(c) => {
            read.pushback();
            Ok(())
        }
        c => Err(read.unexpected(c)),
    }
}

/// Consumes the final `.` of a triple and the end of its line.
fn read_to_eol(read: &mut CodepointReader<impl BufRead>) -> Result<(), NTriplesError> {
    let mut c = read.next()?;
    while matches!(c, Some(c) if is_separator(c)) {
        c = read.next()?;
    }

    match c {
        Some('.') => (),
        Some(c) if is_term_start(c) => {
            return Err(read.parse_error(NTriplesErrorKind::WrongTermCount))
        }
        Some('\n') | Some('\r') | None => {
            return Err(read.parse_error(NTriplesErrorKind::MissingTerminator))
        }
        c => return Err(read.unexpected(c)),
    }

    loop {
        match read.next()? {
            Some('\n') | None => return Ok(()),
            Some('#') => return skip_until_eol(read),
            Some(c) if c.is_whitespace() => (),
            c => return Err(read.unexpected(c)),
        }
    }
}

fn skip_until_eol(read: &mut CodepointReader<impl BufRead>) -> Result<(), NTriplesError> {
    loop {
        match read.next()? {
            Some('\n') | None => return Ok(()),
            _ => (),
        }
    }
}
