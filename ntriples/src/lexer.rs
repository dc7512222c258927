//! Term lexer: reads one IRI, blank node or literal from a [`CodepointReader`].

use crate::error::*;
use crate::reader::CodepointReader;
use oxilangtag::LanguageTag;
use std::char;
use std::io::BufRead;
use trine_api::model::{Literal, RdfTerm};
use trine_api::parser::LineColumn;

/// Whitespace that separates terms on a line.
pub fn is_separator(c: char) -> bool {
    c != '\n' && c != '\r' && c.is_whitespace()
}

/// Can the code point start a term?
pub fn is_term_start(c: char) -> bool {
    matches!(c, '<' | '_' | '"')
}

pub struct TermLexer {
    buffer: String,
    annotation_buffer: String, // datatype or language tag
    start: LineColumn,
    validate_language_tags: bool,
}

impl TermLexer {
    pub fn new(validate_language_tags: bool) -> Self {
        Self {
            buffer: String::new(),
            annotation_buffer: String::new(),
            start: LineColumn::new(0, 0),
            validate_language_tags,
        }
    }

    /// Skips separators and reads the next term.
    pub fn parse_term(
        &mut self,
        read: &mut CodepointReader<impl BufRead>,
    ) -> Result<RdfTerm, NTriplesError> {
        self.buffer.clear();
        self.annotation_buffer.clear();

        let mut c = read.next()?;
        while matches!(c, Some(c) if is_separator(c)) {
            c = read.next()?;
        }
        self.start = read.position();

        match c {
            Some('<') => {
                parse_iri(read, &mut self.buffer)?;
                Ok(RdfTerm::Iri(self.buffer.clone()))
            }
            Some('_') => {
                parse_blank_node_label(read, &mut self.buffer)?;
                Ok(RdfTerm::BlankNode(self.buffer.clone()))
            }
            Some('"') => self.parse_literal(read),
            c => Err(read.unexpected(c)),
        }
    }

    /// The position of the first code point of the last term read.
    pub fn term_start(&self) -> LineColumn {
        self.start
    }

    fn parse_literal(
        &mut self,
        read: &mut CodepointReader<impl BufRead>,
    ) -> Result<RdfTerm, NTriplesError> {
        parse_string_literal_quote(read, &mut self.buffer)?;

        match read.next()? {
            Some(c) if c == '.' || c.is_whitespace() => {
                read.pushback();
                Ok(Literal::Simple {
                    value: self.buffer.clone(),
                }
                .into())
            }
            Some('@') => {
                parse_langtag(read, &mut self.annotation_buffer)?;
                if self.validate_language_tags {
                    if let Err(error) = LanguageTag::parse(self.annotation_buffer.as_str()) {
                        return Err(read.parse_error(NTriplesErrorKind::InvalidLanguageTag {
                            tag: self.annotation_buffer.clone(),
                            error,
                        }));
                    }
                }
                Ok(Literal::LanguageTagged {
                    value: self.buffer.clone(),
                    language: self.annotation_buffer.clone(),
                }
                .into())
            }
            Some('^') => {
                expect(read, '^')?;
                expect(read, '<')?;
                parse_iri(read, &mut self.annotation_buffer)?;
                Ok(Literal::Typed {
                    value: self.buffer.clone(),
                    datatype: self.annotation_buffer.clone(),
                }
                .into())
            }
            c => Err(read.unexpected(c)),
        }
    }
}

fn expect(read: &mut CodepointReader<impl BufRead>, expected: char) -> Result<(), NTriplesError> {
    match read.next()? {
        Some(c) if c == expected => Ok(()),
        c => Err(read.unexpected(c)),
    }
}

/// Reads an IRI after its opening `<`, up to and including the closing `>`.
fn parse_iri(
    read: &mut CodepointReader<impl BufRead>,
    buffer: &mut String,
) -> Result<(), NTriplesError> {
    loop {
        match read.next()? {
            Some('>') if buffer.is_empty() => return Err(read.unexpected(Some('>'))),
            Some('>') => return Ok(()),
            Some(c) if c == '<' || c.is_whitespace() => return Err(read.unexpected(Some(c))),
            Some(c) => buffer.push(c),
            None => return Err(read.unexpected(None)),
        }
    }
}

/// Reads a blank node label after its `_`.
///
/// The code point following the label is pushed back.
fn parse_blank_node_label(
    read: &mut CodepointReader<impl BufRead>,
    buffer: &mut String,
) -> Result<(), NTriplesError> {
    // name ::= [A-Za-z][A-Za-z0-9]*
    expect(read, ':')?;

    match read.next()? {
        Some(c) if c.is_ascii_alphabetic() => buffer.push(c),
        c => return Err(read.unexpected(c)),
    }

    loop {
        match read.next()? {
            Some(c) if c.is_ascii_alphanumeric() => buffer.push(c),
            Some(c) if c == '.' || c.is_whitespace() => {
                read.pushback();
                return Ok(());
            }
            c => return Err(read.unexpected(c)),
        }
    }
}

/// Reads a language tag after its `@`.
///
/// The code point following the tag is pushed back.
fn parse_langtag(
    read: &mut CodepointReader<impl BufRead>,
    buffer: &mut String,
) -> Result<(), NTriplesError> {
    loop {
        match read.next()? {
            Some(c) if c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit() => buffer.push(c),
            Some(c) if !buffer.is_empty() && (c == '.' || c.is_whitespace()) => {
                read.pushback();
                return Ok(());
            }
            c => return Err(read.unexpected(c)),
        }
    }
}

/// Reads a literal body after its opening `"`, up to and including the closing `"`.
fn parse_string_literal_quote(
    read: &mut CodepointReader<impl BufRead>,
    buffer: &mut String,
) -> Result<(), NTriplesError> {
    loop {
        match read.next()? {
            Some('"') => return Ok(()),
            Some('\\') => buffer.push(parse_echar_or_uchar(read)?),
            Some(c) if c == '\n' || c == '\r' => return Err(read.unexpected(Some(c))),
            Some(c) => buffer.push(c),
            None => return Err(read.unexpected(None)),
        }
    }
}

/// Decodes an escape sequence after its `\`.
fn parse_echar_or_uchar(read: &mut CodepointReader<impl BufRead>) -> Result<char, NTriplesError> {
    match read.next()? {
        Some('t') => Ok('\t'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('"') => Ok('"'),
        Some('\\') => Ok('\\'),
        Some('u') | Some('U') => read_hexa_char(read, 4),
        c => Err(read.unexpected(c)),
    }
}

fn read_hexa_char(
    read: &mut CodepointReader<impl BufRead>,
    len: usize,
) -> Result<char, NTriplesError> {
    let mut point = 0;
    for _ in 0..len {
        match read.next()? {
            Some(c) => match c.to_digit(16) {
                Some(d) => point = point * 16 + d,
                None => return Err(read.unexpected(Some(c))),
            },
            None => return Err(read.unexpected(None)),
        }
    }
    char::from_u32(point)
        .ok_or_else(|| read.parse_error(NTriplesErrorKind::InvalidCodepoint(point)))
}
