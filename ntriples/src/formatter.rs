use std::io;
use std::io::Write;
use trine_api::formatter::TriplesFormatter;
use trine_api::model::*;

/// A [N-Triples](https://www.w3.org/TR/n-triples/) formatter.
///
/// It implements the `TriplesFormatter` trait.
/// Literal values are escaped so that the output can always be read back by [`NTriplesParser`](struct.NTriplesParser.html).
///
/// Write some triples using the `TriplesFormatter` API into a `Vec` buffer:
/// ```
/// use trine_ntriples::NTriplesFormatter;
/// use trine_api::formatter::TriplesFormatter;
/// use trine_api::model::{Literal, RdfTerm, Triple};
///
/// let mut formatter = NTriplesFormatter::new(Vec::default());
/// formatter.format(&Triple {
///     subject: RdfTerm::Iri("http://example.com/foo".into()),
///     predicate: RdfTerm::Iri("http://schema.org/name".into()),
///     object: Literal::Simple { value: "Foo \"Bar\"".into() }.into(),
/// })?;
/// assert_eq!(
///     b"<http://example.com/foo> <http://schema.org/name> \"Foo \\\"Bar\\\"\" .\n".as_ref(),
///     formatter.finish().as_slice()
/// );
/// # std::io::Result::Ok(())
/// ```
pub struct NTriplesFormatter<W: Write> {
    write: W,
}

impl<W: Write> NTriplesFormatter<W> {
    /// Builds a new formatter from a `Write` implementation
    pub fn new(write: W) -> Self {
        Self { write }
    }

    /// Finishes writing and returns the underlying `Write`
    pub fn finish(self) -> W {
        self.write
    }

    fn write_term(&mut self, term: &RdfTerm) -> Result<(), io::Error> {
        match term {
            RdfTerm::Iri(_) | RdfTerm::BlankNode(_) => write!(self.write, "{}", term),
            RdfTerm::Literal(literal) => {
                write!(self.write, "\"")?;
                for c in escape(literal.value()) {
                    write!(self.write, "{}", c)?;
                }
                write!(self.write, "\"")?;
                match literal {
                    Literal::Simple { .. } => Ok(()),
                    Literal::LanguageTagged { language, .. } => {
                        write!(self.write, "@{}", language)
                    }
                    Literal::Typed { datatype, .. } => write!(self.write, "^^<{}>", datatype),
                }
            }
        }
    }
}

impl<W: Write> TriplesFormatter for NTriplesFormatter<W> {
    type Error = io::Error;

    fn format(&mut self, triple: &Triple) -> Result<(), io::Error> {
        self.write_term(&triple.subject)?;
        write!(self.write, " ")?;
        self.write_term(&triple.predicate)?;
        write!(self.write, " ")?;
        self.write_term(&triple.object)?;
        writeln!(self.write, " .")
    }
}

fn escape(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(EscapeNTriples::new)
}

/// A customized version of EscapeDefault of the Rust standard library
struct EscapeNTriples {
    state: EscapeNTriplesState,
}

enum EscapeNTriplesState {
    Done,
    Char(char),
    Backslash(char),
}

impl EscapeNTriples {
    fn new(c: char) -> Self {
        Self {
            state: match c {
                '\n' => EscapeNTriplesState::Backslash('n'),
                '\r' => EscapeNTriplesState::Backslash('r'),
                '\t' => EscapeNTriplesState::Backslash('t'),
                '"' => EscapeNTriplesState::Backslash('"'),
                '\\' => EscapeNTriplesState::Backslash('\\'),
                c => EscapeNTriplesState::Char(c),
            },
        }
    }
}

impl Iterator for EscapeNTriples {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self.state {
            EscapeNTriplesState::Backslash(c) => {
                self.state = EscapeNTriplesState::Char(c);
                Some('\\')
            }
            EscapeNTriplesState::Char(c) => {
                self.state = EscapeNTriplesState::Done;
                Some(c)
            }
            EscapeNTriplesState::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for EscapeNTriples {
    fn len(&self) -> usize {
        match self.state {
            EscapeNTriplesState::Done => 0,
            EscapeNTriplesState::Char(_) => 1,
            EscapeNTriplesState::Backslash(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_literal_values() {
        assert_eq!(
            "a\\\\b\\\"c\\nd\\re\\tf",
            escape("a\\b\"c\nd\re\tf").collect::<String>()
        );
        assert_eq!("\u{E9}t\u{E9}", escape("\u{E9}t\u{E9}").collect::<String>());
    }

    #[test]
    fn formats_annotations() -> Result<(), io::Error> {
        let mut formatter = NTriplesFormatter::new(Vec::default());
        formatter.format(&Triple {
            subject: RdfTerm::BlankNode("b0".into()),
            predicate: RdfTerm::Iri("http://example.com/p".into()),
            object: Literal::LanguageTagged {
                value: "chat".into(),
                language: "fr".into(),
            }
            .into(),
        })?;
        formatter.format(&Triple {
            subject: RdfTerm::BlankNode("b0".into()),
            predicate: RdfTerm::Iri("http://example.com/p".into()),
            object: Literal::Typed {
                value: "1".into(),
                datatype: "http://www.w3.org/2001/XMLSchema#integer".into(),
            }
            .into(),
        })?;
        assert_eq!(
            "_:b0 <http://example.com/p> \"chat\"@fr .\n_:b0 <http://example.com/p> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n",
            String::from_utf8(formatter.finish()).unwrap()
        );
        Ok(())
    }
}
