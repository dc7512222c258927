//! Data structures for the terms and triples of the [N-Triples](https://www.w3.org/TR/n-triples/) syntax.
//!
//! The string formatters of these types write values as they are, without any escaping.
//! Use a [`TriplesFormatter`](../formatter/trait.TriplesFormatter.html) implementation
//! to get output that is always valid N-Triples.

use std::fmt;

/// The kind of an [`RdfTerm`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub enum TermKind {
    Iri,
    BlankNode,
    Literal,
}

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// A literal carries either a language tag or a datatype IRI, never both.
///
/// ```
/// use trine_api::model::Literal;
///
/// assert_eq!(
///     "\"1999-01-01\"^^<http://www.w3.org/2001/XMLSchema#date>",
///     Literal::Typed {
///         value: "1999-01-01".into(),
///         datatype: "http://www.w3.org/2001/XMLSchema#date".into()
///     }.to_string()
/// );
///
/// assert_eq!(
///     "\"chat\"@fr",
///     Literal::LanguageTagged { value: "chat".into(), language: "fr".into() }.to_string()
/// );
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Literal {
    /// A [simple literal](https://www.w3.org/TR/rdf11-concepts/#dfn-simple-literal) without datatype or language form.
    Simple {
        /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
        value: String,
    },
    /// A [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)
    LanguageTagged {
        /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
        value: String,
        /// The [language tag](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tag).
        language: String,
    },
    /// A literal with an explicit datatype
    Typed {
        /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
        value: String,
        /// The [datatype IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri), without angle brackets.
        datatype: String,
    },
}

impl Literal {
    /// The lexical form, with escapes resolved.
    pub fn value(&self) -> &str {
        match self {
            Literal::Simple { value }
            | Literal::LanguageTagged { value, .. }
            | Literal::Typed { value, .. } => value,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Literal::LanguageTagged { language, .. } => Some(language),
            _ => None,
        }
    }

    pub fn datatype(&self) -> Option<&str> {
        match self {
            Literal::Typed { datatype, .. } => Some(datatype),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Simple { value } => write!(f, "\"{}\"", value),
            Literal::LanguageTagged { value, language } => write!(f, "\"{}\"@{}", value, language),
            Literal::Typed { value, datatype } => write!(f, "\"{}\"^^<{}>", value, datatype),
        }
    }
}

/// An RDF [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term).
///
/// It is the union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri), [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node) and [literals](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// ```
/// use trine_api::model::{RdfTerm, TermKind};
///
/// let node = RdfTerm::BlankNode("anon".into());
/// assert_eq!(TermKind::BlankNode, node.kind());
/// assert_eq!("anon", node.value());
/// assert_eq!("_:anon", node.to_string());
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum RdfTerm {
    /// An IRI, without its angle brackets.
    Iri(String),
    /// A blank node label, without its `_:` prefix.
    BlankNode(String),
    Literal(Literal),
}

impl RdfTerm {
    pub fn kind(&self) -> TermKind {
        match self {
            RdfTerm::Iri(_) => TermKind::Iri,
            RdfTerm::BlankNode(_) => TermKind::BlankNode,
            RdfTerm::Literal(_) => TermKind::Literal,
        }
    }

    /// The decoded lexical form of the term: the IRI text, the blank node label or the literal value.
    pub fn value(&self) -> &str {
        match self {
            RdfTerm::Iri(iri) => iri,
            RdfTerm::BlankNode(id) => id,
            RdfTerm::Literal(literal) => literal.value(),
        }
    }

    /// The language tag, only set on language-tagged literals.
    pub fn language(&self) -> Option<&str> {
        match self {
            RdfTerm::Literal(literal) => literal.language(),
            _ => None,
        }
    }

    /// The datatype IRI, only set on typed literals.
    pub fn datatype(&self) -> Option<&str> {
        match self {
            RdfTerm::Literal(literal) => literal.datatype(),
            _ => None,
        }
    }

    pub fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }
}

impl fmt::Display for RdfTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfTerm::Iri(iri) => write!(f, "<{}>", iri),
            RdfTerm::BlankNode(id) => write!(f, "_:{}", id),
            RdfTerm::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<Literal> for RdfTerm {
    fn from(literal: Literal) -> Self {
        RdfTerm::Literal(literal)
    }
}

/// A [RDF triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple).
///
/// The default string formatter is returning a N-Triples line, without escaping literal values.
///
/// ```
/// use trine_api::model::{RdfTerm, Triple};
///
/// assert_eq!(
///     "<http://example.com/foo> <http://schema.org/sameAs> <http://example.com/foo> .",
///     Triple {
///         subject: RdfTerm::Iri("http://example.com/foo".into()),
///         predicate: RdfTerm::Iri("http://schema.org/sameAs".into()),
///         object: RdfTerm::Iri("http://example.com/foo".into()),
///     }.to_string()
/// )
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Triple {
    pub subject: RdfTerm,
    pub predicate: RdfTerm,
    pub object: RdfTerm,
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
