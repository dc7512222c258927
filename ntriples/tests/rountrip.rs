use std::io::Cursor;
use trine_api::formatter::TriplesFormatter;
use trine_api::model::*;
use trine_api::parser::*;
use trine_ntriples::*;

#[test]
fn ntriples_roundtrip() -> Result<(), NTriplesError> {
    let graph = example_graph();

    let mut formatter = NTriplesFormatter::new(Vec::default());
    for t in &graph {
        formatter.format(t)?;
    }
    let nt = formatter.finish();

    let mut parsed = Vec::new();
    NTriplesParser::new(Cursor::new(&nt)).parse_all(&mut |t| -> Result<(), NTriplesError> {
        parsed.push(t);
        Ok(())
    })?;

    assert_eq!(graph, parsed);

    Ok(())
}

#[test]
fn display_roundtrip() -> Result<(), NTriplesError> {
    // Display does not escape, so only values without quotes or line breaks survive it.
    let data = "<http://example.com/foo> <http://example.com/bar> _:foobar .\n_:foobar <http://example.com/bar> \"chat\"@fr .\n<http://example.com/foo> <http://example.com/bar> \"1\"^^<http://example.com/dt> .\n";

    let mut output = String::new();
    for triple in NTriplesParser::new(data.as_bytes()).into_iter() {
        output.push_str(&triple?.to_string());
        output.push('\n');
    }

    assert_eq!(data, output);

    Ok(())
}

fn example_graph() -> Vec<Triple> {
    let foo = RdfTerm::Iri("http://example.com/foo".to_owned());
    let bar = RdfTerm::Iri("http://example.com/bar".to_owned());
    let bnode = RdfTerm::BlankNode("foobar".to_owned());
    let simple: RdfTerm = Literal::Simple {
        value: "simp\"le\\ \t \r\n".to_owned(),
    }
    .into();
    let language: RdfTerm = Literal::LanguageTagged {
        value: "sim\"le".to_owned(),
        language: "en".to_owned(),
    }
    .into();
    let datatype: RdfTerm = Literal::Typed {
        value: "sim\"le".to_owned(),
        datatype: "http://example.com/dt".to_owned(),
    }
    .into();
    vec![
        Triple {
            subject: foo.clone(),
            predicate: bar.clone(),
            object: bar.clone(),
        },
        Triple {
            subject: foo.clone(),
            predicate: bar.clone(),
            object: bnode.clone(),
        },
        Triple {
            subject: foo.clone(),
            predicate: bar.clone(),
            object: simple,
        },
        Triple {
            subject: foo.clone(),
            predicate: bar.clone(),
            object: language,
        },
        Triple {
            subject: foo.clone(),
            predicate: foo,
            object: datatype,
        },
        Triple {
            subject: bar.clone(),
            predicate: bar.clone(),
            object: bar.clone(),
        },
        Triple {
            subject: bnode,
            predicate: bar.clone(),
            object: bar,
        },
    ]
}
