#![no_main]
use libfuzzer_sys::fuzz_target;
use trine_api::parser::TripleParser;
use trine_ntriples::{NTriplesError, NTriplesParser};

fuzz_target!(|data: &[u8]| {
    let _ = NTriplesParser::new(data).parse_all(&mut |_| Ok(()) as Result<(), NTriplesError>);
});
