//! This crate provides basic interfaces and data structures for the trine N-Triples reader.
//!
//! It is currently used by the [`trine_ntriples`](https://docs.rs/trine_ntriples/) crate.
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

pub mod formatter;
pub mod model;
pub mod parser;
