//! IO utilities for loading dependency parses produced by external parsers.

pub mod conll;

pub use conll::{read_conllu, read_conllu_str};
