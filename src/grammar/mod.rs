//! Verb-centred grammar features read off dependency trees.
//!
//! Trees come from an external parser (see [`crate::io::conll`] for loading
//! them). The helpers here only locate verb nodes and turn their
//! morphological annotation into a flat feature map.
pub mod extract;
pub mod tree;

pub use extract::{extract_grammar, find_verb_node, Grammar};
pub use tree::{ConlluRow, DependencyNode, DependencyTree};
