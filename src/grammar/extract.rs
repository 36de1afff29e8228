use std::collections::BTreeMap;

use crate::error::GrammarError;
use crate::grammar::tree::{DependencyNode, DependencyTree};

/// Morphological features of a node plus its part of speech under `"POS"`.
pub type Grammar = BTreeMap<String, String>;

pub const VERB_TAG: &str = "VERB";
pub const POS_KEY: &str = "POS";

/// First node, in tree order, whose word is `word` and whose coarse tag is
/// `VERB`.
pub fn find_verb_node<'a>(word: &str, tree: &'a DependencyTree) -> Option<&'a DependencyNode> {
    tree.nodes()
        .find(|node| node.word.as_deref() == Some(word) && node.ctag == VERB_TAG)
}

/// Parse the node's `feats` field into a map and add its coarse tag as
/// `"POS"`.
///
/// A `feats` value of `_` contributes no entries. Every other segment must
/// contain exactly one `=`.
pub fn extract_grammar(node: &DependencyNode) -> Result<Grammar, GrammarError> {
    let mut grammar = Grammar::new();

    if node.feats != DependencyNode::NO_FEATURES {
        for segment in node.feats.split('|') {
            let (key, value) = split_feature(segment)?;
            grammar.insert(key.to_string(), value.to_string());
        }
    }

    grammar.insert(POS_KEY.to_string(), node.ctag.clone());
    Ok(grammar)
}

fn split_feature(segment: &str) -> Result<(&str, &str), GrammarError> {
    let mut parts = segment.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok((key, value)),
        _ => Err(GrammarError::MalformedFeature {
            segment: segment.to_string(),
        }),
    }
}
