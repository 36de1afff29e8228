use std::collections::BTreeMap;

use crate::grammar::extract::find_verb_node;

/// A single node of a dependency tree produced by an external parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    /// Token position in the sentence; 0 is the synthetic root.
    pub address: usize,
    pub word: Option<String>,
    pub lemma: Option<String>,
    /// Coarse part-of-speech tag (UPOS).
    pub ctag: String,
    /// Fine-grained, language specific tag (XPOS).
    pub tag: String,
    /// Morphological features, `_` or `Key=Value|Key=Value`.
    pub feats: String,
    pub head: Option<usize>,
    pub rel: String,
}

impl DependencyNode {
    pub const NO_FEATURES: &'static str = "_";
    pub const ROOT_TAG: &'static str = "TOP";

    /// The synthetic root every tree starts with.
    pub fn root() -> Self {
        DependencyNode {
            address: 0,
            word: None,
            lemma: None,
            ctag: Self::ROOT_TAG.to_string(),
            tag: Self::ROOT_TAG.to_string(),
            feats: Self::NO_FEATURES.to_string(),
            head: None,
            rel: String::new(),
        }
    }

    /// A token node with no lemma, tag or attachment information.
    pub fn token(address: usize, word: &str, ctag: &str, feats: &str) -> Self {
        DependencyNode {
            address,
            word: Some(word.to_string()),
            lemma: None,
            ctag: ctag.to_string(),
            tag: ctag.to_string(),
            feats: feats.to_string(),
            head: None,
            rel: String::new(),
        }
    }
}

/// Dependency tree keyed by node address; iteration follows address order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTree {
    nodes: BTreeMap<usize, DependencyNode>,
}

impl DependencyTree {
    /// A tree holding only the root node.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(0, DependencyNode::root());
        DependencyTree { nodes }
    }

    /// Insert `node` at its address, returning any node it replaced.
    pub fn insert(&mut self, node: DependencyNode) -> Option<DependencyNode> {
        self.nodes.insert(node.address, node)
    }

    pub fn get(&self, address: usize) -> Option<&DependencyNode> {
        self.nodes.get(&address)
    }

    pub fn root(&self) -> Option<&DependencyNode> {
        self.nodes.get(&0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &DependencyNode> + '_ {
        self.nodes.values()
    }

    /// Nodes whose head is `address`, in address order.
    pub fn dependents(&self, address: usize) -> impl Iterator<Item = &DependencyNode> + '_ {
        self.nodes
            .values()
            .filter(move |node| node.head == Some(address))
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for DependencyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<DependencyNode> for DependencyTree {
    fn from_iter<I: IntoIterator<Item = DependencyNode>>(iter: I) -> Self {
        let mut tree = DependencyTree::new();
        for node in iter {
            tree.insert(node);
        }
        tree
    }
}

/// One parsed sentence: its surface text and dependency tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConlluRow {
    pub text: String,
    pub tree: DependencyTree,
}

impl ConlluRow {
    pub fn new(text: impl Into<String>, tree: DependencyTree) -> Self {
        ConlluRow {
            text: text.into(),
            tree,
        }
    }

    pub fn find_verb_node(&self, word: &str) -> Option<&DependencyNode> {
        find_verb_node(word, &self.tree)
    }
}
