use std::error::Error;
use std::fmt;

/// Errors raised while fitting or sampling from a baseline classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// The input cannot be used, e.g. an empty label sequence at fit time.
    InvalidInput(String),
    /// `predict` was called before any successful `fit`.
    Uninitialized,
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifierError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
            ClassifierError::Uninitialized => {
                write!(f, "Classifier has not been fitted; call fit before predict")
            }
        }
    }
}

impl Error for ClassifierError {}

/// Errors raised while reading morphological features off a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A `|`-separated feature segment that is not a single `key=value` pair.
    MalformedFeature { segment: String },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::MalformedFeature { segment } => {
                write!(f, "Malformed feature segment '{}': expected key=value", segment)
            }
        }
    }
}

impl Error for GrammarError {}
