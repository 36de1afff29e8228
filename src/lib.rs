//! stratified-baseline: a chance-level classifier and grammar feature helpers.
//!
//! The crate provides a stratified random baseline (`models::baseline`) that
//! learns the label distribution of the training data and predicts by drawing
//! from it, ignoring features. It gives the score any real model must beat.
//!
//! Alongside it, `grammar` reads verb-centred morphological features off
//! dependency trees produced by an external parser, and `io` loads those
//! trees from CoNLL-U files. The two halves do not depend on each other.
pub mod config;
pub mod error;
pub mod grammar;
pub mod io;
pub mod models;
pub mod samples;
pub mod stats;

pub use error::{ClassifierError, GrammarError};
pub use models::{BaselineClassifier, ClassifierModel, LabelDistribution};
pub use samples::Samples;
