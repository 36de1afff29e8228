pub mod baseline;
pub mod distribution;

pub mod classifier_trait;
pub mod factory;

pub use baseline::BaselineClassifier;
pub use classifier_trait::{ClassifierModel, ModelParams};
pub use distribution::LabelDistribution;
