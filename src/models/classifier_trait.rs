use std::collections::BTreeMap;

use crate::error::ClassifierError;
use crate::samples::Samples;

/// Hyper-parameters reported by a model for generic tooling such as
/// cross-validation harnesses.
pub type ModelParams = BTreeMap<String, serde_json::Value>;

/// A small trait abstraction for classifier models, so the baseline can be
/// boxed and swapped in wherever a real model is evaluated.
///
/// `x` is taken as `&dyn Samples`; implementations are free to ignore its
/// contents.
pub trait ClassifierModel<L> {
    /// Fit the model on features `x` and labels `y`.
    fn fit(&mut self, x: &dyn Samples, y: &[L]) -> Result<(), ClassifierError>;

    /// Predict one label per sample in `x`.
    fn predict(&mut self, x: &dyn Samples) -> Result<Vec<L>, ClassifierError>;

    /// Per-sample class probabilities, one column per class in the model's
    /// class order.
    fn predict_proba(&self, x: &dyn Samples) -> Result<Vec<Vec<f64>>, ClassifierError>;

    /// Parameter introspection.
    fn get_params(&self, deep: bool) -> ModelParams;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
