use std::hash::Hash;

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ClassifierError;
use crate::models::classifier_trait::{ClassifierModel, ModelParams};
use crate::models::distribution::LabelDistribution;
use crate::samples::Samples;

/// Fitted state: the distribution and a sampler prepared from its weights.
#[derive(Debug, Clone)]
struct Fitted<L> {
    distribution: LabelDistribution<L>,
    sampler: WeightedIndex<f64>,
}

/// Stratified random baseline.
///
/// `fit` learns how often each label occurs; `predict` ignores the features
/// and draws every label independently from that distribution. Scoring a
/// real model against this gives the accuracy achievable by chance alone.
///
/// The random source is owned by the instance. Use [`with_seed`] or
/// [`with_rng`] for reproducible predictions.
///
/// [`with_seed`]: BaselineClassifier::with_seed
/// [`with_rng`]: BaselineClassifier::with_rng
#[derive(Debug, Clone)]
pub struct BaselineClassifier<L, R = StdRng> {
    fitted: Option<Fitted<L>>,
    rng: R,
}

impl<L> BaselineClassifier<L, StdRng> {
    /// Create an unfitted classifier seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<L> Default for BaselineClassifier<L, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R> BaselineClassifier<L, R> {
    pub fn with_rng(rng: R) -> Self {
        BaselineClassifier { fitted: None, rng }
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The fitted label distribution, if any.
    pub fn distribution(&self) -> Option<&LabelDistribution<L>> {
        self.fitted.as_ref().map(|f| &f.distribution)
    }

    /// Classes in the order predictions and probabilities refer to them.
    /// Empty before the first fit.
    pub fn classes(&self) -> &[L] {
        self.fitted
            .as_ref()
            .map(|f| f.distribution.classes())
            .unwrap_or(&[])
    }

    /// Always empty: the baseline has no hyper-parameters.
    pub fn get_params(&self, _deep: bool) -> ModelParams {
        ModelParams::new()
    }

    fn fitted(&self) -> Result<&Fitted<L>, ClassifierError> {
        self.fitted.as_ref().ok_or(ClassifierError::Uninitialized)
    }
}

impl<L, R> BaselineClassifier<L, R>
where
    L: Clone + Eq + Hash,
    R: Rng,
{
    /// Learn the label distribution of `y`. `x` is not inspected.
    ///
    /// Replaces any previously fitted distribution. On error the previous
    /// state is kept.
    pub fn fit<X>(&mut self, x: &X, y: &[L]) -> Result<(), ClassifierError>
    where
        X: Samples + ?Sized,
    {
        if x.n_samples() != y.len() {
            log::trace!(
                "Fitting on {} labels with {} feature rows; features are ignored",
                y.len(),
                x.n_samples()
            );
        }

        let distribution = LabelDistribution::from_labels(y)?;
        let sampler = WeightedIndex::new(distribution.probabilities())
            .map_err(|e| ClassifierError::InvalidInput(e.to_string()))?;

        log::debug!(
            "Fitted baseline on {} labels across {} classes",
            distribution.total(),
            distribution.len()
        );

        self.fitted = Some(Fitted {
            distribution,
            sampler,
        });
        Ok(())
    }

    /// Draw one label per sample in `x` from the fitted distribution.
    pub fn predict<X>(&mut self, x: &X) -> Result<Vec<L>, ClassifierError>
    where
        X: Samples + ?Sized,
    {
        let fitted = self.fitted.as_ref().ok_or(ClassifierError::Uninitialized)?;
        Ok(draw(fitted, x.n_samples(), &mut self.rng))
    }
}

impl<L, R> BaselineClassifier<L, R>
where
    L: Clone,
{
    /// Like [`predict`](Self::predict) but samples from `rng` instead of the
    /// owned random source.
    pub fn predict_with_rng<X, G>(&self, x: &X, rng: &mut G) -> Result<Vec<L>, ClassifierError>
    where
        X: Samples + ?Sized,
        G: Rng + ?Sized,
    {
        Ok(draw(self.fitted()?, x.n_samples(), rng))
    }

    /// The class prior, repeated once per sample in `x`.
    pub fn predict_proba<X>(&self, x: &X) -> Result<Vec<Vec<f64>>, ClassifierError>
    where
        X: Samples + ?Sized,
    {
        let probabilities = self.fitted()?.distribution.probabilities();
        Ok(vec![probabilities.to_vec(); x.n_samples()])
    }
}

fn draw<L, G>(fitted: &Fitted<L>, n: usize, rng: &mut G) -> Vec<L>
where
    L: Clone,
    G: Rng + ?Sized,
{
    let classes = fitted.distribution.classes();
    (0..n)
        .map(|_| classes[fitted.sampler.sample(rng)].clone())
        .collect()
}

impl<L, R> ClassifierModel<L> for BaselineClassifier<L, R>
where
    L: Clone + Eq + Hash,
    R: Rng,
{
    fn fit(&mut self, x: &dyn Samples, y: &[L]) -> Result<(), ClassifierError> {
        BaselineClassifier::fit(self, x, y)
    }

    fn predict(&mut self, x: &dyn Samples) -> Result<Vec<L>, ClassifierError> {
        BaselineClassifier::predict(self, x)
    }

    fn predict_proba(&self, x: &dyn Samples) -> Result<Vec<Vec<f64>>, ClassifierError> {
        BaselineClassifier::predict_proba(self, x)
    }

    fn get_params(&self, deep: bool) -> ModelParams {
        BaselineClassifier::get_params(self, deep)
    }

    fn name(&self) -> &str {
        "stratified_baseline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_predict_before_fit() {
        let mut clf: BaselineClassifier<i32> = BaselineClassifier::with_seed(0);
        assert_eq!(clf.predict(&[1, 2, 3]), Err(ClassifierError::Uninitialized));
        assert_eq!(clf.predict_proba(&[1]), Err(ClassifierError::Uninitialized));
        assert!(clf.classes().is_empty());
        assert!(!clf.is_fitted());
    }

    #[test]
    fn test_fit_and_predict_scenario() {
        let mut clf = BaselineClassifier::with_seed(7);
        let y = vec!["cat", "dog", "cat", "cat"];
        clf.fit(&[(); 4], &y).unwrap();

        let dist = clf.distribution().unwrap();
        assert_eq!(dist.classes(), &["cat", "dog"]);
        assert!((dist.probabilities()[0] - 0.75).abs() < 1e-12);
        assert!((dist.probabilities()[1] - 0.25).abs() < 1e-12);

        let preds = clf.predict(&[0, 0]).unwrap();
        assert_eq!(preds.len(), 2);
        assert!(preds.iter().all(|p| *p == "cat" || *p == "dog"));
    }

    #[test]
    fn test_refit_replaces_distribution() {
        let mut clf = BaselineClassifier::with_seed(1);
        clf.fit(&[0; 3], &[1, 1, 2]).unwrap();
        clf.fit(&[0; 2], &[3, 4]).unwrap();

        assert_eq!(clf.classes(), &[3, 4]);
        let seen: HashSet<i32> = clf.predict(&vec![0; 500]).unwrap().into_iter().collect();
        assert!(seen.is_subset(&[3, 4].into_iter().collect()));
    }

    #[test]
    fn test_failed_fit_keeps_previous_state() {
        let mut clf = BaselineClassifier::with_seed(3);
        clf.fit(&[0; 2], &['a', 'b']).unwrap();
        let empty: [char; 0] = [];
        assert!(matches!(
            clf.fit(&empty, &empty),
            Err(ClassifierError::InvalidInput(_))
        ));
        assert!(clf.is_fitted());
        assert_eq!(clf.classes(), &['a', 'b']);
    }

    #[test]
    fn test_same_seed_same_predictions() {
        let y = vec![0, 1, 1, 2, 2, 2];
        let mut a = BaselineClassifier::with_seed(99);
        let mut b = BaselineClassifier::with_seed(99);
        a.fit(&y, &y).unwrap();
        b.fit(&y, &y).unwrap();
        let x = vec![(); 64];
        assert_eq!(a.predict(&x).unwrap(), b.predict(&x).unwrap());
    }

    #[test]
    fn test_predict_with_rng_leaves_owned_rng_alone() {
        let y = vec![0, 1];
        let mut a = BaselineClassifier::with_seed(5);
        let mut b = BaselineClassifier::with_seed(5);
        a.fit(&y, &y).unwrap();
        b.fit(&y, &y).unwrap();

        let mut other = StdRng::seed_from_u64(123);
        let _ = a.predict_with_rng(&[(); 32], &mut other).unwrap();

        let x = [(); 32];
        assert_eq!(a.predict(&x).unwrap(), b.predict(&x).unwrap());
    }

    #[test]
    fn test_predict_proba_repeats_prior() {
        let mut clf = BaselineClassifier::with_seed(0);
        clf.fit(&[(); 4], &["x", "y", "y", "y"]).unwrap();
        let proba = clf.predict_proba(&[(); 3]).unwrap();
        assert_eq!(proba.len(), 3);
        for row in proba {
            assert_eq!(row, vec![0.25, 0.75]);
        }
    }

    #[test]
    fn test_get_params_is_empty() {
        let mut clf = BaselineClassifier::with_seed(0);
        assert!(clf.get_params(true).is_empty());
        clf.fit(&[(); 2], &[1, 2]).unwrap();
        let _ = clf.predict(&[(); 10]).unwrap();
        assert!(clf.get_params(false).is_empty());
        assert!(clf.get_params(true).is_empty());
    }
}
