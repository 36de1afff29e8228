use std::collections::HashMap;
use std::hash::Hash;

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::ClassifierError;
use crate::models::distribution::LabelDistribution;

/// Count labels, keeping classes in first-seen order.
pub fn label_counts<L>(y: &[L]) -> Vec<(L, usize)>
where
    L: Clone + Eq + Hash,
{
    let mut index: HashMap<&L, usize> = HashMap::new();
    let mut counts: Vec<(L, usize)> = Vec::new();
    for label in y {
        match index.get(label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label, counts.len());
                counts.push((label.clone(), 1));
            }
        }
    }
    counts
}

/// Relative label frequencies of `y`.
pub fn empirical_distribution<L>(y: &[L]) -> Result<LabelDistribution<L>, ClassifierError>
where
    L: Clone + Eq + Hash,
{
    LabelDistribution::from_labels(y)
}

/// Expected accuracy of a stratified random guesser.
///
/// When both the true labels and the guesses follow `dist`, a guess is right
/// with probability `sum(p_i^2)`. Any useful model should beat this.
pub fn expected_accuracy<L>(dist: &LabelDistribution<L>) -> f64 {
    dist.probabilities().iter().map(|p| p * p).sum()
}

/// Result of a Pearson chi-square goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoodnessOfFit {
    pub statistic: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
}

/// Test whether `predictions` are consistent with being drawn from `dist`.
///
/// Uses Pearson's statistic `sum((O - E)^2 / E)` with `k - 1` degrees of
/// freedom. A small p-value means the predictions do not follow `dist`.
///
/// # Errors
///
/// `InvalidInput` when `predictions` is empty, when `dist` has fewer than two
/// classes, or when a prediction is not one of the classes of `dist`.
pub fn chi_square_goodness_of_fit<L>(
    predictions: &[L],
    dist: &LabelDistribution<L>,
) -> Result<GoodnessOfFit, ClassifierError>
where
    L: Clone + Eq + Hash,
{
    if predictions.is_empty() {
        return Err(ClassifierError::InvalidInput(
            "goodness-of-fit requires at least one prediction".to_string(),
        ));
    }
    if dist.len() < 2 {
        return Err(ClassifierError::InvalidInput(format!(
            "goodness-of-fit requires at least two classes, got {}",
            dist.len()
        )));
    }

    let mut observed = vec![0usize; dist.len()];
    for (i, label) in predictions.iter().enumerate() {
        let class = dist.position(label).ok_or_else(|| {
            ClassifierError::InvalidInput(format!(
                "prediction at index {} is not a class of the distribution",
                i
            ))
        })?;
        observed[class] += 1;
    }

    let n = predictions.len() as f64;
    let statistic = observed
        .iter()
        .zip(dist.probabilities())
        .map(|(&o, &p)| {
            let expected = p * n;
            let diff = o as f64 - expected;
            diff * diff / expected
        })
        .sum::<f64>();

    let degrees_of_freedom = dist.len() - 1;
    let chi2 = ChiSquared::new(degrees_of_freedom as f64)
        .map_err(|e| ClassifierError::InvalidInput(e.to_string()))?;
    let p_value = (1.0 - chi2.cdf(statistic)).clamp(0.0, 1.0);

    log::debug!(
        "chi-square goodness-of-fit: statistic={:.4}, df={}, p={:.4}",
        statistic,
        degrees_of_freedom,
        p_value
    );

    Ok(GoodnessOfFit {
        statistic,
        degrees_of_freedom,
        p_value,
    })
}
