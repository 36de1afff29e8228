use std::collections::HashMap;
use std::hash::Hash;

use crate::error::ClassifierError;

/// Empirical label distribution learned at fit time.
///
/// Classes are kept in the order they were first seen in the training
/// labels. Each class appears once and the probabilities sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDistribution<L> {
    classes: Vec<L>,
    counts: Vec<usize>,
    probabilities: Vec<f64>,
    total: usize,
}

impl<L> LabelDistribution<L>
where
    L: Clone + Eq + Hash,
{
    /// Count every label in `y` and normalize by the total.
    ///
    /// Fails with `InvalidInput` when `y` is empty, since there is no count
    /// to normalize by.
    pub fn from_labels(y: &[L]) -> Result<Self, ClassifierError> {
        if y.is_empty() {
            return Err(ClassifierError::InvalidInput(
                "cannot fit a label distribution on an empty label sequence".to_string(),
            ));
        }

        let mut index: HashMap<&L, usize> = HashMap::new();
        let mut classes = Vec::new();
        let mut counts = Vec::new();

        for label in y {
            match index.get(label) {
                Some(&i) => counts[i] += 1,
                None => {
                    index.insert(label, classes.len());
                    classes.push(label.clone());
                    counts.push(1usize);
                }
            }
        }

        let total = y.len();
        let probabilities = counts
            .iter()
            .map(|&c| c as f64 / total as f64)
            .collect();

        Ok(LabelDistribution {
            classes,
            counts,
            probabilities,
            total,
        })
    }

    /// Probability of `label`, or `None` if it was never observed.
    pub fn probability(&self, label: &L) -> Option<f64> {
        self.position(label).map(|i| self.probabilities[i])
    }

    /// Number of occurrences of `label` in the fitting labels.
    pub fn count(&self, label: &L) -> Option<usize> {
        self.position(label).map(|i| self.counts[i])
    }

    pub fn contains(&self, label: &L) -> bool {
        self.position(label).is_some()
    }

    pub(crate) fn position(&self, label: &L) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }
}

impl<L> LabelDistribution<L> {
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of labels the distribution was fitted on.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(label, probability)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, f64)> + '_ {
        self.classes.iter().zip(self.probabilities.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels_keeps_first_seen_order() {
        let y = vec!["cat", "dog", "cat", "cat"];
        let dist = LabelDistribution::from_labels(&y).unwrap();

        assert_eq!(dist.classes(), &["cat", "dog"]);
        assert_eq!(dist.counts(), &[3, 1]);
        assert_eq!(dist.total(), 4);
        assert!((dist.probability(&"cat").unwrap() - 0.75).abs() < 1e-12);
        assert!((dist.probability(&"dog").unwrap() - 0.25).abs() < 1e-12);
        assert_eq!(dist.probability(&"bird"), None);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let y: Vec<u32> = (0..1000).map(|i| (i * 7919) % 13).collect();
        let dist = LabelDistribution::from_labels(&y).unwrap();
        let sum: f64 = dist.probabilities().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(dist.len(), 13);
        assert!(dist.probabilities().iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_empty_labels_rejected() {
        let y: Vec<i32> = vec![];
        let err = LabelDistribution::from_labels(&y).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput(_)));
    }

    #[test]
    fn test_single_class() {
        let dist = LabelDistribution::from_labels(&[42, 42, 42]).unwrap();
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.probability(&42), Some(1.0));
        assert!(dist.contains(&42));
        assert!(!dist.contains(&7));
    }
}
