//! Sample containers accepted as the feature input `X`.
//!
//! The baseline never looks at feature values, only at how many samples were
//! passed in. `Samples` captures exactly that, so plain vectors, slices and
//! `ndarray` matrices can all be handed to a model.
use std::collections::VecDeque;

use ndarray::{ArrayBase, Data, Dimension};

pub trait Samples {
    /// Number of samples (rows) in the container.
    fn n_samples(&self) -> usize;
}

impl<T> Samples for [T] {
    fn n_samples(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Samples for [T; N] {
    fn n_samples(&self) -> usize {
        N
    }
}

impl<T> Samples for Vec<T> {
    fn n_samples(&self) -> usize {
        self.len()
    }
}

impl<T> Samples for VecDeque<T> {
    fn n_samples(&self) -> usize {
        self.len()
    }
}

/// Rows are the first axis. A zero-dimensional array holds no samples.
impl<S, D> Samples for ArrayBase<S, D>
where
    S: Data,
    D: Dimension,
{
    fn n_samples(&self) -> usize {
        self.shape().first().copied().unwrap_or(0)
    }
}
