//! Bagged ensemble of CART trees.
//!
//! Tree `i` draws its bootstrap sample and its per-node feature shuffles from
//! `StdRng::seed_from_u64(seed + i)`. Trees are fitted in parallel with rayon
//! and collected in index order, so the fitted forest does not depend on
//! thread scheduling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::tree::{DecisionTree, TreeParams};
use crate::types::Features;

#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_classes: usize,
}

impl RandomForest {
    /// Fit `n_estimators` trees on bootstrap resamples of `(x, y)`.
    ///
    /// Callers guarantee `x` is non-empty, `x.len() == y.len()` and every
    /// label is `< n_classes`.
    pub fn fit(
        x: &[Features],
        y: &[usize],
        n_classes: usize,
        n_estimators: usize,
        params: &TreeParams,
        seed: u64,
    ) -> Self {
        let n = x.len();
        let trees: Vec<DecisionTree> = (0..n_estimators)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                DecisionTree::fit(x, y, &bootstrap, n_classes, params, &mut rng)
            })
            .collect();

        Self { trees, n_classes }
    }

    /// Mean of the per-tree leaf distributions. Sums to 1.
    pub fn predict_proba(&self, features: &Features) -> Vec<f64> {
        let mut proba = vec![0.0; self.n_classes];
        if self.trees.is_empty() {
            return proba;
        }
        for tree in &self.trees {
            for (acc, p) in proba.iter_mut().zip(tree.predict_proba(features)) {
                *acc += p;
            }
        }
        let n_trees = self.trees.len() as f64;
        for p in &mut proba {
            *p /= n_trees;
        }
        proba
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(DecisionTree::depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> (Vec<Features>, Vec<usize>) {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for i in 0..10 {
            let v = f64::from(i);
            x.push([v, 100.0 - v, 1.0, 1.0, 1.0, 1.0, 1.0]);
            y.push(0);
            x.push([v + 50.0, 50.0 - v, 1.0, 1.0, 1.0, 1.0, 1.0]);
            y.push(1);
        }
        (x, y)
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (x, y) = toy();
        let forest = RandomForest::fit(&x, &y, 2, 25, &TreeParams::default(), 42);
        assert_eq!(forest.n_trees(), 25);
        let p = forest.predict_proba(&[3.0, 97.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(p.len(), 2);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(p[0] > p[1]);
    }

    #[test]
    fn test_same_seed_same_forest_output() {
        let (x, y) = toy();
        let query = [30.0, 60.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let a = RandomForest::fit(&x, &y, 2, 15, &TreeParams::default(), 9);
        let b = RandomForest::fit(&x, &y, 2, 15, &TreeParams::default(), 9);
        assert_eq!(a.predict_proba(&query), b.predict_proba(&query));
    }

    #[test]
    fn test_class_without_samples_gets_zero() {
        let (x, y) = toy();
        let forest = RandomForest::fit(&x, &y, 3, 10, &TreeParams::default(), 1);
        let p = forest.predict_proba(&x[0]);
        assert_eq!(p.len(), 3);
        assert_eq!(p[2], 0.0);
    }
}
