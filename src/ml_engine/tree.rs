//! CART classification tree (Gini impurity) used as the forest's base learner.
//!
//! ```text
//! gini(node)   = 1 - Σ p_c²
//! split score  = n_left * gini(left) + n_right * gini(right)   (lower is better)
//! ```
//!
//! At each node the candidate features are visited in a per-node shuffled
//! order. At least `max_features` of them are evaluated; if none of those
//! yields an impurity-reducing split the search continues through the rest,
//! so a node only becomes a leaf when no feature can split it.
//!
//! Leaves keep the full class distribution of the samples that reached them,
//! which is what gives the forest calibrated multi-class probabilities.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::types::{Features, NUM_FEATURES};

/// Minimum impurity decrease for a split to be accepted.
const MIN_IMPURITY_DECREASE: f64 = 1e-12;

/// Growth limits for a single tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// `None` grows until leaves are pure
    pub max_depth: Option<usize>,
    /// Nodes with fewer samples become leaves
    pub min_samples_split: usize,
    /// Features evaluated per split before settling for the best found
    pub max_features: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: super::classifier::DEFAULT_MIN_SAMPLES_SPLIT,
            max_features: default_max_features(NUM_FEATURES),
        }
    }
}

/// `floor(sqrt(n_features))`, at least 1.
pub fn default_max_features(n_features: usize) -> usize {
    ((n_features as f64).sqrt() as usize).max(1)
}

#[derive(Debug, Clone)]
enum TreeNode {
    Split {
        feature: usize,
        /// Samples with `x[feature] <= threshold` go left
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        /// Class probabilities, length = number of classes
        distribution: Vec<f64>,
    },
}

#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: TreeNode,
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    score: f64,
}

impl DecisionTree {
    /// Grow a tree over the rows of `x` named by `indices` (duplicates allowed,
    /// as produced by bootstrap resampling).
    pub fn fit(
        x: &[Features],
        y: &[usize],
        indices: &[usize],
        n_classes: usize,
        params: &TreeParams,
        rng: &mut StdRng,
    ) -> Self {
        let root = build_node(x, y, indices.to_vec(), n_classes, params, 0, rng);
        Self { root }
    }

    /// Class distribution of the leaf `features` falls into.
    pub fn predict_proba(&self, features: &Features) -> &[f64] {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold { &**left } else { &**right };
                }
                TreeNode::Leaf { distribution } => return distribution,
            }
        }
    }

    /// Depth of the deepest leaf (a lone leaf has depth 0).
    pub fn depth(&self) -> usize {
        fn walk(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 0,
                TreeNode::Split { left, right, .. } => 1 + walk(left).max(walk(right)),
            }
        }
        walk(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        fn walk(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 1,
                TreeNode::Split { left, right, .. } => walk(left) + walk(right),
            }
        }
        walk(&self.root)
    }
}

fn build_node(
    x: &[Features],
    y: &[usize],
    indices: Vec<usize>,
    n_classes: usize,
    params: &TreeParams,
    depth: usize,
    rng: &mut StdRng,
) -> TreeNode {
    let counts = class_counts(y, &indices, n_classes);
    let n = indices.len();

    let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
    let depth_reached = params.max_depth.is_some_and(|d| depth >= d);
    if pure || depth_reached || n < params.min_samples_split.max(2) {
        return leaf(&counts, n);
    }

    let Some(best) = find_best_split(x, y, &indices, &counts, params.max_features, rng) else {
        return leaf(&counts, n);
    };

    let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
        .into_iter()
        .partition(|&i| x[i][best.feature] <= best.threshold);

    TreeNode::Split {
        feature: best.feature,
        threshold: best.threshold,
        left: Box::new(build_node(x, y, left_idx, n_classes, params, depth + 1, rng)),
        right: Box::new(build_node(x, y, right_idx, n_classes, params, depth + 1, rng)),
    }
}

fn find_best_split(
    x: &[Features],
    y: &[usize],
    indices: &[usize],
    parent_counts: &[usize],
    max_features: usize,
    rng: &mut StdRng,
) -> Option<BestSplit> {
    let n = indices.len();
    let parent_score = n as f64 * gini(parent_counts, n);

    let mut features: Vec<usize> = (0..NUM_FEATURES).collect();
    features.shuffle(rng);

    let mut best: Option<BestSplit> = None;
    let mut sorted = indices.to_vec();

    for (visited, &feature) in features.iter().enumerate() {
        if visited >= max_features.max(1) && best.is_some() {
            break;
        }

        sorted.sort_by(|&a, &b| x[a][feature].total_cmp(&x[b][feature]));

        let mut left = vec![0usize; parent_counts.len()];
        let mut right = parent_counts.to_vec();

        for pos in 0..n - 1 {
            let cls = y[sorted[pos]];
            left[cls] += 1;
            right[cls] -= 1;

            let here = x[sorted[pos]][feature];
            let next = x[sorted[pos + 1]][feature];
            if next <= here {
                continue;
            }

            let n_left = pos + 1;
            let n_right = n - n_left;
            let score = n_left as f64 * gini(&left, n_left) + n_right as f64 * gini(&right, n_right);

            if parent_score - score <= MIN_IMPURITY_DECREASE {
                continue;
            }
            if best.as_ref().map_or(true, |b| score < b.score) {
                let mut threshold = here + (next - here) / 2.0;
                // midpoint can round up to `next` for adjacent floats
                if threshold >= next {
                    threshold = here;
                }
                best = Some(BestSplit {
                    feature,
                    threshold,
                    score,
                });
            }
        }
    }

    best
}

fn class_counts(y: &[usize], indices: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &i in indices {
        counts[y[i]] += 1;
    }
    counts
}

fn gini(counts: &[usize], n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let total = n as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

fn leaf(counts: &[usize], n: usize) -> TreeNode {
    let total = n.max(1) as f64;
    TreeNode::Leaf {
        distribution: counts.iter().map(|&c| c as f64 / total).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn row(a: f64, b: f64) -> Features {
        [a, b, 0.0, 0.0, 0.0, 0.0, 0.0]
    }

    fn all_features() -> TreeParams {
        TreeParams {
            max_features: NUM_FEATURES,
            ..TreeParams::default()
        }
    }

    #[test]
    fn test_gini_pure_and_mixed() {
        assert_eq!(gini(&[4, 0], 4), 0.0);
        assert!((gini(&[2, 2], 4) - 0.5).abs() < 1e-12);
        assert_eq!(gini(&[], 0), 0.0);
    }

    #[test]
    fn test_default_max_features_is_sqrt() {
        assert_eq!(default_max_features(7), 2);
        assert_eq!(default_max_features(1), 1);
        assert_eq!(default_max_features(16), 4);
    }

    #[test]
    fn test_separable_data_fits_exactly() {
        let x = vec![row(1.0, 5.0), row(2.0, 5.0), row(8.0, 5.0), row(9.0, 5.0)];
        let y = vec![0, 0, 1, 1];
        let mut rng = StdRng::seed_from_u64(0);
        let tree = DecisionTree::fit(&x, &y, &[0, 1, 2, 3], 2, &all_features(), &mut rng);

        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.predict_proba(&row(1.5, 0.0)), &[1.0, 0.0]);
        assert_eq!(tree.predict_proba(&row(8.5, 0.0)), &[0.0, 1.0]);
    }

    #[test]
    fn test_threshold_is_midpoint() {
        let x = vec![row(2.0, 0.0), row(4.0, 0.0)];
        let y = vec![0, 1];
        let mut rng = StdRng::seed_from_u64(0);
        let tree = DecisionTree::fit(&x, &y, &[0, 1], 2, &all_features(), &mut rng);
        assert_eq!(tree.predict_proba(&row(3.0, 0.0)), &[1.0, 0.0]);
        assert_eq!(tree.predict_proba(&row(3.01, 0.0)), &[0.0, 1.0]);
    }

    #[test]
    fn test_unsplittable_node_keeps_distribution() {
        // identical features, different labels
        let x = vec![row(1.0, 1.0); 4];
        let y = vec![0, 0, 0, 1];
        let mut rng = StdRng::seed_from_u64(0);
        let tree = DecisionTree::fit(&x, &y, &[0, 1, 2, 3], 2, &TreeParams::default(), &mut rng);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.predict_proba(&row(1.0, 1.0)), &[0.75, 0.25]);
    }

    #[test]
    fn test_max_depth_limits_growth() {
        let x: Vec<Features> = (0..8).map(|i| row(f64::from(i), 0.0)).collect();
        let y = vec![0, 1, 0, 1, 0, 1, 0, 1];
        let params = TreeParams {
            max_depth: Some(1),
            ..all_features()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let idx: Vec<usize> = (0..8).collect();
        let tree = DecisionTree::fit(&x, &y, &idx, 2, &params, &mut rng);
        assert!(tree.depth() <= 1);
    }

    #[test]
    fn test_duplicate_indices_weight_counts() {
        let x = vec![row(1.0, 0.0), row(1.0, 0.0)];
        let y = vec![0, 1];
        let mut rng = StdRng::seed_from_u64(0);
        let tree = DecisionTree::fit(&x, &y, &[0, 0, 0, 1], 2, &all_features(), &mut rng);
        assert_eq!(tree.predict_proba(&row(1.0, 0.0)), &[0.75, 0.25]);
    }
}
