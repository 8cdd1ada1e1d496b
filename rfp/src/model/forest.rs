use crate::model::dataset::{select_elems, select_rows};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use ordered_float::OrderedFloat;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration of a [`RandomForest`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ForestConfig {
    /// Number of trees in the ensemble
    pub n_trees: usize,
    /// Minimum number of rows required to attempt a split
    pub min_samples_split: usize,
    /// Minimum number of rows on each side of a split
    pub min_samples_leaf: usize,
    /// Maximum tree depth. If undefined, trees grow until the split criteria stop them
    pub max_depth: Option<usize>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        ForestConfig {
            n_trees: 100,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_depth: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A CART regression tree: axis-aligned splits chosen by variance reduction,
/// leaves predicting the mean of their rows.
///
/// Nodes live in a flat arena; children precede their parent, so the root is the
/// last node.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    pub fn fit<'a>(
        features: ArrayView2<'a, f64>,
        targets: ArrayView1<'a, f64>,
        config: &'a ForestConfig,
    ) -> Self {
        assert_eq!(features.nrows(), targets.len());
        assert!(features.nrows() > 0);
        assert!(config.min_samples_leaf > 0);
        let mut builder = TreeBuilder {
            features,
            targets,
            config,
            nodes: vec![],
        };
        let mut indices = (0..features.nrows()).collect::<Vec<_>>();
        builder.grow(&mut indices, 0);
        RegressionTree {
            nodes: builder.nodes,
        }
    }

    pub fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
        let mut node = self.nodes.last().unwrap();
        loop {
            match node {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = match row[*feature] <= *threshold {
                        true => &self.nodes[*left],
                        false => &self.nodes[*right],
                    };
                }
            }
        }
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }
}

struct TreeBuilder<'a> {
    features: ArrayView2<'a, f64>,
    targets: ArrayView1<'a, f64>,
    config: &'a ForestConfig,
    nodes: Vec<Node>,
}

impl TreeBuilder<'_> {
    /// Grows a subtree over `indices` and returns the arena index of its root.
    /// `indices` is reordered in place while partitioning.
    fn grow(&mut self, indices: &mut [usize], depth: usize) -> usize {
        let at_max_depth = self.config.max_depth.is_some_and(|d| depth >= d);
        let split = match indices.len() < self.config.min_samples_split || at_max_depth {
            true => None,
            false => self.best_split(indices),
        };
        let node = match split {
            None => Node::Leaf {
                value: self.mean(indices),
            },
            Some((feature, threshold)) => {
                let mid = itertools::partition(indices.iter_mut(), |&i| {
                    self.features[[i, feature]] <= threshold
                });
                let (left_rows, right_rows) = indices.split_at_mut(mid);
                let left = self.grow(left_rows, depth + 1);
                let right = self.grow(right_rows, depth + 1);
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }
            }
        };
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// The split minimizing the summed squared error of the two sides, over all
    /// features and all thresholds that respect `min_samples_leaf`.
    /// Returns `None` if no feature value separates the rows.
    fn best_split(&self, indices: &[usize]) -> Option<(usize, f64)> {
        let n = indices.len();
        let min_leaf = self.config.min_samples_leaf;
        if n < 2 * min_leaf {
            return None;
        }

        let mut best: Option<(OrderedFloat<f64>, usize, f64)> = None;
        let mut order = indices.to_vec();
        for feature in 0..self.features.ncols() {
            order.copy_from_slice(indices);
            order.sort_by_key(|&i| OrderedFloat(self.features[[i, feature]]));

            //running prefix sums of the target and its square over the sorted rows
            let (mut sum, mut sum_sq) = (0.0, 0.0);
            let prefix = order
                .iter()
                .map(|&i| {
                    let y = self.targets[i];
                    sum += y;
                    sum_sq += y * y;
                    (sum, sum_sq)
                })
                .collect::<Vec<_>>();
            let (total, total_sq) = prefix[n - 1];

            //sending the first k sorted rows left, the rest right
            for k in min_leaf..=(n - min_leaf) {
                let v_lo = self.features[[order[k - 1], feature]];
                let v_hi = self.features[[order[k], feature]];
                if v_lo == v_hi {
                    //no threshold can separate equal values
                    continue;
                }
                let (sum_l, sum_sq_l) = prefix[k - 1];
                let (sum_r, sum_sq_r) = (total - sum_l, total_sq - sum_sq_l);
                let sse_l = sum_sq_l - sum_l * sum_l / k as f64;
                let sse_r = sum_sq_r - sum_r * sum_r / (n - k) as f64;
                let cost = OrderedFloat(sse_l + sse_r);
                if best.is_none_or(|(best_cost, _, _)| cost < best_cost) {
                    best = Some((cost, feature, (v_lo + v_hi) / 2.0));
                }
            }
        }
        best.map(|(_, feature, threshold)| (feature, threshold))
    }

    fn mean(&self, indices: &[usize]) -> f64 {
        let sum = indices.iter().map(|&i| self.targets[i]).sum::<f64>();
        sum / indices.len() as f64
    }
}

/// Bagged ensemble of [`RegressionTree`]s: every tree fits a bootstrap sample of
/// the rows, predictions are the mean over all trees.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RandomForest {
    pub trees: Vec<RegressionTree>,
}

impl RandomForest {
    /// Fits the ensemble. Trees are trained in parallel; each tree draws its
    /// bootstrap sample from its own RNG seeded with `base_seed + tree index`,
    /// so the result does not depend on thread scheduling.
    pub fn fit(
        features: &Array2<f64>,
        targets: &Array1<f64>,
        config: &ForestConfig,
        base_seed: u64,
    ) -> Self {
        assert!(config.n_trees > 0);
        let n_rows = features.nrows();
        let trees = (0..config.n_trees)
            .into_par_iter()
            .map(|t| {
                let mut rng = SmallRng::seed_from_u64(base_seed.wrapping_add(t as u64));
                let sample = (0..n_rows)
                    .map(|_| rng.random_range(0..n_rows))
                    .collect::<Vec<_>>();
                let boot_features = select_rows(features, &sample);
                let boot_targets = select_elems(targets, &sample);
                RegressionTree::fit(boot_features.view(), boot_targets.view(), config)
            })
            .collect();
        RandomForest { trees }
    }

    pub fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
        let sum = self.trees.iter().map(|t| t.predict_row(row)).sum::<f64>();
        sum / self.trees.len() as f64
    }

    pub fn predict(&self, features: &Array2<f64>) -> Array1<f64> {
        features
            .rows()
            .into_iter()
            .map(|row| self.predict_row(row))
            .collect()
    }
}

/// Coefficient of determination: `1 - SS_res / SS_tot`.
/// A constant target scores 0.0 by convention.
pub fn r2_score(actual: ArrayView1<f64>, predicted: ArrayView1<f64>) -> f64 {
    assert_eq!(actual.len(), predicted.len());
    let mean = actual.mean().unwrap_or(0.0);
    let ss_tot = actual.iter().map(|y| (y - mean).powi(2)).sum::<f64>();
    let ss_res = actual
        .iter()
        .zip(predicted.iter())
        .map(|(y, p)| (y - p).powi(2))
        .sum::<f64>();
    match ss_tot > 0.0 {
        true => 1.0 - ss_res / ss_tot,
        false => 0.0,
    }
}
