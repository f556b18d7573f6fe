/// Decision forest evaluation.
///
/// Trees are stored as flat node arrays, the same shape a random forest
/// export produces: node 0 is the root, split nodes route left when
/// `features[feature] <= threshold`, and leaves carry per-class sample
/// counts or weights. Class probabilities are the mean of each tree's
/// normalised leaf distribution.

use serde::{Deserialize, Serialize};

use super::{check_shape, SusceptibilityModel, FEATURE_COUNT};
use crate::model::{Result, SusceptibilityError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        distribution: Vec<f64>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionForest {
    pub trees: Vec<DecisionTree>,
}

impl DecisionTree {
    /// Children must point forward in the node array, which rules out
    /// cycles and guarantees every walk terminates at a leaf.
    fn validate(&self, tree_index: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(SusceptibilityError::InvalidModel(format!(
                "tree {} has no nodes",
                tree_index
            )));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split { feature, threshold, left, right } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(SusceptibilityError::FeatureShape {
                            expected: FEATURE_COUNT,
                            actual: feature + 1,
                        });
                    }
                    if !threshold.is_finite() {
                        return Err(SusceptibilityError::InvalidModel(format!(
                            "tree {} node {} has a non-finite threshold",
                            tree_index, i
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(SusceptibilityError::InvalidModel(format!(
                                "tree {} node {} links to invalid child {}",
                                tree_index, i, child
                            )));
                        }
                    }
                }
                TreeNode::Leaf { distribution } => {
                    let valid = distribution.len() == 3
                        && distribution.iter().all(|p| p.is_finite() && *p >= 0.0)
                        && distribution.iter().sum::<f64>() > 0.0;
                    if !valid {
                        return Err(SusceptibilityError::InvalidModel(format!(
                            "tree {} leaf {} must hold three non-negative weights",
                            tree_index, i
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_distribution(&self, features: &[f64]) -> [f64; 3] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Split { feature, threshold, left, right } => {
                    index = if features[*feature] <= *threshold { *left } else { *right };
                }
                TreeNode::Leaf { distribution } => {
                    let total: f64 = distribution.iter().sum();
                    return [
                        distribution[0] / total,
                        distribution[1] / total,
                        distribution[2] / total,
                    ];
                }
            }
        }
    }
}

impl DecisionForest {
    pub fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(SusceptibilityError::InvalidModel(
                "forest has no trees".to_string(),
            ));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i)?;
        }
        Ok(())
    }
}

impl SusceptibilityModel for DecisionForest {
    fn name(&self) -> &'static str {
        "forest"
    }

    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 3]> {
        check_shape(features)?;
        let mut sum = [0.0; 3];
        for tree in &self.trees {
            let leaf = tree.leaf_distribution(features);
            for (acc, p) in sum.iter_mut().zip(leaf) {
                *acc += p;
            }
        }
        let n = self.trees.len() as f64;
        Ok(sum.map(|s| s / n))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
