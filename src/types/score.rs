//! Per-axis score vectors

use serde::{Deserialize, Serialize};
use crate::types::SignKey;

/// Signed totals and maximum magnitudes, one element per axis.
///
/// Derived from a complete answer set; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub scores: Vec<f64>,
    pub max_scores: Vec<f64>,
}

impl ScoreVector {
    /// All-zero vector for `axis_count` axes
    pub fn zeroed(axis_count: usize) -> Self {
        Self {
            scores: vec![0.0; axis_count],
            max_scores: vec![0.0; axis_count],
        }
    }

    pub fn axis_count(&self) -> usize {
        self.scores.len()
    }

    pub fn sign_key(&self) -> SignKey {
        SignKey::from_scores(&self.scores)
    }
}
