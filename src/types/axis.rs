//! Scored personality dimensions

use serde::{Deserialize, Serialize};

/// One scored dimension with two opposing poles.
///
/// Negative totals lean toward `label_left`, positive totals toward `label_right`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub label_left: String,
    pub label_right: String,
}

impl Axis {
    pub fn new(label_left: impl Into<String>, label_right: impl Into<String>) -> Self {
        Self {
            label_left: label_left.into(),
            label_right: label_right.into(),
        }
    }
}
