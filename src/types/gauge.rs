//! Gauge positions for axis meters

use serde::{Deserialize, Serialize};
use crate::types::Axis;

/// Normalised meter position between an axis' two poles.
///
/// `lean_left` / `lean_right` only decide which label is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gauge {
    /// 0 = fully left, 100 = fully right
    pub percent: u8,
    pub lean_left: bool,
    pub lean_right: bool,
}

/// Gauge plus the axis it belongs to, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisReading {
    pub label_left: String,
    pub label_right: String,
    pub score: f64,
    pub max_score: f64,
    pub gauge: Gauge,
}

impl AxisReading {
    pub fn new(axis: &Axis, score: f64, max_score: f64, gauge: Gauge) -> Self {
        Self {
            label_left: axis.label_left.clone(),
            label_right: axis.label_right.clone(),
            score,
            max_score,
            gauge,
        }
    }
}
