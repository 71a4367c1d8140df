//! Gauge calculator: signed score -> 0-100 meter position
//!
//! `percent = floor((score + max) / (2 * max) * 100)`, with a zero
//! maximum treated as 1 so an untouched axis sits at the midpoint.

use crate::{GAUGE_MAX, GAUGE_MIDPOINT};
use crate::types::{Axis, AxisReading, Gauge, ScoreVector};

#[derive(Debug, Default)]
pub struct GaugeCalculator;

impl GaugeCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn gauge(&self, score: f64, max_score: f64) -> Gauge {
        let max = if max_score > 0.0 { max_score } else { 1.0 };
        let raw = ((score + max) / (2.0 * max) * 100.0).floor();
        let percent = raw.clamp(0.0, GAUGE_MAX as f64) as u8;
        Gauge {
            percent,
            lean_left: percent < GAUGE_MIDPOINT,
            lean_right: percent > GAUGE_MIDPOINT,
        }
    }

    /// One reading per axis, in axis order
    pub fn readings(&self, axes: &[Axis], scores: &ScoreVector) -> Vec<AxisReading> {
        axes.iter()
            .zip(scores.scores.iter().zip(&scores.max_scores))
            .map(|(axis, (score, max))| {
                AxisReading::new(axis, *score, *max, self.gauge(*score, *max))
            })
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_midpoint() {
        let calc = GaugeCalculator::new();
        assert_eq!(calc.gauge(0.0, 4.0).percent, 50);
        assert_eq!(calc.gauge(4.0, 4.0).percent, 100);
        assert_eq!(calc.gauge(-4.0, 4.0).percent, 0);
    }

    #[test]
    fn test_zero_max_is_midpoint() {
        let calc = GaugeCalculator::new();
        let g = calc.gauge(0.0, 0.0);
        assert_eq!(g.percent, 50);
        assert!(!g.lean_left && !g.lean_right);
    }

    #[test]
    fn test_floor() {
        let calc = GaugeCalculator::new();
        assert_eq!(calc.gauge(-2.0, 4.0).percent, 25);
        assert_eq!(calc.gauge(1.0, 3.0).percent, 66);
        assert_eq!(calc.gauge(-1.0, 3.0).percent, 33);
    }

    #[test]
    fn test_lean_flags() {
        let calc = GaugeCalculator::new();
        let left = calc.gauge(-1.0, 2.0);
        assert!(left.lean_left && !left.lean_right);
        let right = calc.gauge(1.0, 2.0);
        assert!(right.lean_right && !right.lean_left);
        let even = calc.gauge(0.0, 2.0);
        assert!(!even.lean_left && !even.lean_right);
    }

    #[test]
    fn test_readings_follow_axes() {
        let calc = GaugeCalculator::new();
        let axes = vec![Axis::new("In", "Out"), Axis::new("Plan", "Wing")];
        let scores = ScoreVector {
            scores: vec![-2.0, 0.0],
            max_scores: vec![2.0, 0.0],
        };
        let readings = calc.readings(&axes, &scores);
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].label_left, "In");
        assert_eq!(readings[0].gauge.percent, 0);
        assert_eq!(readings[1].gauge.percent, 50);
    }
}
