//! Sign-keys: per-axis polarity vectors
//!
//! Wire format is a comma-joined list of `1` / `-1` tokens, one per axis,
//! in axis order. Internally a key is a list of `Polarity` values and only
//! becomes a string at the catalog lookup boundary.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::types::SignKeyError;

lazy_static! {
    static ref RE_SIGN_KEY: Regex = Regex::new(r"^-?1(,-?1)*$").unwrap();
}

/// Direction of one axis total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Total >= 0 (zero counts as positive)
    Positive,
    /// Total < 0
    Negative,
}

impl Polarity {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Polarity::Positive => "1",
            Polarity::Negative => "-1",
        }
    }
}

/// Ordered polarity vector, one entry per axis
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignKey(Vec<Polarity>);

impl SignKey {
    pub fn new(polarities: Vec<Polarity>) -> Self {
        Self(polarities)
    }

    pub fn from_scores(scores: &[f64]) -> Self {
        Self(scores.iter().map(|s| Polarity::from_score(*s)).collect())
    }

    pub fn polarities(&self) -> &[Polarity] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every key for `axis_count` axes, all-positive first
    pub fn all_combinations(axis_count: usize) -> Vec<SignKey> {
        (0..1u64 << axis_count)
            .map(|bits| {
                SignKey(
                    (0..axis_count)
                        .map(|axis| {
                            if bits & (1 << (axis_count - 1 - axis)) == 0 {
                                Polarity::Positive
                            } else {
                                Polarity::Negative
                            }
                        })
                        .collect(),
                )
            })
            .collect()
    }
}

impl fmt::Display for SignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.0.iter().map(Polarity::token).collect();
        write!(f, "{}", tokens.join(","))
    }
}

impl FromStr for SignKey {
    type Err = SignKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !RE_SIGN_KEY.is_match(s) {
            return Err(SignKeyError::Malformed(s.to_string()));
        }
        Ok(Self(
            s.split(',')
                .map(|t| if t == "1" { Polarity::Positive } else { Polarity::Negative })
                .collect(),
        ))
    }
}

impl Serialize for SignKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
