//! Binary-choice questions and the answer choice

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Which displayed slot the user picked.
///
/// `A` is always the first option shown. For a question with
/// `swap_options` that is `option_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    /// Parse user input: `a`, `b`, `A:`, `B: text` (case insensitive)
    pub fn from_input(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let first = chars.next()?.to_ascii_uppercase();
        let rest = chars.as_str().trim_start();
        if !rest.is_empty() && !rest.starts_with(':') {
            return None;
        }
        match first {
            'A' => Some(Choice::A),
            'B' => Some(Choice::B),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Choice::A => 'A',
            Choice::B => 'B',
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

fn default_weight() -> f64 {
    1.0
}

/// Axis index as authored: any JSON integer, or a float truncated toward
/// zero (`0.0` -> 0, `1.9` -> 1)
fn lenient_axis_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct AxisIndexVisitor;

    impl<'de> Visitor<'de> for AxisIndexVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an axis index number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            // Anything past i64::MAX is out of range for every quiz anyway
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if !v.is_finite() {
                return Err(E::invalid_value(de::Unexpected::Float(v), &self));
            }
            Ok(v.trunc() as i64)
        }
    }

    deserializer.deserialize_any(AxisIndexVisitor)
}

/// One binary-choice prompt scored against a single axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "q")]
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    /// Kept signed so that negative indices in authored data read as
    /// out of range instead of failing the whole load
    #[serde(default, deserialize_with = "lenient_axis_index")]
    pub axis_index: i64,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub swap_options: bool,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        option_a: impl Into<String>,
        option_b: impl Into<String>,
        axis_index: i64,
    ) -> Self {
        Self {
            text: text.into(),
            option_a: option_a.into(),
            option_b: option_b.into(),
            axis_index,
            weight: default_weight(),
            swap_options: false,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn swapped(mut self) -> Self {
        self.swap_options = true;
        self
    }

    /// Axis this question scores against, if it exists
    pub fn axis(&self, axis_count: usize) -> Option<usize> {
        usize::try_from(self.axis_index)
            .ok()
            .filter(|idx| *idx < axis_count)
    }

    /// Options in the order they are shown: (slot A, slot B)
    pub fn displayed_options(&self) -> (&str, &str) {
        if self.swap_options {
            (&self.option_b, &self.option_a)
        } else {
            (&self.option_a, &self.option_b)
        }
    }

    /// Text shown for a displayed slot
    pub fn option_text(&self, choice: Choice) -> &str {
        let (first, second) = self.displayed_options();
        match choice {
            Choice::A => first,
            Choice::B => second,
        }
    }

    /// Signed contribution of `choice` to this question's axis.
    ///
    /// Slot A scores `flip * weight`, slot B `-flip * weight`, where
    /// `flip` is +1 for swapped questions and -1 otherwise. Net effect:
    /// `option_a` always pulls left and `option_b` always pulls right,
    /// whichever slot they are displayed in.
    pub fn delta(&self, choice: Choice) -> f64 {
        let flip = if self.swap_options { 1.0 } else { -1.0 };
        match choice {
            Choice::A => flip * self.weight,
            Choice::B => -flip * self.weight,
        }
    }
}
