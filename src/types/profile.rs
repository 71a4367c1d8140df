//! Result profiles (diagnosis outcomes)

use serde::{Deserialize, Serialize};
use crate::NO_MATCH_PLACEHOLDER;

fn no_match() -> String {
    NO_MATCH_PLACEHOLDER.to_string()
}

/// One diagnosis outcome. `name` is both the display identity and the
/// key used when listing distinct result types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultProfile {
    pub name: String,
    pub subtitle: String,
    pub desc: String,
    /// Free-text guidance ("how to handle this type")
    pub manual: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "no_match")]
    pub good_match: String,
    #[serde(default = "no_match")]
    pub bad_match: String,
}

impl ResultProfile {
    /// Tags as displayed: `#tag`, with any authored `#` removed first
    pub fn display_tags(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|t| format!("#{}", t.replace('#', "")))
            .collect()
    }
}
