//! The loaded quiz definition and its ordered result catalog

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DEFAULT_THEME;
use crate::types::{Axis, Question, ResultProfile};

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

/// Static quiz document: theme, axes, questions and result catalog.
///
/// Immutable once loaded. Share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDefinition {
    #[serde(default = "default_theme")]
    pub theme: String,
    pub axes: Vec<Axis>,
    pub questions: Vec<Question>,
    pub results: ResultCatalog,
    /// SHA-256 of the source document, set by the loader
    #[serde(skip)]
    pub fingerprint: String,
}

impl QuizDefinition {
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// One sign-key to profile mapping, as authored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Raw key from the document. Not guaranteed to be a well-formed sign-key.
    pub key: String,
    pub profile: ResultProfile,
}

/// Result profiles keyed by sign-key, in document order.
///
/// Re-inserting an existing key replaces its profile but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl ResultCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, profile: ResultProfile) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].profile = profile,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(CatalogEntry { key, profile });
            }
        }
    }

    /// Exact-match lookup
    pub fn get(&self, key: &str) -> Option<&ResultProfile> {
        self.index.get(key).map(|&pos| &self.entries[pos].profile)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// First entry in document order
    pub fn first(&self) -> Option<&CatalogEntry> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &ResultProfile> {
        self.entries.iter().map(|e| &e.profile)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResultCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.profile)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResultCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ResultCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of sign-keys to result profiles")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut catalog = ResultCatalog::new();
                while let Some((key, profile)) = map.next_entry::<String, ResultProfile>()? {
                    catalog.insert(key, profile);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> ResultProfile {
        ResultProfile {
            name: name.to_string(),
            subtitle: String::new(),
            desc: String::new(),
            manual: String::new(),
            tags: vec![],
            good_match: String::new(),
            bad_match: String::new(),
        }
    }

    #[test]
    fn test_catalog_keeps_document_order() {
        let json = r#"{
            "-1,1": {"name": "Second", "subtitle": "", "desc": "", "manual": ""},
            "1,1": {"name": "First", "subtitle": "", "desc": "", "manual": ""},
            "1,-1": {"name": "Third", "subtitle": "", "desc": "", "manual": ""}
        }"#;
        let catalog: ResultCatalog = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = catalog.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["-1,1", "1,1", "1,-1"]);
        assert_eq!(catalog.first().unwrap().profile.name, "Second");
    }

    #[test]
    fn test_duplicate_key_in_document() {
        let json = r#"{
            "1": {"name": "Early", "subtitle": "", "desc": "", "manual": ""},
            "-1": {"name": "Middle", "subtitle": "", "desc": "", "manual": ""},
            "1": {"name": "Late", "subtitle": "", "desc": "", "manual": ""}
        }"#;
        let catalog: ResultCatalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.len(), 2);
        let keys: Vec<&str> = catalog.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "-1"]);
        assert_eq!(catalog.first().unwrap().profile.name, "Late");
        assert_eq!(catalog.get("1").unwrap().name, "Late");
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut catalog = ResultCatalog::new();
        catalog.insert("1", profile("A"));
        catalog.insert("-1", profile("B"));
        catalog.insert("1", profile("C"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.first().unwrap().profile.name, "C");
        assert_eq!(catalog.get("-1").unwrap().name, "B");
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut catalog = ResultCatalog::new();
        catalog.insert("-1", profile("B"));
        catalog.insert("1", profile("A"));
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.find("\"-1\"").unwrap() < json.find("\"1\"").unwrap());
    }

    #[test]
    fn test_theme_default() {
        let def: QuizDefinition = serde_json::from_str(
            r#"{"axes": [], "questions": [], "results": {}}"#,
        ).unwrap();
        assert_eq!(def.theme, DEFAULT_THEME);
        assert!(def.fingerprint.is_empty());
    }
}
