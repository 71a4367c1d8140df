//! Catalog builder: distinct result types for browsing
//!
//! Several sign-keys can share one profile name. The browse list shows
//! each name once, first occurrence in document order wins.

use std::collections::HashSet;

use crate::types::{ResultCatalog, ResultProfile};

#[derive(Debug, Default)]
pub struct CatalogBuilder;

impl CatalogBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn dedupe<'a>(&self, catalog: &'a ResultCatalog) -> Vec<&'a ResultProfile> {
        let mut seen = HashSet::new();
        catalog
            .profiles()
            .filter(|p| seen.insert(p.name.as_str()))
            .collect()
    }
}
