//! Result resolver: sign-key -> result profile
//!
//! Exact key match only. When the combination was never authored the
//! first catalog entry (document order) is returned instead, so a
//! complete answer set always reaches a result.

use serde::Serialize;
use tracing::warn;

use crate::types::{ResultCatalog, ResultProfile, ScoreVector, SignKey, WarningCode};

/// Outcome of a lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution<'a> {
    pub key: SignKey,
    pub profile: &'a ResultProfile,
    /// False when the fallback entry was used
    pub matched: bool,
}

#[derive(Debug, Default)]
pub struct ResultResolver;

impl ResultResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a score vector. `None` only for an empty catalog,
    /// which the loader never produces.
    pub fn resolve<'a>(
        &self,
        scores: &ScoreVector,
        catalog: &'a ResultCatalog,
    ) -> Option<Resolution<'a>> {
        let key = scores.sign_key();
        let wire = key.to_string();

        if let Some(profile) = catalog.get(&wire) {
            return Some(Resolution { key, profile, matched: true });
        }

        let fallback = catalog.first()?;
        warn!(
            code = WarningCode::W103_MISSING_SIGN_KEY.code(),
            key = %wire,
            fallback = %fallback.key,
            "no result for sign-key, using first catalog entry"
        );
        Some(Resolution {
            key,
            profile: &fallback.profile,
            matched: false,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
