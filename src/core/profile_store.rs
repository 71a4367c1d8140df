//! Profile store: loads and validates the quiz definition
//!
//! Load once per session and share the result. Everything downstream
//! treats the definition as read-only.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::MAX_ENUMERATED_AXES;
use crate::types::{
    DefinitionWarning, LoadError, QuizDefinition, SignKey, WarningCode,
};

/// Read-only holder of a loaded quiz definition
#[derive(Debug, Clone)]
pub struct ProfileStore {
    definition: Arc<QuizDefinition>,
}

impl ProfileStore {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_slice(&bytes)?;
        info!(
            path = %path.display(),
            theme = %store.definition.theme,
            axes = store.definition.axis_count(),
            questions = store.definition.question_count(),
            results = store.definition.results.len(),
            "quiz definition loaded"
        );
        Ok(store)
    }

    /// Load from an in-memory JSON document
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::from_slice(json.as_bytes())
    }

    fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let mut definition: QuizDefinition = serde_json::from_slice(bytes)?;
        check_structure(&definition)?;
        definition.fingerprint = fingerprint(bytes);
        Ok(Self {
            definition: Arc::new(definition),
        })
    }

    /// Wrap an already-built definition (fingerprint taken over its JSON form)
    pub fn from_definition(mut definition: QuizDefinition) -> Result<Self, LoadError> {
        check_structure(&definition)?;
        let bytes = serde_json::to_vec(&definition)?;
        definition.fingerprint = fingerprint(&bytes);
        Ok(Self {
            definition: Arc::new(definition),
        })
    }

    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    /// Shared handle for front-ends that outlive the store
    pub fn shared(&self) -> Arc<QuizDefinition> {
        Arc::clone(&self.definition)
    }

    /// Report authoring gaps. Each warning is also logged.
    pub fn validate(&self) -> Vec<DefinitionWarning> {
        let warnings = validate_definition(&self.definition);
        for w in &warnings {
            warn!(code = w.code.code(), detail = %w.detail, "{}", w.code.description());
        }
        warnings
    }
}

/// Fatal structural checks
fn check_structure(definition: &QuizDefinition) -> Result<(), LoadError> {
    if definition.axes.is_empty() {
        return Err(LoadError::NoAxes);
    }
    if definition.questions.is_empty() {
        return Err(LoadError::NoQuestions);
    }
    if definition.results.is_empty() {
        return Err(LoadError::EmptyCatalog);
    }
    for (question, q) in definition.questions.iter().enumerate() {
        if !q.weight.is_finite() {
            return Err(LoadError::InvalidWeight {
                question,
                weight: q.weight,
            });
        }
    }
    Ok(())
}

/// Non-fatal checks, in a stable order: questions (weight, then axis), catalog keys,
/// missing combinations, unprobed axes
pub fn validate_definition(definition: &QuizDefinition) -> Vec<DefinitionWarning> {
    let axis_count = definition.axis_count();
    let mut warnings = Vec::new();
    let mut probed = HashSet::new();

    for (i, q) in definition.questions.iter().enumerate() {
        if q.weight < 0.0 {
            warnings.push(DefinitionWarning::new(
                WarningCode::W105_NEGATIVE_WEIGHT,
                format!("question {} weight {}", i, q.weight),
            ));
        }
        match q.axis(axis_count) {
            Some(axis) => {
                probed.insert(axis);
            }
            None => warnings.push(DefinitionWarning::new(
                WarningCode::W101_AXIS_OUT_OF_RANGE,
                format!("question {} -> axis {} (axes: {})", i, q.axis_index, axis_count),
            )),
        }
    }

    for entry in definition.results.iter() {
        let well_formed = entry
            .key
            .parse::<SignKey>()
            .map(|k| k.len() == axis_count)
            .unwrap_or(false);
        if !well_formed {
            warnings.push(DefinitionWarning::new(
                WarningCode::W102_MALFORMED_SIGN_KEY,
                format!("key {:?} ({})", entry.key, entry.profile.name),
            ));
        }
    }

    if axis_count <= MAX_ENUMERATED_AXES {
        for key in SignKey::all_combinations(axis_count) {
            let key = key.to_string();
            if !definition.results.contains_key(&key) {
                warnings.push(DefinitionWarning::new(
                    WarningCode::W103_MISSING_SIGN_KEY,
                    format!("key {:?}", key),
                ));
            }
        }
    }

    for (axis, a) in definition.axes.iter().enumerate() {
        if !probed.contains(&axis) {
            warnings.push(DefinitionWarning::new(
                WarningCode::W104_UNPROBED_AXIS,
                format!("axis {} ({} / {})", axis, a.label_left, a.label_right),
            ));
        }
    }

    warnings
}

/// SHA-256 hex digest
fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
