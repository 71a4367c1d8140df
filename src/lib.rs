//! Persona Quiz: binary-choice personality diagnosis
//!
//! Answers accumulate into per-axis scores, the sign of each axis score
//! selects a result profile, and each axis is rendered as a 0-100 gauge.
//!
//! Layout:
//! - `types`: quiz definition, answers, scores, sign-keys, errors
//! - `core`: loading, scoring, resolution, gauges, catalog, HTTP API

pub mod core;
pub mod types;

// =============================================================================
// DEFINITION
// =============================================================================

/// Definition file read when no path is given
pub const DEFAULT_DEFINITION_PATH: &str = "diagnosis.json";

/// Theme used when the document does not name one
pub const DEFAULT_THEME: &str = "性格診断";

/// Shown for `good_match` / `bad_match` when a profile leaves them out
pub const NO_MATCH_PLACEHOLDER: &str = "ー";

// =============================================================================
// GAUGE
// =============================================================================

/// Neutral gauge position; neither pole is emphasised
pub const GAUGE_MIDPOINT: u8 = 50;

/// Upper bound of a gauge position
pub const GAUGE_MAX: u8 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Above this many axes, missing sign combinations are not enumerated
/// (2^12 = 4096 keys)
pub const MAX_ENUMERATED_AXES: usize = 12;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
