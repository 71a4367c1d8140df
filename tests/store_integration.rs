//! Integration tests for loading quiz definitions from disk

use std::io::Write;

use persona_quiz::core::{self as quiz, ProfileStore};
use persona_quiz::types::{Answers, LoadError, WarningCode};
use persona_quiz::DEFAULT_THEME;

#[test]
fn test_load_bundled_definition() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/diagnosis.json");
    let store = ProfileStore::load(path).unwrap();
    let def = store.definition();

    assert_eq!(def.theme, "Work Style Diagnosis");
    assert_eq!(def.axis_count(), 3);
    assert_eq!(def.question_count(), 6);
    assert_eq!(def.results.len(), 8);
    assert!(store.validate().is_empty());
}

#[test]
fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "axes": [{{"label_left": "L", "label_right": "R"}}],
            "questions": [{{"q": "?", "option_a": "a", "option_b": "b"}}],
            "results": {{"1": {{"name": "Only", "subtitle": "", "desc": "", "manual": ""}}}}
        }}"#
    )
    .unwrap();

    let store = ProfileStore::load(file.path()).unwrap();
    assert_eq!(store.definition().theme, DEFAULT_THEME);

    // "-1" was never authored
    let warnings = store.validate();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, WarningCode::W103_MISSING_SIGN_KEY);

    let outcome = quiz::compute_result(store.definition(), &Answers::from_letters("A").unwrap()).unwrap();
    assert_eq!(outcome.profile.name, "Only");
    assert!(!outcome.matched);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProfileStore::load(dir.path().join("diagnosis.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_truncated_file_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"theme": "x", "axes": ["#).unwrap();
    assert!(matches!(ProfileStore::load(file.path()), Err(LoadError::Parse(_))));
}

#[test]
fn test_no_questions_is_fatal() {
    let json = r#"{
        "axes": [{"label_left": "L", "label_right": "R"}],
        "questions": [],
        "results": {"1": {"name": "Only", "subtitle": "", "desc": "", "manual": ""}}
    }"#;
    assert!(matches!(ProfileStore::from_json(json), Err(LoadError::NoQuestions)));
}

#[test]
fn test_shared_handle_is_same_definition() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/diagnosis.json");
    let store = ProfileStore::load(path).unwrap();
    let shared = store.shared();
    assert_eq!(shared.fingerprint, store.definition().fingerprint);
    assert_eq!(*shared, *store.definition());
}
