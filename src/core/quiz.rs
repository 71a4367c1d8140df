//! Front-end contract
//!
//! The calls a UI makes: check completeness, record answers, compute
//! the result, list result types, reset. All of them are pure functions
//! over the definition and whatever session value the UI passes in.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{CatalogBuilder, GaugeCalculator, ResultResolver, ScoringEngine};
use crate::types::{
    Answers, AxisReading, Choice, QuizDefinition, QuizSession, ResultProfile, ScoreError,
    ScoreVector, SessionError, SignKey,
};

/// Everything the result screen needs
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    pub sign_key: SignKey,
    pub scores: ScoreVector,
    pub profile: ResultProfile,
    /// False when the sign-key had no catalog entry and the fallback was used
    pub matched: bool,
    pub gauges: Vec<AxisReading>,
    pub computed_at: DateTime<Utc>,
}

pub fn is_complete(answers: &Answers, total_questions: usize) -> bool {
    answers.is_complete(total_questions)
}

pub fn record_answer(
    definition: &QuizDefinition,
    session: &mut QuizSession,
    question: usize,
    choice: Choice,
) -> Result<(), SessionError> {
    session.record_answer(question, choice, definition.question_count())
}

/// Score, resolve and gauge a complete answer set
pub fn compute_result(
    definition: &QuizDefinition,
    answers: &Answers,
) -> Result<QuizOutcome, ScoreError> {
    let scores = ScoringEngine::new().score(definition, answers)?;
    let resolution = ResultResolver::new()
        .resolve(&scores, &definition.results)
        .ok_or(ScoreError::EmptyCatalog)?;
    let gauges = GaugeCalculator::new().readings(&definition.axes, &scores);

    Ok(QuizOutcome {
        sign_key: resolution.key,
        profile: resolution.profile.clone(),
        matched: resolution.matched,
        scores,
        gauges,
        computed_at: Utc::now(),
    })
}

/// Distinct result types for the "browse all types" list
pub fn list_distinct_results(definition: &QuizDefinition) -> Vec<&ResultProfile> {
    CatalogBuilder::new().dedupe(&definition.results)
}

/// Empty answers, reveal flag cleared
pub fn reset(session: &mut QuizSession) {
    session.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProfileStore;

    const QUIZ: &str = r#"{
        "theme": "Test",
        "axes": [
            {"label_left": "Home", "label_right": "Away"},
            {"label_left": "Plan", "label_right": "Wing"}
        ],
        "questions": [
            {"q": "Friday night?", "option_a": "Sofa", "option_b": "Club", "axis_index": 0}
        ],
        "results": {
            "1,1": {"name": "Rover", "subtitle": "", "desc": "", "manual": ""},
            "-1,1": {"name": "Nester", "subtitle": "", "desc": "", "manual": ""}
        }
    }"#;

    #[test]
    fn test_compute_result_end_to_end() {
        let store = ProfileStore::from_json(QUIZ).unwrap();
        let def = store.definition();
        let mut session = QuizSession::new();
        record_answer(def, &mut session, 0, Choice::B).unwrap();
        assert!(is_complete(session.answers(), def.question_count()));

        let outcome = compute_result(def, session.answers()).unwrap();
        assert_eq!(outcome.sign_key.to_string(), "1,1");
        assert_eq!(outcome.profile.name, "Rover");
        assert!(outcome.matched);
        assert_eq!(outcome.gauges[0].gauge.percent, 100);
        assert_eq!(outcome.gauges[1].gauge.percent, 50);
    }

    #[test]
    fn test_compute_result_incomplete() {
        let store = ProfileStore::from_json(QUIZ).unwrap();
        assert!(matches!(
            compute_result(store.definition(), &Answers::new()),
            Err(ScoreError::IncompleteAnswers { answered: 0, total: 1 })
        ));
    }

    #[test]
    fn test_reset() {
        let store = ProfileStore::from_json(QUIZ).unwrap();
        let def = store.definition();
        let mut session = QuizSession::new();
        record_answer(def, &mut session, 0, Choice::A).unwrap();
        session.request_reveal(def.question_count()).unwrap();

        reset(&mut session);
        assert_eq!(session, QuizSession::new());
    }
}
