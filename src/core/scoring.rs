//! Scoring engine: answers -> per-axis signed totals
//!
//! For each question with axis `idx` and weight `w`:
//! - `scores[idx] += delta` (see `Question::delta`)
//! - `max_scores[idx] += |w|`
//!
//! Several questions may share an axis; their deltas add up. A question
//! whose axis does not exist contributes to neither vector.

use tracing::debug;

use crate::types::{Answers, QuizDefinition, ScoreError, ScoreVector, WarningCode};

#[derive(Debug, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a complete answer set. Pure: same inputs, same output.
    pub fn score(
        &self,
        definition: &QuizDefinition,
        answers: &Answers,
    ) -> Result<ScoreVector, ScoreError> {
        let total = definition.question_count();
        if !answers.is_complete(total) {
            return Err(ScoreError::IncompleteAnswers {
                answered: answers.len(),
                total,
            });
        }

        let axis_count = definition.axis_count();
        let mut vector = ScoreVector::zeroed(axis_count);

        for (i, question) in definition.questions.iter().enumerate() {
            let Some(choice) = answers.get(i) else {
                continue;
            };
            let Some(idx) = question.axis(axis_count) else {
                debug!(
                    code = WarningCode::W101_AXIS_OUT_OF_RANGE.code(),
                    question = i,
                    axis_index = question.axis_index,
                    "question ignored"
                );
                continue;
            };
            vector.scores[idx] += question.delta(choice);
            vector.max_scores[idx] += question.weight.abs();
        }

        debug!(scores = ?vector.scores, max_scores = ?vector.max_scores, "answers scored");
        Ok(vector)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, Choice, Question, ResultCatalog};
    use pretty_assertions::assert_eq;

    fn definition(axes: usize, questions: Vec<Question>) -> QuizDefinition {
        QuizDefinition {
            theme: "t".to_string(),
            axes: (0..axes).map(|i| Axis::new(format!("L{}", i), format!("R{}", i))).collect(),
            questions,
            results: ResultCatalog::new(),
            fingerprint: String::new(),
        }
    }

    fn answers(choices: &[Choice]) -> Answers {
        choices.iter().copied().enumerate().collect()
    }

    #[test]
    fn test_single_question_option_a() {
        let def = definition(2, vec![Question::new("q", "a", "b", 0)]);
        let v = ScoringEngine::new().score(&def, &answers(&[Choice::A])).unwrap();
        assert_eq!(v.scores, vec![-1.0, 0.0]);
        assert_eq!(v.max_scores, vec![1.0, 0.0]);
    }

    #[test]
    fn test_swapped_weighted_option_b() {
        let def = definition(1, vec![Question::new("q", "a", "b", 0).swapped().with_weight(2.0)]);
        let v = ScoringEngine::new().score(&def, &answers(&[Choice::B])).unwrap();
        assert_eq!(v.scores, vec![-2.0]);
        assert_eq!(v.max_scores, vec![2.0]);
    }

    #[test]
    fn test_shared_axis_accumulates() {
        let def = definition(1, vec![
            Question::new("q1", "a", "b", 0),
            Question::new("q2", "a", "b", 0).with_weight(3.0),
        ]);
        // +1 from B, -3 from A
        let v = ScoringEngine::new()
            .score(&def, &answers(&[Choice::B, Choice::A]))
            .unwrap();
        assert_eq!(v.scores, vec![-2.0]);
        assert_eq!(v.max_scores, vec![4.0]);
    }

    #[test]
    fn test_out_of_range_axis_ignored() {
        let def = definition(1, vec![
            Question::new("q1", "a", "b", 0),
            Question::new("q2", "a", "b", 3).with_weight(5.0),
            Question::new("q3", "a", "b", -1),
        ]);
        let v = ScoringEngine::new()
            .score(&def, &answers(&[Choice::B, Choice::A, Choice::A]))
            .unwrap();
        assert_eq!(v.scores, vec![1.0]);
        assert_eq!(v.max_scores, vec![1.0]);
    }

    #[test]
    fn test_incomplete_rejected() {
        let def = definition(1, vec![
            Question::new("q1", "a", "b", 0),
            Question::new("q2", "a", "b", 0),
        ]);
        assert_eq!(
            ScoringEngine::new().score(&def, &answers(&[Choice::A])),
            Err(ScoreError::IncompleteAnswers { answered: 1, total: 2 })
        );
    }

    #[test]
    fn test_max_bounds_magnitude() {
        let def = definition(2, vec![
            Question::new("q1", "a", "b", 0).with_weight(0.5),
            Question::new("q2", "a", "b", 1).swapped(),
            Question::new("q3", "a", "b", 0).swapped().with_weight(2.0),
            Question::new("q4", "a", "b", 1).with_weight(1.5),
        ]);
        let engine = ScoringEngine::new();
        for bits in 0..16u8 {
            let choices: Vec<Choice> = (0..4)
                .map(|i| if bits & (1 << i) == 0 { Choice::A } else { Choice::B })
                .collect();
            let v = engine.score(&def, &answers(&choices)).unwrap();
            assert_eq!(v.axis_count(), 2);
            for axis in 0..2 {
                assert!(v.max_scores[axis] >= v.scores[axis].abs());
            }
            // pure
            assert_eq!(v, engine.score(&def, &answers(&choices)).unwrap());
        }
    }
}
