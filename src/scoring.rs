//! Score calculation and type classification

use crate::descriptions::pole_label;
use crate::questionnaire::{max_score_for, MAX_CONTRIBUTION, QUESTIONS};
use crate::{
    Assessment, BaseType, Dimension, DimensionResult, DimensionScores, Identity, Likert,
    PersonalityType, Polarity, Question, ScoreError,
};
use sha2::{Digest, Sha256};

/// Points per step away from neutral on the 1-5 scale
const POINTS_PER_STEP: i32 = MAX_CONTRIBUTION / 2;

/// Signed contribution of one rating: one of -10, -5, 0, 5, 10
pub fn contribution(response: Likert, polarity: Polarity) -> i32 {
    (i32::from(response.value()) - i32::from(Likert::NEUTRAL.value()))
        * POINTS_PER_STEP
        * polarity.sign()
}

/// Strength of a preference as 0-100, rounded half up
pub fn strength_percentage(score: i32, max_score: i32) -> u8 {
    if max_score <= 0 {
        return 0;
    }
    let magnitude = i64::from(score).abs();
    let max = i64::from(max_score);
    let pct = (magnitude * 100 + max / 2) / max;
    pct.clamp(0, 100) as u8
}

/// Validate raw ratings into Likert values.
///
/// Count is checked first: a short or long vector is a usage error no
/// matter what it contains.
pub fn validate_responses(raw: &[i64], expected: usize) -> Result<Vec<Likert>, ScoreError> {
    if raw.len() != expected {
        return Err(ScoreError::WrongResponseCount {
            expected,
            actual: raw.len(),
        });
    }
    raw.iter()
        .enumerate()
        .map(|(i, &value)| {
            Likert::try_from(value).map_err(|_| ScoreError::ResponseOutOfRange {
                position: i + 1,
                value,
            })
        })
        .collect()
}

/// SHA-256 hex digest of the JSON-encoded response array
pub fn response_digest(responses: &[Likert]) -> String {
    let values: Vec<u8> = responses.iter().map(|r| r.value()).collect();
    let encoded = serde_json::to_string(&values).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(encoded.as_bytes());
    hex::encode(hasher.finalize())
}

/// Scores response vectors against a question table
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    questions: &'a [Question],
}

impl<'a> Scorer<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &'a [Question] {
        self.questions
    }

    /// Accumulate one contribution per question into its dimension
    pub fn score(&self, responses: &[Likert]) -> Result<DimensionScores, ScoreError> {
        if responses.len() != self.questions.len() {
            return Err(ScoreError::WrongResponseCount {
                expected: self.questions.len(),
                actual: responses.len(),
            });
        }

        let mut scores = DimensionScores::default();
        for (question, &response) in self.questions.iter().zip(responses) {
            scores.add(question.dimension, contribution(response, question.polarity));
        }
        Ok(scores)
    }

    /// Score raw integers, rejecting anything outside 1-5 before accumulating
    pub fn score_raw(&self, raw: &[i64]) -> Result<DimensionScores, ScoreError> {
        let responses = validate_responses(raw, self.questions.len())?;
        self.score(&responses)
    }

    /// Derive the type code. A score of exactly zero resolves to the first
    /// letter of the pair (E, S, T, J) and to Assertive.
    pub fn classify(scores: &DimensionScores) -> PersonalityType {
        let base = BaseType::from_poles(
            scores.ei >= 0,
            scores.sn >= 0,
            scores.tf >= 0,
            scores.jp >= 0,
        );
        PersonalityType {
            base,
            identity: Identity::from_score(scores.at),
        }
    }

    /// Per-dimension tendency and strength
    pub fn breakdown(&self, scores: &DimensionScores) -> Vec<DimensionResult> {
        Dimension::ALL
            .iter()
            .map(|&dimension| {
                let score = scores.get(dimension);
                let max_score = max_score_for(self.questions, dimension);
                DimensionResult {
                    dimension,
                    tendency: pole_label(dimension, score),
                    score,
                    max_score,
                    percentage: strength_percentage(score, max_score),
                }
            })
            .collect()
    }

    /// Score, classify and break down a complete response vector
    pub fn assess(&self, responses: &[Likert]) -> Result<Assessment, ScoreError> {
        let scores = self.score(responses)?;
        Ok(Assessment {
            personality_type: Self::classify(&scores),
            scores,
            dimensions: self.breakdown(&scores),
            responses: responses.to_vec(),
        })
    }
}

impl Default for Scorer<'static> {
    fn default() -> Self {
        Self::new(&QUESTIONS)
    }
}
