//! JSON reporter for machine-readable output

use crate::descriptions::{describe, identity_description};
use crate::scoring::response_digest;
use crate::{
    Assessment, BaseType, DimensionResult, DimensionScores, Identity, Likert, Polarity, Question,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report an assessment stamped with the current time
    pub fn report(&self, assessment: &Assessment) -> String {
        self.report_at(assessment, Utc::now())
    }

    pub fn report_at(&self, assessment: &Assessment, completed_at: DateTime<Utc>) -> String {
        let description = describe(assessment.base_type());
        let output = JsonAssessment {
            personality_type: assessment.personality_type.to_string(),
            base_type: assessment.base_type(),
            identity: assessment.identity(),
            name: description.name,
            summary: description.summary,
            identity_description: identity_description(assessment.identity()),
            scores: &assessment.scores,
            dimensions: &assessment.dimensions,
            responses: &assessment.responses,
            response_digest: response_digest(&assessment.responses),
            completed_at: completed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        self.encode(&output, "{}")
    }

    /// The question table as an array
    pub fn questions(&self, questions: &[Question]) -> String {
        let entries: Vec<JsonQuestion> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| JsonQuestion {
                number: i + 1,
                text: q.text,
                dimension: q.dimension.to_string(),
                polarity: q.polarity,
                agree_means: match q.polarity {
                    Polarity::Positive => q.dimension.letters().0,
                    Polarity::Negative => q.dimension.letters().1,
                },
            })
            .collect();
        self.encode(&entries, "[]")
    }

    /// Type descriptions as an array
    pub fn types(&self, types: &[BaseType]) -> String {
        let entries: Vec<JsonType> = types
            .iter()
            .map(|&code| {
                let d = describe(code);
                JsonType {
                    code,
                    name: d.name,
                    summary: d.summary,
                }
            })
            .collect();
        self.encode(&entries, "[]")
    }

    fn encode<T: Serialize>(&self, value: &T, fallback: &str) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonAssessment<'a> {
    #[serde(rename = "type")]
    personality_type: String,
    base_type: BaseType,
    identity: Identity,
    name: &'static str,
    summary: &'static str,
    identity_description: &'static str,
    scores: &'a DimensionScores,
    dimensions: &'a [DimensionResult],
    responses: &'a [Likert],
    response_digest: String,
    completed_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonQuestion {
    number: usize,
    text: &'static str,
    dimension: String,
    polarity: Polarity,
    /// Letter that agreement pushes toward
    agree_means: char,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonType {
    code: BaseType,
    name: &'static str,
    summary: &'static str,
}
