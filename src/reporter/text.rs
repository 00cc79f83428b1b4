//! Plain-text export of a finished assessment

use crate::descriptions::{axis_name, describe, identity_description};
use crate::scoring::response_digest;
use crate::Assessment;
use chrono::{DateTime, SecondsFormat, Utc};

/// Renders the "PERSONALITY QUIZ RESULTS" export layout
pub struct TextReporter {
    respondent: Option<String>,
}

impl TextReporter {
    pub fn new() -> Self {
        Self { respondent: None }
    }

    /// Name printed in the header instead of "User"
    pub fn respondent(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.respondent = Some(name);
        }
        self
    }

    pub fn report(&self, assessment: &Assessment) -> String {
        self.report_at(assessment, Utc::now())
    }

    pub fn report_at(&self, assessment: &Assessment, completed_at: DateTime<Utc>) -> String {
        let description = describe(assessment.base_type());
        let mut text = format!(
            "PERSONALITY QUIZ RESULTS - {}\n\n",
            self.respondent.as_deref().unwrap_or("User")
        );
        text.push_str(&format!(
            "Completed: {}\n",
            completed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        text.push_str(&format!(
            "Personality Type: {}\n",
            assessment.personality_type
        ));
        text.push_str(&format!(
            "Response Digest: {}\n\n",
            response_digest(&assessment.responses)
        ));

        text.push_str("PERSONALITY DIMENSIONS:\n");
        for dim in &assessment.dimensions {
            text.push_str(&format!(
                "- {} ({}%) - {}\n",
                axis_name(dim.dimension),
                dim.percentage,
                dim.tendency
            ));
        }
        text.push('\n');

        text.push_str("TYPE PROFILE:\n");
        text.push_str(&format!("{} - {}\n", description.name, description.summary));
        text.push_str(identity_description(assessment.identity()));
        text.push('\n');
        text
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}
