//! The question catalog: the fixed instrument the wizard walks.
//!
//! The catalog holds the ten GAD severity-measure questions, the shared
//! five-point response scale, and the instrument metadata the frontend
//! renders around them. It is built once at startup and never mutated;
//! `validate()` rejects a defective build before any session can start.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::severity::validate_bands;

/// A single question in the instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, 1-based, order-significant.
    pub id: u8,
    /// Prompt text, completing the catalog's timeframe sentence.
    pub text: String,
}

/// One point on the shared response scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOption {
    /// Numeric value contributed to the total score.
    pub value: u8,
    /// Display label.
    pub label: String,
}

/// The full instrument: questions, response scale, and display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Instrument title.
    pub title: String,
    /// Audience line shown under the title.
    pub audience: String,
    /// Timeframe sentence each question completes.
    pub timeframe: String,
    /// Attribution footer.
    pub attribution: String,
    questions: Vec<Question>,
    options: Vec<ResponseOption>,
}

impl Catalog {
    /// Build the standard ten-question instrument.
    ///
    /// Returns an error if the static tables are malformed; this is a fatal
    /// configuration defect, not a runtime condition.
    pub fn standard() -> Result<Self, CatalogError> {
        let catalog = Self {
            title: "Generalized Anxiety Assessment".to_string(),
            audience: "Child Age 11-17".to_string(),
            timeframe: "During the PAST 7 DAYS, I have...".to_string(),
            attribution: "Based on the DSM-5 Severity Measure for Generalized Anxiety \
                          Disorder (Child Age 11-17) \u{a9} American Psychiatric Association"
                .to_string(),
            questions: standard_questions(),
            options: standard_options(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// All questions, in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The shared response scale, in ascending value order.
    pub fn options(&self) -> &[ResponseOption] {
        &self.options
    }

    /// Number of questions in the instrument.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id.
    pub fn question_by_id(&self, id: u8) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Display label for a response value, if it is on the scale.
    pub fn option_label(&self, value: u8) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Highest value on the response scale.
    pub fn max_option_value(&self) -> u8 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }

    /// Check the static tables: sequential unique ids, a complete 0-4
    /// response scale, and a severity table that partitions the score range.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let mut seen = std::collections::BTreeSet::new();
        for (position, question) in self.questions.iter().enumerate() {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestionId(question.id));
            }
            let expected = position as u8 + 1;
            if question.id != expected {
                return Err(CatalogError::NonSequentialIds {
                    position,
                    id: question.id,
                    expected,
                });
            }
        }

        // The scale must be exactly 0..=4 in ascending order.
        let values: Vec<u8> = self.options.iter().map(|o| o.value).collect();
        if values != [0, 1, 2, 3, 4] {
            return Err(CatalogError::BadOptionSet);
        }

        let max_score = self.questions.len() as u8 * self.max_option_value();
        validate_bands(max_score)
    }
}

fn standard_questions() -> Vec<Question> {
    let prompts = [
        "felt moments of sudden terror, fear, or fright",
        "felt anxious, worried, or nervous",
        "had thoughts of bad things happening, such as family tragedy, ill health, \
         loss of a job, or accidents",
        "felt a racing heart, sweaty, trouble breathing, faint, or shaky",
        "felt tense muscles, felt on edge or restless, or had trouble relaxing or \
         trouble sleeping",
        "avoided, or did not approach or enter, situations about which I worry",
        "left situations early or participated only minimally due to worries",
        "spent lots of time making decisions, putting off making decisions, or \
         preparing for situations, due to worries",
        "sought reassurance from others due to worries",
        "needed help to cope with anxiety (e.g., alcohol or medication, \
         superstitious objects, or other people)",
    ];
    prompts
        .iter()
        .enumerate()
        .map(|(i, text)| Question {
            id: i as u8 + 1,
            text: (*text).to_string(),
        })
        .collect()
}

fn standard_options() -> Vec<ResponseOption> {
    [
        (0, "Never"),
        (1, "Occasionally"),
        (2, "Half of the time"),
        (3, "Most of the time"),
        (4, "All of the time"),
    ]
    .iter()
    .map(|(value, label)| ResponseOption {
        value: *value,
        label: (*label).to_string(),
    })
    .collect()
}
