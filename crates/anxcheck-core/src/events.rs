use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::severity::SeverityLevel;
use crate::wizard::WizardState;

/// Every wizard transition produces an Event.
/// The frontend renders from events; the CLI prints them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    AnswerRecorded {
        question_id: u8,
        value: u8,
        at: DateTime<Utc>,
    },
    Advanced {
        from_index: usize,
        to_index: usize,
        at: DateTime<Utc>,
    },
    Retreated {
        from_index: usize,
        to_index: usize,
        at: DateTime<Utc>,
    },
    /// Final question submitted; the session moved to `Completed`.
    AssessmentCompleted {
        total_score: u8,
        severity: SeverityLevel,
        at: DateTime<Utc>,
    },
    /// Completed session cleared back to the first question.
    AssessmentReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: WizardState,
        question_index: Option<usize>,
        question_id: Option<u8>,
        question_text: Option<String>,
        answered: bool,
        selected_value: Option<u8>,
        answered_count: usize,
        total_questions: usize,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}
