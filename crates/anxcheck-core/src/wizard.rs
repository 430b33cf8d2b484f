//! Assessment wizard implementation.
//!
//! The wizard is a single-session navigation state machine over the question
//! catalog. It does not render anything - the caller drives it with
//! `answer`/`advance`/`retreat`/`reset` and renders from `snapshot()`.
//!
//! ## State Transitions
//!
//! ```text
//! AtQuestion(0) -> ... -> AtQuestion(N-1) -> Completed -> AtQuestion(0)
//! ```
//!
//! Advancing past a question requires a recorded answer for it, so
//! `Completed` is unreachable with fewer than N answers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Question};
use crate::error::{CatalogError, WizardError};
use crate::events::Event;
use crate::scoring::total_score;

/// Question id to selected value. Grows as the user answers; cleared only by
/// a full reset.
pub type ResponseMap = BTreeMap<u8, u8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum WizardState {
    /// Presenting the question at this catalog index.
    AtQuestion { index: usize },
    /// All questions answered and submitted.
    Completed,
}

/// Core assessment wizard.
///
/// Owns the catalog and the response map exclusively; every operation is
/// synchronous and total for its guarded preconditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentWizard {
    catalog: Catalog,
    state: WizardState,
    responses: ResponseMap,
    /// Session identifier, rotated on reset.
    session_id: String,
    started_at: DateTime<Utc>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

impl AssessmentWizard {
    /// Create a wizard over the given catalog, at the first question with an
    /// empty response map.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: WizardState::AtQuestion { index: 0 },
            responses: ResponseMap::new(),
            session_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Create a wizard over the standard instrument.
    pub fn standard() -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::standard()?))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Index of the active question, or None once completed.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            WizardState::AtQuestion { index } => Some(index),
            WizardState::Completed => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index()
            .and_then(|i| self.catalog.questions().get(i))
    }

    /// Recorded value for a question id, if any.
    pub fn response_for(&self, question_id: u8) -> Option<u8> {
        self.responses.get(&question_id).copied()
    }

    /// Recorded value for the active question, if any.
    pub fn current_answer(&self) -> Option<u8> {
        self.current_question().and_then(|q| self.response_for(q.id))
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }

    pub fn is_complete(&self) -> bool {
        self.state == WizardState::Completed
    }

    /// 0.0 .. 1.0 progress: (i+1)/N while at question i, 1.0 once completed.
    pub fn progress(&self) -> f64 {
        let total = self.catalog.len();
        if total == 0 {
            return 0.0;
        }
        match self.state {
            WizardState::AtQuestion { index } => (index + 1) as f64 / total as f64,
            WizardState::Completed => 1.0,
        }
    }

    pub fn progress_pct(&self) -> f64 {
        self.progress() * 100.0
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let question = self.current_question();
        Event::StateSnapshot {
            state: self.state,
            question_index: self.current_index(),
            question_id: question.map(|q| q.id),
            question_text: question.map(|q| q.text.clone()),
            answered: self.current_answer().is_some(),
            selected_value: self.current_answer(),
            answered_count: self.answered_count(),
            total_questions: self.catalog.len(),
            progress_pct: self.progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record (or overwrite) the answer for the active question.
    /// Does not change the navigation state.
    pub fn answer(&mut self, question_id: u8, value: u8) -> Result<Event, WizardError> {
        let question = self
            .current_question()
            .ok_or(WizardError::AlreadyCompleted)?;
        if question.id != question_id {
            return Err(WizardError::QuestionMismatch {
                expected: question.id,
                got: question_id,
            });
        }
        if value > self.catalog.max_option_value() {
            return Err(WizardError::ValueOutOfRange { value });
        }
        self.responses.insert(question_id, value);
        Ok(Event::AnswerRecorded {
            question_id,
            value,
            at: Utc::now(),
        })
    }

    /// Move to the next question, or to `Completed` from the last one.
    /// Requires a recorded answer for the active question.
    pub fn advance(&mut self) -> Result<Event, WizardError> {
        let index = self.current_index().ok_or(WizardError::AlreadyCompleted)?;
        let question_id = self.catalog.questions()[index].id;
        if !self.responses.contains_key(&question_id) {
            return Err(WizardError::Unanswered { question_id });
        }
        if index + 1 < self.catalog.len() {
            self.state = WizardState::AtQuestion { index: index + 1 };
            Ok(Event::Advanced {
                from_index: index,
                to_index: index + 1,
                at: Utc::now(),
            })
        } else {
            self.state = WizardState::Completed;
            let now = Utc::now();
            self.completed_at = Some(now);
            let score = total_score(&self.responses);
            Ok(Event::AssessmentCompleted {
                total_score: score,
                severity: crate::severity::classify(score).level,
                at: now,
            })
        }
    }

    /// Move back one question. Recorded answers are kept, both for the
    /// question being left and the one being re-entered.
    pub fn retreat(&mut self) -> Result<Event, WizardError> {
        let index = self.current_index().ok_or(WizardError::AlreadyCompleted)?;
        if index == 0 {
            return Err(WizardError::AtFirstQuestion);
        }
        self.state = WizardState::AtQuestion { index: index - 1 };
        Ok(Event::Retreated {
            from_index: index,
            to_index: index - 1,
            at: Utc::now(),
        })
    }

    /// Clear the session and return to the first question.
    /// Only allowed from `Completed`.
    pub fn reset(&mut self) -> Result<Event, WizardError> {
        if self.state != WizardState::Completed {
            return Err(WizardError::NotCompleted);
        }
        self.responses.clear();
        self.state = WizardState::AtQuestion { index: 0 };
        self.session_id = uuid::Uuid::new_v4().to_string();
        self.started_at = Utc::now();
        self.completed_at = None;
        Ok(Event::AssessmentReset { at: Utc::now() })
    }
}
