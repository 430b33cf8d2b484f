//! Completed-assessment report.
//!
//! The report is everything the result view needs: score, severity band,
//! recommendation, the interpretation grid, the per-question breakdown, and
//! the fixed reminder/attribution text. It serializes to JSON for the export
//! path and renders to plain text for the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::scoring::ScoreBreakdown;
use crate::severity::{classify, severity_bands, SeverityLevel, SeverityTone};
use crate::wizard::AssessmentWizard;

/// One row of the score interpretation grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretationRow {
    /// Display range, e.g. "8-13".
    pub range: String,
    pub level: SeverityLevel,
}

/// Summary of a completed assessment session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub session_id: String,
    pub taken_at: DateTime<Utc>,
    pub total_score: u8,
    pub severity: SeverityLevel,
    /// Badge text, e.g. "Moderate Anxiety".
    pub badge_label: String,
    pub tone: SeverityTone,
    pub recommendation: String,
    pub interpretation: Vec<InterpretationRow>,
    pub breakdown: ScoreBreakdown,
    pub reminders: Vec<String>,
    pub attribution: String,
}

const REMINDERS: [&str; 3] = [
    "This assessment is a screening tool, not a diagnosis",
    "Professional consultation is recommended for comprehensive evaluation",
    "Crisis support is available 24/7 if you need immediate help",
];

impl AssessmentReport {
    /// Build the report for a completed session.
    pub fn from_wizard(wizard: &AssessmentWizard) -> Result<Self, WizardError> {
        if !wizard.is_complete() {
            return Err(WizardError::NotCompleted);
        }
        let breakdown = ScoreBreakdown::build(wizard.catalog(), wizard.responses());
        let band = classify(breakdown.total);
        Ok(Self {
            session_id: wizard.session_id().to_string(),
            taken_at: wizard.completed_at().unwrap_or_else(Utc::now),
            total_score: breakdown.total,
            severity: band.level,
            badge_label: band.level.badge_label(),
            tone: band.tone,
            recommendation: band.recommendation.to_string(),
            interpretation: severity_bands()
                .iter()
                .map(|b| InterpretationRow {
                    range: format!("{}-{}", b.lower, b.upper),
                    level: b.level,
                })
                .collect(),
            breakdown,
            reminders: REMINDERS.iter().map(|s| s.to_string()).collect(),
            attribution: wizard.catalog().attribution.clone(),
        })
    }

    /// Plain-text rendering for the CLI result view.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Assessment Complete\n");
        out.push_str(&format!(
            "Total Score: {}  [{}]\n\n",
            self.total_score, self.badge_label
        ));
        out.push_str(&self.recommendation);
        out.push_str("\n\nScore Interpretation:\n");
        for row in &self.interpretation {
            out.push_str(&format!("  {:<6} {}\n", row.range, row.level));
        }
        out.push_str("\nResponses:\n");
        for row in &self.breakdown.rows {
            out.push_str(&format!(
                "  {:>2}. {} -> {} ({})\n",
                row.question_id, row.question_text, row.option_label, row.value
            ));
        }
        out.push_str("\nImportant Reminders:\n");
        for reminder in &self.reminders {
            out.push_str(&format!("  - {reminder}\n"));
        }
        out.push('\n');
        out.push_str(&self.attribution);
        out.push('\n');
        out
    }
}
