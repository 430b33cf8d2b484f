//! # Anxcheck Core Library
//!
//! This library provides the core logic for Anxcheck, a screening tool based
//! on the DSM-5 Severity Measure for Generalized Anxiety Disorder
//! (Child Age 11-17). It implements a CLI-first philosophy where the whole
//! assessment is available via a standalone CLI binary, with any GUI being a
//! thin rendering layer over the same core library.
//!
//! ## Architecture
//!
//! - **Catalog**: The fixed ten-question instrument with its shared 0-4
//!   response scale, validated once at startup
//! - **Wizard**: A single-session state machine that walks the catalog one
//!   question at a time and records responses
//! - **Scoring/Severity**: Pure functions mapping a completed response map to
//!   a total score and a severity band
//! - **Report**: The completed-assessment summary handed to the render
//!   boundary (text or JSON)
//!
//! ## Key Components
//!
//! - [`Catalog`]: Instrument definition and validation
//! - [`AssessmentWizard`]: Core navigation state machine
//! - [`classify`]: Score to severity band lookup
//! - [`AssessmentReport`]: Completed-session summary

pub mod catalog;
pub mod error;
pub mod events;
pub mod report;
pub mod scoring;
pub mod severity;
pub mod wizard;

pub use catalog::{Catalog, Question, ResponseOption};
pub use error::{CatalogError, CoreError, Result, WizardError};
pub use events::Event;
pub use report::{AssessmentReport, InterpretationRow};
pub use scoring::{total_score, ScoreBreakdown, ScoreRow};
pub use severity::{classify, severity_bands, SeverityBand, SeverityLevel, SeverityTone};
pub use wizard::{AssessmentWizard, ResponseMap, WizardState};
