//! Severity classification: total score to band lookup.
//!
//! The four bands are fixed at compile time and partition the closed score
//! range [0, 40] with no gaps or overlaps. `validate_bands` re-checks that
//! partition at startup so a defective table can never classify a session.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Severity level of a completed assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl SeverityLevel {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            SeverityLevel::Minimal => "Minimal",
            SeverityLevel::Mild => "Mild",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::Severe => "Severe",
        }
    }

    /// Badge label shown on the result view.
    pub fn badge_label(&self) -> String {
        format!("{} Anxiety", self.name())
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display tone for a band. The render boundary maps these to its own
/// palette; the core only names the semantic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTone {
    Calming,
    Support,
    Primary,
    Destructive,
}

/// One row of the severity table: a closed score interval with its label,
/// tone, and recommendation text.
#[derive(Debug, Clone, Serialize)]
pub struct SeverityBand {
    /// Inclusive lower bound.
    pub lower: u8,
    /// Inclusive upper bound.
    pub upper: u8,
    pub level: SeverityLevel,
    pub tone: SeverityTone,
    pub recommendation: &'static str,
}

/// The fixed severity table, in ascending order of lower bound.
const BANDS: [SeverityBand; 4] = [
    SeverityBand {
        lower: 0,
        upper: 7,
        level: SeverityLevel::Minimal,
        tone: SeverityTone::Calming,
        recommendation: "Your responses suggest minimal anxiety symptoms. Continue with \
                         healthy coping strategies and regular self-care.",
    },
    SeverityBand {
        lower: 8,
        upper: 13,
        level: SeverityLevel::Mild,
        tone: SeverityTone::Support,
        recommendation: "Your responses suggest mild anxiety symptoms. Consider discussing \
                         these feelings with a trusted adult, school counselor, or \
                         healthcare provider.",
    },
    SeverityBand {
        lower: 14,
        upper: 19,
        level: SeverityLevel::Moderate,
        tone: SeverityTone::Primary,
        recommendation: "Your responses suggest moderate anxiety symptoms. It would be \
                         beneficial to speak with a mental health professional for support \
                         and guidance.",
    },
    SeverityBand {
        lower: 20,
        upper: 40,
        level: SeverityLevel::Severe,
        tone: SeverityTone::Destructive,
        recommendation: "Your responses suggest severe anxiety symptoms. Please reach out \
                         to a mental health professional, trusted adult, or crisis support \
                         service as soon as possible.",
    },
];

/// The full severity table, for rendering the interpretation grid.
pub fn severity_bands() -> &'static [SeverityBand] {
    &BANDS
}

/// Classify a total score.
///
/// Bands are checked in ascending order of lower bound; the first containing
/// interval wins. Total over [0, 40] by the partition invariant; scores above
/// the range (impossible by construction) fall into the last band.
pub fn classify(score: u8) -> &'static SeverityBand {
    BANDS
        .iter()
        .find(|band| score >= band.lower && score <= band.upper)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// Assert that the bands partition [0, max_score] exactly: ascending,
/// contiguous, first lower bound 0, last upper bound max_score.
pub fn validate_bands(max_score: u8) -> Result<(), CatalogError> {
    let mut expected_lower = 0u8;
    for band in &BANDS {
        if band.lower > band.upper || band.upper > max_score {
            return Err(CatalogError::BandMalformed {
                lower: band.lower,
                upper: band.upper,
            });
        }
        if band.lower > expected_lower {
            return Err(CatalogError::BandGap {
                score: expected_lower,
            });
        }
        if band.lower < expected_lower {
            return Err(CatalogError::BandOverlap { score: band.lower });
        }
        expected_lower = band.upper + 1;
    }
    if expected_lower != max_score + 1 {
        return Err(CatalogError::BandGap {
            score: expected_lower,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bands_partition_score_range() {
        validate_bands(40).unwrap();
    }

    #[test]
    fn boundary_scores() {
        assert_eq!(classify(7).level, SeverityLevel::Minimal);
        assert_eq!(classify(8).level, SeverityLevel::Mild);
        assert_eq!(classify(13).level, SeverityLevel::Mild);
        assert_eq!(classify(14).level, SeverityLevel::Moderate);
        assert_eq!(classify(19).level, SeverityLevel::Moderate);
        assert_eq!(classify(20).level, SeverityLevel::Severe);
    }

    #[test]
    fn extremes() {
        assert_eq!(classify(0).level, SeverityLevel::Minimal);
        assert_eq!(classify(40).level, SeverityLevel::Severe);
    }

    #[test]
    fn tones_follow_levels() {
        assert_eq!(classify(0).tone, SeverityTone::Calming);
        assert_eq!(classify(10).tone, SeverityTone::Support);
        assert_eq!(classify(16).tone, SeverityTone::Primary);
        assert_eq!(classify(30).tone, SeverityTone::Destructive);
    }

    proptest! {
        /// Every score in range falls in exactly one band.
        #[test]
        fn classification_is_total_and_unique(score in 0u8..=40) {
            let matches = severity_bands()
                .iter()
                .filter(|b| score >= b.lower && score <= b.upper)
                .count();
            prop_assert_eq!(matches, 1);
            let band = classify(score);
            prop_assert!(score >= band.lower && score <= band.upper);
        }
    }
}
