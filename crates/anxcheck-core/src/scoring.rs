//! Scoring: pure functions over a response map.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::wizard::ResponseMap;

/// Sum of all recorded values. Missing entries contribute 0.
///
/// The wizard only builds reports after `Completed`, where all entries are
/// present, but the sum is defined for partial maps too.
pub fn total_score(responses: &ResponseMap) -> u8 {
    responses.values().sum()
}

/// Per-question rows of a scored session, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub rows: Vec<ScoreRow>,
    pub total: u8,
}

/// One question with its selected response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRow {
    pub question_id: u8,
    pub question_text: String,
    pub value: u8,
    pub option_label: String,
}

impl ScoreBreakdown {
    /// Join the catalog with a response map. Unanswered questions are
    /// omitted from the rows and contribute 0 to the total.
    pub fn build(catalog: &Catalog, responses: &ResponseMap) -> Self {
        let rows = catalog
            .questions()
            .iter()
            .filter_map(|q| {
                let value = *responses.get(&q.id)?;
                Some(ScoreRow {
                    question_id: q.id,
                    question_text: q.text.clone(),
                    value,
                    option_label: catalog
                        .option_label(value)
                        .unwrap_or_default()
                        .to_string(),
                })
            })
            .collect();
        Self {
            rows,
            total: total_score(responses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_map_scores_zero() {
        assert_eq!(total_score(&ResponseMap::new()), 0);
    }

    #[test]
    fn scenario_sums_to_sixteen() {
        let values = [2u8, 1, 0, 3, 2, 1, 0, 4, 2, 1];
        let responses: ResponseMap = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as u8 + 1, *v))
            .collect();
        assert_eq!(total_score(&responses), 16);
    }

    #[test]
    fn breakdown_follows_catalog_order() {
        let catalog = Catalog::standard().unwrap();
        let responses: ResponseMap = [(2, 3u8), (1, 1u8), (7, 4u8)].into_iter().collect();
        let breakdown = ScoreBreakdown::build(&catalog, &responses);
        assert_eq!(breakdown.total, 8);
        let ids: Vec<u8> = breakdown.rows.iter().map(|r| r.question_id).collect();
        assert_eq!(ids, vec![1, 2, 7]);
        assert_eq!(breakdown.rows[0].option_label, "Occasionally");
    }

    proptest! {
        /// The total equals the arithmetic sum of the chosen values,
        /// regardless of insertion order.
        #[test]
        fn score_is_sum_of_values(values in proptest::collection::vec(0u8..=4, 10)) {
            let responses: ResponseMap = values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as u8 + 1, *v))
                .collect();
            let expected: u8 = values.iter().sum();
            prop_assert_eq!(total_score(&responses), expected);
            prop_assert!(total_score(&responses) <= 40);
        }
    }
}
