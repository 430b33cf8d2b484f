use anxcheck_core::{classify, Catalog, ResponseMap, ScoreBreakdown};
use clap::Subcommand;
use serde::Serialize;

#[derive(Subcommand)]
pub enum ScoreAction {
    /// Score a comma-separated answer vector, e.g. 2,1,0,3,2,1,0,4,2,1
    Compute {
        /// One value 0-4 per question, in catalog order
        values: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ScoreOutput {
    total_score: u8,
    severity: &'static str,
    recommendation: &'static str,
    breakdown: ScoreBreakdown,
}

pub fn run(action: ScoreAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScoreAction::Compute { values, json } => {
            let catalog = Catalog::standard()?;
            let values = super::parse_answers(&catalog, &values)
                .map_err(Box::<dyn std::error::Error>::from)?;
            let responses: ResponseMap = values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as u8 + 1, *v))
                .collect();
            let breakdown = ScoreBreakdown::build(&catalog, &responses);
            let band = classify(breakdown.total);

            if json {
                let output = ScoreOutput {
                    total_score: breakdown.total,
                    severity: band.level.name(),
                    recommendation: band.recommendation,
                    breakdown,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Total Score: {}  [{}]", breakdown.total, band.level.badge_label());
                println!("{}", band.recommendation);
            }
        }
    }
    Ok(())
}
