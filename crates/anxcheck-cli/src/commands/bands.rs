use anxcheck_core::severity_bands;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum BandsAction {
    /// Show the score interpretation table
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: BandsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BandsAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(severity_bands())?);
            } else {
                println!("Score Interpretation:");
                for band in severity_bands() {
                    println!("  {:>2}-{:<2}  {}", band.lower, band.upper, band.level);
                }
            }
        }
    }
    Ok(())
}
