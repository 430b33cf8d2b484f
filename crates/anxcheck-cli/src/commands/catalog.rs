use anxcheck_core::Catalog;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List the questions in presentation order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the shared response scale
    Options {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::standard()?;
    match action {
        CatalogAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.questions())?);
            } else {
                println!("{} ({})", catalog.title, catalog.audience);
                println!("{}\n", catalog.timeframe);
                for question in catalog.questions() {
                    println!("  {:>2}. {}", question.id, question.text);
                }
            }
        }
        CatalogAction::Options { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.options())?);
            } else {
                for option in catalog.options() {
                    println!("  [{}] {}", option.value, option.label);
                }
            }
        }
    }
    Ok(())
}
