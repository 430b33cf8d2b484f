use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "anxcheck-cli", version, about = "Anxcheck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the assessment wizard
    Assess {
        #[command(subcommand)]
        action: commands::assess::AssessAction,
    },
    /// Inspect the question catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Score an answer vector without the wizard
    Score {
        #[command(subcommand)]
        action: commands::score::ScoreAction,
    },
    /// Severity band reference
    Bands {
        #[command(subcommand)]
        action: commands::bands::BandsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Assess { action } => commands::assess::run(action),
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Score { action } => commands::score::run(action),
        Commands::Bands { action } => commands::bands::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
