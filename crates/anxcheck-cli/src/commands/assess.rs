use std::io::{self, BufRead, Write};

use anxcheck_core::{AssessmentReport, AssessmentWizard};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum AssessAction {
    /// Walk the questionnaire and print the report
    Run {
        /// Non-interactive: comma-separated values 0-4, one per question
        #[arg(long)]
        answers: Option<String>,
        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AssessAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AssessAction::Run { answers, json } => {
            let mut wizard = AssessmentWizard::standard()?;
            match answers {
                Some(raw) => {
                    let values = super::parse_answers(wizard.catalog(), &raw)
                        .map_err(Box::<dyn std::error::Error>::from)?;
                    for value in values {
                        if let Some(question) = wizard.current_question() {
                            let id = question.id;
                            wizard.answer(id, value)?;
                            wizard.advance()?;
                        }
                    }
                }
                None => run_interactive(&mut wizard)?,
            }

            let report = AssessmentReport::from_wizard(&wizard)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.render_text());
            }
            Ok(())
        }
    }
}

/// Prompt loop over stdin. Invalid input and rejected transitions re-ask the
/// current question, mirroring the disabled-button behavior of a GUI.
fn run_interactive(wizard: &mut AssessmentWizard) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let total = wizard.catalog().len();

    println!("{}", wizard.catalog().title);
    println!("{}\n", wizard.catalog().audience);

    while !wizard.is_complete() {
        let (id, text) = match wizard.current_question() {
            Some(q) => (q.id, q.text.clone()),
            None => break,
        };
        let index = wizard.current_index().unwrap_or(0);

        println!(
            "Question {} of {}  ({:.0}%)",
            index + 1,
            total,
            wizard.progress_pct()
        );
        println!("{}", wizard.catalog().timeframe);
        println!("  {text}\n");
        for option in wizard.catalog().options() {
            let marker = if wizard.response_for(id) == Some(option.value) {
                "*"
            } else {
                " "
            };
            println!("  [{}]{marker} {}", option.value, option.label);
        }
        print!("\nSelect 0-4 (b = back): ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Err("input ended before the assessment completed".into()),
        };
        let input = line.trim();
        println!();

        if input.eq_ignore_ascii_case("b") {
            if let Err(e) = wizard.retreat() {
                println!("{e}\n");
            }
            continue;
        }
        let value: u8 = match input.parse() {
            Ok(v) => v,
            Err(_) => {
                println!("Please enter a number between 0 and 4.\n");
                continue;
            }
        };
        if let Err(e) = wizard.answer(id, value) {
            println!("{e}\n");
            continue;
        }
        wizard.advance()?;
    }
    Ok(())
}
