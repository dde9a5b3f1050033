use clap::Subcommand;
use studymate_core::integrations::{MockTextService, TextService};

#[derive(Subcommand)]
pub enum ToolsAction {
    /// Summarize a passage of text
    Summarize {
        /// Text to summarize
        text: String,
    },
    /// Classify a practice question by subject, topic and difficulty
    Check {
        /// Question text
        question: String,
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ToolsAction) -> Result<(), Box<dyn std::error::Error>> {
    let service = MockTextService::from_env();

    match action {
        ToolsAction::Summarize { text } => {
            println!("{}", service.summarize(&text));
        }
        ToolsAction::Check { question, json } => match service.classify(&question) {
            Ok(classification) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&classification)?);
                } else {
                    println!(
                        "{} / {} ({})",
                        classification.subject, classification.topic, classification.difficulty
                    );
                    for suggestion in &classification.suggestions {
                        println!("  - {suggestion}");
                    }
                }
            }
            Err(message) => println!("{message}"),
        },
    }

    Ok(())
}
