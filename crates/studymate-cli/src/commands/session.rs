use clap::Subcommand;
use studymate_core::storage::Database;

use super::format_hms;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Show the most recent study session
    Last {
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete all recorded sessions
    Clear,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        SessionAction::Last { json } => match db.last_session()? {
            Some(session) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&session)?);
                } else {
                    let state = if session.active { "active" } else { "finished" };
                    println!(
                        "{} session started {} ({state}, {})",
                        session.kind,
                        session.started_at.format("%Y-%m-%d %H:%M UTC"),
                        format_hms(session.display_secs)
                    );
                    if let Some(message) = &session.message {
                        println!("  {message}");
                    }
                }
            }
            None => println!("no sessions recorded"),
        },
        SessionAction::Clear => {
            db.clear_sessions()?;
            println!("ok");
        }
    }

    Ok(())
}
