use clap::Subcommand;
use studymate_core::storage::Database;
use studymate_core::timer::{ElapsedTimer, TimerSnapshot};
use studymate_core::{StudySession, TimerKind};

use super::format_hms;

const TIMER_KEY: &str = "elapsed_timer";
const SESSION_KEY: &str = "elapsed_timer_session";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start (or resume) elapsed time tracking
    Start {
        /// Optional label shown on the floating widget
        #[arg(long)]
        message: Option<String>,
    },
    /// Pause elapsed time tracking, keeping the accumulated total
    Pause,
    /// Resume from the accumulated total
    Resume,
    /// Reset the total back to zero
    Reset,
    /// Print the current elapsed reading
    Status {
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn load_timer(db: &Database) -> ElapsedTimer {
    if let Ok(Some(json)) = db.kv_get(TIMER_KEY) {
        if let Ok(snapshot) = serde_json::from_str::<TimerSnapshot>(&json) {
            return ElapsedTimer::from_snapshot(snapshot);
        }
    }
    ElapsedTimer::new()
}

fn save_timer(db: &Database, timer: &ElapsedTimer) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(&timer.snapshot())?;
    db.kv_set(TIMER_KEY, &json)?;
    Ok(())
}

/// Keep the session row for the floating widget in step with the timer.
fn record_session(
    db: &Database,
    timer: &ElapsedTimer,
    message: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let existing = match db.kv_get(SESSION_KEY)? {
        Some(id) => db.get_session(&id)?,
        None => None,
    };
    let mut session = existing.unwrap_or_else(|| StudySession::new(TimerKind::Timer, message));
    if let Some(text) = message {
        session.message = Some(text.to_string());
    }
    session.active = timer.is_active();
    session.display_secs = timer.elapsed_secs();
    db.save_session(&session)?;
    db.kv_set(SESSION_KEY, &session.id)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut timer = load_timer(&db);

    match action {
        TimerAction::Start { message } => {
            timer.start();
            save_timer(&db, &timer)?;
            record_session(&db, &timer, message.as_deref())?;
            println!("timer running at {}", format_hms(timer.elapsed_secs()));
        }
        TimerAction::Pause => {
            timer.pause();
            save_timer(&db, &timer)?;
            record_session(&db, &timer, None)?;
            println!("timer paused at {}", format_hms(timer.elapsed_secs()));
        }
        TimerAction::Resume => {
            timer.start();
            save_timer(&db, &timer)?;
            record_session(&db, &timer, None)?;
            println!("timer running at {}", format_hms(timer.elapsed_secs()));
        }
        TimerAction::Reset => {
            timer.reset(0);
            save_timer(&db, &timer)?;
            record_session(&db, &timer, None)?;
            println!("timer reset");
        }
        TimerAction::Status { json } => {
            if json {
                let status = serde_json::json!({
                    "elapsed_secs": timer.elapsed_secs(),
                    "active": timer.is_active(),
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                let state = if timer.is_active() { "running" } else { "paused" };
                println!("{} ({state})", format_hms(timer.elapsed_secs()));
            }
        }
    }

    Ok(())
}
