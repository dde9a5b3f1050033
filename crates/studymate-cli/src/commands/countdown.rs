use clap::Subcommand;
use studymate_core::integrations::{ConsoleNotifier, Notifier};
use studymate_core::storage::Database;
use studymate_core::timer::{Countdown, CountdownSnapshot};
use studymate_core::Event;

use super::format_hms;

const COUNTDOWN_KEY: &str = "countdown_timer";

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Arm a countdown and start it running
    Start {
        /// Duration in seconds
        #[arg(long)]
        secs: u64,
    },
    /// Pause the countdown
    Pause,
    /// Resume the countdown
    Resume,
    /// Re-arm the countdown at its configured duration
    Reset,
    /// Print remaining time, firing the completion event if it is due
    Status {
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn load_countdown(db: &Database) -> Countdown {
    if let Ok(Some(json)) = db.kv_get(COUNTDOWN_KEY) {
        if let Ok(snapshot) = serde_json::from_str::<CountdownSnapshot>(&json) {
            return Countdown::from_snapshot(snapshot);
        }
    }
    Countdown::new(0)
}

fn save_countdown(db: &Database, countdown: &Countdown) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(&countdown.snapshot())?;
    db.kv_set(COUNTDOWN_KEY, &json)?;
    Ok(())
}

/// Deliver the completion notification. Delivery failures are not fatal.
fn announce(event: &Event) {
    if let Event::CountdownCompleted { duration_secs, .. } = event {
        let _ = ConsoleNotifier.notify(
            "Time's up!",
            &format!("Countdown of {} finished.", format_hms(*duration_secs)),
        );
    }
}

pub fn run(action: CountdownAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut countdown = load_countdown(&db);

    match action {
        CountdownAction::Start { secs } => {
            countdown.set_duration(secs);
            countdown.start();
            save_countdown(&db, &countdown)?;
            println!("countdown running, {} remaining", format_hms(countdown.remaining_secs()));
        }
        CountdownAction::Pause => {
            countdown.pause();
            save_countdown(&db, &countdown)?;
            println!("countdown paused, {} remaining", format_hms(countdown.remaining_secs()));
        }
        CountdownAction::Resume => {
            countdown.start();
            save_countdown(&db, &countdown)?;
            println!("countdown running, {} remaining", format_hms(countdown.remaining_secs()));
        }
        CountdownAction::Reset => {
            countdown.reset();
            save_countdown(&db, &countdown)?;
            println!("countdown reset to {}", format_hms(countdown.duration_secs()));
        }
        CountdownAction::Status { json } => {
            let fired = countdown.tick();
            save_countdown(&db, &countdown)?;
            if let Some(event) = &fired {
                announce(event);
            }
            if json {
                let status = serde_json::json!({
                    "remaining_secs": countdown.remaining_secs(),
                    "duration_secs": countdown.duration_secs(),
                    "active": countdown.is_active(),
                    "completed": fired,
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                let state = if countdown.is_active() { "running" } else { "paused" };
                println!("{} remaining ({state})", format_hms(countdown.remaining_secs()));
            }
        }
    }

    Ok(())
}
