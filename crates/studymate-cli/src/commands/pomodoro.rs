use clap::Subcommand;
use studymate_core::integrations::{ConsoleNotifier, Notifier};
use studymate_core::storage::Database;
use studymate_core::timer::{PomodoroCycle, PomodoroMode};

use super::format_hms;

const CYCLE_KEY: &str = "pomodoro_cycle";

#[derive(Subcommand)]
pub enum PomodoroAction {
    /// Print the current mode and completed work count
    Status {
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Mark the current period finished and advance the cycle
    Complete,
    /// Jump to a mode without touching the work counter
    Select {
        /// Target mode: work, short-break or long-break
        mode: PomodoroMode,
    },
    /// Discard the saved cycle and start a fresh instance. Within a
    /// running cycle the completed-work counter never goes down; this
    /// replaces the whole cycle, counter included.
    Reset,
}

fn load_cycle(db: &Database) -> PomodoroCycle {
    if let Ok(Some(json)) = db.kv_get(CYCLE_KEY) {
        if let Ok(cycle) = serde_json::from_str::<PomodoroCycle>(&json) {
            return cycle;
        }
    }
    PomodoroCycle::new()
}

fn save_cycle(db: &Database, cycle: &PomodoroCycle) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(cycle)?;
    db.kv_set(CYCLE_KEY, &json)?;
    Ok(())
}

pub fn run(action: PomodoroAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut cycle = load_cycle(&db);

    match action {
        PomodoroAction::Status { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&cycle)?);
            } else {
                println!(
                    "{} ({}), {} work sessions completed",
                    cycle.mode(),
                    format_hms(cycle.mode().duration_secs()),
                    cycle.completed_work()
                );
            }
        }
        PomodoroAction::Complete => {
            let event = cycle.complete();
            save_cycle(&db, &cycle)?;
            let _ = ConsoleNotifier.notify("Pomodoro", cycle.mode().message());
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        PomodoroAction::Select { mode } => {
            cycle.select(mode);
            save_cycle(&db, &cycle)?;
            println!("{}", cycle.mode());
        }
        PomodoroAction::Reset => {
            cycle = PomodoroCycle::new();
            save_cycle(&db, &cycle)?;
            println!("cycle reset");
        }
    }

    Ok(())
}
