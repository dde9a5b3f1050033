use clap::Subcommand;
use studymate_core::integrations::MockGoogleCalendar;
use studymate_core::storage::{Database, Settings};
use studymate_core::{Day, Planner, PlannerService, PlannerTask, Priority};

use super::auth::load_auth;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to a day of the weekly planner
    Add {
        /// Day of the week (e.g. monday, tue)
        day: Day,
        /// Task description
        text: String,
        /// Time estimate in minutes
        #[arg(long, default_value = "30")]
        time: u32,
        /// Priority: low, medium or high
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Practice problem count
        #[arg(long, default_value = "0")]
        problems: u32,
    },
    /// List tasks, optionally for one day
    List {
        /// Restrict to one day
        #[arg(long)]
        day: Option<Day>,
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Toggle a task's completed flag
    Toggle {
        day: Day,
        /// Task id
        id: String,
    },
    /// Remove a task
    Remove {
        day: Day,
        /// Task id
        id: String,
    },
    /// Remove every task on a day
    Clear { day: Day },
    /// Push every unsynced task to the calendar
    Sync,
}

fn print_day(planner: &Planner, day: Day) {
    let tasks = planner.tasks(day);
    if tasks.is_empty() {
        return;
    }
    println!("{day}:");
    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        let synced = if task.calendar_event_id.is_some() {
            " [synced]"
        } else {
            ""
        };
        println!(
            "  [{mark}] {} ({} min, {}, {} problems){synced}  {}",
            task.text, task.time_min, task.priority, task.problems, task.id
        );
    }
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut planner = db.load_planner();
    let settings = Settings::load_or_default();
    let auth = load_auth(&db);
    let mut calendar = MockGoogleCalendar::new();
    let mut service = PlannerService::new(&auth, &mut calendar, settings.sync.calendar);

    match action {
        TaskAction::Add {
            day,
            text,
            time,
            priority,
            problems,
        } => {
            let task = PlannerTask::new(&text, time, priority, problems);
            let id = task.id.clone();
            service.save_task(&mut planner, day, task);
            db.save_planner(&planner)?;
            println!("{id}");
        }
        TaskAction::List { day, json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&planner)?);
            } else if let Some(day) = day {
                print_day(&planner, day);
            } else {
                for day in Day::ALL {
                    print_day(&planner, day);
                }
            }
        }
        TaskAction::Toggle { day, id } => {
            if !planner.toggle_complete(day, &id) {
                eprintln!("no task {id} on {day}");
                std::process::exit(1);
            }
            db.save_planner(&planner)?;
            println!("ok");
        }
        TaskAction::Remove { day, id } => match service.delete_task(&mut planner, day, &id) {
            Some(task) => {
                db.save_planner(&planner)?;
                println!("removed {}", task.text);
            }
            None => {
                eprintln!("no task {id} on {day}");
                std::process::exit(1);
            }
        },
        TaskAction::Clear { day } => {
            let removed = service.clear_day(&mut planner, day);
            db.save_planner(&planner)?;
            println!("removed {} tasks", removed.len());
        }
        TaskAction::Sync => {
            let pushed = service.sync_all(&mut planner);
            db.save_planner(&planner)?;
            println!("synced {pushed} tasks");
        }
    }

    Ok(())
}
