use clap::Subcommand;
use studymate_core::data;
use studymate_core::storage::Database;
use studymate_core::syllabus::{academic_year_start, analyze, completed_chapters, study_week};
use studymate_core::InstituteSyllabus;

const IMPORTED_KEY: &str = "imported_syllabi";

#[derive(Subcommand)]
pub enum SyllabusAction {
    /// List available institute syllabi
    List,
    /// Compare planner progress against an institute's timeline
    Status {
        /// Institute name (defaults to the first available syllabus)
        #[arg(long)]
        institute: Option<String>,
        /// Override the study week instead of deriving it from the date
        #[arg(long)]
        week: Option<u32>,
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Import a syllabus from a JSON file
    Import {
        /// Path to the JSON file
        file: String,
    },
}

fn load_imported(db: &Database) -> Vec<InstituteSyllabus> {
    db.kv_get(IMPORTED_KEY)
        .ok()
        .flatten()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn available(db: &Database) -> Vec<InstituteSyllabus> {
    let mut syllabi = data::coaching_syllabi();
    syllabi.extend(load_imported(db));
    syllabi
}

pub fn run(action: SyllabusAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        SyllabusAction::List => {
            for syllabus in available(&db) {
                println!(
                    "{} ({} chapters, {} timeline weeks)",
                    syllabus.name,
                    syllabus.chapters.len(),
                    syllabus.timeline.len()
                );
            }
        }
        SyllabusAction::Status {
            institute,
            week,
            json,
        } => {
            let syllabi = available(&db);
            let syllabus = match &institute {
                Some(name) => syllabi.iter().find(|s| s.name.eq_ignore_ascii_case(name)),
                None => syllabi.first(),
            };
            let Some(syllabus) = syllabus else {
                eprintln!("no syllabus matching {}", institute.as_deref().unwrap_or("(any)"));
                std::process::exit(1);
            };

            let now = chrono::Utc::now();
            let current_week = week.unwrap_or_else(|| study_week(now, academic_year_start(now)));
            let completed = completed_chapters(&db.load_planner());
            let report = analyze(syllabus, current_week, &completed);

            if json {
                let out = serde_json::json!({
                    "institute": syllabus.name,
                    "week": current_week,
                    "status": report.status.to_string(),
                    "to_cover": report.to_cover,
                    "behind": report.behind,
                    "ahead": report.ahead,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} | week {current_week}: {}", syllabus.name, report.status);
                for chapter in &report.to_cover {
                    let mark = if report.behind.contains(chapter) { " " } else { "x" };
                    println!("  [{mark}] {chapter}");
                }
                for chapter in &report.ahead {
                    println!("  [+] {chapter}");
                }
            }
        }
        SyllabusAction::Import { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let syllabus = InstituteSyllabus::from_json(&raw)?;
            let mut imported = load_imported(&db);
            imported.retain(|s| s.name != syllabus.name);
            let name = syllabus.name.clone();
            imported.push(syllabus);
            db.kv_set(IMPORTED_KEY, &serde_json::to_string(&imported)?)?;
            println!("imported {name}");
        }
    }

    Ok(())
}
