use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studymate-cli", version, about = "Studymate CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Elapsed study timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Countdown timer control
    Countdown {
        #[command(subcommand)]
        action: commands::countdown::CountdownAction,
    },
    /// Pomodoro cycle control
    Pomodoro {
        #[command(subcommand)]
        action: commands::pomodoro::PomodoroAction,
    },
    /// Weekly planner task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Syllabus pacing analysis
    Syllabus {
        #[command(subcommand)]
        action: commands::syllabus::SyllabusAction,
    },
    /// Chapter weightage forecast
    Predict(commands::predict::PredictArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Authentication management for calendar sync
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Study session history
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Text tools: summaries and question checking
    Tools {
        #[command(subcommand)]
        action: commands::tools::ToolsAction,
    },
    /// News bookmark management
    News {
        #[command(subcommand)]
        action: commands::news::NewsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Countdown { action } => commands::countdown::run(action),
        Commands::Pomodoro { action } => commands::pomodoro::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Syllabus { action } => commands::syllabus::run(action),
        Commands::Predict(args) => commands::predict::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Tools { action } => commands::tools::run(action),
        Commands::News { action } => commands::news::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
