use clap::Args;
use studymate_core::data;
use studymate_core::Subject;

#[derive(Args)]
pub struct PredictArgs {
    /// Subject: physics, chemistry or mathematics
    subject: Subject,
    /// Print machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: PredictArgs) -> Result<(), Box<dyn std::error::Error>> {
    let history = data::historical_weightage();
    let forecast = history.predict(args.subject);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
    } else {
        println!("{} forecast (recency-weighted):", args.subject);
        for entry in &forecast {
            println!("  {:>5.1}%  {}", entry.value, entry.name);
        }
    }

    Ok(())
}
