use carb_estimator::{CarbEstimator, NutritionixClient, NutritionixConfig, ReportFormat};
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Estimate carbohydrates in a weighed portion of food",
    long_about = None
)]
struct Args {
    /// Food to look up, e.g. "apple"
    food: Option<String>,

    /// Weight of the portion in grams
    weight: Option<String>,

    /// Print the rows as JSON instead of a table
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn print_usage() {
    println!("Usage: carb-estimator \"food name\" weightInGrams");
    println!("Example: carb-estimator \"apple\" 200");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let (food, weight) = match (args.food.as_deref(), args.weight.as_deref()) {
        (Some(food), Some(weight)) => (food, weight),
        _ => {
            print_usage();
            return Ok(());
        }
    };

    let config = NutritionixConfig::from_env()?;
    let estimator = CarbEstimator::new(NutritionixClient::new(config)?);

    let format = if args.json {
        ReportFormat::Json
    } else {
        ReportFormat::Table
    };

    if let Err(e) = estimator.calculate_carbs(Some(food), Some(weight), format).await {
        eprintln!("Error in execution: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
