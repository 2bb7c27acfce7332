use clap::Parser;
use recipe_filter::config::fixture::ServicesFixture;
use recipe_filter::utils::{logger, validation::Validate};
use recipe_filter::{ServicesPage, TotalCalculator};

#[derive(Parser)]
#[command(name = "services-total")]
#[command(about = "Sums the prices of checked service items from a page fixture")]
struct Args {
    /// Path to the services page fixture (TOML)
    #[arg(short, long, default_value = "services-page.toml")]
    fixture: String,

    /// Item ids to check before computing the total
    #[arg(long, value_delimiter = ',')]
    check: Vec<String>,

    /// Item ids to uncheck before computing the total
    #[arg(long, value_delimiter = ',')]
    uncheck: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading services page fixture from: {}", args.fixture);
    let fixture = match ServicesFixture::from_file(&args.fixture) {
        Ok(fixture) => fixture,
        Err(e) => {
            eprintln!("❌ Failed to load fixture '{}': {}", args.fixture, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = fixture.validate() {
        eprintln!("❌ Invalid fixture '{}': {}", args.fixture, e);
        std::process::exit(1);
    }

    let page = ServicesPage::from_fixture(fixture)?;
    let mut calculator = TotalCalculator::new(page);
    calculator.recompute_total();

    for id in &args.check {
        calculator.toggle_item(id, true);
    }
    for id in &args.uncheck {
        calculator.toggle_item(id, false);
    }

    println!(
        "{}: {}",
        calculator.surface().total_element(),
        calculator.surface().total_text()
    );

    Ok(())
}
