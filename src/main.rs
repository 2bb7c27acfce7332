use clap::Parser;
use recipe_filter::config::fixture::RecipeFixture;
use recipe_filter::core::RecipeSurface;
use recipe_filter::utils::{logger, validation::Validate};
use recipe_filter::{FilterController, RecipePage};

#[derive(Parser)]
#[command(name = "recipe-filter")]
#[command(about = "Filters recipe cards from a page fixture by tag checkboxes")]
struct Args {
    /// Path to the recipe page fixture (TOML)
    #[arg(short, long, default_value = "recipe-page.toml")]
    fixture: String,

    /// Page URL; a `tag` query parameter seeds the initial filter state
    #[arg(long)]
    url: Option<String>,

    /// Tags to check, applied in order after URL seeding
    #[arg(long, value_delimiter = ',')]
    check: Vec<String>,

    /// Tags to uncheck, applied after --check
    #[arg(long, value_delimiter = ',')]
    uncheck: Vec<String>,

    /// Clear all filters before printing
    #[arg(long)]
    clear: bool,

    /// Print the visible cards as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading recipe page fixture from: {}", args.fixture);
    let fixture = match RecipeFixture::from_file(&args.fixture) {
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

    let page = RecipePage::from_fixture(fixture)?;
    let mut controller = FilterController::new(page);
    controller.refresh();

    if let Some(url) = &args.url {
        controller.seed_from_url(url)?;
    }

    for tag in &args.check {
        controller.toggle(tag, true);
    }
    for tag in &args.uncheck {
        controller.toggle(tag, false);
    }
    if args.clear {
        controller.clear_all_filters();
    }

    let total = controller.surface().card_count();
    let visible = controller.surface().visible_cards();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!("{} of {} cards visible", visible.len(), total);
    for card in &visible {
        let time = card
            .time_minutes
            .map(|minutes| format!("{} min", minutes))
            .unwrap_or_else(|| "unknown time".to_string());
        println!(
            "  {} ({}, {}, {}, {})",
            card.title, card.meal_type, card.cuisine, card.dietary, time
        );
    }

    Ok(())
}
