use std::path::PathBuf;

use clap::Parser;
use log::debug;

use pantry_chef::{ChefConfig, RecipeFinder, SelectionMode};

#[derive(Parser, Debug)]
#[command(name = "pantry-chef", version, about = "Pick a recipe you can cook with what is in your pantry")]
struct Cli {
    /// Diet to cook for (normal, vegetarian, vegan, pescatarian, gluten_free)
    #[arg(short, long)]
    diet: Option<String>,

    /// Pick a random makeable recipe instead of the most ready one
    #[arg(short, long)]
    random: bool,

    /// Seed for --random, for reproducible picks
    #[arg(long)]
    seed: Option<u64>,

    /// Pantry JSON file
    #[arg(short, long)]
    pantry: Option<PathBuf>,

    /// Recipe catalog JSON file (defaults to the bundled catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Print the readiness of every candidate recipe
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ChefConfig::load()?;
    debug!("{:#?}", config);

    let mut builder = RecipeFinder::builder().config(&config);
    if let Some(diet) = cli.diet {
        builder = builder.diet_tag(diet);
    }
    if cli.random {
        builder = builder.mode(SelectionMode::Random);
    }
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    if let Some(pantry) = cli.pantry {
        builder = builder.pantry_file(pantry);
    }
    if let Some(catalog) = cli.catalog {
        builder = builder.catalog_file(catalog);
    }

    let report = builder.report()?;

    if cli.explain {
        println!("Pantry:");
        for (name, quantity) in &report.pantry {
            println!("  {:>8}  {}", quantity, name);
        }
        println!();
        println!("Readiness for the {} diet:", report.diet);
        for candidate in &report.candidates {
            println!(
                "  {:>5.1}%  {}{}",
                candidate.readiness * 100.0,
                candidate.name,
                if candidate.makeable { "" } else { " (missing ingredients)" }
            );
        }
        println!();
    }

    match report.recipe {
        Some(name) => println!("{}", name),
        None => println!("No {} recipe can be made with the current pantry.", report.diet),
    }

    Ok(())
}
