use log::debug;
use std::env;

use recipe_scraper::{extract_source_name, fetch_recipe};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the URL from command-line arguments
    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let recipe = fetch_recipe(url)?;
    debug!("{:#?}", recipe);

    eprintln!("Source: {}", extract_source_name(url));
    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
