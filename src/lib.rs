pub mod config;
pub mod convert;
pub mod density;
pub mod duration;
pub mod error;
pub mod extractors;
pub mod ingredient;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod source;
pub mod units;

use log::debug;
use reqwest::header::{HeaderMap, CONTENT_TYPE, USER_AGENT};
use scraper::Html;
use std::time::Duration;

use crate::extractors::Extractor;

pub use crate::config::FetchConfig;
pub use crate::error::ScrapeError;
pub use crate::ingredient::parse_ingredient_line;
pub use crate::merge::{merge_ingredients, MergedIngredient, ShoppingListItem};
pub use crate::model::{Confidence, ParsedIngredientLine, ScrapedRecipe};
pub use crate::source::extract_source_name;

/// Scrape a recipe out of an HTML document. `None` means the page carried
/// no JSON-LD recipe data.
pub fn scrape_recipe(html: &str) -> Option<ScrapedRecipe> {
    let document = Html::parse_document(html);
    extractors::JsonLdExtractor.parse(&document)
}

/// Fetch a URL and scrape the recipe from its HTML.
pub fn fetch_recipe(url: &str) -> Result<ScrapedRecipe, ScrapeError> {
    let config = FetchConfig::load()?;
    fetch_recipe_with_config(url, &config)
}

pub fn fetch_recipe_with_config(
    url: &str,
    config: &FetchConfig,
) -> Result<ScrapedRecipe, ScrapeError> {
    // Set up headers with a user agent; many sites refuse obvious bots
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, config.user_agent.parse()?);

    let response = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()?
        .get(url)
        .headers(headers)
        .send()?
        .error_for_status()?;

    if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
        let content_type = content_type.to_str().unwrap_or("").to_string();
        if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
            return Err(ScrapeError::NotHtml(content_type));
        }
    }

    let body = response.text()?;
    debug!("Fetched {} bytes from {url}", body.len());

    scrape_recipe(&body).ok_or(ScrapeError::NoRecipeFound)
}
