use thiserror::Error;

/// Errors that can occur while fetching and scraping a recipe page
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch the page from the URL
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// The URL resolved to something that is not an HTML page
    #[error("URL does not point to an HTML page (content-type: {0})")]
    NotHtml(String),

    /// The page had no JSON-LD recipe data
    #[error("No recipe found in the page's JSON-LD data")]
    NoRecipeFound,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
